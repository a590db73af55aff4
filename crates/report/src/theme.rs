/// Straight (non-premultiplied) RGBA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(r, g, b, 255)
    }

    /// `alpha` is a fraction in `[0, 1]`.
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self(self.0, self.1, self.2, (alpha.clamp(0.0, 1.0) * 255.0).round() as u8)
    }

    pub fn to_css(self) -> String {
        if self.3 == 255 {
            format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
        } else {
            format!(
                "rgba({}, {}, {}, {:.2})",
                self.0,
                self.1,
                self.2,
                f32::from(self.3) / 255.0
            )
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BadgeColors {
    pub fill: Rgba,
    pub text: Rgba,
}

/// Two-stop gradient behind a headline metric card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accent {
    pub from: Rgba,
    pub to: Rgba,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardPalette {
    pub background: Rgba,
    pub panel: Rgba,
    pub text: Rgba,
    pub muted_text: Rgba,
    pub positive: Rgba,
    pub revenue_accent: Accent,
    pub profit_accent: Accent,
    pub score_accent: Accent,
    pub high_risk: BadgeColors,
    pub low_risk: BadgeColors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintPalette {
    pub font_stack: &'static str,
    pub text: Rgba,
    pub title: Rgba,
    pub meta: Rgba,
    pub rule: Rgba,
    pub border: Rgba,
    pub label_fill: Rgba,
    pub zebra_fill: Rgba,
    pub profit: Rgba,
    pub callout_fill: Rgba,
    pub summary_text: Rgba,
}

/// Read-only styling handed to the renderers. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub dashboard: DashboardPalette,
    pub print: PrintPalette,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            dashboard: DashboardPalette {
                background: Rgba::rgb(0x0f, 0x17, 0x2a),
                panel: Rgba::rgb(0x1e, 0x29, 0x3b).with_alpha(0.6),
                text: Rgba::rgb(0xe2, 0xe8, 0xf0),
                muted_text: Rgba::rgb(0x94, 0xa3, 0xb8),
                positive: Rgba::rgb(0x4a, 0xde, 0x80),
                revenue_accent: Accent {
                    from: Rgba::rgb(0x63, 0x66, 0xf1),
                    to: Rgba::rgb(0xa8, 0x55, 0xf7),
                },
                profit_accent: Accent {
                    from: Rgba::rgb(0x0e, 0xa5, 0xe9),
                    to: Rgba::rgb(0x22, 0xd3, 0xee),
                },
                score_accent: Accent {
                    from: Rgba::rgb(0xf5, 0x9e, 0x0b),
                    to: Rgba::rgb(0xf4, 0x3f, 0x5e),
                },
                high_risk: BadgeColors {
                    fill: Rgba::rgb(239, 68, 68).with_alpha(0.2),
                    text: Rgba::rgb(0xfc, 0xa5, 0xa5),
                },
                low_risk: BadgeColors {
                    fill: Rgba::rgb(34, 197, 94).with_alpha(0.2),
                    text: Rgba::rgb(0x86, 0xef, 0xac),
                },
            },
            print: PrintPalette {
                font_stack: "'Segoe UI', sans-serif",
                text: Rgba::rgb(0x1f, 0x29, 0x37),
                title: Rgba::rgb(0x31, 0x2e, 0x81),
                meta: Rgba::rgb(0x6b, 0x72, 0x80),
                rule: Rgba::rgb(0x63, 0x66, 0xf1),
                border: Rgba::rgb(0xe5, 0xe7, 0xeb),
                label_fill: Rgba::rgb(0xf3, 0xf4, 0xf6),
                zebra_fill: Rgba::rgb(0xf9, 0xfa, 0xfb),
                profit: Rgba::rgb(0x05, 0x96, 0x69),
                callout_fill: Rgba::rgb(0xf5, 0xf3, 0xff),
                summary_text: Rgba::rgb(0x37, 0x41, 0x51),
            },
        }
    }
}
