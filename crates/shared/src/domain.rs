use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

macro_rules! code_enum {
    ($name:ident, $kind:literal, { $($variant:ident => $code:literal),+ $(,)? }) => {
        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn code(self) -> &'static str {
                match self {
                    $($name::$variant => $code),+
                }
            }

            pub fn from_code(code: &str) -> Option<Self> {
                match code.trim() {
                    $($code => Some($name::$variant),)+
                    _ => None,
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $name {
            type Err = UnsupportedCode;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_code(s).ok_or_else(|| UnsupportedCode {
                    kind: $kind,
                    value: s.to_string(),
                })
            }
        }
    };
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported {kind}: {value:?}")]
pub struct UnsupportedCode {
    pub kind: &'static str,
    pub value: String,
}

/// Industry category sent alongside the document; the backend benchmarks
/// margins against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Industry {
    #[default]
    Services,
    Manufacturing,
    Retail,
    Technology,
}

code_enum!(Industry, "industry", {
    Services => "Services",
    Manufacturing => "Manufacturing",
    Retail => "Retail",
    Technology => "Technology",
});

/// UI language. The backend localizes `*_display` fields into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    En,
    Ta,
    Hi,
    Ml,
}

code_enum!(Language, "language", {
    En => "en",
    Ta => "ta",
    Hi => "hi",
    Ml => "ml",
});

impl Language {
    /// Unknown codes resolve to the default language instead of failing.
    pub fn resolve(code: &str) -> Self {
        Self::from_code(code).unwrap_or_default()
    }

    /// Native name shown in the language picker.
    pub fn native_name(self) -> &'static str {
        match self {
            Language::En => "English (Global)",
            Language::Ta => "தமிழ் (Tamil)",
            Language::Hi => "हिंदी (Hindi)",
            Language::Ml => "മലയാളം (Malayalam)",
        }
    }
}
