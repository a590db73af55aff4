//! Value formatting shared by both renderers. Numbers use the shortest
//! representation that round-trips; nothing is rounded here.

pub const CURRENCY_SYMBOL: &str = "₹";

pub fn currency(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{value}")
}

pub fn percent(value: f64) -> String {
    format!("{value}%")
}

pub fn score(value: u32) -> String {
    format!("{value}/100")
}
