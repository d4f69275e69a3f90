use std::sync::LazyLock;

use regex::Regex;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\s_]+").unwrap());
static DISALLOWED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^a-z0-9-]").unwrap());

/// Turns user input into a path segment for the Pokemon data API.
pub fn sanitize(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let joined = SEPARATORS.replace_all(&lowered, "-");

    DISALLOWED.replace_all(&joined, "").into_owned()
}

pub fn dex_number(id: u32) -> String {
    format!("#{id:03}")
}

/// Decimetres or hectograms to metres or kilograms with one decimal.
pub fn tenths(value: u32, unit: &str) -> String {
    format!("{:.1}{unit}", f64::from(value) / 10.0)
}
