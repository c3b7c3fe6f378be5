/// Parse a boolean the way query strings and loosely typed clients spell it.
///
/// Accepts `true/false`, `1/0`, `yes/no`, `on/off`, `t/f` and `y/n`, ignoring case
/// and surrounding whitespace.
#[must_use]
pub fn parse_lenient_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

/// Parse a decimal number, rejecting empty input.
#[must_use]
pub fn parse_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
