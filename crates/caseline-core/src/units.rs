//! Authorization unit math.
//!
//! Unit counts travel as strings: they come from free-text form fields and
//! from a backend that is inconsistent about numbers versus numeric strings.
//! Parsing is forgiving — anything unparseable counts as zero.

/// Parse a unit-count field, treating blank or non-numeric input as 0.
pub fn parse_units(value: &str) -> f64 {
    value.trim().parse::<f64>().unwrap_or(0.0)
}

/// Balance units remaining on an authorization: approved minus serviced.
///
/// Returns the difference formatted with native float display ("3", "-2",
/// "2.5"). Recomputed on every edit of either operand and again during
/// submission cleanup, so a stale UI value can never reach the payload.
pub fn compute_balance(units_approved: &str, units_serviced: &str) -> String {
    let balance = parse_units(units_approved) - parse_units(units_serviced);
    format!("{balance}")
}
