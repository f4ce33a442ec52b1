//! Formatting helpers shared by explanations and the CLI.

use crate::types::Level;

/// Render a dimension value with its level name (e.g., "0.8 (high)").
pub fn describe_level(value: f64) -> String {
    match Level::from_value(value) {
        Some(level) => format!("{} ({})", value, level.as_str()),
        None => value.to_string(),
    }
}

/// Format a fraction in `[0, 1]` as a percentage with two decimals.
pub fn format_percent(fraction: f64) -> String {
    format!("{:.2}%", fraction * 100.0)
}

/// Format a distance the way ring listings show it.
pub fn format_distance(distance: f64) -> String {
    format!("{:.3}", distance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_level() {
        assert_eq!(describe_level(0.8), "0.8 (high)");
        assert_eq!(describe_level(0.5), "0.5 (mid)");
        assert_eq!(describe_level(0.35), "0.35");
    }

    #[test]
    fn test_format_percent() {
        assert_eq!(format_percent(0.5), "50.00%");
        assert_eq!(format_percent(0.0), "0.00%");
    }

    #[test]
    fn test_format_distance() {
        assert_eq!(format_distance(0.36124), "0.361");
    }
}
