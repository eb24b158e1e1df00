//! Number formatting shared by popups, metric cards and templates.

/// Format an integer with comma thousands separators (`1234567` -> `1,234,567`).
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Attach a unit to an already formatted number.
///
/// Percent signs and unitless indices are glued to the number, physical
/// units are separated by a space.
pub fn with_unit(number: &str, unit: &str) -> String {
    match unit {
        "" => number.to_string(),
        "%" => format!("{}%", number),
        other => format!("{} {}", number, other),
    }
}

/// Fixed-precision rendering followed by [`with_unit`].
pub fn format_measure(value: f64, decimals: usize, unit: &str) -> String {
    with_unit(&format!("{:.*}", decimals, value), unit)
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(800000), "800,000");
        assert_eq!(format_thousands(14000000), "14,000,000");
    }

    #[test]
    fn test_with_unit() {
        assert_eq!(with_unit("12.5", "%"), "12.5%");
        assert_eq!(with_unit("101.2", ""), "101.2");
        assert_eq!(with_unit("1.234", "mg/m³"), "1.234 mg/m³");
    }

    #[test]
    fn test_format_measure() {
        assert_eq!(format_measure(1.23456, 3, "ppm"), "1.235 ppm");
        assert_eq!(format_measure(7.0, 1, "%"), "7.0%");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(4.56789, 2), 4.57);
        assert_eq!(round_to(5.43219, 3), 5.432);
        assert_eq!(round_to(-1.26, 1), -1.3);
    }
}
