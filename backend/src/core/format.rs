//! Number and currency formatting for derivation trails and documents
//!
//! Native-unit figures print with thousands separators and at most three
//! fraction digits (trailing zeros trimmed). Yen amounts print as whole
//! numbers prefixed with `¥`.

/// Format a native-unit figure, e.g. `1234.5` -> `"1,234.5"`
///
/// # Example
/// ```
/// use fee_calculator_core_rs::core::format::format_native;
///
/// assert_eq!(format_native(500.0), "500");
/// assert_eq!(format_native(12_345.678_9), "12,345.679");
/// assert_eq!(format_native(7.5), "7.5");
/// ```
pub fn format_native(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_string();
    }

    let thousandths = (value.abs() * 1_000.0).round() as u64;
    let whole = thousandths / 1_000;
    let frac = thousandths % 1_000;
    let negative = value < 0.0 && thousandths > 0;

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if frac > 0 {
        let digits = format!("{:03}", frac);
        out.push('.');
        out.push_str(digits.trim_end_matches('0'));
    }
    out
}

/// Format a whole-yen amount, e.g. `340000` -> `"¥340,000"`
///
/// # Example
/// ```
/// use fee_calculator_core_rs::core::format::format_yen;
///
/// assert_eq!(format_yen(340_000), "¥340,000");
/// assert_eq!(format_yen(0), "¥0");
/// ```
pub fn format_yen(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}¥{}", sign, group_thousands(amount.unsigned_abs()))
}

/// Format a rate fraction as a percentage figure without the `%` sign
///
/// `0.005` -> `"0.5"`, `0.025` -> `"2.5"`.
pub fn format_rate_percent(rate: f64) -> String {
    format_native(rate * 100.0)
}

/// Format a percentage adjustment with an explicit `+` for positive values
///
/// Negative values already carry their sign: `10.0` -> `"+10"`,
/// `-15.0` -> `"-15"`.
pub fn format_signed_percent(percent: f64) -> String {
    if percent > 0.0 {
        format!("+{}", format_native(percent))
    } else {
        format_native(percent)
    }
}

fn group_thousands(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut groups = Vec::new();
    while value > 0 {
        groups.push(value % 1_000);
        value /= 1_000;
    }

    let mut out = groups.pop().map(|g| g.to_string()).unwrap_or_default();
    for group in groups.iter().rev() {
        out.push_str(&format!(",{:03}", group));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_native_grouping() {
        assert_eq!(format_native(0.0), "0");
        assert_eq!(format_native(999.0), "999");
        assert_eq!(format_native(1_000.0), "1,000");
        assert_eq!(format_native(1_234_567.0), "1,234,567");
    }

    #[test]
    fn test_format_native_fraction_digits() {
        assert_eq!(format_native(4.5), "4.5");
        assert_eq!(format_native(0.25), "0.25");
        assert_eq!(format_native(22.666_666), "22.667");
        assert_eq!(format_native(-15.0), "-15");
    }

    #[test]
    fn test_format_rate_percent_hides_float_noise() {
        assert_eq!(format_rate_percent(0.003), "0.3");
        assert_eq!(format_rate_percent(0.015), "1.5");
        assert_eq!(format_rate_percent(0.05), "5");
        assert_eq!(format_rate_percent(0.16), "16");
    }

    #[test]
    fn test_format_signed_percent() {
        assert_eq!(format_signed_percent(10.0), "+10");
        assert_eq!(format_signed_percent(-20.0), "-20");
        assert_eq!(format_signed_percent(0.0), "0");
    }

    #[test]
    fn test_format_yen() {
        assert_eq!(format_yen(1_020_000), "¥1,020,000");
        assert_eq!(format_yen(5_000), "¥5,000");
        assert_eq!(format_yen(-2_500), "-¥2,500");
    }
}
