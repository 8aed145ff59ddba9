//! Display strings the dashboard has always shown: thousands separators,
//! two-decimal percentages and USD prices.

/// Format `value` with `decimals` fraction digits and comma-grouped thousands,
/// e.g. `1234567.5` → `"1,234,567.50"`.
pub fn thousands(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let is_zero = rendered.chars().all(|c| c == '0' || c == '.');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    match frac_part {
        Some(f) => format!("{sign}{grouped}.{f}"),
        None => format!("{sign}{grouped}"),
    }
}

/// A [0, 1] fraction as a percentage string, e.g. `0.25` → `"25.00%"`.
pub fn fraction_as_percent(fraction: f64) -> String {
    percent(fraction * 100.0)
}

/// An already-scaled percentage, e.g. `12.3` → `"12.30%"`.
pub fn percent(value: f64) -> String {
    format!("{value:.2}%")
}

/// A USD amount, e.g. `1299.5` → `"$1,299.50"`.
pub fn usd(value: f64) -> String {
    if value < 0.0 {
        format!("-${}", thousands(-value, 2))
    } else {
        format!("${}", thousands(value, 2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thousands_groups_digits() {
        assert_eq!(thousands(1_234_567.5, 2), "1,234,567.50");
        assert_eq!(thousands(999.0, 2), "999.00");
        assert_eq!(thousands(1000.0, 0), "1,000");
        assert_eq!(thousands(0.0, 2), "0.00");
    }

    #[test]
    fn test_thousands_negative_values() {
        assert_eq!(thousands(-12_345.0, 1), "-12,345.0");
        assert_eq!(thousands(-0.001, 2), "0.00");
    }

    #[test]
    fn test_percent_strings() {
        assert_eq!(fraction_as_percent(0.25), "25.00%");
        assert_eq!(fraction_as_percent(0.1234), "12.34%");
        assert_eq!(percent(100.0), "100.00%");
    }

    #[test]
    fn test_usd() {
        assert_eq!(usd(189.99), "$189.99");
        assert_eq!(usd(1299.5), "$1,299.50");
        assert_eq!(usd(-5.0), "-$5.00");
    }
}
