//! Currency formatting for tables and dashboard cards.

/// Format a currency value with two decimals and thousands separators,
/// e.g. `1234.5` → `"$1,234.50"`.
pub fn format_currency(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push(',');
        }
        result.push(*c);
    }
    let grouped: String = result.chars().rev().collect();

    if grouped.starts_with('-') {
        format!("-${}.{}", &grouped[1..], decimal_part)
    } else {
        format!("${}.{}", grouped, decimal_part)
    }
}

/// Display rule for revenue cells: an exact zero renders as a dash.
/// The underlying value is still zero everywhere outside display.
pub fn format_revenue(value: f64) -> String {
    if value == 0.0 {
        "—".to_string()
    } else {
        format_currency(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(70.0), "$70.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
    }

    #[test]
    fn test_format_revenue_zero_renders_dash() {
        assert_eq!(format_revenue(0.0), "—");
        assert_eq!(format_revenue(70.0), "$70.00");
        assert_eq!(format_revenue(0.004), "$0.00");
    }
}
