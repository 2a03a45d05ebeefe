use crate::model::metric::MonthlyMetric;

/// Shown wherever a value is absent.
pub const PLACEHOLDER: &str = "-";
pub const CURRENCY_SYMBOL: &str = "$";

pub fn format_currency(value: Option<f64>) -> String {
    match value.map(round_cents) {
        Some(v) if v < 0.0 => format!("-{}{}", CURRENCY_SYMBOL, group_number(v.abs())),
        Some(v) => format!("{}{}", CURRENCY_SYMBOL, group_number(v.abs())),
        None => PLACEHOLDER.to_string(),
    }
}

pub fn format_count(value: Option<f64>) -> String {
    match value.map(round_cents) {
        Some(v) if v < 0.0 => format!("-{}", group_number(v.abs())),
        Some(v) => group_number(v.abs()),
        None => PLACEHOLDER.to_string(),
    }
}

// Sign is decided after rounding, so -0.001 prints as 0.
fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Plan and fact strings for one table cell. A missing metric renders as
/// placeholders on both sides.
pub fn render_cell(
    metric: Option<&MonthlyMetric>,
    format: fn(Option<f64>) -> String,
) -> (String, String) {
    match metric {
        Some(m) => (format(m.plan), format(m.fact)),
        None => (PLACEHOLDER.to_string(), PLACEHOLDER.to_string()),
    }
}

// Comma-grouped integer part, at most two decimals, trailing zeros dropped.
fn group_number(value: f64) -> String {
    let rounded = format!("{:.2}", value);
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    if frac.is_empty() {
        grouped
    } else {
        format!("{}.{}", grouped, frac)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(Some(0.0)), "$0");
        assert_eq!(format_currency(Some(999.0)), "$999");
        assert_eq!(format_currency(Some(1000.0)), "$1,000");
        assert_eq!(format_currency(Some(1234567.0)), "$1,234,567");
        assert_eq!(format_currency(Some(1234.5)), "$1,234.5");
        assert_eq!(format_currency(Some(-2500.25)), "-$2,500.25");
    }

    #[test]
    fn test_absent_is_placeholder_not_zero() {
        assert_eq!(format_currency(None), "-");
        assert_eq!(format_count(None), "-");
    }

    #[test]
    fn test_values_rounding_to_zero_have_no_sign() {
        assert_eq!(format_currency(Some(-0.001)), "$0");
        assert_eq!(format_currency(Some(-0.004)), "$0");
        assert_eq!(format_currency(Some(-0.006)), "-$0.01");
        assert_eq!(format_count(Some(-0.001)), "0");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(Some(87.0)), "87");
        assert_eq!(format_count(Some(12000.0)), "12,000");
    }

    #[test]
    fn test_render_cell() {
        let metric = MonthlyMetric::new(Some(1500.0), None);
        assert_eq!(
            render_cell(Some(&metric), format_currency),
            ("$1,500".to_string(), "-".to_string())
        );
        assert_eq!(render_cell(None, format_count), ("-".to_string(), "-".to_string()));
    }
}
