//! Number formatting for cards and case amounts

/// Insert `,` every three digits of an unsigned digit string
fn group_thousands(digits: &str) -> String {
    let mut result = String::new();
    for (i, c) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a number with a thousands separator and the given decimals
///
/// ```text
/// format_number_with_decimals(1234.567, 2) == "1,234.57"
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return "—".to_string();
    }

    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (formatted.as_str(), None),
    };

    let mut result = group_thousands(integer_part);
    if let Some(d) = decimal_part {
        result.push('.');
        result.push_str(d);
    }

    // "-0.00" is not worth showing
    if value < 0.0 && result.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.insert(0, '-');
    }
    result
}

/// Dollar amount with two decimals, e.g. `$1,234.50`
pub fn format_money(value: f64) -> String {
    let formatted = format_number_with_decimals(value, 2);
    match formatted.strip_prefix('-') {
        Some(abs) => format!("-${}", abs),
        None if value.is_finite() => format!("${}", formatted),
        None => formatted,
    }
}

/// Whole count with a thousands separator
pub fn format_count(value: i64) -> String {
    let grouped = group_thousands(&value.unsigned_abs().to_string());
    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
