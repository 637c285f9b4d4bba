/// Formats a rate value with two decimal places and comma thousands separators,
/// e.g. `16500.5` -> `"16,500.50"`.
pub fn format_rate(value: f64) -> String {
    let rendered = format!("{value:.2}");
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some(parts) => parts,
        None => (rendered.as_str(), "00"),
    };

    let (sign, digits) = match int_part.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", int_part),
    };

    let bytes = digits.as_bytes();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*b as char);
    }

    format!("{sign}{grouped}.{frac_part}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_groups_thousands() {
        assert_eq!(format_rate(16500.5), "16,500.50");
        assert_eq!(format_rate(1234567.891), "1,234,567.89");
    }

    #[test]
    fn test_small_values_untouched() {
        assert_eq!(format_rate(0.0), "0.00");
        assert_eq!(format_rate(999.999), "1,000.00");
        assert_eq!(format_rate(12.3), "12.30");
    }

    #[test]
    fn test_exact_group_boundary() {
        assert_eq!(format_rate(100.0), "100.00");
        assert_eq!(format_rate(1000.0), "1,000.00");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(format_rate(-16500.5), "-16,500.50");
    }
}
