// ── Number formatting for display values ──

/// Format `value` with a fixed number of decimals and grouped thousands.
///
/// `group_thousands(1234.5, 2, ',', '.')` gives `"1,234.50"`; swapping the
/// separators gives the German style `"1.234,50"`.
pub fn group_thousands(value: f64, decimals: usize, group_sep: char, decimal_sep: char) -> String {
    let fixed = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match fixed.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (fixed.as_str(), None),
    };

    let digits = int_part.len();
    let mut out = String::with_capacity(fixed.len() + digits / 3 + 1);
    if value.is_sign_negative() && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            out.push(group_sep);
        }
        out.push(ch);
    }
    if let Some(frac) = frac_part {
        out.push(decimal_sep);
        out.push_str(frac);
    }
    out
}

/// US-style grouping with two decimals: `1,234.50`.
pub fn en_us(value: f64) -> String {
    group_thousands(value, 2, ',', '.')
}

/// German-style grouping with two decimals: `1.234,50`.
pub fn de_de(value: f64) -> String {
    group_thousands(value, 2, '.', ',')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_us_style() {
        assert_eq!(en_us(0.0), "0.00");
        assert_eq!(en_us(999.999), "1,000.00");
        assert_eq!(en_us(1_234_567.891), "1,234,567.89");
    }

    #[test]
    fn groups_german_style() {
        assert_eq!(de_de(1234.5), "1.234,50");
        assert_eq!(de_de(12.0), "12,00");
    }

    #[test]
    fn keeps_sign_but_not_negative_zero() {
        assert_eq!(en_us(-1500.0), "-1,500.00");
        assert_eq!(en_us(-0.001), "0.00");
    }

    #[test]
    fn zero_decimals_has_no_separator() {
        assert_eq!(group_thousands(1_000_000.0, 0, ' ', ','), "1 000 000");
    }
}
