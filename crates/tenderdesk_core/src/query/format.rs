//! Display formatting for monetary amounts, fractions and file sizes.

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// `4500000.0` -> `"$4,500,000"`. Rounds to whole units.
pub fn format_currency(value: f64) -> String {
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}")
}

/// `4500000.0` -> `"$4.5M"`.
pub fn format_millions(value: f64) -> String {
    format!("${:.1}M", value / 1_000_000.0)
}

/// `0.18` -> `"18.0%"`.
pub fn format_fraction_percent(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// `Some(2_516_582)` -> `"2.4 MB"`, `None` -> `"Unknown"`.
pub fn format_file_size(size_bytes: Option<u64>) -> String {
    match size_bytes {
        Some(bytes) if bytes > 0 => format!("{:.1} MB", bytes as f64 / BYTES_PER_MIB),
        _ => "Unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{format_currency, format_file_size, format_fraction_percent, format_millions};

    #[test]
    fn currency_groups_thousands() {
        assert_eq!(format_currency(4_500_000.0), "$4,500,000");
        assert_eq!(format_currency(890_000.0), "$890,000");
        assert_eq!(format_currency(999.6), "$1,000");
        assert_eq!(format_currency(0.0), "$0");
    }

    #[test]
    fn millions_use_one_decimal() {
        assert_eq!(format_millions(12_460_000.0), "$12.5M");
        assert_eq!(format_millions(3_200_000.0), "$3.2M");
    }

    #[test]
    fn fractions_render_as_percent() {
        assert_eq!(format_fraction_percent(0.18), "18.0%");
        assert_eq!(format_fraction_percent(0.125), "12.5%");
    }

    #[test]
    fn file_size_in_mebibytes() {
        assert_eq!(format_file_size(Some(2_516_582)), "2.4 MB");
        assert_eq!(format_file_size(None), "Unknown");
        assert_eq!(format_file_size(Some(0)), "Unknown");
    }
}
