// logtally - core/income.rs
//
// Extraction and summation of decimal amounts embedded in free text.

use regex::Regex;
use std::sync::OnceLock;

fn amount_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only: `f64` parsing rejects other Unicode digits.
    // Pattern is a literal covered by the tests below.
    PATTERN.get_or_init(|| {
        Regex::new(r"[0-9]+\.[0-9]+").expect("income: invalid amount regex")
    })
}

/// Lazily yield every decimal amount (ASCII digits, a dot, ASCII digits)
/// found in `text`, left to right.
///
/// Whole numbers without a fractional part are not amounts and are skipped.
/// The iterator is single-pass; call again to rescan.
pub fn extract_numbers(text: &str) -> impl Iterator<Item = f64> + '_ {
    amount_pattern()
        .find_iter(text)
        .filter_map(|m| m.as_str().parse::<f64>().ok())
}

/// Sum every amount produced by `extractor` over `text`.
pub fn sum_profit<'a, F, I>(text: &'a str, extractor: F) -> f64
where
    F: FnOnce(&'a str) -> I,
    I: Iterator<Item = f64>,
{
    extractor(text).sum()
}

/// Render a total the way a float amount is conventionally shown: whole
/// values keep a trailing `.0` (`12.0`, `0.0`), others use the shortest
/// exact representation (`1368.46`).
pub fn format_total(total: f64) -> String {
    if total.is_finite() && total.fract() == 0.0 {
        format!("{total:.1}")
    } else {
        format!("{total}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::constants::INCOME_SAMPLE_TEXT;

    #[test]
    fn test_extracts_amounts_in_order() {
        let amounts: Vec<f64> = extract_numbers("paid 10.50 then 3.25, tip 0.75").collect();
        assert_eq!(amounts, vec![10.5, 3.25, 0.75]);
    }

    #[test]
    fn test_whole_numbers_are_skipped() {
        let amounts: Vec<f64> = extract_numbers("3 items for 12.00 on day 7").collect();
        assert_eq!(amounts, vec![12.0]);
    }

    #[test]
    fn test_no_amounts_sums_to_zero() {
        assert_eq!(sum_profit("nothing here", extract_numbers), 0.0);
    }

    #[test]
    fn test_sample_text_total() {
        let total = sum_profit(INCOME_SAMPLE_TEXT, extract_numbers);
        assert!((total - 1368.46).abs() < 1e-9, "got {total}");
    }

    #[test]
    fn test_custom_extractor() {
        let total = sum_profit("ignored", |_| [1.5, 2.5].into_iter());
        assert_eq!(total, 4.0);
    }

    #[test]
    fn test_format_total_keeps_decimal_point() {
        assert_eq!(format_total(sum_profit("paid 12.00", extract_numbers)), "12.0");
        assert_eq!(format_total(sum_profit("nothing", extract_numbers)), "0.0");
        assert_eq!(format_total(1368.46), "1368.46");
        assert_eq!(format_total(0.75), "0.75");
    }

    #[test]
    fn test_non_ascii_digits_are_not_amounts() {
        let amounts: Vec<f64> = extract_numbers("\u{663}.\u{665} and 1.5").collect();
        assert_eq!(amounts, vec![1.5]);
    }
}
