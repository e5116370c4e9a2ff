use serde::{Deserialize, Serialize};

use crate::i18n::Locale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "USD", alias = "usd")]
    Usd,
    #[serde(rename = "CRC", alias = "crc")]
    Crc,
}

impl Currency {
    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Usd => "$",
            Currency::Crc => "₡",
        }
    }
}

struct Separators {
    group: char,
    decimal: char,
}

// Deterministic stand-in for the Intl formatting the original UI relied on:
// en renders 1,234.56 while es renders 1.234,56.
fn separators(locale: Locale) -> Separators {
    match locale {
        Locale::En => Separators {
            group: ',',
            decimal: '.',
        },
        Locale::Es => Separators {
            group: '.',
            decimal: ',',
        },
    }
}

fn grouped_fixed(value: f64, fraction_digits: usize, locale: Locale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let separators = separators(locale);
    let formatted = format!("{:.fraction_digits$}", value.abs());
    let (integer_part, fraction_part) = match formatted.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::new();
    let digits = integer_part.len();
    for (offset, ch) in integer_part.chars().enumerate() {
        if offset > 0 && (digits - offset) % 3 == 0 {
            grouped.push(separators.group);
        }
        grouped.push(ch);
    }

    if let Some(fraction) = fraction_part {
        grouped.push(separators.decimal);
        grouped.push_str(fraction);
    }

    // Sign is decided after rounding so -0.001 at two fraction digits does
    // not render as a signed zero.
    let rounds_to_zero = !grouped.bytes().any(|b| b.is_ascii_digit() && b != b'0');
    if value < 0.0 && !rounds_to_zero {
        format!("-{grouped}")
    } else {
        grouped
    }
}

pub fn format_currency(value: f64, currency: Currency, locale: Locale) -> String {
    let grouped = grouped_fixed(value, 2, locale);
    match grouped.strip_prefix('-') {
        Some(magnitude) => format!("-{}{magnitude}", currency.symbol()),
        None => format!("{}{grouped}", currency.symbol()),
    }
}

pub fn format_number(value: f64, locale: Locale) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.fract() == 0.0 {
        return grouped_fixed(value, 0, locale);
    }
    let mut formatted = grouped_fixed(value, 3, locale);
    while formatted.ends_with('0') {
        formatted.pop();
    }
    let decimal = separators(locale).decimal;
    if formatted.ends_with(decimal) {
        formatted.pop();
    }
    formatted
}

pub fn format_percent(value: f64, locale: Locale) -> String {
    let scaled = grouped_fixed(value * 100.0, 2, locale);
    match locale {
        Locale::En => format!("{scaled}%"),
        Locale::Es => format!("{scaled} %"),
    }
}

/// Display clamp for charts and the table: negative balances render as zero
/// while exports keep the raw values.
pub fn clamp_to_zero_display(value: f64) -> f64 {
    if value < 0.0 { 0.0 } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_grouping_follows_locale_conventions() {
        assert_eq!(
            format_currency(1234567.891, Currency::Usd, Locale::En),
            "$1,234,567.89"
        );
        assert_eq!(
            format_currency(1234567.891, Currency::Crc, Locale::Es),
            "₡1.234.567,89"
        );
    }

    #[test]
    fn currency_keeps_two_fraction_digits_for_small_values() {
        assert_eq!(format_currency(0.5, Currency::Usd, Locale::En), "$0.50");
        assert_eq!(format_currency(999.999, Currency::Usd, Locale::En), "$1,000.00");
    }

    #[test]
    fn negative_currency_places_sign_before_symbol() {
        assert_eq!(
            format_currency(-1250.75, Currency::Usd, Locale::En),
            "-$1,250.75"
        );
        assert_eq!(
            format_currency(-1250.75, Currency::Crc, Locale::Es),
            "-₡1.250,75"
        );
    }

    #[test]
    fn negatives_rounding_to_zero_drop_the_sign() {
        assert_eq!(format_currency(-0.001, Currency::Usd, Locale::En), "$0.00");
        assert_eq!(format_currency(-0.005, Currency::Usd, Locale::En), "-$0.01");
        assert_eq!(format_percent(-0.000001, Locale::En), "0.00%");
    }

    #[test]
    fn plain_numbers_drop_trailing_fraction_zeros() {
        assert_eq!(format_number(480.0, Locale::En), "480");
        assert_eq!(format_number(12345.0, Locale::En), "12,345");
        assert_eq!(format_number(3.1400, Locale::En), "3.14");
        assert_eq!(format_number(3.1400, Locale::Es), "3,14");
    }

    #[test]
    fn percent_scales_fraction_and_respects_locale_spacing() {
        assert_eq!(format_percent(0.0853, Locale::En), "8.53%");
        assert_eq!(format_percent(0.0853, Locale::Es), "8,53 %");
        assert_eq!(format_percent(-0.5, Locale::En), "-50.00%");
    }

    #[test]
    fn non_finite_values_fall_back_to_debug_rendering() {
        assert_eq!(format_number(f64::INFINITY, Locale::En), "inf");
    }

    #[test]
    fn display_clamp_truncates_negatives_only() {
        assert_eq!(clamp_to_zero_display(-12.5), 0.0);
        assert_eq!(clamp_to_zero_display(12.5), 12.5);
        assert_eq!(clamp_to_zero_display(0.0), 0.0);
    }
}
