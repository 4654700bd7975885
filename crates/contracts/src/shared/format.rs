//! Display formatting for amounts, durations and dates.
//!
//! Mirrors what the browser's `Intl` facilities produce for the handful of
//! locales the back office is used in, so the output is identical on the
//! host (tests) and in wasm.

use chrono::NaiveDate;

pub const DEFAULT_CURRENCY: &str = "NPR";
pub const DEFAULT_LOCALE: &str = "en-US";

/// Locales with known digit grouping. Anything else formats as `en-US`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    EnGb,
    EnIn,
    DeDe,
    FrFr,
}

impl Locale {
    /// Parse a BCP 47 tag such as `"en-US"` or `"de_DE"`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.replace('_', "-").to_ascii_lowercase().as_str() {
            "en-gb" => Locale::EnGb,
            "en-in" => Locale::EnIn,
            "de" | "de-de" => Locale::DeDe,
            "fr" | "fr-fr" => Locale::FrFr,
            _ => Locale::EnUs,
        }
    }

    fn group_separator(&self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::EnIn => ",",
            Locale::DeDe => ".",
            Locale::FrFr => "\u{202f}",
        }
    }

    fn decimal_separator(&self) -> &'static str {
        match self {
            Locale::EnUs | Locale::EnGb | Locale::EnIn => ".",
            Locale::DeDe | Locale::FrFr => ",",
        }
    }

    /// Continental locales put the currency after the amount.
    fn currency_after_amount(&self) -> bool {
        matches!(self, Locale::DeDe | Locale::FrFr)
    }
}

/// Currency symbol as the locale writes it; `None` means print the ISO code.
///
/// Locales outside a currency's home region disambiguate the dollar
/// (`US$` in en-GB, `$US` in fr-FR).
fn currency_symbol(code: &str, locale: Locale) -> Option<&'static str> {
    match (code, locale) {
        ("USD", Locale::EnGb) => Some("US$"),
        ("USD", Locale::FrFr) => Some("$US"),
        ("USD", _) => Some("$"),
        ("EUR", _) => Some("€"),
        ("GBP", Locale::FrFr) => Some("£GB"),
        ("GBP", _) => Some("£"),
        ("INR", _) => Some("₹"),
        ("JPY", Locale::EnGb | Locale::EnIn) => Some("JP¥"),
        ("JPY", Locale::FrFr) => None,
        ("JPY", _) => Some("¥"),
        _ => None,
    }
}

/// Insert group separators into a run of ASCII digits.
///
/// `en-IN` groups the last three digits, then pairs (`10,00,000`).
fn group_digits(digits: &str, locale: Locale) -> String {
    let separator = locale.group_separator();
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 2);

    for (i, ch) in digits.chars().enumerate() {
        let remaining = len - i;
        let boundary = match locale {
            Locale::EnIn => remaining == 3 || (remaining > 3 && (remaining - 3) % 2 == 0),
            _ => remaining % 3 == 0,
        };
        if i > 0 && boundary {
            result.push_str(separator);
        }
        result.push(ch);
    }

    result
}

/// Format a number with locale grouping and at most `max_fraction` decimals.
///
/// Rounds half away from zero and drops trailing fractional zeros.
pub fn format_number(value: f64, max_fraction: u32, locale: Locale) -> String {
    let scale = 10f64.powi(max_fraction as i32);
    let rounded = (value.abs() * scale).round() / scale;
    let negative = value.is_sign_negative() && rounded != 0.0;

    let fixed = format!("{:.*}", max_fraction as usize, rounded);
    let (integer_part, fraction_part) = match fixed.split_once('.') {
        Some((int, frac)) => (int, frac.trim_end_matches('0')),
        None => (fixed.as_str(), ""),
    };

    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&group_digits(integer_part, locale));
    if !fraction_part.is_empty() {
        result.push_str(locale.decimal_separator());
        result.push_str(fraction_part);
    }
    result
}

/// Format a monetary amount.
///
/// NPR is shown as `Rs. 2,758`. Other currencies use the locale's currency
/// layout with no fraction digits (`$1,000,000`, `1.000.000 €`); codes
/// without a known symbol print the code itself.
pub fn format_currency(amount: f64, currency: &str, locale: &str) -> String {
    let locale = Locale::from_tag(locale);

    if currency == "NPR" {
        return format!("Rs. {}", format_number(amount, 3, locale));
    }

    let number = format_number(amount.abs(), 0, locale);
    let sign = if amount.is_sign_negative() && number != "0" {
        "-"
    } else {
        ""
    };

    match (currency_symbol(currency, locale), locale.currency_after_amount()) {
        (Some(symbol), false) => format!("{}{}{}", sign, symbol, number),
        (None, false) => format!("{}{}\u{a0}{}", sign, currency, number),
        (Some(symbol), true) => format!("{}{}\u{a0}{}", sign, number, symbol),
        (None, true) => format!("{}{}\u{a0}{}", sign, number, currency),
    }
}

/// [`format_currency`] with the back office defaults (NPR, en-US).
pub fn format_currency_default(amount: f64) -> String {
    format_currency(amount, DEFAULT_CURRENCY, DEFAULT_LOCALE)
}

/// Countdown display: `HHh : MMm : SSs`.
///
/// Hours are not rolled over into days, so 100 hours prints as `100h`.
pub fn format_time_remaining(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let secs = seconds % 60;

    format!("{:02}h : {:02}m : {:02}s", hours, minutes, secs)
}

/// Short date in the locale's usual order (`Mar 15, 2024` for en-US).
pub fn format_date(date: NaiveDate, locale: &str) -> String {
    let pattern = match Locale::from_tag(locale) {
        Locale::EnUs => "%b %-d, %Y",
        Locale::EnGb | Locale::EnIn => "%-d %b %Y",
        Locale::DeDe => "%d.%m.%Y",
        Locale::FrFr => "%d/%m/%Y",
    };
    date.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency_npr() {
        assert_eq!(format_currency(2758.0, "NPR", "en-US"), "Rs. 2,758");
        assert_eq!(format_currency(100.0, "NPR", "en-US"), "Rs. 100");
        assert_eq!(format_currency(1234567.5, "NPR", "en-US"), "Rs. 1,234,567.5");
        assert_eq!(format_currency(0.1234, "NPR", "en-US"), "Rs. 0.123");
        assert_eq!(format_currency_default(599.0), "Rs. 599");
    }

    #[test]
    fn test_format_currency_npr_follows_locale_grouping() {
        assert_eq!(format_currency(1000000.0, "NPR", "en-IN"), "Rs. 10,00,000");
        assert_eq!(format_currency(2758.0, "NPR", "de-DE"), "Rs. 2.758");
    }

    #[test]
    fn test_format_currency_other_codes() {
        assert_eq!(format_currency(1000000.0, "USD", "en-US"), "$1,000,000");
        assert_eq!(format_currency(1234.5, "USD", "en-US"), "$1,235");
        assert_eq!(format_currency(-5.0, "USD", "en-US"), "-$5");
        assert_eq!(format_currency(1000000.0, "EUR", "de-DE"), "1.000.000\u{a0}€");
        assert_eq!(format_currency(1000.0, "XYZ", "en-US"), "XYZ\u{a0}1,000");
        assert_eq!(format_currency(1000000.0, "INR", "en-IN"), "₹10,00,000");
    }

    #[test]
    fn test_format_currency_symbol_depends_on_locale() {
        assert_eq!(format_currency(1000000.0, "USD", "en-GB"), "US$1,000,000");
        assert_eq!(
            format_currency(1000000.0, "USD", "fr-FR"),
            "1\u{202f}000\u{202f}000\u{a0}$US"
        );
        assert_eq!(format_currency(1000000.0, "USD", "de-DE"), "1.000.000\u{a0}$");
        assert_eq!(format_currency(500.0, "GBP", "en-GB"), "£500");
        assert_eq!(format_currency(500.0, "GBP", "fr-FR"), "500\u{a0}£GB");
        assert_eq!(format_currency(500.0, "JPY", "en-GB"), "JP¥500");
        assert_eq!(format_currency(500.0, "JPY", "fr-FR"), "500\u{a0}JPY");
    }

    #[test]
    fn test_unknown_locale_falls_back() {
        assert_eq!(Locale::from_tag("ne-NP"), Locale::EnUs);
        assert_eq!(Locale::from_tag("de_DE"), Locale::DeDe);
        assert_eq!(format_currency(2758.0, "NPR", "xx"), "Rs. 2,758");
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0.0, 0, Locale::EnUs), "0");
        assert_eq!(format_number(-0.2, 0, Locale::EnUs), "0");
        assert_eq!(format_number(-1234.0, 0, Locale::EnUs), "-1,234");
        assert_eq!(format_number(999.0, 0, Locale::EnUs), "999");
        assert_eq!(format_number(1234.56, 2, Locale::FrFr), "1\u{202f}234,56");
    }

    #[test]
    fn test_format_time_remaining() {
        assert_eq!(format_time_remaining(86400), "24h : 00m : 00s");
        assert_eq!(format_time_remaining(0), "00h : 00m : 00s");
        assert_eq!(format_time_remaining(3661), "01h : 01m : 01s");
        assert_eq!(format_time_remaining(86399), "23h : 59m : 59s");
        assert_eq!(format_time_remaining(360000), "100h : 00m : 00s");
    }

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date, "en-US"), "Mar 5, 2024");
        assert_eq!(format_date(date, "en-GB"), "5 Mar 2024");
        assert_eq!(format_date(date, "de-DE"), "05.03.2024");
    }
}
