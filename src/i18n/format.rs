//! Locale-aware formatting for dates, times, numbers, and percentages.
//!
//! Every formatter here takes an explicit [`Language`] and returns a
//! `String`; none of them can fail. When an input cannot be resolved to a
//! valid instant, the formatter returns the input's plain string coercion
//! instead of propagating an error — a formatting failure must never crash
//! a render path.
//!
//! Arabic output uses Eastern Arabic (Arabic-Indic) digits and the Arabic
//! decimal/grouping separators, matching what the platform formatter of the
//! admin panel produces for the `ar-SA` locale.

use crate::i18n::{Language, LookupMetrics};
use chrono::{DateTime, Locale, NaiveDate, NaiveDateTime, TimeZone, Utc};
use num_format::{Locale as NumLocale, ToFormattedString};
use std::fmt;

/// A date-like formatting input.
///
/// Accepts an already-constructed datetime, a calendar date, a millisecond
/// timestamp, or an ISO-like string. String inputs understand RFC 3339,
/// `YYYY-MM-DDTHH:MM:SS`, and bare `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq)]
pub enum DateInput {
    DateTime(DateTime<Utc>),
    Date(NaiveDate),
    TimestampMillis(i64),
    Text(String),
}

impl From<DateTime<Utc>> for DateInput {
    fn from(value: DateTime<Utc>) -> Self {
        DateInput::DateTime(value)
    }
}

impl From<NaiveDate> for DateInput {
    fn from(value: NaiveDate) -> Self {
        DateInput::Date(value)
    }
}

impl From<i64> for DateInput {
    fn from(value: i64) -> Self {
        DateInput::TimestampMillis(value)
    }
}

impl From<&str> for DateInput {
    fn from(value: &str) -> Self {
        DateInput::Text(value.to_string())
    }
}

impl From<String> for DateInput {
    fn from(value: String) -> Self {
        DateInput::Text(value)
    }
}

impl fmt::Display for DateInput {
    /// Plain string coercion, used as the fallback rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DateInput::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            DateInput::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            DateInput::TimestampMillis(ms) => write!(f, "{}", ms),
            DateInput::Text(s) => f.write_str(s),
        }
    }
}

impl DateInput {
    /// Resolve the input to a concrete UTC instant, if possible.
    pub fn resolve(&self) -> Option<DateTime<Utc>> {
        match self {
            DateInput::DateTime(dt) => Some(*dt),
            DateInput::Date(d) => d
                .and_hms_opt(0, 0, 0)
                .map(|ndt| Utc.from_utc_datetime(&ndt)),
            DateInput::TimestampMillis(ms) => Utc.timestamp_millis_opt(*ms).single(),
            DateInput::Text(s) => parse_date_text(s),
        }
    }
}

fn parse_date_text(s: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(ndt) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S") {
        return Some(Utc.from_utc_datetime(&ndt));
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return d.and_hms_opt(0, 0, 0).map(|ndt| Utc.from_utc_datetime(&ndt));
    }
    None
}

/// Month rendering style for [`format_date`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthStyle {
    /// Full month name ("February", "فبراير")
    #[default]
    Long,
    /// Abbreviated month name ("Feb")
    Short,
}

/// Options for [`format_date`].
#[derive(Debug, Clone, Copy, Default)]
pub struct DateOptions {
    pub month: MonthStyle,
}

/// chrono locale data for a language, per the registry's locale mapping.
fn chrono_locale(language: Language) -> Locale {
    match language.code() {
        "ar" => Locale::ar_SA,
        _ => Locale::en_US,
    }
}

/// Map ASCII digits to Eastern Arabic digits for Arabic output.
pub(crate) fn localize_digits(s: &str, language: Language) -> String {
    if language.code() != "ar" {
        return s.to_string();
    }
    s.chars()
        .map(|c| match c {
            '0'..='9' => {
                // U+0660 ARABIC-INDIC DIGIT ZERO onwards
                char::from_u32(0x0660 + (c as u32 - '0' as u32)).unwrap_or(c)
            }
            other => other,
        })
        .collect()
}

/// Record a fallback and return the input's plain string coercion.
pub(crate) fn coerce_fallback(input: &DateInput) -> String {
    LookupMetrics::global().record_format_fallback();
    tracing::warn!("Date formatting fell back to string coercion for {:?}", input);
    input.to_string()
}

/// Format a date-like value as a long localized date: numeric day, month
/// name, numeric year ("February 10, 2026" / "١٠ فبراير ٢٠٢٦").
pub fn format_date(value: impl Into<DateInput>, language: Language, options: DateOptions) -> String {
    let input = value.into();
    let Some(dt) = input.resolve() else {
        return coerce_fallback(&input);
    };

    let pattern = match (language.code(), options.month) {
        ("ar", MonthStyle::Long) => "%-d %B %Y",
        ("ar", MonthStyle::Short) => "%-d %b %Y",
        (_, MonthStyle::Long) => "%B %-d, %Y",
        (_, MonthStyle::Short) => "%b %-d, %Y",
    };
    let rendered = dt.format_localized(pattern, chrono_locale(language)).to_string();
    localize_digits(&rendered, language)
}

/// Format a date-like value as a short numeric date with 2-digit month and
/// day ("02/10/2026" / "١٠/٠٢/٢٠٢٦").
pub fn format_date_short(value: impl Into<DateInput>, language: Language) -> String {
    let input = value.into();
    let Some(dt) = input.resolve() else {
        return coerce_fallback(&input);
    };

    let pattern = match language.code() {
        "ar" => "%d/%m/%Y",
        _ => "%m/%d/%Y",
    };
    localize_digits(&dt.format(pattern).to_string(), language)
}

/// Format the time-of-day portion of a date-like value, 2-digit hour and
/// minute with the locale's day-period marker ("09:30 AM" / "٠٩:٣٠ ص").
pub fn format_time(value: impl Into<DateInput>, language: Language) -> String {
    let input = value.into();
    let Some(dt) = input.resolve() else {
        return coerce_fallback(&input);
    };

    let rendered = dt
        .format_localized("%I:%M %p", chrono_locale(language))
        .to_string();
    localize_digits(&rendered, language)
}

/// Format a date-like value as a long date plus hour/minute.
pub fn format_date_time(value: impl Into<DateInput>, language: Language) -> String {
    let input = value.into();
    if input.resolve().is_none() {
        return coerce_fallback(&input);
    }
    format!(
        "{} {}",
        format_date(input.clone(), language, DateOptions::default()),
        format_time(input, language)
    )
}

/// Options for [`format_number`].
#[derive(Debug, Clone, Copy)]
pub struct NumberOptions {
    pub minimum_fraction_digits: usize,
    pub maximum_fraction_digits: usize,
    pub use_grouping: bool,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 3,
            use_grouping: true,
        }
    }
}

/// Format a number with locale digit grouping and decimal separator.
///
/// Non-finite values fall back to their plain string form.
pub fn format_number(value: f64, language: Language, options: NumberOptions) -> String {
    if !value.is_finite() {
        LookupMetrics::global().record_format_fallback();
        tracing::warn!("Number formatting fell back for non-finite value {}", value);
        return value.to_string();
    }

    let max_digits = options
        .maximum_fraction_digits
        .max(options.minimum_fraction_digits);
    let formatted = format!("{:.*}", max_digits, value);
    let (sign, unsigned) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest.to_string()),
        None => ("", formatted),
    };

    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i.to_string(), f.to_string()),
        None => (unsigned, String::new()),
    };

    // Trim trailing zeros down to the minimum fraction digits.
    let mut frac = frac_part;
    while frac.len() > options.minimum_fraction_digits && frac.ends_with('0') {
        frac.pop();
    }

    let grouped = if options.use_grouping {
        match int_part.parse::<i64>() {
            Ok(n) => n.to_formatted_string(&NumLocale::en),
            // Magnitudes beyond i64 keep their plain digit run.
            Err(_) => int_part,
        }
    } else {
        int_part
    };

    let (group_sep, decimal_sep) = match language.code() {
        "ar" => ('\u{66C}', '\u{66B}'), // ٬ and ٫
        _ => (',', '.'),
    };

    let mut out = String::new();
    out.push_str(sign);
    for c in grouped.chars() {
        out.push(if c == ',' { group_sep } else { c });
    }
    if !frac.is_empty() {
        out.push(decimal_sep);
        out.push_str(&frac);
    }
    localize_digits(&out, language)
}

/// Format a fraction as a localized percentage with at most one fraction
/// digit: `0.855` renders as "85.5%" (or "٨٥٫٥٪" in Arabic).
pub fn format_percent(value: f64, language: Language) -> String {
    if !value.is_finite() {
        LookupMetrics::global().record_format_fallback();
        tracing::warn!("Percent formatting fell back for non-finite value {}", value);
        return value.to_string();
    }

    let number = format_number(
        value * 100.0,
        language,
        NumberOptions {
            minimum_fraction_digits: 0,
            maximum_fraction_digits: 1,
            use_grouping: true,
        },
    );
    let symbol = match language.code() {
        "ar" => "\u{66A}", // ٪
        _ => "%",
    };
    format!("{}{}", number, symbol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;
    use chrono::NaiveDate;

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 10).expect("valid date")
    }

    fn sample_datetime() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 2, 10, 9, 30, 0).unwrap()
    }

    // ==================== format_date Tests ====================

    #[test]
    fn test_format_date_english_long() {
        let s = format_date(sample_date(), Language::ENGLISH, DateOptions::default());
        assert!(s.contains("February"), "got {}", s);
        assert!(s.contains("10"));
        assert!(s.contains("2026"));
    }

    #[test]
    fn test_format_date_arabic_uses_arabic_digits() {
        let s = format_date(sample_date(), Language::ARABIC, DateOptions::default());
        assert!(s.contains("٢٠٢٦"), "got {}", s);
        assert!(!s.contains("2026"));
    }

    #[test]
    fn test_format_date_short_month_style() {
        let s = format_date(
            sample_date(),
            Language::ENGLISH,
            DateOptions {
                month: MonthStyle::Short,
            },
        );
        assert!(s.contains("Feb"), "got {}", s);
        assert!(!s.contains("February"));
    }

    #[test]
    fn test_format_date_accepts_iso_string() {
        let s = format_date("2026-02-10", Language::ENGLISH, DateOptions::default());
        assert!(s.contains("2026"));
        assert!(s.contains("February"));
    }

    #[test]
    fn test_format_date_accepts_rfc3339_string() {
        let s = format_date(
            "2026-02-10T09:30:00+00:00",
            Language::ENGLISH,
            DateOptions::default(),
        );
        assert!(s.contains("February"));
    }

    #[test]
    fn test_format_date_accepts_timestamp_millis() {
        let ms = sample_datetime().timestamp_millis();
        let s = format_date(ms, Language::ENGLISH, DateOptions::default());
        assert!(s.contains("2026"), "got {}", s);
    }

    // ==================== format_date_short Tests ====================

    #[test]
    fn test_format_date_short_english() {
        let s = format_date_short(sample_date(), Language::ENGLISH);
        assert_eq!(s, "02/10/2026");
    }

    #[test]
    fn test_format_date_short_arabic() {
        let s = format_date_short(sample_date(), Language::ARABIC);
        assert_eq!(s, "١٠/٠٢/٢٠٢٦");
    }

    // ==================== format_time Tests ====================

    #[test]
    fn test_format_time_english() {
        let s = format_time(sample_datetime(), Language::ENGLISH);
        assert!(s.starts_with("09:30"), "got {}", s);
        assert!(s.contains("AM"));
    }

    #[test]
    fn test_format_time_arabic_digits() {
        let s = format_time(sample_datetime(), Language::ARABIC);
        assert!(s.contains("٠٩:٣٠"), "got {}", s);
    }

    // ==================== format_date_time Tests ====================

    #[test]
    fn test_format_date_time_combines_both() {
        let s = format_date_time(sample_datetime(), Language::ENGLISH);
        assert!(s.contains("February"));
        assert!(s.contains("09:30"));
    }

    // ==================== Fallback Tests ====================

    #[test]
    fn test_invalid_text_falls_back_to_input() {
        let s = format_date("not-a-date", Language::ENGLISH, DateOptions::default());
        assert_eq!(s, "not-a-date");
    }

    #[test]
    fn test_invalid_text_falls_back_everywhere() {
        assert_eq!(format_date_short("garbage", Language::ARABIC), "garbage");
        assert_eq!(format_time("garbage", Language::ENGLISH), "garbage");
        assert_eq!(format_date_time("garbage", Language::ENGLISH), "garbage");
    }

    #[test]
    fn test_out_of_range_timestamp_falls_back_to_digits() {
        let s = format_date(i64::MAX, Language::ENGLISH, DateOptions::default());
        assert_eq!(s, i64::MAX.to_string());
    }

    // ==================== format_number Tests ====================

    #[test]
    fn test_format_number_grouping_english() {
        let s = format_number(1_234_567.0, Language::ENGLISH, NumberOptions::default());
        assert_eq!(s, "1,234,567");
    }

    #[test]
    fn test_format_number_grouping_arabic() {
        let s = format_number(1_234_567.0, Language::ARABIC, NumberOptions::default());
        assert_eq!(s, "١٬٢٣٤٬٥٦٧");
    }

    #[test]
    fn test_format_number_decimal_separator_arabic() {
        let s = format_number(2.5, Language::ARABIC, NumberOptions::default());
        assert_eq!(s, "٢٫٥");
    }

    #[test]
    fn test_format_number_trims_trailing_zeros() {
        let s = format_number(2.0, Language::ENGLISH, NumberOptions::default());
        assert_eq!(s, "2");
    }

    #[test]
    fn test_format_number_rounds_to_max_fraction_digits() {
        let s = format_number(1234.56789, Language::ENGLISH, NumberOptions::default());
        assert_eq!(s, "1,234.568");
    }

    #[test]
    fn test_format_number_minimum_fraction_digits() {
        let s = format_number(
            2.5,
            Language::ENGLISH,
            NumberOptions {
                minimum_fraction_digits: 3,
                maximum_fraction_digits: 3,
                use_grouping: true,
            },
        );
        assert_eq!(s, "2.500");
    }

    #[test]
    fn test_format_number_without_grouping() {
        let s = format_number(
            1_234_567.0,
            Language::ENGLISH,
            NumberOptions {
                use_grouping: false,
                ..NumberOptions::default()
            },
        );
        assert_eq!(s, "1234567");
    }

    #[test]
    fn test_format_number_negative() {
        let s = format_number(-1234.5, Language::ENGLISH, NumberOptions::default());
        assert_eq!(s, "-1,234.5");
    }

    #[test]
    fn test_format_number_nan_falls_back() {
        let s = format_number(f64::NAN, Language::ENGLISH, NumberOptions::default());
        assert_eq!(s, "NaN");
    }

    // ==================== format_percent Tests ====================

    #[test]
    fn test_format_percent_one_fraction_digit() {
        let s = format_percent(0.855, Language::ENGLISH);
        assert!(s.ends_with('%'));
        // At most one digit after the decimal point
        let numeric = s.trim_end_matches('%');
        let frac_len = numeric.split('.').nth(1).map(|f| f.len()).unwrap_or(0);
        assert!(frac_len <= 1, "got {}", s);
        assert!(s.starts_with("85.5") || s.starts_with("86"), "got {}", s);
    }

    #[test]
    fn test_format_percent_whole_value() {
        assert_eq!(format_percent(0.85, Language::ENGLISH), "85%");
    }

    #[test]
    fn test_format_percent_arabic() {
        let s = format_percent(0.85, Language::ARABIC);
        assert_eq!(s, "٨٥٪");
    }

    #[test]
    fn test_format_percent_zero() {
        assert_eq!(format_percent(0.0, Language::ENGLISH), "0%");
    }

    #[test]
    fn test_format_percent_over_one() {
        assert_eq!(format_percent(1.5, Language::ENGLISH), "150%");
    }

    // ==================== DateInput Tests ====================

    #[test]
    fn test_date_input_display_text_is_identity() {
        let input: DateInput = "whatever".into();
        assert_eq!(input.to_string(), "whatever");
    }

    #[test]
    fn test_date_input_resolve_iso_date() {
        let input: DateInput = "2026-02-10".into();
        let dt = input.resolve().expect("should parse");
        assert_eq!(dt.timestamp(), sample_datetime().timestamp() - 9 * 3600 - 30 * 60);
    }

    #[test]
    fn test_date_input_resolve_invalid_is_none() {
        let input: DateInput = "10/02/2026".into();
        assert!(input.resolve().is_none());
    }
}
