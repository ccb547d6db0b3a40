//! Relative-time phrasing ("3 days ago", "in 2 hours", "قبل ٣ أيام").
//!
//! The unit walk uses fixed conversion constants — a 365-day year and a
//! 30-day month, no calendar arithmetic. Multi-month and multi-year spans
//! are therefore approximate; that imprecision is accepted behavior, not a
//! bug to fix with calendar math.

use crate::i18n::format::{coerce_fallback, localize_digits};
use crate::i18n::{DateInput, Language};
use chrono::{DateTime, Utc};

const SECOND_MS: i64 = 1_000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;
const WEEK_MS: i64 = 7 * DAY_MS;
const MONTH_MS: i64 = 30 * DAY_MS;
const YEAR_MS: i64 = 365 * DAY_MS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Unit {
    Year,
    Month,
    Week,
    Day,
    Hour,
    Minute,
    Second,
}

/// Ordered largest-first; the first unit whose threshold fits the absolute
/// difference wins.
const THRESHOLDS: [(i64, Unit); 7] = [
    (YEAR_MS, Unit::Year),
    (MONTH_MS, Unit::Month),
    (WEEK_MS, Unit::Week),
    (DAY_MS, Unit::Day),
    (HOUR_MS, Unit::Hour),
    (MINUTE_MS, Unit::Minute),
    (SECOND_MS, Unit::Second),
];

/// Select the reporting unit and signed magnitude for a millisecond
/// difference (positive = future). Differences under one second report
/// zero seconds.
pub(crate) fn relative_parts(diff_ms: i64) -> (i64, Unit) {
    for (unit_ms, unit) in THRESHOLDS {
        if diff_ms.abs() >= unit_ms {
            let magnitude = (diff_ms as f64 / unit_ms as f64).round() as i64;
            return (magnitude, unit);
        }
    }
    (0, Unit::Second)
}

fn english_unit_name(unit: Unit) -> &'static str {
    match unit {
        Unit::Year => "year",
        Unit::Month => "month",
        Unit::Week => "week",
        Unit::Day => "day",
        Unit::Hour => "hour",
        Unit::Minute => "minute",
        Unit::Second => "second",
    }
}

fn render_english(magnitude: i64, unit: Unit) -> String {
    if magnitude == 0 {
        return "now".to_string();
    }

    // Idioms the locale defines for single-step offsets.
    match (magnitude, unit) {
        (1, Unit::Day) => return "tomorrow".to_string(),
        (-1, Unit::Day) => return "yesterday".to_string(),
        (1, Unit::Week) => return "next week".to_string(),
        (-1, Unit::Week) => return "last week".to_string(),
        (1, Unit::Month) => return "next month".to_string(),
        (-1, Unit::Month) => return "last month".to_string(),
        (1, Unit::Year) => return "next year".to_string(),
        (-1, Unit::Year) => return "last year".to_string(),
        _ => {}
    }

    let n = magnitude.abs();
    let name = english_unit_name(unit);
    let plural = if n == 1 { "" } else { "s" };
    if magnitude < 0 {
        format!("{} {}{} ago", n, name, plural)
    } else {
        format!("in {} {}{}", n, name, plural)
    }
}

/// Arabic unit forms: (singular with "one", dual, 3–10 plural, 11+ singular
/// accusative). Number agreement follows standard Arabic counting rules.
fn arabic_unit_forms(unit: Unit) -> (&'static str, &'static str, &'static str, &'static str) {
    match unit {
        Unit::Year => ("سنة واحدة", "سنتين", "سنوات", "سنة"),
        Unit::Month => ("شهر واحد", "شهرين", "أشهر", "شهرًا"),
        Unit::Week => ("أسبوع واحد", "أسبوعين", "أسابيع", "أسبوعًا"),
        Unit::Day => ("يوم واحد", "يومين", "أيام", "يومًا"),
        Unit::Hour => ("ساعة واحدة", "ساعتين", "ساعات", "ساعة"),
        Unit::Minute => ("دقيقة واحدة", "دقيقتين", "دقائق", "دقيقة"),
        Unit::Second => ("ثانية واحدة", "ثانيتين", "ثوانٍ", "ثانية"),
    }
}

fn arabic_unit_phrase(unit: Unit, n: i64) -> String {
    let (one, two, few, many) = arabic_unit_forms(unit);
    match n {
        1 => one.to_string(),
        2 => two.to_string(),
        3..=10 => format!("{} {}", n, few),
        _ => format!("{} {}", n, many),
    }
}

fn render_arabic(magnitude: i64, unit: Unit) -> String {
    if magnitude == 0 {
        return "الآن".to_string();
    }

    match (magnitude, unit) {
        (1, Unit::Day) => return "غدًا".to_string(),
        (-1, Unit::Day) => return "أمس".to_string(),
        (1, Unit::Week) => return "الأسبوع القادم".to_string(),
        (-1, Unit::Week) => return "الأسبوع الماضي".to_string(),
        (1, Unit::Month) => return "الشهر القادم".to_string(),
        (-1, Unit::Month) => return "الشهر الماضي".to_string(),
        (1, Unit::Year) => return "السنة القادمة".to_string(),
        (-1, Unit::Year) => return "السنة الماضية".to_string(),
        _ => {}
    }

    let prefix = if magnitude < 0 { "قبل" } else { "بعد" };
    format!("{} {}", prefix, arabic_unit_phrase(unit, magnitude.abs()))
}

fn render(magnitude: i64, unit: Unit, language: Language) -> String {
    let rendered = match language.code() {
        "ar" => render_arabic(magnitude, unit),
        _ => render_english(magnitude, unit),
    };
    localize_digits(&rendered, language)
}

/// Express the difference between a date-like value and an explicit "now"
/// as a localized relative phrase.
///
/// This is the deterministic core of [`format_relative_time`]; unresolvable
/// inputs degrade to their plain string form.
pub fn format_relative_time_from(
    value: impl Into<DateInput>,
    now: DateTime<Utc>,
    language: Language,
) -> String {
    let input = value.into();
    let Some(target) = input.resolve() else {
        return coerce_fallback(&input);
    };

    let diff_ms = target.timestamp_millis() - now.timestamp_millis();
    let (magnitude, unit) = relative_parts(diff_ms);
    render(magnitude, unit, language)
}

/// Express the difference between a date-like value and the current instant
/// as a localized relative phrase ("3 days ago", "in 2 hours").
pub fn format_relative_time(value: impl Into<DateInput>, language: Language) -> String {
    format_relative_time_from(value, Utc::now(), language)
}
