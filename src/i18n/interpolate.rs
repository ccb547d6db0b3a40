//! String template interpolation.
//!
//! Translation strings may embed placeholder tokens in two syntaxes,
//! double-brace (`{{name}}`) and single-brace (`{count}`); both occur in the
//! catalog and both are supported. Interpolation is literal key
//! substitution only: no nesting, no conditionals, no pluralization.
//!
//! A placeholder with no matching substitution is left verbatim in the
//! output. A missing substitution should never crash a view; a visible raw
//! token is the intended degradation.

use crate::i18n::{translations, Language, LookupMetrics};
use regex::{Captures, Regex};
use std::collections::BTreeSet;
use std::fmt;
use std::sync::OnceLock;

/// Placeholder pattern. Double-brace form first so `{{name}}` is never
/// misread as a single-brace token wrapped in literal braces.
static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

fn placeholder_regex() -> &'static Regex {
    PLACEHOLDER_REGEX.get_or_init(|| {
        Regex::new(r"\{\{([A-Za-z0-9_]+)\}\}|\{([A-Za-z0-9_]+)\}").unwrap()
    })
}

/// A substitution value: string, integer, or float.
///
/// Values are rendered with their plain string form — locale-aware number
/// rendering is the job of the formatting layer, not interpolation.
#[derive(Debug, Clone, PartialEq)]
pub enum ArgValue {
    Str(String),
    Int(i64),
    Float(f64),
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgValue::Str(s) => f.write_str(s),
            ArgValue::Int(n) => write!(f, "{}", n),
            ArgValue::Float(x) => write!(f, "{}", x),
        }
    }
}

impl From<&str> for ArgValue {
    fn from(value: &str) -> Self {
        ArgValue::Str(value.to_string())
    }
}

impl From<String> for ArgValue {
    fn from(value: String) -> Self {
        ArgValue::Str(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        ArgValue::Int(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        ArgValue::Int(value as i64)
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        ArgValue::Int(value as i64)
    }
}

impl From<usize> for ArgValue {
    fn from(value: usize) -> Self {
        ArgValue::Int(value as i64)
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        ArgValue::Float(value)
    }
}

/// Replace every recognized placeholder in `template` with the string form
/// of its substitution value.
///
/// Placeholders with no matching key are left verbatim (and counted in the
/// lookup metrics).
///
/// # Example
/// ```ignore
/// let s = interpolate("Hello {{name}}", &[("name", "Sara".into())]);
/// assert_eq!(s, "Hello Sara");
/// ```
pub fn interpolate(template: &str, args: &[(&str, ArgValue)]) -> String {
    let mut missing: Vec<String> = Vec::new();

    let result = placeholder_regex().replace_all(template, |caps: &Captures| {
        let key = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();

        match args.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => value.to_string(),
            None => {
                missing.push(key.to_string());
                caps[0].to_string()
            }
        }
    });

    if !missing.is_empty() {
        let metrics = LookupMetrics::global();
        for _ in &missing {
            metrics.record_missing_placeholder();
        }
        tracing::warn!(
            "Unsubstituted placeholders {:?} in template {:?}",
            missing,
            template
        );
    }

    result.into_owned()
}

/// Extract the set of placeholder names in a template.
///
/// Used by the catalog validator to compare placeholder usage between
/// languages.
pub(crate) fn placeholder_names(template: &str) -> BTreeSet<String> {
    placeholder_regex()
        .captures_iter(template)
        .filter_map(|caps| {
            caps.get(1)
                .or_else(|| caps.get(2))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}

/// Resolve a dotted key path against the catalog for `language` and
/// interpolate the result.
///
/// A path that resolves to nothing returns the path itself rather than
/// blanking the field: the miss stays visible on screen, is counted in the
/// metrics, and is logged. Struct access on [`translations`] remains the
/// statically-checked surface; this helper exists for view code that keeps
/// key paths in data.
///
/// # Example
/// ```ignore
/// let msg = t(Language::ENGLISH, "announcements.dialog.delete_description",
///             &[("title", "Exam week".into())]);
/// ```
pub fn t(language: Language, path: &str, args: &[(&str, ArgValue)]) -> String {
    let metrics = LookupMetrics::global();
    metrics.record_lookup();

    match translations(language).get(path) {
        Some(template) => interpolate(template, args),
        None => {
            metrics.record_missing_key();
            tracing::warn!(
                "Missing catalog entry {:?} for language {:?}",
                path,
                language.code()
            );
            path.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    // ==================== Double-Brace Tests ====================

    #[test]
    fn test_interpolate_double_brace() {
        let result = interpolate("Hello {{name}}", &[("name", "Sara".into())]);
        assert_eq!(result, "Hello Sara");
    }

    #[test]
    fn test_interpolate_double_brace_multiple() {
        let result = interpolate(
            "{{greeting}}, {{name}}!",
            &[("greeting", "Welcome".into()), ("name", "Ahmad".into())],
        );
        assert_eq!(result, "Welcome, Ahmad!");
    }

    #[test]
    fn test_interpolate_double_brace_repeated() {
        let result = interpolate("{{x}} and {{x}}", &[("x", "again".into())]);
        assert_eq!(result, "again and again");
    }

    // ==================== Single-Brace Tests ====================

    #[test]
    fn test_interpolate_single_brace() {
        let result = interpolate("Total: {count}", &[("count", 7.into())]);
        assert_eq!(result, "Total: 7");
    }

    #[test]
    fn test_interpolate_mixed_syntaxes() {
        let result = interpolate(
            "{{name}} has {count} circles",
            &[("name", "Fatimah".into()), ("count", 3.into())],
        );
        assert_eq!(result, "Fatimah has 3 circles");
    }

    // ==================== Missing Key Tests ====================

    #[test]
    fn test_interpolate_missing_key_left_verbatim() {
        let result = interpolate("Hello {{name}}", &[]);
        assert_eq!(result, "Hello {{name}}");
    }

    #[test]
    fn test_interpolate_missing_single_brace_left_verbatim() {
        let result = interpolate("Total: {count}", &[("other", 1.into())]);
        assert_eq!(result, "Total: {count}");
    }

    #[test]
    fn test_interpolate_partial_substitution() {
        let result = interpolate(
            "{{done}} of {total}",
            &[("done", 4.into())],
        );
        assert_eq!(result, "4 of {total}");
    }

    // ==================== Value Rendering Tests ====================

    #[test]
    fn test_interpolate_numeric_values() {
        assert_eq!(interpolate("{n}", &[("n", 42.into())]), "42");
        assert_eq!(interpolate("{n}", &[("n", (-3i64).into())]), "-3");
        assert_eq!(interpolate("{n}", &[("n", 2.5.into())]), "2.5");
    }

    #[test]
    fn test_interpolate_no_placeholders() {
        let result = interpolate("Plain text", &[("unused", "x".into())]);
        assert_eq!(result, "Plain text");
    }

    #[test]
    fn test_interpolate_empty_template() {
        assert_eq!(interpolate("", &[]), "");
    }

    #[test]
    fn test_interpolate_arabic_template() {
        let result = interpolate(
            "مرحباً {{name}}، لديك {count} حلقة",
            &[("name", "سارة".into()), ("count", 2.into())],
        );
        assert_eq!(result, "مرحباً سارة، لديك 2 حلقة");
    }

    // ==================== placeholder_names Tests ====================

    #[test]
    fn test_placeholder_names_both_syntaxes() {
        let names = placeholder_names("{{name}} has {count} of {total}");
        let expected: Vec<&str> = vec!["count", "name", "total"];
        assert_eq!(names.into_iter().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_placeholder_names_none() {
        assert!(placeholder_names("no tokens here").is_empty());
    }

    #[test]
    fn test_placeholder_names_deduplicates() {
        let names = placeholder_names("{x} then {x} then {{x}}");
        assert_eq!(names.len(), 1);
    }

    // ==================== t() Tests ====================

    #[test]
    fn test_t_resolves_and_interpolates() {
        use crate::i18n::Language;
        let result = t(
            Language::ENGLISH,
            "announcements.dialog.delete_description",
            &[("title", "Exam week".into())],
        );
        assert!(result.contains("Exam week"));
        assert!(!result.contains("{{"));
    }

    #[test]
    fn test_t_missing_path_returns_path() {
        use crate::i18n::Language;
        let result = t(Language::ENGLISH, "no.such.key", &[]);
        assert_eq!(result, "no.such.key");
    }

    #[test]
    fn test_t_plain_key_without_args() {
        use crate::i18n::Language;
        assert_eq!(t(Language::ENGLISH, "common.save", &[]), "Save");
        assert_eq!(t(Language::ARABIC, "common.save", &[]), "حفظ");
    }

    // ==================== Property Tests ====================

    proptest! {
        #[test]
        fn prop_text_without_braces_is_unchanged(s in "[^{}]*") {
            prop_assert_eq!(interpolate(&s, &[]), s);
        }

        #[test]
        fn prop_substituted_output_contains_value(
            key in "[a-z][a-z0-9_]{0,10}",
            value in "[A-Za-z0-9 ]{1,20}",
        ) {
            let template = format!("start {{{{{}}}}} end", key);
            let out = interpolate(&template, &[(key.as_str(), value.clone().into())]);
            prop_assert_eq!(out, format!("start {} end", value));
        }
    }
}
