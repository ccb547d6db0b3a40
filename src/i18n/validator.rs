//! Catalog quality validation module.
//!
//! Key-set parity between languages is guaranteed by the type system (both
//! languages instantiate the same structs), so this validator checks what
//! the compiler cannot: that the flattened `KEYS` tables agree with the
//! structural `get` traversal, that no leaf is empty, and that the
//! placeholder tokens used in each template match across languages.

use crate::i18n::interpolate::placeholder_names;
use crate::i18n::{translations, Language, Translations};
use serde::Serialize;

/// Validation report containing errors and warnings about the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// Critical errors that indicate catalog defects
    pub errors: Vec<String>,

    /// Non-critical warnings about potential issues
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Create a new empty validation report
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Check if the report has any errors
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Check if the report has any warnings
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for catalog quality.
pub struct TranslationValidator;

impl TranslationValidator {
    /// Validate the entire assembled catalog.
    ///
    /// Arabic is the reference side (the default language of the center);
    /// every other enabled language is compared against it key by key.
    ///
    /// # Returns
    /// A `ValidationReport` containing any errors or warnings found.
    pub fn validate_catalog() -> ValidationReport {
        let mut report = ValidationReport::new();
        let reference = translations(Language::ARABIC);
        let translated = translations(Language::ENGLISH);

        for key in Translations::all_keys() {
            Self::validate_entry(
                &key,
                reference.get(&key),
                translated.get(&key),
                &mut report,
            );
        }

        report
    }

    /// Validate a single catalog entry across the two languages.
    fn validate_entry(
        key: &str,
        reference: Option<&'static str>,
        translated: Option<&'static str>,
        report: &mut ValidationReport,
    ) {
        let reference = match reference {
            Some(value) => value,
            None => {
                report
                    .errors
                    .push(format!("Key '{}' does not resolve for 'ar'", key));
                return;
            }
        };
        let translated = match translated {
            Some(value) => value,
            None => {
                report
                    .errors
                    .push(format!("Key '{}' does not resolve for 'en'", key));
                return;
            }
        };

        if reference.is_empty() {
            report.errors.push(format!("Empty value for '{}' in 'ar'", key));
        }
        if translated.is_empty() {
            report.errors.push(format!("Empty value for '{}' in 'en'", key));
        }

        let ref_placeholders = placeholder_names(reference);
        let trans_placeholders = placeholder_names(translated);
        if ref_placeholders != trans_placeholders {
            report.warnings.push(format!(
                "Placeholder mismatch for '{}': 'ar' has {:?}, 'en' has {:?}",
                key, ref_placeholders, trans_placeholders
            ));
        }
    }
}
