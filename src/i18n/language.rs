//! Language type: flexible, validated language representation.
//!
//! This module provides the `Language` type, a copyable handle that is
//! guaranteed to refer to a supported, enabled language in the registry.

use crate::i18n::{I18nError, LanguageConfig, LanguageRegistry};

/// A validated language.
///
/// This type represents a language that has been validated against the
/// registry. It ensures that only supported, enabled languages can be
/// constructed, so every downstream surface (dictionary lookup, formatting)
/// can treat the language as trusted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "ar", "en")
    code: &'static str,
}

impl Language {
    /// Arabic, the default language of the center.
    pub const ARABIC: Language = Language { code: "ar" };

    /// English, the secondary interface language.
    pub const ENGLISH: Language = Language { code: "en" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "ar", "en")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    ///
    /// # Example
    /// ```ignore
    /// let arabic = Language::from_code("ar")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Language, I18nError> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language {
                code: config.code, // Use the static str from the registry
            }),
            Some(_) => Err(I18nError::LanguageDisabled(code.to_string())),
            None => Err(I18nError::UnknownLanguage(code.to_string())),
        }
    }

    /// Get the default language of the application.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`
    /// or the constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language.
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Get the concrete locale identifier for the formatting layer
    /// (e.g., "ar-SA", "en-US").
    pub fn locale(&self) -> &'static str {
        self.config().locale
    }

    /// Whether the language is written right-to-left.
    ///
    /// Consumed by the view layer for the `dir` attribute.
    pub fn is_rtl(&self) -> bool {
        self.config().rtl
    }

    /// Text direction string ("rtl" or "ltr").
    pub fn direction(&self) -> &'static str {
        if self.is_rtl() {
            "rtl"
        } else {
            "ltr"
        }
    }

    /// Check if this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}
