//! Language registry: single source of truth for all supported languages.
//!
//! This module provides a centralized registry of the languages supported by
//! the admin panel. It uses a singleton pattern with `OnceLock` to ensure
//! thread-safe initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata for a specific language: its code, display names,
/// the concrete locale consumed by the formatting layer, text direction,
/// and whether it is the default language of the application.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "ar", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Arabic", "English")
    pub name: &'static str,

    /// Native name of the language (e.g., "العربية", "English")
    pub native_name: &'static str,

    /// Concrete locale identifier used by date/number formatting (e.g., "ar-SA")
    pub locale: &'static str,

    /// Whether the language is written right-to-left
    pub rtl: bool,

    /// Whether this is the default language of the application (exactly one)
    pub is_default: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the language is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Get all languages (including disabled ones).
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// The default language is the one the application falls back to when no
    /// preference is stored. There must be exactly one.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple defaults are
    /// defined (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|lang| lang.enabled)
            .unwrap_or(false)
    }
}

/// Default language configurations.
///
/// Arabic is the primary language of the center; English is the secondary
/// interface language.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            locale: "ar-SA",
            rtl: true,
            is_default: true,
            enabled: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            locale: "en-US",
            rtl: false,
            is_default: false,
            enabled: true,
        },
    ]
}
