use crate::i18n::Language;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct I18nConfig {
    /// Language used when no per-user preference is stored
    pub default_language: Language,

    /// When true, catalog validation errors abort startup
    pub strict_validation: bool,
}

impl I18nConfig {
    pub fn from_env() -> Result<Self> {
        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(&code)
                .with_context(|| format!("Invalid DEFAULT_LANGUAGE '{}'", code))?,
            Err(_) => Language::default_language(),
        };

        Ok(Self {
            default_language,
            strict_validation: std::env::var("I18N_STRICT_VALIDATION")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        std::env::remove_var("DEFAULT_LANGUAGE");
        std::env::remove_var("I18N_STRICT_VALIDATION");

        let config = I18nConfig::from_env().expect("Should succeed");
        assert_eq!(config.default_language, Language::ARABIC);
        assert!(!config.strict_validation);
    }

    #[test]
    #[serial]
    fn test_from_env_explicit_language() {
        std::env::set_var("DEFAULT_LANGUAGE", "en");

        let config = I18nConfig::from_env().expect("Should succeed");
        assert_eq!(config.default_language, Language::ENGLISH);

        std::env::remove_var("DEFAULT_LANGUAGE");
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_language_fails_fast() {
        std::env::set_var("DEFAULT_LANGUAGE", "fr");

        let result = I18nConfig::from_env();
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("DEFAULT_LANGUAGE"));

        std::env::remove_var("DEFAULT_LANGUAGE");
    }

    #[test]
    #[serial]
    fn test_from_env_strict_validation() {
        std::env::set_var("I18N_STRICT_VALIDATION", "true");

        let config = I18nConfig::from_env().expect("Should succeed");
        assert!(config.strict_validation);

        std::env::remove_var("I18N_STRICT_VALIDATION");
    }
}
