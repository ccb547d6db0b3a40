//! Internationalization (i18n) module for the Quran center admin panel.
//!
//! This module provides a centralized architecture for managing the two
//! interface languages of the application. All language-related logic,
//! localized strings, and formatting infrastructure is contained here.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language handle validated against the registry
//! - `strings`: Per-domain localized string catalogs and the assembled `Translations`
//! - `interpolate`: Placeholder substitution and the dotted-path `t` helper
//! - `format`: Locale-aware date, time, number, and percent formatting
//! - `relative`: Relative-time phrasing ("3 days ago", "قبل ٣ أيام")
//! - `validator`: Catalog quality validation (placeholder parity across languages)
//! - `metrics`: Lookup and fallback observability
//!
//! # Example
//!
//! ```rust,ignore
//! use quran_center_i18n::i18n::{translations, Language};
//!
//! let lang = Language::from_code("ar")?;
//! let save_label = translations(lang).common.save;
//! ```

mod format;
mod interpolate;
mod language;
mod metrics;
mod registry;
mod relative;
pub mod strings;
mod validator;

pub use format::{
    format_date, format_date_short, format_date_time, format_number, format_percent, format_time,
    DateInput, DateOptions, MonthStyle, NumberOptions,
};
pub use interpolate::{interpolate, t, ArgValue};
pub use language::Language;
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use relative::{format_relative_time, format_relative_time_from};
pub use strings::{translations, Translations};
pub use validator::{TranslationValidator, ValidationReport};

/// Errors produced at the i18n boundary.
///
/// Formatting and lookup surfaces never return these; they degrade to safe
/// string output instead. Errors are reserved for configuration-time
/// failures, where failing fast is the correct behavior.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum I18nError {
    /// A language code that is not present in the registry.
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    /// A language that exists but is not enabled.
    #[error("Language '{0}' is not enabled")]
    LanguageDisabled(String),
}
