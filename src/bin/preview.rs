//! Catalog preview binary - validates the translation catalog and renders
//! sample strings and formats for every enabled language.
//!
//! Usage:
//!   cargo run --bin preview            # Boxed console preview
//!   cargo run --bin preview -- --json  # Validation + metrics reports as JSON
//!
//! Optional environment variables:
//! - DEFAULT_LANGUAGE (defaults to ar)
//! - I18N_STRICT_VALIDATION (defaults to false; exit non-zero on catalog errors)

use anyhow::Result;
use chrono::Utc;
use quran_center_i18n::config::I18nConfig;
use quran_center_i18n::i18n::{
    format_date, format_date_short, format_number, format_percent, format_relative_time,
    format_time, translations, DateOptions, Language, LanguageRegistry, LookupMetrics,
    NumberOptions, TranslationValidator, Translations,
};
use tracing::info;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("quran_center_i18n=info".parse().unwrap()),
        )
        .init();

    // Load environment from .env file
    dotenvy::dotenv().ok();

    let args: Vec<String> = std::env::args().collect();
    let as_json = args.iter().any(|arg| arg == "--json");

    info!("Loading configuration...");
    let config = I18nConfig::from_env()?;

    info!("Validating translation catalog...");
    let report = TranslationValidator::validate_catalog();

    if report.has_errors() && config.strict_validation {
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
        anyhow::bail!(
            "Catalog validation failed with {} error(s)",
            report.errors.len()
        );
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        println!(
            "{}",
            serde_json::to_string_pretty(&LookupMetrics::global().report())?
        );
        return Ok(());
    }

    let key_count = Translations::all_keys().len();
    let now = Utc::now();

    println!();
    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                     TRANSLATION CATALOG PREVIEW                   ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║ Keys per language: {:>5}                                          ║", key_count);
    println!(
        "║ Validation: {:>3} error(s), {:>3} warning(s)                         ║",
        report.errors.len(),
        report.warnings.len()
    );
    println!(
        "║ Default language: {:47} ║",
        config.default_language.code()
    );
    println!("╚══════════════════════════════════════════════════════════════════╝");

    for lang_config in LanguageRegistry::get().list_enabled() {
        let language = Language::from_code(lang_config.code)?;
        let strings = translations(language);

        println!();
        println!(
            "--- {} ({}, {}, {}) ---",
            lang_config.native_name, lang_config.code, lang_config.locale,
            language.direction()
        );
        println!();
        println!("  {}", strings.common.app_name);
        println!("  {} · {} · {}", strings.common.save, strings.common.cancel, strings.common.delete);
        println!("  {} — {}", strings.students.title, strings.students.subtitle);
        println!("  {} — {}", strings.exams.title, strings.exams.subtitle);
        println!();
        println!(
            "  {}",
            format_date(now, language, DateOptions::default())
        );
        println!("  {}", format_date_short(now, language));
        println!("  {}", format_time(now, language));
        println!(
            "  {}",
            format_relative_time(now - chrono::Duration::days(3), language)
        );
        println!(
            "  {}",
            format_number(1_234_567.89, language, NumberOptions::default())
        );
        println!("  {}", format_percent(0.855, language));
    }

    println!();
    if !report.warnings.is_empty() {
        println!("Warnings:");
        for warning in &report.warnings {
            println!("  - {}", warning);
        }
        println!();
    }

    info!("Preview complete");
    Ok(())
}
