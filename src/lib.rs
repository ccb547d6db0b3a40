//! Localization and formatting layer for the Quran memorization center
//! admin panel.
//!
//! The crate owns the per-domain translation catalogs (Arabic/English), the
//! language registry, placeholder interpolation, and the locale-aware date,
//! time, number, and percent formatters used by every screen.
//!
//! Everything here is synchronous and side-effect-free beyond reading
//! process-wide static configuration: the assembled catalogs are built once
//! and shared read-only across all callers, and every formatting surface
//! takes the active [`i18n::Language`] as an explicit parameter — the crate
//! has no ambient notion of a "current language".

pub mod config;
pub mod i18n;
