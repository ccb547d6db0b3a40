//! Lookup metrics and observability module.
//!
//! This module provides metrics tracking for the localization layer:
//! catalog lookups, missing keys, unsubstituted placeholders, and
//! formatter fallbacks. Counters are read-only observability; they never
//! influence what a caller sees.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global lookup metrics singleton.
pub struct LookupMetrics {
    /// Number of dotted-path catalog lookups
    lookups: AtomicUsize,

    /// Number of lookups that did not resolve to a catalog entry
    missing_keys: AtomicUsize,

    /// Number of placeholders left verbatim because no substitution matched
    missing_placeholders: AtomicUsize,

    /// Number of formatter calls that fell back to plain string coercion
    format_fallbacks: AtomicUsize,
}

/// Global metrics instance (initialized lazily)
static METRICS: OnceLock<LookupMetrics> = OnceLock::new();

impl LookupMetrics {
    /// Get the global lookup metrics instance.
    ///
    /// This method initializes the metrics on first call and returns a
    /// reference to the singleton instance on subsequent calls.
    pub fn global() -> &'static LookupMetrics {
        METRICS.get_or_init(|| LookupMetrics {
            lookups: AtomicUsize::new(0),
            missing_keys: AtomicUsize::new(0),
            missing_placeholders: AtomicUsize::new(0),
            format_fallbacks: AtomicUsize::new(0),
        })
    }

    /// Record a dotted-path catalog lookup.
    pub fn record_lookup(&self) {
        self.lookups.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a lookup that resolved to nothing.
    pub fn record_missing_key(&self) {
        self.missing_keys.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a placeholder left verbatim during interpolation.
    pub fn record_missing_placeholder(&self) {
        self.missing_placeholders.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a formatter falling back to plain string coercion.
    pub fn record_format_fallback(&self) {
        self.format_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Get the current lookup count.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::Relaxed)
    }

    /// Get the current missing-key count.
    pub fn missing_keys(&self) -> usize {
        self.missing_keys.load(Ordering::Relaxed)
    }

    /// Get the current missing-placeholder count.
    pub fn missing_placeholders(&self) -> usize {
        self.missing_placeholders.load(Ordering::Relaxed)
    }

    /// Get the current formatter-fallback count.
    pub fn format_fallbacks(&self) -> usize {
        self.format_fallbacks.load(Ordering::Relaxed)
    }

    /// Generate a metrics report.
    pub fn report(&self) -> MetricsReport {
        let lookups = self.lookups();
        let missing = self.missing_keys();
        let hit_rate = if lookups > 0 {
            ((lookups - missing.min(lookups)) as f64 / lookups as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            lookups,
            missing_keys: missing,
            lookup_hit_rate: hit_rate,
            missing_placeholders: self.missing_placeholders(),
            format_fallbacks: self.format_fallbacks(),
        }
    }

    /// Reset all metrics to zero (useful for testing).
    #[cfg(test)]
    pub fn reset(&self) {
        self.lookups.store(0, Ordering::Relaxed);
        self.missing_keys.store(0, Ordering::Relaxed);
        self.missing_placeholders.store(0, Ordering::Relaxed);
        self.format_fallbacks.store(0, Ordering::Relaxed);
    }
}

/// Metrics report containing current localization statistics.
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    /// Number of dotted-path lookups performed
    pub lookups: usize,

    /// Number of lookups that missed
    pub missing_keys: usize,

    /// Lookup hit rate as a percentage (0-100)
    pub lookup_hit_rate: f64,

    /// Number of placeholders left unsubstituted
    pub missing_placeholders: usize,

    /// Number of formatter fallbacks to plain coercion
    pub format_fallbacks: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    // Helper to reset metrics before each test
    fn reset_metrics() {
        LookupMetrics::global().reset();
    }

    // ==================== Counter Tests ====================

    #[test]
    #[serial]
    fn test_record_lookup() {
        reset_metrics();
        let metrics = LookupMetrics::global();

        assert_eq!(metrics.lookups(), 0);
        metrics.record_lookup();
        assert_eq!(metrics.lookups(), 1);
        metrics.record_lookup();
        assert_eq!(metrics.lookups(), 2);
    }

    #[test]
    #[serial]
    fn test_record_missing_key() {
        reset_metrics();
        let metrics = LookupMetrics::global();

        assert_eq!(metrics.missing_keys(), 0);
        metrics.record_missing_key();
        assert_eq!(metrics.missing_keys(), 1);
    }

    #[test]
    #[serial]
    fn test_record_missing_placeholder() {
        reset_metrics();
        let metrics = LookupMetrics::global();

        assert_eq!(metrics.missing_placeholders(), 0);
        metrics.record_missing_placeholder();
        assert_eq!(metrics.missing_placeholders(), 1);
    }

    #[test]
    #[serial]
    fn test_record_format_fallback() {
        reset_metrics();
        let metrics = LookupMetrics::global();

        assert_eq!(metrics.format_fallbacks(), 0);
        metrics.record_format_fallback();
        assert_eq!(metrics.format_fallbacks(), 1);
    }

    // ==================== Report Tests ====================

    #[test]
    #[serial]
    fn test_report_empty() {
        reset_metrics();
        let report = LookupMetrics::global().report();

        assert_eq!(report.lookups, 0);
        assert_eq!(report.missing_keys, 0);
        assert_eq!(report.lookup_hit_rate, 0.0);
        assert_eq!(report.missing_placeholders, 0);
        assert_eq!(report.format_fallbacks, 0);
    }

    #[test]
    #[serial]
    fn test_report_hit_rate() {
        reset_metrics();
        let metrics = LookupMetrics::global();

        // 3 hits, 1 miss = 75% hit rate
        metrics.record_lookup();
        metrics.record_lookup();
        metrics.record_lookup();
        metrics.record_lookup();
        metrics.record_missing_key();

        let report = metrics.report();
        assert_eq!(report.lookups, 4);
        assert_eq!(report.missing_keys, 1);
        assert_eq!(report.lookup_hit_rate, 75.0);
    }

    #[test]
    #[serial]
    fn test_report_100_percent_hit_rate() {
        reset_metrics();
        let metrics = LookupMetrics::global();

        metrics.record_lookup();
        metrics.record_lookup();

        let report = metrics.report();
        assert_eq!(report.lookup_hit_rate, 100.0);
    }

    #[test]
    #[serial]
    fn test_report_serializes() {
        reset_metrics();
        let report = LookupMetrics::global().report();
        let json = serde_json::to_string(&report).expect("Should serialize");
        assert!(json.contains("lookup_hit_rate"));
        assert!(json.contains("format_fallbacks"));
    }

    // ==================== Singleton Tests ====================

    #[test]
    #[serial]
    fn test_global_returns_same_instance() {
        let metrics1 = LookupMetrics::global();
        let metrics2 = LookupMetrics::global();

        // Should return the same instance (same memory address)
        assert!(std::ptr::eq(metrics1, metrics2));
    }

    #[test]
    #[serial]
    fn test_metrics_persist_across_calls() {
        // Incrementing through one reference is visible through another
        let metrics1 = LookupMetrics::global();
        let initial = metrics1.lookups();
        metrics1.record_lookup();

        let metrics2 = LookupMetrics::global();
        assert_eq!(metrics2.lookups(), initial + 1);
    }
}
