use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use super::types::Logic;

pub const METRICS_TARGET: &str = "formfilter::metrics";

#[derive(Default)]
pub struct Metrics {
    pub filters_total: AtomicU64,
    pub filters_slow_total: AtomicU64,
    pub records_scanned_total: AtomicU64,
    pub records_matched_total: AtomicU64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub filters_total: u64,
    pub filters_slow_total: u64,
    pub records_scanned_total: u64,
    pub records_matched_total: u64,
}

pub struct Telemetry {
    pub slow_filter_ms: AtomicU64,
    pub metrics: Metrics,
}

impl Default for Telemetry {
    fn default() -> Self {
        let slow = std::env::var("FORMFILTER_SLOW_FILTER_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(250);
        Self { slow_filter_ms: AtomicU64::new(slow), metrics: Metrics::default() }
    }
}

pub(crate) static TELEMETRY: std::sync::LazyLock<Telemetry> =
    std::sync::LazyLock::new(Telemetry::default);

pub fn set_slow_filter_ms(ms: u64) {
    TELEMETRY.slow_filter_ms.store(ms, Ordering::Relaxed);
}

#[must_use]
pub fn snapshot() -> MetricsSnapshot {
    let m = &TELEMETRY.metrics;
    MetricsSnapshot {
        filters_total: m.filters_total.load(Ordering::Relaxed),
        filters_slow_total: m.filters_slow_total.load(Ordering::Relaxed),
        records_scanned_total: m.records_scanned_total.load(Ordering::Relaxed),
        records_matched_total: m.records_matched_total.load(Ordering::Relaxed),
    }
}

fn usize_to_u64(v: usize) -> u64 {
    u64::try_from(v).unwrap_or(u64::MAX)
}

/// Counts one filter application and emits a structured line on the metrics target.
pub fn record_apply(
    criteria: usize,
    logic: Logic,
    scanned: usize,
    matched: usize,
    elapsed: Duration,
) {
    let m = &TELEMETRY.metrics;
    m.filters_total.fetch_add(1, Ordering::Relaxed);
    m.records_scanned_total.fetch_add(usize_to_u64(scanned), Ordering::Relaxed);
    m.records_matched_total.fetch_add(usize_to_u64(matched), Ordering::Relaxed);
    let duration_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
    let slow = duration_ms >= TELEMETRY.slow_filter_ms.load(Ordering::Relaxed);
    if slow {
        m.filters_slow_total.fetch_add(1, Ordering::Relaxed);
        log::warn!("slow filter: {duration_ms}ms over {scanned} records");
    }
    let line = serde_json::json!({
        "ts": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
        "op": "filter",
        "criteria": criteria,
        "logic": logic.as_str(),
        "scanned": scanned,
        "matched": matched,
        "duration_ms": duration_ms,
        "slow": slow
    });
    log::info!(target: METRICS_TARGET, "{line}");
}
