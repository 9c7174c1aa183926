//! Scan telemetry

mod stats;

pub use stats::ScanStats;
