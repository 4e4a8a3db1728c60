//! Configuration errors
//!
//! Per-article problems never surface as errors (they degrade a factor instead).
//! Only a broken configuration is rejected, once, when the scorer is built.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("factor weights must sum to 100, got {total}")]
    WeightsSum { total: f64 },

    #[error("weight for {factor} must be a finite non-negative number, got {weight}")]
    InvalidWeight { factor: &'static str, weight: f64 },

    #[error(
        "grade thresholds must satisfy 0 < needsWork ({needs_work}) < good ({good}) < excellent ({excellent}) <= 100"
    )]
    GradeThresholds {
        excellent: u8,
        good: u8,
        needs_work: u8,
    },

    #[error(
        "keyword density bands must satisfy 0 < min ({min}) < max ({max}) < stuffing ({stuffing})"
    )]
    DensityBands { min: f64, max: f64, stuffing: f64 },

    #[error("{name} bounds are inverted or empty: min {min}, max {max}")]
    Bounds {
        name: &'static str,
        min: f64,
        max: f64,
    },

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },

    #[error("failBelow must lie in [0, 1], got {0}")]
    FailBelow(f64),
}
