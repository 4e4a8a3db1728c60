//! Utility modules for SEO scoring
//!
//! Contains shared functionality used across multiple factors:
//! - Normalization: Raw metric value to quality fraction

pub mod normalization;

// Re-export commonly used helpers
pub use normalization::{band_quality, density_quality, interpolate, ratio_quality, required_count};
