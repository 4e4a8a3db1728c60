//! Quality-fraction normalization
//!
//! Converts raw metric values (lengths, ratios, densities) into a quality
//! fraction in [0, 1] that the evaluators multiply by the factor weight.
//! Every curve is piecewise linear and monotone on each side of the ideal band,
//! so moving a metric toward its band never lowers the score.

use crate::config::{Bounds, KeywordDensity};

/// Quality kept at the stuffing threshold before the hard drop to 0
pub const DENSITY_QUALITY_AT_STUFFING: f64 = 0.4;

/// Linear interpolation of `x` from `[x0, x1]` onto `[y0, y1]`, clamped to the segment
pub fn interpolate(x: f64, x0: f64, x1: f64, y0: f64, y1: f64) -> f64 {
    if x1 - x0 <= 0.0 {
        return y0;
    }
    let fraction = ((x - x0) / (x1 - x0)).clamp(0.0, 1.0);
    y0 + fraction * (y1 - y0)
}

/// Quality of a value against an ideal `[min, max]` band
///
/// 1.0 inside the band, ramps up linearly from 0 at zero to the lower bound,
/// decays linearly from the upper bound to 0 at twice the upper bound.
pub fn band_quality(value: f64, bounds: Bounds) -> f64 {
    if !value.is_finite() || value <= 0.0 {
        return 0.0;
    }
    if bounds.contains(value) {
        1.0
    } else if value < bounds.min {
        interpolate(value, 0.0, bounds.min, 0.0, 1.0)
    } else {
        interpolate(value, bounds.max, bounds.max * 2.0, 1.0, 0.0)
    }
}

/// Quality of an actual count against a required minimum, capped at 1.0
pub fn ratio_quality(actual: f64, required: f64) -> f64 {
    if required <= 0.0 {
        return 1.0;
    }
    (actual / required).clamp(0.0, 1.0)
}

/// Quality of a keyword density (in percent)
///
/// Ramps up to 1.0 at the minimum, stays at 1.0 through the maximum, decays to
/// `DENSITY_QUALITY_AT_STUFFING` approaching the stuffing threshold and is 0 at
/// or beyond it.
pub fn density_quality(percent: f64, bands: &KeywordDensity) -> f64 {
    if !percent.is_finite() || percent <= 0.0 {
        0.0
    } else if percent < bands.min_percent {
        interpolate(percent, 0.0, bands.min_percent, 0.0, 1.0)
    } else if percent <= bands.max_percent {
        1.0
    } else if percent < bands.stuffing_percent {
        interpolate(
            percent,
            bands.max_percent,
            bands.stuffing_percent,
            1.0,
            DENSITY_QUALITY_AT_STUFFING,
        )
    } else {
        0.0
    }
}

/// Smallest whole count meeting `per_word * word_count`, at least 1
pub fn required_count(word_count: usize, per_word: f64) -> usize {
    let exact = word_count as f64 * per_word;
    // Tolerate float noise so 1000 words at 3/1000 requires 3, not 4
    let needed = (exact - 1e-9).ceil();
    if needed < 1.0 {
        1
    } else {
        needed as usize
    }
}
