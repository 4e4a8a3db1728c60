//! Scoring configuration
//!
//! Every threshold the evaluators use lives here, with the documented defaults.
//! A configuration is validated once (fail fast) and then shared read-only by the
//! scorer, so tests can override any threshold without global state.
//!
//! JSON files may override any subset of fields, at any depth; missing fields
//! keep their defaults:
//!
//! ```json
//! { "keywordDensity": { "minPercent": 0.8 }, "metaTitleLength": { "min": 45 }, "debounceMs": 300 }
//! ```

use crate::error::ConfigError;
use crate::factors::FactorId;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Tolerance when checking that the weights add up to 100
const WEIGHT_SUM_EPSILON: f64 = 1e-6;

/// Contribution of each factor toward the 100-point total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactorWeights {
    pub target_keyword: f64,
    pub meta_elements: f64,
    pub content_structure: f64,
    pub readability: f64,
    pub internal_links: f64,
    pub images: f64,
    pub outbound_links: f64,
}

impl Default for FactorWeights {
    fn default() -> Self {
        Self {
            target_keyword: 25.0,
            meta_elements: 20.0,
            content_structure: 20.0,
            readability: 10.0,
            internal_links: 10.0,
            images: 10.0,
            outbound_links: 5.0,
        }
    }
}

impl FactorWeights {
    pub fn get(&self, factor: FactorId) -> f64 {
        match factor {
            FactorId::TargetKeyword => self.target_keyword,
            FactorId::MetaElements => self.meta_elements,
            FactorId::ContentStructure => self.content_structure,
            FactorId::Readability => self.readability,
            FactorId::InternalLinks => self.internal_links,
            FactorId::Images => self.images,
            FactorId::OutboundLinks => self.outbound_links,
        }
    }

    pub fn total(&self) -> f64 {
        FactorId::ALL.iter().map(|&f| self.get(f)).sum()
    }
}

/// Minimum overall score for each grade band (poor is everything below `needs_work`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GradeThresholds {
    pub excellent: u8,
    pub good: u8,
    pub needs_work: u8,
}

impl Default for GradeThresholds {
    fn default() -> Self {
        Self {
            excellent: 81,
            good: 61,
            needs_work: 41,
        }
    }
}

/// Keyword density bands, in percent of body words
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KeywordDensity {
    pub min_percent: f64,
    pub max_percent: f64,
    pub stuffing_percent: f64,
}

impl Default for KeywordDensity {
    fn default() -> Self {
        Self {
            min_percent: 0.5,
            max_percent: 2.5,
            stuffing_percent: 4.0,
        }
    }
}

/// Inclusive `[min, max]` band
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    fn validate(&self, name: &'static str) -> Result<(), ConfigError> {
        let finite = self.min.is_finite() && self.max.is_finite();
        if !finite || self.min <= 0.0 || self.min > self.max {
            return Err(ConfigError::Bounds {
                name,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }
}

/// Heading density expectations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeadingRules {
    /// One heading expected per this many words
    pub words_per_heading: f64,
    /// More than one heading per this many words is over-fragmented
    pub min_words_per_heading: f64,
}

impl Default for HeadingRules {
    fn default() -> Self {
        Self {
            words_per_heading: 1000.0,
            min_words_per_heading: 50.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReadabilityRules {
    pub paragraph_words: Bounds,
    pub sentence_words: Bounds,
}

impl Default for ReadabilityRules {
    fn default() -> Self {
        Self {
            paragraph_words: Bounds::new(20.0, 150.0),
            sentence_words: Bounds::new(8.0, 20.0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LinkRatios {
    pub internal_per_1000_words: f64,
    pub words_per_image: f64,
    pub outbound_min: usize,
    pub outbound_max: usize,
}

impl Default for LinkRatios {
    fn default() -> Self {
        Self {
            internal_per_1000_words: 3.0,
            words_per_image: 400.0,
            outbound_min: 1,
            outbound_max: 5,
        }
    }
}

/// Complete scorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoringConfig {
    pub weights: FactorWeights,
    pub grade_thresholds: GradeThresholds,
    pub keyword_density: KeywordDensity,
    pub meta_title_length: Bounds,
    pub meta_description_length: Bounds,
    pub headings: HeadingRules,
    pub readability: ReadabilityRules,
    pub link_ratios: LinkRatios,
    /// Factors whose quality falls below this fraction are reported as `fail`
    pub fail_below: f64,
    /// Delay callers should wait after the last edit before re-scoring
    pub debounce_ms: u64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: FactorWeights::default(),
            grade_thresholds: GradeThresholds::default(),
            keyword_density: KeywordDensity::default(),
            meta_title_length: Bounds::new(50.0, 60.0),
            meta_description_length: Bounds::new(120.0, 160.0),
            headings: HeadingRules::default(),
            readability: ReadabilityRules::default(),
            link_ratios: LinkRatios::default(),
            fail_below: 0.4,
            debounce_ms: 500,
        }
    }
}

impl ScoringConfig {
    /// Load configuration from a JSON file and validate it
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scoring config: {:?}", path))?;

        let config = Self::from_json_str(&contents)
            .with_context(|| format!("Invalid scoring config: {:?}", path))?;

        tracing::info!("Loaded scoring config from {:?}", path);
        Ok(config)
    }

    /// Parse configuration from a JSON string and validate it
    ///
    /// The overrides are merged field by field onto the defaults, so a partial
    /// band such as `{ "min": 45 }` keeps the default `max`.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let overrides: Value =
            serde_json::from_str(json).with_context(|| "Failed to parse scoring config JSON")?;

        let mut merged = serde_json::to_value(Self::default())
            .with_context(|| "Failed to serialize default scoring config")?;
        merge_json(&mut merged, overrides);

        let config: ScoringConfig = serde_json::from_value(merged)
            .with_context(|| "Failed to parse scoring config JSON")?;
        config.validate()?;
        Ok(config)
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Reject configurations the evaluators cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check().map_err(|err| {
            tracing::warn!("Rejected scoring config: {}", err);
            err
        })
    }

    fn check(&self) -> Result<(), ConfigError> {
        for factor in FactorId::ALL {
            let weight = self.weights.get(factor);
            if !weight.is_finite() || weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    factor: factor.as_str(),
                    weight,
                });
            }
        }
        let total = self.weights.total();
        if (total - 100.0).abs() > WEIGHT_SUM_EPSILON {
            return Err(ConfigError::WeightsSum { total });
        }

        let g = &self.grade_thresholds;
        if !(g.needs_work > 0 && g.needs_work < g.good && g.good < g.excellent && g.excellent <= 100) {
            return Err(ConfigError::GradeThresholds {
                excellent: g.excellent,
                good: g.good,
                needs_work: g.needs_work,
            });
        }

        let d = &self.keyword_density;
        if !(d.min_percent > 0.0 && d.min_percent < d.max_percent && d.max_percent < d.stuffing_percent)
            || !d.stuffing_percent.is_finite()
        {
            return Err(ConfigError::DensityBands {
                min: d.min_percent,
                max: d.max_percent,
                stuffing: d.stuffing_percent,
            });
        }

        self.meta_title_length.validate("metaTitleLength")?;
        self.meta_description_length.validate("metaDescriptionLength")?;
        self.readability.paragraph_words.validate("readability.paragraphWords")?;
        self.readability.sentence_words.validate("readability.sentenceWords")?;

        positive("headings.wordsPerHeading", self.headings.words_per_heading)?;
        positive("headings.minWordsPerHeading", self.headings.min_words_per_heading)?;
        if self.headings.min_words_per_heading > self.headings.words_per_heading {
            return Err(ConfigError::Bounds {
                name: "headings",
                min: self.headings.min_words_per_heading,
                max: self.headings.words_per_heading,
            });
        }

        let l = &self.link_ratios;
        positive("linkRatios.internalPer1000Words", l.internal_per_1000_words)?;
        positive("linkRatios.wordsPerImage", l.words_per_image)?;
        if l.outbound_min > l.outbound_max || l.outbound_max == 0 {
            return Err(ConfigError::Bounds {
                name: "linkRatios.outbound",
                min: l.outbound_min as f64,
                max: l.outbound_max as f64,
            });
        }

        if !(0.0..=1.0).contains(&self.fail_below) {
            return Err(ConfigError::FailBelow(self.fail_below));
        }

        Ok(())
    }
}

/// Overlay `overrides` onto `base`, recursing into objects
fn merge_json(base: &mut Value, overrides: Value) {
    match (base, overrides) {
        (Value::Object(base), Value::Object(overrides)) => {
            for (key, value) in overrides {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => *slot = value,
    }
}

fn positive(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}
