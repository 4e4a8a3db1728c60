//! JSON output

use crate::explanation::types::Explanation;

/// JSON formatter for explanations
pub struct JsonFormatter;

impl JsonFormatter {
    /// Format explanation as pretty-printed JSON
    pub fn format(explanation: &Explanation) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(explanation)
    }

    /// Format explanation as compact JSON (no whitespace)
    pub fn format_compact(explanation: &Explanation) -> Result<String, serde_json::Error> {
        serde_json::to_string(explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::explanation::types::*;
    use crate::factors::{FactorId, FactorStatus};
    use crate::scorer::Grade;

    fn explanation() -> Explanation {
        Explanation {
            overall: OverallExplanation {
                score: 85,
                stars: "★★★★☆".to_string(),
                grade: Grade::Excellent,
                label: "Excellent".to_string(),
                message: "SEO score 85/100.".to_string(),
            },
            strengths: vec![],
            improvements: vec![FactorCard {
                factor_id: FactorId::MetaElements,
                title: "Meta Elements".to_string(),
                status: FactorStatus::Warn,
                score: 12.0,
                weight: 20.0,
                points_lost: 8.0,
                message: "Meta description is empty.".to_string(),
                suggestion: Some("Write a meta description.".to_string()),
            }],
        }
    }

    #[test]
    fn test_format_json() {
        let json = JsonFormatter::format(&explanation()).unwrap();

        assert!(json.contains("\"score\": 85"));
        assert!(json.contains("\"grade\": \"excellent\""));
        assert!(json.contains("\"factorId\": \"metaElements\""));
        assert!(json.contains("\"status\": \"warn\""));
        assert!(json.contains("\"pointsLost\": 8.0"));
    }

    #[test]
    fn test_format_compact() {
        let json = JsonFormatter::format_compact(&explanation()).unwrap();

        // Compact format should have no newlines (except potentially in strings)
        assert!(!json.contains("\n  "));

        let parsed: Explanation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, explanation());
    }
}
