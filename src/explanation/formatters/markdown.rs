//! Markdown output

use crate::explanation::types::{Explanation, FactorCard};
use crate::factors::FactorStatus;

/// Markdown formatter for explanations
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format explanation as markdown
    pub fn format(explanation: &Explanation) -> String {
        let mut md = String::with_capacity(1024);

        // Title with stars and score
        md.push_str(&format!(
            "# {} - {}\n\n",
            explanation.overall.stars, explanation.overall.label
        ));
        md.push_str(&format!(
            "**Overall Score:** {}/100\n\n",
            explanation.overall.score
        ));
        md.push_str(&format!("{}\n\n", explanation.overall.message));

        if !explanation.improvements.is_empty() {
            md.push_str("## Improvements\n\n");
            for card in &explanation.improvements {
                Self::format_card(&mut md, card);
            }
        }

        if !explanation.strengths.is_empty() {
            md.push_str("## Strengths\n\n");
            for card in &explanation.strengths {
                Self::format_card(&mut md, card);
            }
        }

        md
    }

    fn format_card(md: &mut String, card: &FactorCard) {
        let icon = match card.status {
            FactorStatus::Pass => "✅",
            FactorStatus::Warn => "⚠️",
            FactorStatus::Fail => "❌",
        };

        md.push_str(&format!(
            "### {} {} ({:.1}/{:.0})\n\n",
            icon, card.title, card.score, card.weight
        ));
        md.push_str(&format!("{}  \n", card.message));
        if let Some(suggestion) = &card.suggestion {
            md.push_str(&format!("*Suggestion:* {}  \n", suggestion));
        }
        if card.points_lost > 0.0 {
            md.push_str(&format!("*Points lost:* {:.1}\n", card.points_lost));
        }
        md.push('\n');
    }
}
