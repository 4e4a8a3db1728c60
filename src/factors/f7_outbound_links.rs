//! FACTOR 7: OUTBOUND LINKS
//!
//! Too few outbound links misses an authority signal; too many looks spammy.
//! Below the minimum, quality ramps up linearly to 1.0; above the maximum it
//! decays linearly to 0 at twice the maximum.

use crate::article::ArticleContent;
use crate::config::ScoringConfig;
use crate::factors::{plural, FactorId, FactorResult, Findings};
use crate::text::TextStats;
use crate::utils::{interpolate, ratio_quality};

pub fn evaluate_outbound_links(
    article: &ArticleContent,
    _stats: &TextStats,
    config: &ScoringConfig,
) -> FactorResult {
    let min = config.link_ratios.outbound_min;
    let max = config.link_ratios.outbound_max;
    let count = article.outbound_links.len();
    let mut findings = Findings::new();

    let quality = if count < min {
        let issue = if count == 0 {
            "No outbound links to external sources".to_string()
        } else {
            format!(
                "{}, recommended {}-{}",
                plural(count, "outbound link", "outbound links"),
                min,
                max
            )
        };
        findings.issue(issue, "Cite authoritative external sources that back up your claims.");
        ratio_quality(count as f64, min as f64)
    } else if count > max {
        findings.issue(
            format!(
                "{} outbound links looks spammy, recommended at most {}",
                count, max
            ),
            "Keep only the most relevant external references.",
        );
        interpolate(count as f64, max as f64, (max * 2) as f64, 1.0, 0.0)
    } else {
        1.0
    };

    let pass_message = format!(
        "{} to external sources",
        plural(count, "outbound link", "outbound links")
    );

    findings.into_result(FactorId::OutboundLinks, config, quality, pass_message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::article::LinkRecord;
    use crate::factors::FactorStatus;
    use approx::assert_relative_eq;

    fn article(links: usize) -> ArticleContent {
        ArticleContent {
            outbound_links: (0..links)
                .map(|i| LinkRecord::new(format!("https://example.org/{}", i), "source"))
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_within_range_passes() {
        let config = ScoringConfig::default();
        let result = evaluate_outbound_links(&article(2), &TextStats::default(), &config);

        assert_eq!(result.status, FactorStatus::Pass);
        assert_relative_eq!(result.score, 5.0);
        assert_eq!(result.message, "2 outbound links to external sources");
    }

    #[test]
    fn test_none_fails() {
        let config = ScoringConfig::default();
        let result = evaluate_outbound_links(&article(0), &TextStats::default(), &config);

        assert_eq!(result.status, FactorStatus::Fail);
        assert_relative_eq!(result.score, 0.0);
        assert_eq!(result.message, "No outbound links to external sources.");
    }

    #[test]
    fn test_too_many_degrades() {
        let config = ScoringConfig::default();

        let six = evaluate_outbound_links(&article(6), &TextStats::default(), &config);
        assert_eq!(six.status, FactorStatus::Warn);
        assert_relative_eq!(six.score, 4.0, epsilon = 1e-9);
        assert!(six.message.contains("looks spammy"));

        let ten = evaluate_outbound_links(&article(10), &TextStats::default(), &config);
        assert_eq!(ten.status, FactorStatus::Fail);
        assert_relative_eq!(ten.score, 0.0);
    }
}
