//! Debounced re-scoring for editors
//!
//! `DebouncedScorer` is a small state machine: the caller reports edits with
//! `notify` and drives it with `poll`, passing the current `Instant` each time.
//! It owns no timer and spawns nothing, so it works the same under any event
//! loop and is fully deterministic in tests.

use crate::article::ArticleContent;
use crate::scorer::{SeoScoreResult, SeoScorer};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A score produced by a poll or flush
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreUpdate {
    /// `None` when the latest article has no target keyword
    pub result: Option<SeoScoreResult>,
}

#[derive(Debug)]
pub struct DebouncedScorer {
    scorer: Arc<SeoScorer>,
    delay: Duration,
    latest: Option<ArticleContent>,
    deadline: Option<Instant>,
}

impl DebouncedScorer {
    /// Debounce with the scorer's configured `debounceMs`
    pub fn new(scorer: Arc<SeoScorer>) -> Self {
        let delay = scorer.config().debounce();
        Self::with_delay(scorer, delay)
    }

    pub fn with_delay(scorer: Arc<SeoScorer>, delay: Duration) -> Self {
        Self {
            scorer,
            delay,
            latest: None,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record an edit; only the latest article is kept
    pub fn notify(&mut self, article: ArticleContent, now: Instant) {
        self.latest = Some(article);
        self.deadline = Some(now + self.delay);
    }

    /// When the pending article becomes due, if any
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Score the latest article if its quiet period has elapsed
    pub fn poll(&mut self, now: Instant) -> Option<ScoreUpdate> {
        match self.deadline {
            Some(deadline) if now >= deadline => self.flush(),
            _ => None,
        }
    }

    /// Score the pending article immediately
    pub fn flush(&mut self) -> Option<ScoreUpdate> {
        self.deadline.take()?;
        let article = self.latest.as_ref()?;
        tracing::debug!("Debounced re-score after {:?} quiet period", self.delay);
        Some(ScoreUpdate {
            result: self.scorer.score(article),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(keyword: &str) -> ArticleContent {
        ArticleContent {
            title: "Compost basics".to_string(),
            content: "<h1>Compost basics</h1><p>Compost feeds the soil. Start a pile today.</p>"
                .to_string(),
            target_keyword: keyword.to_string(),
            ..Default::default()
        }
    }

    fn debouncer() -> DebouncedScorer {
        DebouncedScorer::new(Arc::new(SeoScorer::default()))
    }

    #[test]
    fn test_default_delay_from_config() {
        assert_eq!(debouncer().delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_nothing_pending() {
        let mut live = debouncer();
        assert!(!live.is_pending());
        assert!(live.poll(Instant::now()).is_none());
        assert!(live.flush().is_none());
    }

    #[test]
    fn test_poll_waits_for_quiet_period() {
        let mut live = debouncer();
        let t0 = Instant::now();

        live.notify(article("compost"), t0);
        assert_eq!(live.deadline(), Some(t0 + Duration::from_millis(500)));
        assert!(live.poll(t0 + Duration::from_millis(499)).is_none());

        let update = live.poll(t0 + Duration::from_millis(500)).unwrap();
        assert!(update.result.is_some());
        assert!(!live.is_pending());

        // Already delivered
        assert!(live.poll(t0 + Duration::from_secs(5)).is_none());
    }

    #[test]
    fn test_new_edit_resets_deadline() {
        let mut live = debouncer();
        let t0 = Instant::now();

        live.notify(article("compost"), t0);
        live.notify(article("soil"), t0 + Duration::from_millis(400));

        assert!(live.poll(t0 + Duration::from_millis(600)).is_none());

        let update = live.poll(t0 + Duration::from_millis(900)).unwrap();
        let expected = SeoScorer::default().score(&article("soil"));
        assert_eq!(update.result, expected);
    }

    #[test]
    fn test_flush_scores_immediately() {
        let mut live = debouncer();
        live.notify(article("compost"), Instant::now());

        let update = live.flush().unwrap();
        assert!(update.result.is_some());
        assert!(live.flush().is_none());
    }

    #[test]
    fn test_missing_keyword_yields_absent_result() {
        let mut live = DebouncedScorer::with_delay(Arc::new(SeoScorer::default()), Duration::ZERO);
        let t0 = Instant::now();

        live.notify(article(" "), t0);
        let update = live.poll(t0).unwrap();
        assert!(update.result.is_none());
    }
}
