//! Grading thresholds and feedback tiers.

use serde::{Deserialize, Serialize};

use crate::locale::TextKey;

/// Thresholds applied to the coherence score.
///
/// `pass_threshold` decides coherent/incoherent. `partial_threshold` only picks the
/// flavor text, so a score between the two is rejected yet described as largely
/// coherent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingPolicy {
    pub pass_threshold: u8,
    pub partial_threshold: u8,
}

impl Default for GradingPolicy {
    fn default() -> Self {
        Self {
            pass_threshold: 80,
            partial_threshold: 60,
        }
    }
}

impl GradingPolicy {
    /// Whether a score passes.
    pub fn is_coherent(&self, score: u8) -> bool {
        score >= self.pass_threshold
    }

    /// Flavor-text tier for a score.
    pub fn tier(&self, score: u8) -> FeedbackTier {
        if score >= 100 {
            FeedbackTier::Exceptional
        } else if score >= self.partial_threshold {
            FeedbackTier::Partial
        } else {
            FeedbackTier::Poor
        }
    }
}

/// Which prose summary opens the feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackTier {
    /// Every utterance satisfied.
    Exceptional,
    Partial,
    Poor,
}

impl FeedbackTier {
    pub fn text_key(&self) -> TextKey {
        match self {
            FeedbackTier::Exceptional => TextKey::FeedbackExceptional,
            FeedbackTier::Partial => TextKey::FeedbackPartial,
            FeedbackTier::Poor => TextKey::FeedbackPoor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let policy = GradingPolicy::default();
        assert!(policy.is_coherent(80));
        assert!(!policy.is_coherent(79));
    }

    #[test]
    fn test_tiers() {
        let policy = GradingPolicy::default();
        assert_eq!(policy.tier(100), FeedbackTier::Exceptional);
        assert_eq!(policy.tier(99), FeedbackTier::Partial);
        assert_eq!(policy.tier(60), FeedbackTier::Partial);
        assert_eq!(policy.tier(59), FeedbackTier::Poor);
        assert_eq!(policy.tier(0), FeedbackTier::Poor);
    }

    #[test]
    fn test_rejected_but_partial_band() {
        let policy = GradingPolicy::default();
        assert!(!policy.is_coherent(67));
        assert_eq!(policy.tier(67), FeedbackTier::Partial);
    }

    #[test]
    fn test_policy_from_partial_toml() {
        let policy: GradingPolicy = toml::from_str("pass_threshold = 90").unwrap();
        assert_eq!(policy.pass_threshold, 90);
        assert_eq!(policy.partial_threshold, 60);
    }
}
