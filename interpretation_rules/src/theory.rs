//! The player's truth theory and the verdict passed on it.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Observed utterance -> the player's free-text truth condition.
///
/// Keys are utterances, not vocabulary words: "Ruz Gorm" gets its own T-sentence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerTheory {
    sentences: HashMap<String, String>,
}

impl PlayerTheory {
    /// Create an empty theory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`PlayerTheory::define`].
    pub fn with_sentence(mut self, utterance: impl Into<String>, condition: impl Into<String>) -> Self {
        self.define(utterance, condition);
        self
    }

    /// Register an utterance with an empty condition if it is not known yet.
    ///
    /// Returns true if the utterance was new.
    pub fn observe(&mut self, utterance: &str) -> bool {
        if self.sentences.contains_key(utterance) {
            return false;
        }
        self.sentences.insert(utterance.to_string(), String::new());
        true
    }

    /// Set the truth condition for an utterance.
    pub fn define(&mut self, utterance: impl Into<String>, condition: impl Into<String>) {
        self.sentences.insert(utterance.into(), condition.into());
    }

    /// The condition for an utterance, if present.
    pub fn get(&self, utterance: &str) -> Option<&str> {
        self.sentences.get(utterance).map(|s| s.as_str())
    }

    /// The condition for an utterance, empty when absent.
    pub fn condition_for(&self, utterance: &str) -> &str {
        self.get(utterance).unwrap_or("")
    }

    pub fn contains(&self, utterance: &str) -> bool {
        self.sentences.contains_key(utterance)
    }

    pub fn len(&self) -> usize {
        self.sentences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sentences.is_empty()
    }

    /// Drop every sentence.
    pub fn clear(&mut self) {
        self.sentences.clear();
    }

    /// Iterate over (utterance, condition) pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.sentences
            .iter()
            .map(|(u, c)| (u.as_str(), c.as_str()))
    }
}

/// Outcome of grading a theory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationResult {
    pub is_coherent: bool,

    /// Coherence score, 0-100.
    pub score: u8,

    pub feedback: String,

    /// Reminder that other theories may fit the same data.
    #[serde(default)]
    pub alternative_theory: String,
}
