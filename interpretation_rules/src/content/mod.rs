//! Scenario definitions - the alien languages a player interprets.
//!
//! A scenario is one level: a vocabulary of atomic alien words, an ordered log of
//! observations in which the alien asserts an utterance, and the keyword table the
//! local grader uses to decide whether a player's truth condition fits.

mod english;
mod spanish;
mod store;
mod validation;

pub use store::*;
pub use validation::*;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::locale::Language;

/// Identifier of an observation, unique within its scenario.
///
/// Shown to the player as the log number ("Log #3").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObservationId(pub u32);

impl std::fmt::Display for ObservationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One revealed fact: a scene and the sentence the alien holds true in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Observation {
    pub id: ObservationId,

    /// Scene text.
    pub context_description: String,

    /// Decorative emoji strip for the scene.
    pub visual_emojis: String,

    /// The alien sentence asserted true under the depicted circumstances.
    pub utterance: String,

    /// Ground-truth condition. Never shown to the player.
    pub truth_condition_hint: String,
}

impl Observation {
    /// Create a new observation.
    pub fn new(
        id: u32,
        context_description: impl Into<String>,
        visual_emojis: impl Into<String>,
        utterance: impl Into<String>,
        truth_condition_hint: impl Into<String>,
    ) -> Self {
        Self {
            id: ObservationId(id),
            context_description: context_description.into(),
            visual_emojis: visual_emojis.into(),
            utterance: utterance.into(),
            truth_condition_hint: truth_condition_hint.into(),
        }
    }

    /// The vocabulary tokens that make up the utterance.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.utterance.split_whitespace()
    }
}

/// A fictional alien language for one level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    /// Locale the scenario text is written in.
    #[serde(default)]
    pub language: Language,

    pub language_name: String,

    /// Display label for the speaker, randomized per playthrough.
    #[serde(default)]
    pub alien_name: String,

    /// Atomic alien words usable in utterances.
    pub vocabulary: Vec<String>,

    /// Ordered log; earlier observations may disambiguate later ones.
    pub observations: Vec<Observation>,

    /// Alien word -> acceptable natural-language synonyms (lowercase).
    #[serde(default)]
    pub solution_keywords: HashMap<String, Vec<String>>,

    /// Educational notes shown after evaluation.
    #[serde(default)]
    pub takeaways: Vec<String>,
}

impl Scenario {
    /// Create an empty scenario for the given locale.
    pub fn new(language: Language, language_name: impl Into<String>) -> Self {
        Self {
            language,
            language_name: language_name.into(),
            alien_name: String::new(),
            vocabulary: Vec::new(),
            observations: Vec::new(),
            solution_keywords: HashMap::new(),
            takeaways: Vec::new(),
        }
    }

    /// Set the speaker's display name.
    pub fn with_alien_name(mut self, alien_name: impl Into<String>) -> Self {
        self.alien_name = alien_name.into();
        self
    }

    /// Set the vocabulary.
    pub fn with_vocabulary<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vocabulary = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the accepted keywords for one vocabulary word.
    pub fn with_keywords<I, S>(mut self, word: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.solution_keywords
            .insert(word.into(), keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Append a takeaway.
    pub fn with_takeaway(mut self, takeaway: impl Into<String>) -> Self {
        self.takeaways.push(takeaway.into());
        self
    }

    /// Append an observation to the log.
    pub fn with_observation(mut self, observation: Observation) -> Self {
        self.observations.push(observation);
        self
    }

    /// Distinct utterances across the log, in first-occurrence order.
    pub fn distinct_utterances(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for observation in &self.observations {
            let utterance = observation.utterance.as_str();
            if !seen.contains(&utterance) {
                seen.push(utterance);
            }
        }
        seen
    }

    /// Accepted keywords for a word. Empty when the word has no entry.
    pub fn keywords_for(&self, word: &str) -> &[String] {
        self.solution_keywords
            .get(word)
            .map(|k| k.as_slice())
            .unwrap_or(&[])
    }

    /// Whether the scenario can be graded locally.
    pub fn has_solution_keywords(&self) -> bool {
        self.solution_keywords.values().any(|k| !k.is_empty())
    }

    /// First observation in which the utterance was asserted.
    pub fn first_observation_of(&self, utterance: &str) -> Option<&Observation> {
        self.observations.iter().find(|o| o.utterance == utterance)
    }

    /// Check if a word belongs to the vocabulary.
    pub fn has_word(&self, word: &str) -> bool {
        self.vocabulary.iter().any(|w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Scenario {
        Scenario::new(Language::English, "Basaltic")
            .with_vocabulary(["Gorm", "Ruz"])
            .with_keywords("Gorm", ["stone"])
            .with_keywords("Ruz", ["red"])
            .with_observation(Observation::new(1, "A stone.", "🪨", "Gorm", "A stone."))
            .with_observation(Observation::new(2, "A red stone.", "🔴🪨", "Ruz Gorm", "A red stone."))
            .with_observation(Observation::new(3, "Another stone.", "🪨", "Gorm", "A stone."))
    }

    #[test]
    fn test_distinct_utterances_keep_first_occurrence_order() {
        let scenario = sample();
        assert_eq!(scenario.distinct_utterances(), vec!["Gorm", "Ruz Gorm"]);
    }

    #[test]
    fn test_observation_words() {
        let observation = Observation::new(1, "", "", "Ruz  Gorm", "");
        let words: Vec<_> = observation.words().collect();
        assert_eq!(words, vec!["Ruz", "Gorm"]);
    }

    #[test]
    fn test_keywords_for_missing_word_is_empty() {
        let scenario = sample();
        assert_eq!(scenario.keywords_for("Gorm"), &["stone".to_string()]);
        assert!(scenario.keywords_for("Vell").is_empty());
    }

    #[test]
    fn test_first_observation_of() {
        let scenario = sample();
        assert_eq!(
            scenario.first_observation_of("Gorm").map(|o| o.id),
            Some(ObservationId(1))
        );
        assert!(scenario.first_observation_of("Zul").is_none());
    }

    #[test]
    fn test_wire_names_are_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert!(json.get("languageName").is_some());
        assert!(json.get("solutionKeywords").is_some());
        assert!(json["observations"][0].get("truthConditionHint").is_some());
        assert_eq!(json["observations"][0]["id"], 1);
    }

    #[test]
    fn test_remote_shape_deserializes_without_keywords() {
        let json = r#"{
            "languageName": "Vitreous",
            "alienName": "Subject X",
            "vocabulary": ["Plim"],
            "observations": [
                {"id": 1, "contextDescription": "Glass.", "visualEmojis": "🪟",
                 "utterance": "Plim", "truthConditionHint": "Glass."}
            ],
            "takeaways": []
        }"#;
        let scenario: Scenario = serde_json::from_str(json).unwrap();
        assert_eq!(scenario.language, Language::English);
        assert!(!scenario.has_solution_keywords());
    }
}
