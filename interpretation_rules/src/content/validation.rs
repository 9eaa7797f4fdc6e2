//! Content validation - the structural rules every scenario must obey.

use std::collections::HashSet;
use thiserror::Error;

use super::{ObservationId, Scenario};
use crate::locale::Language;

/// Errors raised by malformed scenario content.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("scenario '{0}' has an empty vocabulary")]
    EmptyVocabulary(String),

    #[error("scenario '{0}' has no observations")]
    NoObservations(String),

    #[error("scenario '{scenario}' repeats observation id {id}")]
    DuplicateObservation { scenario: String, id: ObservationId },

    #[error("scenario '{scenario}': observation {id} has an empty utterance")]
    EmptyUtterance { scenario: String, id: ObservationId },

    #[error("scenario '{scenario}': word '{word}' in utterance '{utterance}' is not in the vocabulary")]
    UnknownWord {
        scenario: String,
        utterance: String,
        word: String,
    },

    #[error("no levels available for language '{0}'")]
    NoLevels(Language),

    #[error("invalid content pack: {0}")]
    Pack(#[from] toml::de::Error),
}

/// Check that a scenario is playable.
///
/// Every utterance must be one or more whitespace-separated vocabulary words, and
/// observation ids must be unique.
pub fn validate_scenario(scenario: &Scenario) -> Result<(), ContentError> {
    let name = || scenario.language_name.clone();

    if scenario.vocabulary.is_empty() {
        return Err(ContentError::EmptyVocabulary(name()));
    }
    if scenario.observations.is_empty() {
        return Err(ContentError::NoObservations(name()));
    }

    let mut ids = HashSet::new();
    for observation in &scenario.observations {
        if !ids.insert(observation.id) {
            return Err(ContentError::DuplicateObservation {
                scenario: name(),
                id: observation.id,
            });
        }

        let mut words = observation.words().peekable();
        if words.peek().is_none() {
            return Err(ContentError::EmptyUtterance {
                scenario: name(),
                id: observation.id,
            });
        }

        for word in words {
            if !scenario.has_word(word) {
                return Err(ContentError::UnknownWord {
                    scenario: name(),
                    utterance: observation.utterance.clone(),
                    word: word.to_string(),
                });
            }
        }
    }

    Ok(())
}

/// Words used in utterances that have no keyword entry.
///
/// The grader treats such words as satisfied, so a non-empty result usually means
/// an authoring gap.
pub fn unkeyed_words(scenario: &Scenario) -> Vec<&str> {
    let mut words = Vec::new();
    for observation in &scenario.observations {
        for word in observation.words() {
            if scenario.keywords_for(word).is_empty() && !words.contains(&word) {
                words.push(word);
            }
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Observation;

    fn base() -> Scenario {
        Scenario::new(Language::English, "Umbral")
            .with_vocabulary(["Zan", "Xo"])
            .with_keywords("Zan", ["light"])
            .with_observation(Observation::new(1, "Sun.", "☀️", "Zan", "It is light."))
    }

    #[test]
    fn test_valid_scenario() {
        assert!(validate_scenario(&base()).is_ok());
    }

    #[test]
    fn test_unknown_word_rejected() {
        let scenario = base().with_observation(Observation::new(2, "Night.", "🌑", "Xo Korn", ""));
        let err = validate_scenario(&scenario).unwrap_err();
        assert!(matches!(err, ContentError::UnknownWord { ref word, .. } if word == "Korn"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let scenario = base().with_observation(Observation::new(1, "Again.", "☀️", "Zan", ""));
        assert!(matches!(
            validate_scenario(&scenario),
            Err(ContentError::DuplicateObservation { id: ObservationId(1), .. })
        ));
    }

    #[test]
    fn test_empty_utterance_rejected() {
        let scenario = base().with_observation(Observation::new(2, "Silence.", "", "   ", ""));
        assert!(matches!(
            validate_scenario(&scenario),
            Err(ContentError::EmptyUtterance { .. })
        ));
    }

    #[test]
    fn test_empty_scenario_rejected() {
        let scenario = Scenario::new(Language::English, "Void");
        assert!(matches!(
            validate_scenario(&scenario),
            Err(ContentError::EmptyVocabulary(_))
        ));

        let scenario = Scenario::new(Language::English, "Void").with_vocabulary(["A"]);
        assert!(matches!(
            validate_scenario(&scenario),
            Err(ContentError::NoObservations(_))
        ));
    }

    #[test]
    fn test_unkeyed_words() {
        let scenario = base().with_observation(Observation::new(2, "Night.", "🌑", "Xo Zan", ""));
        assert_eq!(unkeyed_words(&scenario), vec!["Xo"]);
    }
}
