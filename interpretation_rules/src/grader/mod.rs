//! Local Grader - scores a truth theory by keyword containment.
//!
//! The grading works as follows:
//! 1. **Collect**: Take the distinct utterances of the log in first-occurrence order
//! 2. **Normalize**: Lowercase the player's condition for each utterance
//! 3. **Check**: Split the utterance into words; a word is satisfied when the
//!    condition contains one of its keywords (words without keywords always are)
//! 4. **Count**: An utterance is correct when all of its words are satisfied
//! 5. **Score**: `round(100 * correct / distinct)`, then apply the [`GradingPolicy`]
//!
//! The grader is a pure function of its inputs. Pacing delays belong to the caller.

mod policy;

pub use policy::*;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::content::{ObservationId, Scenario};
use crate::locale::{fill, TextKey};
use crate::theory::{EvaluationResult, PlayerTheory};

/// Grading outcome for one distinct utterance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtteranceVerdict {
    pub utterance: String,

    /// First log entry asserting the utterance, cited in feedback.
    pub log: Option<ObservationId>,

    /// Words whose keywords were not found in the player's condition.
    pub missing_concepts: Vec<String>,
}

impl UtteranceVerdict {
    /// Check if every word of the utterance was satisfied.
    pub fn is_satisfied(&self) -> bool {
        self.missing_concepts.is_empty()
    }
}

/// Full breakdown of a grading pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grading {
    pub verdicts: Vec<UtteranceVerdict>,
    pub score: u8,
    pub is_coherent: bool,
    pub tier: FeedbackTier,
}

impl Grading {
    /// Number of utterances whose words were all satisfied.
    pub fn correct_count(&self) -> usize {
        self.verdicts.iter().filter(|v| v.is_satisfied()).count()
    }

    /// The first unsatisfied utterance in log order.
    pub fn first_failure(&self) -> Option<&UtteranceVerdict> {
        self.verdicts.iter().find(|v| !v.is_satisfied())
    }
}

/// Grade a theory against a scenario without building feedback text.
pub fn grade(scenario: &Scenario, theory: &PlayerTheory, policy: &GradingPolicy) -> Grading {
    let verdicts: Vec<UtteranceVerdict> = scenario
        .distinct_utterances()
        .into_iter()
        .map(|utterance| {
            let condition = theory.condition_for(utterance).to_lowercase();
            let missing_concepts = utterance
                .split_whitespace()
                .filter(|word| !word_satisfied(&condition, scenario.keywords_for(word)))
                .map(str::to_string)
                .collect();

            UtteranceVerdict {
                utterance: utterance.to_string(),
                log: scenario.first_observation_of(utterance).map(|o| o.id),
                missing_concepts,
            }
        })
        .collect();

    let total = verdicts.len();
    let correct = verdicts.iter().filter(|v| v.is_satisfied()).count();
    let score = coherence_score(correct, total);

    debug!(
        scenario = %scenario.language_name,
        correct,
        total,
        score,
        "theory graded"
    );

    Grading {
        verdicts,
        score,
        is_coherent: policy.is_coherent(score),
        tier: policy.tier(score),
    }
}

/// Evaluate a theory with the default thresholds.
pub fn evaluate(scenario: &Scenario, theory: &PlayerTheory) -> EvaluationResult {
    evaluate_with(scenario, theory, &GradingPolicy::default())
}

/// Evaluate a theory and render localized feedback.
pub fn evaluate_with(
    scenario: &Scenario,
    theory: &PlayerTheory,
    policy: &GradingPolicy,
) -> EvaluationResult {
    let grading = grade(scenario, theory, policy);
    let language = scenario.language;

    let mut summary = language.text(grading.tier.text_key()).to_string();
    if let Some(failure) = grading.first_failure() {
        summary.push(' ');
        summary.push_str(&fill(
            language.text(TextKey::FirstFailure),
            &[
                ("utterance", &failure.utterance),
                ("text", theory.condition_for(&failure.utterance)),
            ],
        ));
    }

    let lines: Vec<String> = grading
        .verdicts
        .iter()
        .map(|verdict| {
            if verdict.is_satisfied() {
                fill(
                    language.text(TextKey::VerdictPass),
                    &[("utterance", &verdict.utterance)],
                )
            } else {
                let log = verdict
                    .log
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "?".to_string());
                fill(
                    language.text(TextKey::VerdictFail),
                    &[
                        ("utterance", &verdict.utterance),
                        ("id", &log),
                        ("missing", &verdict.missing_concepts.join(", ")),
                    ],
                )
            }
        })
        .collect();

    EvaluationResult {
        is_coherent: grading.is_coherent,
        score: grading.score,
        feedback: format!("{}\n\n{}", summary, lines.join("\n")),
        alternative_theory: language.text(TextKey::AlternativeTheory).to_string(),
    }
}

/// `round(100 * correct / total)`; zero when there is nothing to grade.
pub fn coherence_score(correct: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 * 100.0) / total as f64).round().min(100.0) as u8
}

fn word_satisfied(condition: &str, keywords: &[String]) -> bool {
    keywords.is_empty()
        || keywords
            .iter()
            .any(|keyword| condition.contains(&keyword.to_lowercase()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentStore, Observation};
    use crate::locale::Language;

    fn arborean() -> Scenario {
        ContentStore::builtin()
            .level(Language::English, 0)
            .cloned()
            .unwrap()
    }

    fn basaltic() -> Scenario {
        ContentStore::builtin()
            .level(Language::English, 1)
            .cloned()
            .unwrap()
    }

    fn verdict<'a>(grading: &'a Grading, utterance: &str) -> &'a UtteranceVerdict {
        grading
            .verdicts
            .iter()
            .find(|v| v.utterance == utterance)
            .unwrap()
    }

    #[test]
    fn test_arborean_perfect_theory() {
        let scenario = arborean();
        assert_eq!(
            scenario.distinct_utterances(),
            vec!["Gavagai", "Nikto", "Klaatu", "Barada"]
        );

        let theory = PlayerTheory::new()
            .with_sentence("Gavagai", "a rabbit is present")
            .with_sentence("Nikto", "a wolf is near")
            .with_sentence("Klaatu", "something runs")
            .with_sentence("Barada", "there is a storm");

        let result = evaluate(&scenario, &theory);
        assert_eq!(result.score, 100);
        assert!(result.is_coherent);
        assert!(result
            .feedback
            .starts_with(Language::English.text(TextKey::FeedbackExceptional)));
    }

    #[test]
    fn test_arborean_weather_is_not_a_rabbit() {
        let scenario = arborean();
        let theory = PlayerTheory::new()
            .with_sentence("Gavagai", "the weather is bad")
            .with_sentence("Nikto", "a wolf is near")
            .with_sentence("Klaatu", "something runs")
            .with_sentence("Barada", "there is a storm");

        let grading = grade(&scenario, &theory, &GradingPolicy::default());
        let gavagai = verdict(&grading, "Gavagai");
        assert!(!gavagai.is_satisfied());
        assert_eq!(gavagai.missing_concepts, vec!["Gavagai".to_string()]);
        assert_eq!(gavagai.log, Some(ObservationId(1)));

        // 3 of 4: rejected at 75, but still in the partial flavor band.
        assert_eq!(grading.score, 75);
        assert!(!grading.is_coherent);
        assert_eq!(grading.tier, FeedbackTier::Partial);
    }

    #[test]
    fn test_feedback_cites_first_failure_literally() {
        let scenario = arborean();
        let theory = PlayerTheory::new().with_sentence("Gavagai", "The Weather is bad");

        let result = evaluate(&scenario, &theory);
        assert!(result.feedback.contains("\"The Weather is bad\""));
        assert!(result.feedback.contains("Log #1"));
        assert!(result.feedback.contains("Missing concepts: Gavagai."));
    }

    #[test]
    fn test_basaltic_compound_utterance() {
        let scenario = basaltic();

        let theory = PlayerTheory::new().with_sentence("Ruz Gorm", "a red stone");
        let grading = grade(&scenario, &theory, &GradingPolicy::default());
        assert!(verdict(&grading, "Ruz Gorm").is_satisfied());

        let theory = PlayerTheory::new().with_sentence("Ruz Gorm", "a stone");
        let grading = grade(&scenario, &theory, &GradingPolicy::default());
        assert_eq!(
            verdict(&grading, "Ruz Gorm").missing_concepts,
            vec!["Ruz".to_string()]
        );
    }

    #[test]
    fn test_compound_lists_every_missing_word() {
        let scenario = basaltic();
        let grading = grade(&scenario, &PlayerTheory::new(), &GradingPolicy::default());
        assert_eq!(
            verdict(&grading, "Zul Vell").missing_concepts,
            vec!["Zul".to_string(), "Vell".to_string()]
        );
    }

    #[test]
    fn test_empty_theory_scores_zero() {
        for language in Language::ALL {
            for scenario in ContentStore::builtin().levels(language) {
                let result = evaluate(scenario, &PlayerTheory::new());
                assert_eq!(result.score, 0);
                assert!(!result.is_coherent);
            }
        }
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let scenario = arborean();
        let theory = PlayerTheory::new().with_sentence("Gavagai", "A RABBIT!");
        let grading = grade(&scenario, &theory, &GradingPolicy::default());
        assert!(verdict(&grading, "Gavagai").is_satisfied());
    }

    #[test]
    fn test_keyword_matches_as_substring() {
        let scenario = arborean();
        // "rabbits" contains "rabbit"
        let theory = PlayerTheory::new().with_sentence("Gavagai", "rabbits abound");
        let grading = grade(&scenario, &theory, &GradingPolicy::default());
        assert!(verdict(&grading, "Gavagai").is_satisfied());
    }

    #[test]
    fn test_unkeyed_word_is_vacuously_satisfied() {
        let scenario = Scenario::new(Language::English, "Sparse")
            .with_vocabulary(["Pa", "Qu"])
            .with_keywords("Pa", ["light"])
            .with_observation(Observation::new(1, "", "", "Pa Qu", ""));

        let theory = PlayerTheory::new().with_sentence("Pa Qu", "light");
        let result = evaluate(&scenario, &theory);
        assert_eq!(result.score, 100);
    }

    #[test]
    fn test_evaluate_is_deterministic() {
        let scenario = basaltic();
        let theory = PlayerTheory::new()
            .with_sentence("Gorm", "stone")
            .with_sentence("Ruz Gorm", "red stone")
            .with_sentence("Zul Vell", "blue");

        let a = evaluate(&scenario, &theory);
        let b = evaluate(&scenario, &theory);
        assert_eq!(a, b);
    }

    #[test]
    fn test_score_rounds_to_nearest() {
        assert_eq!(coherence_score(1, 3), 33);
        assert_eq!(coherence_score(2, 3), 67);
        assert_eq!(coherence_score(1, 8), 13);
        assert_eq!(coherence_score(0, 0), 0);
        assert_eq!(coherence_score(5, 5), 100);
    }

    #[test]
    fn test_score_matches_correct_fraction() {
        let scenario = basaltic();
        let theory = PlayerTheory::new()
            .with_sentence("Gorm", "stone")
            .with_sentence("Ruz Gorm", "red stone")
            .with_sentence("Zul Vell", "blue sky")
            .with_sentence("Ruz Vell", "red sky");

        let grading = grade(&scenario, &theory, &GradingPolicy::default());
        let total = scenario.distinct_utterances().len();
        assert_eq!(total, 6);
        assert_eq!(grading.correct_count(), 4);
        assert_eq!(grading.score, coherence_score(4, total));
        assert!(grading.score <= 100);
    }

    #[test]
    fn test_custom_policy() {
        let scenario = arborean();
        let theory = PlayerTheory::new()
            .with_sentence("Gavagai", "rabbit")
            .with_sentence("Nikto", "wolf")
            .with_sentence("Klaatu", "run");
        let lenient = GradingPolicy {
            pass_threshold: 70,
            partial_threshold: 50,
        };
        assert!(evaluate_with(&scenario, &theory, &lenient).is_coherent);
        assert!(!evaluate(&scenario, &theory).is_coherent);
    }

    #[test]
    fn test_spanish_feedback() {
        let scenario = ContentStore::builtin()
            .level(Language::Spanish, 0)
            .cloned()
            .unwrap();
        let theory = PlayerTheory::new()
            .with_sentence("Gavagai", "hay un conejo")
            .with_sentence("Nikto", "un lobo")
            .with_sentence("Klaatu", "algo corre")
            .with_sentence("Barada", "lluvia");

        let result = evaluate(&scenario, &theory);
        assert_eq!(result.score, 100);
        assert!(result.feedback.contains("[BIEN]"));
        assert_eq!(
            result.alternative_theory,
            Language::Spanish.text(TextKey::AlternativeTheory)
        );
    }
}
