//! Prompt assembly and response schemas for the remote model.

use interpretation_rules::{Language, PlayerTheory, Scenario};
use serde_json::{json, Value};

use super::OracleError;

/// Words and observations requested per generated scenario.
pub const GENERATED_VOCABULARY: usize = 5;
pub const GENERATED_OBSERVATIONS: usize = 8;

/// Prompt asking for a fresh alien language.
pub fn scenario_prompt(language: Language) -> String {
    let mut prompt = String::new();

    prompt.push_str("Create a radical interpretation puzzle game scenario.\n\n");
    prompt.push_str("## Requirements\n");
    prompt.push_str(&format!(
        "1. {} distinct alien words in `vocabulary`.\n",
        GENERATED_VOCABULARY
    ));
    prompt.push_str(&format!(
        "2. {} observations with initial ambiguity, ids numbered from 1.\n",
        GENERATED_OBSERVATIONS
    ));
    prompt.push_str(
        "3. Every utterance is one or more vocabulary words separated by single spaces.\n",
    );
    prompt.push_str("4. Later observations disambiguate earlier ones.\n");
    prompt.push_str(&format!(
        "5. Write descriptions, hints and takeaways in {}.\n\n",
        language.native_name()
    ));
    prompt.push_str("Output JSON.");

    prompt
}

/// Prompt asking for a review of the player's theory.
pub fn evaluation_prompt(scenario: &Scenario, theory: &PlayerTheory) -> Result<String, OracleError> {
    let observations = serde_json::to_string(&scenario.observations)?;
    let sentences = serde_json::to_string(theory)?;

    let mut prompt = String::new();
    prompt.push_str(
        "Act as a strict Logic Professor evaluating a student's Truth Theory (T-Theory) \
         for an alien language.\n\n",
    );
    prompt.push_str("## Observations (Data)\n");
    prompt.push_str(&observations);
    prompt.push_str("\n\n## Student's T-Sentences\n");
    prompt.push_str(&sentences);
    prompt.push_str("\n\n## Criteria\n");
    prompt.push_str(
        "1. Principle of Charity: do the definitions make the alien's statements TRUE \
         in the observed contexts?\n",
    );
    prompt.push_str("2. Coherence: is the theory consistent?\n");
    prompt.push_str("3. Score from 0 to 100.\n\n");
    prompt.push_str(&format!(
        "Write the feedback in {}. Return JSON.",
        scenario.language.native_name()
    ));

    Ok(prompt)
}

/// Structured-output schema for generated scenarios.
pub fn scenario_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "languageName": { "type": "STRING" },
            "alienName": { "type": "STRING" },
            "vocabulary": {
                "type": "ARRAY",
                "items": { "type": "STRING" },
                "description": format!("A list of {} distinct alien words.", GENERATED_VOCABULARY)
            },
            "observations": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "id": { "type": "INTEGER" },
                        "contextDescription": {
                            "type": "STRING",
                            "description": "A vivid description of the scene."
                        },
                        "visualEmojis": { "type": "STRING" },
                        "utterance": { "type": "STRING" },
                        "truthConditionHint": { "type": "STRING" }
                    },
                    "required": ["id", "contextDescription", "visualEmojis", "utterance", "truthConditionHint"]
                }
            },
            "takeaways": {
                "type": "ARRAY",
                "items": { "type": "STRING" }
            }
        },
        "required": ["languageName", "alienName", "vocabulary", "observations"]
    })
}

/// Structured-output schema for theory reviews.
pub fn evaluation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "isCoherent": { "type": "BOOLEAN" },
            "score": { "type": "INTEGER" },
            "feedback": { "type": "STRING" },
            "alternativeTheory": { "type": "STRING" }
        },
        "required": ["isCoherent", "score", "feedback", "alternativeTheory"]
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use interpretation_rules::ContentStore;

    #[test]
    fn test_scenario_prompt_names_locale() {
        assert!(scenario_prompt(Language::English).contains("in English"));
        assert!(scenario_prompt(Language::Spanish).contains("in Español"));
        assert!(scenario_prompt(Language::English).contains("8 observations"));
    }

    #[test]
    fn test_evaluation_prompt_embeds_data_as_json() {
        let scenario = ContentStore::builtin()
            .level(Language::English, 0)
            .cloned()
            .unwrap();
        let theory = PlayerTheory::new().with_sentence("Gavagai", "a rabbit");

        let prompt = evaluation_prompt(&scenario, &theory).unwrap();
        assert!(prompt.contains("\"contextDescription\""));
        assert!(prompt.contains("\"Gavagai\":\"a rabbit\""));
        assert!(prompt.contains("Principle of Charity"));
    }

    #[test]
    fn test_schemas_require_fields() {
        let schema = evaluation_schema();
        assert_eq!(schema["required"].as_array().map(|r| r.len()), Some(4));

        let schema = scenario_schema();
        assert_eq!(schema["properties"]["observations"]["type"], "ARRAY");
        assert!(schema["properties"].get("solutionKeywords").is_none());
    }
}
