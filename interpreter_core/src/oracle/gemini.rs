//! Gemini `generateContent` client with structured JSON output.

use interpretation_rules::{EvaluationResult, Language, PlayerTheory, Scenario};
use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::debug;

use super::{
    evaluation_prompt, evaluation_schema, parse_evaluation, parse_scenario, scenario_prompt,
    scenario_schema, Oracle, OracleError,
};
use crate::config::OracleConfig;

/// Blocking client for the Gemini REST API.
pub struct GeminiOracle {
    client: Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiOracle {
    /// Build a client from config. Fails with `NotConfigured` when the key is missing.
    pub fn from_config(config: &OracleConfig) -> Result<Self, OracleError> {
        let api_key = config
            .api_key()
            .ok_or_else(|| OracleError::NotConfigured(config.api_key_env.clone()))?;

        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| OracleError::Network(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key,
        })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.endpoint.trim_end_matches('/'),
            self.model
        )
    }

    /// Send one prompt and return the model's JSON text.
    fn generate(&self, prompt: &str, schema: Value) -> Result<String, OracleError> {
        let body = json!({
            "contents": [{ "role": "user", "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": schema
            }
        });

        let url = self.url();
        debug!(%url, model = %self.model, "calling remote model");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| OracleError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(OracleError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let reply: GenerateContentResponse = response
            .json()
            .map_err(|e| OracleError::Network(e.to_string()))?;
        reply.into_text()
    }
}

impl std::fmt::Debug for GeminiOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiOracle")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .finish_non_exhaustive()
    }
}

impl Oracle for GeminiOracle {
    fn name(&self) -> &str {
        &self.model
    }

    fn generate_scenario(&self, language: Language) -> Result<Scenario, OracleError> {
        let text = self.generate(&scenario_prompt(language), scenario_schema())?;
        parse_scenario(language, &text)
    }

    fn evaluate_theory(
        &self,
        scenario: &Scenario,
        theory: &PlayerTheory,
    ) -> Result<EvaluationResult, OracleError> {
        let prompt = evaluation_prompt(scenario, theory)?;
        let text = self.generate(&prompt, evaluation_schema())?;
        parse_evaluation(&text)
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GenerateContentResponse {
    candidates: Vec<Candidate>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Part {
    text: Option<String>,
}

impl GenerateContentResponse {
    /// Concatenated text parts of the first candidate.
    fn into_text(self) -> Result<String, OracleError> {
        let text: String = self
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
            .unwrap_or_default();

        if text.trim().is_empty() {
            Err(OracleError::EmptyResponse)
        } else {
            Ok(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(json: &str) -> GenerateContentResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_reply_text_joins_parts() {
        let reply = response(
            r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "{\"a\":"}, {"text": "1}"}]}}]}"#,
        );
        assert_eq!(reply.into_text().unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_reply_without_text_is_empty() {
        assert!(matches!(
            response(r#"{"candidates": []}"#).into_text(),
            Err(OracleError::EmptyResponse)
        ));
        assert!(matches!(
            response(r#"{"candidates": [{"finishReason": "SAFETY"}]}"#).into_text(),
            Err(OracleError::EmptyResponse)
        ));
        assert!(matches!(response("{}").into_text(), Err(OracleError::EmptyResponse)));
    }

    #[test]
    fn test_missing_key_is_not_configured() {
        let config = OracleConfig {
            api_key_env: "RADICAL_INTERPRETER_TEST_MISSING_KEY".to_string(),
            ..OracleConfig::default()
        };
        assert!(matches!(
            GeminiOracle::from_config(&config),
            Err(OracleError::NotConfigured(name)) if name == "RADICAL_INTERPRETER_TEST_MISSING_KEY"
        ));
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        let oracle = GeminiOracle {
            client: Client::new(),
            endpoint: "https://example.test/".to_string(),
            model: "gemini-2.5-flash".to_string(),
            api_key: "k".to_string(),
        };
        assert_eq!(
            oracle.url(),
            "https://example.test/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
