//! Oracle - an optional remote model that writes scenarios and reviews theories.
//!
//! Every oracle failure is recoverable: the driver falls back to the static levels,
//! or to an "evaluation unavailable" verdict for a review. Replies are held to the
//! same content rules as built-in levels before they reach a session.

mod gemini;
mod prompt;

pub use gemini::*;
pub use prompt::*;

use interpretation_rules::{
    validate_scenario, ContentError, EvaluationResult, Language, PlayerTheory, Scenario,
};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("API key not configured (set ${0})")]
    NotConfigured(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("API error (HTTP {status}): {body}")]
    Api { status: u16, body: String },

    #[error("empty response from model")]
    EmptyResponse,

    #[error("malformed response: {0}")]
    InvalidResponse(#[from] serde_json::Error),

    #[error("generated scenario rejected: {0}")]
    InvalidContent(#[from] ContentError),
}

/// A source of generated scenarios and theory reviews.
pub trait Oracle {
    /// Name for logs.
    fn name(&self) -> &str;

    /// Invent a new alien language, written in the given locale.
    fn generate_scenario(&self, language: Language) -> Result<Scenario, OracleError>;

    /// Review a theory against a scenario.
    fn evaluate_theory(
        &self,
        scenario: &Scenario,
        theory: &PlayerTheory,
    ) -> Result<EvaluationResult, OracleError>;
}

/// Decode and validate a generated scenario.
pub fn parse_scenario(language: Language, payload: &str) -> Result<Scenario, OracleError> {
    let mut scenario: Scenario = serde_json::from_str(payload)?;
    scenario.language = language;
    validate_scenario(&scenario)?;
    Ok(scenario)
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RemoteEvaluation {
    is_coherent: bool,
    score: f64,
    feedback: String,
    #[serde(default)]
    alternative_theory: String,
}

/// Decode a theory review. Scores are rounded and clamped to 0-100.
pub fn parse_evaluation(payload: &str) -> Result<EvaluationResult, OracleError> {
    let remote: RemoteEvaluation = serde_json::from_str(payload)?;
    Ok(EvaluationResult {
        is_coherent: remote.is_coherent,
        score: remote.score.round().clamp(0.0, 100.0) as u8,
        feedback: remote.feedback,
        alternative_theory: remote.alternative_theory,
    })
}
