//! Interpreter - runs the asynchronous slots of a session.
//!
//! The session only changes state. This driver fills the `Loading` and `Evaluating`
//! slots: it waits out the pacing delay, asks the oracle when one is configured,
//! and falls back to static content when the oracle is missing or fails.

use interpretation_rules::{
    evaluate_with, ContentError, ContentStore, EvaluationResult, GradingPolicy, Language,
    PlayerTheory, Scenario, ScenarioSelector, TextKey,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::{read_file, ConfigError, InterpreterConfig, PacingConfig};
use crate::oracle::{GeminiOracle, Oracle, OracleError};
use crate::session::{GameSession, GameState, SessionError};

pub struct Interpreter {
    selector: ScenarioSelector,
    oracle: Option<Box<dyn Oracle>>,
    generate_scenarios: bool,
    policy: GradingPolicy,
    pacing: PacingConfig,
    rng: StdRng,
}

impl Interpreter {
    /// A local-only interpreter with entropy-seeded randomness.
    pub fn new(selector: ScenarioSelector, policy: GradingPolicy, pacing: PacingConfig) -> Self {
        Self {
            selector,
            oracle: None,
            generate_scenarios: false,
            policy,
            pacing,
            rng: StdRng::from_entropy(),
        }
    }

    /// Build from config: built-in content plus the optional pack, and the Gemini
    /// oracle when enabled. A missing API key disables the oracle with a warning.
    pub fn from_config(config: &InterpreterConfig) -> Result<Self, ConfigError> {
        let mut store = ContentStore::builtin();
        if let Some(path) = &config.content_pack {
            let language = store.load_pack(&read_file(path)?)?;
            info!(path = %path.display(), %language, "content pack loaded");
        }

        let mut interpreter = Self::new(ScenarioSelector::new(store), config.grading, config.pacing);

        if config.oracle.enabled {
            match GeminiOracle::from_config(&config.oracle) {
                Ok(oracle) => {
                    interpreter =
                        interpreter.with_oracle(Box::new(oracle), config.oracle.generate_scenarios);
                }
                Err(e) => warn!(error = %e, "remote oracle disabled"),
            }
        }

        Ok(interpreter)
    }

    pub fn with_oracle(mut self, oracle: Box<dyn Oracle>, generate_scenarios: bool) -> Self {
        info!(oracle = oracle.name(), generate_scenarios, "remote oracle attached");
        self.oracle = Some(oracle);
        self.generate_scenarios = generate_scenarios;
        self
    }

    /// Replace the random source, e.g. with a seeded one.
    pub fn with_rng(mut self, rng: StdRng) -> Self {
        self.rng = rng;
        self
    }

    pub fn selector(&self) -> &ScenarioSelector {
        &self.selector
    }

    pub fn policy(&self) -> &GradingPolicy {
        &self.policy
    }

    pub fn has_oracle(&self) -> bool {
        self.oracle.is_some()
    }

    pub fn rng_mut(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// A fresh session sized to the language's level count.
    pub fn new_session(&self, language: Language) -> GameSession {
        GameSession::new(language, self.selector.level_count(language))
    }

    pub fn change_language(
        &self,
        session: &mut GameSession,
        language: Language,
    ) -> Result<(), SessionError> {
        session.set_language(language, self.selector.level_count(language))
    }

    /// Start a level and fill the loading slot.
    pub fn begin(&mut self, session: &mut GameSession, level: usize) -> Result<GameState, SessionError> {
        session.start(level)?;
        self.load(session)
    }

    /// Move to the next level and fill the loading slot.
    pub fn advance(&mut self, session: &mut GameSession) -> Result<GameState, SessionError> {
        session.next_level()?;
        self.load(session)
    }

    /// Submit the theory and fill the evaluation slot.
    pub fn submit(&mut self, session: &mut GameSession) -> Result<GameState, SessionError> {
        session.submit()?;
        pause(self.pacing.evaluation_delay());

        let result = {
            let scenario = session.scenario().ok_or(SessionError::NoActiveScenario)?;
            self.assess(scenario, session.theory())
        };
        session.finish_evaluation(result)
    }

    fn load(&mut self, session: &mut GameSession) -> Result<GameState, SessionError> {
        pause(self.pacing.load_delay());

        match self.acquire_scenario(session.language(), session.level_index()) {
            Ok(scenario) => session.finish_load(scenario)?,
            Err(e) => {
                warn!(session = %session.id(), error = %e, "no scenario available");
                session.abort_load()?;
            }
        }
        Ok(session.state())
    }

    /// A remotely generated scenario when enabled, otherwise the static level.
    pub fn acquire_scenario(&mut self, language: Language, level: usize) -> Result<Scenario, ContentError> {
        if self.generate_scenarios {
            if let Some(oracle) = &self.oracle {
                match oracle.generate_scenario(language) {
                    Ok(mut scenario) => {
                        if scenario.alien_name.trim().is_empty() {
                            if let Ok(named) = self.selector.get_scenario(language, level, &mut self.rng) {
                                scenario.alien_name = named.alien_name;
                            }
                        }
                        return Ok(scenario);
                    }
                    Err(e) => warn!(oracle = oracle.name(), error = %e, "scenario generation failed, using static level"),
                }
            }
        }
        self.selector.get_scenario(language, level, &mut self.rng)
    }

    /// Grade locally when the scenario has keywords, otherwise ask the oracle.
    pub fn assess(&self, scenario: &Scenario, theory: &PlayerTheory) -> EvaluationResult {
        if scenario.has_solution_keywords() {
            return evaluate_with(scenario, theory, &self.policy);
        }

        let remote = match &self.oracle {
            Some(oracle) => oracle.evaluate_theory(scenario, theory),
            None => Err(OracleError::NotConfigured("oracle".to_string())),
        };
        match remote {
            Ok(result) => result,
            Err(e) => {
                warn!(error = %e, scenario = %scenario.language_name, "remote evaluation failed");
                unavailable(scenario.language)
            }
        }
    }
}

/// Verdict for a theory nobody could review.
fn unavailable(language: Language) -> EvaluationResult {
    EvaluationResult {
        is_coherent: false,
        score: 0,
        feedback: language.text(TextKey::EvaluationUnavailable).to_string(),
        alternative_theory: language.text(TextKey::AlternativeTheory).to_string(),
    }
}

fn pause(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
