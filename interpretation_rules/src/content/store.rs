//! Content store - the per-language list of levels.

use serde::Deserialize;
use std::collections::HashMap;
use tracing::{debug, warn};

use super::{english, spanish, unkeyed_words, validate_scenario, ContentError, Scenario};
use crate::locale::Language;

/// Immutable per-language level tables.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    levels: HashMap<Language, Vec<Scenario>>,
}

/// A content pack as written in TOML.
#[derive(Debug, Deserialize)]
struct ContentPack {
    language: Language,
    levels: Vec<Scenario>,
}

impl ContentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The hand-authored levels for both locales.
    pub fn builtin() -> Self {
        let mut levels = HashMap::new();
        levels.insert(Language::English, english::levels());
        levels.insert(Language::Spanish, spanish::levels());
        Self { levels }
    }

    /// Replace the levels of one language. Every scenario is validated first.
    pub fn with_levels(
        mut self,
        language: Language,
        scenarios: Vec<Scenario>,
    ) -> Result<Self, ContentError> {
        self.set_levels(language, scenarios)?;
        Ok(self)
    }

    /// Load a TOML content pack, replacing the levels of the pack's language.
    pub fn load_pack(&mut self, source: &str) -> Result<Language, ContentError> {
        let pack: ContentPack = toml::from_str(source)?;
        let language = pack.language;
        self.set_levels(language, pack.levels)?;
        Ok(language)
    }

    fn set_levels(
        &mut self,
        language: Language,
        mut scenarios: Vec<Scenario>,
    ) -> Result<(), ContentError> {
        for scenario in &mut scenarios {
            validate_scenario(scenario)?;
            scenario.language = language;

            let gaps = unkeyed_words(scenario);
            if !gaps.is_empty() {
                warn!(
                    scenario = %scenario.language_name,
                    words = ?gaps,
                    "words without keywords will always be graded as satisfied"
                );
            }
        }

        debug!(%language, levels = scenarios.len(), "content loaded");
        self.levels.insert(language, scenarios);
        Ok(())
    }

    /// All levels for a language, in play order.
    pub fn levels(&self, language: Language) -> &[Scenario] {
        self.levels
            .get(&language)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Number of levels for a language.
    pub fn level_count(&self, language: Language) -> usize {
        self.levels(language).len()
    }

    /// A level by index, without clamping.
    pub fn level(&self, language: Language, index: usize) -> Option<&Scenario> {
        self.levels(language).get(index)
    }
}
