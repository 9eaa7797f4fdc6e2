//! Scenario Selector - picks a level and names its speaker.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::content::{ContentError, ContentStore, Scenario};
use crate::locale::{Language, TextKey};

/// Philosophers lending their names to the alien subjects.
pub const SUBJECT_NAMES: [&str; 14] = [
    "Quine",
    "Davidson",
    "Tarski",
    "Sellars",
    "Boole",
    "Cantor",
    "Glüer",
    "Ramberg",
    "Wikforss",
    "Verheggen",
    "Pedace",
    "Moretti",
    "Simpson",
    "Wittgenstein",
];

/// Selects levels from a content store.
#[derive(Debug, Clone)]
pub struct ScenarioSelector {
    store: ContentStore,
}

impl ScenarioSelector {
    /// Create a selector over the given store.
    pub fn new(store: ContentStore) -> Self {
        Self { store }
    }

    /// Create a selector over the built-in content.
    pub fn builtin() -> Self {
        Self::new(ContentStore::builtin())
    }

    /// The underlying store.
    pub fn store(&self) -> &ContentStore {
        &self.store
    }

    /// Number of levels for a language.
    pub fn level_count(&self, language: Language) -> usize {
        self.store.level_count(language)
    }

    /// Clamp a level index into the playable range.
    pub fn clamp_level(&self, language: Language, level: usize) -> usize {
        level.min(self.level_count(language).saturating_sub(1))
    }

    /// Fetch a level with a freshly drawn speaker name.
    ///
    /// Indices past the last level return the last level. The name is drawn from a
    /// pool shuffled on every call, so two calls rarely agree.
    pub fn get_scenario<R: Rng + ?Sized>(
        &self,
        language: Language,
        level: usize,
        rng: &mut R,
    ) -> Result<Scenario, ContentError> {
        let index = self.clamp_level(language, level);
        let mut scenario = self
            .store
            .level(language, index)
            .cloned()
            .ok_or(ContentError::NoLevels(language))?;

        let names = shuffled_names(rng);
        scenario.alien_name = subject_name(language, names[index % names.len()]);

        debug!(
            %language,
            requested = level,
            level = index,
            alien = %scenario.alien_name,
            "scenario selected"
        );
        Ok(scenario)
    }
}

impl Default for ScenarioSelector {
    fn default() -> Self {
        Self::builtin()
    }
}

fn shuffled_names<R: Rng + ?Sized>(rng: &mut R) -> Vec<&'static str> {
    let mut names = SUBJECT_NAMES.to_vec();
    names.shuffle(rng);
    names
}

fn subject_name(language: Language, name: &str) -> String {
    format!("{} {}", language.text(TextKey::SubjectPrefix), name)
}
