//! Interface locales and the player-facing string table.
//!
//! Alien content is authored per locale in [`crate::content`]; everything else the
//! player reads is looked up here by [`TextKey`].

mod strings;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// The two supported interface languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "es")]
    Spanish,
}

/// Raised when parsing an unsupported language code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported language '{0}' (expected 'en' or 'es')")]
pub struct UnknownLanguage(pub String);

impl Language {
    /// Every supported language.
    pub const ALL: [Language; 2] = [Language::English, Language::Spanish];

    /// ISO 639-1 code.
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
        }
    }

    /// Name of the language in itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Español",
        }
    }

    /// Look up a player-facing string.
    pub fn text(&self, key: TextKey) -> &'static str {
        match self {
            Language::English => strings::english(key),
            Language::Spanish => strings::spanish(key),
        }
    }

    /// The language picker order, shuffled so neither locale is privileged.
    pub fn display_order<R: Rng + ?Sized>(rng: &mut R) -> Vec<Language> {
        let mut order = Self::ALL.to_vec();
        order.shuffle(rng);
        order
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Language {
    type Err = UnknownLanguage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::English),
            "es" | "spanish" | "español" | "espanol" => Ok(Language::Spanish),
            other => Err(UnknownLanguage(other.to_string())),
        }
    }
}

/// Identifiers for every player-facing string.
///
/// Templates use `{name}` placeholders, filled with [`fill`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextKey {
    // Intro
    Title,
    Tagline,
    CoreDirectives,
    DirectiveObservation,
    DirectiveTSchema,
    DirectiveCharity,
    BeginSimulation,

    // Loading and play
    GeneratingScenario,
    /// `{current}`, `{total}`
    ObservationLog,
    /// `{id}`
    LogEntry,
    NextObservation,
    SubmitForReview,
    NewSimulation,
    PeerReviewing,
    TheoryBuilder,
    TheoryInstruction,
    /// `{utterance}`
    IsTrueIff,
    /// `{level}`, `{total}`
    LevelLabel,

    // Results
    TheoryAccepted,
    TheoryRejected,
    /// `{score}`
    CoherenceScore,
    PeerReviewFeedback,
    IndeterminacyNote,
    IndeterminacyQuote,
    Takeaways,
    ReviseTheory,
    NextLevel,
    AllLevelsComplete,

    // Final report
    FinalReport,
    LexiconIntro,
    MetaReflection,
    ReflectionIntro,
    ObjectLanguageTitle,
    ObjectLanguageDesc,
    TSchemaTitle,
    TSchemaDesc,
    MetaLanguageTitle,
    MetaLanguageDesc,
    RestartCampaign,
    /// `{score}`
    AverageScore,

    // Field manual
    ManualTitle,
    ManualGoalTitle,
    ManualGoalBody,
    ManualCharityTitle,
    ManualCharityBody,
    ManualIndeterminacyTitle,
    ManualIndeterminacyBody,

    // Grader
    SubjectPrefix,
    FeedbackExceptional,
    FeedbackPartial,
    FeedbackPoor,
    /// `{utterance}`, `{text}`
    FirstFailure,
    /// `{utterance}`
    VerdictPass,
    /// `{utterance}`, `{id}`, `{missing}`
    VerdictFail,
    AlternativeTheory,
    EvaluationUnavailable,

    // Terminal front end
    Help,
    ActionDenied,
    UnknownCommand,
}

/// Field manual sections as (heading, body) pairs, in reading order.
pub const MANUAL_SECTIONS: [(TextKey, TextKey); 3] = [
    (TextKey::ManualGoalTitle, TextKey::ManualGoalBody),
    (TextKey::ManualCharityTitle, TextKey::ManualCharityBody),
    (TextKey::ManualIndeterminacyTitle, TextKey::ManualIndeterminacyBody),
];

/// Render the field manual, the in-game reference on radical interpretation.
pub fn field_manual(language: Language) -> String {
    let mut text = format!("== {} ==\n", language.text(TextKey::ManualTitle));
    for (title, body) in MANUAL_SECTIONS {
        text.push('\n');
        text.push_str(language.text(title));
        text.push('\n');
        text.push_str(language.text(body));
        text.push('\n');
    }
    text
}

/// Substitute `{name}` placeholders in a template.
pub fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in values {
        out = out.replace(&format!("{{{}}}", name), value);
    }
    out
}
