//! Campaign archive and the final field report compiled from it.

use interpretation_rules::{fill, Language, PlayerTheory, Scenario, TextKey};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A passed level, frozen at the moment it was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignEntry {
    /// Zero-based level index.
    pub level: usize,
    pub language_name: String,
    pub alien_name: String,

    /// Utterance -> truth condition, in log order.
    pub lexicon: Vec<(String, String)>,
    pub score: u8,
}

/// Passed levels of the current playthrough, keyed by level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    entries: BTreeMap<usize, CampaignEntry>,
}

impl Campaign {
    pub fn new() -> Self {
        Self::default()
    }

    /// Archive a passed level. Passing the same level again replaces the entry.
    pub fn record(&mut self, level: usize, scenario: &Scenario, theory: &PlayerTheory, score: u8) {
        let lexicon = scenario
            .distinct_utterances()
            .into_iter()
            .map(|u| (u.to_string(), theory.condition_for(u).to_string()))
            .collect();

        self.entries.insert(
            level,
            CampaignEntry {
                level,
                language_name: scenario.language_name.clone(),
                alien_name: scenario.alien_name.clone(),
                lexicon,
                score,
            },
        );
    }

    pub fn entry(&self, level: usize) -> Option<&CampaignEntry> {
        self.entries.get(&level)
    }

    /// Entries in level order.
    pub fn entries(&self) -> impl Iterator<Item = &CampaignEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// The closing summary: every accepted lexicon plus the meta-reflection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinalReport {
    pub language: Language,
    pub entries: Vec<CampaignEntry>,
    pub total_levels: usize,
}

impl FinalReport {
    pub fn compile(campaign: &Campaign, language: Language, total_levels: usize) -> Self {
        Self {
            language,
            entries: campaign.entries().cloned().collect(),
            total_levels,
        }
    }

    /// Mean score over the archived levels, 0 when none passed.
    pub fn average_score(&self) -> u8 {
        if self.entries.is_empty() {
            return 0;
        }
        let sum: u32 = self.entries.iter().map(|e| e.score as u32).sum();
        (sum as f64 / self.entries.len() as f64).round() as u8
    }

    /// Render for the terminal.
    pub fn to_text(&self) -> String {
        let lang = self.language;
        let mut text = String::new();

        text.push_str(&format!("== {} ==\n", lang.text(TextKey::FinalReport)));
        text.push_str(lang.text(TextKey::LexiconIntro));
        text.push_str("\n\n");

        for entry in &self.entries {
            let label = fill(
                lang.text(TextKey::LevelLabel),
                &[
                    ("level", &(entry.level + 1).to_string()),
                    ("total", &self.total_levels.to_string()),
                ],
            );
            text.push_str(&format!(
                "## {} - {} ({})\n",
                label, entry.language_name, entry.alien_name
            ));
            for (utterance, condition) in &entry.lexicon {
                let head = fill(lang.text(TextKey::IsTrueIff), &[("utterance", utterance)]);
                text.push_str(&format!("- {} {}\n", head, condition));
            }
            text.push_str(&fill(
                lang.text(TextKey::CoherenceScore),
                &[("score", &entry.score.to_string())],
            ));
            text.push_str("\n\n");
        }

        if !self.entries.is_empty() {
            text.push_str(&fill(
                lang.text(TextKey::AverageScore),
                &[("score", &self.average_score().to_string())],
            ));
            text.push_str("\n\n");
        }

        text.push_str(&format!("== {} ==\n", lang.text(TextKey::MetaReflection)));
        text.push_str(lang.text(TextKey::ReflectionIntro));
        text.push('\n');
        for (title, desc) in [
            (TextKey::ObjectLanguageTitle, TextKey::ObjectLanguageDesc),
            (TextKey::TSchemaTitle, TextKey::TSchemaDesc),
            (TextKey::MetaLanguageTitle, TextKey::MetaLanguageDesc),
        ] {
            text.push_str(&format!("* {}: {}\n", lang.text(title), lang.text(desc)));
        }

        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interpretation_rules::ContentStore;

    fn arborean() -> Scenario {
        ContentStore::builtin()
            .level(Language::English, 0)
            .cloned()
            .unwrap()
            .with_alien_name("Subject Tarski")
    }

    fn theory() -> PlayerTheory {
        PlayerTheory::new()
            .with_sentence("Gavagai", "a rabbit is present")
            .with_sentence("Nikto", "a bird is flying")
    }

    #[test]
    fn test_record_orders_lexicon_by_log() {
        let mut campaign = Campaign::new();
        campaign.record(0, &arborean(), &theory(), 100);

        let entry = campaign.entry(0).unwrap();
        assert_eq!(entry.alien_name, "Subject Tarski");
        let utterances: Vec<_> = entry.lexicon.iter().map(|(u, _)| u.as_str()).collect();
        assert_eq!(utterances, vec!["Gavagai", "Nikto", "Klaatu", "Barada"]);
        assert_eq!(entry.lexicon[0].1, "a rabbit is present");
        assert_eq!(entry.lexicon[2].1, "");
    }

    #[test]
    fn test_record_replaces_same_level() {
        let mut campaign = Campaign::new();
        campaign.record(0, &arborean(), &theory(), 80);
        campaign.record(0, &arborean(), &theory(), 100);
        assert_eq!(campaign.len(), 1);
        assert_eq!(campaign.entry(0).map(|e| e.score), Some(100));
    }

    #[test]
    fn test_report_lists_levels_in_order() {
        let mut campaign = Campaign::new();
        campaign.record(2, &arborean(), &theory(), 80);
        campaign.record(0, &arborean(), &theory(), 100);

        let report = FinalReport::compile(&campaign, Language::English, 4);
        let levels: Vec<_> = report.entries.iter().map(|e| e.level).collect();
        assert_eq!(levels, vec![0, 2]);
        assert_eq!(report.average_score(), 90);
    }

    #[test]
    fn test_report_text() {
        let mut campaign = Campaign::new();
        campaign.record(0, &arborean(), &theory(), 100);

        let text = FinalReport::compile(&campaign, Language::English, 4).to_text();
        assert!(text.contains("FINAL FIELD REPORT"));
        assert!(text.contains("LEVEL 1/4 - Arborean (Subject Tarski)"));
        assert!(text.contains("\"Gavagai\" is true if and only if... a rabbit is present"));
        assert!(text.contains("T-SCHEMA"));
        assert!(text.contains("AVERAGE COHERENCE: 100/100"));

        let text = FinalReport::compile(&campaign, Language::Spanish, 4).to_text();
        assert!(text.contains("INFORME DE CAMPO FINAL"));
        assert!(text.contains("METALENGUAJE"));
    }

    #[test]
    fn test_empty_report() {
        let report = FinalReport::compile(&Campaign::new(), Language::English, 4);
        assert_eq!(report.average_score(), 0);
        assert!(report.to_text().contains("META-REFLECTION"));
        assert!(!report.to_text().contains("AVERAGE COHERENCE"));
    }
}
