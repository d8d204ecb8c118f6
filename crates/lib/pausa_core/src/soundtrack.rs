// @zen-component: SND-SoundtrackSuggestion
//
//! Soundtrack suggestions keyed by mood.
//!
//! The catalogue is a fixed table: two entries per mood branch, no ranking
//! and no external lookup. Replacing it with a real catalogue only requires
//! changing [`catalogue`].

use serde::{Deserialize, Serialize};

use crate::mood::{KeywordRule, classify};

/// Mood branch selected from free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundtrackMood {
    Calm,
    Creative,
    Default,
}

/// Kind of audio a suggestion points to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SoundtrackCategory {
    Music,
    Nature,
    Podcast,
}

/// A single thing to listen to during the break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundtrackSuggestion {
    pub title: &'static str,
    pub description: &'static str,
    pub category: SoundtrackCategory,
    /// Query to paste into a streaming service search box.
    pub search_query: &'static str,
}

/// Response of `suggest_soundtrack`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoundtrackResult {
    pub mood: SoundtrackMood,
    pub suggestions: Vec<SoundtrackSuggestion>,
}

const RULES: &[KeywordRule<SoundtrackMood>] = &[
    KeywordRule {
        keywords: &["calma", "tranquil"],
        outcome: SoundtrackMood::Calm,
    },
    KeywordRule {
        keywords: &["creativ", "inspir"],
        outcome: SoundtrackMood::Creative,
    },
];

/// Pick the mood branch for free text.
pub fn classify_mood(mood: &str) -> SoundtrackMood {
    classify(mood, RULES, SoundtrackMood::Default)
}

/// The two fixed suggestions for a branch.
pub fn catalogue(mood: SoundtrackMood) -> [SoundtrackSuggestion; 2] {
    match mood {
        SoundtrackMood::Calm => [
            SoundtrackSuggestion {
                title: "Lluvia suave en el bosque",
                description: "Sonido ambiente para bajar pulsaciones durante cinco minutos.",
                category: SoundtrackCategory::Nature,
                search_query: "soft rain forest ambience",
            },
            SoundtrackSuggestion {
                title: "Piano lento para respirar",
                description: "Piano minimalista a 60 bpm, ideal para respiración guiada.",
                category: SoundtrackCategory::Music,
                search_query: "slow ambient piano breathing",
            },
        ],
        SoundtrackMood::Creative => [
            SoundtrackSuggestion {
                title: "Lo-fi para ideas nuevas",
                description: "Ritmos lo-fi sin letra que acompañan sin distraer.",
                category: SoundtrackCategory::Music,
                search_query: "lofi beats creative focus",
            },
            SoundtrackSuggestion {
                title: "Charlas cortas sobre creatividad",
                description: "Episodios de menos de diez minutos para despertar la curiosidad.",
                category: SoundtrackCategory::Podcast,
                search_query: "short creativity podcast",
            },
        ],
        SoundtrackMood::Default => [
            SoundtrackSuggestion {
                title: "Energía acústica",
                description: "Guitarras acústicas con buen ritmo para estirar las piernas.",
                category: SoundtrackCategory::Music,
                search_query: "upbeat acoustic playlist",
            },
            SoundtrackSuggestion {
                title: "Paseo por la ciudad",
                description: "Sonidos de calle y cafetería para una pausa con ambiente.",
                category: SoundtrackCategory::Nature,
                search_query: "city cafe ambience",
            },
        ],
    }
}

/// Suggest a soundtrack for `mood`.
pub fn suggest(mood: &str) -> SoundtrackResult {
    let branch = classify_mood(mood);
    SoundtrackResult {
        mood: branch,
        suggestions: catalogue(branch).to_vec(),
    }
}
