// @zen-component: CCH-CoachMessage
//
//! Coaching messages for the end of a break.

use serde::{Deserialize, Serialize};

use crate::mood::{KeywordRule, classify};

/// Name used when the caller does not give one.
pub const DEFAULT_NAME: &str = "amigo";

/// Template branch selected from the mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoachTone {
    Tired,
    Calm,
    Energetic,
}

/// Response of `coach_message`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachMessage {
    pub tone: CoachTone,
    pub message: String,
}

const RULES: &[KeywordRule<CoachTone>] = &[
    KeywordRule {
        keywords: &["agotado", "bloqueada"],
        outcome: CoachTone::Tired,
    },
    KeywordRule {
        keywords: &["calma"],
        outcome: CoachTone::Calm,
    },
];

/// Pick the template branch for free text.
pub fn classify_tone(mood: &str) -> CoachTone {
    classify(mood, RULES, CoachTone::Energetic)
}

/// Build the coaching message. `experience` is interpolated verbatim.
pub fn compose(mood: &str, experience: &str, name: Option<&str>) -> CoachMessage {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_NAME);
    let tone = classify_tone(mood);
    let message = match tone {
        CoachTone::Tired => format!(
            "{name}, tu cuerpo te está pidiendo una pausa. Después de {experience}, \
             regálate cinco minutos sin pantallas y vuelve con calma."
        ),
        CoachTone::Calm => format!(
            "{name}, qué bien que encontraste un momento de calma. Guarda esta sensación \
             de {experience} y llévala a tu próxima tarea."
        ),
        CoachTone::Energetic => format!(
            "¡Vamos, {name}! Aprovecha la energía de {experience} para arrancar lo \
             siguiente con ganas."
        ),
    };
    CoachMessage { tone, message }
}
