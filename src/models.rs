//! Core data models for the cosmic guide

use serde::{Deserialize, Serialize};
use std::fmt;

//
// ================= Enums =================
//

/// Topic bucket assigned to every question.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TopicCategory {
    Love,
    Career,
    Personal,
    General,
}

impl TopicCategory {
    pub const ALL: [TopicCategory; 4] = [
        TopicCategory::Love,
        TopicCategory::Career,
        TopicCategory::Personal,
        TopicCategory::General,
    ];
}

/// Which path produced an answer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReplySource {
    Gemini,
    Local,
    Placeholder,
}

//
// ================= Profile =================
//

/// Birth details supplied by the user. Free text, never validated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub date_of_birth: String,
    pub birth_time: String,
    pub location: String,
    pub gender: String,
}

//
// ================= Replies =================
//

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorReply {
    pub text: String,
    pub source: ReplySource,
}

/// Non-fatal warning surfaced to whoever is presenting the chat.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn service_unavailable() -> Self {
        Self {
            title: "Cosmic Interference".to_string(),
            description: "The stars are temporarily obscured. Please try again later."
                .to_string(),
        }
    }
}

impl fmt::Display for TopicCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TopicCategory::Love => "love",
            TopicCategory::Career => "career",
            TopicCategory::Personal => "personal",
            TopicCategory::General => "general",
        };
        write!(f, "{}", s)
    }
}
