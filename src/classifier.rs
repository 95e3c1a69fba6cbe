//! Question Classifier
//!
//! Assigns every question to exactly one topic:
//! - Love: relationships, partners, romance
//! - Career: work, money, success
//! - Personal: growth, healing, self-improvement
//! - General: everything else
//!
//! Groups are tested in that order and the first hit wins, so a question
//! mentioning both a job and a relationship is a love question.

use crate::models::TopicCategory;

/// Static keyword lists — zero allocation
const LOVE_KEYWORDS: &[&str] = &[
    "love", "relationship", "partner", "marriage", "date", "romantic",
    "boyfriend", "girlfriend", "spouse",
];

const CAREER_KEYWORDS: &[&str] = &[
    "career", "job", "work", "profession", "business", "success",
    "money", "finance", "promotion",
];

const PERSONAL_KEYWORDS: &[&str] = &[
    "myself", "growth", "improve", "learn", "personal", "develop",
    "spiritual", "better", "heal", "health",
];

/// Priority order of the keyword groups
const RULES: &[(TopicCategory, &[&str])] = &[
    (TopicCategory::Love, LOVE_KEYWORDS),
    (TopicCategory::Career, CAREER_KEYWORDS),
    (TopicCategory::Personal, PERSONAL_KEYWORDS),
];

/// Question classifier
pub struct ResponseClassifier;

impl ResponseClassifier {
    /// Classify a question into a topic. Total and pure.
    pub fn classify(question: &str) -> TopicCategory {
        let question = question.to_lowercase();

        RULES
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| question.contains(kw)))
            .map(|(category, _)| *category)
            .unwrap_or(TopicCategory::General)
    }
}
