//! Phrase bank for the local guide
//!
//! Body sentences per topic plus topic-independent openers and closers.

use crate::models::TopicCategory;

/// Immutable set of phrase lists used by the composer.
#[derive(Debug, Clone, Copy)]
pub struct PhraseBank {
    pub love: &'static [&'static str],
    pub career: &'static [&'static str],
    pub personal: &'static [&'static str],
    pub general: &'static [&'static str],
    pub intros: &'static [&'static str],
    pub closings: &'static [&'static str],
}

impl PhraseBank {
    /// Body sentences for a topic
    pub fn bodies(&self, category: TopicCategory) -> &'static [&'static str] {
        match category {
            TopicCategory::Love => self.love,
            TopicCategory::Career => self.career,
            TopicCategory::Personal => self.personal,
            TopicCategory::General => self.general,
        }
    }
}

impl Default for PhraseBank {
    fn default() -> Self {
        DEFAULT_PHRASES
    }
}

pub const DEFAULT_PHRASES: PhraseBank = PhraseBank {
    love: LOVE,
    career: CAREER,
    personal: PERSONAL,
    general: GENERAL,
    intros: INTROS,
    closings: CLOSINGS,
};

const LOVE: &[&str] = &[
    "The stars indicate a period of deep connection approaching. Open your heart to new possibilities.",
    "Venus is guiding your romantic energies now. Trust your intuition about this connection.",
    "The cosmic alignment suggests patience in matters of the heart. What's meant for you will not pass you by.",
    "Your romantic aura is particularly strong under this moon phase. Express your true feelings.",
    "The celestial bodies suggest a meaningful encounter is on the horizon. Stay receptive.",
];

const CAREER: &[&str] = &[
    "Mercury's position suggests new professional opportunities. Be prepared to showcase your unique talents.",
    "The celestial alignment indicates a favorable time for career advancement. Trust your capabilities.",
    "Jupiter's influence brings expansion in your professional sphere. Consider bold new directions.",
    "The stars suggest a period of professional growth through collaboration. Connect with like-minded individuals.",
    "Saturn's energy provides structure to your ambitions. Patience and persistence will lead to success.",
];

const PERSONAL: &[&str] = &[
    "The cosmos suggests a period of introspection will lead to profound self-discovery.",
    "Your ruling planet is entering a phase of transformation. Embrace the changes within.",
    "The universe is supporting your journey of self-improvement. Trust the process.",
    "Celestial energies are aligned for your personal evolution. Release what no longer serves you.",
    "The current planetary positions favor spiritual growth. Listen to your inner wisdom.",
];

const GENERAL: &[&str] = &[
    "The cosmic energy surrounding you is supportive of your current path. Trust the journey.",
    "Stars are aligning to bring clarity to your situation. Patience will reveal the answers you seek.",
    "Celestial forces suggest taking time for reflection before making your next move.",
    "The universal energies indicate favorable outcomes when you follow your intuition.",
    "The cosmic vibrations surrounding your question suggest embracing flexibility and openness.",
];

const INTROS: &[&str] = &[
    "The celestial bodies reveal that",
    "As the stars align, I see that",
    "The cosmic energies suggest",
    "Your astrological chart indicates",
    "The planetary positions show",
    "The mystical forces convey that",
    "The universe whispers that",
    "Your cosmic pathway reveals",
    "The astral plane indicates",
    "The moon's influence suggests",
];

const CLOSINGS: &[&str] = &[
    "Trust in the universe's plan for you.",
    "The stars guide your journey forward.",
    "Your celestial path is unfolding as it should.",
    "The cosmos supports your authentic self.",
    "Planetary energies favor your intentions.",
    "Align with these cosmic vibrations.",
    "Your astrological signs point toward success.",
    "The heavens bless your endeavors.",
    "Celestial wisdom lights your way.",
    "The universal energy flows in your favor.",
];
