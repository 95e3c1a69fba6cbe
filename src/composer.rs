//! Local reply composer
//!
//! Builds `intro + " " + body + " " + closing` from a [`PhraseBank`], drawing
//! each part uniformly and independently. Randomness comes from any
//! [`rand::Rng`], so callers that need reproducible output pass a seeded one.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::classifier::ResponseClassifier;
use crate::error::AdvisorError;
use crate::models::TopicCategory;
use crate::phrases::PhraseBank;
use crate::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct ResponseComposer {
    bank: PhraseBank,
}

impl ResponseComposer {
    pub fn new(bank: PhraseBank) -> Self {
        Self { bank }
    }

    pub fn bank(&self) -> &PhraseBank {
        &self.bank
    }

    /// Compose a reply using the thread-local RNG
    pub fn compose(&self, category: TopicCategory) -> Result<String> {
        self.compose_with(category, &mut rand::thread_rng())
    }

    /// Compose a reply drawing from the supplied RNG
    pub fn compose_with<R: Rng + ?Sized>(
        &self,
        category: TopicCategory,
        rng: &mut R,
    ) -> Result<String> {
        let intro = pick(self.bank.intros, category, "intros", rng)?;
        let body = pick(self.bank.bodies(category), category, "bodies", rng)?;
        let closing = pick(self.bank.closings, category, "closings", rng)?;

        Ok(format!("{} {} {}", intro, body, closing))
    }

    /// Classify then compose
    pub fn respond_to(&self, question: &str) -> Result<String> {
        self.compose(ResponseClassifier::classify(question))
    }
}

fn pick<R: Rng + ?Sized>(
    list: &'static [&'static str],
    category: TopicCategory,
    name: &'static str,
    rng: &mut R,
) -> Result<&'static str> {
    list.choose(rng)
        .copied()
        .ok_or(AdvisorError::EmptyPhraseList {
            category,
            list: name,
        })
}
