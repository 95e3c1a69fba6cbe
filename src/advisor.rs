//! Remote advisor with local fallback
//!
//! Answers a question through Gemini when a key is supplied and falls back
//! to the local composer on any remote failure. Callers always get text:
//!
//! Idle → key? → Gemini → ok                  → Done
//!                      → failed → notify → Local → Done
//!            → no key ─────────────────→ Local → Done
//!
//! Local failure (a broken phrase bank) ends in a fixed placeholder.

use std::sync::Arc;
use tracing::{info, warn};

use crate::composer::ResponseComposer;
use crate::config::GeminiConfig;
use crate::gemini::{build_prompt, GeminiClient};
use crate::models::{AdvisorReply, Notice, ReplySource, UserProfile};
use crate::notify::{Notifier, TracingNotifier};

pub const PLACEHOLDER_REPLY: &str = "The cosmic energies are unsettled at the moment. The stars will align soon to provide you with guidance.";

#[derive(Clone)]
pub struct Advisor {
    gemini: GeminiClient,
    composer: ResponseComposer,
    notifier: Arc<dyn Notifier>,
}

impl Advisor {
    pub fn new(config: &GeminiConfig) -> crate::Result<Self> {
        Ok(Self {
            gemini: GeminiClient::new(config)?,
            composer: ResponseComposer::default(),
            notifier: Arc::new(TracingNotifier),
        })
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_composer(mut self, composer: ResponseComposer) -> Self {
        self.composer = composer;
        self
    }

    /// Answer a question. Never fails.
    pub async fn get_response(
        &self,
        question: &str,
        api_key: Option<&str>,
        profile: Option<&UserProfile>,
    ) -> String {
        self.respond(question, api_key, profile).await.text
    }

    /// Answer a question and report which path produced the text
    pub async fn respond(
        &self,
        question: &str,
        api_key: Option<&str>,
        profile: Option<&UserProfile>,
    ) -> AdvisorReply {
        let Some(key) = api_key.filter(|k| !k.trim().is_empty()) else {
            return self.local(question);
        };

        let prompt = build_prompt(question, profile);
        match self.gemini.generate(key, &prompt).await {
            Ok(text) => {
                info!(chars = text.len(), "Answer from Gemini API");
                AdvisorReply {
                    text,
                    source: ReplySource::Gemini,
                }
            }
            Err(e) => {
                warn!(
                    transport = e.is_transport_failure(),
                    "Gemini unavailable, answering locally: {}", e
                );
                self.notifier.notify(&Notice::service_unavailable());
                self.local(question)
            }
        }
    }

    fn local(&self, question: &str) -> AdvisorReply {
        match self.composer.respond_to(question) {
            Ok(text) => AdvisorReply {
                text,
                source: ReplySource::Local,
            },
            Err(e) => {
                warn!("Local generator failed: {}", e);
                AdvisorReply {
                    text: PLACEHOLDER_REPLY.to_string(),
                    source: ReplySource::Placeholder,
                }
            }
        }
    }
}
