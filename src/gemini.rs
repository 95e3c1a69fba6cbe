//! Gemini API client
//!
//! Transport for the remote advisor: builds the generateContent request,
//! sends it, and classifies every way the call can go wrong.
//! Uses a long-lived reqwest::Client for connection pooling.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use crate::config::GeminiConfig;
use crate::error::AdvisorError;
use crate::models::UserProfile;

const PREAMBLE: &str = "You are a trained expert in vedic astrology. Provide prediction about the question below with minor details as summary.";

/// Reusable Gemini client (connection-pooled)
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    endpoint: String,
    generation_config: Option<GenerationConfig>,
}

impl GeminiClient {
    pub fn new(config: &GeminiConfig) -> crate::Result<Self> {
        let client = Client::builder()
            .pool_idle_timeout(Duration::from_secs(90))
            .pool_max_idle_per_host(8)
            .timeout(config.timeout)
            .build()?;

        let generation_config = config.temperature.map(|temperature| GenerationConfig {
            temperature,
            max_output_tokens: config.max_output_tokens,
        });

        Ok(Self {
            client,
            endpoint: format!(
                "{}/models/{}:generateContent",
                config.base_url.trim_end_matches('/'),
                config.model
            ),
            generation_config,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one prompt and return the first candidate's text
    pub async fn generate(&self, api_key: &str, prompt: &str) -> crate::Result<String> {
        if api_key.trim().is_empty() {
            return Err(AdvisorError::MissingApiKey);
        }

        let request = GeminiRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: self.generation_config.clone(),
        };

        debug!(endpoint = %self.endpoint, "Calling Gemini API");

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini API request failed: {}", e);
                AdvisorError::HttpError(e)
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(status = status.as_u16(), "Gemini API error response: {}", body);
            return Err(AdvisorError::RemoteStatus {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;
        extract_text(&body)
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a response body
pub fn extract_text(body: &str) -> crate::Result<String> {
    let parsed: GeminiResponse = serde_json::from_str(body).map_err(|e| {
        error!("Failed to parse Gemini response: {}", e);
        AdvisorError::MalformedResponse(e.to_string())
    })?;

    parsed
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .map(|p| p.text)
        .filter(|text| !text.trim().is_empty())
        .ok_or(AdvisorError::EmptyResponse)
}

/// Build the full prompt: preamble, optional profile block, question
pub fn build_prompt(question: &str, profile: Option<&UserProfile>) -> String {
    let mut prompt = String::from(PREAMBLE);
    prompt.push('\n');

    if let Some(p) = profile {
        prompt.push_str("The person asking has provided the following information:\n");
        prompt.push_str(&format!("Date of Birth: {}\n", p.date_of_birth));
        prompt.push_str(&format!("Birth Time: {}\n", p.birth_time));
        prompt.push_str(&format!("Birth Location: {}\n", p.location));
        prompt.push_str(&format!("Gender: {}\n", p.gender));
    }

    prompt.push_str(&format!("Question: \"{}\"", question));
    prompt
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GeminiRequest {
    contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GeminiResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}
