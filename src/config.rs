//! Environment configuration
//!
//! Values come from the process environment (optionally seeded from a
//! `.env` file by the binaries). Lookups go through a closure so tests can
//! supply a map instead of mutating the real environment.

use std::collections::HashMap;
use std::time::Duration;

use crate::error::AdvisorError;
use crate::models::UserProfile;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;
const DEFAULT_PORT: u16 = 8080;

/// Remote endpoint settings
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
    pub temperature: Option<f32>,
    pub max_output_tokens: u32,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            temperature: None,
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
        }
    }
}

impl GeminiConfig {
    /// Point the client at another base URL (local mocks, proxies)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Everything the binaries read at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    pub api_key: Option<String>,
    pub port: u16,
    pub profile: Option<UserProfile>,
}

impl AppConfig {
    pub fn from_env() -> crate::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_map(vars: &HashMap<String, String>) -> crate::Result<Self> {
        Self::from_lookup(|key| vars.get(key).cloned())
    }

    fn from_lookup<F>(lookup: F) -> crate::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut gemini = GeminiConfig::default();
        if let Some(url) = get("GEMINI_BASE_URL") {
            gemini.base_url = url;
        }
        if let Some(model) = get("GEMINI_MODEL") {
            gemini.model = model;
        }
        if let Some(secs) = get("GEMINI_TIMEOUT_SECS") {
            gemini.timeout = Duration::from_secs(parse_var("GEMINI_TIMEOUT_SECS", &secs)?);
        }
        if let Some(temp) = get("GEMINI_TEMPERATURE") {
            gemini.temperature = Some(parse_var("GEMINI_TEMPERATURE", &temp)?);
        }
        if let Some(tokens) = get("GEMINI_MAX_OUTPUT_TOKENS") {
            gemini.max_output_tokens = parse_var("GEMINI_MAX_OUTPUT_TOKENS", &tokens)?;
        }

        let port = match get("PORT").or_else(|| get("API_PORT")) {
            Some(p) => parse_var("PORT", &p)?,
            None => DEFAULT_PORT,
        };

        // A profile needs at least a birth date and a place, like the onboarding form
        let profile = match (get("COSMIC_DOB"), get("COSMIC_LOCATION")) {
            (Some(date_of_birth), Some(location)) => Some(UserProfile {
                date_of_birth,
                location,
                birth_time: get("COSMIC_BIRTH_TIME").unwrap_or_else(|| "Not provided".to_string()),
                gender: get("COSMIC_GENDER").unwrap_or_else(|| "neutral".to_string()),
            }),
            _ => None,
        };

        Ok(Self {
            gemini,
            api_key: get("GEMINI_API_KEY"),
            port,
            profile,
        })
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, value: &str) -> crate::Result<T> {
    value
        .trim()
        .parse()
        .map_err(|_| AdvisorError::Config(format!("invalid value for {}: '{}'", name, value)))
}
