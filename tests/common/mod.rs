//! Local mock of the Gemini endpoint shared by the integration tests.

#![allow(dead_code)]

use axum::{
    extract::{Query, State},
    http::StatusCode,
    Router,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const OK_BODY: &str = r#"{"candidates":[{"content":{"parts":[{"text":"Venus smiles on you this month."}],"role":"model"},"finishReason":"STOP"}]}"#;

/// One request as the mock saw it
#[derive(Debug, Clone)]
pub struct SeenRequest {
    pub key: Option<String>,
    pub body: String,
}

impl SeenRequest {
    /// The prompt text sent in `contents[0].parts[0].text`
    pub fn prompt(&self) -> String {
        let sent: serde_json::Value = serde_json::from_str(&self.body).unwrap();
        sent["contents"][0]["parts"][0]["text"]
            .as_str()
            .unwrap()
            .to_string()
    }
}

#[derive(Clone)]
pub struct MockState {
    pub status: StatusCode,
    pub body: &'static str,
    pub delay: Duration,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

impl MockState {
    pub fn new(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            body,
            delay: Duration::ZERO,
            seen: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn hits(&self) -> usize {
        self.seen.lock().unwrap().len()
    }

    pub fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> Option<SeenRequest> {
        self.seen.lock().unwrap().last().cloned()
    }
}

async fn generate(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
    body: String,
) -> (StatusCode, &'static str) {
    state.seen.lock().unwrap().push(SeenRequest {
        key: params.get("key").cloned(),
        body,
    });

    if !state.delay.is_zero() {
        tokio::time::sleep(state.delay).await;
    }
    (state.status, state.body)
}

/// Start the mock server on a random port and return the base URL.
pub async fn start_mock_server(state: MockState) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to random port");
    let addr = listener.local_addr().unwrap();

    let router = Router::new().fallback(generate).with_state(state);
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{}/v1beta", addr)
}
