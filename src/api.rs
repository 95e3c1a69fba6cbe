//! REST API Server for the cosmic guide
//!
//! Exposes the advisor and chat sessions via HTTP endpoints
//! Integrates with frontend UI

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use uuid::Uuid;

use crate::advisor::Advisor;
use crate::classifier::ResponseClassifier;
use crate::models::UserProfile;
use crate::session::{parse_chat_id, ChatMessage, MessageRole, SessionStore};

/// =============================
/// Request Models
/// =============================

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ChatRequest {
    pub chat_id: Option<String>,
    pub question: String,
    pub api_key: Option<String>,
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub question: String,
}

/// =============================
/// Response Wrapper
/// =============================

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: Option<String>,
    pub timestamp: String,
}

impl ApiResponse {
    pub fn success<T: Serialize>(data: T) -> Self {
        Self {
            success: true,
            data: serde_json::to_value(data).ok(),
            error: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

type ApiResult = (StatusCode, Json<ApiResponse>);

fn bad_request(message: impl Into<String>) -> ApiResult {
    (StatusCode::BAD_REQUEST, Json(ApiResponse::error(message.into())))
}

/// =============================
/// API State
/// =============================

#[derive(Clone)]
pub struct ApiState {
    pub advisor: Arc<Advisor>,
    pub sessions: Arc<dyn SessionStore>,
    /// Key used when a request does not bring its own
    pub default_api_key: Option<String>,
}

/// =============================
/// Health Endpoint
/// =============================

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// =============================
/// Chat Endpoint
/// =============================

async fn chat_handler(State(state): State<ApiState>, Json(req): Json<ChatRequest>) -> ApiResult {
    let question = req.question.trim();
    if question.is_empty() {
        return bad_request("Question must not be empty");
    }

    let chat_id = match req.chat_id.as_deref() {
        Some(raw) => match parse_chat_id(raw) {
            Ok(id) => id,
            Err(e) => return bad_request(e.to_string()),
        },
        None => Uuid::new_v4(),
    };

    // Only the profile is read up front; history is appended after the reply
    let stored = match req.profile {
        Some(profile) => state.sessions.set_profile(chat_id, profile).await,
        None => state.sessions.load_or_create(chat_id).await,
    };
    let profile = match stored {
        Ok(session) => session.profile,
        Err(e) => {
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiResponse::error(format!("Session unavailable: {}", e))),
            )
        }
    };

    let api_key = req
        .api_key
        .filter(|k| !k.trim().is_empty())
        .or_else(|| state.default_api_key.clone());
    let category = ResponseClassifier::classify(question);

    info!(%chat_id, %category, remote = api_key.is_some(), "Received chat question");

    let reply = state
        .advisor
        .respond(question, api_key.as_deref(), profile.as_ref())
        .await;

    let turn = vec![
        ChatMessage::new(MessageRole::User, question.to_string()),
        ChatMessage::new(MessageRole::Guide, reply.text.clone()),
    ];
    if let Err(e) = state.sessions.append_messages(chat_id, turn).await {
        warn!("Session append failed, reply will still be returned: {}", e);
    }

    (
        StatusCode::OK,
        Json(ApiResponse::success(serde_json::json!({
            "chat_id": chat_id.to_string(),
            "answer": reply.text,
            "source": reply.source,
            "category": category,
        }))),
    )
}

async fn history_handler(State(state): State<ApiState>, Path(raw_id): Path<String>) -> ApiResult {
    let chat_id = match parse_chat_id(&raw_id) {
        Ok(id) => id,
        Err(e) => return bad_request(e.to_string()),
    };

    match state.sessions.get(chat_id).await {
        Ok(Some(session)) => (
            StatusCode::OK,
            Json(ApiResponse::success(serde_json::json!({
                "chat_id": chat_id.to_string(),
                "profile": session.profile,
                "messages": session.messages(),
            }))),
        ),
        Ok(None) => (
            StatusCode::NOT_FOUND,
            Json(ApiResponse::error(format!("No chat with id {}", raw_id))),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        ),
    }
}

/// =============================
/// Profile & Classification
/// =============================

async fn profile_handler(
    State(state): State<ApiState>,
    Path(raw_id): Path<String>,
    Json(profile): Json<UserProfile>,
) -> ApiResult {
    let chat_id = match parse_chat_id(&raw_id) {
        Ok(id) => id,
        Err(e) => return bad_request(e.to_string()),
    };

    match state.sessions.set_profile(chat_id, profile).await {
        Ok(session) => (
            StatusCode::OK,
            Json(ApiResponse::success(serde_json::json!({
                "chat_id": chat_id.to_string(),
                "profile": session.profile,
            }))),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::error(e.to_string())),
        ),
    }
}

async fn classify_handler(Json(req): Json<ClassifyRequest>) -> ApiResult {
    let category = ResponseClassifier::classify(&req.question);
    (
        StatusCode::OK,
        Json(ApiResponse::success(serde_json::json!({ "category": category }))),
    )
}

/// =============================
/// Router
/// =============================

pub fn create_router(state: ApiState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/chat", post(chat_handler))
        .route("/api/chat/:chat_id", get(history_handler))
        .route("/api/profile/:chat_id", put(profile_handler))
        .route("/api/classify", post(classify_handler))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// =============================
/// Server Startup
/// =============================

pub async fn start_server(
    state: ApiState,
    port: u16,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let router = create_router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port)).await?;

    info!("API Server listening on http://0.0.0.0:{}", port);
    info!("Local: http://127.0.0.1:{}", port);

    axum::serve(listener, router).await?;

    Ok(())
}
