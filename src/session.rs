//! Chat sessions
//!
//! Per-chat message history plus the profile the user last supplied.
//! Currently in-memory; the trait lets another backend slot in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::AdvisorError;
use crate::models::UserProfile;
use crate::Result;

pub const WELCOME_MESSAGE: &str = "Welcome to yourastrology. I am your cosmic guide. Ask me about your destiny, relationships, career, or any personal questions. The stars are ready to guide you.";

/// Who wrote a message
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MessageRole {
    User,
    Guide,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub message_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub role: MessageRole,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: MessageRole, content: String) -> Self {
        Self {
            message_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            role,
            content,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatSession {
    pub chat_id: Uuid,
    pub profile: Option<UserProfile>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// New session opened by the guide's welcome
    pub fn new(chat_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            chat_id,
            profile: None,
            created_at: now,
            updated_at: now,
            messages: vec![ChatMessage::new(
                MessageRole::Guide,
                WELCOME_MESSAGE.to_string(),
            )],
        }
    }

    pub fn add_message(&mut self, role: MessageRole, content: String) {
        self.messages.push(ChatMessage::new(role, content));
        self.updated_at = Utc::now();
    }

    fn extend_messages(&mut self, messages: Vec<ChatMessage>) {
        self.messages.extend(messages);
        self.updated_at = Utc::now();
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

/// Trait for session persistence
///
/// Writes are per-field and atomic: callers never hand back a whole session,
/// so concurrent turns and profile updates on one chat cannot overwrite
/// each other.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    async fn load_or_create(&self, chat_id: Uuid) -> Result<ChatSession>;
    async fn get(&self, chat_id: Uuid) -> Result<Option<ChatSession>>;
    async fn append_messages(
        &self,
        chat_id: Uuid,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatSession>;
    async fn set_profile(&self, chat_id: Uuid, profile: UserProfile) -> Result<ChatSession>;
}

/// In-memory session store
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<Uuid, ChatSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for InMemorySessionStore {
    async fn load_or_create(&self, chat_id: Uuid) -> Result<ChatSession> {
        {
            let sessions = self.sessions.read().await;
            if let Some(session) = sessions.get(&chat_id) {
                return Ok(session.clone());
            }
        }

        let mut sessions = self.sessions.write().await;
        Ok(sessions
            .entry(chat_id)
            .or_insert_with(|| ChatSession::new(chat_id))
            .clone())
    }

    async fn get(&self, chat_id: Uuid) -> Result<Option<ChatSession>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(&chat_id).cloned())
    }

    async fn append_messages(
        &self,
        chat_id: Uuid,
        messages: Vec<ChatMessage>,
    ) -> Result<ChatSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(chat_id)
            .or_insert_with(|| ChatSession::new(chat_id));
        session.extend_messages(messages);
        Ok(session.clone())
    }

    async fn set_profile(&self, chat_id: Uuid, profile: UserProfile) -> Result<ChatSession> {
        let mut sessions = self.sessions.write().await;
        let session = sessions
            .entry(chat_id)
            .or_insert_with(|| ChatSession::new(chat_id));
        session.profile = Some(profile);
        session.updated_at = Utc::now();
        Ok(session.clone())
    }
}

/// Parse a chat id, mapping free-form strings to a stable UUID
pub fn parse_chat_id(value: &str) -> Result<Uuid> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AdvisorError::InvalidRequest("empty chat id".to_string()));
    }
    Ok(Uuid::parse_str(value).unwrap_or_else(|_| stable_uuid_from_string(value)))
}

fn stable_uuid_from_string(input: &str) -> Uuid {
    use sha2::{Digest, Sha256};

    let hash = Sha256::digest(input.as_bytes());
    let mut bytes = [0u8; 16];
    bytes.copy_from_slice(&hash[..16]);

    // Set UUID version (4) and variant (RFC4122) bits.
    bytes[6] = (bytes[6] & 0x0f) | 0x40;
    bytes[8] = (bytes[8] & 0x3f) | 0x80;

    Uuid::from_bytes(bytes)
}
