//! Cosmic Guide
//!
//! An astrology chat advisor that:
//! - Classifies questions into love, career, personal or general topics
//! - Composes local guidance from a fixed phrase bank
//! - Consults the Gemini API when the user supplies a key
//! - Falls back to local guidance on any remote failure, so every
//!   question gets an answer
//!
//! FLOW:
//! QUESTION → (KEY? → GEMINI → OK | FAIL → NOTIFY) → LOCAL → ANSWER

pub mod advisor;
pub mod api;
pub mod classifier;
pub mod composer;
pub mod config;
pub mod error;
pub mod gemini;
pub mod models;
pub mod notify;
pub mod phrases;
pub mod session;

pub use error::Result;

// Re-export common types
pub use models::*;
pub use advisor::Advisor;
pub use classifier::ResponseClassifier;
pub use composer::ResponseComposer;
