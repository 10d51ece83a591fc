//! Error taxonomy for the reaction relay.
//!
//! Discards and benign notices are not errors; they are expressed as
//! [`crate::handler::Outcome`] values. Everything here is either a counted
//! failure (provider or delivery) or a collaborator failure that is only logged.

use thiserror::Error;

/// The translation provider call failed.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("translation request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("translation service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid translation response: {0}")]
    InvalidResponse(String),

    #[error("translation service returned an empty translation")]
    EmptyTranslation,
}

/// A chat platform call failed (fetch, send, reaction removal).
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to fetch message {message_id}: {reason}")]
    FetchMessage { message_id: u64, reason: String },

    #[error("failed to send direct message to {user_id}: {reason}")]
    DirectMessage { user_id: u64, reason: String },

    #[error("failed to remove reaction from message {message_id}: {reason}")]
    RemoveReaction { message_id: u64, reason: String },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ChunkError {
    #[error("chunk size must be at least 1, got {0}")]
    InvalidSize(usize),
}

/// Anything that sends an event down the counted failure branch.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Chunk(#[from] ChunkError),
}
