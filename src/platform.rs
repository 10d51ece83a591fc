//! The chat platform as seen by the reaction handler.
//!
//! The handler never talks to Discord directly; it goes through
//! [`ChatPlatform`], which the serenity adapter in [`crate::discord`]
//! implements and tests replace with an in-memory fake.

use crate::error::PlatformError;
use crate::stats::LiveMetrics;
use async_trait::async_trait;

/// The user who added a reaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Actor {
    pub id: u64,
    pub is_bot: bool,
}

/// A reaction-add event, as delivered by the platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionEvent {
    /// `None` when the platform could not tell who reacted
    pub actor: Option<Actor>,
    pub channel_id: u64,
    pub message_id: u64,
    pub emoji: String,
}

/// What a resolved channel can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    /// Message history can be fetched
    TextCapable,
    /// Categories, forums and anything else without fetchable messages
    Other,
}

#[async_trait]
pub trait ChatPlatform: Send + Sync {
    /// Look up a channel. `Ok(None)` means it could not be found.
    async fn resolve_channel(&self, channel_id: u64) -> Result<Option<ChannelKind>, PlatformError>;

    /// Fetch the text content of a message.
    async fn fetch_message_text(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<String, PlatformError>;

    /// Remove `user_id`'s `emoji` reaction from a message.
    async fn remove_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
        user_id: u64,
    ) -> Result<(), PlatformError>;

    /// Send a private message to a user.
    async fn send_direct_message(&self, user_id: u64, text: &str) -> Result<(), PlatformError>;
}

/// Supplies live connection figures for the dashboard.
#[async_trait]
pub trait LiveMetricsSource: Send + Sync {
    /// `None` until the platform reports itself ready.
    async fn live_metrics(&self) -> Option<LiveMetrics>;

    /// Whether a platform connection has been configured at all.
    fn is_connected(&self) -> bool;
}

/// Metrics source used when no bot token is configured.
pub struct Disconnected;

#[async_trait]
impl LiveMetricsSource for Disconnected {
    async fn live_metrics(&self) -> Option<LiveMetrics> {
        None
    }

    fn is_connected(&self) -> bool {
        false
    }
}
