//! Flag-reaction translation relay for Discord.
//!
//! When a user reacts to a message with a flag emoji, the message is
//! translated into that flag's language and sent to the user by direct
//! message. A small dashboard reports counters and supported flags.

pub mod chunker;
pub mod config;
pub mod dashboard;
pub mod discord;
pub mod error;
pub mod handler;
pub mod i18n;
pub mod platform;
pub mod stats;
pub mod translation;
