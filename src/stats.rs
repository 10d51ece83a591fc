//! Process-wide relay counters read by the dashboard.
//!
//! Counters are atomics so concurrent events never lose an increment. Reads
//! are relaxed and may be momentarily stale, which is fine for a dashboard.

use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Stopped,
    Running,
}

/// Figures only the chat platform can supply, present once it is ready.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LiveMetrics {
    /// Number of servers the bot is a member of
    pub guilds: u64,
    /// Sum of member counts across those servers
    pub users: u64,
    /// Gateway round-trip latency in milliseconds
    pub latency: f64,
}

/// Point-in-time copy of the counters, serialized for `/api/stats`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSnapshot {
    pub translations: u64,
    pub errors: u64,
    pub status: Status,
    #[serde(flatten)]
    pub live: Option<LiveMetrics>,
}

#[derive(Debug, Default)]
pub struct StatsCounters {
    translations: AtomicU64,
    errors: AtomicU64,
    running: AtomicBool,
}

impl StatsCounters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a translation that was delivered.
    pub fn increment_translations(&self) {
        self.translations.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a failed event.
    pub fn increment_errors(&self) {
        self.errors.fetch_add(1, Ordering::Relaxed);
    }

    pub fn set_status(&self, status: Status) {
        self.running
            .store(status == Status::Running, Ordering::Relaxed);
    }

    pub fn status(&self) -> Status {
        if self.running.load(Ordering::Relaxed) {
            Status::Running
        } else {
            Status::Stopped
        }
    }

    pub fn translations(&self) -> u64 {
        self.translations.load(Ordering::Relaxed)
    }

    pub fn errors(&self) -> u64 {
        self.errors.load(Ordering::Relaxed)
    }

    /// Read the counters without modifying them.
    pub fn snapshot(&self, live: Option<LiveMetrics>) -> StatsSnapshot {
        StatsSnapshot {
            translations: self.translations(),
            errors: self.errors(),
            status: self.status(),
            live,
        }
    }
}
