//! Discord integration: gateway event intake and the REST calls the
//! reaction handler needs, built on serenity.

use crate::error::PlatformError;
use crate::handler::{Outcome, ReactionHandler};
use crate::platform::{Actor, ChannelKind, ChatPlatform, LiveMetricsSource, ReactionEvent};
use crate::stats::{LiveMetrics, Status, StatsCounters};
use anyhow::{Context as _, Result};
use async_trait::async_trait;
use serenity::all::{
    Cache, Channel, ChannelId, ChannelType, Client, Context, CreateMessage, EventHandler,
    GatewayIntents, Http, MessageId, Reaction, ReactionType, Ready, ShardManager, UserId,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, OnceLock};
use tracing::{debug, error, info, warn};

/// Gateway intents: guild reactions, message content for fetching text, and
/// guilds so the cache can report server and member counts.
pub fn intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT
}

/// Whether messages can be fetched from a guild channel of this type.
pub fn channel_kind(kind: ChannelType) -> ChannelKind {
    match kind {
        ChannelType::Text
        | ChannelType::News
        | ChannelType::Voice
        | ChannelType::Stage
        | ChannelType::PublicThread
        | ChannelType::PrivateThread
        | ChannelType::NewsThread => ChannelKind::TextCapable,
        _ => ChannelKind::Other,
    }
}

fn emoji_text(emoji: &ReactionType) -> String {
    match emoji {
        ReactionType::Unicode(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Convert a serenity reaction into the platform-neutral event.
///
/// The actor is taken from the guild member payload; reactions in direct
/// messages carry no member and therefore no actor.
pub fn to_event(reaction: &Reaction) -> ReactionEvent {
    ReactionEvent {
        actor: reaction.member.as_ref().map(|member| Actor {
            id: member.user.id.get(),
            is_bot: member.user.bot,
        }),
        channel_id: reaction.channel_id.get(),
        message_id: reaction.message_id.get(),
        emoji: emoji_text(&reaction.emoji),
    }
}

/// Channel kind from the gateway cache, without a REST call.
fn cached_channel_kind(cache: &Cache, channel_id: ChannelId) -> Option<ChannelKind> {
    cache
        .channel(channel_id)
        .map(|channel| channel_kind(channel.kind))
}

/// [`ChatPlatform`] backed by serenity's cache and HTTP client.
pub struct DiscordPlatform {
    http: Arc<Http>,
    cache: Arc<Cache>,
}

impl DiscordPlatform {
    pub fn new(http: Arc<Http>, cache: Arc<Cache>) -> Self {
        Self { http, cache }
    }
}

#[async_trait]
impl ChatPlatform for DiscordPlatform {
    async fn resolve_channel(&self, channel_id: u64) -> Result<Option<ChannelKind>, PlatformError> {
        let id = ChannelId::new(channel_id);
        if let Some(kind) = cached_channel_kind(&self.cache, id) {
            return Ok(Some(kind));
        }

        match id.to_channel(&self.http).await {
            Ok(Channel::Guild(channel)) => Ok(Some(channel_kind(channel.kind))),
            Ok(Channel::Private(_)) => Ok(Some(ChannelKind::TextCapable)),
            Ok(_) => Ok(Some(ChannelKind::Other)),
            Err(err) => {
                debug!("Channel {} lookup failed: {}", channel_id, err);
                Ok(None)
            }
        }
    }

    async fn fetch_message_text(
        &self,
        channel_id: u64,
        message_id: u64,
    ) -> Result<String, PlatformError> {
        let message = ChannelId::new(channel_id)
            .message(&self.http, MessageId::new(message_id))
            .await
            .map_err(|e| PlatformError::FetchMessage {
                message_id,
                reason: e.to_string(),
            })?;
        Ok(message.content)
    }

    async fn remove_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
        user_id: u64,
    ) -> Result<(), PlatformError> {
        ChannelId::new(channel_id)
            .delete_reaction(
                &self.http,
                MessageId::new(message_id),
                Some(UserId::new(user_id)),
                ReactionType::Unicode(emoji.to_string()),
            )
            .await
            .map_err(|e| PlatformError::RemoveReaction {
                message_id,
                reason: e.to_string(),
            })
    }

    async fn send_direct_message(&self, user_id: u64, text: &str) -> Result<(), PlatformError> {
        UserId::new(user_id)
            .direct_message(&self.http, CreateMessage::new().content(text))
            .await
            .map(|_| ())
            .map_err(|e| PlatformError::DirectMessage {
                user_id,
                reason: e.to_string(),
            })
    }
}

/// Tracks gateway readiness and reads live figures from the cache and shards.
#[derive(Default)]
pub struct DiscordMonitor {
    ready: AtomicBool,
    cache: OnceLock<Arc<Cache>>,
    shard_manager: OnceLock<Arc<ShardManager>>,
}

impl DiscordMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    fn mark_ready(&self, cache: Arc<Cache>) {
        let _ = self.cache.set(cache);
        self.ready.store(true, Ordering::Relaxed);
    }

    fn mark_stopped(&self) {
        self.ready.store(false, Ordering::Relaxed);
    }

    fn attach_shards(&self, shard_manager: Arc<ShardManager>) {
        let _ = self.shard_manager.set(shard_manager);
    }

    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl LiveMetricsSource for DiscordMonitor {
    async fn live_metrics(&self) -> Option<LiveMetrics> {
        if !self.is_ready() {
            return None;
        }
        let cache = self.cache.get()?;

        let guilds = cache.guild_count() as u64;
        let users: u64 = cache
            .guilds()
            .into_iter()
            .filter_map(|id| cache.guild(id).map(|guild| guild.member_count))
            .sum();

        let latency = match self.shard_manager.get() {
            Some(manager) => manager
                .runners
                .lock()
                .await
                .values()
                .find_map(|runner| runner.latency)
                .map(|d| (d.as_secs_f64() * 100_000.0).round() / 100.0)
                .unwrap_or(0.0),
            None => 0.0,
        };

        Some(LiveMetrics {
            guilds,
            users,
            latency,
        })
    }

    fn is_connected(&self) -> bool {
        true
    }
}

/// serenity event handler forwarding reactions to the [`ReactionHandler`].
struct Bot {
    handler: Arc<ReactionHandler>,
    stats: Arc<StatsCounters>,
    monitor: Arc<DiscordMonitor>,
}

#[async_trait]
impl EventHandler for Bot {
    async fn ready(&self, ctx: Context, ready: Ready) {
        self.stats.set_status(Status::Running);
        self.monitor.mark_ready(Arc::clone(&ctx.cache));
        info!("✅ Bot logged in as {}", ready.user.name);
        info!("🔗 Bot is active in {} servers", ready.guilds.len());
        info!("🎯 Ready for translations!");
    }

    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        let event = to_event(&reaction);
        let platform = DiscordPlatform::new(Arc::clone(&ctx.http), Arc::clone(&ctx.cache));

        match self.handler.handle(&platform, event).await {
            Outcome::Discarded(reason) => debug!("Reaction discarded: {:?}", reason),
            Outcome::NothingToTranslate => debug!("Reaction on message without text"),
            Outcome::Translated => {}
            Outcome::Failed(err) => debug!("Reaction handling failed: {}", err),
        }
    }
}

/// Connect to Discord and process reactions until the gateway shuts down
/// or Ctrl-C is received.
pub async fn run(
    token: &str,
    handler: Arc<ReactionHandler>,
    stats: Arc<StatsCounters>,
    monitor: Arc<DiscordMonitor>,
) -> Result<()> {
    let bot = Bot {
        handler,
        stats: Arc::clone(&stats),
        monitor: Arc::clone(&monitor),
    };

    let mut client = Client::builder(token, intents())
        .event_handler(bot)
        .await
        .context("Failed to create Discord client")?;

    monitor.attach_shards(Arc::clone(&client.shard_manager));

    let shard_manager = Arc::clone(&client.shard_manager);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("🛑 Shutdown requested, disconnecting from Discord");
            shard_manager.shutdown_all().await;
        }
    });

    let result = client.start().await;

    stats.set_status(Status::Stopped);
    monitor.mark_stopped();

    if let Err(err) = result {
        error!("❌ Discord client stopped with error: {}", err);
        return Err(err).context("Discord client error");
    }

    info!("Discord client stopped");
    Ok(())
}
