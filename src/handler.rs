use crate::chunker::chunk;
use crate::error::RelayError;
use crate::i18n::strings::{HEADER_ICON, NOTHING_TO_TRANSLATE, TRANSLATION_FAILED_PREFIX};
use crate::i18n::{FlagRegistry, Language};
use crate::platform::{Actor, ChannelKind, ChatPlatform, ReactionEvent};
use crate::stats::StatsCounters;
use crate::translation::TranslationGateway;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Why an event was dropped without a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiscardReason {
    UnknownActor,
    BotActor,
    UnregisteredEmoji,
    ChannelNotFound,
    NotTextChannel,
}

/// Terminal state of one reaction event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Silently ignored; no counters, no messages
    Discarded(DiscardReason),
    /// The message had no text; the actor was told so
    NothingToTranslate,
    /// The translation was delivered
    Translated,
    /// Counted as an error; carries the description sent to the actor
    Failed(String),
}

/// Turns flag reactions into translated direct messages.
///
/// Holds no per-event state, so one instance serves concurrent events.
pub struct ReactionHandler {
    translator: Arc<dyn TranslationGateway>,
    stats: Arc<StatsCounters>,
    registry: &'static FlagRegistry,
    max_message_length: usize,
}

impl ReactionHandler {
    pub fn new(
        translator: Arc<dyn TranslationGateway>,
        stats: Arc<StatsCounters>,
        max_message_length: usize,
    ) -> Self {
        Self {
            translator,
            stats,
            registry: FlagRegistry::get(),
            max_message_length,
        }
    }

    /// Process one reaction event to completion. Never fails: every error is
    /// counted, reported to the actor, and turned into [`Outcome::Failed`].
    pub async fn handle(&self, platform: &dyn ChatPlatform, event: ReactionEvent) -> Outcome {
        let actor = match event.actor {
            None => return Outcome::Discarded(DiscardReason::UnknownActor),
            Some(actor) if actor.is_bot => return Outcome::Discarded(DiscardReason::BotActor),
            Some(actor) => actor,
        };

        let Some(language) = self.registry.resolve(&event.emoji) else {
            return Outcome::Discarded(DiscardReason::UnregisteredEmoji);
        };

        match self.relay(platform, &event, actor, language).await {
            Ok(outcome) => outcome,
            Err(err) => {
                self.stats.increment_errors();
                error!("❌ Translation error for user {}: {}", actor.id, err);

                let notice = format!("{} {}", TRANSLATION_FAILED_PREFIX, err);
                if let Err(send_err) = self.deliver(platform, actor.id, &notice).await {
                    warn!("Could not notify user {} about failure: {}", actor.id, send_err);
                }

                Outcome::Failed(err.to_string())
            }
        }
    }

    async fn relay(
        &self,
        platform: &dyn ChatPlatform,
        event: &ReactionEvent,
        actor: Actor,
        language: Language,
    ) -> Result<Outcome, RelayError> {
        match platform.resolve_channel(event.channel_id).await? {
            None => {
                warn!("⚠️ Could not find channel {}", event.channel_id);
                return Ok(Outcome::Discarded(DiscardReason::ChannelNotFound));
            }
            Some(ChannelKind::Other) => {
                warn!("⚠️ Channel {} does not support messages", event.channel_id);
                return Ok(Outcome::Discarded(DiscardReason::NotTextChannel));
            }
            Some(ChannelKind::TextCapable) => {}
        }

        let original = platform
            .fetch_message_text(event.channel_id, event.message_id)
            .await?;

        if original.trim().is_empty() {
            debug!("Message {} has no text to translate", event.message_id);
            self.deliver(platform, actor.id, NOTHING_TO_TRANSLATE).await?;
            return Ok(Outcome::NothingToTranslate);
        }

        let result = self.translator.translate(&original, language).await?;
        let reply = format_reply(language, &event.emoji, &original, &result.translated_text);

        self.deliver(platform, actor.id, &reply).await?;
        self.stats.increment_translations();
        info!("✅ Translation sent: {} for user {}", language.code(), actor.id);

        if let Err(err) = platform
            .remove_reaction(event.channel_id, event.message_id, &event.emoji, actor.id)
            .await
        {
            warn!("⚠️ Could not remove reaction: {}", err);
        }

        Ok(Outcome::Translated)
    }

    /// Send `text` to the user in order, one message per chunk. Stops at the
    /// first failed chunk; already-sent chunks are not resent.
    async fn deliver(
        &self,
        platform: &dyn ChatPlatform,
        user_id: u64,
        text: &str,
    ) -> Result<(), RelayError> {
        for segment in chunk(text, self.max_message_length)? {
            platform.send_direct_message(user_id, &segment).await?;
        }
        Ok(())
    }
}

/// Build the reply sent to the user who reacted.
pub fn format_reply(language: Language, flag: &str, original: &str, translated: &str) -> String {
    format!(
        "{} **{}** {}\n**{}:** {}\n**{}:** {}",
        HEADER_ICON,
        language.translation_word(),
        flag,
        language.original_word(),
        original,
        language.label(),
        translated
    )
}
