use anyhow::Result;
use reaction_translator::{
    config::Config,
    dashboard::{self, DashboardState},
    discord::{self, DiscordMonitor},
    handler::ReactionHandler,
    i18n::FlagRegistry,
    platform::Disconnected,
    stats::StatsCounters,
    translation::GoogleTranslator,
};
use std::sync::Arc;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when variables come from the host)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("reaction_translator=info".parse()?),
        )
        .init();

    info!("🚀 Starting Discord translation bot");

    let config = Config::from_env()?;
    let stats = Arc::new(StatsCounters::new());

    let Some(token) = config.discord_token.clone() else {
        warn!("⚠️ DISCORD_TOKEN is not set; create a .env file or add the secret");
        warn!("❌ Bot not started, serving the web monitor only");
        let state = DashboardState {
            stats,
            live: Arc::new(Disconnected),
        };
        return dashboard::serve(&config.bind_address(), state).await;
    };

    let monitor = Arc::new(DiscordMonitor::new());
    let state = DashboardState {
        stats: Arc::clone(&stats),
        live: Arc::clone(&monitor) as _,
    };
    let addr = config.bind_address();
    let web_monitor = tokio::spawn(async move {
        if let Err(e) = dashboard::serve(&addr, state).await {
            error!("❌ Web monitor failed: {:#}", e);
        }
    });

    let translator = Arc::new(GoogleTranslator::from_config(&config)?);
    let handler = Arc::new(ReactionHandler::new(
        translator,
        Arc::clone(&stats),
        config.max_message_length,
    ));

    info!("🔐 Discord token found");
    info!("🌐 Supported flags: {}", FlagRegistry::get().len());

    if let Err(e) = discord::run(&token, handler, stats, monitor).await {
        // Keep the dashboard up so the failure is visible there
        error!("❌ Critical bot error: {:#}", e);
        warn!("🌐 Web monitor keeps running on http://{}", config.bind_address());
        dashboard::join_monitor(web_monitor).await;
    }

    info!("🛑 Bot stopped");
    Ok(())
}
