//! Status dashboard: an HTML page plus the JSON endpoints it polls.
//!
//! The dashboard only reads. It never touches the reaction handler.

use crate::i18n::FlagRegistry;
use crate::platform::LiveMetricsSource;
use crate::stats::{StatsCounters, StatsSnapshot};
use anyhow::{Context, Result};
use axum::{extract::State, response::Html, routing::get, Json, Router};
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

const DASHBOARD_PAGE: &str = include_str!("dashboard.html");

#[derive(Clone)]
pub struct DashboardState {
    pub stats: Arc<StatsCounters>,
    pub live: Arc<dyn LiveMetricsSource>,
}

#[derive(Debug, Serialize)]
pub struct FlagsResponse {
    pub flags: BTreeMap<&'static str, &'static str>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub bot_connected: bool,
}

pub fn build_router(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/api/stats", get(api_stats))
        .route("/api/flags", get(api_flags))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind `addr` and serve the dashboard until the process exits.
pub async fn serve(addr: &str, state: DashboardState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context(format!("Failed to bind dashboard to {}", addr))?;
    info!("✅ Web monitor listening on http://{}", addr);

    axum::serve(listener, build_router(state))
        .await
        .context("Dashboard server error")?;
    Ok(())
}

/// Wait for a spawned dashboard task. Returns false, after logging, when the
/// task panicked or was cancelled.
pub async fn join_monitor(handle: JoinHandle<()>) -> bool {
    match handle.await {
        Ok(()) => true,
        Err(e) => {
            error!("❌ Web monitor task ended abnormally: {}", e);
            false
        }
    }
}

async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_PAGE)
}

async fn api_stats(State(state): State<DashboardState>) -> Json<StatsSnapshot> {
    let live = state.live.live_metrics().await;
    Json(state.stats.snapshot(live))
}

async fn api_flags() -> Json<FlagsResponse> {
    Json(FlagsResponse {
        flags: FlagRegistry::get().flags().clone(),
    })
}

async fn health(State(state): State<DashboardState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        timestamp: chrono::Utc::now().to_rfc3339(),
        bot_connected: state.live.is_connected(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Disconnected;
    use crate::stats::{LiveMetrics, Status};
    use async_trait::async_trait;
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    struct ReadyPlatform;

    #[async_trait]
    impl LiveMetricsSource for ReadyPlatform {
        async fn live_metrics(&self) -> Option<LiveMetrics> {
            Some(LiveMetrics {
                guilds: 2,
                users: 57,
                latency: 31.25,
            })
        }

        fn is_connected(&self) -> bool {
            true
        }
    }

    fn make_state(live: Arc<dyn LiveMetricsSource>) -> (DashboardState, Arc<StatsCounters>) {
        let stats = Arc::new(StatsCounters::new());
        (
            DashboardState {
                stats: Arc::clone(&stats),
                live,
            },
            stats,
        )
    }

    async fn get_json(router: Router, uri: &str) -> serde_json::Value {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_dashboard_page_served() {
        let (state, _) = make_state(Arc::new(Disconnected));
        let response = build_router(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/api/stats"));
        assert!(html.contains("setInterval(updateStats, 5000)"));
    }

    #[tokio::test]
    async fn test_dashboard_page_keeps_rolling_chart() {
        let (state, _) = make_state(Arc::new(Disconnected));
        let response = build_router(state)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("id=\"statsChart\""));
        assert!(html.contains("const HISTORY_LENGTH = 20;"));
        assert!(html.contains("recordHistory(data)"));
    }

    #[tokio::test]
    async fn test_stats_without_bot() {
        let (state, _) = make_state(Arc::new(Disconnected));
        let json = get_json(build_router(state), "/api/stats").await;
        assert_eq!(
            json,
            serde_json::json!({"translations": 0, "errors": 0, "status": "Stopped"})
        );
    }

    #[tokio::test]
    async fn test_stats_with_live_metrics() {
        let (state, stats) = make_state(Arc::new(ReadyPlatform));
        stats.set_status(Status::Running);
        stats.increment_translations();

        let json = get_json(build_router(state), "/api/stats").await;

        assert_eq!(json["status"], "Running");
        assert_eq!(json["translations"], 1);
        assert_eq!(json["guilds"], 2);
        assert_eq!(json["users"], 57);
        assert_eq!(json["latency"], 31.25);
    }

    #[tokio::test]
    async fn test_stats_polling_does_not_mutate() {
        let (state, stats) = make_state(Arc::new(Disconnected));
        stats.increment_errors();
        let router = build_router(state);

        let first = get_json(router.clone(), "/api/stats").await;
        let second = get_json(router, "/api/stats").await;

        assert_eq!(first, second);
        assert_eq!(stats.errors(), 1);
    }

    #[tokio::test]
    async fn test_flags_endpoint() {
        let (state, _) = make_state(Arc::new(Disconnected));
        let json = get_json(build_router(state), "/api/flags").await;

        let flags = json["flags"].as_object().unwrap();
        assert_eq!(flags.len(), FlagRegistry::get().len());
        assert_eq!(flags["🇩🇪"], "de");
        assert_eq!(flags["🇹🇼"], "zh-tw");
    }

    #[tokio::test]
    async fn test_health_reports_bot_connection() {
        let (state, _) = make_state(Arc::new(Disconnected));
        let json = get_json(build_router(state), "/health").await;
        assert_eq!(json["status"], "healthy");
        assert_eq!(json["bot_connected"], false);
        assert!(json["timestamp"].as_str().is_some());

        let (state, _) = make_state(Arc::new(ReadyPlatform));
        let json = get_json(build_router(state), "/health").await;
        assert_eq!(json["bot_connected"], true);
    }

    #[tokio::test]
    async fn test_join_monitor_reports_panicked_task() {
        let handle = tokio::spawn(async { panic!("dashboard crashed") });
        assert!(!join_monitor(handle).await);
    }

    #[tokio::test]
    async fn test_join_monitor_accepts_clean_exit() {
        let handle = tokio::spawn(async {});
        assert!(join_monitor(handle).await);
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (state, _) = make_state(Arc::new(Disconnected));
        let response = build_router(state)
            .oneshot(Request::builder().uri("/api/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
