//! Keyword Chatbot API Server
//!
//! HTTP front end for the keyword chatbot: landing page, chat endpoint,
//! health and metrics.

use axum::{
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::path::PathBuf;
use std::sync::Arc;
use thiserror::Error;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

pub mod routes;
pub mod settings;

use rule_store::{ConfigurationError, RuleSet};
use settings::{LoggingSettings, Settings};

/// Errors that stop the server from starting or running
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Rule configuration error: {0}")]
    Rules(#[from] ConfigurationError),

    #[error("Settings error: {0}")]
    Settings(#[from] config::ConfigError),

    #[error("Invalid log level: {0}")]
    LogLevel(String),

    #[error("Failed to install tracing subscriber: {0}")]
    Logging(#[from] tracing::subscriber::SetGlobalDefaultError),

    #[error("Failed to install metrics recorder: {0}")]
    Metrics(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Application state shared across handlers
///
/// Never written after startup, so handlers share it without a lock.
pub struct AppState {
    /// Keyword rule table
    pub rules: RuleSet,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Prometheus handle when metrics are enabled
    pub metrics: Option<PrometheusHandle>,
    /// Version string
    pub version: String,
    /// Start time
    pub start_time: std::time::Instant,
}

impl AppState {
    /// Create new application state
    pub fn new(rules: RuleSet, static_dir: impl Into<PathBuf>) -> Self {
        Self {
            rules,
            static_dir: static_dir.into(),
            metrics: None,
            version: env!("CARGO_PKG_VERSION").to_string(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Attach a Prometheus handle for `/metrics`
    pub fn with_metrics(mut self, handle: PrometheusHandle) -> Self {
        self.metrics = Some(handle);
        self
    }
}

/// Create the application router
pub fn create_router(state: Arc<AppState>) -> Router {
    let static_files = ServeDir::new(&state.static_dir);

    Router::new()
        .route("/", get(routes::home::index))
        .route("/chat", post(routes::chat::post_chat))
        .route("/health", get(routes::health::get_health))
        .route("/metrics", get(routes::metrics::get_metrics))
        .nest_service("/static", static_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Initialize logging
pub fn init_logging(settings: &LoggingSettings) -> Result<(), ServerError> {
    let level: Level = settings
        .level
        .parse()
        .map_err(|_| ServerError::LogLevel(settings.level.clone()))?;

    if settings.json {
        let subscriber = FmtSubscriber::builder()
            .json()
            .with_max_level(level)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    } else {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    Ok(())
}

/// Load rules and assemble state; fails before anything is bound
pub fn build_state(settings: &Settings) -> Result<AppState, ServerError> {
    let rules = RuleSet::load(&settings.rules.path)?;
    info!(
        "Rule table ready: {} rules from {}",
        rules.len(),
        settings.rules.path.display()
    );

    let mut state = AppState::new(rules, &settings.server.static_dir);

    if settings.metrics.enabled {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| ServerError::Metrics(e.to_string()))?;
        state = state.with_metrics(handle);
    }

    Ok(state)
}

/// Run the server
pub async fn run_server(settings: Settings) -> Result<(), ServerError> {
    let state = Arc::new(build_state(&settings)?);
    let app = create_router(state);

    let addr = settings.server.bind_addr();
    info!("Starting chat server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
