mod chart;
mod classifier;
mod config;
mod error;
mod games;
mod model;
mod models;
mod routes;
mod utils;

use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use config::Config;
use model::SentimentModel;
use models::SessionState;
use tokio::sync::Mutex;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Application state shared across all handlers
pub struct AppState {
    pub model: SentimentModel,
    /// The one interactive session this process serves. All tally and
    /// game state lives here and dies with the process.
    pub session: Mutex<SessionState>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tweet_mood_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Tweet Mood backend server...");

    // Load configuration
    let config = Config::from_env()?;
    tracing::info!("Configuration loaded");

    // Load the pre-trained sentiment model artifact
    let model = match SentimentModel::load(&config.model.path).await {
        Ok(model) => {
            tracing::info!("Sentiment model loaded");
            model
        }
        Err(e) => {
            tracing::warn!(
                "Failed to load sentiment model: {}. Submissions will fail until an artifact is placed at {}",
                e,
                config.model.path
            );
            SentimentModel::untrained()
        }
    };

    // Create application state with a fresh session
    let state = Arc::new(AppState {
        model,
        session: Mutex::new(SessionState::default()),
    });

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Serve the single demo page and its assets
    let frontend_service = ServeDir::new(&config.server.static_dir);

    // Build router
    let app = Router::new()
        .merge(routes::create_routes())
        .fallback_service(frontend_service)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server listening on {}", addr);
    tracing::info!("Health check: http://{}/health", addr);
    tracing::info!("Demo page: http://{}/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
