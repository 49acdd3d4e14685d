pub mod games;
pub mod health;
pub mod sentiment;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes())
}

fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/sentiment", post(sentiment::submit_tweet))
        .route("/chart", get(sentiment::chart_spec))
        .route("/session", get(games::session_view))
        .route("/games/select", post(games::select_game))
        .route("/games/guess", post(games::guess_number))
        .route("/games/guess/restart", post(games::restart_guess))
        .route("/games/tictactoe", post(games::play_cell))
        .route("/games/hangman", post(games::guess_letter))
}
