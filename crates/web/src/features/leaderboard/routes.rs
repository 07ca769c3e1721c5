use axum::{Router, routing::get};
use client::ApiClient;

use super::handlers::{get_leaderboard, get_progress, get_progress_step, get_rankings};

pub fn routes() -> Router<ApiClient> {
    Router::new()
        .route("/:challenge/leaderboard", get(get_leaderboard))
        .route("/:challenge/progress", get(get_progress))
        .route("/:challenge/progress/steps/:step", get(get_progress_step))
        .route("/:challenge/rankings", get(get_rankings))
}
