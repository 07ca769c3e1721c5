use axum::{Json, Router, routing::get};
use client::ApiClient;
use serde_json::{Value, json};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod config;
pub mod error;
pub mod features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::leaderboard::handlers::get_leaderboard,
        features::leaderboard::handlers::get_progress,
        features::leaderboard::handlers::get_progress_step,
        features::leaderboard::handlers::get_rankings,
    ),
    components(
        schemas(
            board::LeaderboardView,
            board::LeaderboardPanel,
            board::dto::chart::ProgressChart,
            board::dto::chart::StepRow,
            board::dto::chart::StepValue,
            board::dto::chart::SubmissionMark,
            board::dto::chart::Series,
            board::dto::chart::Tooltip,
            board::dto::chart::TooltipEntry,
            board::dto::chart::LegendEntry,
            board::dto::rankings::RankingRow,
            board::dto::rankings::RankBadge,
            board::dto::leaderboard::RankedEntry,
            board::dto::leaderboard::SubmissionEvent,
            board::dto::leaderboard::ChallengeLeaderboardResponse,
        )
    ),
    tags(
        (name = "leaderboard", description = "Challenge leaderboard and progress endpoints"),
    )
)]
pub struct ApiDoc;

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn app(api: ApiClient) -> Router {
    Router::new()
        .route("/health", get(health))
        .nest("/api/challenges", features::leaderboard::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(api)
}
