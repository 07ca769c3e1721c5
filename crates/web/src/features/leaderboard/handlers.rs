use axum::{
    Json,
    extract::{Path, State},
};
use board::{
    LeaderboardView,
    dto::{
        chart::{ProgressChart, Tooltip},
        rankings::RankingRow,
    },
};
use client::ApiClient;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/challenges/{challenge}/leaderboard",
    params(
        ("challenge" = String, Path, description = "Challenge id or slug")
    ),
    responses(
        (status = 200, description = "Leaderboard panel, or the empty state when nobody attempted the challenge", body = LeaderboardView),
        (status = 400, description = "Invalid challenge identifier"),
        (status = 404, description = "Challenge not found"),
        (status = 502, description = "Failed to load leaderboard")
    ),
    tag = "leaderboard"
)]
pub async fn get_leaderboard(
    State(api): State<ApiClient>,
    Path(challenge): Path<String>,
) -> Result<Json<LeaderboardView>, WebError> {
    let view = services::get_leaderboard_view(&api, &challenge).await?;

    Ok(Json(view))
}

#[utoipa::path(
    get,
    path = "/api/challenges/{challenge}/progress",
    params(
        ("challenge" = String, Path, description = "Challenge id or slug")
    ),
    responses(
        (status = 200, description = "Step-aligned points progression per user", body = ProgressChart),
        (status = 400, description = "Invalid challenge identifier"),
        (status = 404, description = "Challenge not found"),
        (status = 502, description = "Failed to load leaderboard")
    ),
    tag = "leaderboard"
)]
pub async fn get_progress(
    State(api): State<ApiClient>,
    Path(challenge): Path<String>,
) -> Result<Json<ProgressChart>, WebError> {
    let chart = services::get_progress_chart(&api, &challenge).await?;

    Ok(Json(chart))
}

#[utoipa::path(
    get,
    path = "/api/challenges/{challenge}/progress/steps/{step}",
    params(
        ("challenge" = String, Path, description = "Challenge id or slug"),
        ("step" = u32, Path, description = "Submission step")
    ),
    responses(
        (status = 200, description = "Tooltip for one submission step", body = Tooltip),
        (status = 400, description = "Invalid challenge identifier"),
        (status = 404, description = "Challenge not found or step outside the chart"),
        (status = 502, description = "Failed to load leaderboard")
    ),
    tag = "leaderboard"
)]
pub async fn get_progress_step(
    State(api): State<ApiClient>,
    Path((challenge, step)): Path<(String, u32)>,
) -> Result<Json<Tooltip>, WebError> {
    let tooltip = services::get_step_tooltip(&api, &challenge, step).await?;

    Ok(Json(tooltip))
}

#[utoipa::path(
    get,
    path = "/api/challenges/{challenge}/rankings",
    params(
        ("challenge" = String, Path, description = "Challenge id or slug")
    ),
    responses(
        (status = 200, description = "Top performers ranked by speed and points", body = Vec<RankingRow>),
        (status = 400, description = "Invalid challenge identifier"),
        (status = 404, description = "Challenge not found"),
        (status = 502, description = "Failed to load leaderboard")
    ),
    tag = "leaderboard"
)]
pub async fn get_rankings(
    State(api): State<ApiClient>,
    Path(challenge): Path<String>,
) -> Result<Json<Vec<RankingRow>>, WebError> {
    let rows = services::get_rankings(&api, &challenge).await?;

    Ok(Json(rows))
}
