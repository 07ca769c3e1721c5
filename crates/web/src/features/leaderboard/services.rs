use board::{
    ChallengeId, LeaderboardView,
    dto::{
        chart::{ProgressChart, Tooltip},
        leaderboard::ChallengeLeaderboardResponse,
        rankings::RankingRow,
    },
    services::{chart::build_progress_chart, rankings::render_rankings},
};
use client::ApiClient;

use crate::error::{WebError, WebResult};

/// Every call fetches the leaderboard afresh; nothing is cached between
/// requests.
async fn fetch(api: &ApiClient, challenge: &str) -> WebResult<ChallengeLeaderboardResponse> {
    let challenge: ChallengeId = challenge.parse()?;
    Ok(api.challenge_leaderboard(&challenge).await?)
}

pub async fn get_leaderboard_view(api: &ApiClient, challenge: &str) -> WebResult<LeaderboardView> {
    let response = fetch(api, challenge).await?;
    Ok(LeaderboardView::from_response(&response))
}

pub async fn get_progress_chart(api: &ApiClient, challenge: &str) -> WebResult<ProgressChart> {
    let response = fetch(api, challenge).await?;
    Ok(build_progress_chart(&response))
}

pub async fn get_step_tooltip(api: &ApiClient, challenge: &str, step: u32) -> WebResult<Tooltip> {
    get_progress_chart(api, challenge)
        .await?
        .tooltip(step)
        .ok_or_else(|| WebError::NotFound(format!("Step {} is outside the chart", step)))
}

pub async fn get_rankings(api: &ApiClient, challenge: &str) -> WebResult<Vec<RankingRow>> {
    let response = fetch(api, challenge).await?;
    Ok(render_rankings(&response.leaderboard))
}
