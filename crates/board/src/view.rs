use serde::Serialize;
use std::fmt;
use utoipa::ToSchema;

use crate::dto::chart::ProgressChart;
use crate::dto::leaderboard::ChallengeLeaderboardResponse;
use crate::dto::rankings::RankingRow;
use crate::format::counted;
use crate::services::{chart::build_progress_chart, rankings::render_rankings};

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load leaderboard";
pub const EMPTY_MESSAGE: &str = "No one has completed this challenge yet!";
pub const EMPTY_HINT: &str = "Be the first to solve it and claim the top spot.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Progress,
    Rankings,
}

/// Everything the leaderboard panel shows once data has arrived.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LeaderboardPanel {
    pub total_users: u64,
    pub total_completions: u64,
    pub max_points: i64,
    /// e.g. "3 users attempted"
    pub attempted_label: String,
    pub chart: ProgressChart,
    pub chart_caption: String,
    pub chart_description: String,
    pub progress_footer: String,
    pub rankings: Vec<RankingRow>,
    pub rankings_footer: String,
}

impl LeaderboardPanel {
    pub fn footer(&self, tab: Tab) -> &str {
        match tab {
            Tab::Progress => &self.progress_footer,
            Tab::Rankings => &self.rankings_footer,
        }
    }
}

/// State of the leaderboard view after a fetch.
///
/// A failed fetch is terminal for the view: there is no retry and nothing of
/// the payload is rendered.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum LeaderboardView {
    Failed { message: String },
    Empty { message: String, hint: String },
    Ready { panel: Box<LeaderboardPanel> },
}

impl LeaderboardView {
    pub fn from_fetch<E: fmt::Display>(result: Result<ChallengeLeaderboardResponse, E>) -> Self {
        match result {
            Ok(response) => Self::from_response(&response),
            Err(e) => {
                tracing::error!("Error fetching challenge leaderboard: {}", e);
                Self::Failed {
                    message: LOAD_FAILED_MESSAGE.to_string(),
                }
            }
        }
    }

    pub fn from_response(response: &ChallengeLeaderboardResponse) -> Self {
        if response.total_users == 0 {
            return Self::Empty {
                message: EMPTY_MESSAGE.to_string(),
                hint: EMPTY_HINT.to_string(),
            };
        }

        let chart = build_progress_chart(response);
        let rankings = render_rankings(&response.leaderboard);
        let users = counted(response.total_users as usize, "user");

        Self::Ready {
            panel: Box::new(LeaderboardPanel {
                total_users: response.total_users,
                total_completions: response.total_completions,
                max_points: chart.max_points,
                attempted_label: format!("{} attempted", users),
                chart_caption: chart.caption(),
                chart_description: format!(
                    "Points progression showing how each user accumulated points from 0 to {} through their submission attempts",
                    chart.max_points
                ),
                progress_footer: format!(
                    "Individual progress lines for {} who attempted this challenge",
                    users
                ),
                rankings_footer: format!(
                    "Top {} ranked by speed and points",
                    counted(rankings.len(), "performer")
                ),
                chart,
                rankings,
            }),
        }
    }

    pub fn panel(&self) -> Option<&LeaderboardPanel> {
        match self {
            Self::Ready { panel } => Some(panel.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::leaderboard::{RankedEntry, SubmissionEvent};
    use crate::models::UserId;

    fn populated() -> ChallengeLeaderboardResponse {
        ChallengeLeaderboardResponse {
            leaderboard: vec![RankedEntry {
                rank: 1,
                user_id: UserId::from(1),
                username: "alice".to_string(),
                avatar_url: None,
                points_awarded: 100,
                completion_time: Some(75.0),
                time_display: "1h 15m".to_string(),
                submitted_at: None,
                hint_count: 0,
            }],
            timeline: vec![
                SubmissionEvent::new(1, "alice", 1, 40),
                SubmissionEvent::new(1, "alice", 2, 100),
            ],
            total_completions: 1,
            max_points: 100,
            total_users: 1,
            total_questions: Some(2),
        }
    }

    #[test]
    fn test_failed_fetch_is_terminal_error_state() {
        let view = LeaderboardView::from_fetch::<String>(Err("connection refused".to_string()));

        assert_eq!(
            view,
            LeaderboardView::Failed {
                message: LOAD_FAILED_MESSAGE.to_string()
            }
        );
        assert!(view.panel().is_none());
    }

    #[test]
    fn test_no_users_renders_empty_state() {
        let view = LeaderboardView::from_fetch::<String>(Ok(ChallengeLeaderboardResponse::default()));

        assert!(matches!(view, LeaderboardView::Empty { .. }));
    }

    #[test]
    fn test_ready_panel_contents() {
        let view = LeaderboardView::from_response(&populated());
        let panel = view.panel().unwrap();

        assert_eq!(panel.attempted_label, "1 user attempted");
        assert_eq!(panel.chart.rows.len(), 2);
        assert_eq!(panel.chart_caption, "2 steps from 1 user");
        assert_eq!(panel.rankings.len(), 1);
        assert_eq!(
            panel.footer(Tab::Progress),
            "Individual progress lines for 1 user who attempted this challenge"
        );
        assert_eq!(
            panel.footer(Tab::Rankings),
            "Top 1 performer ranked by speed and points"
        );
        assert_eq!(
            panel.chart_description,
            "Points progression showing how each user accumulated points from 0 to 100 through their submission attempts"
        );
    }

    #[test]
    fn test_ready_panel_serializes_footers_and_description() {
        let view = LeaderboardView::from_response(&populated());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["state"], "ready");
        assert_eq!(
            json["panel"]["progress_footer"],
            "Individual progress lines for 1 user who attempted this challenge"
        );
        assert_eq!(
            json["panel"]["rankings_footer"],
            "Top 1 performer ranked by speed and points"
        );
        assert!(
            json["panel"]["chart_description"]
                .as_str()
                .unwrap()
                .contains("from 0 to 100")
        );
    }

    #[test]
    fn test_view_serializes_with_state_tag() {
        let view = LeaderboardView::from_response(&ChallengeLeaderboardResponse::default());
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["state"], "empty");
        assert_eq!(json["message"], EMPTY_MESSAGE);
    }
}
