use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Result;
use crate::models::UserId;

/// Y-axis ceiling used when the API does not report a challenge maximum.
pub const DEFAULT_MAX_POINTS: i64 = 100;

/// One user's attempt at a challenge question, as reported in the
/// leaderboard timeline.
///
/// The API also emits one baseline marker per user (`submission_number == 0`,
/// `is_start == true`) representing the user's zero starting point.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct SubmissionEvent {
    #[schema(value_type = String)]
    pub user_id: UserId,
    pub username: String,
    /// 1-based position within this user's own submission history.
    #[serde(default)]
    pub submission_number: u32,
    /// Running total for this user as of this submission.
    #[serde(default)]
    pub cumulative_points: i64,
    #[serde(default)]
    pub is_correct: bool,
    #[serde(default)]
    pub submitted_at: Option<NaiveDateTime>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Points of this single submission.
    #[serde(default)]
    pub points: i64,
    #[serde(default)]
    pub is_start: bool,
}

impl SubmissionEvent {
    pub fn new(
        user_id: impl Into<UserId>,
        username: impl Into<String>,
        submission_number: u32,
        cumulative_points: i64,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            username: username.into(),
            submission_number,
            cumulative_points,
            is_correct: false,
            submitted_at: None,
            user_index: None,
            avatar_url: None,
            points: 0,
            is_start: false,
        }
    }

    pub fn is_baseline(&self) -> bool {
        self.is_start || self.submission_number == 0
    }
}

/// Ranked summary row, rendered exactly as the API orders it.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct RankedEntry {
    pub rank: u32,
    #[schema(value_type = String)]
    pub user_id: UserId,
    pub username: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub points_awarded: i64,
    /// Minutes spent solving the challenge.
    #[serde(default)]
    pub completion_time: Option<f64>,
    #[serde(default)]
    pub time_display: String,
    #[serde(default)]
    pub submitted_at: Option<NaiveDateTime>,
    #[serde(default)]
    pub hint_count: u32,
}

/// Payload of `GET /challenges/{id}/leaderboard`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize, ToSchema)]
pub struct ChallengeLeaderboardResponse {
    #[serde(default)]
    pub leaderboard: Vec<RankedEntry>,
    #[serde(default)]
    pub timeline: Vec<SubmissionEvent>,
    #[serde(default)]
    pub total_completions: u64,
    #[serde(default)]
    pub max_points: i64,
    #[serde(default)]
    pub total_users: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_questions: Option<u32>,
}

impl ChallengeLeaderboardResponse {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn effective_max_points(&self) -> i64 {
        if self.max_points > 0 {
            self.max_points
        } else {
            DEFAULT_MAX_POINTS
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "leaderboard": [
            {
                "rank": 1,
                "user_id": 3,
                "username": "alice",
                "avatar_url": null,
                "points_awarded": 100,
                "completion_time": 42.0,
                "time_display": "42m",
                "submitted_at": "2025-03-01T10:15:00.123456",
                "hint_count": 0
            }
        ],
        "timeline": [
            {
                "user_index": 1,
                "username": "alice",
                "user_id": 3,
                "avatar_url": null,
                "points": 0,
                "cumulative_points": 0,
                "submission_number": 0,
                "is_start": true
            },
            {
                "user_index": 1,
                "username": "alice",
                "user_id": 3,
                "avatar_url": null,
                "points": 50,
                "cumulative_points": 50,
                "submission_number": 1,
                "submitted_at": "2025-03-01T10:01:00",
                "is_correct": true,
                "is_start": false
            }
        ],
        "total_completions": 1,
        "max_points": 100,
        "total_questions": 2,
        "total_users": 1
    }"#;

    #[test]
    fn test_parse_upstream_payload() {
        let response = ChallengeLeaderboardResponse::from_json(PAYLOAD).unwrap();

        assert_eq!(response.leaderboard.len(), 1);
        assert_eq!(response.leaderboard[0].user_id, UserId::Numeric(3));
        assert_eq!(response.leaderboard[0].time_display, "42m");

        assert_eq!(response.timeline.len(), 2);
        assert!(response.timeline[0].is_baseline());
        assert!(response.timeline[0].submitted_at.is_none());
        assert!(!response.timeline[1].is_baseline());
        assert!(response.timeline[1].is_correct);
        assert_eq!(response.timeline[1].cumulative_points, 50);

        assert_eq!(response.total_questions, Some(2));
        assert_eq!(response.total_users, 1);
    }

    #[test]
    fn test_missing_fields_fall_back_to_view_defaults() {
        let response = ChallengeLeaderboardResponse::from_json("{}").unwrap();

        assert!(response.leaderboard.is_empty());
        assert!(response.timeline.is_empty());
        assert_eq!(response.total_completions, 0);
        assert_eq!(response.total_users, 0);
        assert_eq!(response.effective_max_points(), DEFAULT_MAX_POINTS);
    }

    #[test]
    fn test_zero_max_points_uses_default_ceiling() {
        let response = ChallengeLeaderboardResponse {
            max_points: 0,
            ..Default::default()
        };
        assert_eq!(response.effective_max_points(), 100);

        let response = ChallengeLeaderboardResponse {
            max_points: 250,
            ..Default::default()
        };
        assert_eq!(response.effective_max_points(), 250);
    }

    #[test]
    fn test_malformed_payload_is_rejected() {
        assert!(ChallengeLeaderboardResponse::from_json("{\"timeline\": 3}").is_err());
    }
}
