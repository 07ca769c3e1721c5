use crate::dto::chart::{ProgressChart, Series};
use crate::dto::leaderboard::ChallengeLeaderboardResponse;
use crate::models::SeriesColor;
use crate::services::timeline::reconstruct;

/// Build the progress chart for a freshly fetched leaderboard.
pub fn build_progress_chart(response: &ChallengeLeaderboardResponse) -> ProgressChart {
    let timeline = reconstruct(&response.timeline);

    let series = timeline
        .users
        .into_iter()
        .enumerate()
        .map(|(index, user)| Series {
            user_id: user.user_id,
            username: user.username,
            color: SeriesColor::for_index(index).to_string(),
        })
        .collect();

    ProgressChart {
        max_points: response.effective_max_points(),
        series,
        rows: timeline.rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::leaderboard::SubmissionEvent;
    use crate::models::UserId;

    fn response(timeline: Vec<SubmissionEvent>) -> ChallengeLeaderboardResponse {
        ChallengeLeaderboardResponse {
            timeline,
            max_points: 200,
            total_users: 2,
            ..Default::default()
        }
    }

    fn sample() -> ProgressChart {
        let mut first = SubmissionEvent::new(1, "alice", 1, 50);
        first.is_correct = true;
        let bob = SubmissionEvent::new(2, "bob", 1, 0);
        let second = SubmissionEvent::new(1, "alice", 2, 50);

        build_progress_chart(&response(vec![first, bob, second]))
    }

    #[test]
    fn test_series_colors_follow_ordinal_position() {
        let chart = sample();

        assert_eq!(chart.series.len(), 2);
        assert_eq!(chart.series[0].username, "alice");
        assert_eq!(chart.series[0].color, "hsl(0, 70%, 60%)");
        assert_eq!(chart.series[1].username, "bob");
        assert_eq!(chart.series[1].color, "hsl(137.5, 70%, 60%)");
    }

    #[test]
    fn test_legend_and_caption() {
        let chart = sample();

        let legend = chart.legend();
        assert_eq!(legend.len(), 2);
        assert_eq!(legend[1].username, "bob");
        assert_eq!(legend[1].color, chart.series[1].color);

        assert_eq!(chart.caption(), "2 steps from 2 users");
    }

    #[test]
    fn test_tooltip_reports_exact_and_carried_values() {
        let chart = sample();

        let tooltip = chart.tooltip(1).unwrap();
        assert_eq!(tooltip.step, 1);
        assert_eq!(tooltip.entries[0].label, "50/200");
        assert!(tooltip.entries[0].is_correct);
        assert_eq!(tooltip.entries[1].label, "0/200");
        assert!(!tooltip.entries[1].is_correct);

        let tooltip = chart.tooltip(2).unwrap();
        assert_eq!(tooltip.entries[1].user_id, UserId::from(2));
        assert_eq!(tooltip.entries[1].username, "bob");
        assert_eq!(tooltip.entries[1].points, 0);
        assert!(tooltip.entries[1].submitted_at.is_none());

        assert!(chart.tooltip(3).is_none());
    }

    #[test]
    fn test_empty_timeline_renders_placeholder_axis() {
        let chart = build_progress_chart(&ChallengeLeaderboardResponse::default());

        assert_eq!(chart.max_points, 100);
        assert!(chart.series.is_empty());
        assert_eq!(chart.rows.len(), 1);
        assert_eq!(chart.rows[0].step, 0);
        assert_eq!(chart.caption(), "1 step from 0 users");

        let tooltip = chart.tooltip(0).unwrap();
        assert!(tooltip.entries.is_empty());
    }
}
