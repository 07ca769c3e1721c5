use chrono::NaiveDateTime;
use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::leaderboard::SubmissionEvent;
use crate::format::counted;
use crate::models::UserId;

/// Details of a submission made at exactly the step of the enclosing row.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct SubmissionMark {
    pub username: String,
    pub is_correct: bool,
    pub submitted_at: Option<NaiveDateTime>,
}

impl From<&SubmissionEvent> for SubmissionMark {
    fn from(event: &SubmissionEvent) -> Self {
        Self {
            username: event.username.clone(),
            is_correct: event.is_correct,
            submitted_at: event.submitted_at,
        }
    }
}

/// A user's cumulative points as of one step.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StepValue {
    #[schema(value_type = String)]
    pub user_id: UserId,
    pub points: i64,
    /// Present only when the user submitted at exactly this step; carried
    /// forward values have no submission.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submission: Option<SubmissionMark>,
}

/// One point on the shared "submission step" axis. `values` follows the
/// chart's series order.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct StepRow {
    pub step: u32,
    pub values: Vec<StepValue>,
}

impl StepRow {
    /// Step 0 with no series, rendered when there is nothing to plot.
    pub fn placeholder() -> Self {
        Self {
            step: 0,
            values: Vec::new(),
        }
    }

    pub fn value_for(&self, user_id: &UserId) -> Option<&StepValue> {
        self.values.iter().find(|value| &value.user_id == user_id)
    }

    pub fn points_for(&self, user_id: &UserId) -> Option<i64> {
        self.value_for(user_id).map(|value| value.points)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Series {
    #[schema(value_type = String)]
    pub user_id: UserId,
    pub username: String,
    /// CSS color of the series line.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct LegendEntry {
    pub username: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct TooltipEntry {
    #[schema(value_type = String)]
    pub user_id: UserId,
    pub username: String,
    pub color: String,
    pub points: i64,
    /// `points/max_points`
    pub label: String,
    pub is_correct: bool,
    pub submitted_at: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Tooltip {
    pub step: u32,
    pub entries: Vec<TooltipEntry>,
}

/// Multi-series progress chart: one line per user on a shared step axis,
/// Y domain `[0, max_points]`.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct ProgressChart {
    pub max_points: i64,
    pub series: Vec<Series>,
    pub rows: Vec<StepRow>,
}

impl ProgressChart {
    pub fn step_count(&self) -> usize {
        self.rows.len()
    }

    pub fn user_count(&self) -> usize {
        self.series.len()
    }

    pub fn row(&self, step: u32) -> Option<&StepRow> {
        self.rows.iter().find(|row| row.step == step)
    }

    pub fn legend(&self) -> Vec<LegendEntry> {
        self.series
            .iter()
            .map(|series| LegendEntry {
                username: series.username.clone(),
                color: series.color.clone(),
            })
            .collect()
    }

    pub fn caption(&self) -> String {
        format!(
            "{} from {}",
            counted(self.step_count(), "step"),
            counted(self.user_count(), "user")
        )
    }

    pub fn tooltip(&self, step: u32) -> Option<Tooltip> {
        let row = self.row(step)?;

        let entries = self
            .series
            .iter()
            .zip(&row.values)
            .map(|(series, value)| {
                let submission = value.submission.as_ref();
                TooltipEntry {
                    user_id: series.user_id.clone(),
                    username: submission
                        .map(|s| s.username.clone())
                        .unwrap_or_else(|| series.username.clone()),
                    color: series.color.clone(),
                    points: value.points,
                    label: format!("{}/{}", value.points, self.max_points),
                    is_correct: submission.is_some_and(|s| s.is_correct),
                    submitted_at: submission.and_then(|s| s.submitted_at),
                }
            })
            .collect();

        Some(Tooltip { step, entries })
    }
}
