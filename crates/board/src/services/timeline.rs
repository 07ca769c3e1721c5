use indexmap::IndexMap;

use crate::dto::chart::{StepRow, StepValue, SubmissionMark};
use crate::dto::leaderboard::SubmissionEvent;
use crate::models::UserId;

/// A user plotted on the progress chart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesUser {
    pub user_id: UserId,
    pub username: String,
}

/// Step-aligned view of a submission log.
///
/// `users` is in order of first appearance in the log, and every row holds
/// exactly one value per user in that same order.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeline {
    pub users: Vec<SeriesUser>,
    pub rows: Vec<StepRow>,
}

impl Timeline {
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

struct UserSequence<'a> {
    username: &'a str,
    events: Vec<&'a SubmissionEvent>,
}

/// Position of a user within their own sorted submissions.
#[derive(Debug, Clone, Copy, Default)]
struct Cursor {
    next: usize,
    points: i64,
}

impl Cursor {
    /// Consumes every submission up to `step` and reports the user's value at
    /// `step`: the submission made exactly there, or the last known total.
    fn advance(&mut self, user_id: &UserId, events: &[&SubmissionEvent], step: u32) -> StepValue {
        let mut exact = None;

        while let Some(event) = events.get(self.next)
            && event.submission_number <= step
        {
            self.points = event.cumulative_points;
            if event.submission_number == step {
                exact = Some(SubmissionMark::from(*event));
            }
            self.next += 1;
        }

        StepValue {
            user_id: user_id.clone(),
            points: self.points,
            submission: exact,
        }
    }
}

/// Rebuilds per-user progress on a shared "submission step" axis.
///
/// Row `s` holds, for every user with at least one submission, the
/// cumulative points of that user's submission number `s`, or the value of
/// their latest earlier submission, or 0 before their first one. There are as
/// many rows as the longest submission history. An empty log yields a single
/// placeholder row at step 0.
///
/// Baseline markers are skipped, and when a user reports the same submission
/// number twice the first report wins.
pub fn reconstruct(events: &[SubmissionEvent]) -> Timeline {
    let sequences = group_by_user(events);

    if sequences.is_empty() {
        return Timeline {
            users: Vec::new(),
            rows: vec![StepRow::placeholder()],
        };
    }

    let max_steps = sequences
        .values()
        .map(|sequence| sequence.events.len())
        .max()
        .unwrap_or(1)
        .max(1) as u32;

    let mut cursors = vec![Cursor::default(); sequences.len()];

    let rows = (1..=max_steps)
        .map(|step| {
            let values = sequences
                .iter()
                .zip(cursors.iter_mut())
                .map(|((user_id, sequence), cursor)| {
                    cursor.advance(user_id, &sequence.events, step)
                })
                .collect();

            StepRow { step, values }
        })
        .collect();

    let users = sequences
        .iter()
        .map(|(user_id, sequence)| SeriesUser {
            user_id: (*user_id).clone(),
            username: sequence.username.to_string(),
        })
        .collect();

    tracing::debug!(
        "Reconstructed {} steps for {} users from {} events",
        max_steps,
        sequences.len(),
        events.len()
    );

    Timeline { users, rows }
}

fn group_by_user(events: &[SubmissionEvent]) -> IndexMap<&UserId, UserSequence<'_>> {
    let mut sequences: IndexMap<&UserId, UserSequence<'_>> = IndexMap::new();

    for event in events.iter().filter(|event| !event.is_baseline()) {
        sequences
            .entry(&event.user_id)
            .or_insert_with(|| UserSequence {
                username: &event.username,
                events: Vec::new(),
            })
            .events
            .push(event);
    }

    for sequence in sequences.values_mut() {
        sequence.events.sort_by_key(|event| event.submission_number);
        sequence.events.dedup_by_key(|event| event.submission_number);
    }

    sequences
}
