mod challenge_id;
mod color;
mod user_id;

pub use challenge_id::ChallengeId;
pub use color::SeriesColor;
pub use user_id::UserId;
