pub mod dto;
pub mod error;
pub mod format;
pub mod models;
pub mod services;
pub mod view;

pub use error::{BoardError, Result};
pub use models::{ChallengeId, SeriesColor, UserId};
pub use services::timeline::{Timeline, reconstruct};
pub use view::{LeaderboardPanel, LeaderboardView, Tab};
