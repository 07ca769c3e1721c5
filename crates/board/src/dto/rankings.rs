use serde::Serialize;
use utoipa::ToSchema;

use crate::dto::leaderboard::RankedEntry;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
    Position { rank: u32 },
}

impl RankBadge {
    pub fn for_rank(rank: u32) -> Self {
        match rank {
            1 => Self::Gold,
            2 => Self::Silver,
            3 => Self::Bronze,
            rank => Self::Position { rank },
        }
    }

    pub fn is_podium(&self) -> bool {
        !matches!(self, Self::Position { .. })
    }

    pub fn label(&self) -> String {
        match self {
            Self::Gold => "1st".to_string(),
            Self::Silver => "2nd".to_string(),
            Self::Bronze => "3rd".to_string(),
            Self::Position { rank } => format!("#{}", rank),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RankingRow {
    #[serde(flatten)]
    pub entry: RankedEntry,
    pub badge: RankBadge,
    pub podium: bool,
    /// Shown in place of a missing avatar.
    pub initial: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hints_label: Option<String>,
}
