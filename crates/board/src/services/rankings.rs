use crate::dto::leaderboard::RankedEntry;
use crate::dto::rankings::{RankBadge, RankingRow};
use crate::format::counted;

/// Decorate ranked entries for display. Order and values are kept exactly as
/// the API returned them.
pub fn render_rankings(entries: &[RankedEntry]) -> Vec<RankingRow> {
    entries.iter().map(render_row).collect()
}

fn render_row(entry: &RankedEntry) -> RankingRow {
    let badge = RankBadge::for_rank(entry.rank);

    let initial: String = entry
        .username
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default();

    let hints_label = (entry.hint_count > 0)
        .then(|| format!("{} used", counted(entry.hint_count as usize, "hint")));

    RankingRow {
        entry: entry.clone(),
        badge,
        podium: badge.is_podium(),
        initial,
        hints_label,
    }
}
