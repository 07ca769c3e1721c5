pub mod chart;
pub mod leaderboard;
pub mod rankings;
pub mod session;
