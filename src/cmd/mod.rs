pub mod calc;
pub mod leaderboard;
pub mod log;
pub mod lookup;
