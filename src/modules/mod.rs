pub mod data_transfer;
pub mod leaderboard;
pub mod rating;
pub mod stats;
pub mod suggestion;
