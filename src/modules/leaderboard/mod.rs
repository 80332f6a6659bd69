pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::LeaderboardService;
pub use domain::{available_genres, GenreFilter, LeaderboardQuery, SortDirection, SortKey};
