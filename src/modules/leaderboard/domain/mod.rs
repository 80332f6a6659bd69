pub mod query;

pub use query::{available_genres, GenreFilter, LeaderboardQuery, SortDirection, SortKey};
