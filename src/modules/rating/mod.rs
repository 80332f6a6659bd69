pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{RatingService, RecentSort};
pub use domain::{
    CategoryScores, Genre, NewRating, RatingCategory, RatingRecord, RatingRepository,
    RecordValidator,
};
pub use infrastructure::{InMemoryRatingRepository, JsonStoreRepository, StorageConfig};
