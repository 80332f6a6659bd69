pub mod entities;
pub mod repositories;
pub mod services;
pub mod value_objects;

// Re-exports for easy access
pub use entities::{NewRating, RatingRecord};
pub use repositories::RatingRepository;
pub use services::RecordValidator;
pub use value_objects::{CategoryScores, Genre, RatingCategory};
