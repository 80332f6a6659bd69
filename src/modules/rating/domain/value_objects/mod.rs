pub mod category_scores;
pub mod genre;

pub use category_scores::{CategoryScores, RatingCategory};
pub use genre::Genre;
