pub mod new_rating;
pub mod rating_record;

pub use new_rating::NewRating;
pub use rating_record::{round_to_two_decimals, RatingRecord};
