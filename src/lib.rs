//! AnimeScore: a single-user, multi-criterion anime rating tracker core.
//!
//! Users submit validated ratings across six categories, browse a filtered
//! and sorted leaderboard, and inspect statistics derived from the whole
//! collection. Persistence is a single JSON document behind the
//! [`RatingRepository`](modules::rating::RatingRepository) trait; every
//! derived view is a pure function of one loaded snapshot.

pub mod app;
pub mod modules;
pub mod shared;

pub use app::AppContext;
pub use shared::errors::{AppError, AppResult, ValidationErrors};
