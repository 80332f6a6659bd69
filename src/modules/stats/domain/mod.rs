pub mod distributions;
pub mod summary;

pub use distributions::{
    category_averages, genre_distribution, year_distribution, CategoryAverage, GenreCount,
    RatingDistribution, YearCount, RATING_BUCKET_LABELS,
};
pub use summary::{highest_rated_record, StatsSummary};
