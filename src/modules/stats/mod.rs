pub mod application;
pub mod domain;

// Re-exports for easy external access
pub use application::{StatsOverview, StatsService};
pub use domain::{
    category_averages, genre_distribution, highest_rated_record, year_distribution,
    CategoryAverage, GenreCount, RatingDistribution, StatsSummary, YearCount,
    RATING_BUCKET_LABELS,
};
