use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::log_debug;
use crate::modules::rating::domain::{entities::RatingRecord, repositories::RatingRepository};
use crate::modules::stats::domain::{
    category_averages, genre_distribution, highest_rated_record, year_distribution,
    CategoryAverage, GenreCount, RatingDistribution, StatsSummary, YearCount,
};

/// Everything the stats page shows, derived in one pass over one snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsOverview {
    pub summary: StatsSummary,
    pub rating_distribution: RatingDistribution,
    pub genre_distribution: Vec<GenreCount>,
    pub year_distribution: Vec<YearCount>,
    pub category_averages: Vec<CategoryAverage>,
    pub top_rated: Option<RatingRecord>,
}

pub struct StatsService {
    repo: Arc<dyn RatingRepository>,
}

impl StatsService {
    pub fn new(repo: Arc<dyn RatingRepository>) -> Self {
        Self { repo }
    }

    /// Load the collection once, then derive every figure in memory. Nothing
    /// here is cached; a fresh call reflects the current collection.
    pub async fn overview(&self) -> StatsOverview {
        let records = self.repo.load_all().await;
        log_debug!("Computing statistics over {} record(s)", records.len());

        StatsOverview {
            summary: StatsSummary::calculate_from_records(&records),
            rating_distribution: RatingDistribution::calculate_from_records(&records),
            genre_distribution: genre_distribution(&records),
            year_distribution: year_distribution(&records),
            category_averages: category_averages(&records),
            top_rated: highest_rated_record(&records).cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::rating::domain::value_objects::{CategoryScores, Genre};
    use crate::modules::rating::infrastructure::InMemoryRatingRepository;

    fn record(name: &str, score: f64, genres: Vec<Genre>, year: Option<i32>) -> RatingRecord {
        RatingRecord::new(
            name.to_string(),
            CategoryScores::complete(score, score, score, score, score, score),
            genres,
            year,
            None,
            None,
            None,
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_overview_of_the_worked_example() {
        let repo = InMemoryRatingRepository::with_records(vec![
            record("A", 8.0, vec![Genre::Action], Some(2020)),
            record("B", 2.0, vec![Genre::Drama], Some(2021)),
        ]);
        let service = StatsService::new(Arc::new(repo));

        let overview = service.overview().await;

        assert_eq!(overview.summary.total_anime, 2);
        assert_eq!(overview.summary.avg_rating_display(), "5.00");
        assert_eq!(overview.summary.highest_rated.as_deref(), Some("A"));
        assert_eq!(overview.summary.most_rated_genre, Some(Genre::Action));
        assert_eq!(overview.rating_distribution.counts, [0, 1, 0, 0, 1]);
        assert_eq!(overview.year_distribution.len(), 2);
        assert_eq!(overview.top_rated.unwrap().name, "A");
    }

    #[tokio::test]
    async fn test_overview_of_an_empty_collection() {
        let service = StatsService::new(Arc::new(InMemoryRatingRepository::new()));
        let overview = service.overview().await;

        assert_eq!(overview.summary.total_anime, 0);
        assert_eq!(overview.rating_distribution.counts, [0; 5]);
        assert!(overview.genre_distribution.is_empty());
        assert!(overview.year_distribution.is_empty());
        assert!(overview.top_rated.is_none());
        assert!(overview
            .category_averages
            .iter()
            .all(|entry| entry.average == 0.0));
    }
}
