use std::sync::Arc;

use crate::log_debug;
use crate::modules::leaderboard::domain::{available_genres, LeaderboardQuery};
use crate::modules::rating::domain::{
    entities::RatingRecord, repositories::RatingRepository, value_objects::Genre,
};

pub struct LeaderboardService {
    repo: Arc<dyn RatingRepository>,
}

impl LeaderboardService {
    pub fn new(repo: Arc<dyn RatingRepository>) -> Self {
        Self { repo }
    }

    /// One load, then pure in-memory filtering and ordering.
    pub async fn view(&self, query: &LeaderboardQuery) -> Vec<RatingRecord> {
        let records = self.repo.load_all().await;
        let result = query.apply(&records);
        log_debug!(
            "Leaderboard query matched {} of {} record(s)",
            result.len(),
            records.len()
        );
        result
    }

    /// Genres present in the collection, for the filter dropdown.
    pub async fn genres(&self) -> Vec<Genre> {
        let records = self.repo.load_all().await;
        available_genres(&records)
    }
}
