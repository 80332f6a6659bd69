use std::sync::Arc;

use crate::modules::data_transfer::DataTransferService;
use crate::modules::leaderboard::LeaderboardService;
use crate::modules::rating::{
    JsonStoreRepository, RatingRepository, RatingService, StorageConfig,
};
use crate::modules::stats::StatsService;
use crate::modules::suggestion::{SuggestionConfig, SuggestionService};

/// Composition root: one storage backend shared by every service.
///
/// All services read through the same collaborator, so each operation sees
/// one consistent snapshot of the collection and mutations are full
/// read-modify-write cycles against the same store.
pub struct AppContext {
    pub ratings: RatingService,
    pub leaderboard: LeaderboardService,
    pub stats: StatsService,
    pub data_transfer: DataTransferService,
    pub suggestions: SuggestionService,
}

impl AppContext {
    /// Wire every service onto the given storage backend.
    pub fn new(repo: Arc<dyn RatingRepository>) -> Self {
        Self {
            ratings: RatingService::new(Arc::clone(&repo)),
            leaderboard: LeaderboardService::new(Arc::clone(&repo)),
            stats: StatsService::new(Arc::clone(&repo)),
            data_transfer: DataTransferService::new(repo),
            suggestions: SuggestionService::new(),
        }
    }

    /// Storage location from the environment, JSON file store, default
    /// suggestion tuning.
    pub fn from_env() -> Self {
        let config = StorageConfig::from_env();
        let repo: Arc<dyn RatingRepository> = Arc::new(JsonStoreRepository::from_config(&config));
        Self::new(repo)
    }

    pub fn with_suggestion_config(mut self, config: SuggestionConfig) -> Self {
        self.suggestions = SuggestionService::with_config(config);
        self
    }
}
