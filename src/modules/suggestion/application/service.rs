use std::time::Duration;

use crate::log_debug;
use crate::modules::suggestion::domain::{builtin_catalog, rank_titles, TitleSuggestion};

/// Tuning for the suggestion stub.
#[derive(Debug, Clone)]
pub struct SuggestionConfig {
    /// Artificial delay standing in for a remote lookup.
    pub simulated_latency: Duration,
    /// Upper bound on returned suggestions.
    pub max_results: usize,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            simulated_latency: Duration::from_millis(500),
            max_results: 5,
        }
    }
}

/// Title lookup over the built-in catalog. There is no real backend; the
/// latency is simulated so callers exercise the same flow they would against
/// one.
pub struct SuggestionService {
    catalog: Vec<TitleSuggestion>,
    config: SuggestionConfig,
}

impl SuggestionService {
    pub fn new() -> Self {
        Self::with_config(SuggestionConfig::default())
    }

    pub fn with_config(config: SuggestionConfig) -> Self {
        Self {
            catalog: builtin_catalog(),
            config,
        }
    }

    pub fn with_catalog(catalog: Vec<TitleSuggestion>, config: SuggestionConfig) -> Self {
        Self { catalog, config }
    }

    pub async fn search(&self, query: &str) -> Vec<TitleSuggestion> {
        if !self.config.simulated_latency.is_zero() {
            tokio::time::sleep(self.config.simulated_latency).await;
        }

        let mut results: Vec<TitleSuggestion> = rank_titles(&self.catalog, query)
            .into_iter()
            .cloned()
            .collect();
        results.truncate(self.config.max_results);

        log_debug!("Search: '{}' returned {} suggestion(s)", query, results.len());
        results
    }
}

impl Default for SuggestionService {
    fn default() -> Self {
        Self::new()
    }
}
