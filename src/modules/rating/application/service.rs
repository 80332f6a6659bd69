use chrono::{DateTime, Utc};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::rating::domain::{
    entities::{NewRating, RatingRecord},
    repositories::RatingRepository,
    services::RecordValidator,
};
use crate::shared::errors::AppResult;
use crate::{log_debug, log_info};

/// Orderings for the "recent ratings" panel on the submission page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecentSort {
    #[default]
    Newest,
    Highest,
    Lowest,
}

pub struct RatingService {
    repo: Arc<dyn RatingRepository>,
}

impl RatingService {
    pub fn new(repo: Arc<dyn RatingRepository>) -> Self {
        Self { repo }
    }

    /// Validate a submission and append it to the collection.
    ///
    /// Rejection is atomic: a draft with any failing field is never persisted,
    /// and the stored collection is untouched.
    pub async fn submit(&self, draft: NewRating) -> AppResult<RatingRecord> {
        RecordValidator::validate(&draft)?;

        // Genre tags form a set; repeats are dropped, first occurrence wins.
        let mut genres: Vec<_> = Vec::with_capacity(draft.genres.len());
        for genre in draft.genres {
            if !genres.contains(&genre) {
                genres.push(genre);
            }
        }

        let record = RatingRecord::new(
            draft.name,
            draft.scores,
            genres,
            draft.release_year,
            draft.studio,
            draft.episodes,
            draft.notes,
            draft.image,
        )?;

        let mut records = self.repo.load_all().await;
        records.push(record.clone());
        self.repo.save_all(&records).await?;

        log_info!(
            "Rating saved: '{}' averaged {}",
            record.name,
            record.average_display()
        );
        Ok(record)
    }

    /// The full collection, in insertion order.
    pub async fn all(&self) -> Vec<RatingRecord> {
        self.repo.load_all().await
    }

    /// Remove the record with the given id. Returns whether anything was
    /// removed; an unknown id is a no-op, not an error.
    pub async fn remove(&self, id: Uuid) -> AppResult<bool> {
        let mut records = self.repo.load_all().await;
        let Some(position) = records.iter().position(|record| record.id == id) else {
            log_debug!("Remove requested for unknown id {}", id);
            return Ok(false);
        };

        let removed = records.remove(position);
        self.repo.save_all(&records).await?;
        log_info!("Rating removed: '{}'", removed.name);
        Ok(true)
    }

    /// Remove the single record matching a creation timestamp. Legacy exports
    /// carry no id, so their records are addressed this way.
    pub async fn remove_by_date_added(&self, date_added: DateTime<Utc>) -> AppResult<bool> {
        let mut records = self.repo.load_all().await;
        let Some(position) = records
            .iter()
            .position(|record| record.date_added == date_added)
        else {
            log_debug!("Remove requested for unknown timestamp {}", date_added);
            return Ok(false);
        };

        let removed = records.remove(position);
        self.repo.save_all(&records).await?;
        log_info!("Rating removed: '{}'", removed.name);
        Ok(true)
    }

    /// The most recent submissions, optionally reordered by average.
    pub async fn recent(&self, limit: usize, sort: RecentSort) -> Vec<RatingRecord> {
        let mut records = self.repo.load_all().await;

        match sort {
            RecentSort::Newest => {
                records.sort_by(|a, b| b.date_added.cmp(&a.date_added));
            }
            RecentSort::Highest => {
                records.sort_by(|a, b| b.average.total_cmp(&a.average));
            }
            RecentSort::Lowest => {
                records.sort_by(|a, b| a.average.total_cmp(&b.average));
            }
        }

        records.truncate(limit);
        records
    }
}
