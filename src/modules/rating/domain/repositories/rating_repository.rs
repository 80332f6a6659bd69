use async_trait::async_trait;

use crate::modules::rating::domain::entities::RatingRecord;
use crate::shared::errors::AppResult;

/// The storage collaborator: full-collection load and replace.
///
/// `load_all` fails soft: a missing or unreadable store yields an empty
/// collection, never an error. `save_all` replaces the persisted collection
/// wholesale; there is no partial or append-only write.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RatingRepository: Send + Sync {
    async fn load_all(&self) -> Vec<RatingRecord>;
    async fn save_all(&self, records: &[RatingRecord]) -> AppResult<()>;
}
