use std::sync::Arc;

use crate::modules::rating::domain::{entities::RatingRecord, repositories::RatingRepository};
use crate::shared::errors::{AppError, AppResult};
use crate::{log_info, log_warn};

/// Bulk backup and restore of the whole collection as a UTF-8 JSON array.
pub struct DataTransferService {
    repo: Arc<dyn RatingRepository>,
}

impl DataTransferService {
    pub fn new(repo: Arc<dyn RatingRepository>) -> Self {
        Self { repo }
    }

    /// Serialize the current collection for download.
    pub async fn export_json(&self) -> AppResult<String> {
        let records = self.repo.load_all().await;
        let payload = serde_json::to_string_pretty(&records)?;
        log_info!("Exported {} record(s)", records.len());
        Ok(payload)
    }

    /// Replace the persisted collection with a previously exported payload.
    ///
    /// The payload must be a JSON array of records; anything else is rejected
    /// with a user-visible message and the existing collection stays as it
    /// was. There is no partial import.
    pub async fn import_json(&self, payload: &str) -> AppResult<usize> {
        let value: serde_json::Value = serde_json::from_str(payload).map_err(|err| {
            log_warn!("Import rejected, payload is not JSON: {}", err);
            AppError::ImportError(format!("Payload is not valid JSON: {}", err))
        })?;

        if !value.is_array() {
            log_warn!("Import rejected, top-level value is not an array");
            return Err(AppError::ImportError(
                "Imported data must be a JSON array of ratings".to_string(),
            ));
        }

        let records: Vec<RatingRecord> = serde_json::from_value(value).map_err(|err| {
            log_warn!("Import rejected, records are malformed: {}", err);
            AppError::ImportError(format!("Imported records are malformed: {}", err))
        })?;

        self.repo.save_all(&records).await?;
        log_info!("Imported {} record(s), previous collection replaced", records.len());
        Ok(records.len())
    }

    /// Number of currently persisted records, for the manage-data summary.
    pub async fn record_count(&self) -> usize {
        self.repo.load_all().await.len()
    }
}
