use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tokio::sync::RwLock;

use crate::modules::rating::domain::{entities::RatingRecord, repositories::RatingRepository};
use crate::shared::errors::AppResult;
use crate::{log_debug, log_warn};

const DATA_FILE_ENV: &str = "ANIMESCORE_DATA_FILE";
const DEFAULT_DATA_FILE: &str = "animescore-data.json";

/// Location of the on-disk store.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub path: PathBuf,
}

impl StorageConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let path = std::env::var(DATA_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));
        Self { path }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }
}

/// File-backed storage collaborator: one UTF-8 JSON array of records,
/// rewritten in full on every mutation.
pub struct JsonStoreRepository {
    path: PathBuf,
}

impl JsonStoreRepository {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.path)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RatingRepository for JsonStoreRepository {
    async fn load_all(&self) -> Vec<RatingRecord> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(err) => {
                log_debug!(
                    "No readable store at {} ({}), starting empty",
                    self.path.display(),
                    err
                );
                return Vec::new();
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(records) => records,
            Err(err) => {
                log_warn!(
                    "Stored payload at {} is malformed ({}), substituting an empty collection",
                    self.path.display(),
                    err
                );
                Vec::new()
            }
        }
    }

    async fn save_all(&self, records: &[RatingRecord]) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        let payload = serde_json::to_vec_pretty(records)?;
        tokio::fs::write(&self.path, payload).await?;
        log_debug!(
            "Persisted {} record(s) to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory storage collaborator for tests and embedding.
#[derive(Default)]
pub struct InMemoryRatingRepository {
    records: RwLock<Vec<RatingRecord>>,
}

impl InMemoryRatingRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(records: Vec<RatingRecord>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }
}

#[async_trait]
impl RatingRepository for InMemoryRatingRepository {
    async fn load_all(&self) -> Vec<RatingRecord> {
        self.records.read().await.clone()
    }

    async fn save_all(&self, records: &[RatingRecord]) -> AppResult<()> {
        *self.records.write().await = records.to_vec();
        Ok(())
    }
}
