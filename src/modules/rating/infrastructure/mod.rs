pub mod persistence;

pub use persistence::{InMemoryRatingRepository, JsonStoreRepository, StorageConfig};
