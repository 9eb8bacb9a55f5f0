// murmur-core-client/murmur-store
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::driver::Driver;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Snapshot store for named collections. Values are serialized as JSON and
/// handed to the driver as a whole; the store performs no caching, callers
/// keep their own in-memory state and treat `put` as a write-through.
#[derive(Clone)]
pub struct Store {
    driver: Arc<dyn Driver>,
}

impl Store {
    pub fn open(driver: impl Driver + 'static) -> Self {
        Self {
            driver: Arc::new(driver),
        }
    }

    pub fn get<T: DeserializeOwned>(&self, collection: &str) -> Result<Option<T>, StoreError> {
        let Some(data) = self.driver.load(collection)? else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_slice(&data)?))
    }

    pub fn put<T: Serialize>(&self, collection: &str, value: &T) -> Result<(), StoreError> {
        let data = serde_json::to_vec(value)?;
        self.driver.save(collection, &data)
    }

    pub fn truncate(&self, collection: &str) -> Result<(), StoreError> {
        self.driver.truncate(collection)
    }
}
