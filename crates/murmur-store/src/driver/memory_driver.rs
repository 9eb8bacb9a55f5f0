// murmur-core-client/murmur-store
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::store::StoreError;

use super::Driver;

/// Non-persistent driver. Collections live for the lifetime of the process.
#[derive(Default)]
pub struct MemoryDriver {
    collections: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryDriver {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Driver for MemoryDriver {
    fn load(&self, collection: &str) -> Result<Option<Vec<u8>>, StoreError> {
        Ok(self.collections.read().get(collection).cloned())
    }

    fn save(&self, collection: &str, data: &[u8]) -> Result<(), StoreError> {
        self.collections
            .write()
            .insert(collection.to_string(), data.to_vec());
        Ok(())
    }

    fn truncate(&self, collection: &str) -> Result<(), StoreError> {
        self.collections.write().remove(collection);
        Ok(())
    }
}
