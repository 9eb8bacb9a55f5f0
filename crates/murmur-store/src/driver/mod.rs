// murmur-core-client/murmur-store
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

mod fs_driver;
mod memory_driver;

pub use fs_driver::FsDriver;
pub use memory_driver::MemoryDriver;

use crate::store::StoreError;

/// The default driver for the platform the client runs on.
pub type PlatformDriver = FsDriver;

/// Raw storage backend for named collections. Each collection is an opaque
/// snapshot; partial updates are not supported.
pub trait Driver: Send + Sync {
    fn load(&self, collection: &str) -> Result<Option<Vec<u8>>, StoreError>;
    fn save(&self, collection: &str, data: &[u8]) -> Result<(), StoreError>;
    fn truncate(&self, collection: &str) -> Result<(), StoreError>;
}
