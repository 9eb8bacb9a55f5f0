// murmur-core-client/murmur-store
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use crate::driver::{Driver, FsDriver, MemoryDriver, PlatformDriver};
pub use crate::store::{Store, StoreError};
