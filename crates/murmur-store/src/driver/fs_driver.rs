// murmur-core-client/murmur-store
//
// Copyright: 2025, Murmur Team <dev@murmur.im>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::store::StoreError;

use super::Driver;

/// Driver that keeps each collection in a JSON file below a base directory.
pub struct FsDriver {
    path: PathBuf,
}

impl FsDriver {
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        fs::create_dir_all(&path)?;
        Ok(Self { path })
    }

    fn collection_path(&self, collection: &str) -> PathBuf {
        self.path.join(format!("{collection}.json"))
    }
}

impl Driver for FsDriver {
    fn load(&self, collection: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.collection_path(collection)) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, collection: &str, data: &[u8]) -> Result<(), StoreError> {
        // Write to a sibling file first so a crash never leaves a truncated
        // collection behind.
        let path = self.collection_path(collection);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, data)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn truncate(&self, collection: &str) -> Result<(), StoreError> {
        match fs::remove_file(self.collection_path(collection)) {
            Ok(_) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}
