//! Mapping repository for persisting and reusing mapping documents.
//!
//! A mapping document is written once, as pretty-printed JSON, and then
//! read back unchanged on every later run. Regenerating a mapping means
//! deleting the old file first; [`MappingRepository::save`] never
//! overwrites.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use salary_model::MappingDocument;

use crate::error::{MappingError, Result};

/// Conventional mapping file name, looked up in the working directory.
pub const DEFAULT_MAPPING_FILE: &str = "template.json";

/// A single mapping document on disk.
#[derive(Debug, Clone)]
pub struct MappingRepository {
    path: PathBuf,
}

impl MappingRepository {
    /// Repository backed by an explicit file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Repository at [`DEFAULT_MAPPING_FILE`] inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::new(dir.join(DEFAULT_MAPPING_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether a mapping document is present.
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Write `document` as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`MappingError::AlreadyExists`] if the file is already there.
    pub fn save(&self, document: &MappingDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document).map_err(MappingError::Serialize)?;
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
            .map_err(|source| {
                if source.kind() == ErrorKind::AlreadyExists {
                    MappingError::AlreadyExists {
                        path: self.path.clone(),
                    }
                } else {
                    MappingError::Write {
                        path: self.path.clone(),
                        source,
                    }
                }
            })?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.write_all(b"\n"))
            .map_err(|source| MappingError::Write {
                path: self.path.clone(),
                source,
            })?;
        info!(path = %self.path.display(), entity = %document.entity_name, "mapping saved");
        Ok(())
    }

    /// Read the mapping document.
    pub fn load(&self) -> Result<MappingDocument> {
        let contents = fs::read_to_string(&self.path).map_err(|source| MappingError::Read {
            path: self.path.clone(),
            source,
        })?;
        let document: MappingDocument =
            serde_json::from_str(&contents).map_err(|source| MappingError::Parse {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), entity = %document.entity_name, "mapping loaded");
        Ok(document)
    }
}
