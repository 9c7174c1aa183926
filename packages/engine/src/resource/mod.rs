//! Loading documents from readers and files

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{SiftError, SiftResult};

/// Read an entire input as UTF-8 text
///
/// # Errors
/// Read failures and invalid UTF-8 are stream errors.
pub fn read_to_string<R: Read>(mut input: R) -> SiftResult<String> {
    let mut bytes = Vec::with_capacity(4096);
    input.read_to_end(&mut bytes)?;
    Ok(String::from_utf8(bytes)?)
}

/// Source of named documents
pub trait ResourceReader: Send + Sync {
    /// # Errors
    /// Returns a resource error when `name` cannot be opened or read.
    fn read_resource(&self, name: &str) -> SiftResult<String>;
}

/// Reads resources as files below a root directory
#[derive(Debug, Clone)]
pub struct FileResourceReader {
    root: PathBuf,
}

impl FileResourceReader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, name: &str) -> PathBuf {
        self.root.join(name.trim_start_matches('/'))
    }
}

impl ResourceReader for FileResourceReader {
    fn read_resource(&self, name: &str) -> SiftResult<String> {
        let path = self.resolve(name);
        log::debug!("Loading resource {} from {}", name, path.display());

        let file = File::open(&path).map_err(|e| {
            log::warn!("Resource {} not readable at {}: {}", name, path.display(), e);
            SiftError::resource(name, e)
        })?;
        let mut text = String::new();
        std::io::BufReader::new(file)
            .read_to_string(&mut text)
            .map_err(|e| SiftError::resource(name, e))?;
        Ok(text)
    }
}
