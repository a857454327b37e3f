//! Page content persistence
//!
//! The engine treats stored content as an opaque structured blob beyond the
//! `{blocks: [...]}` schema. [`PageStore`] is the seam a host application
//! implements against its own backend; [`JsonFileStore`] is a concrete store
//! keeping one JSON file per page under a root directory.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::{ContentError, PageContent};

/// Persistence seam for page content
///
/// A failed save returns `Err`; callers must not advance editing state as if
/// the content were persisted.
pub trait PageStore {
    /// Load the content blob for a page
    fn load(&self, page_id: &str) -> Result<PageContent, StoreError>;

    /// Persist the content blob for a page
    fn save(&self, page_id: &str, content: &PageContent) -> Result<(), StoreError>;
}

/// Store errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No stored content for the page
    #[error("Page not found: {0}")]
    NotFound(String),

    /// Stored blob does not deserialize to `{blocks: [...]}`
    #[error("Stored content for page {page_id} is malformed: {source}")]
    Malformed {
        page_id: String,
        source: ContentError,
    },

    /// Underlying filesystem failure
    #[error("IO error for page {page_id}: {source}")]
    Io {
        page_id: String,
        source: std::io::Error,
    },
}

/// File-backed store: one pretty-printed JSON file per page id
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Create a store rooted at `root`, creating the directory if needed
    pub fn new(root: impl AsRef<Path>) -> Result<Self, std::io::Error> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, page_id: &str) -> PathBuf {
        self.root.join(format!("{}.json", page_id))
    }
}

impl PageStore for JsonFileStore {
    fn load(&self, page_id: &str) -> Result<PageContent, StoreError> {
        let path = self.path_for(page_id);
        if !path.exists() {
            return Err(StoreError::NotFound(page_id.to_string()));
        }
        let text = fs::read_to_string(&path).map_err(|source| StoreError::Io {
            page_id: page_id.to_string(),
            source,
        })?;
        PageContent::from_json_str(&text).map_err(|source| StoreError::Malformed {
            page_id: page_id.to_string(),
            source,
        })
    }

    fn save(&self, page_id: &str, content: &PageContent) -> Result<(), StoreError> {
        let path = self.path_for(page_id);
        let io_err = |source| StoreError::Io {
            page_id: page_id.to_string(),
            source,
        };

        // Write to a sibling temp file and rename so a failed save never
        // leaves a truncated blob behind.
        let tmp = self.root.join(format!("{}.json.tmp", page_id));
        let mut file = fs::File::create(&tmp).map_err(io_err)?;
        file.write_all(content.to_json_string().as_bytes())
            .map_err(io_err)?;
        file.sync_all().map_err(io_err)?;
        fs::rename(&tmp, &path).map_err(io_err)?;
        debug!(page_id, blocks = content.len(), "saved page content");
        Ok(())
    }
}
