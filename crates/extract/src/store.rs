//! Transient upload storage.
//!
//! Uploaded bytes live on disk only for the duration of one request. The
//! returned [`StoredUpload`] removes its file when dropped, so cleanup
//! holds on every path out of a handler, including early returns on
//! extraction or generation failure.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};
use studyweave_core::error::ExtractError;

static UPLOAD_SEQ: AtomicU64 = AtomicU64::new(0);

/// A directory holding short-lived uploads.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, ExtractError> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|e| ExtractError::Store(e.to_string()))?;
        Ok(Self { dir })
    }

    /// Persist `bytes` under a unique name derived from `suggested_name`.
    pub fn save(&self, bytes: &[u8], suggested_name: &str) -> Result<StoredUpload, ExtractError> {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(0);
        let seq = UPLOAD_SEQ.fetch_add(1, Ordering::Relaxed);
        let name = format!("{nanos}_{seq}_{}", sanitize(suggested_name));
        let path = self.dir.join(name);

        std::fs::write(&path, bytes).map_err(|e| ExtractError::Store(e.to_string()))?;
        Ok(StoredUpload { path })
    }
}

/// Keep filenames shell- and filesystem-safe.
fn sanitize(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.is_empty() {
        "upload".into()
    } else {
        cleaned
    }
}

/// A handle to one stored upload. Removing the file is tied to this
/// value's lifetime.
#[derive(Debug)]
pub struct StoredUpload {
    path: PathBuf,
}

impl StoredUpload {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for StoredUpload {
    fn drop(&mut self) {
        if let Err(e) = std::fs::remove_file(&self.path) {
            // Cleanup failure is logged, never propagated.
            tracing::warn!(path = %self.path.display(), error = %e, "Failed to remove upload");
        }
    }
}
