use std::path::{Path, PathBuf};

use chrono::Utc;
use futures_util::future::join_all;
use serde::Serialize;
use tempfile::NamedTempFile;

pub mod random;

pub use random::{DEFAULT_RANDOM_LEN, RandomSourceError, random_alphanumeric};

/// Length of the random fragment in stored filenames.
const STORED_NAME_RANDOM_LEN: usize = 30;

/// An uploaded file sitting in temporary storage, waiting to be moved.
///
/// MIME category and size limits are enforced by the HTTP boundary before
/// a `StagedUpload` is built; the store does not re-validate them.
#[derive(Debug)]
pub struct StagedUpload {
    /// Handle to the staging copy on disk.
    pub temp: NamedTempFile,
    /// Filename supplied by the client.
    pub client_name: String,
    /// MIME subtype of the content (for example `png`).
    pub subtype: String,
    /// File size in bytes.
    pub size: i64,
}

/// Per-file error detail reported alongside upload successes.
#[derive(Debug, Clone, Serialize)]
pub struct UploadErrorDetail {
    /// Client-supplied filename of the failing file.
    pub client_name: String,
    /// Human-readable reason for the failure.
    pub message: String,
}

/// Outcome of moving one uploaded file into durable storage.
///
/// A failed move is reported here, never raised as an error: callers must
/// check [`moved`](Self::moved) explicitly.
#[derive(Debug)]
pub struct UploadResult {
    /// Stored filename under the upload root, set when the move succeeded.
    pub file_name: Option<String>,
    /// File size in bytes.
    pub size: i64,
    /// Client-supplied filename.
    pub client_name: String,
    /// MIME subtype.
    pub subtype: String,
    /// Whether the file reached durable storage.
    pub moved: bool,
    /// Error details when the move failed.
    pub errors: Vec<UploadErrorDetail>,
}

/// Aggregated outcome of a multi-file move.
#[derive(Debug, Default)]
pub struct BatchUpload {
    /// Results for the files that reached durable storage.
    pub successes: Vec<UploadResult>,
    /// Error details for the files that did not.
    pub errors: Vec<UploadErrorDetail>,
}

/// Moves staged uploads into a durable directory under collision-resistant
/// names, and removes stored files on image deletion.
#[derive(Debug, Clone)]
pub struct UploadStore {
    root: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at `root`. The directory must already exist.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory this store moves files into.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Move a single staged upload into the root under a
    /// `<unix-ms>-<random>.<subtype>` name.
    ///
    /// A move failure is an expected outcome and is reported on the result;
    /// only a random-source failure is returned as `Err`.
    pub async fn store_one(&self, upload: StagedUpload) -> Result<UploadResult, RandomSourceError> {
        let random = random_alphanumeric(STORED_NAME_RANDOM_LEN)?;
        let file_name = format!(
            "{}-{}.{}",
            Utc::now().timestamp_millis(),
            random,
            upload.subtype
        );
        let destination = self.root.join(&file_name);

        let StagedUpload {
            temp,
            client_name,
            subtype,
            size,
        } = upload;

        match move_into_place(temp.path(), &destination).await {
            Ok(()) => Ok(UploadResult {
                file_name: Some(file_name),
                size,
                client_name,
                subtype,
                moved: true,
                errors: Vec::new(),
            }),
            Err(err) => Ok(UploadResult {
                file_name: None,
                size,
                client_name: client_name.clone(),
                subtype,
                moved: false,
                errors: vec![UploadErrorDetail {
                    client_name,
                    message: err.to_string(),
                }],
            }),
        }
    }

    /// Move several staged uploads concurrently, each under its own name.
    ///
    /// One file's failure never aborts or rolls back a sibling's successful
    /// move; completion order is unconstrained.
    pub async fn store_many(
        &self,
        uploads: Vec<StagedUpload>,
    ) -> Result<BatchUpload, RandomSourceError> {
        let results = join_all(uploads.into_iter().map(|upload| self.store_one(upload))).await;

        let mut batch = BatchUpload::default();
        for result in results {
            let result = result?;
            if result.moved {
                batch.successes.push(result);
            } else {
                batch.errors.extend(result.errors);
            }
        }

        Ok(batch)
    }

    /// Unlink a stored file from the root.
    pub async fn remove(&self, stored_name: &str) -> std::io::Result<()> {
        tokio::fs::remove_file(self.root.join(stored_name)).await
    }
}

/// Rename into place, falling back to a copy when the staging directory
/// lives on a different filesystem. The staging copy is removed with the
/// `NamedTempFile` handle.
async fn move_into_place(source: &Path, destination: &Path) -> std::io::Result<()> {
    if tokio::fs::rename(source, destination).await.is_ok() {
        return Ok(());
    }
    tokio::fs::copy(source, destination).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn staged(content: &[u8], client_name: &str, subtype: &str) -> StagedUpload {
        let mut temp = NamedTempFile::new().expect("create temp file");
        temp.write_all(content).expect("write temp file");
        StagedUpload {
            temp,
            client_name: client_name.to_string(),
            subtype: subtype.to_string(),
            size: content.len() as i64,
        }
    }

    #[tokio::test]
    async fn store_one_moves_and_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let result = store.store_one(staged(b"png-bytes", "cat.png", "png")).await.unwrap();

        assert!(result.moved);
        assert!(result.errors.is_empty());
        let file_name = result.file_name.expect("stored name");
        assert!(file_name.ends_with(".png"));
        let stored = std::fs::read(dir.path().join(&file_name)).unwrap();
        assert_eq!(stored, b"png-bytes");
    }

    #[tokio::test]
    async fn store_one_reports_a_failed_move() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path().join("missing-subdir"));

        let result = store.store_one(staged(b"data", "cat.png", "png")).await.unwrap();

        assert!(!result.moved);
        assert!(result.file_name.is_none());
        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.errors[0].client_name, "cat.png");
    }

    #[tokio::test]
    async fn store_many_keeps_successes_when_one_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let good_one = staged(b"one", "one.png", "png");
        let bad = staged(b"two", "two.png", "png");
        let good_two = staged(b"three", "three.jpg", "jpeg");
        // Pull the staging copy out from under the move.
        std::fs::remove_file(bad.temp.path()).unwrap();

        let batch = store.store_many(vec![good_one, bad, good_two]).await.unwrap();

        assert_eq!(batch.successes.len(), 2);
        assert_eq!(batch.errors.len(), 1);
        assert_eq!(batch.errors[0].client_name, "two.png");
        for result in &batch.successes {
            let file_name = result.file_name.as_deref().unwrap();
            assert!(dir.path().join(file_name).exists());
        }
    }

    #[tokio::test]
    async fn remove_unlinks_a_stored_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let result = store.store_one(staged(b"data", "cat.png", "png")).await.unwrap();
        let file_name = result.file_name.unwrap();

        store.remove(&file_name).await.unwrap();
        assert!(!dir.path().join(&file_name).exists());

        let err = store.remove(&file_name).await.unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }
}
