use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;
use crate::uploads::UploadResult;

/// Domain representation of a stored image's metadata.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Image {
    /// Unique identifier of the image record.
    pub id: i32,
    /// Filename under the upload root. Unique and never reused.
    pub path: String,
    /// File size in bytes.
    pub size: i64,
    /// Filename supplied by the client at upload time.
    pub original_name: String,
    /// MIME subtype of the uploaded content (for example `png`).
    pub extension: String,
    /// Timestamp for when the record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the record.
    pub updated_at: NaiveDateTime,
}

/// Payload required to insert a new image record after a successful move.
#[derive(Debug, Clone)]
pub struct NewImage {
    /// Stored filename under the upload root.
    pub path: String,
    /// File size in bytes.
    pub size: i64,
    /// Client-supplied filename.
    pub original_name: String,
    /// MIME subtype.
    pub extension: String,
}

impl NewImage {
    /// Build an insert payload from a moved upload. Returns `None` when the
    /// upload was not moved and therefore has no stored filename.
    pub fn from_upload(result: &UploadResult) -> Option<Self> {
        let path = result.file_name.clone()?;
        Some(Self {
            path,
            size: result.size,
            original_name: result.client_name.clone(),
            extension: result.subtype.clone(),
        })
    }
}

/// Patch applied when updating an image record. Only the client-supplied
/// name is mutable.
#[derive(Debug, Clone)]
pub struct UpdateImage {
    /// Replacement for the client-supplied filename.
    pub original_name: String,
    /// Timestamp captured when the patch was created.
    pub updated_at: NaiveDateTime,
}

impl UpdateImage {
    /// Create a patch renaming the image to `original_name`.
    pub fn new(original_name: impl Into<String>) -> Self {
        Self {
            original_name: original_name.into(),
            updated_at: chrono::Local::now().naive_utc(),
        }
    }
}

/// Query definition used to list images.
#[derive(Debug, Clone, Default)]
pub struct ImageListQuery {
    /// Optional pagination options applied to the query.
    pub pagination: Option<Pagination>,
}

impl ImageListQuery {
    /// Construct a query that targets all images, newest first.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply pagination to the query with the given page number and page size.
    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
