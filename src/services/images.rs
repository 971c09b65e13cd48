use serde::{Deserialize, Serialize};

use crate::domain::image::{Image, ImageListQuery, NewImage};
use crate::forms::images::UpdateImageForm;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, MAX_ITEMS_PER_PAGE, Paginated};
use crate::repository::{ImageReader, ImageWriter, RepositoryError};
use crate::services::{ServiceError, ServiceResult};
use crate::uploads::{BatchUpload, StagedUpload, UploadErrorDetail, UploadStore};

/// Query parameters accepted by the image list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ImagesQuery {
    /// Page requested by the client (1-based).
    pub page: Option<usize>,
    /// Requested page size.
    pub per_page: Option<usize>,
}

/// Response body for a (possibly partial) upload: the persisted records
/// plus per-file error details for the files that failed.
#[derive(Debug, Serialize)]
pub struct CreatedImages {
    pub successes: Vec<Image>,
    pub errors: Vec<UploadErrorDetail>,
}

/// Lists image records, newest first.
pub fn list_images<R>(repo: &R, query: ImagesQuery) -> ServiceResult<Paginated<Image>>
where
    R: ImageReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let per_page = query
        .per_page
        .unwrap_or(DEFAULT_ITEMS_PER_PAGE)
        .clamp(1, MAX_ITEMS_PER_PAGE);

    let (total, items) = repo.list_images(ImageListQuery::new().paginate(page, per_page))?;

    Ok(Paginated::new(items, page, per_page, total))
}

/// Moves the staged uploads into durable storage and persists a record for
/// every file that made it.
///
/// A partial failure is a success with error details attached; zero moved
/// files is a client-facing [`ServiceError::Upload`].
pub async fn create_images<R>(
    repo: &R,
    store: &UploadStore,
    staged: Vec<StagedUpload>,
) -> ServiceResult<CreatedImages>
where
    R: ImageWriter + ?Sized,
{
    let mut staged = staged;
    let batch = if staged.len() == 1 {
        let result = store.store_one(staged.remove(0)).await?;
        if result.moved {
            BatchUpload {
                successes: vec![result],
                errors: Vec::new(),
            }
        } else {
            BatchUpload {
                successes: Vec::new(),
                errors: result.errors,
            }
        }
    } else {
        store.store_many(staged).await?
    };

    if batch.successes.is_empty() {
        return Err(ServiceError::Upload("no file could be stored".to_string()));
    }

    let mut successes = Vec::with_capacity(batch.successes.len());
    for result in &batch.successes {
        let Some(new_image) = NewImage::from_upload(result) else {
            continue;
        };
        successes.push(repo.create_image(&new_image)?);
    }

    Ok(CreatedImages {
        successes,
        errors: batch.errors,
    })
}

/// Fetches a single image record.
pub fn get_image<R>(repo: &R, id: i32) -> ServiceResult<Image>
where
    R: ImageReader + ?Sized,
{
    repo.get_image_by_id(id)?.ok_or(ServiceError::NotFound)
}

/// Renames an image. Only the client-supplied name is mutable.
pub fn update_image<R>(repo: &R, id: i32, form: UpdateImageForm) -> ServiceResult<Image>
where
    R: ImageWriter + ?Sized,
{
    let updates = form
        .into_update()
        .map_err(|err| ServiceError::Validation(err.to_string()))?;

    repo.update_image(id, &updates).map_err(ServiceError::from)
}

/// Removes an image's stored file and then its record.
///
/// The record is only deleted once the unlink has succeeded, so a storage
/// failure never leaves a record without a file. The reverse is not
/// guaranteed: a record-delete failure after a successful unlink orphans
/// the record.
pub async fn delete_image<R>(repo: &R, store: &UploadStore, id: i32) -> ServiceResult<()>
where
    R: ImageReader + ImageWriter + ?Sized,
{
    let image = repo.get_image_by_id(id)?.ok_or(ServiceError::NotFound)?;

    if let Err(err) = store.remove(&image.path).await {
        log::error!("Failed to remove stored file {}: {err}", image.path);
        return Err(ServiceError::Storage(err.to_string()));
    }

    repo.delete_image(id).map_err(|err| match err {
        RepositoryError::NotFound => ServiceError::NotFound,
        other => ServiceError::Deletion(other.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use mockall::predicate::eq;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::repository::mock::{MockImageReader, MockImageRepository, MockImageWriter};

    fn staged(client_name: &str, subtype: &str) -> StagedUpload {
        let mut temp = NamedTempFile::new().expect("create temp file");
        temp.write_all(b"image-bytes").expect("write temp file");
        StagedUpload {
            temp,
            client_name: client_name.to_string(),
            subtype: subtype.to_string(),
            size: 11,
        }
    }

    fn image(id: i32, path: &str) -> Image {
        let now = chrono::Local::now().naive_utc();
        Image {
            id,
            path: path.to_string(),
            size: 11,
            original_name: "cat.png".to_string(),
            extension: "png".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn create_images_persists_every_moved_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());

        let mut repo = MockImageWriter::new();
        repo.expect_create_image()
            .times(2)
            .returning(|new_image| Ok(image(1, &new_image.path)));

        let created = create_images(&repo, &store, vec![staged("a.png", "png"), staged("b.png", "png")])
            .await
            .expect("uploads should succeed");

        assert_eq!(created.successes.len(), 2);
        assert!(created.errors.is_empty());
    }

    #[tokio::test]
    async fn create_images_fails_when_nothing_moves() {
        let dir = tempfile::tempdir().unwrap();
        // Point the store at a directory that does not exist.
        let store = UploadStore::new(dir.path().join("missing"));

        let mut repo = MockImageWriter::new();
        repo.expect_create_image().never();

        let err = create_images(&repo, &store, vec![staged("a.png", "png")])
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Upload(_)));
    }

    #[tokio::test]
    async fn delete_image_reports_record_delete_failure_after_unlink() {
        let dir = tempfile::tempdir().unwrap();
        let store = UploadStore::new(dir.path());
        let stored = dir.path().join("123-abc.png");
        std::fs::write(&stored, b"image-bytes").unwrap();

        let mut repo = MockImageRepository::new();
        repo.expect_get_image_by_id()
            .with(eq(5))
            .returning(|_| Ok(Some(image(5, "123-abc.png"))));
        repo.expect_delete_image().with(eq(5)).returning(|_| {
            Err(RepositoryError::Database(
                diesel::result::Error::BrokenTransactionManager,
            ))
        });

        let err = delete_image(&repo, &store, 5).await.unwrap_err();
        assert!(matches!(err, ServiceError::Deletion(_)));

        // The unlink already happened, so the surviving record is orphaned.
        assert!(!stored.exists());
    }

    #[test]
    fn get_image_maps_missing_records_to_not_found() {
        let mut repo = MockImageReader::new();
        repo.expect_get_image_by_id()
            .with(eq(7))
            .returning(|_| Ok(None));

        let err = get_image(&repo, 7).unwrap_err();
        assert!(matches!(err, ServiceError::NotFound));
    }
}
