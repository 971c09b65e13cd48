use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::image::UpdateImage;
use crate::uploads::StagedUpload;

/// Maximum size accepted per uploaded file.
pub const MAX_IMAGE_BYTES: usize = 2 * 1024 * 1024;

/// Maximum allowed length for a client-supplied filename.
const ORIGINAL_NAME_MAX_LEN: usize = 255;
const ORIGINAL_NAME_MAX_LEN_VALIDATOR: u64 = ORIGINAL_NAME_MAX_LEN as u64;

/// Errors raised while screening an upload payload, before any file is
/// moved.
#[derive(Debug, Error)]
pub enum UploadImagesFormError {
    /// The `images` field carried no files at all.
    #[error("no files were attached to the `images` field")]
    Empty,
    /// A file is not of the `image/*` MIME category.
    #[error("`{name}` is not an image")]
    NotAnImage { name: String },
    /// A file exceeds [`MAX_IMAGE_BYTES`].
    #[error("`{name}` exceeds the {MAX_IMAGE_BYTES} byte limit")]
    TooLarge { name: String },
}

#[derive(MultipartForm)]
/// Multipart payload for the image upload endpoint. The `images` field
/// accepts one or many files.
pub struct UploadImagesForm {
    #[multipart(rename = "images", limit = "2MB")]
    pub images: Vec<TempFile>,
}

impl UploadImagesForm {
    /// Screen every file and hand the staged uploads to the store layer.
    ///
    /// MIME category and size are checked here, at the HTTP boundary; the
    /// store trusts its input.
    pub fn into_staged(self) -> Result<Vec<StagedUpload>, UploadImagesFormError> {
        if self.images.is_empty() {
            return Err(UploadImagesFormError::Empty);
        }

        self.images.into_iter().map(stage_file).collect()
    }
}

fn stage_file(file: TempFile) -> Result<StagedUpload, UploadImagesFormError> {
    let client_name = file
        .file_name
        .clone()
        .unwrap_or_else(|| "unnamed".to_string());

    let content_type = file
        .content_type
        .as_ref()
        .ok_or_else(|| UploadImagesFormError::NotAnImage {
            name: client_name.clone(),
        })?;

    if content_type.type_() != mime::IMAGE {
        return Err(UploadImagesFormError::NotAnImage { name: client_name });
    }

    if file.size > MAX_IMAGE_BYTES {
        return Err(UploadImagesFormError::TooLarge { name: client_name });
    }

    Ok(StagedUpload {
        subtype: content_type.subtype().to_string(),
        size: file.size as i64,
        temp: file.file,
        client_name,
    })
}

/// JSON payload for renaming an image. Only `original_name` is mutable.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateImageForm {
    #[validate(length(min = 1, max = ORIGINAL_NAME_MAX_LEN_VALIDATOR))]
    pub original_name: String,
}

impl UpdateImageForm {
    /// Validate the payload into a domain patch.
    pub fn into_update(self) -> Result<UpdateImage, ValidationErrors> {
        self.validate()?;
        Ok(UpdateImage::new(self.original_name))
    }
}
