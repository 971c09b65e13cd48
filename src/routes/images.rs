use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, delete, get, post, route, web};

use crate::forms::images::{UpdateImageForm, UploadImagesForm};
use crate::repository::DieselRepository;
use crate::routes::ErrorBody;
use crate::services::{ServiceError, images};
use crate::uploads::UploadStore;

#[get("/images")]
pub async fn list_images(
    params: web::Query<images::ImagesQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match images::list_images(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => {
            log::error!("Failed to list images: {err}");
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Could not list images at the moment"))
        }
    }
}

#[post("/images")]
pub async fn upload_images(
    MultipartForm(form): MultipartForm<UploadImagesForm>,
    repo: web::Data<DieselRepository>,
    store: web::Data<UploadStore>,
) -> impl Responder {
    let staged = match form.into_staged() {
        Ok(staged) => staged,
        Err(err) => return HttpResponse::BadRequest().json(ErrorBody::new(err.to_string())),
    };

    match images::create_images(repo.get_ref(), store.get_ref(), staged).await {
        Ok(created) => HttpResponse::Created().json(created),
        Err(ServiceError::Upload(_)) => HttpResponse::BadRequest()
            .json(ErrorBody::new("Could not process this image at the moment")),
        Err(err) => {
            log::error!("Failed to store images: {err}");
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Could not process your request"))
        }
    }
}

#[get("/images/{id}")]
pub async fn get_image(path: web::Path<i32>, repo: web::Data<DieselRepository>) -> impl Responder {
    match images::get_image(repo.get_ref(), path.into_inner()) {
        Ok(image) => HttpResponse::Ok().json(image),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorBody::new("Image not found"))
        }
        Err(err) => {
            log::error!("Failed to fetch image: {err}");
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Could not fetch the image at the moment"))
        }
    }
}

#[route("/images/{id}", method = "PUT", method = "PATCH")]
pub async fn update_image(
    path: web::Path<i32>,
    payload: web::Json<UpdateImageForm>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match images::update_image(repo.get_ref(), path.into_inner(), payload.into_inner()) {
        Ok(image) => HttpResponse::Ok().json(image),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorBody::new("Image not found"))
        }
        Err(ServiceError::Validation(_)) => HttpResponse::BadRequest()
            .json(ErrorBody::new("Could not update this image at the moment")),
        Err(err) => {
            log::error!("Failed to update image: {err}");
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Could not update this image at the moment"))
        }
    }
}

#[delete("/images/{id}")]
pub async fn delete_image(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    store: web::Data<UploadStore>,
) -> impl Responder {
    match images::delete_image(repo.get_ref(), store.get_ref(), path.into_inner()).await {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorBody::new("Image not found"))
        }
        Err(err) => {
            log::error!("Failed to delete image: {err}");
            HttpResponse::BadRequest()
                .json(ErrorBody::new("Could not delete the image at the moment"))
        }
    }
}
