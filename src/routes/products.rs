use actix_web::{HttpResponse, Responder, delete, get, post, put, web};

use crate::forms::products::ProductPayload;
use crate::repository::DieselRepository;
use crate::routes::ErrorBody;
use crate::services::{ServiceError, products};

#[get("/products")]
pub async fn list_products(
    params: web::Query<products::ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::list_products(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => {
            log::error!("Failed to list products: {err}");
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Could not list products at the moment"))
        }
    }
}

#[post("/products")]
pub async fn create_product(
    payload: web::Json<ProductPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), payload.into_inner()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(ServiceError::Validation(_)) => HttpResponse::BadRequest()
            .json(ErrorBody::new("Could not create the product at the moment")),
        Err(err) => {
            log::error!("Failed to create product: {err}");
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Could not create the product at the moment"))
        }
    }
}

#[get("/products/{id}")]
pub async fn get_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::get_product(repo.get_ref(), path.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorBody::new("Product not found"))
        }
        Err(err) => {
            log::error!("Failed to fetch product: {err}");
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Could not fetch the product at the moment"))
        }
    }
}

#[put("/products/{id}")]
pub async fn update_product(
    path: web::Path<i32>,
    payload: web::Json<ProductPayload>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::update_product(repo.get_ref(), path.into_inner(), payload.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorBody::new("Product not found"))
        }
        Err(ServiceError::Validation(_)) => {
            HttpResponse::BadRequest().json(ErrorBody::new("Could not update the product"))
        }
        Err(err) => {
            log::error!("Failed to update product: {err}");
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Could not update the product"))
        }
    }
}

#[delete("/products/{id}")]
pub async fn delete_product(
    path: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::delete_product(repo.get_ref(), path.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(ServiceError::NotFound) => {
            HttpResponse::NotFound().json(ErrorBody::new("Product not found"))
        }
        Err(err) => {
            log::error!("Failed to delete product: {err}");
            HttpResponse::InternalServerError()
                .json(ErrorBody::new("Could not delete this product"))
        }
    }
}
