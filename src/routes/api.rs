use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::services::ServiceError;
use crate::services::api::api_v1_products as api_v1_products_service;

#[get("/v1/products")]
pub async fn api_v1_products(repo: web::Data<DieselRepository>) -> impl Responder {
    match api_v1_products_service(repo.get_ref()) {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ServiceError::Internal) => HttpResponse::InternalServerError().finish(),
    }
}
