use actix_web::{HttpResponse, Responder, get, post, web};
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages};
use tera::Tera;

use crate::cache::ListingCache;
use crate::forms::products::{
    AddProductForm, AddProductFormPayload, UpdateProductForm, UpdateProductFormPayload,
};
use crate::repository::DieselRepository;
use crate::routes::{base_context, redirect, render_template};
use crate::services::ServiceError;
use crate::services::products::{
    create_product as create_product_service, delete_product as delete_product_service,
    show_products as show_products_service, update_product as update_product_service,
};

#[get("/")]
pub async fn show_products(
    flash_messages: IncomingFlashMessages,
    repo: web::Data<DieselRepository>,
    cache: web::Data<ListingCache>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match show_products_service(repo.get_ref(), cache.get_ref()) {
        Ok(products) => {
            let mut context = base_context(&flash_messages, "products");
            context.insert("products", &products);
            render_template(&tera, "products/index.html", &context)
        }
        Err(ServiceError::NotFound) => HttpResponse::NotFound().finish(),
        Err(ServiceError::Internal) => HttpResponse::InternalServerError().finish(),
    }
}

#[post("/products")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    cache: web::Data<ListingCache>,
    web::Form(form): web::Form<AddProductForm>,
) -> impl Responder {
    let payload: AddProductFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/");
        }
    };

    match create_product_service(payload, repo.get_ref(), cache.get_ref()) {
        Ok(true) => FlashMessage::success("Product added.").send(),
        Ok(false) => FlashMessage::error("Failed to create product.").send(),
        Err(ServiceError::NotFound) => FlashMessage::error("Product not found.").send(),
        Err(ServiceError::Internal) => return HttpResponse::InternalServerError().finish(),
    }

    redirect("/")
}

#[post("/products/{product_id}/update")]
pub async fn update_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    cache: web::Data<ListingCache>,
    web::Form(form): web::Form<UpdateProductForm>,
) -> impl Responder {
    let payload: UpdateProductFormPayload = match form.try_into() {
        Ok(payload) => payload,
        Err(e) => {
            FlashMessage::error(e.to_string()).send();
            return redirect("/");
        }
    };

    match update_product_service(
        product_id.into_inner(),
        payload,
        repo.get_ref(),
        cache.get_ref(),
    ) {
        Ok(true) => FlashMessage::success("Product updated.").send(),
        Ok(false) => FlashMessage::error("Failed to update product.").send(),
        Err(ServiceError::NotFound) => FlashMessage::error("Product not found.").send(),
        Err(ServiceError::Internal) => return HttpResponse::InternalServerError().finish(),
    }

    redirect("/")
}

#[post("/products/{product_id}/delete")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    cache: web::Data<ListingCache>,
) -> impl Responder {
    match delete_product_service(product_id.into_inner(), repo.get_ref(), cache.get_ref()) {
        Ok(true) => FlashMessage::success("Product deleted.").send(),
        Ok(false) => FlashMessage::error("Failed to delete product.").send(),
        Err(ServiceError::NotFound) => FlashMessage::error("Product not found.").send(),
        Err(ServiceError::Internal) => return HttpResponse::InternalServerError().finish(),
    }

    redirect("/")
}
