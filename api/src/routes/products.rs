//! Product CRUD handlers

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::products::{CreateProductRequest, UpdateProductRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use ch_core::domain::entities::product::Product;
use ch_core::errors::DomainError;
use ch_core::repositories::{
    NotificationRepository, OrderRepository, PaymentRepository, ProductRepository, UserRepository,
};

/// Handler for GET /api/v1/products
pub async fn list_products<U, P, O, Y, N>(state: web::Data<AppState<U, P, O, Y, N>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
    Y: PaymentRepository + 'static,
    N: NotificationRepository + 'static,
{
    match state.product_repository.find_all().await {
        Ok(products) => HttpResponse::Ok().json(products),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/products/{id}
///
/// This read doubles as the availability check consumed by the order
/// service's dependency verifier: status 200 means available.
pub async fn get_product<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
    Y: PaymentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let id = path.into_inner();

    match state.product_repository.find_by_id(&id).await {
        Ok(Some(product)) => HttpResponse::Ok().json(product),
        Ok(None) => handle_domain_error(DomainError::NotFound {
            resource: format!("product {}", id),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/products
pub async fn create_product<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    request: web::Json<CreateProductRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
    Y: PaymentRepository + 'static,
    N: NotificationRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let request = request.into_inner();
    let product = Product {
        id: request.id,
        name: request.name,
        category: request.category,
        price: request.price,
    };

    match state.product_repository.create(product).await {
        Ok(product) => HttpResponse::Created().json(product),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/products/{id}
pub async fn update_product<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    path: web::Path<String>,
    request: web::Json<UpdateProductRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
    Y: PaymentRepository + 'static,
    N: NotificationRepository + 'static,
{
    if let Err(errors) = request.validate() {
        return handle_validation_errors(errors);
    }

    let request = request.into_inner();
    let product = Product {
        id: path.into_inner(),
        name: request.name,
        category: request.category,
        price: request.price,
    };

    match state.product_repository.update(product).await {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/products/{id}
pub async fn delete_product<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    path: web::Path<String>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
    Y: PaymentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let id = path.into_inner();

    match state.product_repository.delete(&id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => handle_domain_error(DomainError::NotFound {
            resource: format!("product {}", id),
        }),
        Err(error) => handle_domain_error(error),
    }
}
