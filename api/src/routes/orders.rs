//! Order handlers
//!
//! Creation goes through the order service, which verifies the product
//! reference against the product service before persisting. The caller's
//! token travels with the verification reads.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::orders::{CreateOrderRequest, UpdateOrderRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use ch_core::domain::entities::order::{Order, OrderStatus};
use ch_core::errors::DomainError;
use ch_core::repositories::{
    NotificationRepository, OrderRepository, PaymentRepository, ProductRepository, UserRepository,
};
use ch_core::services::orders::NewOrder;

/// Handler for GET /api/v1/orders
pub async fn list_orders<U, P, O, Y, N>(state: web::Data<AppState<U, P, O, Y, N>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
    Y: PaymentRepository + 'static,
    N: NotificationRepository + 'static,
{
    match state.order_repository.find_all().await {
        Ok(orders) => HttpResponse::Ok().json(orders),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/orders/{id}
///
/// Doubles as the existence check consumed by the payment service's
/// dependency verifier.
pub async fn get_order<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
    Y: PaymentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let id = path.into_inner();

    match state.order_repository.find_by_id(id).await {
        Ok(Some(order)) => HttpResponse::Ok().json(order),
        Ok(None) => handle_domain_error(DomainError::NotFound {
            resource: format!("order {}", id),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/orders
///
/// # Response
///
/// - 201 Created: order persisted, body is the order record
/// - 400 Bad Request: invalid payload, or product unavailable after the
///   verifier exhausted its retries
/// - 401 Unauthorized: missing or invalid token
pub async fn create_order<U, P, O, Y, N>(
    auth: AuthContext,
    state: web::Data<AppState<U, P, O, Y, N>>,
    request: web::Json<CreateOrderRequest>,
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
    let new_order = NewOrder {
        user_id: auth.user_id,
        product_id: request.product_id,
        quantity: request.quantity,
    };

    match state
        .order_service
        .create_order(new_order, Some(&auth.token))
        .await
    {
        Ok(order) => HttpResponse::Created().json(order),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/orders/{id}
pub async fn update_order<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateOrderRequest>,
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

    let id = path.into_inner();
    let request = request.into_inner();

    let status = match OrderStatus::parse(&request.status) {
        Some(status) => status,
        None => {
            return handle_domain_error(DomainError::Validation {
                message: format!("unknown order status: {}", request.status),
            })
        }
    };

    let existing = match state.order_repository.find_by_id(id).await {
        Ok(Some(order)) => order,
        Ok(None) => {
            return handle_domain_error(DomainError::NotFound {
                resource: format!("order {}", id),
            })
        }
        Err(error) => return handle_domain_error(error),
    };

    let order = Order {
        quantity: request.quantity,
        status,
        ..existing
    };

    match state.order_repository.update(order).await {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/orders/{id}
pub async fn delete_order<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    path: web::Path<Uuid>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
    Y: PaymentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let id = path.into_inner();

    match state.order_repository.delete(id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => handle_domain_error(DomainError::NotFound {
            resource: format!("order {}", id),
        }),
        Err(error) => handle_domain_error(error),
    }
}
