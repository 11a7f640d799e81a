//! Payment handlers
//!
//! Creation goes through the payment service, which verifies the order
//! reference against the order service before persisting.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::payments::{CreatePaymentRequest, UpdatePaymentRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::middleware::auth::AuthContext;
use crate::routes::AppState;

use ch_core::domain::entities::payment::{Payment, PaymentStatus};
use ch_core::errors::DomainError;
use ch_core::repositories::{
    NotificationRepository, OrderRepository, PaymentRepository, ProductRepository, UserRepository,
};
use ch_core::services::payments::NewPayment;

/// Handler for GET /api/v1/payments
pub async fn list_payments<U, P, O, Y, N>(state: web::Data<AppState<U, P, O, Y, N>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
    Y: PaymentRepository + 'static,
    N: NotificationRepository + 'static,
{
    match state.payment_repository.find_all().await {
        Ok(payments) => HttpResponse::Ok().json(payments),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/payments/{id}
pub async fn get_payment<U, P, O, Y, N>(
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

    match state.payment_repository.find_by_id(id).await {
        Ok(Some(payment)) => HttpResponse::Ok().json(payment),
        Ok(None) => handle_domain_error(DomainError::NotFound {
            resource: format!("payment {}", id),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/payments
///
/// # Response
///
/// - 201 Created: payment persisted, body is the payment record
/// - 400 Bad Request: invalid payload, or the referenced order could
///   not be confirmed to exist
/// - 401 Unauthorized: missing or invalid token
pub async fn create_payment<U, P, O, Y, N>(
    auth: AuthContext,
    state: web::Data<AppState<U, P, O, Y, N>>,
    request: web::Json<CreatePaymentRequest>,
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
    let new_payment = NewPayment {
        order_id: request.order_id,
        amount: request.amount,
    };

    match state
        .payment_service
        .create_payment(new_payment, Some(&auth.token))
        .await
    {
        Ok(payment) => HttpResponse::Created().json(payment),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/payments/{id}
pub async fn update_payment<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdatePaymentRequest>,
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

    let status = match PaymentStatus::parse(&request.status) {
        Some(status) => status,
        None => {
            return handle_domain_error(DomainError::Validation {
                message: format!("unknown payment status: {}", request.status),
            })
        }
    };

    let existing = match state.payment_repository.find_by_id(id).await {
        Ok(Some(payment)) => payment,
        Ok(None) => {
            return handle_domain_error(DomainError::NotFound {
                resource: format!("payment {}", id),
            })
        }
        Err(error) => return handle_domain_error(error),
    };

    let payment = Payment {
        amount: request.amount,
        status,
        ..existing
    };

    match state.payment_repository.update(payment).await {
        Ok(payment) => HttpResponse::Ok().json(payment),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/payments/{id}
pub async fn delete_payment<U, P, O, Y, N>(
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

    match state.payment_repository.delete(id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => handle_domain_error(DomainError::NotFound {
            resource: format!("payment {}", id),
        }),
        Err(error) => handle_domain_error(error),
    }
}
