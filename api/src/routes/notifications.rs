//! Notification handlers
//!
//! Creation persists the record and then hands it to the delivery
//! backend. Delivery failure does not roll back the record.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::notifications::{CreateNotificationRequest, UpdateNotificationRequest};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use ch_core::domain::entities::notification::Notification;
use ch_core::errors::DomainError;
use ch_core::repositories::{
    NotificationRepository, OrderRepository, PaymentRepository, ProductRepository, UserRepository,
};

/// Handler for GET /api/v1/notifications
pub async fn list_notifications<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
    Y: PaymentRepository + 'static,
    N: NotificationRepository + 'static,
{
    match state.notification_repository.find_all().await {
        Ok(notifications) => HttpResponse::Ok().json(notifications),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/notifications/{id}
pub async fn get_notification<U, P, O, Y, N>(
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

    match state.notification_repository.find_by_id(id).await {
        Ok(Some(notification)) => HttpResponse::Ok().json(notification),
        Ok(None) => handle_domain_error(DomainError::NotFound {
            resource: format!("notification {}", id),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/notifications
pub async fn create_notification<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    request: web::Json<CreateNotificationRequest>,
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
    let notification = Notification::new(request.user_id, request.message);

    let notification = match state.notification_repository.create(notification).await {
        Ok(notification) => notification,
        Err(error) => return handle_domain_error(error),
    };

    if let Err(error) = state.notification_sender.send(&notification).await {
        log::warn!("notification delivery failed: {}", error);
    }

    HttpResponse::Created().json(notification)
}

/// Handler for PUT /api/v1/notifications/{id}
pub async fn update_notification<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateNotificationRequest>,
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

    let existing = match state.notification_repository.find_by_id(id).await {
        Ok(Some(notification)) => notification,
        Ok(None) => {
            return handle_domain_error(DomainError::NotFound {
                resource: format!("notification {}", id),
            })
        }
        Err(error) => return handle_domain_error(error),
    };

    let request = request.into_inner();
    let notification = Notification {
        message: request.message,
        status: request.status,
        ..existing
    };

    match state.notification_repository.update(notification).await {
        Ok(notification) => HttpResponse::Ok().json(notification),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/notifications/{id}
pub async fn delete_notification<U, P, O, Y, N>(
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

    match state.notification_repository.delete(id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => handle_domain_error(DomainError::NotFound {
            resource: format!("notification {}", id),
        }),
        Err(error) => handle_domain_error(error),
    }
}
