//! User CRUD handlers

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use crate::dto::users::{CreateUserRequest, UpdateUserRequest, UserResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use ch_core::domain::entities::user::User;
use ch_core::errors::DomainError;
use ch_core::repositories::{
    NotificationRepository, OrderRepository, PaymentRepository, ProductRepository, UserRepository,
};

/// Handler for GET /api/v1/users
pub async fn list_users<U, P, O, Y, N>(state: web::Data<AppState<U, P, O, Y, N>>) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
    Y: PaymentRepository + 'static,
    N: NotificationRepository + 'static,
{
    match state.user_repository.find_all().await {
        Ok(users) => HttpResponse::Ok().json(
            users
                .into_iter()
                .map(UserResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for GET /api/v1/users/{id}
pub async fn get_user<U, P, O, Y, N>(
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

    match state.user_repository.find_by_id(id).await {
        Ok(Some(user)) => HttpResponse::Ok().json(UserResponse::from(user)),
        Ok(None) => handle_domain_error(DomainError::NotFound {
            resource: format!("user {}", id),
        }),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for POST /api/v1/users
///
/// Rejects with 409 when the email is already registered.
pub async fn create_user<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    request: web::Json<CreateUserRequest>,
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

    match state.user_repository.exists_by_email(&request.email).await {
        Ok(true) => {
            return handle_domain_error(DomainError::Conflict {
                resource: format!("user email {}", request.email),
            })
        }
        Ok(false) => {}
        Err(error) => return handle_domain_error(error),
    }

    let request = request.into_inner();
    let user = User::new(request.name, request.email, request.password);

    match state.user_repository.create(user).await {
        Ok(user) => HttpResponse::Created().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for PUT /api/v1/users/{id}
pub async fn update_user<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    path: web::Path<Uuid>,
    request: web::Json<UpdateUserRequest>,
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

    let existing = match state.user_repository.find_by_id(id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return handle_domain_error(DomainError::NotFound {
                resource: format!("user {}", id),
            })
        }
        Err(error) => return handle_domain_error(error),
    };

    let request = request.into_inner();
    let user = User {
        id,
        name: request.name,
        email: request.email,
        password: request.password,
        created_at: existing.created_at,
    };

    match state.user_repository.update(user).await {
        Ok(user) => HttpResponse::Ok().json(UserResponse::from(user)),
        Err(error) => handle_domain_error(error),
    }
}

/// Handler for DELETE /api/v1/users/{id}
pub async fn delete_user<U, P, O, Y, N>(
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

    match state.user_repository.delete(id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => handle_domain_error(DomainError::NotFound {
            resource: format!("user {}", id),
        }),
        Err(error) => handle_domain_error(error),
    }
}
