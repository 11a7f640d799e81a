//! Token verification endpoint

use actix_web::{web, HttpResponse};

use crate::dto::auth::{VerifyTokenRequest, VerifyTokenResponse};
use crate::handlers::error::handle_domain_error;
use crate::routes::AppState;

use ch_core::repositories::{
    NotificationRepository, OrderRepository, PaymentRepository, ProductRepository, UserRepository,
};

/// Handler for POST /api/v1/auth/verify-token
///
/// The wire contract consumed by every peer's delegation middleware:
/// `{"token": string}` in, `{"user_id": string}` with status 200 out.
/// Any verification failure is a 401; peers treat all of them alike.
pub async fn verify_token<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    request: web::Json<VerifyTokenRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
    Y: PaymentRepository + 'static,
    N: NotificationRepository + 'static,
{
    match state.token_service.verify(&request.token) {
        Ok(user_id) => HttpResponse::Ok().json(VerifyTokenResponse { user_id }),
        Err(error) => handle_domain_error(error),
    }
}
