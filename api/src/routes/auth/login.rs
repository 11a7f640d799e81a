//! Login handler

use actix_web::{web, HttpResponse};
use validator::Validate;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::{handle_domain_error, handle_validation_errors};
use crate::routes::AppState;

use ch_core::repositories::{
    NotificationRepository, OrderRepository, PaymentRepository, ProductRepository, UserRepository,
};

/// Handler for POST /api/v1/auth/login
///
/// Issues a signed identity token for the supplied user id. Credential
/// checking is out of scope here; the subject of the token is the id the
/// caller presented.
///
/// # Response
///
/// ## Success (200 OK)
/// ```json
/// {
///     "token": "eyJhbGciOiJIUzI1NiIs...",
///     "expires_in": 86400
/// }
/// ```
///
/// ## Errors
/// - 400 Bad Request: invalid request data
/// - 500 Internal Server Error: token generation failure
pub async fn login<U, P, O, Y, N>(
    state: web::Data<AppState<U, P, O, Y, N>>,
    request: web::Json<LoginRequest>,
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

    match state.token_service.issue(&request.user_id) {
        Ok(token) => HttpResponse::Ok().json(LoginResponse {
            token,
            expires_in: state.token_service.token_expiry(),
        }),
        Err(error) => handle_domain_error(error),
    }
}
