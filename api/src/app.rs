//! Application factory
//!
//! Builds the actix-web application with every service scope mounted.
//! Protected scopes sit behind the delegation middleware; the token
//! verifier is a trait object, so the same wiring serves a process that
//! hosts the token authority and one that delegates over HTTP.

use actix_web::{middleware::Logger, web, App, HttpResponse};
use std::sync::Arc;

use crate::middleware::{auth::TokenAuth, cors::create_cors};
use crate::routes::auth::{login::login, verify_token::verify_token};
use crate::routes::AppState;
use crate::routes::{notifications, orders, payments, products, users};

use ch_core::repositories::{
    NotificationRepository, OrderRepository, PaymentRepository, ProductRepository, UserRepository,
};
use ch_core::services::token::TokenVerifier;

/// Create and configure the application with all dependencies
pub fn create_app<U, P, O, Y, N>(
    app_state: web::Data<AppState<U, P, O, Y, N>>,
    token_verifier: web::Data<Arc<dyn TokenVerifier>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    U: UserRepository + 'static,
    P: ProductRepository + 'static,
    O: OrderRepository + 'static,
    Y: PaymentRepository + 'static,
    N: NotificationRepository + 'static,
{
    let cors = create_cors();

    App::new()
        .app_data(app_state)
        .app_data(token_verifier)
        .wrap(Logger::default())
        .wrap(cors)
        // Health check endpoint
        .route("/health", web::get().to(health_check))
        // API v1 routes
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/auth")
                        .route("/login", web::post().to(login::<U, P, O, Y, N>))
                        .route(
                            "/verify-token",
                            web::post().to(verify_token::<U, P, O, Y, N>),
                        ),
                )
                .service(
                    web::scope("/users")
                        .wrap(TokenAuth::new())
                        .route("", web::get().to(users::list_users::<U, P, O, Y, N>))
                        .route("", web::post().to(users::create_user::<U, P, O, Y, N>))
                        .route("/{id}", web::get().to(users::get_user::<U, P, O, Y, N>))
                        .route("/{id}", web::put().to(users::update_user::<U, P, O, Y, N>))
                        .route(
                            "/{id}",
                            web::delete().to(users::delete_user::<U, P, O, Y, N>),
                        ),
                )
                .service(
                    web::scope("/products")
                        .wrap(TokenAuth::new())
                        .route("", web::get().to(products::list_products::<U, P, O, Y, N>))
                        .route(
                            "",
                            web::post().to(products::create_product::<U, P, O, Y, N>),
                        )
                        .route(
                            "/{id}",
                            web::get().to(products::get_product::<U, P, O, Y, N>),
                        )
                        .route(
                            "/{id}",
                            web::put().to(products::update_product::<U, P, O, Y, N>),
                        )
                        .route(
                            "/{id}",
                            web::delete().to(products::delete_product::<U, P, O, Y, N>),
                        ),
                )
                .service(
                    web::scope("/orders")
                        .wrap(TokenAuth::new())
                        .route("", web::get().to(orders::list_orders::<U, P, O, Y, N>))
                        .route("", web::post().to(orders::create_order::<U, P, O, Y, N>))
                        .route("/{id}", web::get().to(orders::get_order::<U, P, O, Y, N>))
                        .route("/{id}", web::put().to(orders::update_order::<U, P, O, Y, N>))
                        .route(
                            "/{id}",
                            web::delete().to(orders::delete_order::<U, P, O, Y, N>),
                        ),
                )
                .service(
                    web::scope("/payments")
                        .wrap(TokenAuth::new())
                        .route("", web::get().to(payments::list_payments::<U, P, O, Y, N>))
                        .route(
                            "",
                            web::post().to(payments::create_payment::<U, P, O, Y, N>),
                        )
                        .route(
                            "/{id}",
                            web::get().to(payments::get_payment::<U, P, O, Y, N>),
                        )
                        .route(
                            "/{id}",
                            web::put().to(payments::update_payment::<U, P, O, Y, N>),
                        )
                        .route(
                            "/{id}",
                            web::delete().to(payments::delete_payment::<U, P, O, Y, N>),
                        ),
                )
                .service(
                    web::scope("/notifications")
                        .route(
                            "",
                            web::get().to(notifications::list_notifications::<U, P, O, Y, N>),
                        )
                        .route(
                            "",
                            web::post().to(notifications::create_notification::<U, P, O, Y, N>),
                        )
                        .route(
                            "/{id}",
                            web::get().to(notifications::get_notification::<U, P, O, Y, N>),
                        )
                        .route(
                            "/{id}",
                            web::put().to(notifications::update_notification::<U, P, O, Y, N>),
                        )
                        .route(
                            "/{id}",
                            web::delete().to(notifications::delete_notification::<U, P, O, Y, N>),
                        ),
                ),
        )
        // Default 404 handler
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "carthub-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "error": "not_found",
        "message": "The requested resource was not found"
    }))
}
