use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use log::info;
use std::sync::Arc;

use ch_api::app::create_app;
use ch_api::config::{ApiConfig, AuthMode};
use ch_api::routes::AppState;

use ch_core::services::dependency::{DependencyVerifier, EntityProbe, RetryPolicy};
use ch_core::services::orders::OrderService;
use ch_core::services::payments::PaymentService;
use ch_core::services::token::{LocalTokenVerifier, TokenConfig, TokenService, TokenVerifier};

use ch_infra::database::mysql::{
    MySqlNotificationRepository, MySqlOrderRepository, MySqlPaymentRepository,
    MySqlProductRepository, MySqlUserRepository,
};
use ch_infra::database::create_pool;
use ch_infra::http::{HttpEntityProbe, RemoteTokenVerifier};
use ch_infra::notify::LogNotificationSender;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    info!("Starting CartHub API Server");

    let config = ApiConfig::from_env();
    if config.jwt.is_using_default_secret() {
        log::warn!("JWT_SECRET not set, using the default development secret");
    }

    let bind_address = config.server.bind_address();
    info!("Server will bind to: {}", bind_address);

    let pool = create_pool(&config.database)
        .await
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?;

    // Token authority and the verification seam for the middleware
    let token_service = Arc::new(TokenService::new(TokenConfig::from(&config.jwt)));
    let token_verifier: Arc<dyn TokenVerifier> = match config.auth_mode {
        AuthMode::Local => Arc::new(LocalTokenVerifier::new(token_service.clone())),
        AuthMode::Remote => Arc::new(RemoteTokenVerifier::new(&config.peers.auth_service_url)),
    };

    // Dependency verification against peer services
    let retry_policy = RetryPolicy::from(&config.retry);
    let probe: Arc<dyn EntityProbe> = Arc::new(
        HttpEntityProbe::new(config.peers.clone(), retry_policy.attempt_timeout)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e.to_string()))?,
    );

    // Repositories against the shared store
    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let product_repository = Arc::new(MySqlProductRepository::new(pool.clone()));
    let order_repository = Arc::new(MySqlOrderRepository::new(pool.clone()));
    let payment_repository = Arc::new(MySqlPaymentRepository::new(pool.clone()));
    let notification_repository = Arc::new(MySqlNotificationRepository::new(pool));

    // Write orchestrators
    let order_service = Arc::new(OrderService::new(
        order_repository.clone(),
        DependencyVerifier::new(probe.clone(), retry_policy),
    ));
    let payment_service = Arc::new(PaymentService::new(
        payment_repository.clone(),
        DependencyVerifier::new(probe, retry_policy),
    ));

    let app_state = web::Data::new(AppState {
        token_service,
        user_repository,
        product_repository,
        order_repository,
        payment_repository,
        notification_repository,
        order_service,
        payment_service,
        notification_sender: Arc::new(LogNotificationSender::new()),
    });
    let verifier_data = web::Data::new(token_verifier);

    HttpServer::new(move || create_app(app_state.clone(), verifier_data.clone()))
        .bind(&bind_address)?
        .run()
        .await
}
