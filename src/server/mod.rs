mod error;
pub mod handlers;
pub mod types;

pub use error::{ApiError, INTERNAL_ERROR_MESSAGE, handle_panic};
pub use handlers::AppState;

use crate::{
    Result,
    ai::HttpAiServiceClient,
    config::Config,
    shopify::{CALLBACK_PATH, HttpShopifyOAuthClient},
};
use axum::{
    Router,
    http::Method,
    routing::{get, post},
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;

/// Builds the full application router, layers included.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/api/v1/questions", post(handlers::create_question))
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/shopify/oauth", get(handlers::oauth))
        .route(CALLBACK_PATH, get(handlers::callback))
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

// Open to every origin, matching the public deployment.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
            Method::HEAD,
        ])
        .allow_headers(Any)
}

pub async fn run(config: Config) -> Result<()> {
    let ai = HttpAiServiceClient::new(&config.ai_service)?;
    let oauth = HttpShopifyOAuthClient::new(&config.shopify)?;

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);
    info!("AI service endpoint: {}", ai.endpoint());

    let app_state = AppState::new(config, Arc::new(ai), Arc::new(oauth));
    let app = build_router(app_state);

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
