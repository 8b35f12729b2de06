use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use serde_json::{Value, json};
use shopify_analytics_gateway::{
    ai::{AiAnswer, AiServiceClient, Analysis},
    config::Config,
    server::{AppState, build_router},
    shopify::TokenExchanger,
};
use std::sync::Arc;

pub const TEST_SHOPIFY_SECRET: &str = "hush";

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    let mut config = Config::default();
    config.server.host = "127.0.0.1".to_string();
    config.server.port = 3000;
    config.ai_service.api_key = "test-key".to_string();
    config.shopify.api_key = "client-123".to_string();
    config.shopify.api_secret = TEST_SHOPIFY_SECRET.to_string();
    config
}

pub fn create_test_app(
    config: Config,
    ai: Arc<dyn AiServiceClient>,
    oauth: Arc<dyn TokenExchanger>,
) -> Router {
    build_router(AppState::new(config, ai, oauth))
}

pub fn sample_analysis() -> Analysis {
    Analysis {
        answer: json!("42"),
        confidence: json!(0.9),
        query_used: json!("SELECT count(*) FROM orders"),
        metadata: json!({}),
    }
}

pub fn sample_answer() -> AiAnswer {
    AiAnswer::Success(sample_analysis())
}

pub fn json_request(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}
