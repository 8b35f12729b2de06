use super::error::ApiError;
use super::types::*;
use crate::{
    ai::{AiAnswer, AiServiceClient, Analysis},
    config::Config,
    shopify::{self, TokenExchange, TokenExchanger},
};
use axum::{
    extract::{Query, State, rejection::JsonRejection},
    http::{HeaderMap, header},
    response::Json,
};
use std::sync::Arc;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub ai: Arc<dyn AiServiceClient>,
    pub oauth: Arc<dyn TokenExchanger>,
}

impl AppState {
    pub fn new(
        config: Config,
        ai: Arc<dyn AiServiceClient>,
        oauth: Arc<dyn TokenExchanger>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            ai,
            oauth,
        }
    }
}

/// Returns the value when it is present and not blank.
fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn query_param<'a>(params: &'a [(String, String)], key: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

pub async fn root() -> &'static str {
    "Shopify Analytics API - Use /api/v1/questions or /api/v1/health"
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: SERVICE_NAME,
    })
}

pub async fn create_question(
    State(state): State<AppState>,
    payload: Result<Json<QuestionRequest>, JsonRejection>,
) -> Result<Json<Analysis>, ApiError> {
    let Json(request) = payload.map_err(|e| {
        warn!("Rejected question payload: {}", e);
        ApiError::validation("Request body must be a JSON object with question and store_id")
    })?;

    let question = present(request.question.as_deref())
        .ok_or_else(|| ApiError::validation("Question parameter is required"))?;
    let store_id = present(request.store_id.as_deref())
        .ok_or_else(|| ApiError::validation("Store ID parameter is required"))?;

    info!("Received question: {} for store: {}", question, store_id);

    match state.ai.ask_question(question, store_id).await {
        AiAnswer::Success(analysis) => Ok(Json(analysis)),
        AiAnswer::Failure { error, message } => {
            warn!("Question for store {} failed: {} ({})", store_id, error, message);
            Err(ApiError::ai_failure(error, message))
        }
    }
}

pub async fn oauth(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<OAuthUrlResponse>, ApiError> {
    let shop = present(query_param(&params, "shop"))
        .ok_or_else(|| ApiError::bad_request("Shop parameter required"))?;

    if !shopify::is_valid_shop_domain(shop) {
        return Err(ApiError::bad_request("Invalid shop parameter"));
    }

    let base_url = match &state.config.server.public_url {
        Some(url) => url.clone(),
        None => request_base_url(&headers, &state.config),
    };
    let redirect_uri = shopify::callback_url(&base_url);

    let oauth_url = shopify::authorization_url(
        shop,
        &state.config.shopify.api_key,
        &state.config.shopify.scopes,
        &redirect_uri,
    );

    info!("Issued OAuth URL for shop: {}", shop);
    Ok(Json(OAuthUrlResponse { oauth_url }))
}

pub async fn callback(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<AuthSuccessResponse>, ApiError> {
    let (Some(code), Some(shop)) = (
        present(query_param(&params, "code")),
        present(query_param(&params, "shop")),
    ) else {
        return Err(ApiError::invalid_request("Missing code or shop parameter"));
    };

    if !shopify::is_valid_shop_domain(shop) {
        return Err(ApiError::bad_request("Invalid shop parameter"));
    }

    let shopify_config = &state.config.shopify;
    if shopify_config.verify_callback_hmac
        && !shopify::verify_hmac(
            &params,
            query_param(&params, "hmac"),
            &shopify_config.api_secret,
        )
    {
        warn!("Rejected OAuth callback for {}: bad HMAC", shop);
        return Err(ApiError::authentication_failed("Invalid HMAC signature"));
    }

    match state.oauth.exchange_code_for_token(code, shop).await {
        TokenExchange::Success { access_token } => {
            info!("Shop {} authenticated", shop);
            Ok(Json(AuthSuccessResponse {
                message: "Authentication successful",
                store_id: shop.to_string(),
                access_token,
            }))
        }
        TokenExchange::Failure { error } => {
            warn!("Authentication failed for {}: {}", shop, error);
            Err(ApiError::authentication_failed(error))
        }
    }
}

/// Rebuilds this service's base URL from the inbound request.
fn request_base_url(headers: &HeaderMap, config: &Config) -> String {
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    match headers.get(header::HOST).and_then(|v| v.to_str().ok()) {
        Some(host) => format!("{}://{}", scheme, host),
        None => format!("{}://localhost:{}", scheme, config.server.port),
    }
}
