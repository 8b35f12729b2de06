use serde::{Deserialize, Serialize};

pub const SERVICE_NAME: &str = "Shopify Analytics API";

/// Body of `POST /api/v1/questions`. Both fields are checked by the handler
/// so a missing one becomes a `validation_error` rather than a rejection.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionRequest {
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub store_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
}

#[derive(Debug, Serialize)]
pub struct OAuthUrlResponse {
    pub oauth_url: String,
}

#[derive(Debug, Serialize)]
pub struct AuthSuccessResponse {
    pub message: &'static str,
    pub store_id: String,
    pub access_token: String,
}
