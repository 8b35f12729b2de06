use super::types::*;
use crate::{Result, config::AiServiceConfig, upstream};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, warn};

pub const ANALYZE_PATH: &str = "/api/v1/analyze";
pub const API_KEY_HEADER: &str = "X-API-Key";

#[async_trait]
pub trait AiServiceClient: Send + Sync {
    /// Sends one question to the AI service. Never retries; every fault is
    /// folded into [`AiAnswer::Failure`].
    async fn ask_question(&self, question: &str, store_id: &str) -> AiAnswer;
}

pub struct HttpAiServiceClient {
    client: reqwest::Client,
    endpoint: String,
    api_key: String,
}

impl HttpAiServiceClient {
    pub fn new(config: &AiServiceConfig) -> Result<Self> {
        let client = upstream::build_client(config.timeout_secs)?;
        let endpoint = format!("{}{}", config.base_url.trim_end_matches('/'), ANALYZE_PATH);

        Ok(Self {
            client,
            endpoint,
            api_key: config.api_key.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AiServiceClient for HttpAiServiceClient {
    async fn ask_question(&self, question: &str, store_id: &str) -> AiAnswer {
        debug!("Forwarding question for store {} to {}", store_id, self.endpoint);

        let response = match self
            .client
            .post(&self.endpoint)
            .header(API_KEY_HEADER, &self.api_key)
            .json(&AnalyzeRequest { question, store_id })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => return send_failure(e),
        };

        let status = response.status();
        if !status.is_success() {
            let body: Option<Value> = response.json().await.ok();
            let message = body
                .as_ref()
                .and_then(upstream::error_field)
                .unwrap_or_else(|| DEFAULT_AI_ERROR_MESSAGE.to_string());

            warn!("AI service returned {}: {}", status, message);
            return AiAnswer::failure(AiErrorCode::AiServiceError, message);
        }

        let body = match response.json::<Value>().await {
            Ok(body) => body,
            Err(e) => {
                error!("AI service error: malformed response: {}", e);
                return AiAnswer::unavailable();
            }
        };

        match Analysis::from_body(body) {
            Some(analysis) => AiAnswer::Success(analysis),
            None => {
                error!("AI service error: response body is not a JSON object");
                AiAnswer::unavailable()
            }
        }
    }
}

fn send_failure(e: reqwest::Error) -> AiAnswer {
    if e.is_builder() {
        error!("Unexpected error: {}", e);
        return AiAnswer::failure(AiErrorCode::UnexpectedError, e.to_string());
    }

    error!("AI service error: {}", e);
    AiAnswer::unavailable()
}
