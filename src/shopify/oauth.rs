use super::types::*;
use crate::{Result, config::ShopifyConfig, upstream};
use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, error, warn};

pub const CALLBACK_PATH: &str = "/api/v1/shopify/callback";

#[async_trait]
pub trait TokenExchanger: Send + Sync {
    async fn exchange_code_for_token(&self, code: &str, shop: &str) -> TokenExchange;
}

/// Builds the URL a merchant must visit to grant access to `shop`.
pub fn authorization_url(shop: &str, client_id: &str, scopes: &str, redirect_uri: &str) -> String {
    format!(
        "https://{}/admin/oauth/authorize?client_id={}&scope={}&redirect_uri={}",
        shop,
        urlencoding::encode(client_id),
        scopes,
        urlencoding::encode(redirect_uri),
    )
}

pub fn callback_url(base_url: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), CALLBACK_PATH)
}

/// Accepts bare host names only (`[A-Za-z0-9.-]`), so a shop value can't
/// smuggle a path, port or userinfo into the outbound URL.
pub fn is_valid_shop_domain(shop: &str) -> bool {
    !shop.is_empty()
        && !shop.starts_with('.')
        && shop
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

pub struct HttpShopifyOAuthClient {
    client: reqwest::Client,
    client_id: String,
    client_secret: String,
    scheme: String,
}

impl HttpShopifyOAuthClient {
    pub fn new(config: &ShopifyConfig) -> Result<Self> {
        Ok(Self {
            client: upstream::build_client(config.timeout_secs)?,
            client_id: config.api_key.clone(),
            client_secret: config.api_secret.clone(),
            scheme: "https".to_string(),
        })
    }

    /// Overrides the URL scheme used to reach the shop. Only useful against
    /// plain-HTTP stand-ins.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into();
        self
    }

    pub fn token_url(&self, shop: &str) -> String {
        format!("{}://{}/admin/oauth/access_token", self.scheme, shop)
    }
}

#[async_trait]
impl TokenExchanger for HttpShopifyOAuthClient {
    async fn exchange_code_for_token(&self, code: &str, shop: &str) -> TokenExchange {
        let url = self.token_url(shop);
        debug!("Exchanging authorization code with {}", url);

        let request = TokenRequest {
            client_id: &self.client_id,
            client_secret: &self.client_secret,
            code,
        };

        let response = match self.client.post(&url).json(&request).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Token exchange with {} failed: {}", shop, e);
                return TokenExchange::failure(e.to_string());
            }
        };

        let status = response.status();
        let body: Option<Value> = response.json().await.ok();

        let access_token = body
            .as_ref()
            .and_then(|b| b.get("access_token"))
            .and_then(Value::as_str)
            .filter(|t| !t.is_empty());

        match access_token {
            Some(token) if status.is_success() => TokenExchange::Success {
                access_token: token.to_string(),
            },
            _ => {
                let message = body
                    .as_ref()
                    .and_then(upstream::error_field)
                    .unwrap_or_else(|| DEFAULT_TOKEN_ERROR_MESSAGE.to_string());
                warn!("Token exchange with {} rejected ({}): {}", shop, status, message);
                TokenExchange::failure(message)
            }
        }
    }
}
