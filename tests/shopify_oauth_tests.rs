use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};
use shopify_analytics_gateway::{
    config::ShopifyConfig,
    shopify::{HttpShopifyOAuthClient, TokenExchange, TokenExchanger},
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

fn client() -> HttpShopifyOAuthClient {
    let config = ShopifyConfig {
        api_key: "client-123".to_string(),
        api_secret: "hush".to_string(),
        timeout_secs: 2,
        ..ShopifyConfig::default()
    };
    HttpShopifyOAuthClient::new(&config).unwrap().with_scheme("http")
}

/// The mock server's `host:port`, standing in for the shop domain
fn shop_of(server: &MockServer) -> String {
    server.address().to_string()
}

#[tokio::test]
async fn test_exchange_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .and(body_json(json!({
            "client_id": "client-123",
            "client_secret": "hush",
            "code": "abc"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "shpat_123",
            "scope": "read_orders,read_products,read_inventory"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client()
        .exchange_code_for_token("abc", &shop_of(&server))
        .await;

    assert_eq!(
        result,
        TokenExchange::Success {
            access_token: "shpat_123".to_string()
        }
    );
}

#[tokio::test]
async fn test_exchange_rejected_uses_error_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": "invalid_request",
            "error_description": "The authorization code was not found or was already used"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client()
        .exchange_code_for_token("used", &shop_of(&server))
        .await;

    assert_eq!(result, TokenExchange::failure("invalid_request"));
}

#[tokio::test]
async fn test_exchange_success_without_token_is_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"scope": "read_orders"})))
        .expect(1)
        .mount(&server)
        .await;

    let result = client()
        .exchange_code_for_token("abc", &shop_of(&server))
        .await;

    assert_eq!(
        result,
        TokenExchange::failure("Failed to exchange code for token")
    );
}

#[rstest]
#[case(json!({"access_token": 12345}))]
#[case(json!({"access_token": true}))]
#[case(json!({"access_token": ""}))]
#[case(json!({"access_token": null}))]
#[tokio::test]
async fn test_exchange_non_string_token_is_failure(#[case] body: Value) {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/admin/oauth/access_token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(&server)
        .await;

    let result = client()
        .exchange_code_for_token("abc", &shop_of(&server))
        .await;

    assert_eq!(
        result,
        TokenExchange::failure("Failed to exchange code for token")
    );
}

#[tokio::test]
async fn test_exchange_non_json_failure_uses_default() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .expect(1)
        .mount(&server)
        .await;

    let result = client()
        .exchange_code_for_token("abc", &shop_of(&server))
        .await;

    assert_eq!(
        result,
        TokenExchange::failure("Failed to exchange code for token")
    );
}

#[tokio::test]
async fn test_exchange_transport_fault_is_failure() {
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let result = client()
        .exchange_code_for_token("abc", &format!("127.0.0.1:{}", port))
        .await;

    match result {
        TokenExchange::Failure { error } => assert!(!error.is_empty()),
        other => panic!("expected failure, got {:?}", other),
    }
}
