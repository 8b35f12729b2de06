use async_trait::async_trait;
use shopify_analytics_gateway::{
    ai::{AiAnswer, AiServiceClient},
    shopify::{TokenExchange, TokenExchanger},
};
use std::sync::{Arc, Mutex};

/// Mock AI client that replays a fixed answer and records every call
#[derive(Debug, Clone)]
pub struct MockAiClient {
    pub answer: AiAnswer,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockAiClient {
    pub fn new(answer: AiAnswer) -> Self {
        Self {
            answer,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl AiServiceClient for MockAiClient {
    async fn ask_question(&self, question: &str, store_id: &str) -> AiAnswer {
        self.calls
            .lock()
            .unwrap()
            .push((question.to_string(), store_id.to_string()));
        self.answer.clone()
    }
}

/// AI client that blows up mid-request
pub struct PanickingAiClient;

#[async_trait]
impl AiServiceClient for PanickingAiClient {
    async fn ask_question(&self, _question: &str, _store_id: &str) -> AiAnswer {
        panic!("database password is hunter2");
    }
}

/// Mock token exchanger that records `(code, shop)` pairs
#[derive(Debug, Clone)]
pub struct MockTokenExchanger {
    pub result: TokenExchange,
    pub calls: Arc<Mutex<Vec<(String, String)>>>,
}

impl MockTokenExchanger {
    pub fn new(result: TokenExchange) -> Self {
        Self {
            result,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn succeeding(token: &str) -> Self {
        Self::new(TokenExchange::Success {
            access_token: token.to_string(),
        })
    }

    pub fn failing(error: &str) -> Self {
        Self::new(TokenExchange::failure(error))
    }

    pub fn get_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl TokenExchanger for MockTokenExchanger {
    async fn exchange_code_for_token(&self, code: &str, shop: &str) -> TokenExchange {
        self.calls
            .lock()
            .unwrap()
            .push((code.to_string(), shop.to_string()));
        self.result.clone()
    }
}
