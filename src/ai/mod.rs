mod client;
mod types;

pub use client::{API_KEY_HEADER, ANALYZE_PATH, AiServiceClient, HttpAiServiceClient};
pub use types::*;
