use serde::Serialize;
use serde_json::Value;
use std::fmt;

pub const DEFAULT_AI_ERROR_MESSAGE: &str = "Failed to get response from AI service";
pub const SERVICE_UNAVAILABLE_MESSAGE: &str = "AI service is currently unavailable";

#[derive(Debug, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub question: &'a str,
    pub store_id: &'a str,
}

/// Successful analysis as returned by the AI service.
///
/// Every field is relayed verbatim; absent fields come through as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    pub answer: Value,
    pub confidence: Value,
    pub query_used: Value,
    pub metadata: Value,
}

impl Analysis {
    /// Reads an analysis out of an upstream body. Only JSON objects qualify.
    pub fn from_body(body: Value) -> Option<Self> {
        let Value::Object(mut fields) = body else {
            return None;
        };
        let mut take = |key: &str| fields.remove(key).unwrap_or(Value::Null);

        Some(Self {
            answer: take("answer"),
            confidence: take("confidence"),
            query_used: take("query_used"),
            metadata: take("metadata"),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AiErrorCode {
    /// The AI service answered with a non-2xx status.
    AiServiceError,
    /// The AI service could not be reached or sent an unreadable reply.
    ServiceUnavailable,
    UnexpectedError,
}

impl AiErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AiServiceError => "ai_service_error",
            Self::ServiceUnavailable => "service_unavailable",
            Self::UnexpectedError => "unexpected_error",
        }
    }
}

impl fmt::Display for AiErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one question sent to the AI service.
#[derive(Debug, Clone, PartialEq)]
pub enum AiAnswer {
    Success(Analysis),
    Failure { error: AiErrorCode, message: String },
}

impl AiAnswer {
    pub fn failure(error: AiErrorCode, message: impl Into<String>) -> Self {
        Self::Failure {
            error,
            message: message.into(),
        }
    }

    pub fn unavailable() -> Self {
        Self::failure(AiErrorCode::ServiceUnavailable, SERVICE_UNAVAILABLE_MESSAGE)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }
}
