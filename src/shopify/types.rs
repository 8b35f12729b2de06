use serde::Serialize;

pub const DEFAULT_TOKEN_ERROR_MESSAGE: &str = "Failed to exchange code for token";

#[derive(Debug, Serialize)]
pub struct TokenRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: &'a str,
}

/// Outcome of exchanging an authorization code for an access token.
#[derive(Clone, PartialEq)]
pub enum TokenExchange {
    Success { access_token: String },
    Failure { error: String },
}

impl TokenExchange {
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }
}

impl std::fmt::Debug for TokenExchange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success { .. } => f
                .debug_struct("Success")
                .field("access_token", &"[REDACTED]")
                .finish(),
            Self::Failure { error } => f.debug_struct("Failure").field("error", error).finish(),
        }
    }
}
