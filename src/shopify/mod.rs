mod oauth;
mod signature;
mod types;

pub use oauth::{
    CALLBACK_PATH, HttpShopifyOAuthClient, TokenExchanger, authorization_url, callback_url,
    is_valid_shop_domain,
};
pub use signature::{canonical_query, sign, verify_hmac};
pub use types::*;
