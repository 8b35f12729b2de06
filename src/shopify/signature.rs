//! HMAC verification of Shopify redirect parameters.

use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Keys never included in the signed message.
const EXCLUDED_KEYS: &[&str] = &["hmac", "signature"];

/// Builds the signed message: every parameter except `hmac`/`signature`,
/// sorted by key, joined as `key=value` with `&`.
///
/// Returns `None` when a key appears more than once.
pub fn canonical_query(params: &[(String, String)]) -> Option<String> {
    let mut pairs: Vec<&(String, String)> = params.iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(&b.0));

    if pairs.windows(2).any(|w| w[0].0 == w[1].0) {
        return None;
    }

    let message = pairs
        .into_iter()
        .filter(|(k, _)| !EXCLUDED_KEYS.contains(&k.as_str()))
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    Some(message)
}

/// Computes the base64 HMAC-SHA256 of the canonical query.
pub fn sign(params: &[(String, String)], secret: &str) -> Option<String> {
    let message = canonical_query(params)?;
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(message.as_bytes());

    Some(STANDARD.encode(mac.finalize().into_bytes()))
}

/// Checks `hmac` against the parameters signed with `secret`.
///
/// An absent or blank `hmac` fails without computing anything. The digest
/// comparison is constant-time.
pub fn verify_hmac(params: &[(String, String)], hmac: Option<&str>, secret: &str) -> bool {
    let Some(provided) = hmac.filter(|h| !h.trim().is_empty()) else {
        return false;
    };

    let Ok(provided) = STANDARD.decode(provided) else {
        return false;
    };

    let Some(message) = canonical_query(params) else {
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(message.as_bytes());

    mac.verify_slice(&provided).is_ok()
}
