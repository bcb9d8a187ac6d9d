//! Session claims and unverified token decoding.
//!
//! The guard only extracts coarse `permissions`/`roles` claims from the
//! session token; signature verification belongs to the token issuer and the
//! services that accept the token downstream, not to this layer.

use base64ct::{Base64UrlUnpadded, Encoding};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Claims decoded from a session token for the duration of one request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("invalid token format")]
    TokenFormat,
    #[error("invalid base64url encoding")]
    Base64,
    #[error("invalid json")]
    Json(#[from] serde_json::Error),
}

/// Decode the payload segment of a compact JWT without verifying the
/// signature.
///
/// The token must carry the usual three dot-separated segments; only the
/// middle one is decoded. Claim fields absent from the payload default to
/// empty.
///
/// # Errors
///
/// Returns an error if the token does not have exactly three segments, or if
/// the payload segment is not valid base64url/JSON.
pub fn decode_unverified(token: &str) -> Result<SessionClaims, TokenError> {
    let mut parts = token.split('.');
    let _header = parts.next().ok_or(TokenError::TokenFormat)?;
    let claims_b64 = parts.next().ok_or(TokenError::TokenFormat)?;
    let _signature = parts.next().ok_or(TokenError::TokenFormat)?;
    if parts.next().is_some() {
        return Err(TokenError::TokenFormat);
    }

    let bytes = Base64UrlUnpadded::decode_vec(claims_b64).map_err(|_| TokenError::Base64)?;
    Ok(serde_json::from_slice(&bytes)?)
}
