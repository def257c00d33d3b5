//! Bearer token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying `exp` and `iat`. The service is
//! immutable after construction; verification depends only on the
//! header value, the clock and the configured secret.

use crate::core::config::{AuthConfig, MAX_TOKEN_TTL_MINUTES};
use crate::core::error::{PlacesError, Result, TokenError};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Claims carried by issued tokens
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Expiration, seconds since the epoch
    pub exp: i64,

    /// Issued-at, seconds since the epoch
    pub iat: i64,
}

/// Issues and verifies signed, time-limited bearer tokens
#[derive(Clone)]
pub struct TokenService {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl fmt::Debug for TokenService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenService")
            .field("ttl_minutes", &self.ttl.num_minutes())
            .finish_non_exhaustive()
    }
}

impl TokenService {
    /// Create a token service signing with `secret`
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Any HMAC variant is accepted, nothing else
        validation.algorithms = vec![Algorithm::HS256, Algorithm::HS384, Algorithm::HS512];
        // `exp` strictly before now is expired
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
            ttl,
        }
    }

    /// Create a token service from the `[auth]` config section
    ///
    /// Lifetimes above [`MAX_TOKEN_TTL_MINUTES`] are clamped; `Config::validate`
    /// rejects them before this point.
    pub fn from_config(config: &AuthConfig) -> Self {
        let minutes = config.token_ttl_minutes.min(MAX_TOKEN_TTL_MINUTES) as i64;
        let ttl = Duration::try_minutes(minutes).unwrap_or_else(|| Duration::days(365));
        Self::new(config.secret.as_bytes(), ttl)
    }

    /// Token lifetime
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Issue a token valid from now for the configured lifetime
    pub fn issue(&self) -> Result<String> {
        self.issue_at(Utc::now())
    }

    /// Issue a token as if it had been issued at `issued_at`
    pub fn issue_at(&self, issued_at: DateTime<Utc>) -> Result<String> {
        let expires_at = issued_at.checked_add_signed(self.ttl).ok_or_else(|| {
            PlacesError::TokenIssue(format!(
                "token lifetime of {} minutes overflows the clock",
                self.ttl.num_minutes()
            ))
        })?;

        let claims = Claims {
            exp: expires_at.timestamp(),
            iat: issued_at.timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(|e| PlacesError::TokenIssue(e.to_string()))
    }

    /// Verify the raw `Authorization` header value
    ///
    /// # Errors
    ///
    /// - `MissingHeader`: header absent or empty
    /// - `MalformedHeader`: not exactly `Bearer <token>`
    /// - `BadSignature`: non-HMAC algorithm or signature mismatch
    /// - `Expired`: `exp` lies before the current time
    /// - `InvalidToken`: anything else the decoder refuses
    pub fn verify(&self, authorization: Option<&str>) -> std::result::Result<Claims, TokenError> {
        let token = bearer_token(authorization)?;
        self.verify_token(token)
    }

    /// Verify a bare token string
    pub fn verify_token(&self, token: &str) -> std::result::Result<Claims, TokenError> {
        // Header algorithms the decoder cannot even name, such as "none"
        if let Some(alg) = header_algorithm(token) {
            if !HMAC_ALGORITHMS.contains(&alg.as_str()) {
                return Err(TokenError::BadSignature(format!(
                    "unexpected signing method '{alg}'"
                )));
            }
        }

        decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::InvalidSignature => {
                    TokenError::BadSignature("signature mismatch".to_string())
                }
                ErrorKind::InvalidAlgorithm => {
                    TokenError::BadSignature("unexpected signing method".to_string())
                }
                _ => TokenError::InvalidToken(e.to_string()),
            })
    }
}

const HMAC_ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];

#[derive(Deserialize)]
struct RawHeader {
    alg: String,
}

/// `alg` of the token's header, if the header segment decodes at all
fn header_algorithm(token: &str) -> Option<String> {
    let segment = token.split('.').next()?;
    let bytes = URL_SAFE_NO_PAD.decode(segment).ok()?;
    let header: RawHeader = serde_json::from_slice(&bytes).ok()?;
    Some(header.alg)
}

/// Extract the token from an `Authorization: Bearer <token>` value
pub fn bearer_token(authorization: Option<&str>) -> std::result::Result<&str, TokenError> {
    let value = match authorization {
        Some(v) if !v.is_empty() => v,
        _ => return Err(TokenError::MissingHeader),
    };

    match value.split_once(' ') {
        Some(("Bearer", token)) if !token.is_empty() && !token.contains(' ') => Ok(token),
        _ => Err(TokenError::MalformedHeader),
    }
}
