//! Session tokens for studyhub accounts.
//!
//! A sign-in yields two tokens. The access token is an HS256 JWT whose
//! [`Claims`] carry everything a handler needs to attribute a post (user id
//! and display name). The refresh token is an opaque UUID; the `user_sessions`
//! table keeps only its SHA-256 digest.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use studyhub_core::types::DbId;
use uuid::Uuid;

/// Payload of a studyhub access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// `users.id` of the signed-in account.
    pub sub: DbId,
    /// Display name, stamped as `author` on questions, answers and comments.
    pub name: String,
    pub exp: i64,
    pub iat: i64,
    pub jti: String,
}

/// Signing secret and token lifetimes.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 60;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty), `JWT_ACCESS_EXPIRY_MINS`
    /// (default 60) and `JWT_REFRESH_EXPIRY_DAYS` (default 7).
    ///
    /// # Panics
    ///
    /// Panics on a missing or empty secret, or a non-numeric lifetime.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        let refresh_token_expiry_days: i64 = std::env::var("JWT_REFRESH_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_REFRESH_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_REFRESH_EXPIRY_DAYS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
            refresh_token_expiry_days,
        }
    }

    /// Access token lifetime in seconds, as reported in `expires_in`.
    pub fn access_ttl_secs(&self) -> i64 {
        self.access_token_expiry_mins * 60
    }
}

/// Everything produced by one sign-in or refresh.
#[derive(Debug)]
pub struct IssuedTokens {
    pub access_token: String,
    /// Returned to the client once, never stored.
    pub refresh_token: String,
    /// Stored in `user_sessions.refresh_token_hash`.
    pub refresh_token_hash: String,
    pub refresh_expires_at: DateTime<Utc>,
}

/// Mint an access token and a fresh refresh token for `user_id`.
pub fn issue_tokens(
    user_id: DbId,
    display_name: &str,
    config: &JwtConfig,
) -> Result<IssuedTokens, jsonwebtoken::errors::Error> {
    let access_token = generate_access_token(user_id, display_name, config)?;
    let (refresh_token, refresh_token_hash) = generate_refresh_token();

    Ok(IssuedTokens {
        access_token,
        refresh_token,
        refresh_token_hash,
        refresh_expires_at: Utc::now() + Duration::days(config.refresh_token_expiry_days),
    })
}

/// Sign an access token naming `user_id` and `display_name`.
pub fn generate_access_token(
    user_id: DbId,
    display_name: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let iat = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        name: display_name.to_string(),
        exp: iat + config.access_ttl_secs(),
        iat,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check signature and expiry of a bearer token and return its claims.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )?;
    Ok(data.claims)
}

/// New opaque refresh token as `(plaintext, sha256_hex)`.
pub fn generate_refresh_token() -> (String, String) {
    let plaintext = Uuid::new_v4().to_string();
    let hash = hash_refresh_token(&plaintext);
    (plaintext, hash)
}

/// SHA-256 hex digest under which a refresh token's session is looked up.
pub fn hash_refresh_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
