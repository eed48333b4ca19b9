//! Bearer-token verification for identity-provider sessions.
//!
//! Sign-in happens at the identity provider. It issues HS256-signed JWTs
//! containing a [`Claims`] payload with the provider's subject id and the
//! user's primary email; this server only verifies them.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by a session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the identity provider's user id.
    pub sub: String,
    /// Primary email address, if the provider shares it.
    #[serde(default)]
    pub email: Option<String>,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

/// Configuration for token validation.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// HMAC-SHA256 secret shared with the identity provider.
    pub secret: String,
}

impl AuthConfig {
    /// Load token configuration from environment variables.
    ///
    /// | Env Var             | Required |
    /// |---------------------|----------|
    /// | `AUTH_TOKEN_SECRET` | **yes**  |
    ///
    /// # Panics
    ///
    /// Panics if `AUTH_TOKEN_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("AUTH_TOKEN_SECRET")
            .expect("AUTH_TOKEN_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "AUTH_TOKEN_SECRET must not be empty");

        Self { secret }
    }
}

/// Sign a session token for `subject`, valid for `ttl_mins` minutes.
///
/// Production tokens come from the identity provider; this is used by tests
/// and local tooling that share the secret.
pub fn issue_token(
    subject: &str,
    email: Option<&str>,
    ttl_mins: i64,
    config: &AuthConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();

    let claims = Claims {
        sub: subject.to_string(),
        email: email.map(str::to_string),
        exp: now + ttl_mins * 60,
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode a session token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration.
pub fn validate_token(token: &str, config: &AuthConfig) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
