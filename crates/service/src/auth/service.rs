use chrono::{Duration, Utc};
use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header as JwtHeader, Validation,
};
use tracing::{info, instrument};

use super::domain::{Claims, Credentials};
use super::errors::AuthError;

/// Token issuer configuration
#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub issuer: String,
    pub username: String,
    pub password: String,
    pub token_ttl_hours: i64,
}

/// Credential validation and token minting, independent of the web framework
pub struct AuthService {
    cfg: AuthConfig,
}

impl AuthService {
    pub fn new(cfg: AuthConfig) -> Self {
        Self { cfg }
    }

    fn credentials_match(&self, input: &Credentials) -> bool {
        input.username == self.cfg.username && input.password == self.cfg.password
    }

    /// Validate the presented pair against the configured one and mint a
    /// signed token with the configured issuer and TTL.
    #[instrument(skip(self, input), fields(username = %input.username))]
    pub fn login(&self, input: &Credentials) -> Result<String, AuthError> {
        if !self.credentials_match(input) {
            return Err(AuthError::Unauthorized);
        }

        let now = Utc::now();
        let claims = Claims {
            sub: input.username.clone(),
            iss: self.cfg.issuer.clone(),
            iat: now.timestamp() as usize,
            exp: (now + Duration::hours(self.cfg.token_ttl_hours)).timestamp() as usize,
        };
        let token = encode(
            &JwtHeader::default(),
            &claims,
            &EncodingKey::from_secret(self.cfg.jwt_secret.as_bytes()),
        )
        .map_err(|e| AuthError::TokenError(e.to_string()))?;

        info!(username = %input.username, "token_issued");
        Ok(token)
    }

    /// Decode and validate a token issued by [`login`](Self::login): checks
    /// the signature, expiry, and issuer.
    pub fn verify(&self, token: &str) -> Result<Claims, AuthError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[self.cfg.issuer.as_str()]);
        let data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.cfg.jwt_secret.as_bytes()),
            &validation,
        )
        .map_err(|e| AuthError::TokenError(e.to_string()))?;
        Ok(data.claims)
    }
}
