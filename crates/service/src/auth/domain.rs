use serde::{Deserialize, Serialize};

/// Login input: the credential pair presented per request, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Claims carried by an issued token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated username.
    pub sub: String,
    /// Issuer string, from configuration.
    pub iss: String,
    /// Issued-at (seconds since epoch).
    pub iat: usize,
    /// Expiry (seconds since epoch).
    pub exp: usize,
}
