use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::Serialize;
use tracing::warn;

use service::auth::domain::Credentials;
use service::auth::errors::AuthError;
use service::auth::AuthService;
use service::heroes::{CreatePolicy, HeroStore};

use crate::errors::ApiError;

/// Shared router state: the hero store, the token issuer, and the policy
/// applied by the create route.
#[derive(Clone)]
pub struct ServerState {
    pub heroes: Arc<dyn HeroStore>,
    pub auth: Arc<AuthService>,
    pub create_policy: CreatePolicy,
}

#[derive(Serialize)]
pub struct TokenOutput {
    #[serde(rename = "JWT")]
    pub jwt: String,
}

/// POST /auth — validate the credential pair and mint a signed token.
pub async fn issue_token(
    State(state): State<ServerState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> Result<Json<TokenOutput>, ApiError> {
    let Json(creds) = body.map_err(|e| ApiError::bad_request(e.body_text()))?;
    match state.auth.login(&creds) {
        Ok(token) => Ok(Json(TokenOutput { jwt: token })),
        Err(AuthError::Unauthorized) => Err(ApiError::unauthorized()),
        Err(err) => {
            warn!(code = err.code(), error = %err, "token issuance failed");
            Err(ApiError::internal(err.to_string()))
        }
    }
}
