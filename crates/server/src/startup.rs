use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};
use service::auth::service::{AuthConfig, AuthService};
use service::heroes::{CreatePolicy, Hero, HeroRegistry};

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// The record every fresh store starts with.
fn seed_heroes() -> Vec<Hero> {
    vec![Hero {
        id: "1".into(),
        name: "SuperMan".into(),
        first_name: "Clark Joseph".into(),
        last_name: "Kent".into(),
        place: "Smallville".into(),
    }]
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> Result<(), StartupError> {
    dotenv().ok();
    init_logging();

    let cfg = configs::AppConfig::load_and_validate()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    let create_policy: CreatePolicy = cfg
        .store
        .create_policy
        .parse()
        .map_err(StartupError::InvalidConfig)?;

    let registry = HeroRegistry::with_seed(seed_heroes());

    let auth_svc = AuthService::new(AuthConfig {
        jwt_secret: cfg.auth.jwt_secret.clone(),
        issuer: cfg.auth.issuer.clone(),
        username: cfg.auth.username.clone(),
        password: cfg.auth.password.clone(),
        token_ttl_hours: cfg.auth.token_ttl_hours,
    });

    let state = ServerState {
        heroes: registry,
        auth: Arc::new(auth_svc),
        create_policy,
    };

    let app: Router = routes::build_router(build_cors(), state);

    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port)
        .parse()
        .context("invalid bind address")?;
    info!(%addr, policy = ?create_policy, "starting hero service");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("failed to bind address")?;
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
