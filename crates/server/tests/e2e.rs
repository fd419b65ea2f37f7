use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use reqwest::StatusCode as HttpStatusCode;
use serde_json::json;
use tokio::net::TcpListener;

use server::routes::{self, ServerState};
use service::auth::service::{AuthConfig, AuthService};
use service::heroes::{CreatePolicy, Hero, HeroRegistry};

fn cors() -> tower_http::cors::CorsLayer {
    tower_http::cors::CorsLayer::very_permissive()
}

struct TestApp {
    base_url: String,
}

async fn start_server() -> anyhow::Result<TestApp> {
    let state = ServerState {
        heroes: HeroRegistry::with_seed([Hero {
            id: "1".into(),
            name: "SuperMan".into(),
            first_name: "Clark Joseph".into(),
            last_name: "Kent".into(),
            place: "Smallville".into(),
        }]),
        auth: Arc::new(AuthService::new(AuthConfig {
            jwt_secret: "test-secret".into(),
            issuer: "http://localhost:8081".into(),
            username: "admin".into(),
            password: "secret".into(),
            token_ttl_hours: 24,
        })),
        create_policy: CreatePolicy::Overwrite,
    };

    let app: Router = routes::build_router(cors(), state);
    let listener = TcpListener::bind((std::net::Ipv4Addr::LOCALHOST, 0)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    let base_url = format!("http://{}:{}", addr.ip(), addr.port());

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            eprintln!("server error: {}", e);
        }
    });

    Ok(TestApp { base_url })
}

fn client() -> reqwest::Client {
    reqwest::Client::new()
}

#[tokio::test]
async fn e2e_health() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client().get(format!("{}/health", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["status"], "ok");
    Ok(())
}

#[tokio::test]
async fn e2e_hero_crud_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    // seeded list
    let res = c.get(format!("{}/heros", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let heroes = res.json::<serde_json::Value>().await?;
    assert_eq!(heroes.as_array().map(|a| a.len()), Some(1));

    // create
    let batman = json!({
        "id": "2",
        "name": "Batman",
        "firstName": "Bruce",
        "lastName": "Wayne",
        "place": "Gotham"
    });
    let res = c
        .post(format!("{}/heros", app.base_url))
        .json(&batman)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?, batman);

    // read back
    let res = c.get(format!("{}/heros/2", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    assert_eq!(res.json::<serde_json::Value>().await?["name"], "Batman");

    // update
    let moved = json!({
        "id": "2",
        "name": "Batman",
        "firstName": "Bruce",
        "lastName": "Wayne",
        "place": "Bludhaven"
    });
    let res = c
        .put(format!("{}/heros", app.base_url))
        .json(&moved)
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);

    // delete, then the id is gone
    let res = c.delete(format!("{}/heros/2", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    let res = c.get(format!("{}/heros/2", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);

    // deleting again is still no-content
    let res = c.delete(format!("{}/heros/2", app.base_url)).send().await?;
    assert_eq!(res.status(), HttpStatusCode::NO_CONTENT);
    Ok(())
}

#[tokio::test]
async fn e2e_non_numeric_id_is_not_found() -> anyhow::Result<()> {
    let app = start_server().await?;
    let res = client()
        .get(format!("{}/heros/12a", app.base_url))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::NOT_FOUND);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["error"], "not found");
    Ok(())
}

#[tokio::test]
async fn e2e_auth_flow() -> anyhow::Result<()> {
    let app = start_server().await?;
    let c = client();

    let res = c
        .post(format!("{}/auth", app.base_url))
        .json(&json!({"username": "admin", "password": "secret"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert!(!body["JWT"].as_str().unwrap_or_default().is_empty());

    let res = c
        .post(format!("{}/auth", app.base_url))
        .json(&json!({"username": "admin", "password": "wrong"}))
        .send()
        .await?;
    assert_eq!(res.status(), HttpStatusCode::UNAUTHORIZED);
    Ok(())
}
