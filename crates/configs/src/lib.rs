use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthSettings,
    #[serde(default)]
    pub store: StoreSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 8081, worker_threads: Some(4) }
    }
}

/// Token issuer settings. The expected credential pair is configuration, not
/// a user database; the secret may also come from the `JWT_SECRET` env var.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSettings {
    #[serde(default)]
    pub jwt_secret: String,
    #[serde(default = "default_issuer")]
    pub issuer: String,
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default = "default_password")]
    pub password: String,
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            jwt_secret: String::new(),
            issuer: default_issuer(),
            username: default_username(),
            password: default_password(),
            token_ttl_hours: default_token_ttl_hours(),
        }
    }
}

fn default_issuer() -> String { "http://localhost:8081".to_string() }
fn default_username() -> String { "admin".to_string() }
fn default_password() -> String { "secret".to_string() }
fn default_token_ttl_hours() -> i64 { 24 }

#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    #[serde(default = "default_create_policy")]
    pub create_policy: String,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self { create_policy: default_create_policy() }
    }
}

fn default_create_policy() -> String { "overwrite".to_string() }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    /// Load from `CONFIG_PATH` (default `config.toml`), falling back to
    /// built-in defaults when the file is absent, then normalize and
    /// validate.
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default().unwrap_or_default();
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize_from_env()?;
        self.auth.normalize_from_env();
        self.store.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    /// Apply `SERVER_HOST`/`SERVER_PORT` env overrides, then sanity-check.
    fn normalize_from_env(&mut self) -> Result<()> {
        if let Ok(host) = std::env::var("SERVER_HOST") {
            self.host = host;
        }
        if let Ok(port) = std::env::var("SERVER_PORT") {
            self.port = port
                .parse::<u16>()
                .map_err(|_| anyhow!("SERVER_PORT must be a port number"))?;
        }
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        if let Some(w) = self.worker_threads {
            if w == 0 { self.worker_threads = Some(4); }
        } else {
            self.worker_threads = Some(4);
        }
        Ok(())
    }
}

impl AuthSettings {
    /// Fill the signing secret from `JWT_SECRET` when the TOML omits it.
    pub fn normalize_from_env(&mut self) {
        if self.jwt_secret.trim().is_empty() {
            self.jwt_secret = std::env::var("JWT_SECRET")
                .unwrap_or_else(|_| "dev-secret-change-me".to_string());
        }
    }
}

impl StoreSettings {
    pub fn validate(&self) -> Result<()> {
        match self.create_policy.as_str() {
            "overwrite" | "reject" => Ok(()),
            other => Err(anyhow!(
                "store.create_policy must be \"overwrite\" or \"reject\", got {:?}",
                other
            )),
        }
    }
}
