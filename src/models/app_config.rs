use anyhow::{Context, Result};

const DEFAULT_PORT: u16 = 9090;

/// Process-wide configuration, read once at startup and never mutated.
/// Exchange-related fields are optional: the server is useful as a plain
/// parameter echo even with nothing configured.
#[derive(Clone)]
pub struct AppConfig {
    pub port: u16,
    pub token_url: Option<String>,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        use dotenvy::dotenv;
        use std::env;

        dotenv().ok();

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Env vars set to the empty string count as unset.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("invalid PORT value: {}", raw))?,
            None => DEFAULT_PORT,
        };

        let token_url = var("TOKEN_URL").or_else(|| var("KEYCLOAK_TOKEN_URL"));
        let client_id = var("CLIENT_ID");
        let client_secret = var("CLIENT_SECRET");
        let redirect_uri = var("REDIRECT_URI")
            .unwrap_or_else(|| format!("http://localhost:{}/callback", port));

        Ok(Self {
            port,
            token_url,
            client_id,
            client_secret,
            redirect_uri,
        })
    }

    /// Token exchange requires at least a token endpoint and a client id.
    pub fn exchange_enabled(&self) -> bool {
        self.token_url.is_some() && self.client_id.is_some()
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub http: reqwest::Client,
}
