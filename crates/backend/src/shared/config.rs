use serde::Deserialize;

use crate::shared::remote::paging::DEFAULT_PAGE_SIZE;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub remote: RemoteConfig,
    #[serde(default)]
    pub paging: PagingConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Подключение к удалённому хранилищу (PostgREST)
#[derive(Debug, Deserialize, Clone)]
pub struct RemoteConfig {
    pub url: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PagingConfig {
    pub page_size: u64,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// Время жизни кэша сводки, 0 отключает кэш
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self { ttl_secs: 60 }
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: 3000 }
    }
}

fn default_timeout_secs() -> u64 {
    30
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[remote]
url = "http://localhost:54321"
api_key = ""
timeout_secs = 30

[paging]
page_size = 1000

[cache]
ttl_secs = 60

[server]
port = 3000
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
///
/// `REMOTE_URL` and `REMOTE_API_KEY` override the remote section.
pub fn load_config() -> anyhow::Result<Config> {
    let mut config = read_config_file()?;

    if let Ok(url) = std::env::var("REMOTE_URL") {
        config.remote.url = url;
    }
    if let Ok(api_key) = std::env::var("REMOTE_API_KEY") {
        config.remote.api_key = api_key;
    }

    validate(&config)?;
    Ok(config)
}

fn read_config_file() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    Ok(toml::from_str(contents)?)
}

pub fn validate(config: &Config) -> anyhow::Result<()> {
    if config.remote.url.trim().is_empty() {
        anyhow::bail!("remote.url must not be empty");
    }
    if config.paging.page_size == 0 {
        anyhow::bail!("paging.page_size must be greater than zero");
    }
    if config.remote.api_key.is_empty() {
        tracing::warn!("remote.api_key is empty, requests will be anonymous");
    }
    Ok(())
}
