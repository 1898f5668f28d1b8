/*
 * Responsibility
 * - 環境変数や設定の読み込み (PORT, APP_ENV, CORS 許可, HTTP 制限値)
 * - 設定値のバリデーション (不正値なら起動失敗)
 */
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    Development,
    Production,
}

impl AppEnv {
    fn parse(value: Option<&str>) -> Self {
        match value
            .unwrap_or("development")
            .to_ascii_lowercase()
            .as_str()
        {
            "production" | "prod" => Self::Production,
            _ => Self::Development,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub addr: SocketAddr,
    pub app_env: AppEnv,
    pub cors_allowed_origins: Vec<String>,
    pub http_body_limit_bytes: usize,
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 3000)),
            app_env: AppEnv::Development,
            cors_allowed_origins: Vec::new(),
            http_body_limit_bytes: 1024 * 1024, // 1 MiB
            http_timeout: Duration::from_secs(30),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (env, map in tests, ...).
    /// Missing keys take defaults; present but unparsable keys are errors.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port: u16 = parse_or(&lookup, "PORT", defaults.addr.port())?;
        let addr = SocketAddr::from_str(&format!("0.0.0.0:{}", port))
            .map_err(|_| ConfigError::Invalid("PORT"))?;

        let app_env = AppEnv::parse(lookup("APP_ENV").as_deref());

        let cors_allowed_origins = lookup("CORS_ALLOWED_ORIGINS")
            .unwrap_or_default()
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>();

        let http_body_limit_bytes = parse_or(
            &lookup,
            "HTTP_BODY_LIMIT_BYTES",
            defaults.http_body_limit_bytes,
        )?;

        let http_timeout_seconds = parse_or(
            &lookup,
            "HTTP_TIMEOUT_SECONDS",
            defaults.http_timeout.as_secs(),
        )?;
        if http_timeout_seconds == 0 {
            return Err(ConfigError::Invalid("HTTP_TIMEOUT_SECONDS"));
        }

        Ok(Self {
            addr,
            app_env,
            cors_allowed_origins,
            http_body_limit_bytes,
            http_timeout: Duration::from_secs(http_timeout_seconds),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid(key)),
        None => Ok(default),
    }
}
