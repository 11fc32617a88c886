pub mod errors;

// standard library
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

// internal crates
use crate::config::errors::{ConfigErr, ParseFileErr, ReadFileErr};
use crate::cooldown::Backoff;
use crate::deserialize_warn;
use crate::http::request::{default_user_agent, Auth};
use crate::logs::LogLevel;
use crate::trace;

// external crates
use secrecy::SecretString;
use serde::Deserialize;
use tracing::error;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total number of attempts per request, including the first one.
    pub max_attempts: u32,
    pub backoff: Backoff,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 1,
            backoff: Backoff::default(),
        }
    }
}

impl<'de> Deserialize<'de> for RetryPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct DeserializeBackoff {
            base_secs: Option<i64>,
            growth_factor: Option<i64>,
            max_secs: Option<i64>,
        }

        #[derive(Deserialize)]
        struct DeserializeRetryPolicy {
            max_attempts: Option<u32>,
            backoff: Option<DeserializeBackoff>,
        }

        let default = RetryPolicy::default();

        let result = match DeserializeRetryPolicy::deserialize(deserializer) {
            Ok(retry) => retry,
            Err(e) => {
                error!("Error deserializing retry policy: {}", e);
                return Err(e);
            }
        };

        let backoff = match result.backoff {
            Some(backoff) => Backoff {
                base_secs: backoff.base_secs.unwrap_or(default.backoff.base_secs),
                growth_factor: backoff
                    .growth_factor
                    .unwrap_or(default.backoff.growth_factor),
                max_secs: backoff.max_secs.unwrap_or(default.backoff.max_secs),
            },
            None => default.backoff,
        };

        Ok(RetryPolicy {
            // a request is always attempted at least once
            max_attempts: result.max_attempts.unwrap_or(default.max_attempts).max(1),
            backoff,
        })
    }
}

/// Settings of the internal API client.
#[derive(Debug, Clone)]
pub struct Configuration {
    /// Base URL of the internal API, without a trailing slash.
    pub host: String,
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub verify_ssl: bool,
    pub proxy: Option<String>,
    pub user_agent: String,
    pub username: Option<String>,
    pub password: Option<SecretString>,
    /// Takes precedence over basic auth when both are set.
    pub access_token: Option<SecretString>,
    pub default_headers: BTreeMap<String, String>,
    pub retry: RetryPolicy,
    pub log_level: LogLevel,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            host: internal_api::BASE_PATH.to_string(),
            timeout: DEFAULT_TIMEOUT,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            verify_ssl: true,
            proxy: None,
            user_agent: default_user_agent(),
            username: None,
            password: None,
            access_token: None,
            default_headers: BTreeMap::new(),
            retry: RetryPolicy::default(),
            log_level: LogLevel::Info,
        }
    }
}

impl Configuration {
    pub fn with_host(mut self, host: &str) -> Self {
        self.host = normalize_host(host);
        self
    }

    pub fn with_access_token(mut self, token: &str) -> Self {
        self.access_token = Some(SecretString::from(token.to_string()));
        self
    }

    pub fn with_basic_auth(mut self, username: &str, password: &str) -> Self {
        self.username = Some(username.to_string());
        self.password = Some(SecretString::from(password.to_string()));
        self
    }

    pub fn auth(&self) -> Auth {
        if let Some(token) = &self.access_token {
            return Auth::Bearer(token.clone());
        }
        match &self.username {
            Some(username) => Auth::Basic {
                username: username.clone(),
                password: self.password.clone(),
            },
            None => Auth::None,
        }
    }

    pub async fn read_file(path: &Path) -> Result<Self, ConfigErr> {
        let bytes = tokio::fs::read(path).await.map_err(|e| {
            ConfigErr::ReadFileErr(ReadFileErr {
                path: path.to_path_buf(),
                source: e,
                trace: trace!(),
            })
        })?;
        serde_json::from_slice::<Configuration>(&bytes).map_err(|e| {
            ConfigErr::ParseFileErr(ParseFileErr {
                path: path.to_path_buf(),
                source: e,
                trace: trace!(),
            })
        })
    }
}

fn normalize_host(host: &str) -> String {
    host.trim_end_matches('/').to_string()
}

impl<'de> Deserialize<'de> for Configuration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct DeserializeConfiguration {
            host: Option<String>,
            timeout_ms: Option<u64>,
            connect_timeout_ms: Option<u64>,
            verify_ssl: Option<bool>,
            proxy: Option<String>,
            user_agent: Option<String>,
            username: Option<String>,
            password: Option<String>,
            access_token: Option<String>,
            default_headers: Option<BTreeMap<String, String>>,
            retry: Option<RetryPolicy>,
            log_level: Option<LogLevel>,
        }

        let default = Configuration::default();

        let result = match DeserializeConfiguration::deserialize(deserializer) {
            Ok(config) => config,
            Err(e) => {
                error!("Error deserializing configuration: {}", e);
                return Err(e);
            }
        };

        let host = result
            .host
            .unwrap_or_else(|| deserialize_warn!("configuration", "host", default.host));

        Ok(Configuration {
            host: normalize_host(&host),
            timeout: result
                .timeout_ms
                .map(Duration::from_millis)
                .unwrap_or_else(|| {
                    deserialize_warn!("configuration", "timeout_ms", default.timeout)
                }),
            connect_timeout: result
                .connect_timeout_ms
                .map(Duration::from_millis)
                .unwrap_or(default.connect_timeout),
            verify_ssl: result.verify_ssl.unwrap_or(default.verify_ssl),
            proxy: result.proxy,
            user_agent: result.user_agent.unwrap_or(default.user_agent),
            username: result.username,
            password: result.password.map(SecretString::from),
            access_token: result.access_token.map(SecretString::from),
            default_headers: result.default_headers.unwrap_or_default(),
            retry: result.retry.unwrap_or(default.retry),
            log_level: result.log_level.unwrap_or_else(|| {
                deserialize_warn!("configuration", "log_level", default.log_level)
            }),
        })
    }
}
