// standard library
use std::fmt::Display;
use std::path::PathBuf;

// external crates
use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use tracing::{debug, error, info, trace, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn variants() -> Vec<LogLevel> {
        vec![
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warn,
            LogLevel::Error,
        ]
    }

    /// Parses a level name, ignoring case. Unknown names fall back to the default
    /// level.
    pub fn parse(s: &str) -> LogLevel {
        let default = LogLevel::default();
        match s.to_lowercase().as_str() {
            "trace" => LogLevel::Trace,
            "debug" => LogLevel::Debug,
            "info" => LogLevel::Info,
            "warn" | "warning" => LogLevel::Warn,
            "error" => LogLevel::Error,
            _ => {
                error!(
                    "Invalid log level: {}. Setting to default: '{}'",
                    s, default
                );
                default
            }
        }
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // unknown names fall back to the default, non-string values are errors
        match String::deserialize(deserializer) {
            Ok(s) => Ok(LogLevel::parse(&s)),
            Err(e) => {
                error!("Error deserializing log level: {:?}", e);
                Err(e)
            }
        }
    }
}

impl Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Debug, Default)]
pub struct Options {
    pub log_level: LogLevel,
    /// Write hourly-rolled log files here instead of stdout.
    pub log_dir: Option<PathBuf>,
}

/// Installs the global tracing subscriber. The returned guard flushes the file
/// writer on drop and must be held for as long as logging to a file is wanted.
pub fn init(options: Options) -> Option<WorkerGuard> {
    // respect RUST_LOG environment variable if set, otherwise use provided log level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(options.log_level.to_string()));

    match options.log_dir {
        None => {
            let subscriber = fmt()
                .with_env_filter(env_filter)
                .with_file(true)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true);
            let _ = tracing::subscriber::set_global_default(subscriber.finish());
            None
        }
        Some(log_dir) => {
            let file_appender =
                tracing_appender::rolling::hourly(log_dir, "deviceconnect-client.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let subscriber = fmt()
                .with_env_filter(env_filter)
                .with_writer(non_blocking)
                .with_file(true)
                .with_ansi(false)
                .with_line_number(true)
                .with_thread_ids(true)
                .with_thread_names(true);
            let _ = tracing::subscriber::set_global_default(subscriber.finish());
            Some(guard)
        }
    }
}
