//! Subscriber setup for storefront processes.

use core::str::FromStr;

use tracing_subscriber::EnvFilter;

/// Env var selecting the log output format (`json` or `compact`).
pub const LOG_FORMAT_ENV: &str = "STOREFRONT_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event, for log shipping.
    #[default]
    Json,
    /// Single-line human-readable events, for local runs.
    Compact,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(LogFormat::Json),
            "compact" | "pretty" | "text" => Ok(LogFormat::Compact),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

impl LogFormat {
    /// Format from `STOREFRONT_LOG_FORMAT`, falling back to JSON.
    pub fn from_env() -> Self {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(raw) => raw.parse().unwrap_or_else(|err| {
                eprintln!("{err}; falling back to json logs");
                LogFormat::Json
            }),
            Err(_) => LogFormat::default(),
        }
    }
}

/// Install the global subscriber in the format chosen by the environment.
///
/// Filtering follows `RUST_LOG` (default `info`). Repeated calls are no-ops.
pub fn init() {
    init_with(LogFormat::from_env(), "info");
}

/// Install the global subscriber with an explicit format and fallback filter.
///
/// Does nothing when a global subscriber is already installed.
pub fn init_with(format: LogFormat, default_directive: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    let _ = match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .with_timer(tracing_subscriber::fmt::time::SystemTime)
            .with_target(true)
            .try_init(),
        LogFormat::Compact => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .compact()
            .try_init(),
    };
}
