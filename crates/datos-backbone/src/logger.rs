use serde::Deserialize;
use tracing_subscriber::{fmt::SubscriberBuilder, EnvFilter};

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub(crate) struct LoggerConfig {
    pub format: LoggerFormat,
    pub level: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self { format: LoggerFormat::default(), level: "info".to_owned() }
    }
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub(crate) enum LoggerFormat {
    #[default]
    Json,
    Compact,
}

/// `RUST_LOG` takes precedence over the configured level.
pub(super) fn init_logger(config: &LoggerConfig) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));
    let builder = SubscriberBuilder::default().with_env_filter(filter);

    match config.format {
        LoggerFormat::Json => builder.json().init(),
        LoggerFormat::Compact => builder.compact().init(),
    }
}
