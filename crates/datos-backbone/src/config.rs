use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::{logger::LoggerConfig, Args};

#[derive(Deserialize, Debug)]
pub(crate) struct ApplicationConfig {
    pub port: u16,
    pub database: DatabaseConfig,
    pub cors: Option<CorsConfig>,
    #[serde(default)]
    pub log: LoggerConfig,
}

#[derive(Deserialize, Debug)]
pub struct DatabaseConfig {
    /// Full connection string, e.g. a Neon URL. Takes precedence over the fields below.
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub database_name: String,
    #[serde(default)]
    pub ssl_mode: SslMode,
    pub auth: DatabaseAuthConfig,
}

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    Disable,
    #[default]
    Prefer,
    Require,
}

impl SslMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SslMode::Disable => "disable",
            SslMode::Prefer => "prefer",
            SslMode::Require => "require",
        }
    }
}

#[derive(Deserialize, Debug)]
#[serde(tag = "method", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DatabaseAuthConfig {
    Credential { username: String, password: Option<String> },
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub(crate) enum CorsConfig {
    AllowAll,
    AllowList { origins: Vec<String> },
}

pub(super) fn load_config(args: Args) -> anyhow::Result<ApplicationConfig> {
    let config_file_path = if let Some(path_override) = args.config {
        path_override
    } else {
        default_config_file_path()?
    };

    let mut config: ApplicationConfig = Config::builder()
        .set_default("port", 5000)?
        .add_source(File::from(config_file_path).format(FileFormat::Toml))
        .add_source(Environment::with_prefix("DATOS").separator("__"))
        .set_override_option("port", args.port.map(|port| port.to_string()))?
        .set_override_option("database.url", args.database_url)?
        .set_override_option("database.host", args.database_host)?
        .set_override_option("database.port", args.database_port.map(|port| port.to_string()))?
        .set_override_option("database.database_name", args.database_name)?
        .set_override_option("database.auth.username", args.database_username)?
        .set_override_option("database.auth.password", args.database_password)?
        .build()?
        .try_deserialize()?;

    if let Some(frontend_url) = args.frontend_url {
        config.cors = with_frontend_origin(config.cors, frontend_url);
    }

    Ok(config)
}

fn default_config_file_path() -> anyhow::Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("datos")?;

    let user_config_dir = xdg_dirs.get_config_home();
    if !user_config_dir.exists() {
        std::fs::create_dir_all(&user_config_dir)?;
    }

    let config_file_path = user_config_dir.join("backbone_config.toml");
    if !config_file_path.exists() {
        write_default_config_file(&config_file_path)?;
    }

    Ok(config_file_path)
}

fn write_default_config_file(path: &Path) -> anyhow::Result<()> {
    let default_config_content = include_str!("../static/default_config.toml");
    std::fs::write(path, default_config_content)?;
    Ok(())
}

fn with_frontend_origin(cors: Option<CorsConfig>, frontend_url: String) -> Option<CorsConfig> {
    match cors {
        Some(CorsConfig::AllowAll) => Some(CorsConfig::AllowAll),
        Some(CorsConfig::AllowList { mut origins }) => {
            if !origins.contains(&frontend_url) {
                origins.push(frontend_url);
            }
            Some(CorsConfig::AllowList { origins })
        }
        None => Some(CorsConfig::AllowList { origins: vec![frontend_url] }),
    }
}
