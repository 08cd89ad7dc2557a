use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod application;
mod bootstrap;
mod config;
mod database;
mod domain;
mod logger;
mod server;

#[derive(Parser, Debug, Default)]
#[command(version, about)]
pub(crate) struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,
    /// Sets a port to start the datos server
    #[arg(short, long, value_name = "PORT", env = "PORT", global = true)]
    pub port: Option<u16>,
    /// Sets a full database connection string, taking precedence over host/port/name/credentials
    #[arg(long, env = "DATABASE_URL", hide_env_values = true, global = true)]
    pub database_url: Option<String>,
    /// Sets a database host
    #[arg(long, env = "DB_HOST", global = true)]
    pub database_host: Option<String>,
    /// Sets a database port
    #[arg(long, env = "DB_PORT", global = true)]
    pub database_port: Option<u16>,
    /// Sets a database name
    #[arg(long, env = "DB_NAME", global = true)]
    pub database_name: Option<String>,
    /// Sets a database username
    #[arg(long, env = "DB_USER", global = true)]
    pub database_username: Option<String>,
    /// Sets a database password
    #[arg(long, env = "DB_PASSWORD", hide_env_values = true, global = true)]
    pub database_password: Option<String>,
    /// Adds a frontend origin to the CORS allow list
    #[arg(long, env = "FRONTEND_URL", global = true)]
    pub frontend_url: Option<String>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Command {
    /// Runs pending migrations and starts the HTTP API server
    #[default]
    Serve,
    /// Creates the datos table and seeds example rows when it is empty
    InitDb,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let command = args.command.unwrap_or_default();

    let app_config = config::load_config(args)?;

    logger::init_logger(&app_config.log);

    match command {
        Command::Serve => {
            let application = application::init(&app_config).await?;
            server::run(application, (&app_config).into()).await?;
        }
        Command::InitDb => bootstrap::run(&app_config).await?,
    }

    Ok(())
}
