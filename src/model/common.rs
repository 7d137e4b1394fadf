//! Application configuration and shared state.

use clap::Parser;
use config::{Config, Environment};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::startup::LoggingConfig;

/// Command line arguments for the server
#[derive(Debug, Parser)]
#[command()]
struct Cli {
    #[arg(long = "db-url", env = "DATABASE_URL")]
    database_url: Option<String>,
    #[arg(short = 'p', long = "port")]
    port: Option<u16>,
}

/// Application configuration loaded from config files and environment
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    pub config: Config,
}

impl Configuration {
    pub fn new() -> Self {
        let args = Cli::parse();
        let mut config_builder = Config::builder()
            .add_source(
                Environment::with_prefix("carga")
                    .separator(".")
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("conf/application.yml"));

        if let Some(v) = args.database_url {
            config_builder = config_builder
                .set_override("db.url", v)
                .expect("Failed to set database URL override");
        }
        if let Some(v) = args.port {
            config_builder = config_builder
                .set_override("server.port", i64::from(v))
                .expect("Failed to set server port override");
        }

        let app_config = config_builder
            .build()
            .expect("Failed to build configuration - check conf/application.yml");

        Configuration { config: app_config }
    }

    pub fn server_address(&self) -> String {
        self.config
            .get_string("server.address")
            .unwrap_or("0.0.0.0".to_string())
    }

    pub fn server_port(&self) -> u16 {
        self.config.get_int("server.port").unwrap_or(5000) as u16
    }

    pub fn context_path(&self) -> String {
        self.config
            .get_string("server.contextPath")
            .unwrap_or("/api".to_string())
    }

    pub fn database_url(&self) -> String {
        self.config.get_string("db.url").unwrap_or_default()
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig {
            console_output: self.config.get_bool("logging.console").unwrap_or(true),
            file_logging: self.config.get_bool("logging.file").unwrap_or(false),
            log_dir: self
                .config
                .get_string("logging.dir")
                .unwrap_or("logs".to_string()),
            level: self
                .config
                .get_string("logging.level")
                .unwrap_or("info".to_string()),
        }
    }

    pub async fn database_connection(
        &self,
    ) -> std::result::Result<DatabaseConnection, Box<dyn std::error::Error>> {
        let max_connections = self
            .config
            .get_int("db.pool.config.maximumPoolSize")
            .unwrap_or(20) as u32;
        let min_connections = self
            .config
            .get_int("db.pool.config.minimumPoolSize")
            .unwrap_or(1) as u32;
        let connect_timeout = self
            .config
            .get_int("db.pool.config.connectionTimeout")
            .unwrap_or(30) as u64;
        let idle_timeout = self
            .config
            .get_int("db.pool.config.idleTimeout")
            .unwrap_or(10) as u64;
        let max_lifetime = self
            .config
            .get_int("db.pool.config.maxLifetime")
            .unwrap_or(1800) as u64;

        let mut opt = ConnectOptions::new(self.database_url());

        opt.max_connections(max_connections)
            .min_connections(min_connections)
            .connect_timeout(Duration::from_secs(connect_timeout))
            .idle_timeout(Duration::from_secs(idle_timeout))
            .max_lifetime(Duration::from_secs(max_lifetime));

        let database_connection: DatabaseConnection = Database::connect(opt).await?;

        Ok(database_connection)
    }
}

/// Application state shared across all handlers
#[derive(Debug, Clone)]
pub struct AppState {
    pub app_config: Configuration,
    pub database_connection: DatabaseConnection,
    pub context_path: String,
}

/// JSON error payload returned by the HTTP surface
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
}

impl ApiErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
