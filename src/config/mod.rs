//! Configuration module for the event design backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::errors::AppError;
use crate::store::StoreOptions;

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite file holding the durable state slot
    pub db_path: PathBuf,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
    /// Slot key the store snapshot is written under
    pub storage_key: String,
    /// Persist assets and comments too, not just projects and the selection
    pub persist_all: bool,
    /// Clear the current project when it is deleted
    pub clear_current_on_delete: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let db_path = env::var("EVENT_DESIGN_DB_PATH")
            .unwrap_or_else(|_| "./data/app.sqlite".to_string())
            .into();

        let bind_addr = env::var("EVENT_DESIGN_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let bind_addr = bind_addr.parse().map_err(|_| {
            AppError::Config(format!("Invalid EVENT_DESIGN_BIND_ADDR: {}", bind_addr))
        })?;

        let log_level = env::var("EVENT_DESIGN_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_format = match env::var("EVENT_DESIGN_LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("text") | Err(_) => LogFormat::Text,
            Ok(other) => {
                return Err(AppError::Config(format!(
                    "Invalid EVENT_DESIGN_LOG_FORMAT: {}",
                    other
                )))
            }
        };

        let storage_key =
            env::var("EVENT_DESIGN_STORAGE_KEY").unwrap_or_else(|_| "project-storage".to_string());

        Ok(Self {
            db_path,
            bind_addr,
            log_level,
            log_format,
            storage_key,
            persist_all: env_flag("EVENT_DESIGN_PERSIST_ALL"),
            clear_current_on_delete: env_flag("EVENT_DESIGN_CLEAR_CURRENT_ON_DELETE"),
        })
    }

    pub fn store_options(&self) -> StoreOptions {
        StoreOptions {
            clear_current_on_delete: self.clear_current_on_delete,
            persist_all_collections: self.persist_all,
        }
    }
}

fn env_flag(name: &str) -> bool {
    env::var(name)
        .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(false)
}
