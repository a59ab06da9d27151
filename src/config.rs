use std::path::PathBuf;

use crate::error::AppError;

/// Server configuration read from environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Path of the live store document.
    pub store_path: PathBuf,
    /// Path of the read-only template document.
    pub template_path: PathBuf,
    /// Directory holding the static front end.
    pub assets_dir: PathBuf,
}

impl ServerConfig {
    /// Build the config from environment variables, with defaults suitable
    /// for a local checkout:
    ///
    /// - `PORT` (default `3000`)
    /// - `STORE_PATH` (default `data/resources.json`)
    /// - `TEMPLATE_PATH` (default `data/resources.template.json`)
    /// - `ASSETS_DIR` (default `public`)
    pub fn from_env() -> Result<Self, AppError> {
        let port = std::env::var("PORT")
            .ok()
            .map(|raw| {
                raw.parse::<u16>()
                    .map_err(|_| AppError::Internal(format!("Invalid PORT value '{raw}'")))
            })
            .transpose()?
            .unwrap_or(3000);

        Ok(Self {
            port,
            store_path: env_path("STORE_PATH", "data/resources.json"),
            template_path: env_path("TEMPLATE_PATH", "data/resources.template.json"),
            assets_dir: env_path("ASSETS_DIR", "public"),
        })
    }

    /// Build with explicit values (useful for testing).
    pub fn new(
        port: u16,
        store_path: PathBuf,
        template_path: PathBuf,
        assets_dir: PathBuf,
    ) -> Self {
        Self {
            port,
            store_path,
            template_path,
            assets_dir,
        }
    }
}

fn env_path(key: &str, default: &str) -> PathBuf {
    std::env::var(key).unwrap_or_else(|_| default.to_string()).into()
}
