//! Application Configuration
//!
//! Read once at startup from the environment, after loading `.env` if present.
//!
//! | Env Var                | Default                    |
//! |------------------------|----------------------------|
//! | `RAWG_API_KEY`         | unset (search disabled)    |
//! | `RAWG_BASE_URL`        | `https://api.rawg.io/api`  |
//! | `GAME_SHELF_DB`        | `game_shelf.db`            |
//! | `GAME_SHELF_LOG_LEVEL` | `info`                     |

use std::path::{Path, PathBuf};
use std::str::FromStr;

pub const DEFAULT_RAWG_BASE_URL: &str = "https://api.rawg.io/api";
pub const DEFAULT_DB_FILE: &str = "game_shelf.db";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub rawg_api_key: Option<String>,
    pub rawg_base_url: String,
    /// Relative paths resolve against the app data dir
    pub db_file: PathBuf,
    pub log_level: log::LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let log_level = match get("GAME_SHELF_LOG_LEVEL") {
            Some(raw) => log::LevelFilter::from_str(&raw).unwrap_or_else(|_| {
                eprintln!("Unknown GAME_SHELF_LOG_LEVEL {:?}, using info", raw);
                log::LevelFilter::Info
            }),
            None => log::LevelFilter::Info,
        };

        Self {
            rawg_api_key: get("RAWG_API_KEY"),
            rawg_base_url: get("RAWG_BASE_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_RAWG_BASE_URL.to_string()),
            db_file: get("GAME_SHELF_DB")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE)),
            log_level,
        }
    }

    pub fn db_path(&self, app_data_dir: &Path) -> PathBuf {
        if self.db_file.is_absolute() {
            self.db_file.clone()
        } else {
            app_data_dir.join(&self.db_file)
        }
    }
}
