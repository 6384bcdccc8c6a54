//! Kiosk configuration, loaded from `kiosk.ron` in the working
//! directory (or a path given as the first CLI argument).

use std::fs;
use std::path::Path;

use kiosk_logging::{kiosk_info, kiosk_warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILENAME: &str = "kiosk.ron";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KioskConfig {
    /// Joke endpoint; queried with a `category` parameter.
    pub joke_url: String,
    /// Rating log endpoint; receives the JSON rating record.
    pub log_url: String,
    /// Leaderboard endpoint; a redirecting frontend is expected.
    pub ranking_url: String,
    /// Disables TLS certificate verification. Only for development
    /// against endpoints with broken certificates; leave off otherwise.
    pub accept_invalid_certs: bool,
    /// Delay between retry attempts on the joke and logging paths.
    pub retry_delay_ms: u64,
    pub request_timeout_secs: u64,
    /// strftime format for the "last updated" label on the joke screen.
    pub time_format: String,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            joke_url: "https://hook.example.com/joke".to_string(),
            log_url: "https://hook.example.com/log".to_string(),
            ranking_url: "https://script.example.com/ranking".to_string(),
            accept_invalid_certs: false,
            retry_delay_ms: 2000,
            request_timeout_secs: 30,
            time_format: "%H:%M".to_string(),
        }
    }
}

/// Loads the config, falling back to defaults when the file is missing
/// or unreadable. A bad config never stops the kiosk from starting.
pub fn load(path: Option<&Path>) -> KioskConfig {
    let path = path.unwrap_or(Path::new(CONFIG_FILENAME));
    let content = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            kiosk_info!("No config at {:?}; using defaults", path);
            return KioskConfig::default();
        }
        Err(err) => {
            kiosk_warn!("Failed to read config from {:?}: {}", path, err);
            return KioskConfig::default();
        }
    };

    match ron::from_str(&content) {
        Ok(config) => {
            kiosk_info!("Loaded config from {:?}", path);
            config
        }
        Err(err) => {
            kiosk_warn!("Failed to parse config from {:?}: {}", path, err);
            KioskConfig::default()
        }
    }
}
