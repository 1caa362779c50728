//! Server configuration read from the environment.
//!
//! | variable              | default     |
//! |-----------------------|-------------|
//! | `PICKER_HOST`         | `127.0.0.1` |
//! | `PICKER_PORT`         | `8080`      |
//! | `PICKER_PROGRAMS_DIR` | `programs`  |
//! | `PICKER_OPEN_BROWSER` | `true`      |
//!
//! Values that fail to parse fall back to the default with a warning.

use log::warn;
use std::path::PathBuf;

/// Settings shared with every request handler through `web::Data`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    /// Directory holding the example programs served under `/examples`.
    pub programs_dir: PathBuf,
    /// Open the default browser on the server URL after startup.
    pub open_browser: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            programs_dir: PathBuf::from("programs"),
            open_browser: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let port = match lookup("PICKER_PORT") {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                warn!("Invalid PICKER_PORT {:?}, using {}", raw, defaults.port);
                defaults.port
            }),
            None => defaults.port,
        };

        let open_browser = match lookup("PICKER_OPEN_BROWSER") {
            Some(raw) => parse_flag(&raw).unwrap_or_else(|| {
                warn!(
                    "Invalid PICKER_OPEN_BROWSER {:?}, using {}",
                    raw, defaults.open_browser
                );
                defaults.open_browser
            }),
            None => defaults.open_browser,
        };

        Self {
            host: lookup("PICKER_HOST")
                .filter(|h| !h.trim().is_empty())
                .unwrap_or(defaults.host),
            port,
            programs_dir: lookup("PICKER_PROGRAMS_DIR")
                .filter(|d| !d.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.programs_dir),
            open_browser,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
