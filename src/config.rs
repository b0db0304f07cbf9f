//! Configuration for FreeFlix
//!
//! Optional, read-only settings file at ~/.config/freeflix/config.toml
//! (or the path in `FREEFLIX_CONFIG`). Every field has a default, so a
//! missing file is the normal case. Nothing is ever written back.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "FREEFLIX_CONFIG";

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Results need strictly more peers than this to be offered
    pub min_peers: u32,
    /// Indexers to query, in order
    pub providers: Vec<String>,
    /// Streaming helper launched in the new terminal
    pub streamer: String,
    /// VPN client binary (called with `connect`)
    pub vpn_command: String,
    /// Timeout for search and detail page requests
    pub http_timeout_secs: u64,
    /// Working directory of the streaming helper, wiped at startup
    pub temp_dir: Option<PathBuf>,
    /// Base URL of the apibay JSON API
    pub apibay_url: String,
    /// Base URL of the 1337x site
    pub x1337_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_peers: 2,
            providers: vec!["apibay".to_string(), "1337x".to_string()],
            streamer: "peerflix".to_string(),
            vpn_command: "mullvad".to_string(),
            http_timeout_secs: 30,
            temp_dir: None,
            apibay_url: "https://apibay.org".to_string(),
            x1337_url: "https://1337x.to".to_string(),
        }
    }
}

impl Config {
    /// Get config file path (env override, else ~/.config/freeflix/config.toml)
    pub fn path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|p| p.join("freeflix").join("config.toml"))
    }

    /// Load config from the default location, or defaults if absent or invalid
    pub fn load() -> Self {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Self::default(),
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Self {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Self::default();
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "could not read config, using defaults");
                return Self::default();
            }
        };

        Self::parse(&text).unwrap_or_else(|e| {
            warn!(path = %path.display(), error = %e, "invalid config, using defaults");
            Self::default()
        })
    }

    /// Parse TOML text; unspecified fields keep their defaults
    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Directory removed before each run
    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("torrent-stream"))
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.min_peers, 2);
        assert_eq!(config.providers, vec!["apibay", "1337x"]);
        assert_eq!(config.streamer, "peerflix");
        assert_eq!(config.vpn_command, "mullvad");
        assert_eq!(config.http_timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_override() {
        let config = Config::parse("min_peers = 10\nstreamer = \"webtorrent\"\n").unwrap();
        assert_eq!(config.min_peers, 10);
        assert_eq!(config.streamer, "webtorrent");
        // untouched fields keep defaults
        assert_eq!(config.vpn_command, "mullvad");
        assert_eq!(config.providers.len(), 2);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(Config::parse("min_peers = \"many\"").is_err());
    }

    #[test]
    fn test_temp_dir_default_and_override() {
        let config = Config::default();
        assert!(config.temp_dir().ends_with("torrent-stream"));

        let config = Config::parse("temp_dir = \"/var/tmp/ts\"").unwrap();
        assert_eq!(config.temp_dir(), PathBuf::from("/var/tmp/ts"));
    }

    #[test]
    fn test_load_from_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("nope.toml"));
        assert_eq!(config.min_peers, 2);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "providers = [\"apibay\"]\n").unwrap();
        let config = Config::load_from(&path);
        assert_eq!(config.providers, vec!["apibay"]);
    }

    #[test]
    fn test_load_from_invalid_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "this is not toml [").unwrap();
        let config = Config::load_from(&path);
        assert_eq!(config.streamer, "peerflix");
    }
}
