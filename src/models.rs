//! Data structures and types for FreeFlix
//!
//! Shared models used across the application organized by domain:
//! - **Search**: indexer results offered to the user
//! - **Platform**: per-OS candidate tables for players and terminals
//! - **Launch**: the resolved plan and the process invocation built from it

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// Search Models
// =============================================================================

/// A single torrent result returned by an indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Display name shown in the selection list
    pub name: String,
    /// Availability count reported by the indexer
    pub peers: u32,
    /// Detail page URL, scanned for a magnet anchor
    pub link: String,
    /// Magnet to use when the detail page has none
    pub magnet: Option<String>,
    /// Indexer that produced this item
    pub provider: String,
}

impl fmt::Display for SearchItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Build a magnet URI from an info hash and display name
pub fn magnet_from_hash(info_hash: &str, display_name: &str, trackers: &[&str]) -> String {
    let mut magnet = format!(
        "magnet:?xt=urn:btih:{}&dn={}",
        info_hash,
        urlencoding::encode(display_name)
    );
    for tracker in trackers {
        magnet.push_str("&tr=");
        magnet.push_str(&urlencoding::encode(tracker));
    }
    magnet
}

// =============================================================================
// Platform Models
// =============================================================================

/// Operating system family the launch logic dispatches on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and every other unix-like system
    Unix,
}

/// Candidate binaries for one platform, in priority order
#[derive(Debug)]
pub struct PlatformProfile {
    pub players: &'static [&'static str],
    pub terminals: &'static [&'static str],
    pub default_terminal: &'static str,
}

/// Player used when no candidate is found on the path
pub const DEFAULT_PLAYER: &str = "mpv";

static WINDOWS_PROFILE: PlatformProfile = PlatformProfile {
    players: &["mpv.exe", "vlc.exe"],
    terminals: &["cmd.exe"],
    default_terminal: "cmd.exe",
};

static MACOS_PROFILE: PlatformProfile = PlatformProfile {
    players: &["mpv", "vlc"],
    terminals: &["Terminal.app", "iTerm.app"],
    default_terminal: "Terminal.app",
};

static UNIX_PROFILE: PlatformProfile = PlatformProfile {
    players: &["mpv", "vlc"],
    terminals: &["kgx", "gnome-terminal", "xterm", "konsole", "terminal"],
    default_terminal: "xterm",
};

impl Platform {
    /// Platform of the running binary
    pub fn current() -> Self {
        if cfg!(target_os = "windows") {
            Platform::Windows
        } else if cfg!(target_os = "macos") {
            Platform::MacOs
        } else {
            Platform::Unix
        }
    }

    pub fn profile(&self) -> &'static PlatformProfile {
        match self {
            Platform::Windows => &WINDOWS_PROFILE,
            Platform::MacOs => &MACOS_PROFILE,
            Platform::Unix => &UNIX_PROFILE,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::MacOs => write!(f, "macos"),
            Platform::Unix => write!(f, "unix"),
        }
    }
}

// =============================================================================
// Launch Models
// =============================================================================

/// Errors from building a launch plan
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("Not a magnet link: {0}")]
    NotMagnet(String),
    #[error("Magnet link contains characters that would break the command line")]
    UnsafeMagnet,
}

/// Terminal, player and magnet resolved for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub terminal: String,
    pub player: String,
    pub magnet: String,
}

impl LaunchPlan {
    /// Create a plan, rejecting magnets that cannot sit inside a quoted command string
    pub fn new(
        terminal: impl Into<String>,
        player: impl Into<String>,
        magnet: impl Into<String>,
    ) -> Result<Self, PlanError> {
        let magnet = magnet.into();
        if !magnet.starts_with("magnet:") {
            return Err(PlanError::NotMagnet(magnet));
        }
        if magnet.contains(['"', '\n', '\r']) {
            return Err(PlanError::UnsafeMagnet);
        }

        Ok(Self {
            terminal: terminal.into(),
            player: player.into(),
            magnet,
        })
    }

    /// Streaming helper flag for the player (`mpv.exe` -> `--mpv`)
    pub fn player_flag(&self) -> String {
        let name = self
            .player
            .strip_suffix(".exe")
            .unwrap_or(&self.player);
        format!("--{}", name)
    }
}

/// A process invocation: program plus its argument list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl fmt::Display for LaunchCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, peers: u32) -> SearchItem {
        SearchItem {
            name: name.to_string(),
            peers,
            link: "https://example.org/torrent/1".to_string(),
            magnet: None,
            provider: "test".to_string(),
        }
    }

    #[test]
    fn test_search_item_display_is_name() {
        assert_eq!(item("Inception 2010 1080p", 5).to_string(), "Inception 2010 1080p");
    }

    #[test]
    fn test_magnet_from_hash() {
        let magnet = magnet_from_hash("ABC123", "Some Movie", &[]);
        assert_eq!(magnet, "magnet:?xt=urn:btih:ABC123&dn=Some%20Movie");

        let with_tracker = magnet_from_hash("ABC123", "x", &["udp://tracker.example:1337"]);
        assert!(with_tracker.ends_with("&tr=udp%3A%2F%2Ftracker.example%3A1337"));
    }

    #[test]
    fn test_platform_profiles() {
        let win = Platform::Windows.profile();
        assert_eq!(win.players, &["mpv.exe", "vlc.exe"]);
        assert_eq!(win.terminals, &["cmd.exe"]);
        assert_eq!(win.default_terminal, "cmd.exe");

        let mac = Platform::MacOs.profile();
        assert_eq!(mac.players, &["mpv", "vlc"]);
        assert_eq!(mac.terminals, &["Terminal.app", "iTerm.app"]);
        assert_eq!(mac.default_terminal, "Terminal.app");

        let unix = Platform::Unix.profile();
        assert_eq!(
            unix.terminals,
            &["kgx", "gnome-terminal", "xterm", "konsole", "terminal"]
        );
        assert_eq!(unix.default_terminal, "xterm");
    }

    #[test]
    fn test_current_platform_matches_target() {
        let platform = Platform::current();
        #[cfg(target_os = "linux")]
        assert_eq!(platform, Platform::Unix);
        #[cfg(target_os = "macos")]
        assert_eq!(platform, Platform::MacOs);
        #[cfg(target_os = "windows")]
        assert_eq!(platform, Platform::Windows);
        let _ = platform;
    }

    #[test]
    fn test_plan_rejects_non_magnet() {
        let err = LaunchPlan::new("xterm", "mpv", "https://example.org").unwrap_err();
        assert_eq!(err, PlanError::NotMagnet("https://example.org".to_string()));
    }

    #[test]
    fn test_plan_rejects_quotes() {
        let err = LaunchPlan::new("xterm", "mpv", "magnet:?xt=a\"; rm -rf ~").unwrap_err();
        assert_eq!(err, PlanError::UnsafeMagnet);
        assert!(LaunchPlan::new("xterm", "mpv", "magnet:?xt=a\nb").is_err());
    }

    #[test]
    fn test_player_flag_strips_exe() {
        let plan = LaunchPlan::new("cmd.exe", "vlc.exe", "magnet:?xt=abc").unwrap();
        assert_eq!(plan.player_flag(), "--vlc");

        let plan = LaunchPlan::new("xterm", "mpv", "magnet:?xt=abc").unwrap();
        assert_eq!(plan.player_flag(), "--mpv");
    }

    #[test]
    fn test_launch_command_display() {
        let cmd = LaunchCommand {
            program: "open".to_string(),
            args: vec!["-a".to_string(), "Terminal.app".to_string()],
        };
        assert_eq!(cmd.to_string(), "open -a Terminal.app");
    }
}
