//! Environment probing - which player and terminal to launch
//!
//! Walks the platform's candidate list in priority order and returns the
//! first binary found on the system, falling back to a fixed default.

use async_trait::async_trait;
use std::path::PathBuf;
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

use crate::models::{Platform, DEFAULT_PLAYER};

/// Checks whether an executable can be resolved on this system
#[async_trait]
pub trait BinaryProbe: Send + Sync {
    /// Never errors; a missing binary is simply `false`
    async fn is_available(&self, name: &str) -> bool;
}

/// Probe backed by the system `which` (or `where` on Windows)
#[derive(Debug, Clone, Copy, Default)]
pub struct PathProbe;

impl PathProbe {
    pub fn new() -> Self {
        Self
    }

    fn lookup_command() -> &'static str {
        if cfg!(target_os = "windows") {
            "where"
        } else {
            "which"
        }
    }

    /// Locations a macOS app bundle may be installed in
    fn app_bundle_dirs() -> Vec<PathBuf> {
        let mut dirs = vec![
            PathBuf::from("/Applications"),
            PathBuf::from("/System/Applications"),
            PathBuf::from("/System/Applications/Utilities"),
        ];
        if let Some(home) = dirs::home_dir() {
            dirs.push(home.join("Applications"));
        }
        dirs
    }
}

#[async_trait]
impl BinaryProbe for PathProbe {
    async fn is_available(&self, name: &str) -> bool {
        if name.ends_with(".app")
            && Self::app_bundle_dirs()
                .iter()
                .any(|dir| dir.join(name).exists())
        {
            return true;
        }

        Command::new(Self::lookup_command())
            .arg(name)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map(|s| s.success())
            .unwrap_or(false)
    }
}

/// First candidate whose probe succeeds, checked one at a time in order
pub async fn first_available(
    probe: &dyn BinaryProbe,
    candidates: &[&str],
    default: &str,
) -> String {
    for candidate in candidates {
        let found = probe.is_available(candidate).await;
        debug!(candidate, found, "probed");
        if found {
            return candidate.to_string();
        }
    }
    debug!(default, "no candidate found, using default");
    default.to_string()
}

/// Media player binary for the platform
pub async fn resolve_player(probe: &dyn BinaryProbe, platform: Platform) -> String {
    first_available(probe, platform.profile().players, DEFAULT_PLAYER).await
}

/// Terminal emulator binary for the platform
pub async fn resolve_terminal(probe: &dyn BinaryProbe, platform: Platform) -> String {
    let profile = platform.profile();
    first_available(probe, profile.terminals, profile.default_terminal).await
}
