//! Streaming infrastructure
//!
//! - Probe: which media player and terminal emulator are installed
//! - Launch: peerflix invocation inside a new terminal window
//! - Magnet: magnet extraction from detail pages
//! - Cleanup: peerflix working directory removal

pub mod cleanup;
pub mod launch;
pub mod magnet;
pub mod probe;

pub use launch::{build_launch_command, LaunchError, Launcher, ProcessLauncher};
pub use magnet::{resolve_magnet, HttpFetcher, MagnetError, PageFetcher};
pub use probe::{resolve_player, resolve_terminal, BinaryProbe, PathProbe};
