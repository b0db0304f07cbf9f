//! FreeFlix - search torrents and stream them with peerflix
//!
//! Search torrent indexers, pick a result, resolve its magnet link and open
//! it through peerflix in mpv or VLC inside a new terminal window.
//!
//! # Modules
//!
//! - `models` - Search results, platform tables, launch plans
//! - `config` - Read-only settings file
//! - `search` - Indexer providers and peer filtering
//! - `stream` - Player/terminal probing, magnet resolution, launching
//! - `vpn` - Mullvad connection
//! - `prompt` - Query and selection prompts
//! - `app` - Run orchestration
//! - `cli` - Arguments, exit codes, user messages

pub mod app;
pub mod cli;
pub mod config;
pub mod models;
pub mod prompt;
pub mod search;
pub mod stream;
pub mod vpn;

// Re-export commonly used types
pub use models::{LaunchCommand, LaunchPlan, Platform, SearchItem};

pub use app::{App, AppError, RunOptions, RunOutcome};
pub use search::{SearchBackend, Searcher};
