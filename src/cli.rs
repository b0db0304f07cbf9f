//! CLI - Command Line Interface for FreeFlix
//!
//! A single interactive run. The only option skips the VPN step.
//!
//! # Examples
//!
//! ```bash
//! # Connect Mullvad, then search
//! freeflix
//!
//! # Search without touching the VPN
//! freeflix --no-mullvad
//! ```

use clap::Parser;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for a run (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success, including "no available torrents"
    Success = 0,
    /// General error (prompt failure, cancelled selection, bad input)
    Error = 1,
    /// Invalid configuration
    InvalidConfig = 2,
    /// Search or detail page request failed
    NetworkError = 3,
    /// Terminal or streaming helper failed to start
    LaunchFailed = 4,
    /// No magnet link could be found for the selection
    NoMagnet = 5,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// FreeFlix - search torrents and stream them with peerflix
///
/// Prompts for a title, lists results with enough peers and opens the
/// pick in mpv or VLC through peerflix in a new terminal window.
#[derive(Parser, Debug)]
#[command(
    name = "freeflix",
    version,
    about = "Search torrents and stream them with peerflix in mpv or VLC",
    after_help = "EXAMPLES:\n\
                  freeflix                 Connect Mullvad, then search\n\
                  freeflix --no-mullvad    Search without connecting the VPN\n\n\
                  Set RUST_LOG=debug for diagnostics."
)]
pub struct Cli {
    /// Skip connecting Mullvad VPN before searching
    #[arg(long = "no-mullvad")]
    pub no_mullvad: bool,
}

impl Cli {
    /// Whether the VPN step should run
    pub fn use_vpn(&self) -> bool {
        !self.no_mullvad
    }
}

// =============================================================================
// Output Helpers
// =============================================================================

/// User-facing messages, written to stderr
pub struct Output {
    pub quiet: bool,
}

impl Output {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl std::fmt::Display, code: ExitCode) -> ExitCode {
        if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
