//! Run orchestration
//!
//! One linear pass: cleanup, VPN, query, search, select, resolve, probe,
//! launch. Every external capability comes in through a trait object so the
//! whole sequence runs against fakes in tests.

use std::path::PathBuf;
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::cli::{ExitCode, Output};
use crate::config::Config;
use crate::models::{LaunchCommand, LaunchPlan, Platform, PlanError, SearchItem};
use crate::prompt::{PromptError, Prompter};
use crate::search::{filter_available, SearchBackend, SearchError};
use crate::stream::cleanup::remove_stream_dir;
use crate::stream::{
    build_launch_command, resolve_magnet, resolve_player, resolve_terminal, BinaryProbe,
    LaunchError, Launcher, MagnetError, PageFetcher,
};
use crate::vpn::VpnClient;

/// Errors that end a run
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Search query cannot be empty")]
    EmptyQuery,
    #[error(transparent)]
    Prompt(#[from] PromptError),
    #[error("Search failed: {0}")]
    Search(#[from] SearchError),
    #[error(transparent)]
    Magnet(#[from] MagnetError),
    #[error(transparent)]
    Plan(#[from] PlanError),
    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::EmptyQuery | AppError::Prompt(_) | AppError::Plan(_) => ExitCode::Error,
            AppError::Search(_) | AppError::Magnet(MagnetError::Fetch(_)) => ExitCode::NetworkError,
            AppError::Magnet(MagnetError::NotFound(_)) => ExitCode::NoMagnet,
            AppError::Launch(_) => ExitCode::LaunchFailed,
        }
    }
}

/// How a run that did not fail ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Nothing survived the peer filter
    NoResults,
    /// The terminal was launched with this command
    Launched(LaunchCommand),
}

/// Per-run settings
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub use_vpn: bool,
    pub min_peers: u32,
    pub streamer: String,
    pub temp_dir: PathBuf,
    pub platform: Platform,
}

impl RunOptions {
    pub fn from_config(config: &Config, use_vpn: bool) -> Self {
        Self {
            use_vpn,
            min_peers: config.min_peers,
            streamer: config.streamer.clone(),
            temp_dir: config.temp_dir(),
            platform: Platform::current(),
        }
    }
}

/// Capabilities a run is wired with
pub struct App<'a> {
    pub search: &'a dyn SearchBackend,
    pub fetcher: &'a dyn PageFetcher,
    pub vpn: &'a dyn VpnClient,
    pub probe: &'a dyn BinaryProbe,
    pub launcher: &'a dyn Launcher,
    pub output: &'a Output,
}

impl App<'_> {
    /// Run one search-select-launch cycle
    ///
    /// `prompter` is the run's input resource; the caller owns it, so it is
    /// released when the caller's scope ends whatever this returns.
    pub async fn run(
        &self,
        prompter: &mut dyn Prompter,
        opts: &RunOptions,
    ) -> Result<RunOutcome, AppError> {
        if let Err(e) = remove_stream_dir(&opts.temp_dir).await {
            warn!(dir = %opts.temp_dir.display(), error = %e, "could not clean stream directory");
        }

        if opts.use_vpn {
            self.connect_vpn().await;
        }

        let query = prompter.read_query()?;
        let query = query.trim();
        if query.is_empty() {
            return Err(AppError::EmptyQuery);
        }

        let Some(selected) = self.search_and_select(prompter, query, opts.min_peers).await? else {
            self.output.info("No available torrents found :(");
            return Ok(RunOutcome::NoResults);
        };
        info!(name = %selected.name, provider = %selected.provider, "selected");

        let magnet = resolve_magnet(self.fetcher, &selected.link, selected.magnet.as_deref()).await?;

        let terminal = resolve_terminal(self.probe, opts.platform).await;
        let player = resolve_player(self.probe, opts.platform).await;
        debug!(%terminal, %player, platform = %opts.platform, "environment resolved");

        let plan = LaunchPlan::new(terminal, player, magnet)?;
        let command = build_launch_command(opts.platform, &plan, &opts.streamer);

        self.output
            .info(format!("Streaming {} in {}...", selected.name, plan.player));
        self.launcher.launch(&command).await?;

        Ok(RunOutcome::Launched(command))
    }

    /// Best-effort VPN connect; failure is reported and ignored
    async fn connect_vpn(&self) {
        match self.vpn.connect().await {
            Ok(()) => self.output.info("Mullvad enabled!"),
            Err(e) => {
                warn!(error = %e, "VPN connect failed, continuing without it");
                self.output.info("Mullvad not found, skipping...");
            }
        }
    }

    /// Search, drop poorly seeded results, let the user pick one
    async fn search_and_select(
        &self,
        prompter: &mut dyn Prompter,
        query: &str,
        min_peers: u32,
    ) -> Result<Option<SearchItem>, AppError> {
        let results = self.search.search(query).await?;
        let total = results.len();
        let mut choices = filter_available(results, min_peers);
        debug!(query, total, available = choices.len(), "search filtered");

        if choices.is_empty() {
            return Ok(None);
        }

        let index = prompter.select(&choices)?;
        if index >= choices.len() {
            return Err(PromptError::Cancelled.into());
        }
        Ok(Some(choices.swap_remove(index)))
    }
}
