//! FreeFlix - search torrents and stream them with peerflix
//!
//! Prompts for a title, lists indexer results with enough peers, resolves the
//! chosen result's magnet and opens it through peerflix in mpv or VLC inside
//! a new terminal window. Connects Mullvad first unless told not to.
//!
//! # Usage
//!
//! ```bash
//! freeflix
//! freeflix --no-mullvad
//! RUST_LOG=freeflix=debug freeflix
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use freeflix::app::{App, RunOptions, RunOutcome};
use freeflix::cli::{Cli, ExitCode, Output};
use freeflix::config::Config;
use freeflix::prompt::TerminalPrompter;
use freeflix::search::Searcher;
use freeflix::stream::{HttpFetcher, PathProbe, ProcessLauncher};
use freeflix::vpn::MullvadCli;

#[tokio::main]
async fn main() -> Result<std::process::ExitCode> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = run(cli).await;
    Ok(exit_code.into())
}

/// Wire the real capabilities and run once
async fn run(cli: Cli) -> ExitCode {
    let output = Output::new(false);
    let config = Config::load();

    let searcher = match Searcher::from_config(&config) {
        Ok(searcher) => searcher,
        Err(e) => return output.error(e, ExitCode::InvalidConfig),
    };
    let fetcher = HttpFetcher::new(config.http_timeout());
    let vpn = MullvadCli::with_command(config.vpn_command.clone());
    let probe = PathProbe::new();
    let launcher = ProcessLauncher::new();

    let app = App {
        search: &searcher,
        fetcher: &fetcher,
        vpn: &vpn,
        probe: &probe,
        launcher: &launcher,
        output: &output,
    };
    let opts = RunOptions::from_config(&config, cli.use_vpn());

    // Input stays open for this scope only, on every exit path
    let mut prompter = TerminalPrompter::new();
    match app.run(&mut prompter, &opts).await {
        Ok(RunOutcome::NoResults) => ExitCode::Success,
        Ok(RunOutcome::Launched(command)) => {
            tracing::debug!(%command, "streamer exited");
            ExitCode::Success
        }
        Err(e) => output.error(&e, e.exit_code()),
    }
}
