//! Launching the streaming helper in a new terminal window
//!
//! `build_launch_command` turns a resolved plan into the OS-specific
//! invocation; a `Launcher` runs it.

use async_trait::async_trait;
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

use crate::models::{LaunchCommand, LaunchPlan, Platform};

/// Default streaming helper
pub const DEFAULT_STREAMER: &str = "peerflix";

/// Errors from launching the terminal
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("'{0}' not found. Install it first.")]
    NotFound(String),
    #[error("Failed to start '{program}': {source}")]
    StartFailed {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("'{program}' exited with {status}")]
    ExitStatus { program: String, status: String },
}

/// Build the invocation that opens `plan.terminal` running the streamer
pub fn build_launch_command(platform: Platform, plan: &LaunchPlan, streamer: &str) -> LaunchCommand {
    let flag = plan.player_flag();
    let inline = format!("{} {} {}", streamer, plan.magnet, flag);

    match platform {
        Platform::Windows => LaunchCommand {
            program: plan.terminal.clone(),
            args: vec!["/c".to_string(), inline],
        },
        Platform::MacOs => LaunchCommand {
            program: "open".to_string(),
            args: vec![
                "-a".to_string(),
                plan.terminal.clone(),
                streamer.to_string(),
                plan.magnet.clone(),
                flag,
            ],
        },
        Platform::Unix => LaunchCommand {
            program: plan.terminal.clone(),
            args: vec!["-e".to_string(), inline],
        },
    }
}

/// Runs a launch command
#[async_trait]
pub trait Launcher: Send + Sync {
    async fn launch(&self, command: &LaunchCommand) -> Result<(), LaunchError>;
}

/// Launcher spawning a real subprocess and waiting for it to exit
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessLauncher;

impl ProcessLauncher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Launcher for ProcessLauncher {
    async fn launch(&self, command: &LaunchCommand) -> Result<(), LaunchError> {
        debug!(%command, "launching");

        let status = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    LaunchError::NotFound(command.program.clone())
                } else {
                    LaunchError::StartFailed {
                        program: command.program.clone(),
                        source: e,
                    }
                }
            })?;

        if !status.success() {
            return Err(LaunchError::ExitStatus {
                program: command.program.clone(),
                status: status.to_string(),
            });
        }
        Ok(())
    }
}
