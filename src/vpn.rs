//! VPN connection via the Mullvad CLI
//!
//! Best effort: the orchestrator reports a failure and carries on.

use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;
use tracing::debug;

/// Errors from the VPN client
#[derive(Debug, Error)]
pub enum VpnError {
    #[error("VPN client '{0}' not found")]
    NotFound(String),
    #[error("Failed to run VPN client: {0}")]
    Io(#[from] std::io::Error),
    #[error("VPN client exited with {0}")]
    Failed(String),
}

/// Establishes a VPN connection
#[async_trait]
pub trait VpnClient: Send + Sync {
    async fn connect(&self) -> Result<(), VpnError>;
}

/// `mullvad connect` with output suppressed
pub struct MullvadCli {
    command: String,
    /// Pause after a successful connect so the tunnel is up before searching
    settle: Duration,
}

impl MullvadCli {
    pub fn new() -> Self {
        Self::with_command("mullvad")
    }

    /// Use a different client binary
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            settle: Duration::from_secs(1),
        }
    }

    pub fn settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }
}

impl Default for MullvadCli {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VpnClient for MullvadCli {
    async fn connect(&self) -> Result<(), VpnError> {
        let status = Command::new(&self.command)
            .arg("connect")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    VpnError::NotFound(self.command.clone())
                } else {
                    VpnError::Io(e)
                }
            })?;

        if !status.success() {
            return Err(VpnError::Failed(status.to_string()));
        }

        debug!(command = %self.command, "VPN connected");
        tokio::time::sleep(self.settle).await;
        Ok(())
    }
}
