//! Removal of the streaming helper's working directory
//!
//! peerflix keeps partial downloads under `<tmp>/torrent-stream`; stale
//! data from a previous run is wiped before starting a new one.

use std::io;
use std::path::Path;
use tracing::debug;

/// Recursively remove `dir`. A missing directory counts as success.
pub async fn remove_stream_dir(dir: &Path) -> io::Result<()> {
    match tokio::fs::remove_dir_all(dir).await {
        Ok(()) => {
            debug!(dir = %dir.display(), "removed stream directory");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e),
    }
}
