//! Launch Pipeline Tests
//!
//! Probe results flowing into a launch plan and the per-platform command.

use async_trait::async_trait;
use freeflix::models::{LaunchPlan, Platform, PlanError};
use freeflix::stream::launch::DEFAULT_STREAMER;
use freeflix::stream::{build_launch_command, resolve_player, resolve_terminal, BinaryProbe};

const MAGNET: &str = "magnet:?xt=urn:btih:deadbeef&dn=Big+Buck+Bunny";

/// Probe that reports a fixed set of installed binaries
struct Installed(&'static [&'static str]);

#[async_trait]
impl BinaryProbe for Installed {
    async fn is_available(&self, name: &str) -> bool {
        self.0.iter().any(|p| *p == name)
    }
}

async fn command_for(platform: Platform, installed: &'static [&'static str]) -> Vec<String> {
    let probe = Installed(installed);
    let terminal = resolve_terminal(&probe, platform).await;
    let player = resolve_player(&probe, platform).await;
    let plan = LaunchPlan::new(terminal, player, MAGNET).unwrap();
    let command = build_launch_command(platform, &plan, DEFAULT_STREAMER);

    let mut line = vec![command.program];
    line.extend(command.args);
    line
}

#[tokio::test]
async fn test_linux_with_gnome_terminal_and_vlc() {
    let line = command_for(Platform::Unix, &["gnome-terminal", "xterm", "vlc"]).await;
    assert_eq!(
        line,
        vec![
            "gnome-terminal".to_string(),
            "-e".to_string(),
            format!("peerflix {} --vlc", MAGNET),
        ]
    );
}

#[tokio::test]
async fn test_macos_with_iterm_and_mpv() {
    let line = command_for(Platform::MacOs, &["iTerm.app", "mpv", "vlc"]).await;
    assert_eq!(
        line,
        vec!["open", "-a", "iTerm.app", "peerflix", MAGNET, "--mpv"]
    );
}

#[tokio::test]
async fn test_windows_flag_has_no_extension() {
    let line = command_for(Platform::Windows, &["cmd.exe", "vlc.exe"]).await;
    assert_eq!(line[0], "cmd.exe");
    assert_eq!(line[1], "/c");
    assert_eq!(line[2], format!("peerflix {} --vlc", MAGNET));
}

#[tokio::test]
async fn test_bare_system_uses_defaults() {
    let line = command_for(Platform::Unix, &[]).await;
    assert_eq!(line[0], "xterm");
    assert!(line[2].ends_with("--mpv"));
}

#[test]
fn test_plan_rejects_unsafe_magnets() {
    assert!(matches!(
        LaunchPlan::new("xterm", "mpv", "https://example.org/file.torrent"),
        Err(PlanError::NotMagnet(_))
    ));
    assert_eq!(
        LaunchPlan::new("xterm", "mpv", "magnet:?xt=urn:btih:a\" && rm -rf ~ \""),
        Err(PlanError::UnsafeMagnet)
    );
    assert_eq!(
        LaunchPlan::new("xterm", "mpv", "magnet:?xt=urn:btih:a\nrm -rf ~"),
        Err(PlanError::UnsafeMagnet)
    );
}
