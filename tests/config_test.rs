//! Configuration Tests
//!
//! Settings file values flowing into the provider set and run options.

use freeflix::app::RunOptions;
use freeflix::config::Config;
use freeflix::search::{SearchBackend, SearchError, Searcher};
use mockito::{Matcher, Server};
use std::io::Write;

fn write_config(dir: &tempfile::TempDir, text: &str) -> std::path::PathBuf {
    let path = dir.path().join("config.toml");
    let mut file = std::fs::File::create(&path).unwrap();
    file.write_all(text.as_bytes()).unwrap();
    path
}

#[tokio::test]
async fn test_config_file_drives_searcher() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/q.php")
        .match_query(Matcher::UrlEncoded("q".into(), "alien".into()))
        .with_status(200)
        .with_body(
            r#"[{"id":"9","name":"Alien.1979","info_hash":"ABCDEF0123456789ABCDEF0123456789ABCDEF01","seeders":"12"}]"#,
        )
        .create_async()
        .await;

    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        &dir,
        &format!("providers = [\"tpb\"]\napibay_url = \"{}\"\n", server.url()),
    );

    let config = Config::load_from(&path);
    let searcher = Searcher::from_config(&config).unwrap();
    assert_eq!(searcher.provider_names(), vec!["apibay"]);

    let items = searcher.search("alien").await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].peers, 12);
}

#[test]
fn test_unknown_provider_is_a_config_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "providers = [\"apibay\", \"rarbg\"]\n");

    let config = Config::load_from(&path);
    let err = Searcher::from_config(&config).err().unwrap();
    assert!(matches!(err, SearchError::UnknownProvider(name) if name == "rarbg"));
}

#[test]
fn test_options_follow_config() {
    let dir = tempfile::tempdir().unwrap();
    let stream_dir = dir.path().join("streams");
    let path = write_config(
        &dir,
        &format!(
            "min_peers = 10\nstreamer = \"webtorrent\"\ntemp_dir = {:?}\n",
            stream_dir.to_string_lossy()
        ),
    );

    let config = Config::load_from(&path);
    let opts = RunOptions::from_config(&config, true);
    assert!(opts.use_vpn);
    assert_eq!(opts.min_peers, 10);
    assert_eq!(opts.streamer, "webtorrent");
    assert_eq!(opts.temp_dir, stream_dir);
}

#[test]
fn test_broken_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(&dir, "min_peers = \"lots\"\n[[[\n");

    let config = Config::load_from(&path);
    assert_eq!(config.min_peers, 2);
    assert_eq!(config.providers, vec!["apibay", "1337x"]);
}
