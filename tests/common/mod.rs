//! Common test utilities for integration tests

use psl_sync::config::ResolvedConfig;
use std::fs;
use std::path::Path;

/// Builds an Atom feed body reporting the given update time for its newest entry.
#[allow(dead_code)]
pub fn atom_feed(updated: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <title>Recent Commits to list:master</title>
  <updated>{updated}</updated>
  <entry>
    <title>Add example.test suffix</title>
    <updated>{updated}</updated>
  </entry>
  <entry>
    <title>Older commit</title>
    <updated>2019-01-01T00:00:00Z</updated>
  </entry>
</feed>"#
    )
}

/// Sample suffix list body used as the downloaded document.
#[allow(dead_code)]
pub const SAMPLE_LIST: &str = "// This is a test suffix list\ncom\norg\nco.uk\n";

/// Writes a marker file with the given timestamp string.
#[allow(dead_code)]
pub fn write_marker(path: &Path, timestamp: &str) {
    fs::write(path, timestamp).unwrap();
}

/// Builds a config whose endpoints point at a mock server and whose files
/// live under the given directory.
#[allow(dead_code)]
pub fn test_config(server_uri: &str, dir: &Path) -> ResolvedConfig {
    let mut config = ResolvedConfig::default();
    config.data_file = dir.join("public_suffix_list.dat");
    config.marker_file = dir.join("public_suffix_list.updated");
    config.feed_url = format!("{server_uri}/commits/master.atom");
    config.list_url = format!("{server_uri}/list/public_suffix_list.dat");
    config.request_timeout_secs = 5;
    config
}
