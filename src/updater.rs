use crate::config::ResolvedConfig;
use crate::constants::MARKER_TIMESTAMP_FORMAT;
use crate::downloader::download_list;
use crate::errors::{AppError, AppResult};
use crate::feed;
use chrono::{NaiveDateTime, Utc};
use std::path::Path;
use tokio::fs;
use tracing::{info, warn};

/// Result of a sync attempt.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SyncOutcome {
    /// The remote list was newer; it was downloaded and the marker advanced.
    Updated,
    /// The local copy is current; nothing was written.
    UpToDate,
    /// The remote update time could not be determined; nothing was written.
    RemoteUnavailable,
    /// An update was needed but the download failed; the marker was left
    /// untouched so the next run retries.
    DownloadFailed,
}

impl SyncOutcome {
    /// Returns a human-readable name for the outcome.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Updated => "updated",
            Self::UpToDate => "up to date",
            Self::RemoteUnavailable => "remote unavailable",
            Self::DownloadFailed => "download failed",
        }
    }
}

/// Updates the local suffix list if the remote copy is newer.
///
/// Reads the local marker, fetches the remote update time from the commit
/// feed, and downloads the list only when the remote time is strictly newer.
/// After a successful download the marker is rewritten to the current
/// wall-clock UTC time (not the remote's reported time).
///
/// The marker rewrite is gated on the download succeeding: a failed download
/// yields [`SyncOutcome::DownloadFailed`] with both files unchanged, so the
/// update is retried on the next invocation instead of being silently
/// recorded as current.
///
/// # Errors
///
/// A missing or unreadable marker file is a fatal `IoError`; a marker whose
/// content does not match `YYYY-MM-DDTHH:MM:SSZ` is a fatal `InvalidInput`.
/// Remote-side failures (unreachable feed, missing tag, unparsable remote
/// timestamp) are not errors; they map to `RemoteUnavailable`.
pub async fn update(client: &reqwest::Client, config: &ResolvedConfig) -> AppResult<SyncOutcome> {
    let local = read_marker(&config.marker_file).await?;

    let remote = match remote_timestamp(client, &config.feed_url).await {
        Some(remote) => remote,
        None => return Ok(SyncOutcome::RemoteUnavailable),
    };

    if local >= remote {
        info!(local = %local, remote = %remote, "Local suffix list is current");
        return Ok(SyncOutcome::UpToDate);
    }

    info!(local = %local, remote = %remote, "Remote suffix list is newer, downloading");
    sync_now(client, config).await
}

/// Downloads the suffix list unconditionally, skipping the timestamp
/// comparison. The marker rewrite is gated on success just like [`update`].
pub async fn force_sync(
    client: &reqwest::Client,
    config: &ResolvedConfig,
) -> AppResult<SyncOutcome> {
    info!("Forced sync, skipping timestamp comparison");
    sync_now(client, config).await
}

/// Compares the local marker against the remote update time and reports the
/// result without writing anything.
pub async fn check(client: &reqwest::Client, config: &ResolvedConfig) -> AppResult<()> {
    let local = read_marker(&config.marker_file).await?;

    match remote_timestamp(client, &config.feed_url).await {
        None => info!(local = %local, "Remote update time unavailable"),
        Some(remote) if local < remote => {
            info!(local = %local, remote = %remote, "Update available");
        }
        Some(remote) => {
            info!(local = %local, remote = %remote, "Local suffix list is current");
        }
    }

    Ok(())
}

async fn sync_now(client: &reqwest::Client, config: &ResolvedConfig) -> AppResult<SyncOutcome> {
    if !download_list(client, &config.list_url, &config.data_file).await {
        return Ok(SyncOutcome::DownloadFailed);
    }

    let now = Utc::now().format(MARKER_TIMESTAMP_FORMAT).to_string();
    write_marker(&config.marker_file, &now).await?;
    info!(marker = %now, "Marker file advanced");

    Ok(SyncOutcome::Updated)
}

/// Fetches the remote update time and parses it with the fixed marker
/// format. An unparsable remote timestamp is downgraded to a logged `None`;
/// the feed shape is outside our control.
async fn remote_timestamp(client: &reqwest::Client, feed_url: &str) -> Option<NaiveDateTime> {
    let raw = feed::fetch_last_updated(client, feed_url).await?;

    match parse_marker_timestamp(&raw) {
        Ok(remote) => Some(remote),
        Err(e) => {
            warn!(timestamp = raw, error = %e, "Remote feed reported an unparsable timestamp");
            None
        }
    }
}

/// Reads and parses the marker file. Trailing whitespace is tolerated.
pub async fn read_marker(path: &Path) -> AppResult<NaiveDateTime> {
    let contents = fs::read_to_string(path).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to read marker file {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_marker_timestamp(contents.trim_end())
}

/// Parses a timestamp in the fixed marker format `YYYY-MM-DDTHH:MM:SSZ`.
pub fn parse_marker_timestamp(raw: &str) -> AppResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, MARKER_TIMESTAMP_FORMAT).map_err(|e| {
        AppError::InvalidInput(format!(
            "Timestamp '{raw}' does not match {MARKER_TIMESTAMP_FORMAT}: {e}"
        ))
    })
}

async fn write_marker(path: &Path, value: &str) -> AppResult<()> {
    fs::write(path, value).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to write marker file {}: {}",
            path.display(),
            e
        ))
    })
}
