use crate::constants::UPDATED_TAG_PATTERN;
use crate::errors::AppResult;
use regex::Regex;
use std::sync::OnceLock;
use tracing::{debug, warn};
use url::Url;

/// Cached regex for extracting the `<updated>` value from the Atom feed.
/// Compiled once at initialization for performance.
static UPDATED_TAG_REGEX: OnceLock<Regex> = OnceLock::new();

/// Fetches the most recent update time of the remote suffix list.
///
/// Requests the commit-history Atom feed and extracts the first
/// `<updated>…</updated>` value, which corresponds to the newest commit.
///
/// Every failure mode is non-fatal by contract: connection errors, invalid
/// URLs, non-2xx statuses, and a feed body without the expected tag are all
/// logged and collapsed into `None`, meaning "remote update time unknown,
/// skip this sync cycle".
///
/// # Returns
///
/// The raw ISO-8601 UTC timestamp string (e.g. `2020-06-01T00:00:00Z`),
/// unparsed, or `None` if it could not be determined.
pub async fn fetch_last_updated(client: &reqwest::Client, feed_url: &str) -> Option<String> {
    let body = match request_feed(client, feed_url).await {
        Ok(body) => body,
        Err(e) => {
            warn!(url = feed_url, error = %e, "Failed to fetch commit feed");
            return None;
        }
    };

    match extract_updated(&body) {
        Some(ts) => {
            debug!(timestamp = ts, "Remote update time fetched");
            Some(ts.to_string())
        }
        None => {
            warn!(
                url = feed_url,
                "Commit feed contains no <updated> element, skipping sync cycle"
            );
            None
        }
    }
}

async fn request_feed(client: &reqwest::Client, feed_url: &str) -> AppResult<String> {
    let url = Url::parse(feed_url)?;

    let body = client
        .get(url.as_str())
        .send()
        .await?
        .error_for_status()?
        .text()
        .await?;

    Ok(body)
}

/// Extracts the first `<updated>…</updated>` value from a feed body.
///
/// Atom feeds list entries newest-first, so the first match is the latest
/// commit time. Returns `None` when the tag is absent.
pub fn extract_updated(body: &str) -> Option<&str> {
    let re = UPDATED_TAG_REGEX.get_or_init(|| {
        Regex::new(UPDATED_TAG_PATTERN).expect("UPDATED_TAG_PATTERN is a valid regex pattern")
    });

    re.captures(body).and_then(|c| c.get(1)).map(|m| m.as_str())
}
