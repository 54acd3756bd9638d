use crate::errors::{AppError, AppResult};
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};
use url::Url;

/// Downloads the suffix list document and replaces the destination file.
///
/// The response body is streamed to a sibling `.part` file and atomically
/// renamed over the destination when complete, so the destination is never
/// left half-written.
///
/// Failure handling follows the downloader's Boolean contract: connection
/// errors, invalid URLs, non-2xx statuses, and file I/O failures are logged
/// and reported as `false`; the destination file is left as it was.
pub async fn download_list(client: &reqwest::Client, list_url: &str, dest: &Path) -> bool {
    match download_to(client, list_url, dest).await {
        Ok(()) => {
            info!(dest = %dest.display(), "Suffix list downloaded");
            true
        }
        Err(e) => {
            warn!(url = list_url, error = %e, "Failed to download suffix list");
            false
        }
    }
}

async fn download_to(client: &reqwest::Client, list_url: &str, dest: &Path) -> AppResult<()> {
    let url = Url::parse(list_url)?;

    let response = client
        .get(url.as_str())
        .send()
        .await
        .map_err(|e| AppError::NetworkError(format!("Failed to request suffix list: {e}")))?;

    let mut response = response
        .error_for_status()
        .map_err(|e| AppError::NetworkError(format!("Failed to download suffix list: {e}")))?;

    if let Some(parent) = dest.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::IoError(format!("Failed to create directory: {e}")))?;
        }
    }

    let tmp_path = part_path(dest);

    // Remove stale tmp file if present (best-effort)
    if tmp_path.exists() {
        if let Err(e) = fs::remove_file(&tmp_path).await {
            warn!(
                file_path = %tmp_path.display(),
                error = %e,
                "Failed to remove stale temp file"
            );
        }
    }

    let mut file = File::create(&tmp_path).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to create temp file {}: {}",
            tmp_path.display(),
            e
        ))
    })?;

    while let Some(chunk) = response.chunk().await? {
        file.write_all(&chunk).await.map_err(|e| {
            AppError::IoError(format!(
                "Failed to write to temp file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;
    }

    // Ensure the file is closed before renaming
    drop(file);

    // Atomically move the temp file to the final destination
    fs::rename(&tmp_path, dest).await.map_err(|e| {
        AppError::IoError(format!(
            "Failed to rename temp file {} to {}: {}",
            tmp_path.display(),
            dest.display(),
            e
        ))
    })?;

    Ok(())
}

/// Returns the sibling temp path for a destination, e.g. `list.dat.part`.
fn part_path(dest: &Path) -> PathBuf {
    let mut name = dest.as_os_str().to_owned();
    name.push(".part");
    PathBuf::from(name)
}
