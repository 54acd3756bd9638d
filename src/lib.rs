//! psl-sync library
//!
//! This crate provides the core functionality for the `psl-sync` binary.
//! Keep the crate root minimal — implementation and tests live in their modules.
//!
//! ## Overview
//!
//! The library is organized into modules that handle different aspects of keeping
//! a local copy of the Public Suffix List current:
//!
//! - [`feed`] - Fetches the remote update time from the publicsuffix.org commit feed
//! - [`downloader`] - Downloads the suffix list document and atomically replaces the local file
//! - [`updater`] - Orchestrates the conditional update: read marker, compare, download, advance marker
//! - [`cli`] - Command-line interface for running sync and check operations
//! - [`config`] - File paths, endpoint URLs, and HTTP client settings
//! - [`errors`] - Error types used throughout the application
//!
//! ## Example Usage
//!
//! A sync cycle reads the local marker file, compares it against the remote
//! update time, and downloads the list only when the remote copy is newer:
//!
//! ```no_run
//! use psl_sync::{config::ResolvedConfig, errors::AppResult, updater};
//!
//! # async fn example() -> AppResult<()> {
//! let config = ResolvedConfig::default();
//! let client = config.client()?;
//!
//! let outcome = updater::update(&client, &config).await?;
//! println!("sync finished: {}", outcome.display_name());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod downloader;
pub mod errors;
pub mod feed;
pub mod updater;
