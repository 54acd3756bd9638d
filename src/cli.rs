use crate::config::ResolvedConfig;
use crate::errors::{AppError, AppResult};
use crate::updater;
use clap::{Arg, ArgAction, ArgMatches, Command};
use std::path::PathBuf;
use tracing::info;

// CLI metadata constants
const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
const APP_ABOUT: &str = env!("CARGO_PKG_DESCRIPTION");

/// Parses command-line arguments and executes the selected command.
///
/// Three subcommands are available:
/// - `sync`: compare the local marker against the remote update time and
///   download the suffix list if the remote copy is newer
/// - `check`: report whether an update is available, without writing anything
/// - `toml`: run a sync with options loaded from a TOML configuration file
///
/// With no subcommand, help is printed.
///
/// # Returns
///
/// Returns `Ok(())` when the command completes, including sync cycles that
/// were skipped because the remote was unavailable or the download failed
/// (those are reported through logging and the on-disk state). Returns an
/// error if the marker file is missing or malformed, or the configuration
/// is invalid.
pub async fn cli() -> AppResult<()> {
    let cmd = Command::new("psl-sync")
        .version(APP_VERSION)
        .about(APP_ABOUT)
        .subcommand(
            Command::new("sync")
                .about("Download the suffix list if the remote copy is newer than the local one")
                .after_help(
                    "Example:\n  psl-sync sync -d data/public_suffix_list.dat -m data/public_suffix_list.updated",
                )
                .arg(data_file_arg())
                .arg(marker_file_arg())
                .arg(timeout_arg())
                .arg(
                    Arg::new("force")
                        .short('f')
                        .long("force")
                        .help("Download unconditionally, skipping the timestamp comparison")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("Report whether the remote suffix list is newer, without writing anything")
                .arg(marker_file_arg())
                .arg(timeout_arg()),
        )
        .subcommand(
            Command::new("toml")
                .about("Run a sync using a TOML configuration file")
                .arg(
                    Arg::new("config")
                        .help("Path to the TOML config file")
                        .required(true)
                        .value_parser(clap::value_parser!(PathBuf)),
                ),
        );

    let mut cmd_for_help = cmd.clone();
    let matches = cmd.get_matches();

    match matches.subcommand() {
        Some(("sync", sub)) => {
            let config = resolved_from_args(sub);
            run_sync(&config, sub.get_flag("force")).await?;
        }
        Some(("check", sub)) => {
            let config = resolved_from_args(sub);
            config.validate()?;
            let client = config.client()?;
            updater::check(&client, &config).await?;
        }
        Some(("toml", sub)) => {
            let config_path = sub
                .get_one::<PathBuf>("config")
                .expect("config is required");

            let config = ResolvedConfig::from_toml_file(config_path)?;
            run_sync(&config, false).await?;
        }
        _ => {
            cmd_for_help
                .print_help()
                .map_err(|e| AppError::IoError(format!("Failed to print help: {e}")))?;
        }
    }

    Ok(())
}

fn data_file_arg() -> Arg<'static> {
    Arg::new("data")
        .short('d')
        .long("data")
        .help("Path of the suffix list data file")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

fn marker_file_arg() -> Arg<'static> {
    Arg::new("marker")
        .short('m')
        .long("marker")
        .help("Path of the last-updated marker file")
        .value_parser(clap::value_parser!(PathBuf))
        .action(ArgAction::Set)
}

fn timeout_arg() -> Arg<'static> {
    Arg::new("timeout")
        .long("timeout")
        .help("HTTP request timeout in seconds")
        .value_parser(clap::value_parser!(u64))
        .action(ArgAction::Set)
}

/// Builds a configuration from defaults plus whatever flags were given.
fn resolved_from_args(sub: &ArgMatches) -> ResolvedConfig {
    let mut config = ResolvedConfig::default();
    if let Some(path) = sub.try_get_one::<PathBuf>("data").ok().flatten() {
        config.data_file = path.clone();
    }
    if let Some(path) = sub.get_one::<PathBuf>("marker") {
        config.marker_file = path.clone();
    }
    if let Some(&timeout) = sub.get_one::<u64>("timeout") {
        config.request_timeout_secs = timeout;
    }
    config
}

async fn run_sync(config: &ResolvedConfig, force: bool) -> AppResult<()> {
    config.validate()?;
    let client = config.client()?;

    let outcome = if force {
        updater::force_sync(&client, config).await?
    } else {
        updater::update(&client, config).await?
    };

    info!(
        outcome = outcome.display_name(),
        data_file = %config.data_file.display(),
        "Sync finished"
    );

    Ok(())
}
