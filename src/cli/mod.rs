use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use tracing::info;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use crate::cli::args::Cli;
use crate::config::load::load_config;
use crate::drive::{CdromIoctl, UdevStore};
use crate::error::EXIT_USAGE;
use crate::exit::exit_for_error;
use crate::job::BackupJob;
use crate::pipeline::Pipeline;
use crate::util::paths::device_path;

const CONFIG_FILE: &str = "/etc/udfbackup.yaml";

pub mod args;

/// Runs one backup for the device named on the command line. Returns only
/// on success or on setup errors; a failed job exits from
/// [`exit_for_error`].
pub fn run() -> Result<()> {
    let cli = parse_cli();

    let (config_path, required) = match cli.config.clone() {
        Some(path) => (path, true),
        None => (PathBuf::from(CONFIG_FILE), false),
    };
    let cfg = load_config(&config_path, required, cli.folder.clone())
        .with_context(|| format!("config {}", config_path.display()))?;
    init_tracing(cli.verbose, cfg.log_file.as_deref())?;

    let device = device_path(&cli.device);
    info!(
        pid = std::process::id(),
        device = %device.display(),
        base_dir = %cfg.base_dir.display(),
        "udfbackup {} starting",
        env!("CARGO_PKG_VERSION")
    );

    let mut job = BackupJob::new(&device, &cfg.base_dir);
    let mut pipeline = Pipeline::from_config(&cfg, CdromIoctl, UdevStore);
    match pipeline.run(&mut job) {
        Ok(done) => {
            info!(
                path = %done.display(),
                ejected = pipeline.is_ejected(),
                "backup complete"
            );
            Ok(())
        }
        Err(err) => exit_for_error(&mut job, &err),
    }
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
                _ => std::process::exit(EXIT_USAGE),
            }
        }
    }
}

fn init_tracing(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("udfbackup={}", default_level)));

    let file_layer = match log_file {
        Some(path) => Some(
            fmt::layer()
                .with_ansi(false)
                .with_target(false)
                .with_writer(Mutex::new(open_log(path)?)),
        ),
        None => None,
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .try_init();
    Ok(())
}

fn open_log(path: &Path) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file {}", path.display()))
}
