use std::{fs, path::Path, sync::Mutex};

use clap::Parser;
use tidewatch::{
    cli::{commands, flags::Cli},
    core::error::TideError,
};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli)?;

    if let Err(err) = commands::run(cli) {
        tracing::error!("{err:#}");
        return Err(err);
    }
    Ok(())
}

fn init_tracing(cli: &Cli) -> Result<(), TideError> {
    let level = match cli.verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let file_layer = match cli.log_file.as_deref() {
        Some(log_path) => Some(open_log_file(log_path)?),
        None => None,
    }
    .map(|file| {
        fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_target(false)
    });

    let stderr_layer = fmt::layer().with_writer(std::io::stderr).with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| TideError::Config(e.to_string()))
}

fn open_log_file(log_path: &Path) -> Result<fs::File, TideError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    if let Ok(meta) = fs::metadata(log_path) {
        if meta.len() > 1_000_000 {
            let rotated = log_path.with_extension("log.1");
            let _ = fs::rename(log_path, rotated);
        }
    }
    Ok(fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?)
}
