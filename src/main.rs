mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use kernel32_abi::config::{
    load_config, validate_config, Config, ConfigLoader, DEFAULT_LOG_LEVEL,
};
use kernel32_abi::inspect::{registry, Report};
use tracing::{debug, info};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Install the subscriber before anything can log.
///
/// RUST_LOG pins the filter. Otherwise it starts at the default level and
/// the returned handle swaps in the configured one once the file is read.
fn init_logging() -> Option<FilterHandle> {
    let from_env = EnvFilter::try_from_default_env().ok();
    let pinned = from_env.is_some();
    let (filter, handle) =
        reload::Layer::new(from_env.unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_LEVEL)));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .init();

    (!pinned).then_some(handle)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let filter = init_logging();

    let config: Config = match &cli.config {
        Some(path) => ConfigLoader::new(path)
            .load()
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => load_config(),
    };
    validate_config(&config).context("Invalid configuration")?;

    if let Some(handle) = filter {
        handle
            .reload(EnvFilter::new(&config.logging.level))
            .context("Failed to apply configured log level")?;
    }

    info!("Kernel32-ABI v{}", env!("CARGO_PKG_VERSION"));
    debug!(?config, "effective configuration");

    if !cli.names.is_empty() {
        for name in &cli.names {
            let constant = registry::require(name)?;
            println!("{}", constant);
        }
        return Ok(());
    }

    let report = Report::build(&config.report)?;
    println!("{}", report.render(&config.output)?);
    Ok(())
}
