//! dashcal CLI entry point.

use anyhow::Result;
use clap::Parser;
use dashcal_client::app::run;
use dashcal_client::cli::Cli;
use dashcal_client::config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays parseable.
    let default_filter = if cli.quiet {
        "dashcal=error,dashcal_client=error,dashcal_core=error"
    } else {
        "dashcal=info,dashcal_client=info,dashcal_core=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env();
    tracing::debug!(?config, "Loaded configuration");

    let output = run(&cli, &config)?;
    println!("{}", output);

    Ok(())
}
