use std::io;

use eyre::Result;
use neuroscan_cli::clock::SystemClock;
use neuroscan_cli::config;
use neuroscan_cli::console::Console;
use neuroscan_cli::session::Session;
use neuroscan_instruments::instruments::neuroscan::NeuroScan;

fn main() -> Result<()> {
    color_eyre::install()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = config::load_config()?;
    tracing::debug!(?config, "starting");

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut session = Session::new(&config, &NeuroScan, console, SystemClock);
    session.run()
}
