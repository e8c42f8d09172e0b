use std::io;

use anyhow::Context;

use stockroom_cli::config::LOG_FORMAT_VAR;
use stockroom_cli::{Shell, ShellConfig};
use stockroom_observability::LogFormat;

fn main() -> anyhow::Result<()> {
    // Logging first so configuration warnings are visible.
    let log_format = std::env::var(LOG_FORMAT_VAR)
        .ok()
        .and_then(|raw| LogFormat::parse(&raw))
        .unwrap_or_default();
    stockroom_observability::init(log_format);

    let config = ShellConfig::from_env();
    tracing::info!(
        capacity = ?config.store.capacity,
        low_stock_threshold = config.store.low_stock_threshold,
        output = ?config.output,
        "starting inventory session"
    );

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut shell = Shell::new(stdin.lock(), stdout.lock(), config);
    shell.run().context("terminal session failed")?;

    tracing::info!(items = shell.store().len(), "session ended");
    Ok(())
}
