use std::io::{self, BufRead, Write};

use anyhow::Context;

use stockroom_app::{AppConfig, InventoryService, app::dispatch};

fn main() -> anyhow::Result<()> {
    stockroom_observability::init();

    let config = AppConfig::from_env().context("invalid configuration")?;
    tracing::info!(
        max_items = config.max_items,
        max_staff = config.max_staff,
        "stockroom session started"
    );

    let mut service = InventoryService::new(&config);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = dispatch::handle_line(&mut service, &line);
        serde_json::to_writer(&mut stdout, &response).context("failed to write response")?;
        writeln!(stdout)?;
        stdout.flush()?;
    }

    tracing::info!(items = service.catalog().len(), "stockroom session ended");
    Ok(())
}
