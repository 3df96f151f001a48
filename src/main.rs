use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

use reservations_front::cli::Cli;
use reservations_front::config::Config;
use reservations_front::dispatcher::Dispatcher;
use reservations_front::gateway::HttpGateway;
use reservations_front::location::BrowserHistory;
use reservations_front::state::AppState;
use reservations_front::store::Store;
use reservations_front::{headless, logging, ui};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_tracing();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_overrides(&mut config)?;

    let initial = match &cli.state {
        Some(path) => load_state(path)?,
        None => AppState::initial(),
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let store = Store::new(initial);
    let gateway = Arc::new(HttpGateway::new(&config.api)?);
    let history = BrowserHistory::new(cli.locations.clone(), &config.ui.start_location);
    let dispatcher = Dispatcher::new(store, gateway, Arc::new(history.clone()));

    tracing::info!(
        api = %config.api.base_url,
        headless = cli.headless,
        "starting"
    );

    if cli.headless {
        runtime.block_on(headless::run(&dispatcher, std::io::stdout()));
        return Ok(());
    }

    ui::run(
        &dispatcher,
        history,
        &config.keybindings,
        config.ui.tick_rate(),
        runtime.handle().clone(),
    )?;
    Ok(())
}

fn load_state(path: &Path) -> anyhow::Result<AppState> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file '{}'", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse state file '{}'", path.display()))
}
