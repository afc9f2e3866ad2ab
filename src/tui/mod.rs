// TUI module: portfolio page with the shell overlay
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use std::sync::Arc;

use anyhow::{Context, Result};
pub use app::App;
use tracing::info;

use crate::api::HttpRecordSource;
use crate::config::Config;
use crate::shell::ShellSession;
use terminal::TerminalManager;

/// Run the interactive TUI until the user quits
pub fn run_interactive(config: &Config) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let source = HttpRecordSource::new(&config.api).context("Invalid API configuration")?;
    info!(base_url = source.base_url(), "starting interactive shell");

    let session = ShellSession::new(&config.shell);
    let mut app = App::new(session, Arc::new(source), runtime.handle().clone());

    let mut manager = TerminalManager::new()?;
    let res = app.run(manager.terminal_mut());
    manager.restore()?;

    // Pending fetches are abandoned
    runtime.shutdown_background();
    res
}
