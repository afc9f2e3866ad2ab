use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{debug, info};

use crate::api::{HttpRecordSource, fetch_all};
use crate::config::Config;
use crate::logging::{self, LogTarget};
use crate::shell::{LineKind, ShellSession, SubmitOutcome};
use crate::tui::run_interactive;

#[derive(Parser)]
#[command(name = "portfolio-shell")]
#[command(version)]
#[command(about = "Command shell over a portfolio's projects and experience", long_about = None)]
pub struct Cli {
    /// Config file (TOML). Defaults to $PORTFOLIO_SHELL_CONFIG, then the user config dir
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Record API base URL, overriding the config file
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive terminal (default)
    Shell,
    /// Fetch records, run one shell command and print its output
    Exec {
        /// Command line, e.g. `find react`
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        line: Vec<String>,
    },
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref())?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    match cli.command {
        None | Some(Commands::Shell) => {
            let _guard = logging::init(&config.logging, LogTarget::File)?;
            run_interactive(&config)?;
            Ok(ExitCode::SUCCESS)
        }
        Some(Commands::Exec { line }) => {
            let _guard = logging::init(&config.logging, LogTarget::Stderr)?;
            exec_line(&config, &line.join(" "))
        }
    }
}

/// One-shot mode: open a session (which loads the records), submit `line`, and print every
/// line it produced. Output goes to stdout, errors to stderr.
fn exec_line(config: &Config, line: &str) -> Result<ExitCode> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    let source = HttpRecordSource::new(&config.api).context("Invalid API configuration")?;

    let mut session = ShellSession::new(&config.shell);
    if let Some(ticket) = session.open() {
        info!(base_url = source.base_url(), "loading records");
        let result = runtime.block_on(fetch_all(&source));
        session.apply_refresh(ticket, result);
    }

    let mark = session.transcript().last_id();
    let outcome = session.submit(line);
    debug!(?outcome, "exec finished");

    let mut failed = false;
    for entry in session.transcript().since(mark) {
        match entry.kind {
            LineKind::Input => {}
            LineKind::Output => println!("{}", entry.text),
            LineKind::Error => {
                failed = true;
                eprintln!("{}", entry.text);
            }
        }
    }

    if failed || outcome == SubmitOutcome::UnknownCommand {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}
