pub mod config;
pub mod convert;
pub mod repl;

use std::io::{self, IsTerminal};
use std::process::ExitCode;

use anyhow::Context;
use quiz_core::QuestionBank;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;

/// Install the stderr log subscriber. Stdout is reserved for user output.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Convert the configured quiz file. Exits with failure when a line is
/// rejected.
pub fn run_convert() -> anyhow::Result<ExitCode> {
    let config = Config::from_env()?;
    init_tracing();

    let outcome = convert::convert_file(&config)?;
    convert::report(&outcome, &mut io::stdout().lock())?;

    Ok(if outcome.is_completed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Run the interactive question bank session on stdin/stdout.
pub fn run_bank() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    init_tracing();

    tracing::info!("Loading question bank from {}", config.bank.display());
    let mut bank = QuestionBank::load(&config.bank)
        .with_context(|| format!("loading {}", config.bank.display()))?;

    let options = repl::Options {
        mode: config.search_mode,
        color: config.color && io::stdout().is_terminal(),
    };

    repl::run(
        &mut bank,
        options,
        io::stdin().lock(),
        &mut io::stdout().lock(),
    )
}
