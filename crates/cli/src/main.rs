//! Vocat CLI entry point.
//!
//! This binary is the composition root for the entire system. Responsibilities:
//!
//! 1. **Wire observability** — configure `tracing-subscriber` with an
//!    env-filter layer, so `RUST_LOG` controls diagnostic verbosity and the
//!    default console output stays the command summaries.
//! 2. **Parse configuration** — load `$HOME/.vocat/config.json` and fill the
//!    gaps from the environment.
//! 3. **Construct infrastructure** — create the concrete
//!    [`github::GithubActionsClient`] and [`speech::LocalCommandSpeaker`] and
//!    inject them into the [`commands::Dispatcher`].
//! 4. **Dispatch** — hand the argument vector to the dispatcher. Per-command
//!    errors are printed there, never propagated, so the process exits 0 on
//!    every handled path; only a failure to assemble the pieces themselves
//!    (e.g. the HTTP client cannot be built) surfaces through [`anyhow`].

use anyhow::Result;
use tracing::Instrument;
use tracing_subscriber::EnvFilter;

use commands::Dispatcher;
use github::GithubActionsClient;
use speech::LocalCommandSpeaker;
use workflows::InvocationId;

mod config;

use config::{ConfigFile, EnvSnapshot, Settings};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let invocation = InvocationId::new_random();
    let span = tracing::debug_span!("invocation", id = %invocation);

    run().instrument(span).await
}

async fn run() -> Result<()> {
    let file = match ConfigFile::default_path() {
        Some(path) => ConfigFile::load(&path),
        None => ConfigFile::default(),
    };
    let Settings { token, coordinate } = Settings::resolve(file, EnvSnapshot::capture());

    let gateway = GithubActionsClient::new(coordinate)?;
    let speaker = LocalCommandSpeaker::new();
    let dispatcher = Dispatcher::new(gateway, speaker, token);

    let args: Vec<String> = std::env::args().skip(1).collect();
    dispatcher.run(&args).await;

    Ok(())
}
