//! Terminal flashcard trainer.

pub mod config;
pub mod terminal;

use anyhow::Context;
use flashcard_core::{run_session, Session};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Config;
use crate::terminal::TerminalDriver;

pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env().context("invalid configuration")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut session = Session::new(config.session()).context("failed to start session")?;
    let mut driver = TerminalDriver::stdio();

    let summary = run_session(&mut session, &mut driver)
        .await
        .context("flashcard session ended with an error")?;

    tracing::info!(
        cards_created = summary.cards_created,
        quizzed = summary.quizzed,
        correct = summary.correct,
        "goodbye"
    );
    Ok(())
}
