// Entrypoint for the CLI application.
// - Keeps `main` small: load the quotes, then hand them to the UI loop.
// - A quotes file that cannot be loaded ends the run before any prompt.

use anyhow::Context;
use quote_spark::{config::Config, quote::QuoteSource, ui::run_session};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout carries only the conversation.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::default();
    let source = QuoteSource::from_origin(&config.origin).context("Could not load quotes")?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_session(&source, &mut stdin.lock(), &mut stdout.lock(), config.styled)
        .context("Failed to write to stdout")?;
    Ok(())
}
