use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use resumetex::config::{Cli, Config};
use resumetex::pipeline;

fn main() -> ExitCode {
    let config = Config::from_env(Cli::parse());

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Error generating resume: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<()> {
    info!("Starting resumetex v{}", env!("CARGO_PKG_VERSION"));

    let outcome = pipeline::run(config).context("resume generation failed")?;

    match outcome.pdf_path {
        Some(pdf) => info!("Success! Your resume has been generated at: {}", pdf.display()),
        None if config.compile => warn!(
            "Failed to generate PDF. LaTeX source is at {}",
            outcome.tex_path.display()
        ),
        None => info!("LaTeX source written to {}", outcome.tex_path.display()),
    }
    Ok(())
}
