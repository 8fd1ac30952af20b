//! # emojifier-cli: A CLI for `emojifier`
//!
//! Reads a README feature list from a file or stdin and prints the
//! emoji-annotated Markdown to stdout.

use anyhow::{bail, Context, Result};
use clap::Parser;
use emojifier::{EmojifyClientBuilder, OutputFormat};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

const EMPTY_CONTENT_MESSAGE: &str = "Please enter some README content to enhance.";

// --- CLI Definition ---

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output shape: `list` or `table`
    #[arg(long, short, default_value = "list")]
    format: OutputFormat,
    /// Gemini API key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Override the Gemini endpoint URL
    #[arg(long, env = "GEMINI_API_URL")]
    api_url: Option<String>,
    /// README fragment to enhance. Reads stdin when omitted.
    file: Option<PathBuf>,
}

// --- Main Application Entry ---

#[tokio::main]
async fn main() -> Result<ExitCode> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout carries only the generated Markdown.
    let subscriber = fmt::Subscriber::builder()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    let api_key = match cli.api_key.as_deref().map(str::trim) {
        Some(key) if !key.is_empty() => key.to_string(),
        _ => bail!("API_KEY environment variable is not set"),
    };
    let mut builder = EmojifyClientBuilder::new().gemini_api_key(api_key);
    if let Some(url) = cli.api_url.clone() {
        builder = builder.gemini_api_url(url);
    }
    let client = builder.build()?;

    let content = read_input(cli.file.as_deref())?;
    if content.trim().is_empty() {
        eprintln!("{EMPTY_CONTENT_MESSAGE}");
        return Ok(ExitCode::from(2));
    }

    info!(format = %cli.format, "Generating enhanced README content...");
    match client.generate(&content, cli.format).await {
        Ok(text) => {
            println!("{text}");
            Ok(ExitCode::SUCCESS)
        }
        Err(failure) => {
            eprintln!("Failed to generate content. {}", failure.message());
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Reads the README fragment from `path`, or from stdin when `path` is `None` or `-`.
fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => std::fs::read_to_string(p)
            .with_context(|| format!("Failed to read '{}'", p.display())),
        _ => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read stdin")?;
            Ok(buffer)
        }
    }
}
