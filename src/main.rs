//! Dispatch - main entry point
//!
//! Fetches the page named on the command line (or prompted for), extracts its
//! contacts, and runs the interactive selection session.

use anyhow::Result;
use clap::{CommandFactory, Parser};
use crossterm::style::Stylize;
use dispatch::console::{self, Console, TerminalConsole, Tone};
use dispatch::fetcher::normalize_url;
use dispatch::runtime::{exit_on_interrupt, until_interrupted, DispatchRuntime};
use dispatch::{Config, Extractor, Fetcher, HarvestResult, Session, SystemLauncher};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const TERMINATED: &str = "\nSession terminated.";

/// Find a page's points of contact and open a channel to one.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Page to scan; prompted for when omitted
    url: Option<String>,
}

fn init_logging(level: &str) {
    // stderr only; stdout carries the interactive session
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn spinner(message: &str) -> ProgressBar {
    let bar = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::with_template("  {spinner:.cyan} {msg}") {
        bar.set_style(style.tick_chars("\u{25b8}\u{25b9}\u{25b8}\u{25b9}\u{25b8}"));
    }
    bar.set_message(message.to_string());
    bar.enable_steady_tick(Duration::from_millis(120));
    bar
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let runtime = DispatchRuntime::build()?;
    let result = runtime.block_on(run(cli));
    runtime.shutdown();
    result
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?;
    init_logging(&config.log_level);
    info!(?config, "Configuration loaded");

    let mut console = TerminalConsole::new()?;
    console::banner(&mut console);

    let target = match cli.url {
        Some(url) => url,
        None => {
            console.say(
                Tone::Warning,
                "Hint: Run with a URL to start harvesting immediately.",
            );
            console.say(Tone::Dim, &Cli::command().render_usage().to_string());
            match console.prompt_text("\nEnter target URL to scan", None) {
                Ok(url) => url,
                Err(e) if e.is_abort() => {
                    console.say(Tone::Error, TERMINATED);
                    return Ok(());
                }
                Err(e) => return Err(e.into()),
            }
        }
    };
    let url = normalize_url(&target);

    let fetcher = Fetcher::new(&config);
    let extractor = Extractor::new(config.kinds.clone());

    let progress = spinner(&format!("Fetching and rendering {}...", url));
    let fetched = until_interrupted(fetcher.fetch(&url), tokio::signal::ctrl_c()).await;
    progress.finish_and_clear();

    let Some(fetched) = fetched else {
        // The abandoned download is left to runtime shutdown
        console.say(Tone::Error, TERMINATED);
        return Ok(());
    };

    // SIGINT stays caught from here on; end the process on it explicitly
    exit_on_interrupt(|| println!("{}", TERMINATED.red().bold()));

    let result = match fetched {
        Ok(page) => {
            console.say(Tone::Dim, "Scanning for contacts...");
            extractor.extract_page(&page)
        }
        Err(e) => {
            warn!(error = %e, url = %url, "Harvesting failed");
            console.say(Tone::Error, &format!("Error during harvesting: {}", e));
            HarvestResult::default()
        }
    };

    let launcher = SystemLauncher::new();
    let outcome = Session::new(&mut console, &launcher).run(&url, &result)?;
    info!(?outcome, "Session finished");

    Ok(())
}
