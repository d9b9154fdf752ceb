//! Marquee - hero banner widget for terminal dashboards

use anyhow::Result;
use clap::{CommandFactory, Parser};
use marquee::banner::DisplayArgs;
use marquee::{App, Config};
use std::path::PathBuf;

mod tui;

/// Hero banner demo dashboard
#[derive(Parser)]
#[command(name = "marquee")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a config file (defaults to the platform config dir)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed the banner with this title instead of the configured presets
    #[arg(long)]
    title: Option<String>,

    /// Subtitle for the seeded banner
    #[arg(long)]
    subtitle: Option<String>,

    /// Disable the gradient fill for the seeded banner
    #[arg(long)]
    no_gradient: bool,
}

fn main() -> Result<()> {
    init_logging();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Let --help and --version exit normally
            if e.kind() == clap::error::ErrorKind::DisplayHelp
                || e.kind() == clap::error::ErrorKind::DisplayVersion
            {
                e.exit();
            }
            // For actual errors, show error + help
            eprintln!("error: {}\n", e.kind());
            Cli::command().print_help()?;
            std::process::exit(1);
        }
    };

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(seed) = seed_args(&cli) {
        config.presets = vec![seed];
    }

    let app = App::new(config);
    tui::run(app)
}

fn seed_args(cli: &Cli) -> Option<DisplayArgs> {
    cli.title.as_ref().map(|title| {
        DisplayArgs::new(title.clone())
            .subtitle(cli.subtitle.clone().unwrap_or_default())
            .gradient(!cli.no_gradient)
    })
}

fn init_logging() {
    // Clear the log file on startup
    if let Err(e) = std::fs::write("/tmp/marquee.log", "") {
        eprintln!("Warning: Failed to clear log file: {e}");
    }

    // Log to /tmp/marquee.log - tail with: tail -f /tmp/marquee.log
    // Set DEBUG=0-3 to control verbosity (0=off, 1=warn, 2=info, 3=debug)
    let debug_level = std::env::var("DEBUG")
        .ok()
        .and_then(|v| v.parse::<u8>().ok())
        .unwrap_or(0);

    if debug_level > 0 {
        let level = match debug_level {
            1 => tracing::Level::WARN,
            2 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        };

        let file_appender = tracing_appender::rolling::never("/tmp", "marquee.log");
        tracing_subscriber::fmt()
            .with_writer(file_appender)
            .with_max_level(level)
            .with_ansi(false)
            .init();
    }
}
