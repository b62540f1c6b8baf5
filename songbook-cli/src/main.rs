//! songbook - interactive song and artist record manager
//!
//! Startup order:
//! 1. Parse command-line arguments
//! 2. Locate and read the TOML config (missing or broken files fall back to defaults)
//! 3. Initialize tracing (RUST_LOG, else the configured level)
//! 4. Silently load both collections, then hand stdin/stdout to the menu loop
//!    (with line editing when stdin is a terminal)

use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[cfg(feature = "line-editing")]
use songbook_cli::terminal::Terminal;
use songbook_cli::{menu, App};
use songbook_common::config::{ConfigResolver, LoggingConfig, Overrides, Settings};
use songbook_common::{FileSerializer, Format, InputReader, LineSource, PropertyTable};

/// Command-line arguments for songbook
#[derive(Parser, Debug)]
#[command(name = "songbook")]
#[command(about = "Interactive song and artist record manager")]
#[command(version)]
struct Args {
    /// Config file (default: SONGBOOK_CONFIG, then <config dir>/songbook/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Songs data file
    #[arg(long, env = "SONGBOOK_SONGS_FILE")]
    songs_file: Option<PathBuf>,

    /// Artists data file
    #[arg(long, env = "SONGBOOK_ARTISTS_FILE")]
    artists_file: Option<PathBuf>,

    /// Data file format: json, yaml, toml or xml
    #[arg(short, long, env = "SONGBOOK_FORMAT")]
    format: Option<Format>,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            songs_file: self.songs_file.clone(),
            artists_file: self.artists_file.clone(),
            format: self.format,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Read config before tracing exists; report the outcome once it does
    let loaded = ConfigResolver::new(args.config.clone()).load();
    let settings = loaded.config.clone().resolve(&args.overrides());

    init_tracing(&settings.logging)?;
    info!("Starting songbook v{}", env!("CARGO_PKG_VERSION"));
    loaded.log_source();

    info!(
        "Data files: {} and {} ({})",
        settings.songs_file.display(),
        settings.artists_file.display(),
        settings.format
    );

    println!("{}", menu::BANNER);

    #[cfg(feature = "line-editing")]
    {
        use std::io::IsTerminal;
        if io::stdin().is_terminal() {
            let terminal = Terminal::new().context("Failed to initialize line editing")?;
            return run_session(terminal, &settings);
        }
    }
    run_session(io::stdin().lock(), &settings)
}

/// Load saved data and run the menus until exit or end of input
fn run_session<R: LineSource>(input: R, settings: &Settings) -> Result<()> {
    let reader = InputReader::new(PropertyTable::standard(), input, io::stdout());
    let mut app = App::new(
        reader,
        Box::new(FileSerializer::new(&settings.songs_file, settings.format)),
        Box::new(FileSerializer::new(&settings.artists_file, settings.format)),
    );

    app.load_all().context("Failed to load saved data")?;
    app.run().context("Session ended with an error")?;

    info!("Exiting...bye");
    Ok(())
}

/// Log to the configured file, or stderr so the menus on stdout stay readable
fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .with_context(|| format!("Invalid log level: {}", logging.level))?;

    match &logging.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
    }
    Ok(())
}
