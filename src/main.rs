use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use planet_tracker::cli::Session;
use planet_tracker::codec::{DataFile, Loaded};
use planet_tracker::commands::{self, Command};
use planet_tracker::config::AppConfig;
use planet_tracker::report;

#[derive(Parser)]
#[command(name = "ptrack")]
#[command(about = "Track planets and their derived physical quantities")]
struct Cli {
    /// Data file to load and save (overrides PLANET_TRACKER_DATA and config)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

/// Logs go to stderr so stdout stays the user-facing channel.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "planet_tracker=warn".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = AppConfig::load();
    let data_file = DataFile::new(config.resolve_data_file(cli.data_file.as_deref()));
    tracing::debug!(path = %data_file.path().display(), "using data file");

    match cli.command {
        Some(command) => commands::execute(command, &data_file, &mut io::stdout().lock())?,
        None => {
            let Loaded { store, status } = data_file
                .load()
                .with_context(|| format!("Failed to load {}", data_file.path().display()))?;
            print!("{}", report::load_summary(&status));

            let stdin = io::stdin();
            let finished = Session::new(stdin.lock(), io::stdout(), store, data_file)
                .with_autosave(config.autosave)
                .run()?;
            if let Some(save) = finished.save {
                save?;
            }
        }
    }

    Ok(())
}
