//! Retrofolio - retro desktop portfolio for the terminal.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use folio_common::catalog::{self, ScreenId};
use folio_common::config::FolioConfig;

use retrofolio::{commands, errors, logging, tui};

#[derive(Parser)]
#[command(name = "retrofolio")]
#[command(about = "Personal portfolio styled as a retro OS desktop", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the desktop (default when no subcommand is given)
    Run {
        /// Screen to show after boot (about, experience, skills, projects, education)
        #[arg(long)]
        screen: Option<String>,

        /// Skip the boot splash
        #[arg(long)]
        skip_boot: bool,

        /// Path to a config file (default: XDG config dir)
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Validate the content catalog
    Check,
    /// Dump the content catalog as JSON
    Export,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Check) => {
            std::process::exit(commands::check());
        }
        Some(Commands::Export) => commands::export(),
        Some(Commands::Run {
            screen,
            skip_boot,
            config,
        }) => run(screen, skip_boot, config).await,
        None => run(None, false, None).await,
    }
}

async fn run(screen: Option<String>, skip_boot: bool, config: Option<PathBuf>) -> Result<()> {
    // Malformed catalog data is a development-time defect; refuse to
    // start rather than render undefined screens.
    if let Err(e) = catalog::validate() {
        eprintln!("catalog validation failed: {}", e);
        std::process::exit(errors::EXIT_INVALID_CATALOG);
    }

    let mut config = FolioConfig::load(config)?;
    if let Some(screen) = screen {
        let id: ScreenId = screen.parse()?;
        config.start_screen = id;
    }

    tui::run(config, skip_boot).await
}
