//! revise CLI - spelling revision with spaced repetition.

use clap::{Parser, Subcommand};
use revise::cli;
use revise::config::load_config;
use revise::logging::init_tracing;
use std::path::PathBuf;
use std::process::ExitCode;

/// Get the version string.
///
/// - Release builds (on a git tag): "0.1.0"
/// - Development builds: "0.1.0-dev (abc1234)"
/// - Dirty working directory: "0.1.0-dev (abc1234-dirty)"
fn version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("REVISE_GIT_HASH");
    const IS_RELEASE: &str = env!("REVISE_IS_RELEASE");

    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" {
            VERSION.to_string()
        } else {
            format!("{VERSION}-dev ({GIT_HASH})")
        }
    })
}

#[derive(Parser)]
#[command(name = "revise")]
#[command(author, version = version(), about = "Spelling revision with spaced repetition", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add words, due for review straight away.
    Add {
        /// Word file (CSV). Created if missing.
        word_file: PathBuf,

        /// Words to add.
        words: Vec<String>,
    },

    /// Review the words that are due.
    Review {
        /// Word file (CSV).
        word_file: PathBuf,
    },

    /// Show every word with its level and due time.
    List {
        /// Word file (CSV).
        word_file: PathBuf,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Add { word_file, words } => cli::add::run(&word_file, &words),
        Commands::Review { word_file } => {
            load_config().and_then(|config| cli::review::run(&word_file, &config))
        }
        Commands::List { word_file } => cli::list::run(&word_file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("revise: error: {e}");
            ExitCode::FAILURE
        }
    }
}
