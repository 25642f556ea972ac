mod commands;
mod reader;

use std::path::{Path, PathBuf};
use std::process;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "stylelink",
    version,
    about = "stylelink — validate and resolve live-preview links between style and HTML editor fields"
)]
struct Cli {
    /// Log resolution details to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check link_styles against the model's field types
    Validate {
        /// Project file or directory of *.links.yaml / *.links.json files
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Print the resolved style field → linked field map
    Resolve {
        /// Project file or directory of *.links.yaml / *.links.json files
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,
    },

    /// Print the widget attributes a form would receive
    Stamp {
        /// Project file or directory of *.links.yaml / *.links.json files
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format: human (default) or json
        #[arg(long, default_value = "human")]
        format: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

type Runner = fn(&Path, &str) -> Result<(String, usize)>;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let (runner, path, format): (Runner, PathBuf, String) = match cli.command {
        Commands::Validate { path, format } => (commands::validate::run_validate, path, format),
        Commands::Resolve { path, format } => (commands::resolve::run_resolve, path, format),
        Commands::Stamp { path, format } => (commands::stamp::run_stamp, path, format),
    };

    match runner(&path, &format) {
        Ok((output, error_count)) => {
            println!("{output}");
            if error_count > 0 {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
