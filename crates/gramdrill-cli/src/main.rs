//! gramdrill CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod topics;

#[derive(Parser)]
#[command(name = "gramdrill", version, about = "English grammar practice and self-quiz tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the question set for an exercise
    Show {
        /// Exercise kind: multiple-choice, fill-blank, correction
        #[arg(long)]
        kind: Option<String>,

        /// Path to a custom .toml bank file (instead of a built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,
    },

    /// Grade a response file against a question bank
    Grade {
        /// Exercise kind: multiple-choice, fill-blank, correction
        #[arg(long)]
        kind: Option<String>,

        /// Path to a custom .toml bank file (instead of a built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// JSON response file: a flat array, index-aligned with the bank
        #[arg(long)]
        responses: PathBuf,

        /// Output directory for file formats
        #[arg(long, default_value = "./gramdrill-results")]
        output: PathBuf,

        /// Output format: text, json, html, markdown (comma-separated, or "all")
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Validate custom bank TOML files
    Validate {
        /// Path to a bank file or directory
        #[arg(long)]
        bank: PathBuf,
    },

    /// List reference topics, or show one
    Topics {
        /// Topic name (e.g. "tenses"); omit to list all
        name: Option<String>,
    },

    /// Create a starter custom bank and response template
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gramdrill=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Show { kind, bank } => commands::show::execute(kind, bank),
        Commands::Grade {
            kind,
            bank,
            responses,
            output,
            format,
        } => commands::grade::execute(kind, bank, responses, output, format),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Topics { name } => commands::topics::execute(name),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
