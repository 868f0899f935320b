#![forbid(unsafe_code)]
//! Reflection Journal Command Line Interface

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use journal::commands::{
    execute_answer, execute_export, execute_init, execute_open, execute_save, execute_show,
    AnswerOptions, ExportOptions, InitOptions, SaveOptions, ShowOptions,
};
use journal::Config;

#[derive(Parser)]
#[command(name = "journal")]
#[command(about = "Home Floortime reflection journal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".floortime.config.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the journal config and data directory
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,

        /// Journal data file path
        #[arg(long)]
        journal_path: Option<PathBuf>,

        /// Directory exported PDFs are written into
        #[arg(long)]
        export_dir: Option<PathBuf>,

        /// TTF font used by the export rasterizer
        #[arg(long)]
        font_path: Option<PathBuf>,
    },

    /// Open an interactive journaling session
    Open,

    /// Answer a single question by id
    Answer {
        /// Question id, e.g. start_q1
        id: String,

        /// Answer text (prompts interactively if omitted)
        text: Option<String>,
    },

    /// Show phases, questions, and answers
    Show {
        /// Limit output to one phase (start, middle, end)
        phase: Option<String>,

        /// Show question ids alongside prompts
        #[arg(long)]
        ids: bool,
    },

    /// Save one section, validating it has at least one answer
    Save {
        /// Phase to save (start, middle, end)
        phase: String,
    },

    /// Export the journal as a paginated PDF
    Export {
        /// Override the configured output directory
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = if cli.config.exists() {
        Config::load(&cli.config)?
    } else {
        Config::default()
    };

    match cli.command {
        Commands::Init {
            force,
            journal_path,
            export_dir,
            font_path,
        } => {
            let options = InitOptions {
                force,
                journal_path,
                export_dir,
                font_path,
            };
            execute_init(options)?;
        }

        Commands::Open => {
            execute_open(&config).await?;
        }

        Commands::Answer { id, text } => {
            let options = AnswerOptions { id, text };
            execute_answer(options, &config)?;
        }

        Commands::Show { phase, ids } => {
            let options = ShowOptions { phase, ids };
            execute_show(options, &config)?;
        }

        Commands::Save { phase } => {
            let options = SaveOptions { phase };
            execute_save(options, &config)?;
        }

        Commands::Export { out_dir } => {
            let options = ExportOptions { out_dir };
            execute_export(options, &config).await?;
        }
    }

    Ok(())
}
