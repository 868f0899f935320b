//! Implements `journal export`: rasterize the journal and write the PDF.

use std::time::Duration;

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::Config;
use crate::export::{DocumentView, ExportOutcome, ExportPipeline, FontRasterizer};
use crate::store::{AnswerStore, FileStorage};

/// Options for the export command
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Override the configured output directory
    pub out_dir: Option<std::path::PathBuf>,
}

/// Execute the export command
pub async fn execute_export(options: ExportOptions, config: &Config) -> Result<()> {
    let store = AnswerStore::load(FileStorage::new(&config.journal_path));
    let mut doc = DocumentView::from_answers(store.answers());

    let rasterizer = match FontRasterizer::from_file(&config.font_path, config.supersample) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} Could not create the PDF: {e}", style("✗").red());
            eprintln!(
                "  Set {} in .floortime.config.json to a TTF file on this machine",
                style("font_path").cyan()
            );
            std::process::exit(1);
        }
    };
    let pipeline = ExportPipeline::new(rasterizer);

    let out_dir = options.out_dir.unwrap_or_else(|| config.export_dir.clone());
    std::fs::create_dir_all(&out_dir)?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("Rendering journal...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let outcome = pipeline.export(&mut doc, &out_dir).await;
    spinner.finish_and_clear();

    match outcome {
        Ok(ExportOutcome::Written(path)) => {
            println!("{} Exported {}", style("✓").green(), path.display());
            Ok(())
        }
        // Nothing to render: silent abort, the log line is enough
        Ok(ExportOutcome::NothingToExport) => Ok(()),
        Err(e) => {
            eprintln!(
                "{} Could not create the PDF. Please try again: {e}",
                style("✗").red()
            );
            std::process::exit(1);
        }
    }
}
