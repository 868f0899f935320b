//! Implements `journal save`: explicit per-section save with validation.

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::error::JournalError;
use crate::questions::Phase;
use crate::section::{SectionPresenter, UniformPicker};
use crate::store::{AnswerStore, FileStorage};

/// Options for the save command
#[derive(Debug, Clone)]
pub struct SaveOptions {
    /// Phase to save (start, middle, end)
    pub phase: String,
}

/// Execute the save command
pub fn execute_save(options: SaveOptions, config: &Config) -> Result<()> {
    let Some(phase) = Phase::parse(&options.phase) else {
        eprintln!(
            "{} Unknown phase '{}'. Expected start, middle, or end.",
            style("✗").red(),
            options.phase
        );
        std::process::exit(1);
    };

    let mut store = AnswerStore::load(FileStorage::new(&config.journal_path));
    let mut section = SectionPresenter::new(phase);

    match section.save(&mut store, &UniformPicker) {
        Ok(feedback) => {
            println!("{} {} section saved", style("✓").green(), phase.title());
            println!("\n  {}", style(feedback).italic());
            Ok(())
        }
        Err(JournalError::EmptySection(_)) => {
            eprintln!(
                "{} Please answer at least one question before saving.",
                style("✗").red()
            );
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
