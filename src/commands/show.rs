//! Implements `journal show`: render phases, answers, and saved state.

use anyhow::Result;
use console::style;

use crate::config::Config;
use crate::questions::{questions_for, Phase};
use crate::section::SectionPresenter;
use crate::store::{AnswerStore, FileStorage};

/// Options for the show command
#[derive(Debug, Clone, Default)]
pub struct ShowOptions {
    /// Limit output to one phase (start, middle, end)
    pub phase: Option<String>,
    /// Show question ids alongside prompts
    pub ids: bool,
}

/// Execute the show command
pub fn execute_show(options: ShowOptions, config: &Config) -> Result<()> {
    let store = AnswerStore::load(FileStorage::new(&config.journal_path));

    let phases: Vec<Phase> = match options.phase.as_deref() {
        Some(key) => match Phase::parse(key) {
            Some(phase) => vec![phase],
            None => {
                eprintln!(
                    "{} Unknown phase '{}'. Expected start, middle, or end.",
                    style("✗").red(),
                    key
                );
                std::process::exit(1);
            }
        },
        None => Phase::ALL.to_vec(),
    };

    println!("{}", style("Home Floortime — Reflection Journal").bold());

    for phase in phases {
        let mut section = SectionPresenter::new(phase);
        section.refresh(&store);
        let marker = if section.is_saved() {
            style("saved ✓").green()
        } else {
            style("unsaved").yellow()
        };
        println!("\n{} [{}]", style(phase.title()).bold().underlined(), marker);

        for question in questions_for(phase) {
            if options.ids {
                println!("  {} {}", style(question.id).dim(), question.prompt);
            } else {
                println!("  {}", question.prompt);
            }
            let answer = store.get(question.id);
            if answer.trim().is_empty() {
                println!("    {}", style("(no answer yet)").dim());
            } else {
                for line in answer.lines() {
                    println!("    {line}");
                }
            }
        }
    }

    Ok(())
}
