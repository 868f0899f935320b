//! Implements `journal answer` for non-interactive edits.
//!
//! A one-shot process has no session to keep an unsaved draft in, so this
//! command writes the answer through and persists the full map immediately.
//! The unsaved/saved distinction lives in `journal open`.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input};

use crate::config::Config;
use crate::questions::question_by_id;
use crate::store::{AnswerStore, FileStorage};

/// Options for the answer command
#[derive(Debug, Clone, Default)]
pub struct AnswerOptions {
    /// Question id, e.g. `start_q1`
    pub id: String,
    /// Answer text; prompts interactively when absent
    pub text: Option<String>,
}

/// Execute the answer command
pub fn execute_answer(options: AnswerOptions, config: &Config) -> Result<()> {
    let Some(question) = question_by_id(&options.id) else {
        eprintln!(
            "{} Unknown question id: {}",
            style("✗").red(),
            options.id
        );
        eprintln!("  Run {} to list questions and ids", style("journal show").cyan());
        std::process::exit(1);
    };

    let mut store = AnswerStore::load(FileStorage::new(&config.journal_path));

    let text = match options.text {
        Some(text) => text,
        None => {
            println!("{} {}", style("?").cyan(), question.prompt);
            Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Your answer")
                .with_initial_text(store.get(question.id).to_string())
                .allow_empty(true)
                .interact_text()?
        }
    };

    store.set(question.id, &text);
    store.persist()?;
    println!(
        "{} Saved answer for {}",
        style("✓").green(),
        style(question.id).cyan()
    );

    Ok(())
}
