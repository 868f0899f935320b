//! Implements `journal open`: the interactive journaling session.
//!
//! The session is the CLI rendition of the journal form: sections expand and
//! collapse, edits stay in memory until an explicit section save, and the
//! export captures whatever the session currently shows.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::config::Config;
use crate::error::JournalError;
use crate::export::{DocumentView, ExportOutcome, ExportPipeline, FontRasterizer};
use crate::questions::questions_for;
use crate::section::{SectionPresenter, UniformPicker};
use crate::store::{AnswerStore, FileStorage, Storage};

/// Execute the open command
pub async fn execute_open(config: &Config) -> Result<()> {
    let mut store = AnswerStore::load(FileStorage::new(&config.journal_path));
    let mut sections = SectionPresenter::all();
    for section in &mut sections {
        section.refresh(&store);
    }

    println!("{}", style("Home Floortime — Reflection Journal").bold());

    loop {
        let mut items: Vec<String> = sections.iter().map(section_label).collect();
        items.push("Export to PDF".to_string());
        items.push("Quit".to_string());

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Journal")
            .items(&items)
            .default(0)
            .interact()?;

        if choice < sections.len() {
            let section = &mut sections[choice];
            section.toggle();
            if section.is_expanded() {
                section_menu(section, &mut store)?;
            }
        } else if choice == sections.len() {
            run_export(config, &store).await;
        } else {
            break;
        }
    }

    Ok(())
}

fn section_label(section: &SectionPresenter) -> String {
    let fold = if section.is_expanded() { "−" } else { "+" };
    if section.is_saved() {
        format!("{fold} {} {}", section.phase().title(), style("✓ saved").green())
    } else {
        format!("{fold} {}", section.phase().title())
    }
}

fn section_menu<S: Storage>(
    section: &mut SectionPresenter,
    store: &mut AnswerStore<S>,
) -> Result<()> {
    loop {
        let questions = questions_for(section.phase());
        let mut items: Vec<String> = questions
            .iter()
            .map(|q| {
                let mark = if store.get(q.id).trim().is_empty() {
                    style("·").dim()
                } else {
                    style("✓").green()
                };
                format!("{mark} {}", truncate(q.prompt, 64))
            })
            .collect();
        items.push(if section.is_saved() {
            "Save section (saved ✓)".to_string()
        } else {
            "Save section".to_string()
        });
        items.push("Collapse and go back".to_string());

        let choice = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(section.phase().title())
            .items(&items)
            .default(0)
            .interact()?;

        if choice < questions.len() {
            let question = questions[choice];
            println!("{} {}", style("?").cyan(), question.prompt);
            let text: String = Input::with_theme(&ColorfulTheme::default())
                .with_prompt("Your answer")
                .with_initial_text(store.get(question.id).to_string())
                .allow_empty(true)
                .interact_text()?;
            section.edit(question.id, &text, store);
        } else if choice == questions.len() {
            match section.save(store, &UniformPicker) {
                Ok(feedback) => {
                    println!("{} Saved", style("✓").green());
                    println!("  {}", style(feedback).italic());
                }
                Err(JournalError::EmptySection(_)) => {
                    eprintln!(
                        "{} Please answer at least one question before saving.",
                        style("✗").red()
                    );
                }
                Err(e) => return Err(e.into()),
            }
        } else {
            section.toggle();
            return Ok(());
        }
    }
}

/// Export the session as it stands, unsaved edits included. Failures keep
/// the session alive so the export can simply be retried.
async fn run_export<S: Storage>(config: &Config, store: &AnswerStore<S>) {
    let rasterizer = match FontRasterizer::from_file(&config.font_path, config.supersample) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("{} Could not create the PDF: {e}", style("✗").red());
            return;
        }
    };
    let pipeline = ExportPipeline::new(rasterizer);
    let mut doc = DocumentView::from_answers(store.answers());

    match pipeline.export(&mut doc, &config.export_dir).await {
        Ok(ExportOutcome::Written(path)) => {
            println!("{} Exported {}", style("✓").green(), path.display());
        }
        Ok(ExportOutcome::NothingToExport) => {}
        Err(e) => {
            eprintln!(
                "{} Could not create the PDF. Please try again: {e}",
                style("✗").red()
            );
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
