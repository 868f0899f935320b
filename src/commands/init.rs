//! Implements `journal init` for first-time setup.

use std::path::PathBuf;

use anyhow::Result;
use console::style;

use crate::config::Config;

/// Options for the init command
#[derive(Debug, Clone, Default)]
pub struct InitOptions {
    /// Force overwrite existing config
    pub force: bool,
    /// Journal data file path
    pub journal_path: Option<PathBuf>,
    /// Directory exported PDFs are written into
    pub export_dir: Option<PathBuf>,
    /// Rasterizer font path
    pub font_path: Option<PathBuf>,
}

/// Execute the init command
pub fn execute_init(options: InitOptions) -> Result<()> {
    let config_path = PathBuf::from(".floortime.config.json");

    if config_path.exists() && !options.force {
        eprintln!(
            "{} Config file already exists. Use --force to overwrite.",
            style("✗").red()
        );
        std::process::exit(1);
    }

    let mut config = Config::default();
    if let Some(path) = options.journal_path {
        config.journal_path = path;
    }
    if let Some(dir) = options.export_dir {
        config.export_dir = dir;
    }
    if let Some(font) = options.font_path {
        config.font_path = font;
    }

    if let Some(parent) = config.journal_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
            println!(
                "{} Created {}/ directory",
                style("✓").green(),
                parent.display()
            );
        }
    }

    config.save(&config_path)?;
    println!("{} Created {}", style("✓").green(), config_path.display());

    println!("\n{}", style("Next steps:").bold());
    println!(
        "  1. Run {} for an interactive journaling session",
        style("journal open").cyan()
    );
    println!(
        "  2. Run {} when you want a PDF of your journal",
        style("journal export").cyan()
    );

    Ok(())
}
