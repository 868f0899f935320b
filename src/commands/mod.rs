//! CLI command implementations.
//!
//! Each command is in its own submodule: `execute_<name>` plus a
//! `<Name>Options` struct mapped from the clap surface in `main.rs`.

pub mod answer;
pub mod export;
pub mod init;
pub mod open;
pub mod save;
pub mod show;

pub use answer::{execute_answer, AnswerOptions};
pub use export::{execute_export, ExportOptions};
pub use init::{execute_init, InitOptions};
pub use open::execute_open;
pub use save::{execute_save, SaveOptions};
pub use show::{execute_show, ShowOptions};
