#![forbid(unsafe_code)]

//! # Home Floortime Reflection Journal
//!
//! Local-first journaling for a three-phase parenting course: fixed
//! reflection questions for the start, middle, and end of the course,
//! durable free-text answers, and a paginated PDF export of the rendered
//! journal document.
//!
//! ## Example
//!
//! ```rust,no_run
//! use journal::{AnswerStore, FileStorage, Phase, SectionPresenter, UniformPicker};
//!
//! fn main() -> journal::Result<()> {
//!     let storage = FileStorage::new(".floortime/journal.json");
//!     let mut store = AnswerStore::load(storage);
//!
//!     let mut section = SectionPresenter::new(Phase::Start);
//!     section.edit("start_q1", "I hope to understand my child better.", &mut store);
//!     let feedback = section.save(&mut store, &UniformPicker)?;
//!     println!("{feedback}");
//!
//!     Ok(())
//! }
//! ```

pub mod commands;
pub mod config;
pub mod error;
pub mod export;
pub mod questions;
pub mod section;
pub mod store;

// Re-exports
pub use config::Config;
pub use error::{JournalError, Result};
pub use export::{
    Bitmap, DocumentView, ExportOutcome, ExportPipeline, FontRasterizer, Rasterizer,
};
pub use questions::{question_by_id, questions_for, Phase, Question, FEEDBACK_MESSAGES};
pub use section::{FeedbackPicker, SectionPresenter, UniformPicker};
pub use store::{AnswerMap, AnswerStore, FileStorage, MemoryStorage, Storage};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
