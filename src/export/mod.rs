//! Export pipeline.
//!
//! Renders the journal document model, rasterizes it through an injected
//! [`Rasterizer`], scales the bitmap to page width, and paginates it across
//! A4 pages of a PDF written under a fixed filename. The operation is
//! exclusive: a busy flag rejects a second export while one is in flight.

pub mod document;
pub mod paginate;
pub mod pdf;
pub mod raster;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

pub use document::{Block, BlockKind, DocumentView, HiddenControl};
pub use paginate::{Pagination, PAGE_HEIGHT_MM, PAGE_WIDTH_MM};
pub use pdf::EXPORT_FILENAME;
pub use raster::{Bitmap, FontRasterizer, Rasterizer};

use crate::error::{JournalError, Result};

/// Result of an export request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// PDF written to this path
    Written(PathBuf),
    /// The document had nothing to render; aborted silently
    NothingToExport,
}

/// Clears the busy flag on every exit path
struct BusyGuard<'a>(&'a AtomicBool);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Exclusive rasterize-then-assemble export
pub struct ExportPipeline<R: Rasterizer> {
    rasterizer: R,
    busy: AtomicBool,
}

impl<R: Rasterizer> ExportPipeline<R> {
    pub fn new(rasterizer: R) -> Self {
        Self {
            rasterizer,
            busy: AtomicBool::new(false),
        }
    }

    /// Whether an export is currently in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Run one export.
    ///
    /// The export control block is hidden for the duration of the capture
    /// and restored on every path, including rasterizer failure. An empty
    /// document aborts silently (log only). Errors leave the pipeline ready
    /// for a retry.
    pub async fn export(
        &self,
        doc: &mut DocumentView,
        out_dir: &Path,
    ) -> Result<ExportOutcome> {
        if self.busy.swap(true, Ordering::SeqCst) {
            return Err(JournalError::ExportInFlight);
        }
        let _busy = BusyGuard(&self.busy);

        if doc.is_empty() {
            tracing::error!("export requested but the journal document is empty");
            return Ok(ExportOutcome::NothingToExport);
        }

        let bitmap = {
            let hidden = HiddenControl::new(doc);
            self.rasterizer.rasterize(hidden.doc()).await
        }?;

        let pagination = paginate::paginate(bitmap.width(), bitmap.height());
        tracing::debug!(
            pages = pagination.offsets_mm.len(),
            width = bitmap.width(),
            height = bitmap.height(),
            "journal rasterized"
        );

        let path = pdf::assemble(&bitmap, &pagination, out_dir)?;
        Ok(ExportOutcome::Written(path))
    }
}
