//! End-to-end journal flow tests
//!
//! Exercises persistence, section save semantics, and the export pipeline
//! through the public API.

use async_trait::async_trait;
use journal::export::{Bitmap, DocumentView, ExportOutcome, ExportPipeline, Rasterizer};
use journal::section::FixedPicker;
use journal::{
    questions_for, AnswerMap, AnswerStore, FileStorage, JournalError, Phase, SectionPresenter,
    FEEDBACK_MESSAGES,
};

// =============================================================================
// Persistence round trips
// =============================================================================

mod persistence_tests {
    use super::*;

    #[test]
    fn file_backed_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");

        let mut store = AnswerStore::load(FileStorage::new(&path));
        store.set("start_q1", "Growth");
        store.set("middle_q2", "Patience with myself");
        store.persist().unwrap();

        let reloaded = AnswerStore::load(FileStorage::new(&path));
        assert_eq!(reloaded.answers(), store.answers());
        assert_eq!(reloaded.get("middle_q2"), "Patience with myself");
    }

    #[test]
    fn corrupted_file_loads_as_empty_journal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");
        std::fs::write(&path, "<<<definitely not json>>>").unwrap();

        let store = AnswerStore::load(FileStorage::new(&path));
        assert!(store.answers().is_empty());
        assert_eq!(store.get("start_q1"), "");
    }

    #[test]
    fn missing_file_loads_as_empty_journal() {
        let dir = tempfile::tempdir().unwrap();
        let store = AnswerStore::load(FileStorage::new(dir.path().join("absent.json")));
        assert!(store.answers().is_empty());
    }
}

// =============================================================================
// Section save semantics
// =============================================================================

mod save_tests {
    use super::*;

    #[test]
    fn blank_section_save_leaves_storage_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");

        let mut store = AnswerStore::load(FileStorage::new(&path));
        let mut section = SectionPresenter::new(Phase::Middle);
        for q in questions_for(Phase::Middle) {
            section.edit(q.id, "  \t ", &mut store);
        }

        let err = section.save(&mut store, &FixedPicker(0)).unwrap_err();
        assert!(matches!(err, JournalError::EmptySection(_)));
        assert!(!path.exists());
    }

    #[test]
    fn one_answer_persists_every_key_of_the_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");

        let mut store = AnswerStore::load(FileStorage::new(&path));
        let mut section = SectionPresenter::new(Phase::Start);
        section.edit("start_q1", "Growth", &mut store);
        section.edit("start_q2", "", &mut store);
        section.edit("start_q3", "", &mut store);
        section.edit("start_q4", "", &mut store);

        let feedback = section.save(&mut store, &FixedPicker(1)).unwrap();
        assert_eq!(feedback, FEEDBACK_MESSAGES[1]);

        let persisted: AnswerMap =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(persisted.len(), 4);
        assert_eq!(persisted["start_q1"], "Growth");
        assert_eq!(persisted["start_q2"], "");
        assert_eq!(persisted["start_q3"], "");
        assert_eq!(persisted["start_q4"], "");
    }

    #[test]
    fn saving_one_section_carries_other_sections_answers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");

        let mut store = AnswerStore::load(FileStorage::new(&path));
        let mut start = SectionPresenter::new(Phase::Start);
        let mut end = SectionPresenter::new(Phase::End);
        end.edit("end_q1", "We play together every evening now", &mut store);
        start.edit("start_q1", "Growth", &mut store);

        start.save(&mut store, &FixedPicker(0)).unwrap();

        let persisted: AnswerMap =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(persisted["end_q1"], "We play together every evening now");
    }

    #[test]
    fn reload_with_complete_section_shows_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("journal.json");

        let mut store = AnswerStore::load(FileStorage::new(&path));
        let mut section = SectionPresenter::new(Phase::End);
        for q in questions_for(Phase::End) {
            section.edit(q.id, "done", &mut store);
        }
        section.save(&mut store, &FixedPicker(0)).unwrap();

        // Fresh process: load, refresh, no save click
        let store = AnswerStore::load(FileStorage::new(&path));
        let mut section = SectionPresenter::new(Phase::End);
        section.refresh(&store);
        assert!(section.is_saved());
    }
}

// =============================================================================
// Export pipeline
// =============================================================================

mod export_tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    /// Captures whether the control was visible during rasterization
    struct ControlSpy {
        saw_control: Arc<AtomicBool>,
    }

    #[async_trait]
    impl Rasterizer for ControlSpy {
        async fn rasterize(&self, doc: &DocumentView) -> journal::Result<Bitmap> {
            self.saw_control
                .store(doc.control_visible(), Ordering::SeqCst);
            Ok(Bitmap::new(200, 900))
        }
    }

    #[tokio::test]
    async fn control_is_hidden_during_capture_and_restored_after() {
        let dir = tempfile::tempdir().unwrap();
        let saw_control = Arc::new(AtomicBool::new(true));
        let pipeline = ExportPipeline::new(ControlSpy {
            saw_control: Arc::clone(&saw_control),
        });

        let mut answers = AnswerMap::new();
        answers.insert("start_q1".into(), "Growth".into());
        let mut doc = DocumentView::from_answers(&answers);

        let outcome = pipeline.export(&mut doc, dir.path()).await.unwrap();
        assert!(matches!(outcome, ExportOutcome::Written(_)));
        assert!(!saw_control.load(Ordering::SeqCst));
        assert!(doc.control_visible());
    }

    #[tokio::test]
    async fn export_produces_a_parseable_pdf_header() {
        let dir = tempfile::tempdir().unwrap();
        let pipeline = ExportPipeline::new(ControlSpy {
            saw_control: Arc::new(AtomicBool::new(false)),
        });

        let mut doc = DocumentView::from_answers(&AnswerMap::new());
        let outcome = pipeline.export(&mut doc, dir.path()).await.unwrap();

        let ExportOutcome::Written(path) = outcome else {
            panic!("expected a written artifact");
        };
        let bytes = std::fs::read(path).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }
}
