//! Renderable journal document model.
//!
//! The export captures visual layout, not the raw answer map, so the
//! document is a flat list of typed blocks built from the question table
//! plus the current answers. The export control is part of the document but
//! is hidden for the duration of a capture through a scoped guard.

use crate::questions::{questions_for, Phase};
use crate::store::AnswerMap;

/// Visual role of a block, used by the rasterizer for sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    Title,
    Subtitle,
    SectionHeader,
    Prompt,
    Answer,
    Spacer,
    /// The export trigger; excluded from capture while hidden
    Control,
}

/// One renderable line group
#[derive(Debug, Clone)]
pub struct Block {
    pub kind: BlockKind,
    pub text: String,
}

/// The fully rendered journal subtree handed to the rasterizer
#[derive(Debug, Clone)]
pub struct DocumentView {
    blocks: Vec<Block>,
    control_hidden: bool,
}

impl DocumentView {
    /// Build the document from the static question table and the current
    /// answers. Unanswered questions render with an empty answer area.
    pub fn from_answers(answers: &AnswerMap) -> Self {
        let mut blocks = vec![
            Block {
                kind: BlockKind::Title,
                text: "Home Floortime".to_string(),
            },
            Block {
                kind: BlockKind::Subtitle,
                text: "Reflection Journal".to_string(),
            },
        ];

        for phase in Phase::ALL {
            blocks.push(Block {
                kind: BlockKind::Spacer,
                text: String::new(),
            });
            blocks.push(Block {
                kind: BlockKind::SectionHeader,
                text: phase.title().to_string(),
            });
            for question in questions_for(phase) {
                blocks.push(Block {
                    kind: BlockKind::Prompt,
                    text: question.prompt.to_string(),
                });
                let answer = answers.get(question.id).map(String::as_str).unwrap_or("");
                blocks.push(Block {
                    kind: BlockKind::Answer,
                    text: answer.to_string(),
                });
            }
        }

        blocks.push(Block {
            kind: BlockKind::Control,
            text: "Download as PDF".to_string(),
        });

        Self {
            blocks,
            control_hidden: false,
        }
    }

    /// A document with no renderable content; exports abort on it
    pub fn empty() -> Self {
        Self {
            blocks: Vec::new(),
            control_hidden: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Whether the export control would appear in a capture right now
    pub fn control_visible(&self) -> bool {
        !self.control_hidden
    }

    /// Blocks the rasterizer may paint, skipping a hidden control
    pub fn visible_blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks
            .iter()
            .filter(move |b| b.kind != BlockKind::Control || !self.control_hidden)
    }
}

/// Scoped hide of the export control: hidden on acquire, restored on drop,
/// so the control never leaks into a capture and never stays hidden after a
/// failed one.
pub struct HiddenControl<'a> {
    doc: &'a mut DocumentView,
}

impl<'a> HiddenControl<'a> {
    pub fn new(doc: &'a mut DocumentView) -> Self {
        doc.control_hidden = true;
        Self { doc }
    }

    pub fn doc(&self) -> &DocumentView {
        self.doc
    }
}

impl Drop for HiddenControl<'_> {
    fn drop(&mut self) {
        self.doc.control_hidden = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_contains_every_question() {
        let doc = DocumentView::from_answers(&AnswerMap::new());
        let prompts = doc
            .visible_blocks()
            .filter(|b| b.kind == BlockKind::Prompt)
            .count();
        assert_eq!(prompts, 12);
    }

    #[test]
    fn answers_flow_into_their_blocks() {
        let mut answers = AnswerMap::new();
        answers.insert("end_q2".into(), "Shared attention".into());
        let doc = DocumentView::from_answers(&answers);
        assert!(doc
            .visible_blocks()
            .any(|b| b.kind == BlockKind::Answer && b.text == "Shared attention"));
    }

    #[test]
    fn hidden_control_is_skipped_then_restored() {
        let mut doc = DocumentView::from_answers(&AnswerMap::new());
        assert!(doc
            .visible_blocks()
            .any(|b| b.kind == BlockKind::Control));

        {
            let hidden = HiddenControl::new(&mut doc);
            assert!(!hidden
                .doc()
                .visible_blocks()
                .any(|b| b.kind == BlockKind::Control));
        }

        assert!(doc.control_visible());
        assert!(doc
            .visible_blocks()
            .any(|b| b.kind == BlockKind::Control));
    }
}
