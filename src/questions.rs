//! Static question table.
//!
//! Three course phases, four reflection questions each. The table is
//! immutable; answers are keyed by the question ids defined here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three fixed course stages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Start,
    Middle,
    End,
}

impl Phase {
    /// All phases in course order
    pub const ALL: [Phase; 3] = [Phase::Start, Phase::Middle, Phase::End];

    /// Stable key used in question ids and CLI arguments
    pub fn key(self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::Middle => "middle",
            Phase::End => "end",
        }
    }

    /// Section heading shown in the journal
    pub fn title(self) -> &'static str {
        match self {
            Phase::Start => "Start of the course",
            Phase::Middle => "Middle of the course",
            Phase::End => "End of the course",
        }
    }

    /// Parse a CLI phase argument
    pub fn parse(s: &str) -> Option<Phase> {
        match s.to_ascii_lowercase().as_str() {
            "start" => Some(Phase::Start),
            "middle" => Some(Phase::Middle),
            "end" => Some(Phase::End),
            _ => None,
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single reflection question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Unique identifier, `<phase>_q<n>`
    pub id: &'static str,
    /// Prompt shown to the parent
    pub prompt: &'static str,
}

const START_QUESTIONS: [Question; 4] = [
    Question {
        id: "start_q1",
        prompt: "What do you hope to get out of this course? What are your expectations?",
    },
    Question {
        id: "start_q2",
        prompt: "Describe your child's strengths. What do they do best?",
    },
    Question {
        id: "start_q3",
        prompt: "What difficulties in communicating and connecting with your child are you experiencing right now?",
    },
    Question {
        id: "start_q4",
        prompt: "How do you currently understand your child's inner world and motivation?",
    },
];

const MIDDLE_QUESTIONS: [Question; 4] = [
    Question {
        id: "middle_q1",
        prompt: "What changes in your child's behavior or communication have you noticed since the course began?",
    },
    Question {
        id: "middle_q2",
        prompt: "What new things have you learned about your child and about yourself as a parent?",
    },
    Question {
        id: "middle_q3",
        prompt: "Which strategies from the course have been most useful for your family?",
    },
    Question {
        id: "middle_q4",
        prompt: "Has your understanding of their difficulties changed? If so, how?",
    },
];

const END_QUESTIONS: [Question; 4] = [
    Question {
        id: "end_q1",
        prompt: "Looking back, how has your relationship with your child changed over the course?",
    },
    Question {
        id: "end_q2",
        prompt: "Which skills and strengths have you helped your child develop?",
    },
    Question {
        id: "end_q3",
        prompt: "Compare your answers from the start and the end of the course. What has shifted in your perception?",
    },
    Question {
        id: "end_q4",
        prompt: "What are your next steps in supporting your child's development?",
    },
];

/// Encouragement shown after a successful section save
pub const FEEDBACK_MESSAGES: [&str; 5] = [
    "Thank you for sharing your thoughts. Reflection is an important step toward understanding and growth.",
    "You are doing tremendous work. Every step you take, however small, matters a great deal.",
    "It is wonderful that you make time to reflect. It helps you see the bigger picture and notice progress.",
    "Your observations are very valuable. Keep going, you are on the right track!",
    "Remember that caring for yourself matters as much as caring for your child. You are your family's most important resource.",
];

/// The fixed question set for one phase
pub fn questions_for(phase: Phase) -> &'static [Question] {
    match phase {
        Phase::Start => &START_QUESTIONS,
        Phase::Middle => &MIDDLE_QUESTIONS,
        Phase::End => &END_QUESTIONS,
    }
}

/// Look up a question by id across all phases
pub fn question_by_id(id: &str) -> Option<Question> {
    Phase::ALL
        .iter()
        .flat_map(|p| questions_for(*p).iter())
        .find(|q| q.id == id)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_questions_per_phase() {
        for phase in Phase::ALL {
            assert_eq!(questions_for(phase).len(), 4);
        }
    }

    #[test]
    fn question_ids_are_unique() {
        let mut ids: Vec<&str> = Phase::ALL
            .iter()
            .flat_map(|p| questions_for(*p).iter().map(|q| q.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 12);
    }

    #[test]
    fn lookup_by_id() {
        assert_eq!(question_by_id("middle_q3").unwrap().id, "middle_q3");
        assert!(question_by_id("middle_q9").is_none());
    }

    #[test]
    fn phase_parse_round_trip() {
        for phase in Phase::ALL {
            assert_eq!(Phase::parse(phase.key()), Some(phase));
        }
        assert_eq!(Phase::parse("beginning"), None);
    }
}
