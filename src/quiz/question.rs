use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four letters a question offers its options under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Choice {
    A,
    B,
    C,
    D,
}

impl Choice {
    pub const COUNT: usize = 4;

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(Choice::A),
            'B' => Some(Choice::B),
            'C' => Some(Choice::C),
            'D' => Some(Choice::D),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Choice::A => "A",
            Choice::B => "B",
            Choice::C => "C",
            Choice::D => "D",
        }
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully-formed multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// 1-based position in the quiz, counted across all chunks
    pub question_number: usize,

    pub question_text: String,

    /// option text per letter, always exactly four entries
    pub options: BTreeMap<Choice, String>,

    /// the correct choice, always present among the option keys
    pub answer: Choice,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quiz {
    pub questions: Vec<Question>,

    /// chunks that contributed no questions, with the reason
    pub warnings: Vec<ChunkWarning>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChunkWarning {
    /// 1-based index of the chunk whose reply was discarded
    pub chunk_index: usize,
    pub message: String,
}
