//! Student grading record and letter grade bands.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One parsed `id,name,score` line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: u32,
    pub name: String,
    pub score: i32,
}

impl StudentRecord {
    pub fn new(id: u32, name: impl Into<String>, score: i32) -> Self {
        Self {
            id,
            name: name.into(),
            score,
        }
    }

    pub fn grade(&self) -> Grade {
        Grade::for_score(self.score)
    }
}

/// Letter grade. Bands are inclusive on both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Maps a score to its band: 80–100 A, 70–79 B, 60–69 C, 50–59 D.
    ///
    /// Anything else, including scores outside `0..=100`, is `F`.
    pub fn for_score(score: i32) -> Self {
        match score {
            80..=100 => Self::A,
            70..=79 => Self::B,
            60..=69 => Self::C,
            50..=59 => Self::D,
            _ => Self::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::F => "F",
        }
    }
}

impl Display for Grade {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
