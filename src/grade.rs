//! Letter grade bands.

use std::fmt;

/// One of the five grade bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map a score to its band.
    ///
    /// Bands are inclusive on both ends. Scores outside 0-100, including
    /// negative ones, fall through to `F`.
    pub fn from_score(score: i32) -> Self {
        match score {
            80..=100 => Grade::A,
            70..=79 => Grade::B,
            60..=69 => Grade::C,
            50..=59 => Grade::D,
            _ => Grade::F,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shorthand for [`Grade::from_score`].
pub fn grade_of(score: i32) -> Grade {
    Grade::from_score(score)
}
