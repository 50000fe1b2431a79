//! The parsed student record.

use std::fmt;

use crate::grade::Grade;

/// One validated input line.
///
/// Records are built by the parser and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    id: i32,
    full_name: String,
    score: i32,
}

impl Student {
    pub fn new(id: i32, full_name: impl Into<String>, score: i32) -> Self {
        Self {
            id,
            full_name: full_name.into(),
            score,
        }
    }

    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    /// The grade band for this student's score.
    pub fn grade(&self) -> Grade {
        Grade::from_score(self.score)
    }
}

/// Formats the report line: `<Name> (ID: <Id>): Score = <Score>, Grade = <Grade>`.
impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (ID: {}): Score = {}, Grade = {}",
            self.full_name,
            self.id,
            self.score,
            self.grade()
        )
    }
}
