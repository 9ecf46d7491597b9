use serde::Serialize;
use std::fmt;

/// Letter grade derived from a student's final score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Grade {
    F,
    C,
    B,
    A,
}

impl Grade {
    pub fn as_str(self) -> &'static str {
        match self {
            Grade::F => "F",
            Grade::C => "C",
            Grade::B => "B",
            Grade::A => "A",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a final score into a letter grade.
///
/// Each band includes its lower bound.
///
/// | Range        | Grade |
/// |--------------|-------|
/// | >= 70        | A     |
/// | >= 50        | B     |
/// | >= 35        | C     |
/// | < 35         | F     |
pub fn grade(score: f64) -> Grade {
    match score {
        s if s >= 70.0 => Grade::A,
        s if s >= 50.0 => Grade::B,
        s if s >= 35.0 => Grade::C,
        _ => Grade::F,
    }
}
