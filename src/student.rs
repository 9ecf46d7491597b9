//! The student entity and its construction from a raw CSV row.

use crate::analyzers::grade::{Grade, grade};
use crate::analyzers::utility::average;
use crate::error::{Error, Result};

/// Number of test score columns per student.
pub const SCORE_COUNT: usize = 4;

/// Fields a row needs: first name, last name, institution, then the scores.
pub const MIN_FIELDS: usize = 3 + SCORE_COUNT;

/// A student and their test results.
///
/// `final_score` and `grade` are derived. [`Student::from_row`] fills them
/// immediately; [`Student::new`] leaves them unset until
/// [`Student::assign_grade`] is called.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub institution: String,
    pub test_scores: [i64; SCORE_COUNT],
    pub final_score: Option<f64>,
    pub grade: Option<Grade>,
}

impl Student {
    /// Creates an ungraded student.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        institution: impl Into<String>,
        test_scores: [i64; SCORE_COUNT],
    ) -> Self {
        Student {
            first_name: first_name.into(),
            last_name: last_name.into(),
            institution: institution.into(),
            test_scores,
            final_score: None,
            grade: None,
        }
    }

    /// Builds a graded student from a raw row.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MalformedRow`] if the row has fewer than
    /// [`MIN_FIELDS`] fields, or [`Error::InvalidScore`] if any score field
    /// is not an integer once surrounding whitespace is trimmed.
    pub fn from_row<S: AsRef<str>>(row: &[S]) -> Result<Self> {
        if row.len() < MIN_FIELDS {
            return Err(Error::MalformedRow {
                row: owned_row(row),
            });
        }

        let mut test_scores = [0i64; SCORE_COUNT];
        for (slot, field) in test_scores.iter_mut().zip(&row[3..MIN_FIELDS]) {
            *slot = field
                .as_ref()
                .trim()
                .parse()
                .map_err(|_| Error::InvalidScore {
                    row: owned_row(row),
                })?;
        }

        let mut student = Student::new(
            row[0].as_ref(),
            row[1].as_ref(),
            row[2].as_ref(),
            test_scores,
        );
        student.assign_grade();
        Ok(student)
    }

    /// Populates `final_score` and `grade` from the test scores.
    pub fn assign_grade(&mut self) {
        let score = average(&self.test_scores).unwrap_or_default();
        self.final_score = Some(score);
        self.grade = Some(grade(score));
    }

    /// The final score, computed on demand if it has not been assigned yet.
    pub fn score(&self) -> f64 {
        self.final_score
            .unwrap_or_else(|| average(&self.test_scores).unwrap_or_default())
    }

    /// The letter grade, computed on demand if it has not been assigned yet.
    pub fn letter(&self) -> Grade {
        self.grade.unwrap_or_else(|| grade(self.score()))
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

fn owned_row<S: AsRef<str>>(row: &[S]) -> Vec<String> {
    row.iter().map(|f| f.as_ref().to_string()).collect()
}
