use crate::student::Student;
use std::collections::HashMap;
use tracing::debug;

/// Returns the student with the highest final score, or `None` for an empty slice.
///
/// Ties go to the student that appears first.
#[tracing::instrument(skip_all, fields(students = students.len()))]
pub fn overall_topper(students: &[Student]) -> Option<&Student> {
    let mut best: Option<&Student> = None;

    for student in students {
        let better = match best {
            Some(current) => student.score() > current.score(),
            None => true,
        };
        if better {
            best = Some(student);
        }
    }

    if let Some(topper) = best {
        debug!(name = %topper.full_name(), score = topper.score(), "Overall topper found");
    }

    best
}

/// Maps each institution to its highest-scoring student.
///
/// Institutions are matched exactly (case-sensitive). Within an institution,
/// ties go to the student that appears first. Map iteration order is unspecified.
#[tracing::instrument(skip_all, fields(students = students.len()))]
pub fn toppers_by_institution(students: &[Student]) -> HashMap<&str, &Student> {
    let mut toppers: HashMap<&str, &Student> = HashMap::new();

    for student in students {
        toppers
            .entry(student.institution.as_str())
            .and_modify(|current| {
                if student.score() > current.score() {
                    *current = student;
                }
            })
            .or_insert(student);
    }

    debug!(institutions = toppers.len(), "Institution toppers found");
    toppers
}
