//! Report formatting and persistence for graded students.
//!
//! Supports a plain-text report, a JSON report, and a graded roster CSV.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::collections::HashMap;
use std::io::Write;
use std::path::Path;
use tracing::debug;

use crate::analyzers::grade::Grade;
use crate::student::Student;

/// One topper line: who, where, and how they scored.
#[derive(Debug, Serialize)]
pub struct TopperEntry {
    pub institution: String,
    pub first_name: String,
    pub last_name: String,
    pub final_score: f64,
    pub grade: Grade,
}

impl From<&Student> for TopperEntry {
    fn from(s: &Student) -> Self {
        TopperEntry {
            institution: s.institution.clone(),
            first_name: s.first_name.clone(),
            last_name: s.last_name.clone(),
            final_score: s.score(),
            grade: s.letter(),
        }
    }
}

/// Complete report, serialized for `--format json`.
#[derive(Debug, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub student_count: usize,
    pub overall: Option<TopperEntry>,
    pub institutions: Vec<TopperEntry>,
}

impl Report {
    pub fn new(
        student_count: usize,
        overall: Option<&Student>,
        toppers: &HashMap<&str, &Student>,
    ) -> Self {
        Report {
            generated_at: Utc::now(),
            student_count,
            overall: overall.map(TopperEntry::from),
            institutions: sorted_toppers(toppers)
                .into_iter()
                .map(TopperEntry::from)
                .collect(),
        }
    }
}

/// One roster row, written by [`write_roster`].
#[derive(Debug, Serialize)]
struct RosterRecord<'a> {
    first_name: &'a str,
    last_name: &'a str,
    institution: &'a str,
    score1: i64,
    score2: i64,
    score3: i64,
    score4: i64,
    final_score: f64,
    grade: Grade,
}

impl<'a> From<&'a Student> for RosterRecord<'a> {
    fn from(s: &'a Student) -> Self {
        let [score1, score2, score3, score4] = s.test_scores;
        RosterRecord {
            first_name: &s.first_name,
            last_name: &s.last_name,
            institution: &s.institution,
            score1,
            score2,
            score3,
            score4,
            final_score: s.score(),
            grade: s.letter(),
        }
    }
}

/// Institution toppers ordered by institution name.
fn sorted_toppers<'a>(toppers: &HashMap<&'a str, &'a Student>) -> Vec<&'a Student> {
    let mut entries: Vec<_> = toppers.iter().map(|(k, v)| (*k, *v)).collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries.into_iter().map(|(_, s)| s).collect()
}

fn topper_line(s: &Student) -> String {
    format!(
        "{} {} ({:.2} - Grade {})",
        s.first_name,
        s.last_name,
        s.score(),
        s.letter()
    )
}

/// Writes the plain-text report: the overall topper, a blank line, then one
/// line per institution.
pub fn write_text<W: Write>(
    out: &mut W,
    overall: Option<&Student>,
    toppers: &HashMap<&str, &Student>,
) -> Result<()> {
    match overall {
        Some(s) => writeln!(out, "Overall Topper: {}", topper_line(s))?,
        None => writeln!(out, "Overall Topper: none")?,
    }

    writeln!(out)?;
    writeln!(out, "University-wise Toppers:")?;
    for s in sorted_toppers(toppers) {
        writeln!(out, "{}: {}", s.institution, topper_line(s))?;
    }

    Ok(())
}

/// Writes the report as pretty-printed JSON.
pub fn write_json<W: Write>(out: &mut W, report: &Report) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Writes every student, in input order, to a CSV file with derived columns.
///
/// Overwrites `path` if it exists.
pub fn write_roster(path: &Path, students: &[Student]) -> Result<()> {
    debug!(path = %path.display(), students = students.len(), "Writing roster CSV");

    let mut writer = WriterBuilder::new().has_headers(true).from_path(path)?;
    for student in students {
        writer.serialize(RosterRecord::from(student))?;
    }
    writer.flush()?;

    Ok(())
}
