//! CSV loader for student records.

use crate::error::{Error, Result};
use crate::student::Student;
use csv::ReaderBuilder;
use std::path::Path;
use tracing::{debug, info};

/// Reads a comma-delimited file into raw rows, dropping the header row.
///
/// The file is read fully into memory before parsing. Quoted fields may
/// contain commas. Field contents are returned untrimmed.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read and [`Error::Parse`] if
/// the CSV structure is malformed, including rows whose field count differs
/// from the header's and rows that are not valid UTF-8.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn load_rows(path: &Path) -> Result<Vec<Vec<String>>> {
    let contents = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(contents.as_slice());

    let mut rows = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(String::from).collect());
    }

    debug!(rows = rows.len(), "CSV rows read");
    Ok(rows)
}

/// Loads and grades every student in the file at `path`.
///
/// Any bad row fails the whole load; no partial list is returned.
pub fn load_students(path: &Path) -> Result<Vec<Student>> {
    let students = load_rows(path)?
        .iter()
        .map(|row| Student::from_row(row.as_slice()))
        .collect::<Result<Vec<_>>>()?;

    info!(path = %path.display(), students = students.len(), "Students loaded");
    Ok(students)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzers::grade::Grade;
    use std::env;
    use std::fs;
    use std::path::PathBuf;

    fn temp_csv(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    const HEADER: &str = "FirstName,LastName,University,Test1,Test2,Test3,Test4\n";

    #[test]
    fn test_load_rows_skips_header() {
        let path = temp_csv(
            "grade_topper_test_header.csv",
            &format!("{HEADER}Bernard,Wilson,Boston University,90,85,76,71\n"),
        );

        let rows = load_rows(&path).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][0], "Bernard");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rows_quoted_commas() {
        let path = temp_csv(
            "grade_topper_test_quoted.csv",
            &format!("{HEADER}Karina,Shaw,\"University of California, Davis\",69,78,56,70\n"),
        );

        let rows = load_rows(&path).unwrap();
        assert_eq!(rows[0].len(), 7);
        assert_eq!(rows[0][2], "University of California, Davis");

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rows_header_only() {
        let path = temp_csv("grade_topper_test_header_only.csv", HEADER);
        assert!(load_rows(&path).unwrap().is_empty());
        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rows_missing_file() {
        let path = env::temp_dir().join("grade_topper_test_does_not_exist.csv");
        assert!(matches!(load_rows(&path), Err(Error::Io { .. })));
    }

    #[test]
    fn test_load_rows_inconsistent_field_count() {
        let path = temp_csv(
            "grade_topper_test_ragged.csv",
            &format!("{HEADER}Bernard,Wilson,Boston University,90,85,76,71,99\n"),
        );

        assert!(matches!(load_rows(&path), Err(Error::Parse { .. })));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_rows_invalid_utf8() {
        let path = env::temp_dir().join("grade_topper_test_invalid_utf8.csv");
        let mut contents = HEADER.as_bytes().to_vec();
        contents.extend_from_slice(b"Bern\xffard,Wilson,Boston University,90,85,76,71\n");
        fs::write(&path, contents).unwrap();

        assert!(matches!(load_rows(&path), Err(Error::Parse { .. })));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_students_grades_each_row() {
        let path = temp_csv(
            "grade_topper_test_students.csv",
            &format!(
                "{HEADER}Kaylen,Johnson,Duke University, 52,47,35,38\n\
                 Bernard,Wilson,Boston University,90,85,76,71\n"
            ),
        );

        let students = load_students(&path).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].final_score, Some(43.0));
        assert_eq!(students[0].grade, Some(Grade::C));
        assert_eq!(students[1].final_score, Some(80.5));
        assert_eq!(students[1].grade, Some(Grade::A));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_students_short_rows_fail_whole_load() {
        let path = temp_csv(
            "grade_topper_test_short.csv",
            "First,Last,University\nBernard,Wilson,Boston University\n",
        );

        assert!(matches!(
            load_students(&path),
            Err(Error::MalformedRow { .. })
        ));

        fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_load_students_bad_score_fails_whole_load() {
        let path = temp_csv(
            "grade_topper_test_bad_score.csv",
            &format!(
                "{HEADER}Bernard,Wilson,Boston University,90,85,76,71\n\
                 Tamara,Webb,Duke University,73,sixty,90,58\n"
            ),
        );

        match load_students(&path) {
            Err(Error::InvalidScore { row }) => assert_eq!(row[0], "Tamara"),
            other => panic!("expected InvalidScore, got {:?}", other),
        }

        fs::remove_file(&path).unwrap();
    }
}
