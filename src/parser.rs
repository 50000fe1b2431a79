//! Record parser for `id,name,score` lines.
//!
//! ```text
//! 1,John Doe,85
//! 2,Jane Smith,47
//! ```
//!
//! - Exactly three fields separated by `,` (no quoting or escaping)
//! - `id` and `score` are integers; surrounding whitespace and a leading
//!   `+`/`-` sign are accepted
//! - `name` is trimmed and otherwise taken verbatim, even when empty
//!
//! Batch parsing is fail-fast: the first bad line aborts the whole batch and
//! no records are returned.

use std::io;

use tracing::debug;

use crate::error::{GradingError, Result};
use crate::student::Student;

const FIELD_COUNT: usize = 3;

/// Parse a single raw line into a [`Student`].
///
/// Checks run in field order and stop at the first failure: field count,
/// then id, then score.
pub fn parse(raw_line: &str) -> Result<Student> {
    let fields: Vec<&str> = raw_line.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(GradingError::MissingField {
            line: raw_line.to_string(),
        });
    }

    let id = parse_int(fields[0]).ok_or_else(|| GradingError::MalformedId {
        text: fields[0].to_string(),
    })?;

    let full_name = fields[1].trim();

    let score = parse_int(fields[2]).ok_or_else(|| GradingError::InvalidScoreFormat {
        text: fields[2].to_string(),
    })?;

    Ok(Student::new(id, full_name, score))
}

/// Parse every line in order, stopping at the first failure.
pub fn parse_all<I, S>(lines: I) -> Result<Vec<Student>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut students = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        students.push(parse_numbered(idx + 1, line.as_ref())?);
    }
    Ok(students)
}

/// Like [`parse_all`], over a fallible line stream such as
/// [`crate::reader::open`]. A read failure stops the batch as
/// [`GradingError::Io`].
pub fn read_students<I>(lines: I) -> Result<Vec<Student>>
where
    I: IntoIterator<Item = io::Result<String>>,
{
    let mut students = Vec::new();
    for (idx, line) in lines.into_iter().enumerate() {
        let line = line?;
        students.push(parse_numbered(idx + 1, &line)?);
    }
    Ok(students)
}

fn parse_numbered(line_no: usize, line: &str) -> Result<Student> {
    parse(line).inspect_err(|e| debug!(line_no, error = %e, "rejected input line"))
}

/// Integer parse that tolerates surrounding ASCII whitespace only.
fn parse_int(text: &str) -> Option<i32> {
    text.trim_matches(|c: char| c.is_ascii_whitespace())
        .parse()
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufRead, Cursor};

    #[test]
    fn test_parse_valid_line() {
        let s = parse("1,John Doe,85").unwrap();
        assert_eq!(s, Student::new(1, "John Doe", 85));
    }

    #[test]
    fn test_parse_trims_name() {
        let s = parse("4,   Kofi Annan  \t,66").unwrap();
        assert_eq!(s.full_name(), "Kofi Annan");
    }

    #[test]
    fn test_parse_accepts_empty_name() {
        let s = parse("5, ,90").unwrap();
        assert_eq!(s.full_name(), "");
        assert_eq!(s.score(), 90);
    }

    #[test]
    fn test_parse_integer_whitespace_and_sign() {
        let s = parse(" 7 , Ann , +90 ").unwrap();
        assert_eq!(s, Student::new(7, "Ann", 90));

        let s = parse("-2,Neg,-15").unwrap();
        assert_eq!(s.id(), -2);
        assert_eq!(s.score(), -15);
    }

    #[test]
    fn test_parse_rejects_non_ascii_whitespace_around_integers() {
        match parse("\u{00A0}1,Ann,90") {
            Err(GradingError::MalformedId { text }) => assert_eq!(text, "\u{00A0}1"),
            other => panic!("Expected MalformedId, got {other:?}"),
        }
        match parse("1,Ann,90\u{00A0}") {
            Err(GradingError::InvalidScoreFormat { text }) => assert_eq!(text, "90\u{00A0}"),
            other => panic!("Expected InvalidScoreFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_out_of_range_score_accepted() {
        let s = parse("8,Over,150").unwrap();
        assert_eq!(s.score(), 150);
    }

    #[test]
    fn test_two_fields_is_missing_field() {
        match parse("1,John") {
            Err(GradingError::MissingField { line }) => assert_eq!(line, "1,John"),
            other => panic!("Expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_four_fields_is_missing_field() {
        match parse("1,Doe, John,85") {
            Err(GradingError::MissingField { line }) => assert_eq!(line, "1,Doe, John,85"),
            other => panic!("Expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_line_is_missing_field() {
        assert!(matches!(parse(""), Err(GradingError::MissingField { .. })));
    }

    #[test]
    fn test_malformed_id() {
        match parse("x,John Doe,85") {
            Err(GradingError::MalformedId { text }) => assert_eq!(text, "x"),
            other => panic!("Expected MalformedId, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_score() {
        match parse("1,John Doe,85.5") {
            Err(GradingError::InvalidScoreFormat { text }) => assert_eq!(text, "85.5"),
            other => panic!("Expected InvalidScoreFormat, got {other:?}"),
        }
    }

    #[test]
    fn test_id_checked_before_score() {
        // both bad: the id wins
        assert!(matches!(
            parse("x,John,y"),
            Err(GradingError::MalformedId { .. })
        ));
    }

    #[test]
    fn test_score_overflow_is_invalid() {
        assert!(matches!(
            parse("1,Big,99999999999"),
            Err(GradingError::InvalidScoreFormat { .. })
        ));
    }

    #[test]
    fn test_parse_all_preserves_order() {
        let students = parse_all(["1,John Doe,85", "2,Jane Smith,47"]).unwrap();
        assert_eq!(
            students,
            vec![
                Student::new(1, "John Doe", 85),
                Student::new(2, "Jane Smith", 47),
            ]
        );
    }

    #[test]
    fn test_parse_all_fails_fast() {
        let lines = ["1,A,90", "2,B,80", "3,C,70", "4,D", "x,E,60"];
        match parse_all(lines) {
            Err(GradingError::MissingField { line }) => assert_eq!(line, "4,D"),
            other => panic!("Expected MissingField, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_all_empty() {
        let students = parse_all(Vec::<String>::new()).unwrap();
        assert!(students.is_empty());
    }

    #[test]
    fn test_read_students_from_stream() {
        let input = Cursor::new("1,John Doe,85\n2,Jane Smith,47\n");
        let students = read_students(input.lines()).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[1].full_name(), "Jane Smith");
    }

    #[test]
    fn test_read_students_propagates_read_error() {
        let lines = vec![
            Ok("1,A,90".to_string()),
            Err(io::Error::new(io::ErrorKind::InvalidData, "bad utf-8")),
            Ok("2,B,80".to_string()),
        ];
        assert!(matches!(read_students(lines), Err(GradingError::Io(_))));
    }

    #[test]
    fn test_read_students_fails_fast() {
        let input = Cursor::new("1,A,90\n2,B,eighty\n3,C,70\n");
        match read_students(input.lines()) {
            Err(GradingError::InvalidScoreFormat { text }) => assert_eq!(text, "eighty"),
            other => panic!("Expected InvalidScoreFormat, got {other:?}"),
        }
    }
}
