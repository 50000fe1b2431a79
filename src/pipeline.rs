//! End-to-end run: read, parse, grade, write.
//!
//! The whole input is parsed before the destination is opened, so a bad line
//! anywhere in the file leaves the destination untouched.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{debug, info};

use crate::error::Result;
use crate::parser::read_students;
use crate::reader;
use crate::report::{self, render};

/// Process the student file at `input` and write the report to `output`.
///
/// Returns the number of records written.
pub fn process_file(input: impl AsRef<Path>, output: impl AsRef<Path>) -> Result<usize> {
    let (input, output) = (input.as_ref(), output.as_ref());

    let students = read_students(reader::open(input)?)?;
    debug!(records = students.len(), "parsed input");

    let lines = render(&students);
    report::write(&lines, output)?;

    info!(
        input = %input.display(),
        output = %output.display(),
        records = lines.len(),
        "report generated"
    );
    Ok(lines.len())
}

/// Process the student file at `input` and write the report to `output`,
/// e.g. stdout.
pub fn process_to_writer<W: Write>(input: impl AsRef<Path>, output: W) -> Result<usize> {
    let input = input.as_ref();

    let students = read_students(reader::open(input)?)?;
    debug!(records = students.len(), "parsed input");

    let lines = render(&students);
    report::write_lines(&lines, output)?;

    info!(input = %input.display(), records = lines.len(), "report generated");
    Ok(lines.len())
}

/// Same as [`process_file`] over arbitrary streams.
pub fn process<R: BufRead, W: Write>(input: R, output: W) -> Result<usize> {
    let students = read_students(reader::lines(input))?;
    debug!(records = students.len(), "parsed input");

    let lines = render(&students);
    report::write_lines(&lines, output)?;

    info!(records = lines.len(), "report generated");
    Ok(lines.len())
}
