//! Report rendering and output.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::student::Student;

/// Render one report line per student, in input order.
pub fn render(students: &[Student]) -> Vec<String> {
    students.iter().map(Student::to_string).collect()
}

/// Write each line followed by `\n`, then flush.
pub fn write_lines<S, W>(lines: &[S], mut writer: W) -> Result<()>
where
    S: AsRef<str>,
    W: Write,
{
    for line in lines {
        writer.write_all(line.as_ref().as_bytes())?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the lines to `path`, creating or truncating it.
///
/// Missing parent directories are created first.
pub fn write<S: AsRef<str>>(lines: &[S], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let file = File::create(path)?;
    write_lines(lines, BufWriter::new(file))?;
    debug!(path = %path.display(), lines = lines.len(), "wrote report");
    Ok(())
}
