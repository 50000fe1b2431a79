//! Streaming line source.
//!
//! Lines are pulled from the underlying reader one at a time; the file is
//! never loaded as a single string. The returned iterator owns the file
//! handle, so the handle is closed whenever the iterator is dropped,
//! whether the caller finished, returned early, or bailed on an error.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::{GradingError, Result};

const BOM: char = '\u{FEFF}';

/// Iterator over the lines of a buffered source.
///
/// A UTF-8 byte-order mark at the very start of the input is dropped.
#[derive(Debug)]
pub struct Lines<R> {
    inner: io::Lines<R>,
    first: bool,
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = self.inner.next()?;
        if !self.first {
            return Some(line);
        }
        self.first = false;
        Some(line.map(|mut line| {
            if line.starts_with(BOM) {
                line.drain(..BOM.len_utf8());
            }
            line
        }))
    }
}

/// Open `path` for line-by-line reading.
///
/// A missing file is reported as [`GradingError::SourceNotFound`]; other
/// open failures (permissions, a directory, ...) are [`GradingError::Io`].
pub fn open(path: impl AsRef<Path>) -> Result<Lines<BufReader<File>>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => GradingError::SourceNotFound {
            path: path.to_path_buf(),
        },
        _ => GradingError::Io(e),
    })?;
    debug!(path = %path.display(), "opened input");
    Ok(lines(BufReader::new(file)))
}

/// Lazily yield the lines of any buffered source.
///
/// `\n` and `\r\n` terminators are stripped. A trailing newline at end of
/// input does not produce an extra empty line.
pub fn lines<R: BufRead>(reader: R) -> Lines<R> {
    Lines {
        inner: reader.lines(),
        first: true,
    }
}
