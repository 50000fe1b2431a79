//! # gradebook
//!
//! A student result processing library.
//!
//! Input files hold one student per line as `id,name,score`. Each line is
//! parsed into a [`Student`], graded into an A-F band, and written out as a
//! report line.
//!
//! ## Overview
//!
//! The pipeline runs in four stages:
//! - **Read**: stream lines from the input ([`reader`])
//! - **Parse**: turn each line into a typed record, failing fast ([`parser`])
//! - **Grade**: map each score to a letter band ([`grade`])
//! - **Report**: render and write one line per student ([`report`])
//!
//! A malformed line anywhere in the input aborts the run before any output
//! is written.
//!
//! ## Example
//!
//! ```
//! use gradebook::{Grade, parse_all, render};
//!
//! let students = parse_all(["1,John Doe,85", "2,Jane Smith,47"]).unwrap();
//!
//! assert_eq!(students[0].grade(), Grade::A);
//! assert_eq!(
//!     render(&students),
//!     vec![
//!         "John Doe (ID: 1): Score = 85, Grade = A",
//!         "Jane Smith (ID: 2): Score = 47, Grade = F",
//!     ]
//! );
//! ```

pub mod error;
pub mod grade;
pub mod logging;
pub mod parser;
pub mod pipeline;
pub mod reader;
pub mod report;
pub mod student;

pub use error::{GradingError, Result};
pub use grade::{Grade, grade_of};
pub use parser::{parse, parse_all, read_students};
pub use pipeline::{process, process_file, process_to_writer};
pub use report::{render, write, write_lines};
pub use student::Student;
