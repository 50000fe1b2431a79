//! CLI tool to grade a student results file.
//!
//! Usage:
//!   grade-report <students.txt>
//!   grade-report <students.txt> -o <report.txt>
//!   grade-report                      (prompts for both paths)
//!
//! If no output file is given, the report is written to stdout.

use std::io::{self, IsTerminal};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, bail};
use clap::{ArgAction, Parser};
use gradebook::logging::init_logging;
use gradebook::{GradingError, process_file, process_to_writer};

/// Grade a file of `id,name,score` lines and write a report.
#[derive(Parser)]
#[command(name = "grade-report")]
struct Cli {
    /// Student results file, one `id,name,score` per line.
    /// Prompted for when omitted on an interactive terminal.
    input: Option<PathBuf>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let (input, output) = match resolve_paths(cli.input, cli.output) {
        Ok(paths) => paths,
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    };

    match run(&input, output.as_deref()) {
        Ok(_) if output.is_some() => println!("Report generated successfully."),
        Ok(_) => eprintln!("Report generated successfully."),
        Err(e) => {
            eprintln!("{}", error_message(&e));
            process::exit(1);
        }
    }
}

/// Take paths from the command line, or ask for them on a terminal.
fn resolve_paths(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> anyhow::Result<(PathBuf, Option<PathBuf>)> {
    if let Some(input) = input {
        return Ok((input, output));
    }
    if !io::stdin().is_terminal() {
        bail!("no input file given (usage: grade-report <INPUT> [-o OUTPUT])");
    }

    let input: String = dialoguer::Input::new()
        .with_prompt("Enter path to input file (e.g., students.txt)")
        .interact_text()
        .context("reading input path")?;

    let output = match output {
        Some(output) => output,
        None => {
            let output: String = dialoguer::Input::new()
                .with_prompt("Enter path for output report (e.g., report.txt)")
                .interact_text()
                .context("reading output path")?;
            PathBuf::from(output)
        }
    };

    Ok((PathBuf::from(input), Some(output)))
}

fn run(input: &Path, output: Option<&Path>) -> gradebook::Result<usize> {
    match output {
        Some(output) => process_file(input, output),
        None => process_to_writer(input, io::stdout().lock()),
    }
}

fn error_message(err: &GradingError) -> String {
    match err {
        GradingError::SourceNotFound { .. } => "Error: The input file was not found.".to_string(),
        GradingError::MissingField { .. }
        | GradingError::MalformedId { .. }
        | GradingError::InvalidScoreFormat { .. } => format!("Error: {err}"),
        GradingError::Io(e) => format!("Unexpected error: {e}"),
    }
}
