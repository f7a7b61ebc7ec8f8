//! CLI command implementations.

pub mod compare;
pub mod export;
pub mod show;

pub use compare::CompareArgs;
pub use export::ExportArgs;
pub use show::ShowArgs;

use std::io::{self, BufRead, Write};

use chrono::NaiveDate;

use crate::error::{CliError, CliResult};

/// Parses a date in YYYY/MM/DD (or YYYY-MM-DD) form.
pub fn parse_date(s: &str) -> CliResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y/%m/%d")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Returns the date given on the command line, or prompts for it on stdin.
pub fn resolve_date(arg: Option<&str>, prompt: &str) -> CliResult<NaiveDate> {
    match arg {
        Some(s) => parse_date(s),
        None => {
            let stdin = io::stdin();
            read_date(&mut stdin.lock(), &mut io::stderr(), prompt)
        }
    }
}

/// Writes `prompt` and parses one line from `input`.
fn read_date<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> CliResult<NaiveDate> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::NoInput);
    }
    parse_date(&line)
}
