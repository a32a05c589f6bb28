pub mod multi;
pub mod single;

use std::num::ParseIntError;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Case, LogDocument, LogRow};

/// Separator between cases in a multi-case log.
pub const CASE_DELIMITER: &str = "---";

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: field {column} is not an integer: {value:?} ({source})")]
    InvalidInteger {
        line: u64,
        column: usize,
        value: String,
        source: ParseIntError,
    },
    #[error("line {line}: expected at least 2 fields, found {found}")]
    MissingField { line: u64, found: usize },
}

/// Layout of a makespan log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LogFormat {
    /// One CSV table whose first row is a header.
    Single,
    /// Headerless CSV blocks separated by `---` lines.
    Multi,
}

/// Parse `content` using the given layout.
pub fn parse(content: &str, format: LogFormat) -> Result<LogDocument, ParseError> {
    match format {
        LogFormat::Single => single::parse_single(content),
        LogFormat::Multi => multi::parse_multi(content),
    }
}

/// Guess the layout: any line that is exactly the delimiter marks a
/// multi-case log.
pub fn detect_format(content: &str) -> LogFormat {
    if content.lines().any(|l| l.trim() == CASE_DELIMITER) {
        LogFormat::Multi
    } else {
        LogFormat::Single
    }
}

/// Detect the layout and parse.
pub fn parse_auto(content: &str) -> Result<LogDocument, ParseError> {
    let format = detect_format(content);
    log::debug!("detected {format:?} log layout");
    parse(content, format)
}

/// Read one CSV block into a case, one record per line.
///
/// `first_line` is the line number of the block's first line within the
/// whole file, so errors point at the right place. When `skip_header` is set
/// the first line is dropped whatever it contains. Blank lines are skipped.
///
/// Line numbers come from walking the block's lines alongside the reader:
/// the reader stamps a record's position before skipping the empty lines in
/// front of it, so `StringRecord::position` can point above the record.
fn read_case(block: &str, first_line: u64, skip_header: bool) -> Result<Case, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(block.as_bytes());
    let mut records = reader.records();

    let mut case = Case::new();
    for (offset, text) in block.lines().enumerate() {
        // Zero-length lines produce no record at all.
        if text.is_empty() {
            continue;
        }
        let Some(record) = records.next().transpose()? else {
            break;
        };
        if (skip_header && offset == 0) || text.trim().is_empty() {
            continue;
        }
        let line = first_line + offset as u64;
        case.push(parse_row(&record, line)?);
    }

    Ok(case)
}

fn parse_row(record: &StringRecord, line: u64) -> Result<LogRow, ParseError> {
    let (Some(index), Some(makespan)) = (record.get(0), record.get(1)) else {
        return Err(ParseError::MissingField {
            line,
            found: record.len(),
        });
    };
    Ok(LogRow {
        index: parse_field(index, line, 0)?,
        makespan: parse_field(makespan, line, 1)?,
    })
}

fn parse_field(value: &str, line: u64, column: usize) -> Result<i64, ParseError> {
    value
        .parse()
        .map_err(|source| ParseError::InvalidInteger {
            line,
            column,
            value: value.to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_multi_case_layout() {
        assert_eq!(detect_format("0,10\n---\n0,20\n"), LogFormat::Multi);
        assert_eq!(detect_format("0,10\n  ---  \n0,20"), LogFormat::Multi);
        assert_eq!(
            detect_format("iteration,makespan\n0,10\n"),
            LogFormat::Single
        );
        // A delimiter glued to data is not a separator line.
        assert_eq!(detect_format("0,---\n"), LogFormat::Single);
    }

    #[test]
    fn parse_auto_dispatches_on_layout() {
        let single = parse_auto("iteration,makespan\n0,5\n").unwrap();
        assert_eq!(single.len(), 1);
        assert_eq!(single.total_rows(), 1);

        let multi = parse_auto("0,5\n---\n0,6\n").unwrap();
        assert_eq!(multi.len(), 2);
    }

    #[test]
    fn fields_are_trimmed() {
        let case = read_case(" 3 , 42 \n", 1, false).unwrap();
        assert_eq!(case.rows(), &[LogRow::new(3, 42)]);
    }

    #[test]
    fn extra_fields_are_ignored() {
        let case = read_case("1,2,extra\n", 1, false).unwrap();
        assert_eq!(case.rows(), &[LogRow::new(1, 2)]);
    }

    #[test]
    fn lines_after_blank_runs_keep_their_numbers() {
        let err = read_case("0,1\n\n\n  \n2,x\n", 1, false).unwrap_err();
        assert!(
            matches!(err, ParseError::InvalidInteger { line: 5, column: 1, .. }),
            "{err:?}"
        );
    }

    #[test]
    fn blank_first_line_is_the_header() {
        let case = read_case("\n0,1\n", 1, true).unwrap();
        assert_eq!(case.rows(), &[LogRow::new(0, 1)]);
    }

    #[test]
    fn short_row_reports_line() {
        let err = read_case("0,1\n7\n", 10, false).unwrap_err();
        assert!(
            matches!(err, ParseError::MissingField { line: 11, found: 1 }),
            "{err:?}"
        );
    }

    #[test]
    fn bad_integer_reports_column() {
        let err = read_case("0,fast\n", 1, false).unwrap_err();
        match err {
            ParseError::InvalidInteger {
                line,
                column,
                value,
                ..
            } => {
                assert_eq!((line, column), (1, 1));
                assert_eq!(value, "fast");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
