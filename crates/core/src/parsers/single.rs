use crate::model::LogDocument;

use super::{ParseError, read_case};

/// Parse a single-case log: one CSV table with a header row.
///
/// The first line is always dropped, even when it looks like data. Every
/// following non-blank line needs `index,makespan` as its first two fields. The
/// result always holds exactly one case, which may be empty.
pub fn parse_single(content: &str) -> Result<LogDocument, ParseError> {
    let case = read_case(content, 1, true)?;
    log::debug!("parsed single-case log with {} rows", case.len());
    Ok(LogDocument::from_cases(vec![case]))
}
