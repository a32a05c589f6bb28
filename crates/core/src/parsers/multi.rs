use crate::model::LogDocument;

use super::{CASE_DELIMITER, ParseError, read_case};

/// A slice of the log between two delimiters.
#[derive(Debug)]
struct Segment<'a> {
    /// Line number of the segment's first character in the whole file.
    first_line: u64,
    text: &'a str,
}

/// Parse a multi-case log: headerless CSV blocks separated by `---`.
///
/// `k` delimiters give `k + 1` cases, except that a blank segment after the
/// last delimiter is dropped so a trailing delimiter adds nothing. Only that
/// one segment goes; earlier empty segments stay as empty cases. The first
/// segment is always kept, so the result is never empty. Blank lines inside
/// a block are skipped; every other line is data.
pub fn parse_multi(content: &str) -> Result<LogDocument, ParseError> {
    let mut segments = split_segments(content.trim_end());
    if segments.len() > 1 && segments.last().is_some_and(|s| s.text.trim().is_empty()) {
        segments.pop();
    }
    log::debug!("multi-case log has {} segments", segments.len());

    let mut doc = LogDocument::new();
    for segment in segments {
        let case = read_case(segment.text, segment.first_line, false)?;
        log::trace!(
            "case {} from line {}: {} rows",
            doc.len() + 1,
            segment.first_line,
            case.len()
        );
        doc.push(case);
    }
    Ok(doc)
}

fn split_segments(content: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut line = 1;

    for (pos, _) in content.match_indices(CASE_DELIMITER) {
        let text = &content[start..pos];
        segments.push(Segment {
            first_line: line,
            text,
        });
        line += text.matches('\n').count() as u64;
        start = pos + CASE_DELIMITER.len();
    }
    segments.push(Segment {
        first_line: line,
        text: &content[start..],
    });

    segments
}
