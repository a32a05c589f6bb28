//! Writer for the `iteration,makespan` log format read by [`crate::parsers`].

use std::io::Write;

use csv::WriterBuilder;
use thiserror::Error;

use crate::model::LogRow;
use crate::parsers::CASE_DELIMITER;

pub const HEADER: [&str; 2] = ["iteration", "makespan"];

#[derive(Debug, Error)]
pub enum WriteError {
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    #[error("a headered log holds one case; multi-case logs need a headerless writer")]
    HeaderedMultiCase,
}

/// Streams optimiser progress as a makespan log.
///
/// Two layouts, each matching one parser:
/// - [`LogWriter::new`] writes one `iteration,makespan` header and then
///   rows: a single-case log for
///   [`parse_single`](crate::parsers::single::parse_single).
/// - [`LogWriter::without_header`] writes rows only, with
///   [`LogWriter::end_case`] between runs: a multi-case log for
///   [`parse_multi`](crate::parsers::multi::parse_multi).
///
/// Buffered rows are only written on [`LogWriter::flush`],
/// [`LogWriter::end_case`] or [`LogWriter::into_inner`]; dropping the writer
/// discards them.
pub struct LogWriter<W: Write> {
    writer: csv::Writer<W>,
    header: bool,
    buffered: bool,
    pending: Vec<LogRow>,
    header_written: bool,
}

impl<W: Write> LogWriter<W> {
    /// Single-case writer that starts with an `iteration,makespan` header.
    pub fn new(inner: W) -> Self {
        Self::build(inner, true)
    }

    /// Writer that emits data rows and case delimiters only.
    pub fn without_header(inner: W) -> Self {
        Self::build(inner, false)
    }

    fn build(inner: W, header: bool) -> Self {
        Self {
            // Delimiter lines have one field, data rows two.
            writer: WriterBuilder::new()
                .has_headers(false)
                .flexible(true)
                .from_writer(inner),
            header,
            buffered: true,
            pending: Vec::new(),
            header_written: false,
        }
    }

    /// Buffered writers hold rows until flushed; unbuffered ones write each
    /// row straight through. Buffered is the default.
    pub fn buffered(mut self, buffered: bool) -> Self {
        self.buffered = buffered;
        self
    }

    pub fn is_buffered(&self) -> bool {
        self.buffered
    }

    /// Rows recorded but not yet written.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    pub fn record(&mut self, iteration: i64, makespan: i64) -> Result<(), WriteError> {
        let row = LogRow::new(iteration, makespan);
        if self.buffered {
            self.pending.push(row);
            Ok(())
        } else {
            self.write_row(row)?;
            self.writer.flush()?;
            Ok(())
        }
    }

    /// Finish the current case and write a delimiter line.
    ///
    /// Fails with [`WriteError::HeaderedMultiCase`] on a writer with a
    /// header, since no parser reads headered multi-case logs.
    pub fn end_case(&mut self) -> Result<(), WriteError> {
        if self.header {
            return Err(WriteError::HeaderedMultiCase);
        }
        self.drain_pending()?;
        self.writer.write_record([CASE_DELIMITER])?;
        self.writer.flush()?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), WriteError> {
        self.drain_pending()?;
        self.writer.flush()?;
        Ok(())
    }

    /// Flush everything and hand back the underlying writer.
    pub fn into_inner(mut self) -> Result<W, WriteError> {
        self.drain_pending()?;
        self.writer
            .into_inner()
            .map_err(|e| WriteError::Io(e.into_error()))
    }

    fn drain_pending(&mut self) -> Result<(), WriteError> {
        let pending = std::mem::take(&mut self.pending);
        log::trace!("writing {} buffered rows", pending.len());
        for row in pending {
            self.write_row(row)?;
        }
        Ok(())
    }

    fn write_row(&mut self, row: LogRow) -> Result<(), WriteError> {
        if self.header && !self.header_written {
            self.writer.write_record(HEADER)?;
            self.header_written = true;
        }
        self.writer.serialize((row.index, row.makespan))?;
        Ok(())
    }
}
