//! Report parser — line classification, section detection, column alignment.
//!
//! Line classification, in order:
//! 1. `Linux ` banner lines are dropped.
//! 2. `Average: ` summary rows are dropped.
//! 3. A blank line arms the header flag (repeated blanks are idempotent).
//! 4. With the flag armed, the next line is a section header: timestamp,
//!    then the signature pair, then the remaining columns.
//! 5. Anything else is a data row for the current header and must carry
//!    exactly as many values as the header has columns.
//!
//! There is no recovery mode. The first malformed line fails the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{FormatError, ReportError};
use crate::registry::{self, SectionId};
use crate::report::{Record, Report, Timestamp};

/// Prefix of the platform banner preceding the first section.
pub const BANNER_PREFIX: &str = "Linux ";
/// Prefix of summary rows, which are not part of the time series.
pub const AVERAGE_PREFIX: &str = "Average: ";

/// Header currently in effect for data rows.
#[derive(Debug, Clone)]
struct Header {
    id: SectionId,
    columns: Arc<[String]>,
}

/// Incremental parser. Feed it lines, then `finish()`.
#[derive(Debug)]
pub struct ReportParser {
    report: Report,
    // Armed at start so a report without a leading blank line still
    // treats its first line as a header.
    header_pending: bool,
    header: Option<Header>,
    line_no: usize,
}

impl Default for ReportParser {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportParser {
    pub fn new() -> Self {
        Self {
            report: Report::new(),
            header_pending: true,
            header: None,
            line_no: 0,
        }
    }

    /// Classify and consume one physical line.
    pub fn feed_line(&mut self, line: &str) -> Result<(), FormatError> {
        self.line_no += 1;
        let line = line.trim_end_matches('\r');

        if line.starts_with(BANNER_PREFIX) || line.starts_with(AVERAGE_PREFIX) {
            return Ok(());
        }

        if line.trim().is_empty() {
            self.header_pending = true;
            return Ok(());
        }

        if self.header_pending {
            self.header_pending = false;
            self.header = Some(self.parse_header(line)?);
            return Ok(());
        }

        self.parse_data(line)
    }

    /// Number of lines consumed so far.
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    pub fn finish(self) -> Report {
        self.report
    }

    fn parse_header(&self, line: &str) -> Result<Header, FormatError> {
        let (_, columns) = split_timestamped(line, self.line_no)?;
        let unrecognized = || FormatError::UnrecognizedHeader {
            line_no: self.line_no,
            line: line.to_string(),
        };

        if columns.len() < 2 {
            return Err(unrecognized());
        }
        let id = registry::lookup(columns[0], columns[1]).ok_or_else(unrecognized)?;

        debug!(
            line_no = self.line_no,
            section = %id,
            columns = columns.len(),
            "section header"
        );

        Ok(Header {
            id,
            columns: columns.iter().map(|c| c.to_string()).collect(),
        })
    }

    fn parse_data(&mut self, line: &str) -> Result<(), FormatError> {
        let header = self
            .header
            .as_ref()
            .ok_or_else(|| FormatError::MissingHeader {
                line_no: self.line_no,
                line: line.to_string(),
            })?;

        let (timestamp, values) = split_timestamped(line, self.line_no)?;
        if values.len() != header.columns.len() {
            return Err(FormatError::ColumnMismatch {
                line_no: self.line_no,
                expected: header.columns.len(),
                found: values.len(),
                line: line.to_string(),
            });
        }

        let record = Record::new(
            timestamp,
            header.columns.clone(),
            values.into_iter().map(str::to_string).collect(),
        );
        let id = header.id;
        self.report.append(id, record);
        Ok(())
    }
}

/// Split a line into its leading timestamp and the remaining tokens.
fn split_timestamped(line: &str, line_no: usize) -> Result<(Timestamp, Vec<&str>), FormatError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 2 {
        return Err(FormatError::BadTimestamp {
            line_no,
            token: line.trim().to_string(),
        });
    }

    let timestamp =
        Timestamp::parse(tokens[0], tokens[1]).map_err(|_| FormatError::BadTimestamp {
            line_no,
            token: format!("{} {}", tokens[0], tokens[1]),
        })?;

    Ok((timestamp, tokens[2..].to_vec()))
}

/// Parse a report from any buffered reader.
pub fn parse_reader<R: BufRead>(reader: R) -> Result<Report, ReportError> {
    let mut parser = ReportParser::new();
    for line in reader.lines() {
        let line = line?;
        parser.feed_line(&line)?;
    }

    let report = parser.finish();
    info!(
        sections = report.len(),
        records = report.record_count(),
        "report parsed"
    );
    Ok(report)
}

/// Parse a report held in memory.
pub fn parse_str(content: &str) -> Result<Report, ReportError> {
    parse_reader(content.as_bytes())
}

/// Open and parse a report file. The file is closed on every exit path.
pub fn parse_file(path: impl AsRef<Path>) -> Result<Report, ReportError> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening report");
    let file = File::open(path)?;
    parse_reader(BufReader::new(file))
}
