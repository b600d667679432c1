//! Error types for report loading and navigation.
//!
//! Load-time errors (`Io`, any `Format` raised by the parser) abort the whole
//! load. Navigation errors (`Format(BadPath)`, `Numeric`) are local to the
//! request that raised them.

use thiserror::Error;

use crate::registry::SectionId;

/// Malformed input or an unresolvable menu path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("line {line_no}: unrecognized section header: \"{line}\"")]
    UnrecognizedHeader { line_no: usize, line: String },

    #[error(
        "line {line_no}: data line has {found} values but header has {expected} columns: \"{line}\""
    )]
    ColumnMismatch {
        line_no: usize,
        expected: usize,
        found: usize,
        line: String,
    },

    #[error("line {line_no}: invalid timestamp \"{token}\"")]
    BadTimestamp { line_no: usize, token: String },

    /// A data line with no header in effect. The whole-file entry points
    /// treat the first line as a header, so only a `ReportParser` caller
    /// that keeps feeding lines after a rejected header can reach this.
    #[error("line {line_no}: data line before any section header: \"{line}\"")]
    MissingHeader { line_no: usize, line: String },

    #[error("bad menu path {path:?}: {reason}")]
    BadPath { path: Vec<String>, reason: String },
}

/// Top-level error for the core crate.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("{section}: value \"{value}\" of column {column} at {timestamp} is not a number")]
    Numeric {
        section: SectionId,
        column: String,
        timestamp: String,
        value: String,
    },
}

impl ReportError {
    /// Shorthand for a `BadPath` navigation error.
    pub fn bad_path(path: &[String], reason: impl Into<String>) -> Self {
        ReportError::Format(FormatError::BadPath {
            path: path.to_vec(),
            reason: reason.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_error_messages_carry_line_numbers() {
        let err = FormatError::ColumnMismatch {
            line_no: 7,
            expected: 3,
            found: 2,
            line: "02:00:01 PM a b".into(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("line 7:"));
        assert!(msg.contains("2 values"));
        assert!(msg.contains("3 columns"));
    }

    #[test]
    fn io_errors_convert() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: ReportError = io.into();
        assert!(matches!(err, ReportError::Io(_)));
    }

    #[test]
    fn bad_path_helper_wraps_format_error() {
        let err = ReportError::bad_path(&["a".to_string()], "too short");
        match err {
            ReportError::Format(FormatError::BadPath { path, reason }) => {
                assert_eq!(path, vec!["a".to_string()]);
                assert_eq!(reason, "too short");
            }
            other => panic!("expected BadPath, got {other:?}"),
        }
    }
}
