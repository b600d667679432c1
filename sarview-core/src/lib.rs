//! sarview core — parse sar activity reports into typed, timestamped sections.
//!
//! This crate contains:
//! - The section registry (header signatures → section ids and labels)
//! - The report parser (banner/average skipping, header detection,
//!   strict column alignment)
//! - The report data model (timestamps, records, sections)
//! - Series and table extraction for the presentation layer

pub mod error;
pub mod parser;
pub mod registry;
pub mod report;
pub mod series;

pub use error::{FormatError, ReportError};
pub use parser::{parse_file, parse_reader, parse_str, ReportParser};
pub use registry::{SectionId, Signature, SIGNATURES};
pub use report::{Record, Report, Section, Timestamp};
pub use series::{SectionTable, Series, SeriesPoint};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: the report can be handed across threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Report>();
        require_sync::<Report>();
        require_send::<Series>();
        require_sync::<Series>();
        require_send::<ReportError>();
        require_sync::<ReportError>();
    }
}
