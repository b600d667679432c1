//! Report data model — timestamps, records, sections.
//!
//! A `Report` is built once per file load by the parser and is read-only
//! afterwards. Sections are keyed by `SectionId`, so every appearance of a
//! section in the file lands in the same `Section`, in file order.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::error::ReportError;
use crate::registry::SectionId;
use crate::series::{SectionTable, Series, SeriesPoint};

/// Time of day of a sample. sar reports carry no date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(NaiveTime);

impl Timestamp {
    /// 12-hour clock with meridiem, e.g. `02:00:01 PM`.
    pub const FORMAT: &'static str = "%I:%M:%S %p";

    /// Parse the `HH:MM:SS` and `AM`/`PM` token pair of a report line.
    pub fn parse(clock: &str, meridiem: &str) -> Result<Self, chrono::ParseError> {
        NaiveTime::parse_from_str(&format!("{clock} {meridiem}"), Self::FORMAT).map(Timestamp)
    }

    pub fn from_hms(hour: u32, min: u32, sec: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, min, sec).map(Timestamp)
    }

    pub fn time(&self) -> NaiveTime {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(Self::FORMAT))
    }
}

/// One data line: a timestamp and its values, keyed by header column.
///
/// Column names are shared with the header line that produced the record,
/// so iteration order is header order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    timestamp: Timestamp,
    columns: Arc<[String]>,
    values: Vec<String>,
}

impl Record {
    pub(crate) fn new(timestamp: Timestamp, columns: Arc<[String]>, values: Vec<String>) -> Self {
        debug_assert_eq!(columns.len(), values.len());
        Self {
            timestamp,
            columns,
            values,
        }
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Raw value of a column, if the record has it. A repeated column name
    /// resolves to its last occurrence.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .rposition(|c| c == column)
            .map(|i| self.values[i].as_str())
    }

    /// `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .zip(self.values.iter())
            .map(|(c, v)| (c.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// All records of one section id, in file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    id: SectionId,
    records: Vec<Record>,
}

impl Section {
    pub(crate) fn new(id: SectionId) -> Self {
        Self {
            id,
            records: Vec::new(),
        }
    }

    pub(crate) fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn id(&self) -> SectionId {
        self.id
    }

    pub fn label(&self) -> &'static str {
        self.id.label()
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names of the first record. Empty for an empty section.
    pub fn columns(&self) -> &[String] {
        self.records.first().map(|r| r.columns()).unwrap_or(&[])
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.columns().iter().any(|c| c == column)
    }

    /// Numeric series of one column across every record.
    ///
    /// A column missing from the section header is a `BadPath`. Fails on the
    /// first value that does not parse as `f64`; a later record that lacks
    /// the column (a repeat occurrence with a different header) counts as an
    /// empty, non-numeric value.
    pub fn series(&self, column: &str) -> Result<Series, ReportError> {
        if !self.has_column(column) {
            return Err(ReportError::bad_path(
                &[column.to_string(), self.label().to_string()],
                format!("section \"{}\" has no column \"{column}\"", self.label()),
            ));
        }
        let mut points = Vec::with_capacity(self.records.len());
        for record in &self.records {
            let raw = record.get(column).unwrap_or("");
            let value = raw.parse::<f64>().map_err(|_| ReportError::Numeric {
                section: self.id,
                column: column.to_string(),
                timestamp: record.timestamp().to_string(),
                value: raw.to_string(),
            })?;
            points.push(SeriesPoint {
                label: record.timestamp().to_string(),
                value,
            });
        }
        Ok(Series {
            section: self.id,
            column: column.to_string(),
            points,
        })
    }

    /// Tabular view: a `time` column followed by the section's columns.
    pub fn table(&self) -> SectionTable {
        let mut columns = Vec::with_capacity(self.columns().len() + 1);
        columns.push(SectionTable::TIME_COLUMN.to_string());
        columns.extend(self.columns().iter().cloned());

        let rows = self
            .records
            .iter()
            .map(|r| {
                let mut row = Vec::with_capacity(r.len() + 1);
                row.push(r.timestamp().to_string());
                row.extend(r.values().iter().cloned());
                row
            })
            .collect();

        SectionTable { columns, rows }
    }
}

/// Parsed report: sections keyed by id, iterated in registry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Report {
    sections: BTreeMap<SectionId, Section>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, id: SectionId, record: Record) {
        self.sections
            .entry(id)
            .or_insert_with(|| Section::new(id))
            .push(record);
    }

    pub fn section(&self, id: SectionId) -> Option<&Section> {
        self.sections.get(&id)
    }

    /// Look a section up by its menu label.
    pub fn section_by_label(&self, label: &str) -> Option<&Section> {
        SectionId::from_label(label).and_then(|id| self.section(id))
    }

    pub fn sections(&self) -> impl Iterator<Item = &Section> {
        self.sections.values()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total records across all sections.
    pub fn record_count(&self) -> usize {
        self.sections.values().map(Section::len).sum()
    }
}
