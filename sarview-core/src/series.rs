//! Shapes handed to the presentation layer: a labelled numeric series for
//! charts and a string table for tabular views.

use serde::Serialize;

use crate::registry::SectionId;

/// One chart sample.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

/// Time-ordered values of one column of one section.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub section: SectionId,
    pub column: String,
    pub points: Vec<SeriesPoint>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// `(min, max)` of the values, or `None` for an empty series.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        if self.points.is_empty() {
            return None;
        }
        let min = self
            .points
            .iter()
            .map(|p| p.value)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .points
            .iter()
            .map(|p| p.value)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }

    /// Display title, e.g. `CPU util / %usr`.
    pub fn title(&self) -> String {
        format!("{} / {}", self.section.label(), self.column)
    }
}

/// Column names plus one row of raw strings per record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl SectionTable {
    pub const TIME_COLUMN: &'static str = "time";

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }
}
