//! Menu builder — report sections and columns as a tree, and the reverse
//! mapping from an activated leaf path back to a series.

use sarview_core::{Report, ReportError, SectionId, SectionTable, Series};

use crate::tree::Tree;

/// Name of the synthetic root. It closes every activation path.
pub const ROOT_NAME: &str = "root";

/// Build the menu: one collapsed node per section (registry order), one
/// leaf per column of the section's first record (header order).
pub fn build_menu(report: &Report) -> Tree {
    let mut tree = Tree::new(ROOT_NAME);
    let root = tree.root();
    for section in report.sections() {
        let node = tree.add_child(root, section.label());
        for column in section.columns() {
            tree.add_child(node, column.as_str());
        }
    }
    tree
}

/// Resolve a leaf path `[column, section label, root]` to a section and column.
pub fn resolve_path(report: &Report, path: &[String]) -> Result<(SectionId, String), ReportError> {
    let [column, label, root] = path else {
        return Err(ReportError::bad_path(
            path,
            format!("expected [column, section, {ROOT_NAME}], got {} elements", path.len()),
        ));
    };
    if root != ROOT_NAME {
        return Err(ReportError::bad_path(path, format!("path does not end at {ROOT_NAME}")));
    }

    let id = SectionId::from_label(label)
        .ok_or_else(|| ReportError::bad_path(path, format!("unknown section \"{label}\"")))?;
    let section = report
        .section(id)
        .ok_or_else(|| ReportError::bad_path(path, format!("section \"{label}\" not in report")))?;
    if !section.has_column(column) {
        return Err(ReportError::bad_path(
            path,
            format!("section \"{label}\" has no column \"{column}\""),
        ));
    }

    Ok((id, column.clone()))
}

/// Everything the presentation panels need for one activated leaf.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub section: SectionId,
    pub column: String,
    pub series: Series,
    pub table: SectionTable,
}

/// Resolve a leaf path and extract its series and section table.
pub fn select(report: &Report, path: &[String]) -> Result<Selection, ReportError> {
    let (id, column) = resolve_path(report, path)?;
    let section = report
        .section(id)
        .ok_or_else(|| ReportError::bad_path(path, "section vanished"))?;
    let series = section.series(&column)?;
    Ok(Selection {
        section: id,
        column,
        series,
        table: section.table(),
    })
}
