//! Column definitions shared by the table screens and the export. A
//! column names its header, where its value comes from, and how the
//! raw cell is rendered.

use crate::shared::normalize::{normalize_currency, normalize_date};
use contracts::shared::cell::CellValue;

/// Rendering applied to a single field cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Render {
    /// Stringified as-is.
    Raw,
    /// `05 Jan 2024`, original text when unparseable.
    Date,
    /// `£1,234.50`, `£0.00` when absent or unparseable.
    Currency,
}

/// Where a column's value comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// One spreadsheet field, by header name.
    Field(&'static str, Render),
    /// The compacted `size:count` run of a sales order.
    Sizes,
    /// A resolved image URL, `N/A` when none resolves.
    Image,
}

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub source: Source,
}

impl Column {
    pub const fn field(header: &'static str, name: &'static str, render: Render) -> Self {
        Self {
            header,
            source: Source::Field(name, render),
        }
    }
}

/// Render one field cell. Absent cells project to the render's empty
/// form rather than being skipped, so every row has the same width.
pub fn render_field(cell: Option<&CellValue>, render: Render) -> String {
    match render {
        Render::Raw => cell.map(CellValue::as_text).unwrap_or_default(),
        Render::Date => normalize_date(cell),
        Render::Currency => normalize_currency(cell),
    }
}

pub fn headers(columns: &[Column]) -> Vec<&'static str> {
    columns.iter().map(|c| c.header).collect()
}

/// Align projected `(header, value)` pairs back onto the full column
/// order for destinations that need fixed-width rows (the export).
/// Omitted columns become empty cells.
pub fn aligned_row(columns: &[Column], pairs: &[(&'static str, String)]) -> Vec<String> {
    columns
        .iter()
        .map(|c| {
            pairs
                .iter()
                .find(|(h, _)| *h == c.header)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_field_by_kind() {
        let n = CellValue::Number(1234.5);
        assert_eq!(render_field(Some(&n), Render::Raw), "1234.5");
        assert_eq!(render_field(Some(&n), Render::Currency), "£1,234.50");
        assert_eq!(render_field(None, Render::Raw), "");
        assert_eq!(render_field(None, Render::Currency), "£0.00");
        assert_eq!(render_field(None, Render::Date), "");
    }
}
