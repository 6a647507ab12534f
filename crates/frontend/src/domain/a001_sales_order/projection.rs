//! Column orders for the sales-order table and its export.

use crate::shared::normalize::{compact_size_pairs, image_src};
use crate::shared::projection::{render_field, Column, Render, Source};
use contracts::domain::a001_sales_order::SalesOrder;

pub const SCREEN_COLUMNS: &[Column] = &[
    Column {
        header: "IMAGE",
        source: Source::Image,
    },
    Column::field("PO NUMBER", "PO NUMBER", Render::Raw),
    Column::field("STYLE NUMBER", "STYLE NUMBER", Render::Raw),
    Column::field("H NUMBER", "H NUMBER", Render::Raw),
    Column::field("DESCRIPTION", "DESCRIPTION", Render::Raw),
    Column::field("COLOUR", "COLOUR", Render::Raw),
    Column::field("CUSTOMER", "CUSTOMER NAME", Render::Raw),
    Column::field("TYPE", "TYPE", Render::Raw),
    Column::field("PRICE", "PRICE", Render::Currency),
    Column::field("CMT PRICE", "CMT PRICE", Render::Currency),
    Column::field("UNITS", "TOTAL UNITS", Render::Raw),
    Column {
        header: "SIZES",
        source: Source::Sizes,
    },
    Column::field("XFACT DD", "XFACT DD", Render::Date),
    Column::field("REAL DD", "REAL DD", Render::Date),
    Column::field("LIVE STATUS", "LIVE STATUS", Render::Raw),
    Column::field("FIT STATUS", "FIT STATUS", Render::Raw),
    Column::field("PACKING LIST", "PACKING LIST", Render::Raw),
];

pub const EXPORT_COLUMNS: &[Column] = &[
    Column::field("PO NUMBER", "PO NUMBER", Render::Raw),
    Column::field("STYLE NUMBER", "STYLE NUMBER", Render::Raw),
    Column::field("H NUMBER", "H NUMBER", Render::Raw),
    Column::field("DESCRIPTION", "DESCRIPTION", Render::Raw),
    Column::field("COLOUR", "COLOUR", Render::Raw),
    Column::field("CUSTOMER NAME", "CUSTOMER NAME", Render::Raw),
    Column::field("TYPE", "TYPE", Render::Raw),
    Column::field("PRICE", "PRICE", Render::Currency),
    Column::field("CMT PRICE", "CMT PRICE", Render::Currency),
    Column::field("ACTUAL CMT", "ACTUAL CMT", Render::Currency),
    Column::field("TOTAL UNITS", "TOTAL UNITS", Render::Raw),
    Column {
        header: "SIZES",
        source: Source::Sizes,
    },
    Column::field("XFACT DD", "XFACT DD", Render::Date),
    Column::field("REAL DD", "REAL DD", Render::Date),
    Column::field("LIVE STATUS", "LIVE STATUS", Render::Raw),
    Column::field("FIT STATUS", "FIT STATUS", Render::Raw),
];

/// Project one order against a column order. Absent fields are omitted
/// rather than padded.
pub fn project_row(order: &SalesOrder, columns: &[Column]) -> Vec<(&'static str, String)> {
    columns
        .iter()
        .filter_map(|col| match col.source {
            Source::Field(name, render) => order
                .field(name)
                .map(|c| (col.header, render_field(Some(c), render))),
            Source::Sizes => {
                let sizes = compact_size_pairs(order);
                (!sizes.is_empty()).then_some((col.header, sizes))
            }
            Source::Image => image_src(order.image.as_ref()).map(|url| (col.header, url)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::cell::CellValue;

    #[test]
    fn test_absent_columns_are_omitted() {
        let order = SalesOrder {
            po_number: Some(CellValue::text("PO0001")),
            price: Some(CellValue::Number(12.5)),
            ..Default::default()
        };
        let row = project_row(&order, EXPORT_COLUMNS);
        assert!(row.iter().any(|(h, v)| *h == "PO NUMBER" && v == "PO0001"));
        assert!(row.iter().any(|(h, v)| *h == "PRICE" && v == "£12.50"));
        assert!(!row.iter().any(|(h, _)| *h == "COLOUR"));
        assert!(!row.iter().any(|(h, _)| *h == "SIZES"));
    }

    #[test]
    fn test_date_and_sizes_render_through_normalizer() {
        let order = SalesOrder {
            xfact_dd: Some(CellValue::text("2024-01-05")),
            size_8: Some(CellValue::Number(10.0)),
            size_12: Some(CellValue::Number(24.0)),
            ..Default::default()
        };
        let row = project_row(&order, EXPORT_COLUMNS);
        assert!(row.iter().any(|(h, v)| *h == "XFACT DD" && v == "05 Jan 2024"));
        assert!(row.iter().any(|(h, v)| *h == "SIZES" && v == "8:10, 12:24"));
    }
}
