//! Column orders for the developments table and its export.

use crate::shared::projection::{render_field, Column, Render, Source};
use contracts::domain::a003_development::Development;

pub const SCREEN_COLUMNS: &[Column] = &[
    Column::field("DATE", "Timestamp", Render::Date),
    Column::field("H NUMBER", "H NUMBER", Render::Raw),
    Column::field("CUSTOMER", "CUSTOMER", Render::Raw),
    Column::field("STYLE TYPE", "STYLE TYPE", Render::Raw),
    Column::field("FIT SAMPLE", "FIT SAMPLE", Render::Raw),
    Column::field("FRONT", "FRONT IMAGE", Render::Raw),
    Column::field("BACK", "BACK IMAGE", Render::Raw),
    Column::field("SIDE", "SIDE IMAGE", Render::Raw),
    Column::field("PATTERN", "PATTERN IMAGE", Render::Raw),
    Column::field("CMT PRICE", "CMT PRICE", Render::Currency),
    Column::field("GARMENT PRICE", "GARMENT PRICE", Render::Currency),
    Column::field("COSTING", "COSTING LINK", Render::Raw),
];

pub const EXPORT_COLUMNS: &[Column] = &[
    Column::field("DATE", "Timestamp", Render::Date),
    Column::field("H NUMBER", "H NUMBER", Render::Raw),
    Column::field("CUSTOMER", "CUSTOMER", Render::Raw),
    Column::field("STYLE TYPE", "STYLE TYPE", Render::Raw),
    Column::field("FIT SAMPLE", "FIT SAMPLE", Render::Raw),
    Column::field("CMT PRICE", "CMT PRICE", Render::Currency),
    Column::field("GARMENT PRICE", "GARMENT PRICE", Render::Currency),
    Column::field("COSTING LINK", "COSTING LINK", Render::Raw),
];

pub fn project_row(dev: &Development, columns: &[Column]) -> Vec<(&'static str, String)> {
    columns
        .iter()
        .filter_map(|col| match col.source {
            Source::Field(name, render) => dev
                .field(name)
                .map(|c| (col.header, render_field(Some(c), render))),
            Source::Sizes | Source::Image => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::cell::CellValue;

    #[test]
    fn test_timestamp_renders_as_date() {
        let dev = Development {
            timestamp: Some(CellValue::text("2024-02-10T09:30:00Z")),
            garment_price: Some(CellValue::Number(55.0)),
            ..Default::default()
        };
        let row = project_row(&dev, EXPORT_COLUMNS);
        assert!(row.iter().any(|(h, v)| *h == "DATE" && v == "10 Feb 2024"));
        assert!(row.iter().any(|(h, v)| *h == "GARMENT PRICE" && v == "£55.00"));
    }
}
