//! Column orders for the fabric-order table and its export. The image
//! column is borrowed from the linked sales order.

use crate::shared::normalize::image_src;
use crate::shared::projection::{render_field, Column, Render, Source};
use contracts::domain::a001_sales_order::SalesOrder;
use contracts::domain::a002_fabric_order::FabricOrder;
use contracts::shared::cell::CellValue;

pub const NO_IMAGE: &str = "N/A";

pub const SCREEN_COLUMNS: &[Column] = &[
    Column {
        header: "IMAGE",
        source: Source::Image,
    },
    Column::field("NO.", "NO.", Render::Raw),
    Column::field("DATE", "DATE", Render::Date),
    Column::field("H NUMBER", "H NUMBER", Render::Raw),
    Column::field("ORDER REF", "ORDER REF", Render::Raw),
    Column::field("TYPE", "TYPE", Render::Raw),
    Column::field("DESCRIPTION", "DESCRIPTION", Render::Raw),
    Column::field("COLOUR", "COLOUR", Render::Raw),
    Column::field("TOTAL", "TOTAL", Render::Raw),
    Column::field("FABRIC PRICE", "FABRIC PRICE", Render::Currency),
    Column::field("TRIM PRICE", "TRIM PRICE", Render::Currency),
    Column::field("SUPPLIER", "SUPPLIER", Render::Raw),
    Column::field("STATUS", "STATUS", Render::Raw),
    Column::field("FABRIC PO", "FABRIC PO LINK", Render::Raw),
];

pub const EXPORT_COLUMNS: &[Column] = &[
    Column::field("NO.", "NO.", Render::Raw),
    Column::field("DATE", "DATE", Render::Date),
    Column::field("H NUMBER", "H NUMBER", Render::Raw),
    Column::field("ORDER REF", "ORDER REF", Render::Raw),
    Column::field("TYPE", "TYPE", Render::Raw),
    Column::field("DESCRIPTION", "DESCRIPTION", Render::Raw),
    Column::field("COLOUR", "COLOUR", Render::Raw),
    Column::field("TOTAL", "TOTAL", Render::Raw),
    Column::field("FABRIC PRICE", "FABRIC PRICE", Render::Currency),
    Column::field("TRIM PRICE", "TRIM PRICE", Render::Currency),
    Column::field("SUPPLIER", "SUPPLIER", Render::Raw),
    Column::field("STATUS", "STATUS", Render::Raw),
];

/// First sales order whose `PO NUMBER` equals this row's `ORDER REF`,
/// by exact string equality. First match wins.
pub fn linked_sales_order<'a>(
    fabric: &FabricOrder,
    sales: &'a [SalesOrder],
) -> Option<&'a SalesOrder> {
    let order_ref = fabric.order_ref.as_ref().map(CellValue::as_text)?;
    sales
        .iter()
        .find(|o| o.po_number.as_ref().map(CellValue::as_text) == Some(order_ref.clone()))
}

/// Image URL for a fabric row, resolved through its sales order.
pub fn resolve_image(fabric: &FabricOrder, sales: &[SalesOrder]) -> String {
    linked_sales_order(fabric, sales)
        .and_then(|o| image_src(o.image.as_ref()))
        .unwrap_or_else(|| NO_IMAGE.to_string())
}

pub fn project_row(
    fabric: &FabricOrder,
    sales: &[SalesOrder],
    columns: &[Column],
) -> Vec<(&'static str, String)> {
    columns
        .iter()
        .filter_map(|col| match col.source {
            Source::Field(name, render) => fabric
                .field(name)
                .map(|c| (col.header, render_field(Some(c), render))),
            Source::Image => Some((col.header, resolve_image(fabric, sales))),
            Source::Sizes => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_resolves_through_linked_sales_order() {
        let sales = vec![SalesOrder {
            po_number: Some(CellValue::text("PO0001")),
            image: Some(CellValue::text("https://drive.google.com/file/d/XYZ/view")),
            ..Default::default()
        }];
        let fabric = FabricOrder {
            order_ref: Some(CellValue::text("PO0001")),
            ..Default::default()
        };
        assert_eq!(
            resolve_image(&fabric, &sales),
            "https://drive.google.com/thumbnail?id=XYZ&sz=w200"
        );
    }

    #[test]
    fn test_image_falls_back_when_no_match() {
        let fabric = FabricOrder {
            order_ref: Some(CellValue::text("PO9999")),
            ..Default::default()
        };
        assert_eq!(resolve_image(&fabric, &[]), NO_IMAGE);
        assert_eq!(resolve_image(&FabricOrder::default(), &[]), NO_IMAGE);
    }

    #[test]
    fn test_first_match_wins() {
        let make = |img: &str| SalesOrder {
            po_number: Some(CellValue::text("PO0001")),
            image: Some(CellValue::text(img)),
            ..Default::default()
        };
        let sales = vec![make("https://a.example/1.jpg"), make("https://a.example/2.jpg")];
        let fabric = FabricOrder {
            order_ref: Some(CellValue::text("PO0001")),
            ..Default::default()
        };
        assert_eq!(resolve_image(&fabric, &sales), "https://a.example/1.jpg");
    }
}
