use crate::shared::cell::CellValue;
use serde::{Deserialize, Serialize};

/// One row of the fabric-order sheet.
///
/// `ORDER REF` links to a sales order's `PO NUMBER` by exact string
/// equality; that link resolves the image shown for the row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FabricOrder {
    #[serde(rename = "NO.", default)]
    pub number: Option<CellValue>,
    #[serde(rename = "DATE", default)]
    pub date: Option<CellValue>,
    #[serde(rename = "H NUMBER", default)]
    pub h_number: Option<CellValue>,
    #[serde(rename = "ORDER REF", default)]
    pub order_ref: Option<CellValue>,
    #[serde(rename = "TYPE", default)]
    pub order_type: Option<CellValue>,
    #[serde(rename = "DESCRIPTION", default)]
    pub description: Option<CellValue>,
    #[serde(rename = "COLOUR", default)]
    pub colour: Option<CellValue>,
    #[serde(rename = "TOTAL", default)]
    pub total: Option<CellValue>,
    #[serde(rename = "FABRIC PRICE", default)]
    pub fabric_price: Option<CellValue>,
    #[serde(rename = "TRIM PRICE", default)]
    pub trim_price: Option<CellValue>,
    #[serde(rename = "SUPPLIER", default)]
    pub supplier: Option<CellValue>,
    #[serde(rename = "STATUS", default)]
    pub status: Option<CellValue>,
    #[serde(rename = "FABRIC PO LINK", default)]
    pub fabric_po_link: Option<CellValue>,
}

const FIELD_NAMES: [&str; 13] = [
    "NO.",
    "DATE",
    "H NUMBER",
    "ORDER REF",
    "TYPE",
    "DESCRIPTION",
    "COLOUR",
    "TOTAL",
    "FABRIC PRICE",
    "TRIM PRICE",
    "SUPPLIER",
    "STATUS",
    "FABRIC PO LINK",
];

impl FabricOrder {
    /// Field lookup by spreadsheet header, used by the projection stage.
    pub fn field(&self, name: &str) -> Option<&CellValue> {
        match name {
            "NO." => self.number.as_ref(),
            "DATE" => self.date.as_ref(),
            "H NUMBER" => self.h_number.as_ref(),
            "ORDER REF" => self.order_ref.as_ref(),
            "TYPE" => self.order_type.as_ref(),
            "DESCRIPTION" => self.description.as_ref(),
            "COLOUR" => self.colour.as_ref(),
            "TOTAL" => self.total.as_ref(),
            "FABRIC PRICE" => self.fabric_price.as_ref(),
            "TRIM PRICE" => self.trim_price.as_ref(),
            "SUPPLIER" => self.supplier.as_ref(),
            "STATUS" => self.status.as_ref(),
            "FABRIC PO LINK" => self.fabric_po_link.as_ref(),
            _ => None,
        }
    }

    /// Stringified concatenation of every present field, for the
    /// search-anywhere predicate.
    pub fn haystack(&self) -> String {
        FIELD_NAMES
            .iter()
            .filter_map(|name| self.field(name).map(CellValue::as_text))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haystack_and_field_lookup() {
        let row = FabricOrder {
            order_ref: Some(CellValue::text("PO0001")),
            supplier: Some(CellValue::text("Kufner")),
            ..Default::default()
        };
        assert_eq!(row.field("SUPPLIER"), Some(&CellValue::text("Kufner")));
        assert!(row.haystack().contains("PO0001"));
        assert!(row.field("IMAGE").is_none());
    }
}
