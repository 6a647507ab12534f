use crate::shared::cell::{truthy, CellValue};
use serde::{Deserialize, Serialize};

/// Garment size run carried by every sales order, ascending.
pub const SIZE_LABELS: [u32; 12] = [4, 6, 8, 10, 12, 14, 16, 18, 20, 22, 24, 26];

/// One row of the sales-order sheet.
///
/// Field names mirror the spreadsheet headers; every field is optional
/// because the sheet enforces nothing. A row is immutable once fetched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SalesOrder {
    #[serde(rename = "PO NUMBER", default)]
    pub po_number: Option<CellValue>,
    #[serde(rename = "STYLE NUMBER", default)]
    pub style_number: Option<CellValue>,
    #[serde(rename = "H NUMBER", default)]
    pub h_number: Option<CellValue>,
    #[serde(rename = "DESCRIPTION", default)]
    pub description: Option<CellValue>,
    #[serde(rename = "COLOUR", default)]
    pub colour: Option<CellValue>,
    #[serde(rename = "CUSTOMER NAME", default)]
    pub customer_name: Option<CellValue>,
    #[serde(rename = "TYPE", default)]
    pub order_type: Option<CellValue>,
    #[serde(rename = "PRICE", default)]
    pub price: Option<CellValue>,
    #[serde(rename = "CMT PRICE", default)]
    pub cmt_price: Option<CellValue>,
    #[serde(rename = "ACTUAL CMT", default)]
    pub actual_cmt: Option<CellValue>,
    #[serde(rename = "TOTAL UNITS", default)]
    pub total_units: Option<CellValue>,
    #[serde(rename = "4", default)]
    pub size_4: Option<CellValue>,
    #[serde(rename = "6", default)]
    pub size_6: Option<CellValue>,
    #[serde(rename = "8", default)]
    pub size_8: Option<CellValue>,
    #[serde(rename = "10", default)]
    pub size_10: Option<CellValue>,
    #[serde(rename = "12", default)]
    pub size_12: Option<CellValue>,
    #[serde(rename = "14", default)]
    pub size_14: Option<CellValue>,
    #[serde(rename = "16", default)]
    pub size_16: Option<CellValue>,
    #[serde(rename = "18", default)]
    pub size_18: Option<CellValue>,
    #[serde(rename = "20", default)]
    pub size_20: Option<CellValue>,
    #[serde(rename = "22", default)]
    pub size_22: Option<CellValue>,
    #[serde(rename = "24", default)]
    pub size_24: Option<CellValue>,
    #[serde(rename = "26", default)]
    pub size_26: Option<CellValue>,
    #[serde(rename = "XFACT DD", default)]
    pub xfact_dd: Option<CellValue>,
    #[serde(rename = "REAL DD", default)]
    pub real_dd: Option<CellValue>,
    #[serde(rename = "LIVE STATUS", default)]
    pub live_status: Option<CellValue>,
    #[serde(rename = "FIT STATUS", default)]
    pub fit_status: Option<CellValue>,
    #[serde(rename = "IMAGE", default)]
    pub image: Option<CellValue>,
    #[serde(rename = "PACKING LIST", default)]
    pub packing_list: Option<CellValue>,
}

const SCALAR_FIELDS: [&str; 17] = [
    "PO NUMBER",
    "STYLE NUMBER",
    "H NUMBER",
    "DESCRIPTION",
    "COLOUR",
    "CUSTOMER NAME",
    "TYPE",
    "PRICE",
    "CMT PRICE",
    "ACTUAL CMT",
    "TOTAL UNITS",
    "XFACT DD",
    "REAL DD",
    "LIVE STATUS",
    "FIT STATUS",
    "IMAGE",
    "PACKING LIST",
];

impl SalesOrder {
    /// A row is displayable only when PO number, style number and total
    /// units are all present.
    pub fn is_valid(&self) -> bool {
        truthy(self.po_number.as_ref())
            && truthy(self.style_number.as_ref())
            && truthy(self.total_units.as_ref())
    }

    /// Unit count for one size label, `None` for unknown labels.
    pub fn size_count(&self, label: u32) -> Option<&CellValue> {
        match label {
            4 => self.size_4.as_ref(),
            6 => self.size_6.as_ref(),
            8 => self.size_8.as_ref(),
            10 => self.size_10.as_ref(),
            12 => self.size_12.as_ref(),
            14 => self.size_14.as_ref(),
            16 => self.size_16.as_ref(),
            18 => self.size_18.as_ref(),
            20 => self.size_20.as_ref(),
            22 => self.size_22.as_ref(),
            24 => self.size_24.as_ref(),
            26 => self.size_26.as_ref(),
            _ => None,
        }
    }

    /// Field lookup by spreadsheet header, used by the projection stage.
    pub fn field(&self, name: &str) -> Option<&CellValue> {
        match name {
            "PO NUMBER" => self.po_number.as_ref(),
            "STYLE NUMBER" => self.style_number.as_ref(),
            "H NUMBER" => self.h_number.as_ref(),
            "DESCRIPTION" => self.description.as_ref(),
            "COLOUR" => self.colour.as_ref(),
            "CUSTOMER NAME" => self.customer_name.as_ref(),
            "TYPE" => self.order_type.as_ref(),
            "PRICE" => self.price.as_ref(),
            "CMT PRICE" => self.cmt_price.as_ref(),
            "ACTUAL CMT" => self.actual_cmt.as_ref(),
            "TOTAL UNITS" => self.total_units.as_ref(),
            "XFACT DD" => self.xfact_dd.as_ref(),
            "REAL DD" => self.real_dd.as_ref(),
            "LIVE STATUS" => self.live_status.as_ref(),
            "FIT STATUS" => self.fit_status.as_ref(),
            "IMAGE" => self.image.as_ref(),
            "PACKING LIST" => self.packing_list.as_ref(),
            _ => name
                .parse::<u32>()
                .ok()
                .and_then(|label| self.size_count(label)),
        }
    }

    /// Stringified concatenation of every present field, for the
    /// search-anywhere predicate.
    pub fn haystack(&self) -> String {
        let mut parts: Vec<String> = SCALAR_FIELDS
            .iter()
            .filter_map(|name| self.field(name).map(CellValue::as_text))
            .collect();
        for label in SIZE_LABELS {
            if let Some(cell) = self.size_count(label) {
                parts.push(cell.as_text());
            }
        }
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(po: &str, style: &str, units: f64) -> SalesOrder {
        SalesOrder {
            po_number: Some(CellValue::text(po)),
            style_number: Some(CellValue::text(style)),
            total_units: Some(CellValue::Number(units)),
            ..Default::default()
        }
    }

    #[test]
    fn test_validity_requires_all_three_identifiers() {
        assert!(order("PO0001", "ST-9", 120.0).is_valid());
        assert!(!order("", "ST-9", 120.0).is_valid());
        assert!(!order("PO0001", "ST-9", 0.0).is_valid());
        assert!(!SalesOrder::default().is_valid());
    }

    #[test]
    fn test_field_lookup_covers_size_columns() {
        let mut o = order("PO0001", "ST-9", 12.0);
        o.size_10 = Some(CellValue::Number(12.0));
        assert_eq!(o.field("10"), Some(&CellValue::Number(12.0)));
        assert_eq!(o.field("11"), None);
        assert_eq!(o.field("PO NUMBER"), Some(&CellValue::text("PO0001")));
    }

    #[test]
    fn test_haystack_contains_every_present_field() {
        let mut o = order("PO0001", "ST-9", 120.0);
        o.colour = Some(CellValue::text("NAVY"));
        let hay = o.haystack();
        assert!(hay.contains("PO0001"));
        assert!(hay.contains("NAVY"));
        assert!(hay.contains("120"));
    }

    #[test]
    fn test_deserializes_from_spreadsheet_headers() {
        let json = r#"{
            "PO NUMBER": "PO0001",
            "STYLE NUMBER": 772,
            "TOTAL UNITS": "120",
            "10": 24,
            "XFACT DD": 45210
        }"#;
        let o: SalesOrder = serde_json::from_str(json).unwrap();
        assert!(o.is_valid());
        assert_eq!(o.size_10, Some(CellValue::Number(24.0)));
        assert_eq!(o.xfact_dd, Some(CellValue::Number(45210.0)));
    }
}
