use crate::shared::cell::CellValue;
use serde::{Deserialize, Serialize};

/// One row of the development (insert-pattern) sheet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Development {
    #[serde(rename = "Timestamp", default)]
    pub timestamp: Option<CellValue>,
    #[serde(rename = "H NUMBER", default)]
    pub h_number: Option<CellValue>,
    #[serde(rename = "CUSTOMER", default)]
    pub customer: Option<CellValue>,
    #[serde(rename = "STYLE TYPE", default)]
    pub style_type: Option<CellValue>,
    #[serde(rename = "FIT SAMPLE", default)]
    pub fit_sample: Option<CellValue>,
    #[serde(rename = "FRONT IMAGE", default)]
    pub front_image: Option<CellValue>,
    #[serde(rename = "BACK IMAGE", default)]
    pub back_image: Option<CellValue>,
    #[serde(rename = "SIDE IMAGE", default)]
    pub side_image: Option<CellValue>,
    #[serde(rename = "PATTERN IMAGE", default)]
    pub pattern_image: Option<CellValue>,
    #[serde(rename = "CMT PRICE", default)]
    pub cmt_price: Option<CellValue>,
    #[serde(rename = "GARMENT PRICE", default)]
    pub garment_price: Option<CellValue>,
    #[serde(rename = "COSTING LINK", default)]
    pub costing_link: Option<CellValue>,
}

const FIELD_NAMES: [&str; 12] = [
    "Timestamp",
    "H NUMBER",
    "CUSTOMER",
    "STYLE TYPE",
    "FIT SAMPLE",
    "FRONT IMAGE",
    "BACK IMAGE",
    "SIDE IMAGE",
    "PATTERN IMAGE",
    "CMT PRICE",
    "GARMENT PRICE",
    "COSTING LINK",
];

impl Development {
    /// Field lookup by spreadsheet header, used by the projection stage.
    pub fn field(&self, name: &str) -> Option<&CellValue> {
        match name {
            "Timestamp" => self.timestamp.as_ref(),
            "H NUMBER" => self.h_number.as_ref(),
            "CUSTOMER" => self.customer.as_ref(),
            "STYLE TYPE" => self.style_type.as_ref(),
            "FIT SAMPLE" => self.fit_sample.as_ref(),
            "FRONT IMAGE" => self.front_image.as_ref(),
            "BACK IMAGE" => self.back_image.as_ref(),
            "SIDE IMAGE" => self.side_image.as_ref(),
            "PATTERN IMAGE" => self.pattern_image.as_ref(),
            "CMT PRICE" => self.cmt_price.as_ref(),
            "GARMENT PRICE" => self.garment_price.as_ref(),
            "COSTING LINK" => self.costing_link.as_ref(),
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
