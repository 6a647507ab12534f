//! PO-number entry and order selection for the print sheets.

use contracts::domain::a001_sales_order::SalesOrder;
use contracts::shared::cell::CellValue;

/// Both printed layouts cap at this many orders; extra selections stay
/// in the selection state but are dropped from the printout.
pub const PRINT_ORDER_CAP: usize = 6;

/// Split free-text PO entry on commas, whitespace and newlines.
pub fn parse_po_list(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Sales orders whose PO number matches one of the requested POs, in
/// the order they appear in the collection.
pub fn select_orders(requested: &[String], sales: &[SalesOrder]) -> Vec<SalesOrder> {
    sales
        .iter()
        .filter(|o| {
            o.po_number
                .as_ref()
                .map(CellValue::as_text)
                .map(|po| requested.iter().any(|r| r.eq_ignore_ascii_case(po.trim())))
                .unwrap_or(false)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_po_list_splits_on_all_separators() {
        let pos = parse_po_list("PO0001, PO0002\nPO0003  PO0004,,\n");
        assert_eq!(pos, vec!["PO0001", "PO0002", "PO0003", "PO0004"]);
        assert!(parse_po_list("  \n ,").is_empty());
    }

    #[test]
    fn test_select_orders_keeps_collection_order() {
        let order = |po: &str| SalesOrder {
            po_number: Some(CellValue::text(po)),
            ..Default::default()
        };
        let sales = vec![order("PO0003"), order("PO0001"), order("PO0002")];
        let requested = vec!["po0001".to_string(), "PO0003".to_string()];
        let selected = select_orders(&requested, &sales);
        let pos: Vec<String> = selected
            .iter()
            .map(|o| o.po_number.as_ref().unwrap().as_text())
            .collect();
        assert_eq!(pos, vec!["PO0003", "PO0001"]);
    }
}
