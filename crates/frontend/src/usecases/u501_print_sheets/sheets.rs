//! Docket and cutting sheet HTML, fixed A4 portrait layouts. Both cap
//! input at the first [`PRINT_ORDER_CAP`] orders.

use super::selection::PRINT_ORDER_CAP;
use crate::shared::normalize::normalize_date;
use contracts::domain::a001_sales_order::{SalesOrder, SIZE_LABELS};
use contracts::shared::cell::{int_or_zero, CellValue};

fn esc(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

fn cell_text(cell: Option<&CellValue>) -> String {
    esc(&cell.map(CellValue::as_text).unwrap_or_default())
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\
<html><head><meta charset=\"utf-8\"><title>{title}</title>\
<style>\
@page {{ size: A4 portrait; margin: 12mm; }}\
body {{ font-family: Arial, sans-serif; font-size: 11px; color: #111; }}\
h1 {{ font-size: 16px; margin: 0 0 8px 0; }}\
table {{ border-collapse: collapse; width: 100%; }}\
th, td {{ border: 1px solid #333; padding: 4px 6px; text-align: left; }}\
th {{ background: #eee; }}\
td.num {{ text-align: right; }}\
tr.total td {{ font-weight: bold; }}\
</style></head><body>{body}</body></html>"
    )
}

/// Compact per-order summary with a merged total-units row.
pub fn docket_sheet_html(orders: &[SalesOrder]) -> String {
    let orders = &orders[..orders.len().min(PRINT_ORDER_CAP)];
    let mut rows = String::new();
    let mut total_units: i64 = 0;
    for o in orders {
        let units = int_or_zero(o.total_units.as_ref());
        total_units += units;
        rows.push_str(&format!(
            "<tr class=\"order-row\">\
<td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td class=\"num\">{}</td>\
</tr>",
            cell_text(o.po_number.as_ref()),
            cell_text(o.style_number.as_ref()),
            cell_text(o.description.as_ref()),
            cell_text(o.colour.as_ref()),
            cell_text(o.customer_name.as_ref()),
            esc(&normalize_date(o.xfact_dd.as_ref())),
            units,
        ));
    }
    let body = format!(
        "<h1>Docket Sheet</h1>\
<table><thead><tr>\
<th>PO NUMBER</th><th>STYLE</th><th>DESCRIPTION</th><th>COLOUR</th><th>CUSTOMER</th><th>XFACT DD</th><th>UNITS</th>\
</tr></thead><tbody>{rows}\
<tr class=\"total\"><td colspan=\"6\">TOTAL UNITS</td><td class=\"num\">{total_units}</td></tr>\
</tbody></table>"
    );
    document("Docket Sheet", &body)
}

/// Per-size breakdown with per-column totals.
pub fn cutting_sheet_html(orders: &[SalesOrder]) -> String {
    let orders = &orders[..orders.len().min(PRINT_ORDER_CAP)];
    let mut rows = String::new();
    let mut size_totals = [0i64; SIZE_LABELS.len()];
    let mut grand_total: i64 = 0;

    for o in orders {
        let mut size_cells = String::new();
        for (i, &label) in SIZE_LABELS.iter().enumerate() {
            let count = int_or_zero(o.size_count(label));
            size_totals[i] += count;
            let shown = if count == 0 {
                String::new()
            } else {
                count.to_string()
            };
            size_cells.push_str(&format!("<td class=\"num\">{}</td>", shown));
        }
        let units = int_or_zero(o.total_units.as_ref());
        grand_total += units;
        rows.push_str(&format!(
            "<tr class=\"order-row\">\
<td>{}</td><td>{}</td><td>{}</td>{}<td class=\"num\">{}</td>\
</tr>",
            cell_text(o.po_number.as_ref()),
            cell_text(o.style_number.as_ref()),
            cell_text(o.colour.as_ref()),
            size_cells,
            units,
        ));
    }

    let size_headers: String = SIZE_LABELS
        .iter()
        .map(|l| format!("<th>{}</th>", l))
        .collect();
    let totals_cells: String = size_totals
        .iter()
        .map(|t| format!("<td class=\"num\">{}</td>", t))
        .collect();

    let body = format!(
        "<h1>Cutting Sheet</h1>\
<table><thead><tr>\
<th>PO NUMBER</th><th>STYLE</th><th>COLOUR</th>{size_headers}<th>TOTAL</th>\
</tr></thead><tbody>{rows}\
<tr class=\"total\"><td colspan=\"3\">TOTAL</td>{totals_cells}<td class=\"num\">{grand_total}</td></tr>\
</tbody></table>"
    );
    document("Cutting Sheet", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(po: &str, units: f64) -> SalesOrder {
        SalesOrder {
            po_number: Some(CellValue::text(po)),
            style_number: Some(CellValue::text("ST-1")),
            total_units: Some(CellValue::Number(units)),
            size_8: Some(CellValue::Number(units / 2.0)),
            size_10: Some(CellValue::Number(units / 2.0)),
            ..Default::default()
        }
    }

    fn row_count(html: &str) -> usize {
        html.matches("class=\"order-row\"").count()
    }

    #[test]
    fn test_both_sheets_cap_at_six_orders() {
        let orders: Vec<SalesOrder> =
            (0..9).map(|i| order(&format!("PO{:04}", i), 10.0)).collect();
        let docket = docket_sheet_html(&orders);
        let cutting = cutting_sheet_html(&orders);
        assert_eq!(row_count(&docket), 6);
        assert_eq!(row_count(&cutting), 6);
        // first six in selection order, seventh dropped
        assert!(docket.contains("PO0005"));
        assert!(!docket.contains("PO0006"));
    }

    #[test]
    fn test_docket_totals_merge_row() {
        let orders = vec![order("PO0001", 10.0), order("PO0002", 30.0)];
        let html = docket_sheet_html(&orders);
        assert!(html.contains("colspan=\"6\""));
        assert!(html.contains("<td class=\"num\">40</td>"));
    }

    #[test]
    fn test_cutting_sheet_column_totals() {
        let orders = vec![order("PO0001", 10.0), order("PO0002", 30.0)];
        let html = cutting_sheet_html(&orders);
        // size 8 column total: 5 + 15
        assert!(html.contains("<td class=\"num\">20</td>"));
        // grand total
        assert!(html.contains("<td class=\"num\">40</td>"));
        // blank cell for sizes without units
        assert!(html.contains("<td class=\"num\"></td>"));
    }

    #[test]
    fn test_html_is_escaped() {
        let mut o = order("PO0001", 10.0);
        o.description = Some(CellValue::text("A<B & C"));
        let html = docket_sheet_html(&[o]);
        assert!(html.contains("A&lt;B &amp; C"));
    }
}
