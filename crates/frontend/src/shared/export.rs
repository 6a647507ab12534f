//! Excel export: projected rows to an `.xlsx` workbook, downloaded
//! through a temporary object URL. Workbook building is pure so it can
//! be tested off-browser; only the download touches the DOM.

use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook};
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// `High5_Sales Orders_2024-06-01.xlsx`
pub fn export_filename(tab_label: &str, date: NaiveDate) -> String {
    format!("High5_{}_{}.xlsx", tab_label, date.format("%Y-%m-%d"))
}

/// Build a single-sheet workbook from already-projected display rows.
/// Every cell is written as text; the projection stage owns formatting.
pub fn build_workbook_buffer(
    sheet_name: &str,
    headers: &[&str],
    rows: &[Vec<String>],
) -> Result<Vec<u8>, String> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|e| format!("Failed to name worksheet: {}", e))?;

    let bold = Format::new().set_bold();
    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, *header, &bold)
            .map_err(|e| format!("Failed to write header: {}", e))?;
    }

    for (i, row) in rows.iter().enumerate() {
        for (col, value) in row.iter().enumerate() {
            worksheet
                .write_string((i + 1) as u32, col as u16, value)
                .map_err(|e| format!("Failed to write cell: {}", e))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| format!("Failed to serialize workbook: {}", e))
}

/// Build the workbook and hand it to the browser as a download.
pub fn export_to_excel(
    sheet_name: &str,
    headers: &[&str],
    rows: &[Vec<String>],
    filename: &str,
) -> Result<(), String> {
    if rows.is_empty() {
        return Err("No rows to export".to_string());
    }
    let buffer = build_workbook_buffer(sheet_name, headers, rows)?;
    let blob = create_xlsx_blob(&buffer)?;
    download_blob(&blob, filename)
}

fn create_xlsx_blob(buffer: &[u8]) -> Result<Blob, String> {
    let bytes = js_sys::Uint8Array::from(buffer);
    let array = js_sys::Array::new();
    array.push(&bytes);

    let properties = BlobPropertyBag::new();
    properties.set_type(XLSX_MIME);

    Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

/// Click-through download of a blob via a hidden anchor.
pub fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    document
        .body()
        .ok_or("No body element")?
        .append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;

    anchor.click();

    document
        .body()
        .ok_or("No body element")?
        .remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_filename_carries_tab_and_iso_date() {
        let d = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        assert_eq!(
            export_filename("Sales Orders", d),
            "High5_Sales Orders_2024-06-01.xlsx"
        );
    }

    #[test]
    fn test_workbook_buffer_is_nonempty_zip() {
        let rows = vec![
            vec!["PO0001".to_string(), "£1,234.50".to_string()],
            vec!["PO0002".to_string(), "£0.00".to_string()],
        ];
        let buf = build_workbook_buffer("Sales Orders", &["PO NUMBER", "PRICE"], &rows).unwrap();
        // xlsx is a zip container, PK signature
        assert_eq!(&buf[..2], b"PK");
    }
}
