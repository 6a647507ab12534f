//! Cell normalization: spreadsheet values to display strings and sort keys.
//!
//! Every function here is total. A value that fails to parse degrades to a
//! safe default (the original string, zero, or empty) instead of erroring;
//! a bad cell must never abort a render.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use contracts::domain::a001_sales_order::{SalesOrder, SIZE_LABELS};
use contracts::shared::cell::CellValue;

/// Days between the sheet's day zero (1899-12-30) and the Unix epoch.
const SHEET_EPOCH_OFFSET_DAYS: f64 = 25569.0;
const MS_PER_DAY: f64 = 86_400_000.0;

const ZERO_MONEY: &str = "£0.00";

/// String date layouts the sheet has been seen to contain.
const TEXT_DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%d/%m/%Y", "%d-%m-%Y", "%d %b %Y", "%d %B %Y"];

pub(crate) fn parse_cell_date(cell: &CellValue) -> Option<DateTime<Utc>> {
    match cell {
        // Numeric cells are spreadsheet date serials (days since 1899-12-30).
        CellValue::Number(n) => {
            let millis = ((n - SHEET_EPOCH_OFFSET_DAYS) * MS_PER_DAY).round() as i64;
            DateTime::from_timestamp_millis(millis)
        }
        CellValue::Text(s) => parse_date_text(s.trim()),
        CellValue::Bool(_) => None,
    }
}

fn parse_date_text(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }
    for fmt in TEXT_DATE_FORMATS {
        if let Ok(nd) = NaiveDate::parse_from_str(s, fmt) {
            let ndt = nd.and_hms_opt(0, 0, 0)?;
            return Some(Utc.from_utc_datetime(&ndt));
        }
    }
    None
}

/// Display form of a date cell: `05 Jan 2024`.
///
/// An unparseable value passes through as its original text.
pub fn normalize_date(cell: Option<&CellValue>) -> String {
    match cell {
        None => String::new(),
        Some(c) => match parse_cell_date(c) {
            Some(dt) => dt.format("%d %b %Y").to_string(),
            None => c.as_text(),
        },
    }
}

/// Ordering key for a date cell: epoch milliseconds, `0` when unparseable.
/// Never used for display.
pub fn date_sort_key(cell: Option<&CellValue>) -> i64 {
    cell.and_then(parse_cell_date)
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

/// Display form of a money cell in UK format: `£1,234.50`.
///
/// Strings are stripped to `[0-9.-]` before parsing (the sheet mixes raw
/// numbers with symbol-prefixed strings); absent, zero or unparseable
/// values all render as the fixed zero amount.
pub fn normalize_currency(cell: Option<&CellValue>) -> String {
    let amount = match cell {
        None | Some(CellValue::Bool(_)) => 0.0,
        Some(CellValue::Number(n)) => *n,
        Some(CellValue::Text(s)) => {
            let cleaned: String = s
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
                .collect();
            cleaned.parse::<f64>().unwrap_or(0.0)
        }
    };
    format_gbp(amount)
}

/// GBP formatting with thousands separators and exactly two decimals.
pub fn format_gbp(amount: f64) -> String {
    if amount == 0.0 {
        return ZERO_MONEY.to_string();
    }
    let formatted = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some(parts) => parts,
        None => (formatted.as_str(), "00"),
    };
    let sign = if amount < 0.0 { "-" } else { "" };
    format!("{}£{}.{}", sign, group_thousands(int_part), frac_part)
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}

/// `"<size>:<count>"` for every size with a truthy count, ascending,
/// joined by `", "`. Sizes without units are omitted entirely.
pub fn compact_size_pairs(order: &SalesOrder) -> String {
    SIZE_LABELS
        .iter()
        .filter_map(|&label| {
            order
                .size_count(label)
                .filter(|c| c.is_truthy())
                .map(|c| format!("{}:{}", label, c.as_text()))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Thumbnail URL for a Google Drive share link, keyed on the file id.
pub fn drive_thumbnail(url: &str) -> Option<String> {
    let id = if let Some(rest) = url.split("/d/").nth(1) {
        rest.split(['/', '?']).next()
    } else if let Some(rest) = url.split("id=").nth(1) {
        rest.split('&').next()
    } else {
        None
    }?;
    if id.is_empty() {
        return None;
    }
    Some(format!("https://drive.google.com/thumbnail?id={}&sz=w200", id))
}

/// Image source for a link cell; non-Drive URLs pass through unchanged.
pub fn image_src(cell: Option<&CellValue>) -> Option<String> {
    let url = cell?.as_text();
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(drive_thumbnail(trimmed).unwrap_or_else(|| trimmed.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn serial_for(date: &str) -> f64 {
        let day_zero = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap();
        let d = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        (d - day_zero).num_days() as f64
    }

    #[test]
    fn test_serial_and_iso_agree() {
        let serial = CellValue::Number(serial_for("2024-01-05"));
        let iso = CellValue::text("2024-01-05");
        assert_eq!(normalize_date(Some(&serial)), "05 Jan 2024");
        assert_eq!(normalize_date(Some(&serial)), normalize_date(Some(&iso)));
        assert_eq!(date_sort_key(Some(&serial)), date_sort_key(Some(&iso)));
    }

    #[test]
    fn test_uk_date_strings_parse() {
        assert_eq!(
            normalize_date(Some(&CellValue::text("05/01/2024"))),
            "05 Jan 2024"
        );
        assert_eq!(
            normalize_date(Some(&CellValue::text("2024-01-05T00:00:00Z"))),
            "05 Jan 2024"
        );
    }

    #[test]
    fn test_unparseable_dates_pass_through() {
        let tbc = CellValue::text("TBC");
        assert_eq!(normalize_date(Some(&tbc)), "TBC");
        assert_eq!(date_sort_key(Some(&tbc)), 0);
        assert_eq!(normalize_date(None), "");
        assert_eq!(date_sort_key(None), 0);
    }

    #[test]
    fn test_zero_money_equivalences() {
        assert_eq!(normalize_currency(None), "£0.00");
        assert_eq!(normalize_currency(Some(&CellValue::Number(0.0))), "£0.00");
        assert_eq!(normalize_currency(Some(&CellValue::text(""))), "£0.00");
        assert_eq!(normalize_currency(Some(&CellValue::text("n/a"))), "£0.00");
    }

    #[test]
    fn test_symbol_string_and_number_agree() {
        let text = CellValue::text("£1,234.50");
        let number = CellValue::Number(1234.5);
        assert_eq!(normalize_currency(Some(&text)), "£1,234.50");
        assert_eq!(
            normalize_currency(Some(&text)),
            normalize_currency(Some(&number))
        );
        assert_eq!(
            normalize_currency(Some(&CellValue::Number(-42.0))),
            "-£42.00"
        );
        assert_eq!(
            normalize_currency(Some(&CellValue::Number(1_000_000.0))),
            "£1,000,000.00"
        );
    }

    #[test]
    fn test_compact_size_pairs_skips_empty_sizes() {
        let order = SalesOrder {
            size_8: Some(CellValue::Number(10.0)),
            size_10: Some(CellValue::Number(0.0)),
            size_12: Some(CellValue::text("24")),
            ..Default::default()
        };
        assert_eq!(compact_size_pairs(&order), "8:10, 12:24");
        assert_eq!(compact_size_pairs(&SalesOrder::default()), "");
    }

    #[test]
    fn test_drive_thumbnail_extraction() {
        assert_eq!(
            drive_thumbnail("https://drive.google.com/file/d/XYZ/view").as_deref(),
            Some("https://drive.google.com/thumbnail?id=XYZ&sz=w200")
        );
        assert_eq!(
            drive_thumbnail("https://drive.google.com/open?id=ABC&usp=share").as_deref(),
            Some("https://drive.google.com/thumbnail?id=ABC&sz=w200")
        );
        assert_eq!(drive_thumbnail("https://example.com/photo.jpg"), None);
    }

    #[test]
    fn test_image_src_passthrough() {
        let cell = CellValue::text("https://example.com/photo.jpg");
        assert_eq!(
            image_src(Some(&cell)).as_deref(),
            Some("https://example.com/photo.jpg")
        );
        assert_eq!(image_src(Some(&CellValue::text("  "))), None);
        assert_eq!(image_src(None), None);
    }
}
