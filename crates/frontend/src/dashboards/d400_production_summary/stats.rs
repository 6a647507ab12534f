//! KPI reducers over the unfiltered collections.
//!
//! All fiscal bucketing works in whole months, so ranges are expressed
//! as month indices (`year * 12 + month - 1`). The fiscal year starts
//! July 1; quarters start July, October, January and April, which makes
//! every quarter boundary a month index divisible by three.

use crate::shared::normalize::parse_cell_date;
use chrono::{DateTime, Datelike, Duration, Utc};
use contracts::domain::a001_sales_order::SalesOrder;
use contracts::domain::a002_fabric_order::FabricOrder;
use contracts::shared::cell::{int_or_zero, CellValue};

const DELIVERED: &str = "DELIVERED";
const IN_PRODUCTION: &str = "IN PRODUCTION";
const FABRIC_ORDERED: &str = "FABRIC ORDERED";
const GOLD_SEAL_SENT: &str = "GS SENT";

/// The fixed metric set behind the production summary tiles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductionStats {
    pub total_orders: usize,
    pub total_units: i64,
    pub delivered_last_30_days: usize,
    pub delivered_units_last_30_days: i64,
    pub current_fy_units: i64,
    pub prior_fy_units: i64,
    pub two_years_prior_fy_units: i64,
    /// Most recent fiscal quarter first.
    pub quarter_units: [i64; 4],
    /// `"Jul-Sep 2024"` style labels, aligned with `quarter_units`.
    pub quarter_labels: [String; 4],
    pub in_production: usize,
    pub fabric_ordered: usize,
    pub pending_units: i64,
    pub pending_orders: usize,
    pub gold_seal_sent: usize,
    /// Max `XFACT DD` formatted for display, `-` when nothing parses.
    pub last_delivery_date: String,
}

fn status_eq(cell: Option<&CellValue>, wanted: &str) -> bool {
    cell.map(|c| c.as_text().trim().eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

/// Month index of a date: `year * 12 + month - 1`.
fn month_index(dt: DateTime<Utc>) -> i32 {
    dt.year() * 12 + dt.month() as i32 - 1
}

/// Month index of the July 1 that starts the fiscal year containing `idx`.
fn fiscal_year_start(idx: i32) -> i32 {
    // July is month index 6 within its calendar year
    idx - (idx - 6).rem_euclid(12)
}

fn month_name(index_in_year: i32) -> &'static str {
    match index_in_year {
        0 => "Jan",
        1 => "Feb",
        2 => "Mar",
        3 => "Apr",
        4 => "May",
        5 => "Jun",
        6 => "Jul",
        7 => "Aug",
        8 => "Sep",
        9 => "Oct",
        10 => "Nov",
        _ => "Dec",
    }
}

/// `"Jul-Sep 2024"` for the quarter starting at month index `start`.
fn quarter_label(start: i32) -> String {
    format!(
        "{}-{} {}",
        month_name(start.rem_euclid(12)),
        month_name((start + 2).rem_euclid(12)),
        start.div_euclid(12)
    )
}

impl ProductionStats {
    /// Compute every metric from the raw collections. Rows with
    /// unparseable dates stay in the date-independent counts but fall
    /// out of every dated bucket.
    pub fn compute(sales: &[SalesOrder], fabric: &[FabricOrder], now: DateTime<Utc>) -> Self {
        let mut stats = ProductionStats {
            last_delivery_date: "-".to_string(),
            ..Default::default()
        };

        let now_idx = month_index(now);
        let current_quarter = now_idx - now_idx.rem_euclid(3);
        let quarter_starts = [
            current_quarter,
            current_quarter - 3,
            current_quarter - 6,
            current_quarter - 9,
        ];
        stats.quarter_labels = quarter_starts.map(quarter_label);
        let fy_start = fiscal_year_start(now_idx);

        let cutoff_30d = now - Duration::days(30);
        let mut last_delivery: Option<DateTime<Utc>> = None;

        for order in sales {
            let units = int_or_zero(order.total_units.as_ref());
            stats.total_orders += 1;
            stats.total_units += units;

            let delivered = status_eq(order.live_status.as_ref(), DELIVERED);
            if delivered {
                // actual delivery date when recorded, expected otherwise
                let delivery = order
                    .real_dd
                    .as_ref()
                    .and_then(parse_cell_date)
                    .or_else(|| order.xfact_dd.as_ref().and_then(parse_cell_date));
                if let Some(d) = delivery {
                    if d > cutoff_30d && d <= now {
                        stats.delivered_last_30_days += 1;
                        stats.delivered_units_last_30_days += units;
                    }
                }
            } else {
                stats.pending_orders += 1;
                stats.pending_units += units;
            }

            if status_eq(order.live_status.as_ref(), IN_PRODUCTION) {
                stats.in_production += 1;
            }
            if status_eq(order.fit_status.as_ref(), GOLD_SEAL_SENT) {
                stats.gold_seal_sent += 1;
            }

            if let Some(xfact) = order.xfact_dd.as_ref().and_then(parse_cell_date) {
                if last_delivery.map(|m| xfact > m).unwrap_or(true) {
                    last_delivery = Some(xfact);
                }
                let idx = month_index(xfact);
                if idx >= fy_start && idx < fy_start + 12 {
                    stats.current_fy_units += units;
                } else if idx >= fy_start - 12 && idx < fy_start {
                    stats.prior_fy_units += units;
                } else if idx >= fy_start - 24 && idx < fy_start - 12 {
                    stats.two_years_prior_fy_units += units;
                }
                for (slot, &start) in quarter_starts.iter().enumerate() {
                    if idx >= start && idx < start + 3 {
                        stats.quarter_units[slot] += units;
                    }
                }
            }
        }

        if let Some(d) = last_delivery {
            stats.last_delivery_date = d.format("%d %b %Y").to_string();
        }

        stats.fabric_ordered = fabric
            .iter()
            .filter(|f| status_eq(f.status.as_ref(), FABRIC_ORDERED))
            .count();

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn order(status: &str, xfact: Option<String>, units: f64) -> SalesOrder {
        SalesOrder {
            po_number: Some(CellValue::text("PO")),
            style_number: Some(CellValue::text("ST")),
            live_status: Some(CellValue::text(status)),
            xfact_dd: xfact.map(CellValue::Text),
            total_units: Some(CellValue::Number(units)),
            ..Default::default()
        }
    }

    fn iso(dt: DateTime<Utc>) -> String {
        dt.format("%Y-%m-%d").to_string()
    }

    #[test]
    fn test_core_aggregation_scenario() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let sales = vec![
            order("DELIVERED", Some(iso(now - Duration::days(10))), 50.0),
            order("IN PRODUCTION", None, 30.0),
            order("DELIVERED", Some(iso(now - Duration::days(400))), 20.0),
        ];
        let stats = ProductionStats::compute(&sales, &[], now);
        assert_eq!(stats.total_orders, 3);
        assert_eq!(stats.total_units, 100);
        assert_eq!(stats.delivered_last_30_days, 1);
        assert_eq!(stats.delivered_units_last_30_days, 50);
        assert_eq!(stats.in_production, 1);
        assert_eq!(stats.pending_units, 30);
        assert_eq!(stats.pending_orders, 1);
    }

    #[test]
    fn test_real_dd_preferred_over_xfact_for_delivery_window() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap();
        let mut o = order("delivered", Some(iso(now - Duration::days(90))), 40.0);
        o.real_dd = Some(CellValue::text(iso(now - Duration::days(5))));
        let stats = ProductionStats::compute(&[o], &[], now);
        assert_eq!(stats.delivered_last_30_days, 1);
        assert_eq!(stats.delivered_units_last_30_days, 40);
    }

    #[test]
    fn test_fiscal_year_buckets_split_on_july_first() {
        // FY runs July 1 - June 30; now is mid-August 2024, FY25
        let now = Utc.with_ymd_and_hms(2024, 8, 15, 0, 0, 0).unwrap();
        let sales = vec![
            order("IN PRODUCTION", Some("2024-07-01".into()), 10.0),
            order("IN PRODUCTION", Some("2024-06-30".into()), 20.0),
            order("IN PRODUCTION", Some("2023-06-30".into()), 40.0),
            order("IN PRODUCTION", Some("TBC".into()), 80.0),
        ];
        let stats = ProductionStats::compute(&sales, &[], now);
        assert_eq!(stats.current_fy_units, 10);
        assert_eq!(stats.prior_fy_units, 20);
        assert_eq!(stats.two_years_prior_fy_units, 40);
        // the undated row still counts in the totals
        assert_eq!(stats.total_units, 150);
    }

    #[test]
    fn test_quarter_buckets_most_recent_first() {
        let now = Utc.with_ymd_and_hms(2024, 8, 15, 0, 0, 0).unwrap();
        let sales = vec![
            order("IN PRODUCTION", Some("2024-07-10".into()), 1.0),
            order("IN PRODUCTION", Some("2024-05-10".into()), 2.0),
            order("IN PRODUCTION", Some("2024-02-10".into()), 4.0),
            order("IN PRODUCTION", Some("2023-11-10".into()), 8.0),
            order("IN PRODUCTION", Some("2023-08-10".into()), 16.0),
        ];
        let stats = ProductionStats::compute(&sales, &[], now);
        assert_eq!(stats.quarter_units, [1, 2, 4, 8]);
        assert_eq!(stats.quarter_labels[0], "Jul-Sep 2024");
        assert_eq!(stats.quarter_labels[3], "Oct-Dec 2023");
    }

    #[test]
    fn test_fabric_ordered_reads_fabric_collection() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let fabric = vec![
            FabricOrder {
                status: Some(CellValue::text("fabric ordered")),
                ..Default::default()
            },
            FabricOrder {
                status: Some(CellValue::text("DELIVERED")),
                ..Default::default()
            },
        ];
        let stats = ProductionStats::compute(&[], &fabric, now);
        assert_eq!(stats.fabric_ordered, 1);
    }

    #[test]
    fn test_last_delivery_date_placeholder_and_max() {
        let now = Utc.with_ymd_and_hms(2024, 6, 15, 0, 0, 0).unwrap();
        let stats = ProductionStats::compute(&[], &[], now);
        assert_eq!(stats.last_delivery_date, "-");

        let sales = vec![
            order("DELIVERED", Some("2024-03-01".into()), 1.0),
            order("DELIVERED", Some("2024-05-20".into()), 1.0),
            order("DELIVERED", Some("TBC".into()), 1.0),
        ];
        let stats = ProductionStats::compute(&sales, &[], now);
        assert_eq!(stats.last_delivery_date, "20 May 2024");
    }
}
