//! Filter, search, sort and pagination over the in-memory record
//! collections. The predicate pipeline is pure; `SearchInput` at the
//! bottom is the debounced UI entry point for it.

use contracts::domain::a001_sales_order::SalesOrder;
use contracts::domain::a002_fabric_order::FabricOrder;
use contracts::domain::a003_development::Development;
use contracts::shared::cell::CellValue;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use std::collections::BTreeSet;

/// Fixed page size for every table.
pub const PAGE_SIZE: usize = 100;

const SEARCH_DEBOUNCE_MS: u32 = 300;

/// A record that can be filtered: free-text search over all of its
/// fields, exact-match constraints per field, and a base validity gate
/// applied before any user filter.
pub trait Filterable {
    fn haystack(&self) -> String;
    fn field(&self, name: &str) -> Option<&CellValue>;
    fn base_valid(&self) -> bool {
        true
    }
}

impl Filterable for SalesOrder {
    fn haystack(&self) -> String {
        SalesOrder::haystack(self)
    }
    fn field(&self, name: &str) -> Option<&CellValue> {
        SalesOrder::field(self, name)
    }
    // Rows missing PO, style or units are sheet noise, never displayed.
    fn base_valid(&self) -> bool {
        self.is_valid()
    }
}

impl Filterable for FabricOrder {
    fn haystack(&self) -> String {
        FabricOrder::haystack(self)
    }
    fn field(&self, name: &str) -> Option<&CellValue> {
        FabricOrder::field(self, name)
    }
}

impl Filterable for Development {
    fn haystack(&self) -> String {
        Development::haystack(self)
    }
    fn field(&self, name: &str) -> Option<&CellValue> {
        Development::field(self, name)
    }
}

/// Exact-match constraints, one per field. An empty required value is a
/// wildcard; active constraints combine with AND.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    entries: Vec<(&'static str, String)>,
}

impl FilterSet {
    pub fn new(entries: Vec<(&'static str, String)>) -> Self {
        Self { entries }
    }

    pub fn active_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|(_, v)| !v.trim().is_empty())
            .count()
    }

    pub fn matches<T: Filterable>(&self, record: &T) -> bool {
        self.entries.iter().all(|(name, required)| {
            let required = required.trim();
            if required.is_empty() {
                return true;
            }
            match record.field(name) {
                Some(cell) => cell.as_text().trim().eq_ignore_ascii_case(required),
                None => false,
            }
        })
    }
}

/// Case-insensitive search-anywhere: the needle must appear somewhere
/// in the concatenation of the record's field values.
pub fn matches_search<T: Filterable>(record: &T, search: &str) -> bool {
    let needle = search.trim().to_lowercase();
    needle.is_empty() || record.haystack().to_lowercase().contains(&needle)
}

/// The full predicate pipeline: base validity, then free text, then the
/// per-field constraints. Order-preserving and idempotent.
pub fn filter_records<T: Filterable + Clone>(
    records: &[T],
    search: &str,
    filters: &FilterSet,
) -> Vec<T> {
    records
        .iter()
        .filter(|r| r.base_valid() && matches_search(*r, search) && filters.matches(*r))
        .cloned()
        .collect()
}

/// Distinct, sorted, non-empty values of one field across the whole
/// unfiltered collection. Option lists never shrink when another
/// filter becomes active.
pub fn distinct_options<T: Filterable>(records: &[T], field: &'static str) -> Vec<String> {
    let set: BTreeSet<String> = records
        .iter()
        .filter(|r| r.base_valid())
        .filter_map(|r| r.field(field))
        .map(|c| c.as_text().trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();
    set.into_iter().collect()
}

/// Stable descending order by an integer key; zero-key (undated)
/// records end up after every dated one.
pub fn sort_desc_by_key<T>(records: &mut [T], key: impl Fn(&T) -> i64) {
    records.sort_by_key(|r| std::cmp::Reverse(key(r)));
}

/// Number of pages for a collection; an empty collection still has one.
pub fn total_pages(len: usize, page_size: usize) -> usize {
    if len == 0 {
        1
    } else {
        len.div_ceil(page_size)
    }
}

/// Clamp a 1-based page number into `[1, total]`.
pub fn clamp_page(page: usize, total: usize) -> usize {
    page.max(1).min(total.max(1))
}

/// The records of one 1-based page. Out-of-range pages clamp rather
/// than wrap or error.
pub fn page_slice<T: Clone>(records: &[T], page_size: usize, page: usize) -> Vec<T> {
    let page = clamp_page(page, total_pages(records.len(), page_size));
    let start = (page - 1) * page_size;
    records.iter().skip(start).take(page_size).cloned().collect()
}

/// Search box with debounce and a clear button.
#[component]
pub fn SearchInput(
    /// Current committed filter value
    #[prop(into)]
    value: Signal<String>,
    /// Callback fired after the debounce window
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search anywhere...".to_string()
    } else {
        placeholder
    };

    // Local input state, ahead of the debounce. Seeded from the
    // committed value so a pre-set search renders in the box.
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Dropping the previous Timeout cancels it.
    let debounce = StoredValue::new_local(None::<Timeout>);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        debounce.set_value(Some(Timeout::new(SEARCH_DEBOUNCE_MS, move || {
            on_change.run(new_value.clone());
        })));
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        debounce.set_value(None);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder={placeholder}
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input_change(event_target_value(&ev));
                }
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button
                        style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                        on:click=clear_filter
                        title="Clear"
                    >
                        {crate::shared::icons::icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(po: &str, customer: &str, xfact: &str, units: f64) -> SalesOrder {
        SalesOrder {
            po_number: Some(CellValue::text(po)),
            style_number: Some(CellValue::text("ST-1")),
            customer_name: Some(CellValue::text(customer)),
            xfact_dd: Some(CellValue::text(xfact)),
            total_units: Some(CellValue::Number(units)),
            ..Default::default()
        }
    }

    fn sample() -> Vec<SalesOrder> {
        vec![
            order("PO0001", "Boden", "2024-03-01", 100.0),
            order("PO0002", "Hush", "2024-05-01", 50.0),
            // invalid: no units
            order("PO0003", "Sosandar", "2024-04-01", 0.0),
            order("PO0004", "Boden", "TBC", 75.0),
        ]
    }

    #[test]
    fn test_empty_filters_return_base_valid_subset_in_order() {
        let data = sample();
        let out = filter_records(&data, "", &FilterSet::default());
        let pos: Vec<String> = out
            .iter()
            .map(|o| o.po_number.as_ref().unwrap().as_text())
            .collect();
        assert_eq!(pos, vec!["PO0001", "PO0002", "PO0004"]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let data = sample();
        let filters = FilterSet::new(vec![("CUSTOMER NAME", "boden".to_string())]);
        let once = filter_records(&data, "po", &filters);
        let twice = filter_records(&once, "po", &filters);
        assert_eq!(once.len(), 2);
        assert_eq!(once.len(), twice.len());
    }

    #[test]
    fn test_search_matches_any_field() {
        let data = sample();
        assert_eq!(filter_records(&data, "hush", &FilterSet::default()).len(), 1);
        // numbers are searchable too
        assert_eq!(filter_records(&data, "75", &FilterSet::default()).len(), 1);
        assert!(filter_records(&data, "no-such-text", &FilterSet::default()).is_empty());
    }

    #[test]
    fn test_field_filters_combine_with_and() {
        let data = sample();
        let filters = FilterSet::new(vec![
            ("CUSTOMER NAME", "Boden".to_string()),
            ("PO NUMBER", "PO0004".to_string()),
        ]);
        assert_eq!(filter_records(&data, "", &filters).len(), 1);
        assert_eq!(filters.active_count(), 2);
    }

    #[test]
    fn test_distinct_options_sorted_and_deduplicated() {
        let data = sample();
        let opts = distinct_options(&data, "CUSTOMER NAME");
        // invalid row's customer is excluded, duplicates collapse
        assert_eq!(opts, vec!["Boden", "Hush"]);
    }

    #[test]
    fn test_sort_puts_undated_last_and_is_stable() {
        let mut data = sample();
        sort_desc_by_key(&mut data, |o| {
            crate::shared::normalize::date_sort_key(o.xfact_dd.as_ref())
        });
        let pos: Vec<String> = data
            .iter()
            .map(|o| o.po_number.as_ref().unwrap().as_text())
            .collect();
        assert_eq!(pos, vec!["PO0002", "PO0003", "PO0001", "PO0004"]);

        let mut ties = vec![
            order("A", "x", "2024-01-01", 1.0),
            order("B", "x", "2024-01-01", 2.0),
        ];
        sort_desc_by_key(&mut ties, |o| {
            crate::shared::normalize::date_sort_key(o.xfact_dd.as_ref())
        });
        assert_eq!(ties[0].po_number.as_ref().unwrap().as_text(), "A");
    }

    #[test]
    fn test_pagination_partitions_exactly() {
        let data: Vec<SalesOrder> = (0..25)
            .map(|i| order(&format!("PO{:04}", i), "x", "2024-01-01", 1.0))
            .collect();
        let size = 10;
        let pages = total_pages(data.len(), size);
        assert_eq!(pages, 3);
        let mut rebuilt = Vec::new();
        for p in 1..=pages {
            rebuilt.extend(page_slice(&data, size, p));
        }
        assert_eq!(rebuilt.len(), data.len());
        for (a, b) in rebuilt.iter().zip(data.iter()) {
            assert_eq!(
                a.po_number.as_ref().unwrap().as_text(),
                b.po_number.as_ref().unwrap().as_text()
            );
        }
    }

    #[test]
    fn test_page_clamps_at_both_bounds() {
        let data: Vec<SalesOrder> = (0..5)
            .map(|i| order(&format!("PO{:04}", i), "x", "2024-01-01", 1.0))
            .collect();
        assert_eq!(clamp_page(0, total_pages(data.len(), 2)), 1);
        assert_eq!(clamp_page(99, total_pages(data.len(), 2)), 3);
        assert_eq!(page_slice(&data, 2, 99).len(), 1);
        assert_eq!(total_pages(0, PAGE_SIZE), 1);
    }
}
