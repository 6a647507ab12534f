use crate::domain::a001_sales_order::projection::{project_row, EXPORT_COLUMNS, SCREEN_COLUMNS};
use crate::layout::global_context::use_app_context;
use crate::shared::components::{FilterPanel, FilterSelect, FilterTag, PaginationControls};
use crate::shared::export::{export_filename, export_to_excel};
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    distinct_options, filter_records, page_slice, sort_desc_by_key, total_pages, FilterSet,
    SearchInput, PAGE_SIZE,
};
use crate::shared::normalize::date_sort_key;
use crate::shared::projection::{aligned_row, headers};
use chrono::Utc;
use contracts::domain::a001_sales_order::SalesOrder;
use leptos::prelude::*;

const TAB_LABEL: &str = "Sales Orders";

fn filter_set(customer: &str, order_type: &str, live: &str, fit: &str) -> FilterSet {
    FilterSet::new(vec![
        ("CUSTOMER NAME", customer.to_string()),
        ("TYPE", order_type.to_string()),
        ("LIVE STATUS", live.to_string()),
        ("FIT STATUS", fit.to_string()),
    ])
}

#[component]
pub fn SalesOrderList() -> impl IntoView {
    let ctx = use_app_context();

    let search = RwSignal::new(String::new());
    let customer = RwSignal::new(String::new());
    let order_type = RwSignal::new(String::new());
    let live_status = RwSignal::new(String::new());
    let fit_status = RwSignal::new(String::new());
    let page = RwSignal::new(1usize);
    let is_filter_expanded = RwSignal::new(false);
    let (export_error, set_export_error) = signal(None::<String>);

    let filtered = Memo::new(move |_| {
        let mut rows = filter_records(
            &ctx.sales(),
            &search.get(),
            &filter_set(
                &customer.get(),
                &order_type.get(),
                &live_status.get(),
                &fit_status.get(),
            ),
        );
        sort_desc_by_key(&mut rows, |o: &SalesOrder| {
            date_sort_key(o.xfact_dd.as_ref())
        });
        rows
    });

    let pages = Memo::new(move |_| total_pages(filtered.get().len(), PAGE_SIZE));
    let page_rows = Memo::new(move |_| page_slice(&filtered.get(), PAGE_SIZE, page.get()));

    let customer_options = Memo::new(move |_| distinct_options(&ctx.sales(), "CUSTOMER NAME"));
    let type_options = Memo::new(move |_| distinct_options(&ctx.sales(), "TYPE"));
    let live_options = Memo::new(move |_| distinct_options(&ctx.sales(), "LIVE STATUS"));
    let fit_options = Memo::new(move |_| distinct_options(&ctx.sales(), "FIT STATUS"));

    let active_filters_count = Signal::derive(move || {
        filter_set(
            &customer.get(),
            &order_type.get(),
            &live_status.get(),
            &fit_status.get(),
        )
        .active_count()
    });

    let set_and_reset = move |target: RwSignal<String>| {
        Callback::new(move |v: String| {
            target.set(v);
            page.set(1);
        })
    };

    let export = move |_| {
        set_export_error.set(None);
        let rows: Vec<Vec<String>> = filtered
            .get_untracked()
            .iter()
            .map(|o| aligned_row(EXPORT_COLUMNS, &project_row(o, EXPORT_COLUMNS)))
            .collect();
        let filename = export_filename(TAB_LABEL, Utc::now().date_naive());
        if let Err(e) = export_to_excel(TAB_LABEL, &headers(EXPORT_COLUMNS), &rows, &filename) {
            log::warn!("Export aborted: {}", e);
            set_export_error.set(Some(e));
        }
    };

    view! {
        <div class="page">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{TAB_LABEL}</h1>
                    <span class="badge badge--primary">
                        {move || filtered.get().len().to_string()}
                    </span>
                </div>
                <div class="page__header-right">
                    <SearchInput
                        value=Signal::derive(move || search.get())
                        on_change=set_and_reset(search)
                    />
                    <button class="btn" on:click=export title="Export to Excel">
                        {icon("download")}
                        " Export"
                    </button>
                    <button
                        class="btn"
                        on:click=move |_| ctx.load_snapshot()
                        disabled=move || ctx.loading.get()
                    >
                        {move || if ctx.loading.get() { "Loading..." } else { "Refresh" }}
                    </button>
                </div>
            </div>

            {move || export_error.get().map(|e| view! {
                <div class="alert alert--warning">{e}</div>
            })}

            <FilterPanel
                is_expanded=is_filter_expanded
                active_filters_count=active_filters_count
                pagination_controls=move || view! {
                    <PaginationControls
                        current_page=Signal::derive(move || page.get())
                        total_pages=Signal::derive(move || pages.get())
                        total_count=Signal::derive(move || filtered.get().len())
                        on_page_change=Callback::new(move |p| page.set(p))
                    />
                }.into_any()
                filter_content=move || view! {
                    <div style="display: flex; flex-wrap: wrap; gap: 12px;">
                        <FilterSelect
                            label="Customer"
                            options=Signal::derive(move || customer_options.get())
                            value=Signal::derive(move || customer.get())
                            on_change=set_and_reset(customer)
                        />
                        <FilterSelect
                            label="Type"
                            options=Signal::derive(move || type_options.get())
                            value=Signal::derive(move || order_type.get())
                            on_change=set_and_reset(order_type)
                        />
                        <FilterSelect
                            label="Live status"
                            options=Signal::derive(move || live_options.get())
                            value=Signal::derive(move || live_status.get())
                            on_change=set_and_reset(live_status)
                        />
                        <FilterSelect
                            label="Fit status"
                            options=Signal::derive(move || fit_options.get())
                            value=Signal::derive(move || fit_status.get())
                            on_change=set_and_reset(fit_status)
                        />
                    </div>
                }.into_any()
                filter_tags=move || view! {
                    <div style="display: flex; gap: 6px; flex-wrap: wrap; margin-top: 8px;">
                        {move || {
                            [
                                ("Customer", customer),
                                ("Type", order_type),
                                ("Live status", live_status),
                                ("Fit status", fit_status),
                            ]
                            .into_iter()
                            .filter(|(_, sig)| !sig.get().trim().is_empty())
                            .map(|(name, sig)| view! {
                                <FilterTag
                                    label=format!("{}: {}", name, sig.get())
                                    on_remove=Callback::new(move |_| {
                                        sig.set(String::new());
                                        page.set(1);
                                    })
                                />
                            })
                            .collect_view()
                        }}
                    </div>
                }.into_any()
            />

            <div class="table-wrapper">
                <table class="data-table" style="width: 100%; min-width: 1200px;">
                    <thead>
                        <tr>
                            {headers(SCREEN_COLUMNS).into_iter().map(|h| view! {
                                <th>{h}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || page_rows.get().iter().map(|order| {
                            let cells = aligned_row(SCREEN_COLUMNS, &project_row(order, SCREEN_COLUMNS));
                            view! {
                                <tr>
                                    {SCREEN_COLUMNS.iter().zip(cells).map(|(col, value)| {
                                        render_cell(col.header, value)
                                    }).collect_view()}
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

/// Image columns render a thumbnail, link columns an anchor, everything
/// else plain text.
fn render_cell(header: &'static str, value: String) -> impl IntoView {
    view! {
        <td>
            {match header {
                "IMAGE" if !value.is_empty() => view! {
                    <img src={value} alt="style" style="max-height: 48px; max-width: 64px; object-fit: contain;" />
                }.into_any(),
                "PACKING LIST" if value.starts_with("http") => view! {
                    <a href={value} target="_blank" rel="noopener">"Open"</a>
                }.into_any(),
                _ => view! { <span>{value}</span> }.into_any(),
            }}
        </td>
    }
}
