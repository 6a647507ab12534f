use crate::domain::a002_fabric_order::projection::{project_row, EXPORT_COLUMNS, SCREEN_COLUMNS};
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
use contracts::domain::a002_fabric_order::FabricOrder;
use leptos::prelude::*;

const TAB_LABEL: &str = "Fabric Orders";

fn filter_set(supplier: &str, order_type: &str, status: &str) -> FilterSet {
    FilterSet::new(vec![
        ("SUPPLIER", supplier.to_string()),
        ("TYPE", order_type.to_string()),
        ("STATUS", status.to_string()),
    ])
}

#[component]
pub fn FabricOrderList() -> impl IntoView {
    let ctx = use_app_context();

    let search = RwSignal::new(String::new());
    let supplier = RwSignal::new(String::new());
    let order_type = RwSignal::new(String::new());
    let status = RwSignal::new(String::new());
    let page = RwSignal::new(1usize);
    let is_filter_expanded = RwSignal::new(false);
    let (export_error, set_export_error) = signal(None::<String>);

    let filtered = Memo::new(move |_| {
        let mut rows = filter_records(
            &ctx.fabric(),
            &search.get(),
            &filter_set(&supplier.get(), &order_type.get(), &status.get()),
        );
        sort_desc_by_key(&mut rows, |f: &FabricOrder| date_sort_key(f.date.as_ref()));
        rows
    });

    let pages = Memo::new(move |_| total_pages(filtered.get().len(), PAGE_SIZE));
    let page_rows = Memo::new(move |_| page_slice(&filtered.get(), PAGE_SIZE, page.get()));

    let supplier_options = Memo::new(move |_| distinct_options(&ctx.fabric(), "SUPPLIER"));
    let type_options = Memo::new(move |_| distinct_options(&ctx.fabric(), "TYPE"));
    let status_options = Memo::new(move |_| distinct_options(&ctx.fabric(), "STATUS"));

    let active_filters_count = Signal::derive(move || {
        filter_set(&supplier.get(), &order_type.get(), &status.get()).active_count()
    });

    let set_and_reset = move |target: RwSignal<String>| {
        Callback::new(move |v: String| {
            target.set(v);
            page.set(1);
        })
    };

    let export = move |_| {
        set_export_error.set(None);
        let sales = ctx.sales();
        let rows: Vec<Vec<String>> = filtered
            .get_untracked()
            .iter()
            .map(|f| aligned_row(EXPORT_COLUMNS, &project_row(f, &sales, EXPORT_COLUMNS)))
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
                            label="Supplier"
                            options=Signal::derive(move || supplier_options.get())
                            value=Signal::derive(move || supplier.get())
                            on_change=set_and_reset(supplier)
                        />
                        <FilterSelect
                            label="Type"
                            options=Signal::derive(move || type_options.get())
                            value=Signal::derive(move || order_type.get())
                            on_change=set_and_reset(order_type)
                        />
                        <FilterSelect
                            label="Status"
                            options=Signal::derive(move || status_options.get())
                            value=Signal::derive(move || status.get())
                            on_change=set_and_reset(status)
                        />
                    </div>
                }.into_any()
                filter_tags=move || view! {
                    <div style="display: flex; gap: 6px; flex-wrap: wrap; margin-top: 8px;">
                        {move || {
                            [
                                ("Supplier", supplier),
                                ("Type", order_type),
                                ("Status", status),
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
                <table class="data-table" style="width: 100%; min-width: 1100px;">
                    <thead>
                        <tr>
                            {headers(SCREEN_COLUMNS).into_iter().map(|h| view! {
                                <th>{h}</th>
                            }).collect_view()}
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            let sales = ctx.sales();
                            page_rows.get().iter().map(|fabric| {
                                let cells = aligned_row(
                                    SCREEN_COLUMNS,
                                    &project_row(fabric, &sales, SCREEN_COLUMNS),
                                );
                                view! {
                                    <tr>
                                        {SCREEN_COLUMNS.iter().zip(cells).map(|(col, value)| {
                                            render_cell(col.header, value)
                                        }).collect_view()}
                                    </tr>
                                }
                            }).collect_view()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

fn render_cell(header: &'static str, value: String) -> impl IntoView {
    view! {
        <td>
            {match header {
                "IMAGE" if value.starts_with("http") => view! {
                    <img src={value} alt="fabric" style="max-height: 48px; max-width: 64px; object-fit: contain;" />
                }.into_any(),
                "FABRIC PO" if value.starts_with("http") => view! {
                    <a href={value} target="_blank" rel="noopener">"Open"</a>
                }.into_any(),
                _ => view! { <span>{value}</span> }.into_any(),
            }}
        </td>
    }
}
