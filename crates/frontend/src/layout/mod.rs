pub mod global_context;
pub mod top_header;

use leptos::prelude::*;

use crate::dashboards::ProductionSummaryDashboard;
use crate::domain::a001_sales_order::ui::SalesOrderList;
use crate::domain::a002_fabric_order::ui::FabricOrderList;
use crate::domain::a003_development::ui::DevelopmentList;
use crate::layout::global_context::{use_app_context, ActiveTab};
use crate::usecases::u501_print_sheets::PrintSheetsPage;

/// Application shell: header on top, the active tab's page below.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_app_context();

    // One fetch on mount. Pages re-trigger it via the refresh buttons.
    ctx.load_snapshot();

    view! {
        <div class="shell">
            <top_header::TopHeader />

            <main class="shell__content">
                <Show when=move || ctx.load_error.get().is_some()>
                    <div class="alert alert--error">
                        <span>
                            {move || ctx.load_error.get().unwrap_or_default()}
                        </span>
                        <button
                            class="btn"
                            on:click=move |_| ctx.load_snapshot()
                        >
                            "Retry"
                        </button>
                    </div>
                </Show>

                <Show when=move || {
                    ctx.loading.get() && ctx.snapshot.with(|s| s.is_none())
                }>
                    <div class="shell__loading">"Loading production data..."</div>
                </Show>

                {move || match ctx.active_tab.get() {
                    ActiveTab::Dashboard => view! { <ProductionSummaryDashboard /> }.into_any(),
                    ActiveTab::SalesOrders => view! { <SalesOrderList /> }.into_any(),
                    ActiveTab::FabricOrders => view! { <FabricOrderList /> }.into_any(),
                    ActiveTab::Developments => view! { <DevelopmentList /> }.into_any(),
                    ActiveTab::PrintSheets => view! { <PrintSheetsPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
