use crate::dashboards::d400_production_summary::stats::ProductionStats;
use crate::layout::global_context::use_app_context;
use crate::shared::components::StatCard;
use crate::shared::normalize::format_gbp;
use chrono::Utc;
use contracts::shared::cell::int_or_zero;
use leptos::prelude::*;

fn format_count(n: usize) -> String {
    n.to_string()
}

fn format_units(n: i64) -> String {
    let s = n.abs().to_string();
    let mut out = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if n < 0 {
        out.push('-');
    }
    out.chars().rev().collect()
}

/// KPI tile grid over the unfiltered collections.
#[component]
pub fn ProductionSummaryDashboard() -> impl IntoView {
    let ctx = use_app_context();

    let stats = Memo::new(move |_| {
        ctx.snapshot.track();
        ProductionStats::compute(&ctx.sales(), &ctx.fabric(), Utc::now())
    });

    // order-book value for the subtitle of the units tile
    let order_value = Memo::new(move |_| {
        ctx.snapshot.track();
        let total: f64 = ctx
            .sales()
            .iter()
            .filter(|o| o.is_valid())
            .map(|o| {
                let units = int_or_zero(o.total_units.as_ref()) as f64;
                let price = o.price.as_ref().and_then(|p| p.as_f64()).unwrap_or(0.0);
                units * price
            })
            .sum();
        format_gbp(total)
    });

    let quarters = move || {
        let s = stats.get();
        s.quarter_labels
            .iter()
            .cloned()
            .zip(s.quarter_units)
            .collect::<Vec<_>>()
    };

    view! {
        <div style="padding: 16px;">
            <h2 style="margin: 0 0 16px 0; font-size: 20px;">"Production Summary"</h2>
            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px;">
                <StatCard
                    label="Total Orders".to_string()
                    icon_name="sales".to_string()
                    value=Signal::derive(move || format_count(stats.get().total_orders))
                />
                <StatCard
                    label="Total Units".to_string()
                    icon_name="units".to_string()
                    value=Signal::derive(move || format_units(stats.get().total_units))
                    subtitle=Signal::derive(move || Some(format!("Order book {}", order_value.get())))
                />
                <StatCard
                    label="Delivered (30 days)".to_string()
                    icon_name="truck".to_string()
                    value=Signal::derive(move || format_count(stats.get().delivered_last_30_days))
                    subtitle=Signal::derive(move || {
                        Some(format!("{} units", format_units(stats.get().delivered_units_last_30_days)))
                    })
                />
                <StatCard
                    label="In Production".to_string()
                    icon_name="fabric".to_string()
                    value=Signal::derive(move || format_count(stats.get().in_production))
                />
                <StatCard
                    label="Fabric Ordered".to_string()
                    icon_name="fabric".to_string()
                    value=Signal::derive(move || format_count(stats.get().fabric_ordered))
                />
                <StatCard
                    label="Pending Orders".to_string()
                    icon_name="calendar".to_string()
                    value=Signal::derive(move || format_count(stats.get().pending_orders))
                    subtitle=Signal::derive(move || {
                        Some(format!("{} units", format_units(stats.get().pending_units)))
                    })
                />
                <StatCard
                    label="Gold Seal Sent".to_string()
                    icon_name="check".to_string()
                    value=Signal::derive(move || format_count(stats.get().gold_seal_sent))
                />
                <StatCard
                    label="Last Delivery".to_string()
                    icon_name="calendar".to_string()
                    value=Signal::derive(move || stats.get().last_delivery_date)
                />
            </div>

            <h3 style="margin: 24px 0 12px 0; font-size: 16px;">"Units by Fiscal Year (Jul-Jun)"</h3>
            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px;">
                <StatCard
                    label="Current FY".to_string()
                    icon_name="calendar".to_string()
                    value=Signal::derive(move || format_units(stats.get().current_fy_units))
                />
                <StatCard
                    label="Prior FY".to_string()
                    icon_name="calendar".to_string()
                    value=Signal::derive(move || format_units(stats.get().prior_fy_units))
                />
                <StatCard
                    label="Two Years Prior".to_string()
                    icon_name="calendar".to_string()
                    value=Signal::derive(move || format_units(stats.get().two_years_prior_fy_units))
                />
            </div>

            <h3 style="margin: 24px 0 12px 0; font-size: 16px;">"Units by Quarter"</h3>
            <div style="display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 12px;">
                {move || quarters().into_iter().map(|(label, units)| {
                    view! {
                        <StatCard
                            label=label
                            icon_name="calendar".to_string()
                            value=Signal::derive(move || format_units(units))
                        />
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
