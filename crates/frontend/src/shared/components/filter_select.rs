use leptos::prelude::*;

/// Dropdown over the distinct values of one field. The empty option
/// means "no constraint".
#[component]
pub fn FilterSelect(
    /// Label shown next to the select
    label: &'static str,
    /// Distinct values for the dropdown
    #[prop(into)]
    options: Signal<Vec<String>>,
    /// Currently selected value, empty for all
    #[prop(into)]
    value: Signal<String>,
    /// Callback on selection change
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <label style="display: inline-flex; align-items: center; gap: 6px; font-size: 14px;">
            <span style="color: #555;">{label}</span>
            <select
                style="padding: 5px 8px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; min-width: 140px;"
                on:change=move |ev| on_change.run(event_target_value(&ev))
                prop:value=move || value.get()
            >
                <option value="">"All"</option>
                {move || options.get().into_iter().map(|opt| {
                    let selected = value.get() == opt;
                    view! {
                        <option value={opt.clone()} selected=selected>{opt.clone()}</option>
                    }
                }).collect_view()}
            </select>
        </label>
    }
}
