use super::selection::{parse_po_list, select_orders, PRINT_ORDER_CAP};
use super::sheets::{cutting_sheet_html, docket_sheet_html};
use crate::layout::global_context::use_app_context;
use leptos::prelude::*;
use web_sys::{Blob, BlobPropertyBag, Url};

/// Open a new window on an object URL holding the sheet document.
fn open_print_window(html: &str) -> Result<(), String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(html));
    let properties = BlobPropertyBag::new();
    properties.set_type("text/html");
    let blob = Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    let url = Url::create_object_url_with_blob(&blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;
    let window = web_sys::window().ok_or("No window object")?;
    window
        .open_with_url_and_target(&url, "_blank")
        .map_err(|e| format!("Failed to open print window: {:?}", e))?;
    Ok(())
}

#[component]
pub fn PrintSheetsPage() -> impl IntoView {
    let ctx = use_app_context();

    let (po_input, set_po_input) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let selected = Memo::new(move |_| {
        let requested = parse_po_list(&po_input.get());
        if requested.is_empty() {
            return Vec::new();
        }
        select_orders(&requested, &ctx.sales())
    });

    let over_cap = Memo::new(move |_| selected.get().len() > PRINT_ORDER_CAP);

    let print_docket = move |_| {
        set_error.set(None);
        let orders = selected.get_untracked();
        if orders.is_empty() {
            set_error.set(Some("No matching sales orders to print".to_string()));
            return;
        }
        if let Err(e) = open_print_window(&docket_sheet_html(&orders)) {
            set_error.set(Some(e));
        }
    };

    let print_cutting = move |_| {
        set_error.set(None);
        let orders = selected.get_untracked();
        if orders.is_empty() {
            set_error.set(Some("No matching sales orders to print".to_string()));
            return;
        }
        if let Err(e) = open_print_window(&cutting_sheet_html(&orders)) {
            set_error.set(Some(e));
        }
    };

    view! {
        <div class="page" style="padding: 16px; max-width: 720px;">
            <h1 class="page__title">"Print Sheets"</h1>
            <p style="color: #555;">
                "Enter PO numbers separated by commas, spaces or new lines."
            </p>
            <textarea
                rows="5"
                style="width: 100%; padding: 8px; border: 1px solid #ddd; border-radius: 4px; font-size: 14px; font-family: inherit;"
                placeholder="PO0001, PO0002 ..."
                prop:value=move || po_input.get()
                on:input=move |ev| set_po_input.set(event_target_value(&ev))
            ></textarea>

            <div style="margin: 8px 0; color: #555;">
                {move || format!("{} matching orders", selected.get().len())}
                {move || over_cap.get().then(|| view! {
                    <span style="color: #b36b00;">
                        {format!(" (only the first {} will print)", PRINT_ORDER_CAP)}
                    </span>
                })}
            </div>

            {move || error.get().map(|e| view! {
                <div class="alert alert--error">{e}</div>
            })}

            <div style="display: flex; gap: 8px;">
                <button class="btn btn--primary" on:click=print_docket>
                    "Print docket sheet"
                </button>
                <button class="btn btn--primary" on:click=print_cutting>
                    "Print cutting sheet"
                </button>
            </div>
        </div>
    }
}
