//! Top navigation bar: brand, tab buttons, signed-in user and sign-out.

use crate::layout::global_context::{use_app_context, ActiveTab};
use crate::shared::icons::icon;
use crate::system::auth::context::{sign_out, use_auth};
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_app_context();
    let (auth_state, set_auth_state) = use_auth();

    let logout = move |_| {
        sign_out(set_auth_state);
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"High5 Production Board"</span>
            </div>

            <nav class="top-header__tabs">
                {ActiveTab::ALL.into_iter().map(|tab| {
                    view! {
                        <button
                            class=move || {
                                if ctx.active_tab.get() == tab {
                                    "top-header__tab top-header__tab--active"
                                } else {
                                    "top-header__tab"
                                }
                            }
                            on:click=move |_| ctx.activate_tab(tab)
                        >
                            {icon(tab.icon_name())}
                            <span>{tab.title()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="top-header__actions">
                <span class="top-header__user">
                    {move || auth_state.get().email.unwrap_or_default()}
                </span>
                <button
                    class="top-header__icon-btn"
                    on:click=logout
                    title="Sign out"
                >
                    {icon("logout")}
                </button>
            </div>
        </div>
    }
}
