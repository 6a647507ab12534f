use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::system::auth::{allow_list, api, context::complete_sign_in, context::use_auth};

#[component]
pub fn LoginPage() -> impl IntoView {
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email_val = email.get().trim().to_lowercase();
        let password_val = password.get();

        set_error_message.set(None);

        // Allow-list check happens before the provider is contacted.
        if !allow_list::is_allowed(&email_val) {
            set_error_message.set(Some(
                "This e-mail address is not authorised for the production board".to_string(),
            ));
            return;
        }

        set_is_loading.set(true);
        spawn_local(async move {
            match api::sign_in(email_val.clone(), password_val).await {
                Ok(response) => {
                    complete_sign_in(set_auth_state, response.access_token, email_val);
                    set_is_loading.set(false);
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Sign-in failed: {}", e)));
                    set_is_loading.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"High5 Production Board"</h1>
                <h2>"Sign in"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="email">"E-mail"</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="you@high5clothing.co.uk"
                            value=move || email.get()
                            on:input=move |ev| set_email.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="btn-primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
