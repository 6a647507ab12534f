use leptos::prelude::*;

use super::storage;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub email: Option<String>,
}

/// Auth context provider. Restores a saved session from localStorage
/// on mount.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |_| {
        if let Some(access_token) = storage::get_access_token() {
            set_auth_state.set(AuthState {
                access_token: Some(access_token),
                email: storage::get_user_email(),
            });
        }
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store a fresh session and flip the app into the signed-in state.
pub fn complete_sign_in(set_auth_state: WriteSignal<AuthState>, token: String, email: String) {
    storage::save_session(&token, &email);
    set_auth_state.set(AuthState {
        access_token: Some(token),
        email: Some(email),
    });
}

pub fn sign_out(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
