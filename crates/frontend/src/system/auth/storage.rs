use web_sys::window;

const ACCESS_TOKEN_KEY: &str = "h5_access_token";
const USER_EMAIL_KEY: &str = "h5_user_email";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

pub fn save_session(token: &str, email: &str) {
    if let Some(storage) = get_local_storage() {
        let _ = storage.set_item(ACCESS_TOKEN_KEY, token);
        let _ = storage.set_item(USER_EMAIL_KEY, email);
    }
}

pub fn get_access_token() -> Option<String> {
    get_local_storage()?.get_item(ACCESS_TOKEN_KEY).ok()?
}

pub fn get_user_email() -> Option<String> {
    get_local_storage()?.get_item(USER_EMAIL_KEY).ok()?
}

pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.remove_item(ACCESS_TOKEN_KEY);
        let _ = storage.remove_item(USER_EMAIL_KEY);
    }
}
