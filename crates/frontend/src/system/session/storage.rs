use contracts::system::auth::UserInfo;
use web_sys::window;

const USER_KEY: &str = "user";

fn get_local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

/// Save the logged-in user to localStorage
pub fn save_user(user: &UserInfo) {
    if let (Some(storage), Ok(raw)) = (get_local_storage(), serde_json::to_string(user)) {
        let _ = storage.set_item(USER_KEY, &raw);
    }
}

/// Get the logged-in user from localStorage, if any
pub fn get_user() -> Option<UserInfo> {
    let raw = get_local_storage()?.get_item(USER_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

/// Clear the whole localStorage on logout (session and cached inventory)
pub fn clear_session() {
    if let Some(storage) = get_local_storage() {
        let _ = storage.clear();
    }
}
