//! Persisted sign-in session: the current user kept as an opaque JSON blob
//! in localStorage under a fixed key. Absent or inaccessible storage is
//! treated as "no session".

use crate::models::User;

const SESSION_KEY: &str = "currentUser";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn load_current_user() -> Option<User> {
    let raw = local_storage()?.get_item(SESSION_KEY).ok()??;
    serde_json::from_str(&raw).ok()
}

pub fn save_current_user(user: &User) {
    let Some(storage) = local_storage() else {
        return;
    };
    if let Ok(raw) = serde_json::to_string(user) {
        let _ = storage.set_item(SESSION_KEY, &raw);
    }
}

pub fn clear_current_user() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(SESSION_KEY);
    }
}
