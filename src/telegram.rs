//! Viewer identity from the Telegram Mini App environment, with a
//! query-string fallback for local debugging outside Telegram.

use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelegramUser {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

pub fn current_telegram_user() -> Option<TelegramUser> {
    web_app_user().or_else(query_string_user)
}

fn get_path(root: &JsValue, path: &[&str]) -> Option<JsValue> {
    let mut value = root.clone();
    for key in path {
        value = Reflect::get(&value, &JsValue::from_str(key)).ok()?;
        if value.is_undefined() || value.is_null() {
            return None;
        }
    }
    Some(value)
}

fn string_field(object: &JsValue, key: &str) -> Option<String> {
    get_path(object, &[key])
        .and_then(|value| value.as_string())
        .filter(|value| !value.is_empty())
}

fn web_app_user() -> Option<TelegramUser> {
    let window = web_sys::window()?;
    let web_app = get_path(window.as_ref(), &["Telegram", "WebApp"])?;

    // Telegram wants ready() called before initDataUnsafe is read.
    if let Some(ready) = get_path(&web_app, &["ready"]) {
        if let Ok(ready) = ready.dyn_into::<Function>() {
            let _ = ready.call0(&web_app);
        }
    }

    let user = get_path(&web_app, &["initDataUnsafe", "user"])?;
    let numeric_id = get_path(&user, &["id"])
        .and_then(|value| value.as_f64())
        .map(|id| format!("{id:.0}"));
    let username = string_field(&user, "username").or(numeric_id)?;
    Some(TelegramUser {
        username,
        first_name: string_field(&user, "first_name").unwrap_or_default(),
        last_name: string_field(&user, "last_name").unwrap_or_default(),
    })
}

fn query_string_user() -> Option<TelegramUser> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    let username = params
        .get("tg_username")
        .or_else(|| params.get("tg_id"))
        .filter(|value| !value.is_empty())?;
    Some(TelegramUser {
        username,
        first_name: params.get("tg_first_name").unwrap_or_default(),
        last_name: params.get("tg_last_name").unwrap_or_default(),
    })
}
