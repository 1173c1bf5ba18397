use showroom_core::{MemoryStorage, RecordStorage};
use wasm_bindgen::JsValue;

pub(crate) fn js_err(error: JsValue) -> String {
    if let Some(value) = error.as_string() {
        return value;
    }
    if let Ok(json) = js_sys::JSON::stringify(&error) {
        if let Some(value) = json.as_string() {
            return value;
        }
    }
    format!("{error:?}")
}

/// Browser `localStorage`, or process memory when the browser refuses it (private
/// browsing, disabled storage). The memory fallback lasts until the page unloads.
pub(crate) enum PageStorage {
    Local(web_sys::Storage),
    Memory(MemoryStorage),
}

impl PageStorage {
    pub(crate) fn open() -> Self {
        let local = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        match local {
            Some(storage) => PageStorage::Local(storage),
            None => {
                gloo::console::warn!("storage: localStorage unavailable, using memory");
                PageStorage::Memory(MemoryStorage::new())
            }
        }
    }
}

impl RecordStorage for PageStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        match self {
            PageStorage::Local(storage) => storage.get_item(key).map_err(js_err),
            PageStorage::Memory(storage) => storage.get_item(key),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        match self {
            PageStorage::Local(storage) => storage.set_item(key, value).map_err(js_err),
            PageStorage::Memory(storage) => storage.set_item(key, value),
        }
    }
}
