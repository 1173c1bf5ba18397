#![cfg(target_arch = "wasm32")]

use showroom_core::{ContactRecord, RecordStorage};
use wasm_bindgen::JsValue;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

struct BrowserStorage(web_sys::Storage);

impl RecordStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, String> {
        self.0.get_item(key).map_err(|err| format!("{err:?}"))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), String> {
        self.0.set_item(key, value).map_err(|err| format!("{err:?}"))
    }
}

fn local_storage() -> web_sys::Storage {
    web_sys::window()
        .expect("window")
        .local_storage()
        .expect("storage access")
        .expect("localStorage")
}

#[wasm_bindgen_test]
fn record_is_stored_as_flat_json_object() {
    let storage = BrowserStorage(local_storage());
    let record: ContactRecord = [("name", "Alice"), ("phone", "555-0100")].into_iter().collect();
    storage
        .set_item("showroom.test.contactInfo", &record.to_json().expect("json"))
        .expect("set");

    let raw = local_storage()
        .get_item("showroom.test.contactInfo")
        .expect("get")
        .expect("stored");
    let parsed = js_sys::JSON::parse(&raw).expect("valid json");
    let name = js_sys::Reflect::get(&parsed, &JsValue::from_str("name")).expect("name");
    assert_eq!(name.as_string().as_deref(), Some("Alice"));

    let reread = ContactRecord::from_json(
        &storage
            .get_item("showroom.test.contactInfo")
            .expect("get")
            .expect("stored"),
    )
    .expect("record");
    assert_eq!(reread, record);
    let _ = local_storage().remove_item("showroom.test.contactInfo");
}

#[wasm_bindgen_test]
fn foreign_keys_round_trip() {
    let raw = r#"{"email":"studio@example.com","address":"12 Oak Lane"}"#;
    local_storage()
        .set_item("showroom.test.foreign", raw)
        .expect("set");
    let storage = BrowserStorage(local_storage());

    let stored = storage.get_item("showroom.test.foreign").expect("get").expect("stored");
    let record = ContactRecord::from_json(&stored).expect("record");

    assert_eq!(record.get("address"), Some("12 Oak Lane"));
    let _ = local_storage().remove_item("showroom.test.foreign");
}
