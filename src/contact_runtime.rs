use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use showroom_core::editable::{clear_highlight, commits_on_key, highlight};
use showroom_core::{ContactRecord, ContactStore, PageDom, RestoreOutcome, SiteConfig};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, KeyboardEvent};

use crate::dom::WebPage;
use crate::indicator::WebSaveIndicator;
use crate::storage::PageStorage;

struct ContactRuntime {
    page: Rc<WebPage>,
    store: ContactStore<PageStorage>,
    indicator: WebSaveIndicator,
}

thread_local! {
    static RUNTIME: RefCell<Option<Rc<ContactRuntime>>> = RefCell::new(None);
}

fn runtime() -> Option<Rc<ContactRuntime>> {
    RUNTIME.with(|slot| slot.borrow().clone())
}

pub(crate) fn install(page: Rc<WebPage>, config: &SiteConfig) {
    let runtime = ContactRuntime {
        page,
        store: ContactStore::new(PageStorage::open(), config),
        indicator: WebSaveIndicator::new(config.indicator.clone()),
    };
    RUNTIME.with(|slot| {
        *slot.borrow_mut() = Some(Rc::new(runtime));
    });
}

pub(crate) fn restore() {
    let Some(runtime) = runtime() else {
        return;
    };
    match runtime.store.restore(&*runtime.page) {
        RestoreOutcome::Empty => gloo::console::log!("contact info: nothing saved"),
        RestoreOutcome::Malformed(err) => {
            gloo::console::error!("contact info: error loading saved data", err);
        }
        RestoreOutcome::Applied { applied, ignored } => {
            gloo::console::log!("contact info: restored", applied, "ignored", ignored);
        }
    }
}

pub(crate) fn persist() {
    let Some(runtime) = runtime() else {
        return;
    };
    if let Err(err) = runtime.store.persist(&*runtime.page, &runtime.indicator) {
        gloo::console::warn!("contact info: save failed", err.to_string());
    }
}

/// Focus highlight, save on blur, and Enter-to-commit for every editable field.
pub(crate) fn wire_editable_fields(config: &SiteConfig) -> Vec<EventListener> {
    let Some(runtime) = runtime() else {
        return Vec::new();
    };
    let page = runtime.page.clone();
    let mut listeners = Vec::new();
    for field in page.query_all(&config.editable_selector) {
        let focus_page = page.clone();
        let focus_field = field.clone();
        listeners.push(EventListener::new(&field, "focus", move |_| {
            highlight(&*focus_page, &focus_field);
        }));

        let blur_page = page.clone();
        let blur_field = field.clone();
        listeners.push(EventListener::new(&field, "blur", move |_| {
            clear_highlight(&*blur_page, &blur_field);
            persist();
        }));

        let key_field = field.clone();
        listeners.push(EventListener::new_with_options(
            &field,
            "keydown",
            EventListenerOptions::enable_prevent_default(),
            move |event: &Event| {
                let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                    return;
                };
                if !commits_on_key(&event.key(), event.shift_key()) {
                    return;
                }
                event.prevent_default();
                if let Some(element) = key_field.dyn_ref::<HtmlElement>() {
                    let _ = element.blur();
                }
            },
        ));
    }
    listeners
}

/// Current editable-field values as a plain object.
#[wasm_bindgen(js_name = exportContactInfo)]
pub fn export_contact_info() -> Result<JsValue, JsValue> {
    let runtime = runtime().ok_or_else(|| JsValue::from_str("page not booted"))?;
    let record = runtime.store.export(&*runtime.page);
    let raw = record
        .to_json()
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    js_sys::JSON::parse(&raw)
}

/// Applies a `{ key: value }` object to the editable fields, then saves.
#[wasm_bindgen(js_name = importContactInfo)]
pub fn import_contact_info(data: JsValue) -> Result<(), JsValue> {
    let runtime = runtime().ok_or_else(|| JsValue::from_str("page not booted"))?;
    let raw: String = js_sys::JSON::stringify(&data)?.into();
    let record =
        ContactRecord::from_json(&raw).map_err(|err| JsValue::from_str(&err.to_string()))?;
    runtime
        .store
        .import(&*runtime.page, &record, &runtime.indicator)
        .map_err(|err| JsValue::from_str(&err.to_string()))?;
    Ok(())
}
