use gloo::events::{EventListener, EventListenerOptions};
use showroom_core::{handle_submit, ContactForm, FormConfig};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};

struct WebContactForm {
    document: Document,
    form: HtmlFormElement,
}

impl ContactForm for WebContactForm {
    fn field_value(&self, field_id: &str) -> String {
        let Some(element) = self.document.get_element_by_id(field_id) else {
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            return input.value();
        }
        if let Some(textarea) = element.dyn_ref::<HtmlTextAreaElement>() {
            return textarea.value();
        }
        String::new()
    }

    fn acknowledge(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn reset(&self) {
        self.form.reset();
    }
}

pub(crate) fn wire_contact_form(document: &Document, config: &FormConfig) -> Option<EventListener> {
    let form = document
        .get_element_by_id(&config.form_id)?
        .dyn_into::<HtmlFormElement>()
        .ok()?;
    let contact_form = WebContactForm {
        document: document.clone(),
        form: form.clone(),
    };
    let config = config.clone();
    Some(EventListener::new_with_options(
        &form,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            handle_submit(&contact_form, &config);
            gloo::console::log!("contact form: acknowledged");
        },
    ))
}
