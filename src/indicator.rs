use std::cell::RefCell;

use gloo::timers::callback::Timeout;
use showroom_core::indicator::HideTicket;
use showroom_core::{IndicatorConfig, IndicatorState, SaveNotifier};
use web_sys::Element;

struct IndicatorSlot {
    element: Option<Element>,
    state: IndicatorState,
    hide_timer: Option<Timeout>,
}

thread_local! {
    static INDICATOR: RefCell<IndicatorSlot> = RefCell::new(IndicatorSlot {
        element: None,
        state: IndicatorState::new(),
        hide_timer: None,
    });
}

/// The "saved" toast. One element per page, created on first save.
pub(crate) struct WebSaveIndicator {
    config: IndicatorConfig,
}

impl WebSaveIndicator {
    pub(crate) fn new(config: IndicatorConfig) -> Self {
        Self { config }
    }
}

impl SaveNotifier for WebSaveIndicator {
    fn notify_saved(&self) {
        show(&self.config);
    }
}

fn show(config: &IndicatorConfig) {
    INDICATOR.with(|slot| {
        let mut slot = slot.borrow_mut();
        let trigger = slot.state.trigger(config);
        if trigger.create || slot.element.is_none() {
            slot.element = find_or_create(config);
        }
        let Some(element) = slot.element.clone() else {
            gloo::console::warn!("save indicator: no document body");
            return;
        };
        let _ = element.class_list().add_1(&config.visible_class);
        let visible_class = config.visible_class.clone();
        let ticket = trigger.ticket;
        // replacing the handle cancels the previous hide
        slot.hide_timer = Some(Timeout::new(trigger.hide_after_ms, move || {
            hide(ticket, &visible_class);
        }));
    });
}

fn hide(ticket: HideTicket, visible_class: &str) {
    INDICATOR.with(|slot| {
        let mut slot = slot.borrow_mut();
        if !slot.state.expire(ticket) {
            return;
        }
        if let Some(element) = slot.element.as_ref() {
            let _ = element.class_list().remove_1(visible_class);
        }
    });
}

fn find_or_create(config: &IndicatorConfig) -> Option<Element> {
    let document = web_sys::window()?.document()?;
    let selector = format!(".{}", config.class_name);
    if let Ok(Some(existing)) = document.query_selector(&selector) {
        return Some(existing);
    }
    let element = document.create_element("div").ok()?;
    element.set_class_name(&config.class_name);
    element.set_text_content(Some(&config.text));
    document.body()?.append_child(&element).ok()?;
    Some(element)
}
