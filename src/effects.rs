use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use showroom_core::editable::anchor_target;
use showroom_core::{NavbarConfig, PageDom, RevealConfig, RevealTracker, ScrollTracker};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom::WebPage;
use crate::storage::js_err;

const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

pub(crate) fn wire_navbar(page: Rc<WebPage>, config: NavbarConfig) -> Option<EventListener> {
    let window = web_sys::window()?;
    let mut tracker = ScrollTracker::new();
    Some(EventListener::new(&window, "scroll", move |_| {
        let Some(window) = web_sys::window() else {
            return;
        };
        let offset = window.scroll_y().unwrap_or(0.0);
        tracker.on_scroll(&*page, &config, offset);
    }))
}

/// Hides the reveal targets and fades each one in the first time it scrolls into view.
pub(crate) fn wire_reveal(page: Rc<WebPage>, config: RevealConfig) -> Result<(), String> {
    let tracker = Rc::new(RefCell::new(RevealTracker::<Element>::new()));
    let callback_page = page.clone();
    let callback_tracker = tracker.clone();
    let callback_config = config.clone();
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let revealed = callback_tracker.borrow_mut().on_intersection(
                    &*callback_page,
                    &callback_config,
                    &target,
                    entry.is_intersecting(),
                );
                if revealed {
                    observer.unobserve(&target);
                }
            }
        },
    );
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    // targets stay visible if the observer cannot be created
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(js_err)?;
    callback.forget();
    let targets = tracker.borrow_mut().prepare(&*page, &config);
    for target in &targets {
        observer.observe(target);
    }
    Ok(())
}

/// Smooth scrolling for in-page `#fragment` links.
pub(crate) fn wire_anchors(page: Rc<WebPage>) -> Vec<EventListener> {
    page.query_all(ANCHOR_SELECTOR)
        .into_iter()
        .map(|anchor| {
            let page = page.clone();
            let link = anchor.clone();
            EventListener::new_with_options(
                &anchor,
                "click",
                EventListenerOptions::enable_prevent_default(),
                move |event| {
                    event.prevent_default();
                    let href = link.get_attribute("href").unwrap_or_default();
                    let Some(target) =
                        anchor_target(&href).and_then(|selector| page.query(selector))
                    else {
                        return;
                    };
                    let options = ScrollIntoViewOptions::new();
                    options.set_behavior(ScrollBehavior::Smooth);
                    options.set_block(ScrollLogicalPosition::Start);
                    target.scroll_into_view_with_scroll_into_view_options(&options);
                },
            )
        })
        .collect()
}
