use std::rc::Rc;

use gloo::events::EventListener;
use js_sys::{Date, Math};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use showroom_core::{randomize_images, SiteConfig};

use crate::app_runtime;
use crate::boot_runtime::{self, BootState};
use crate::contact_runtime;
use crate::dom::WebPage;
use crate::effects;
use crate::form;

/// Runs the page setup once the document has been parsed.
pub(crate) fn start() {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        gloo::console::error!("boot: no document");
        return;
    };
    if document.ready_state() == "loading" {
        let listener = EventListener::once(&document, "DOMContentLoaded", |_| run());
        boot_runtime::keep_listeners([listener]);
    } else {
        run();
    }
}

fn run() {
    if boot_runtime::boot_state() != BootState::ColdStart {
        return;
    }
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (config, size_errors) = SiteConfig::from_build_env();
    for err in size_errors {
        gloo::console::warn!("config: ignoring image size override", err.to_string());
    }
    app_runtime::set_site_config(config);
    let config = app_runtime::site_config();
    let page = Rc::new(WebPage::new(document));

    boot_runtime::set_boot_state(BootState::Randomizing);
    let mut rng = SmallRng::seed_from_u64(random_seed());
    let report = randomize_images(&*page, &config, &mut rng, Date::now() as u64);
    gloo::console::log!("images: assigned", report.total());

    boot_runtime::set_boot_state(BootState::Restoring);
    contact_runtime::install(page.clone(), &config);
    contact_runtime::restore();

    boot_runtime::set_boot_state(BootState::Wiring);
    boot_runtime::keep_listeners(contact_runtime::wire_editable_fields(&config));
    boot_runtime::keep_listeners(form::wire_contact_form(page.document(), &config.form));
    boot_runtime::keep_listeners(effects::wire_anchors(page.clone()));
    boot_runtime::keep_listeners(effects::wire_navbar(page.clone(), config.navbar.clone()));
    if let Err(err) = effects::wire_reveal(page, config.reveal.clone()) {
        gloo::console::warn!("reveal: observer unavailable", err);
    }

    boot_runtime::set_boot_state(BootState::Ready);
}

fn random_seed() -> u64 {
    let entropy = (Math::random() * u32::MAX as f64) as u64;
    (entropy << 32) ^ Date::now() as u64
}
