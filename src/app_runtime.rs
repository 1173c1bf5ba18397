use std::cell::RefCell;

use showroom_core::SiteConfig;

thread_local! {
    static SITE_CONFIG: RefCell<Option<SiteConfig>> = RefCell::new(None);
}

pub(crate) fn set_site_config(config: SiteConfig) {
    SITE_CONFIG.with(|slot| {
        *slot.borrow_mut() = Some(config);
    });
}

pub(crate) fn site_config() -> SiteConfig {
    SITE_CONFIG
        .with(|slot| slot.borrow().clone())
        .unwrap_or_else(|| SiteConfig::from_build_env().0)
}
