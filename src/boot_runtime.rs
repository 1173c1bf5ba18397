use std::cell::RefCell;

use gloo::events::EventListener;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BootState {
    ColdStart,
    Randomizing,
    Restoring,
    Wiring,
    Ready,
}

impl BootState {
    fn label(self) -> &'static str {
        match self {
            BootState::ColdStart => "cold start",
            BootState::Randomizing => "randomizing images",
            BootState::Restoring => "restoring contact info",
            BootState::Wiring => "wiring listeners",
            BootState::Ready => "ready",
        }
    }
}

thread_local! {
    static BOOT_STATE: RefCell<BootState> = RefCell::new(BootState::ColdStart);
    static LISTENERS: RefCell<Vec<EventListener>> = RefCell::new(Vec::new());
}

pub(crate) fn boot_state() -> BootState {
    BOOT_STATE.with(|state| *state.borrow())
}

pub(crate) fn set_boot_state(next: BootState) {
    let changed = BOOT_STATE.with(|state| {
        let mut state = state.borrow_mut();
        if *state == next {
            return false;
        }
        *state = next;
        true
    });
    if changed {
        gloo::console::log!("boot:", next.label());
    }
}

/// Keeps page-lifetime listeners attached; gloo detaches a listener when it drops.
pub(crate) fn keep_listeners<I>(listeners: I)
where
    I: IntoIterator<Item = EventListener>,
{
    LISTENERS.with(|slot| slot.borrow_mut().extend(listeners));
}
