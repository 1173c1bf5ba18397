pub const INDICATOR_CLASS: &str = "save-indicator";
pub const INDICATOR_VISIBLE_CLASS: &str = "show";
pub const INDICATOR_TEXT: &str = "✓ Contact information saved!";
pub const INDICATOR_HIDE_DELAY_MS: u32 = 2000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndicatorConfig {
    pub class_name: String,
    pub visible_class: String,
    pub text: String,
    pub hide_delay_ms: u32,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            class_name: INDICATOR_CLASS.to_string(),
            visible_class: INDICATOR_VISIBLE_CLASS.to_string(),
            text: INDICATOR_TEXT.to_string(),
            hide_delay_ms: INDICATOR_HIDE_DELAY_MS,
        }
    }
}

/// Anything that can acknowledge a successful save to the user.
pub trait SaveNotifier {
    fn notify_saved(&self);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HideTicket(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndicatorTrigger {
    /// The indicator element does not exist yet and must be created.
    pub create: bool,
    pub ticket: HideTicket,
    pub hide_after_ms: u32,
}

/// Visibility bookkeeping for the singleton save indicator.
///
/// Every trigger issues a new ticket; only the newest ticket may hide the indicator,
/// so a hide scheduled by an earlier save cannot cut a later one short.
#[derive(Debug, Default)]
pub struct IndicatorState {
    created: bool,
    visible: bool,
    generation: u64,
}

impl IndicatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger(&mut self, config: &IndicatorConfig) -> IndicatorTrigger {
        let create = !self.created;
        self.created = true;
        self.visible = true;
        self.generation = self.generation.wrapping_add(1);
        IndicatorTrigger {
            create,
            ticket: HideTicket(self.generation),
            hide_after_ms: config.hide_delay_ms,
        }
    }

    /// Returns true when the indicator should actually be hidden now.
    pub fn expire(&mut self, ticket: HideTicket) -> bool {
        if ticket.0 != self.generation || !self.visible {
            return false;
        }
        self.visible = false;
        true
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
