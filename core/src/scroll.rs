use crate::page::PageDom;

pub const NAVBAR_SELECTOR: &str = ".navbar";
pub const NAVBAR_SHADOW_THRESHOLD_PX: f64 = 100.0;
pub const NAVBAR_RAISED_SHADOW: &str = "0 4px 20px rgba(0, 0, 0, 0.15)";
pub const NAVBAR_RESTING_SHADOW: &str = "0 2px 10px rgba(0, 0, 0, 0.1)";

pub const REVEAL_SELECTOR: &str = ".gallery-item, .furniture-card, .stat, .contact-item";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

#[derive(Clone, Debug, PartialEq)]
pub struct NavbarConfig {
    pub selector: String,
    pub threshold_px: f64,
    pub raised_shadow: String,
    pub resting_shadow: String,
}

impl Default for NavbarConfig {
    fn default() -> Self {
        Self {
            selector: NAVBAR_SELECTOR.to_string(),
            threshold_px: NAVBAR_SHADOW_THRESHOLD_PX,
            raised_shadow: NAVBAR_RAISED_SHADOW.to_string(),
            resting_shadow: NAVBAR_RESTING_SHADOW.to_string(),
        }
    }
}

impl NavbarConfig {
    pub fn shadow_for(&self, offset: f64) -> &str {
        if offset > self.threshold_px {
            &self.raised_shadow
        } else {
            &self.resting_shadow
        }
    }
}

#[derive(Debug, Default)]
pub struct ScrollTracker {
    last_offset: f64,
}

impl ScrollTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_offset(&self) -> f64 {
        self.last_offset
    }

    /// Applies the navbar shadow for `offset`. Returns false when there is no navbar.
    pub fn on_scroll<D: PageDom>(&mut self, dom: &D, config: &NavbarConfig, offset: f64) -> bool {
        let applied = match dom.query(&config.selector) {
            Some(navbar) => {
                dom.set_style(&navbar, "box-shadow", config.shadow_for(offset));
                true
            }
            None => false,
        };
        self.last_offset = offset;
        applied
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RevealConfig {
    pub selector: String,
    pub threshold: f64,
    pub root_margin: String,
    pub hidden_opacity: String,
    pub hidden_transform: String,
    pub transition: String,
    pub shown_opacity: String,
    pub shown_transform: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            selector: REVEAL_SELECTOR.to_string(),
            threshold: REVEAL_THRESHOLD,
            root_margin: REVEAL_ROOT_MARGIN.to_string(),
            hidden_opacity: "0".to_string(),
            hidden_transform: "translateY(30px)".to_string(),
            transition: "opacity 0.6s ease, transform 0.6s ease".to_string(),
            shown_opacity: "1".to_string(),
            shown_transform: "translateY(0)".to_string(),
        }
    }
}

/// Elements waiting for their one-time reveal.
pub struct RevealTracker<N> {
    pending: Vec<N>,
}

impl<N: Clone + PartialEq> RevealTracker<N> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    /// Hides every reveal target and starts tracking it. Returns the tracked nodes.
    pub fn prepare<D>(&mut self, dom: &D, config: &RevealConfig) -> Vec<N>
    where
        D: PageDom<Node = N>,
    {
        let targets = dom.query_all(&config.selector);
        for node in &targets {
            dom.set_style(node, "opacity", &config.hidden_opacity);
            dom.set_style(node, "transform", &config.hidden_transform);
            dom.set_style(node, "transition", &config.transition);
            if !self.pending.contains(node) {
                self.pending.push(node.clone());
            }
        }
        targets
    }

    /// Reveals `node` if it is intersecting and still pending. Returns true exactly
    /// once per tracked node; the caller should stop observing it then.
    pub fn on_intersection<D>(
        &mut self,
        dom: &D,
        config: &RevealConfig,
        node: &N,
        is_intersecting: bool,
    ) -> bool
    where
        D: PageDom<Node = N>,
    {
        if !is_intersecting {
            return false;
        }
        let Some(index) = self.pending.iter().position(|pending| pending == node) else {
            return false;
        };
        self.pending.swap_remove(index);
        dom.set_style(node, "opacity", &config.shown_opacity);
        dom.set_style(node, "transform", &config.shown_transform);
        true
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }
}

impl<N: Clone + PartialEq> Default for RevealTracker<N> {
    fn default() -> Self {
        Self::new()
    }
}
