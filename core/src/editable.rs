use crate::page::PageDom;

pub const FOCUS_BORDER_COLOR: &str = "var(--primary-wood)";
pub const FOCUS_BACKGROUND: &str = "rgba(139, 111, 71, 0.05)";

/// Enter commits a single-line edit; Shift+Enter keeps the newline.
pub fn commits_on_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

pub fn highlight<D: PageDom>(dom: &D, field: &D::Node) {
    dom.set_style(field, "border-color", FOCUS_BORDER_COLOR);
    dom.set_style(field, "background", FOCUS_BACKGROUND);
}

pub fn clear_highlight<D: PageDom>(dom: &D, field: &D::Node) {
    dom.remove_style(field, "border-color");
    dom.remove_style(field, "background");
}

/// Selector an in-page link scrolls to, or `None` when the href is not a usable
/// fragment (`#` alone, or not a fragment at all).
pub fn anchor_target(href: &str) -> Option<&str> {
    let href = href.trim();
    let fragment = href.strip_prefix('#')?;
    if fragment.trim().is_empty() {
        return None;
    }
    Some(href)
}
