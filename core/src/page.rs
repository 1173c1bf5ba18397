/// The slice of a document the page behaviors need.
///
/// The browser front-end implements this over `web_sys::Document`; tests implement it
/// over an in-memory tree. Selectors are CSS selectors and are only ever the simple
/// forms used by the site markup (`.class`, `#id`, `tag`, descendant chains).
pub trait PageDom {
    type Node: Clone + PartialEq;

    /// All matches in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Node>;

    fn query(&self, selector: &str) -> Option<Self::Node> {
        self.query_all(selector).into_iter().next()
    }

    /// First descendant of `node` matching `selector`.
    fn query_within(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    /// `node` itself or its nearest ancestor matching `selector`.
    fn closest(&self, node: &Self::Node, selector: &str) -> Option<Self::Node>;

    fn text(&self, node: &Self::Node) -> String;

    fn set_text(&self, node: &Self::Node, text: &str);

    fn attribute(&self, node: &Self::Node, name: &str) -> Option<String>;

    fn set_style(&self, node: &Self::Node, property: &str, value: &str);

    fn remove_style(&self, node: &Self::Node, property: &str);
}

pub fn background_image_value(url: &str) -> String {
    format!("url('{url}')")
}
