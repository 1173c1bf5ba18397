#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};

use showroom_core::{ContactForm, PageDom, SaveNotifier};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

struct FakeNode {
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    attrs: HashMap<String, String>,
    text: String,
    styles: BTreeMap<String, String>,
    parent: Option<usize>,
}

/// In-memory document. Nodes are kept in insertion order, which doubles as document
/// order as long as parents are added before their children.
#[derive(Default)]
pub struct FakePage {
    nodes: RefCell<Vec<FakeNode>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an element described as `tag.class.class#id` (every part optional).
    pub fn add(&self, parent: Option<NodeId>, spec: &str) -> NodeId {
        let simple = Simple::parse(spec);
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(FakeNode {
            tag: simple.tag.unwrap_or_else(|| "div".to_string()),
            id: simple.id,
            classes: simple.classes,
            attrs: HashMap::new(),
            text: String::new(),
            styles: BTreeMap::new(),
            parent: parent.map(|node| node.0),
        });
        NodeId(nodes.len() - 1)
    }

    pub fn add_editable(&self, key: &str, text: &str) -> NodeId {
        let node = self.add(None, "p.editable");
        self.set_attr(node, "data-key", key);
        self.set_text(&node, text);
        node
    }

    pub fn set_attr(&self, node: NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0]
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.nodes.borrow()[node.0].styles.get(property).cloned()
    }

    pub fn text_of(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].text.clone()
    }

    fn matches_chain(&self, index: usize, chain: &[Simple]) -> bool {
        let nodes = self.nodes.borrow();
        let Some((last, rest)) = chain.split_last() else {
            return false;
        };
        if !last.matches(&nodes[index]) {
            return false;
        }
        let mut remaining = rest;
        let mut cursor = nodes[index].parent;
        while let Some((want, earlier)) = remaining.split_last() {
            let Some(current) = cursor else {
                return false;
            };
            if want.matches(&nodes[current]) {
                remaining = earlier;
            }
            cursor = nodes[current].parent;
        }
        true
    }

    fn matches_selector(&self, index: usize, selector: &str) -> bool {
        selector
            .split(',')
            .map(parse_chain)
            .any(|chain| self.matches_chain(index, &chain))
    }

    fn is_descendant(&self, index: usize, ancestor: usize) -> bool {
        let nodes = self.nodes.borrow();
        let mut cursor = nodes[index].parent;
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = nodes[current].parent;
        }
        false
    }
}

impl PageDom for FakePage {
    type Node = NodeId;

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let len = self.nodes.borrow().len();
        (0..len)
            .filter(|index| self.matches_selector(*index, selector))
            .map(NodeId)
            .collect()
    }

    fn query_within(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let len = self.nodes.borrow().len();
        (0..len)
            .filter(|index| self.is_descendant(*index, node.0))
            .find(|index| self.matches_selector(*index, selector))
            .map(NodeId)
    }

    fn closest(&self, node: &NodeId, selector: &str) -> Option<NodeId> {
        let mut cursor = Some(node.0);
        while let Some(current) = cursor {
            if self.matches_selector(current, selector) {
                return Some(NodeId(current));
            }
            cursor = self.nodes.borrow()[current].parent;
        }
        None
    }

    fn text(&self, node: &NodeId) -> String {
        self.text_of(*node)
    }

    fn set_text(&self, node: &NodeId, text: &str) {
        self.nodes.borrow_mut()[node.0].text = text.to_string();
    }

    fn attribute(&self, node: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[node.0].attrs.get(name).cloned()
    }

    fn set_style(&self, node: &NodeId, property: &str, value: &str) {
        self.nodes.borrow_mut()[node.0]
            .styles
            .insert(property.to_string(), value.to_string());
    }

    fn remove_style(&self, node: &NodeId, property: &str) {
        self.nodes.borrow_mut()[node.0].styles.remove(property);
    }
}

#[derive(Default)]
struct Simple {
    tag: Option<String>,
    id: Option<String>,
    classes: Vec<String>,
}

impl Simple {
    fn parse(raw: &str) -> Self {
        let mut simple = Simple::default();
        let mut current = String::new();
        let mut kind = 't';
        for ch in raw.trim().chars().chain(std::iter::once('\0')) {
            if ch == '.' || ch == '#' || ch == '\0' {
                if !current.is_empty() {
                    match kind {
                        '.' => simple.classes.push(current.clone()),
                        '#' => simple.id = Some(current.clone()),
                        _ => simple.tag = Some(current.clone()),
                    }
                }
                current.clear();
                kind = ch;
            } else {
                current.push(ch);
            }
        }
        simple
    }

    fn matches(&self, node: &FakeNode) -> bool {
        if let Some(tag) = &self.tag {
            if !tag.eq_ignore_ascii_case(&node.tag) {
                return false;
            }
        }
        if let Some(id) = &self.id {
            if node.id.as_deref() != Some(id.as_str()) {
                return false;
            }
        }
        self.classes
            .iter()
            .all(|class| node.classes.iter().any(|have| have == class))
    }
}

fn parse_chain(raw: &str) -> Vec<Simple> {
    raw.split_whitespace().map(Simple::parse).collect()
}

#[derive(Default)]
pub struct CountingNotifier {
    count: Cell<usize>,
}

impl CountingNotifier {
    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl SaveNotifier for CountingNotifier {
    fn notify_saved(&self) {
        self.count.set(self.count.get() + 1);
    }
}

#[derive(Default)]
pub struct FakeForm {
    values: RefCell<HashMap<String, String>>,
    alerts: RefCell<Vec<String>>,
}

impl FakeForm {
    pub fn fill(&self, field_id: &str, value: &str) {
        self.values
            .borrow_mut()
            .insert(field_id.to_string(), value.to_string());
    }

    pub fn value(&self, field_id: &str) -> String {
        self.field_value(field_id)
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }
}

impl ContactForm for FakeForm {
    fn field_value(&self, field_id: &str) -> String {
        self.values.borrow().get(field_id).cloned().unwrap_or_default()
    }

    fn acknowledge(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn reset(&self) {
        self.values.borrow_mut().clear();
    }
}

/// Extracts the photo id back out of a generated image URL.
pub fn photo_id_from_url(url: &str) -> Option<&str> {
    let rest = url.split_once("/photo-")?.1;
    let id = rest.split('?').next()?;
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}
