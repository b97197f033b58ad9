//! In-memory page and storage for driving the controller without a browser.
//!
//! `FakeHost` models just enough of a document for the behavior layer: a flat
//! arena of elements with a class set, text, a parent link, and a focus
//! pointer. Selectors are deliberately simple: `.class`, `#id`, or a bare tag
//! name.

#[cfg(test)]
#[path = "fake_test.rs"]
mod fake_test;

use std::cell::{Cell, RefCell};
use std::collections::{BTreeSet, HashMap};

use crate::host::{Host, PreferenceStore};

/// Opaque handle into a [`FakeHost`] arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Clone, Debug, Default)]
struct Node {
    tag: String,
    id: Option<String>,
    classes: BTreeSet<String>,
    text: String,
    parent: Option<NodeId>,
}

impl Node {
    fn matches(&self, selector: &str) -> bool {
        if let Some(class) = selector.strip_prefix('.') {
            self.classes.contains(class)
        } else if let Some(id) = selector.strip_prefix('#') {
            self.id.as_deref() == Some(id)
        } else {
            self.tag.eq_ignore_ascii_case(selector)
        }
    }
}

/// A fake document. Index 0 is `<html>`, index 1 is `<body>`.
#[derive(Debug)]
pub struct FakeHost {
    nodes: RefCell<Vec<Node>>,
    focused: Cell<Option<NodeId>>,
    viewport_width: Cell<Option<f64>>,
    dark_scheme: Cell<bool>,
}

const ROOT: NodeId = NodeId(0);
const BODY: NodeId = NodeId(1);

impl Default for FakeHost {
    fn default() -> Self {
        Self::new()
    }
}

impl FakeHost {
    /// An empty `<html><body></body></html>` document.
    #[must_use]
    pub fn new() -> Self {
        let root = Node { tag: "html".to_owned(), ..Node::default() };
        let body = Node { tag: "body".to_owned(), parent: Some(ROOT), ..Node::default() };
        Self {
            nodes: RefCell::new(vec![root, body]),
            focused: Cell::new(None),
            viewport_width: Cell::new(None),
            dark_scheme: Cell::new(false),
        }
    }

    #[must_use]
    pub fn with_viewport_width(self, width: f64) -> Self {
        self.viewport_width.set(Some(width));
        self
    }

    #[must_use]
    pub fn with_dark_scheme(self, dark: bool) -> Self {
        self.dark_scheme.set(dark);
        self
    }

    #[must_use]
    pub fn body_id(&self) -> NodeId {
        BODY
    }

    #[must_use]
    pub fn root_id(&self) -> NodeId {
        ROOT
    }

    /// Append an element under `parent` with the given whitespace-separated classes.
    pub fn append(&self, parent: NodeId, tag: &str, classes: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node {
            tag: tag.to_owned(),
            id: None,
            classes: classes.split_whitespace().map(str::to_owned).collect(),
            text: String::new(),
            parent: Some(parent),
        });
        NodeId(nodes.len() - 1)
    }

    pub fn set_id(&self, node: NodeId, id: &str) {
        if let Some(n) = self.nodes.borrow_mut().get_mut(node.0) {
            n.id = Some(id.to_owned());
        }
    }

    #[must_use]
    pub fn text(&self, node: NodeId) -> String {
        self.nodes.borrow().get(node.0).map(|n| n.text.clone()).unwrap_or_default()
    }

    #[must_use]
    pub fn focused(&self) -> Option<NodeId> {
        self.focused.get()
    }

    fn is_descendant(nodes: &[Node], node: NodeId, ancestor: NodeId) -> bool {
        let mut cursor = nodes.get(node.0).and_then(|n| n.parent);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = nodes.get(current.0).and_then(|n| n.parent);
        }
        false
    }
}

impl Host for FakeHost {
    type Element = NodeId;

    fn query(&self, selector: &str) -> Option<NodeId> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, node)| node.matches(selector))
            .map(|(index, _)| NodeId(index))
            .collect()
    }

    fn query_within(&self, scope: &NodeId, selector: &str) -> Option<NodeId> {
        let nodes = self.nodes.borrow();
        nodes
            .iter()
            .enumerate()
            .find(|(index, node)| node.matches(selector) && Self::is_descendant(&nodes, NodeId(*index), *scope))
            .map(|(index, _)| NodeId(index))
    }

    fn body(&self) -> Option<NodeId> {
        Some(BODY)
    }

    fn root(&self) -> Option<NodeId> {
        Some(ROOT)
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.nodes.borrow().get(element.0).is_some_and(|n| n.classes.contains(class))
    }

    fn set_class(&self, element: &NodeId, class: &str, present: bool) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(element.0) {
            if present {
                node.classes.insert(class.to_owned());
            } else {
                node.classes.remove(class);
            }
        }
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        if let Some(node) = self.nodes.borrow_mut().get_mut(element.0) {
            text.clone_into(&mut node.text);
        }
    }

    fn focus(&self, element: &NodeId) {
        self.focused.set(Some(*element));
    }

    fn viewport_width(&self) -> Option<f64> {
        self.viewport_width.get()
    }

    fn matches_media(&self, _media_query: &str) -> bool {
        self.dark_scheme.get()
    }
}

/// Handles into the markup built by [`FakeHost::dashboard`].
#[derive(Clone, Debug)]
pub struct DashboardPage {
    pub sidebar: NodeId,
    pub sidebar_toggles: Vec<NodeId>,
    pub search_form: NodeId,
    pub search_input: NodeId,
    pub theme_toggle: NodeId,
    pub theme_icon: NodeId,
    pub theme_text: NodeId,
    pub menu_links: Vec<NodeId>,
}

impl FakeHost {
    /// Build the dashboard shell: a sidebar holding two toggles, the search
    /// form, `menu_links` links, and the theme control with icon and label.
    pub fn dashboard(&self, menu_links: usize, sidebar_collapsed: bool) -> DashboardPage {
        let sidebar_classes = if sidebar_collapsed { "sidebar collapsed" } else { "sidebar" };
        let sidebar = self.append(self.body_id(), "aside", sidebar_classes);
        let header_toggle = self.append(self.body_id(), "button", "sidebar-toggle");
        let inner_toggle = self.append(sidebar, "button", "sidebar-toggle");
        let search_form = self.append(sidebar, "form", "search-form");
        let search_input = self.append(search_form, "input", "");
        let menu = self.append(sidebar, "ul", "menu");
        let menu_links = (0..menu_links)
            .map(|_| {
                let item = self.append(menu, "li", "menu-item");
                self.append(item, "a", "menu-link")
            })
            .collect();
        let theme_toggle = self.append(sidebar, "button", "theme-toggle");
        let theme_icon = self.append(theme_toggle, "span", "theme-icon material-symbols-rounded");
        let theme_text = self.append(theme_toggle, "span", "theme-text");
        DashboardPage {
            sidebar,
            sidebar_toggles: vec![header_toggle, inner_toggle],
            search_form,
            search_input,
            theme_toggle,
            theme_icon,
            theme_text,
            menu_links,
        }
    }
}

/// `localStorage` stand-in. Counts writes so tests can assert persistence.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
    writes: Cell<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self
    }

    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes.get()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries.borrow_mut().insert(key.to_owned(), value.to_owned());
        self.writes.set(self.writes.get() + 1);
    }
}
