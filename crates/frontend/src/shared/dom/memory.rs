//! In-memory document for driving controllers without a browser.
//!
//! Nodes live in an arena behind `Rc<RefCell<_>>`; clones of a
//! [`MemoryDom`] share the same document. Events are dispatched to the
//! listeners of the exact target (no bubbling). Handlers are cloned out of
//! the registry before they run, so they may freely call back into the
//! document.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use super::selector::SelectorStep;
use super::{Dom, DomEvent, Handler, ListenTarget};
use crate::shared::error::DomError;

/// Handle of a node in a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

const BODY: NodeId = NodeId(0);

#[derive(Debug, Default)]
struct NodeData {
    tag: String,
    attrs: BTreeMap<String, String>,
    text: String,
    value: String,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    offset_top: f64,
    offset_height: f64,
}

struct Registration {
    id: u64,
    target: Option<NodeId>,
    event: String,
    handler: Rc<RefCell<Handler>>,
}

#[derive(Default)]
struct Document {
    nodes: Vec<NodeData>,
    listeners: Vec<Registration>,
    next_listener: u64,
    scroll_y: f64,
    path: String,
    alerts: Vec<String>,
    scroll_requests: Vec<f64>,
}

impl Document {
    fn node(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut NodeData {
        &mut self.nodes[id.0]
    }

    fn is_connected(&self, mut id: NodeId) -> bool {
        loop {
            if id == BODY {
                return true;
            }
            match self.node(id).parent {
                Some(parent) => id = parent,
                None => return false,
            }
        }
    }

    fn detach(&mut self, child: NodeId) {
        if let Some(parent) = self.node_mut(child).parent.take() {
            self.node_mut(parent).children.retain(|c| *c != child);
        }
    }

    /// Pre-order walk from `<body>`.
    fn connected_in_order(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![BODY];
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(self.node(id).children.iter().rev().copied());
        }
        out
    }
}

/// Listener guard of a [`MemoryDom`].
pub struct MemoryListener {
    id: u64,
    document: Weak<RefCell<Document>>,
}

impl Drop for MemoryListener {
    fn drop(&mut self) {
        if let Some(document) = self.document.upgrade() {
            document.borrow_mut().listeners.retain(|r| r.id != self.id);
        }
    }
}

#[derive(Default)]
struct MemoryEvent {
    default_prevented: bool,
}

impl DomEvent for MemoryEvent {
    fn prevent_default(&mut self) {
        self.default_prevented = true;
    }
}

#[derive(Clone)]
pub struct MemoryDom {
    document: Rc<RefCell<Document>>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new("/")
    }
}

impl MemoryDom {
    /// Empty document whose location path is `path`.
    pub fn new(path: &str) -> Self {
        let body = NodeData {
            tag: "body".to_string(),
            ..NodeData::default()
        };
        let document = Document {
            nodes: vec![body],
            path: path.to_string(),
            ..Document::default()
        };
        Self {
            document: Rc::new(RefCell::new(document)),
        }
    }

    pub fn body(&self) -> NodeId {
        BODY
    }

    /// Build `<tag attrs...>` and append it to `parent` (`<body>` when `None`).
    pub fn add(&self, parent: Option<NodeId>, tag: &str, attrs: &[(&str, &str)]) -> NodeId {
        let mut document = self.document.borrow_mut();
        let id = NodeId(document.nodes.len());
        let parent = parent.unwrap_or(BODY);
        document.nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            parent: Some(parent),
            ..NodeData::default()
        });
        document.node_mut(parent).children.push(id);
        id
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.document.borrow().node(node).tag.clone()
    }

    pub fn text(&self, node: NodeId) -> String {
        self.document.borrow().node(node).text.clone()
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.document.borrow().node(node).children.clone()
    }

    pub fn is_connected(&self, node: NodeId) -> bool {
        self.document.borrow().is_connected(node)
    }

    /// Connected descendants of `node` matching `selector`, in order.
    pub fn query_within(&self, node: NodeId, selector: &str) -> Vec<NodeId> {
        self.query_all(selector)
            .into_iter()
            .filter(|candidate| self.is_descendant(*candidate, node))
            .collect()
    }

    fn is_descendant(&self, mut candidate: NodeId, ancestor: NodeId) -> bool {
        let document = self.document.borrow();
        while let Some(parent) = document.node(candidate).parent {
            if parent == ancestor {
                return true;
            }
            candidate = parent;
        }
        false
    }

    pub fn set_layout(&self, node: NodeId, offset_top: f64, offset_height: f64) {
        let mut document = self.document.borrow_mut();
        let data = document.node_mut(node);
        data.offset_top = offset_top;
        data.offset_height = offset_height;
    }

    /// Set the window scroll offset and fire `scroll` on the window.
    pub fn scroll_window(&self, y: f64) {
        self.document.borrow_mut().scroll_y = y;
        self.dispatch_to(None, "scroll");
    }

    /// Fire `event` on `node`. Returns whether a handler prevented the default.
    pub fn dispatch(&self, node: NodeId, event: &str) -> bool {
        self.dispatch_to(Some(node), event)
    }

    pub fn click(&self, node: NodeId) -> bool {
        self.dispatch(node, "click")
    }

    pub fn listener_count(&self) -> usize {
        self.document.borrow().listeners.len()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.document.borrow().alerts.clone()
    }

    /// Targets requested through [`Dom::scroll_to_smooth`], oldest first.
    pub fn scroll_requests(&self) -> Vec<f64> {
        self.document.borrow().scroll_requests.clone()
    }

    fn dispatch_to(&self, target: Option<NodeId>, event: &str) -> bool {
        let handlers: Vec<Rc<RefCell<Handler>>> = self
            .document
            .borrow()
            .listeners
            .iter()
            .filter(|r| r.target == target && r.event == event)
            .map(|r| Rc::clone(&r.handler))
            .collect();

        let mut dom_event = MemoryEvent::default();
        for handler in handlers {
            let mut handler = handler.borrow_mut();
            (&mut *handler)(&mut dom_event as &mut dyn DomEvent);
        }
        dom_event.default_prevented
    }

    fn classes(&self, node: NodeId) -> Vec<String> {
        self.document
            .borrow()
            .node(node)
            .attrs
            .get("class")
            .map(|c| c.split_whitespace().map(str::to_string).collect())
            .unwrap_or_default()
    }

    fn write_classes(&self, node: NodeId, classes: &[String]) {
        self.document
            .borrow_mut()
            .node_mut(node)
            .attrs
            .insert("class".to_string(), classes.join(" "));
    }
}

impl Dom for MemoryDom {
    type Element = NodeId;
    type Listener = MemoryListener;

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        let document = self.document.borrow();
        document
            .connected_in_order()
            .into_iter()
            .find(|node| document.node(*node).attrs.get("id").map(String::as_str) == Some(id))
    }

    fn query_all(&self, selector: &str) -> Vec<NodeId> {
        let Some(step) = SelectorStep::parse(selector) else {
            return Vec::new();
        };
        let document = self.document.borrow();
        document
            .connected_in_order()
            .into_iter()
            .filter(|node| *node != BODY)
            .filter(|node| {
                let data = document.node(*node);
                step.matches(&data.tag, |key| data.attrs.get(key).cloned())
            })
            .collect()
    }

    fn create_element(&self, tag: &str) -> Result<NodeId, DomError> {
        if tag.is_empty() || !tag.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(DomError::CreateElement(tag.to_string()));
        }
        let mut document = self.document.borrow_mut();
        let id = NodeId(document.nodes.len());
        document.nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            ..NodeData::default()
        });
        Ok(id)
    }

    fn append_child(&self, parent: &NodeId, child: &NodeId) {
        let mut document = self.document.borrow_mut();
        document.detach(*child);
        document.node_mut(*child).parent = Some(*parent);
        document.node_mut(*parent).children.push(*child);
    }

    fn replace_children(&self, parent: &NodeId, children: &[NodeId]) {
        {
            let mut document = self.document.borrow_mut();
            let old = std::mem::take(&mut document.node_mut(*parent).children);
            for child in old {
                document.node_mut(child).parent = None;
            }
            document.node_mut(*parent).text.clear();
        }
        for child in children {
            self.append_child(parent, child);
        }
    }

    fn set_text(&self, element: &NodeId, text: &str) {
        let old = {
            let mut document = self.document.borrow_mut();
            let data = document.node_mut(*element);
            data.text = text.to_string();
            std::mem::take(&mut data.children)
        };
        let mut document = self.document.borrow_mut();
        for child in old {
            document.node_mut(child).parent = None;
        }
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.document.borrow().node(*element).attrs.get(name).cloned()
    }

    fn set_attribute(&self, element: &NodeId, name: &str, value: &str) {
        self.document
            .borrow_mut()
            .node_mut(*element)
            .attrs
            .insert(name.to_string(), value.to_string());
    }

    fn add_class(&self, element: &NodeId, class: &str) {
        let mut classes = self.classes(*element);
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
            self.write_classes(*element, &classes);
        }
    }

    fn remove_class(&self, element: &NodeId, class: &str) {
        let mut classes = self.classes(*element);
        let before = classes.len();
        classes.retain(|c| c != class);
        if classes.len() != before {
            self.write_classes(*element, &classes);
        }
    }

    fn has_class(&self, element: &NodeId, class: &str) -> bool {
        self.classes(*element).iter().any(|c| c == class)
    }

    fn value(&self, element: &NodeId) -> String {
        self.document.borrow().node(*element).value.clone()
    }

    fn set_value(&self, element: &NodeId, value: &str) {
        self.document.borrow_mut().node_mut(*element).value = value.to_string();
    }

    fn offset_top(&self, element: &NodeId) -> f64 {
        self.document.borrow().node(*element).offset_top
    }

    fn offset_height(&self, element: &NodeId) -> f64 {
        self.document.borrow().node(*element).offset_height
    }

    fn listen(
        &self,
        target: ListenTarget<'_, NodeId>,
        event: &str,
        handler: Handler,
    ) -> MemoryListener {
        let mut document = self.document.borrow_mut();
        let id = document.next_listener;
        document.next_listener += 1;
        document.listeners.push(Registration {
            id,
            target: match target {
                ListenTarget::Window => None,
                ListenTarget::Element(node) => Some(*node),
            },
            event: event.to_string(),
            handler: Rc::new(RefCell::new(handler)),
        });
        MemoryListener {
            id,
            document: Rc::downgrade(&self.document),
        }
    }

    fn scroll_y(&self) -> f64 {
        self.document.borrow().scroll_y
    }

    fn location_path(&self) -> String {
        self.document.borrow().path.clone()
    }

    fn scroll_to_smooth(&self, top: f64) {
        self.document.borrow_mut().scroll_requests.push(top);
    }

    fn alert(&self, message: &str) {
        self.document.borrow_mut().alerts.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_by_id_ignores_detached_nodes() {
        let dom = MemoryDom::default();
        let detached = dom.create_element("div").unwrap();
        dom.set_attribute(&detached, "id", "ghost");
        assert_eq!(dom.element_by_id("ghost"), None);

        dom.append_child(&dom.body(), &detached);
        assert_eq!(dom.element_by_id("ghost"), Some(detached));
    }

    #[test]
    fn test_replace_children_detaches_previous() {
        let dom = MemoryDom::default();
        let list = dom.add(None, "ul", &[]);
        let old = dom.add(Some(list), "li", &[("class", "item")]);
        let new = dom.create_element("li").unwrap();

        dom.replace_children(&list, &[new]);
        assert_eq!(dom.children(list), vec![new]);
        assert!(!dom.is_connected(old));
        assert!(dom.query_all(".item").is_empty());
    }

    #[test]
    fn test_class_helpers() {
        let dom = MemoryDom::default();
        let nav = dom.add(None, "nav", &[("class", "navbar")]);
        dom.add_class(&nav, "sticky");
        dom.add_class(&nav, "sticky");
        assert_eq!(dom.attribute(&nav, "class").as_deref(), Some("navbar sticky"));

        dom.toggle_class(&nav, "sticky", false);
        assert!(!dom.has_class(&nav, "sticky"));
        assert!(dom.has_class(&nav, "navbar"));
    }

    #[test]
    fn test_dropping_listener_unregisters() {
        let dom = MemoryDom::default();
        let button = dom.add(None, "button", &[]);
        let hits = Rc::new(RefCell::new(0));

        let counter = Rc::clone(&hits);
        let guard = dom.listen(
            ListenTarget::Element(&button),
            "click",
            Box::new(move |_: &mut dyn DomEvent| *counter.borrow_mut() += 1),
        );
        dom.click(button);
        drop(guard);
        dom.click(button);

        assert_eq!(*hits.borrow(), 1);
        assert_eq!(dom.listener_count(), 0);
    }

    #[test]
    fn test_handler_may_mutate_document() {
        let dom = MemoryDom::default();
        let link = dom.add(None, "a", &[("href", "#top")]);
        let inner = dom.clone();
        let _guard = dom.listen(
            ListenTarget::Element(&link),
            "click",
            Box::new(move |event: &mut dyn DomEvent| {
                event.prevent_default();
                inner.add_class(&link, "visited");
            }),
        );

        assert!(dom.click(link));
        assert!(dom.has_class(&link, "visited"));
    }
}
