//! Tab groups: one header button and one content panel per descriptor,
//! exactly one pair active at a time.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::shared::tabs::{initial_active_id, TabDescriptor};

use crate::shared::dom::{Dom, DomEvent, ListenTarget};
use crate::shared::error::DomError;

const ACTIVE_CLASS: &str = "active";

struct TabsInner<D: Dom> {
    dom: D,
    /// `(tab id, button)` in descriptor order.
    buttons: RefCell<Vec<(String, D::Element)>>,
    panels: RefCell<Vec<D::Element>>,
    active_tab_id: RefCell<Option<String>>,
}

impl<D: Dom> TabsInner<D> {
    fn show_tab(&self, id: &str) {
        for (tab_id, button) in self.buttons.borrow().iter() {
            self.dom.toggle_class(button, ACTIVE_CLASS, tab_id == id);
        }
        for panel in self.panels.borrow().iter() {
            let matches = self.dom.attribute(panel, "id").as_deref() == Some(id);
            self.dom.toggle_class(panel, ACTIVE_CLASS, matches);
        }
        *self.active_tab_id.borrow_mut() = Some(id.to_string());
    }
}

pub struct TabController<D: Dom> {
    container_id: String,
    tabs: Vec<TabDescriptor>,
    inner: Rc<TabsInner<D>>,
    listeners: Vec<D::Listener>,
}

impl<D: Dom> TabController<D> {
    pub fn new(dom: D, container_id: impl Into<String>, tabs: Vec<TabDescriptor>) -> Self {
        Self {
            container_id: container_id.into(),
            tabs,
            inner: Rc::new(TabsInner {
                dom,
                buttons: RefCell::new(Vec::new()),
                panels: RefCell::new(Vec::new()),
                active_tab_id: RefCell::new(None),
            }),
            listeners: Vec::new(),
        }
    }

    /// Build the header and panels (once), wire the buttons and show the
    /// initial tab. No-op when the container is missing.
    pub fn initialize(&mut self) {
        self.dispose();
        let dom = &self.inner.dom;
        let Some(container) = dom.element_by_id(&self.container_id) else {
            log::debug!("Tab container #{} not found", self.container_id);
            return;
        };

        if self.inner.buttons.borrow().is_empty() {
            if let Err(e) = self.build(&container) {
                log::warn!("Failed to build tabs in #{}: {}", self.container_id, e);
                return;
            }
        }

        for (tab_id, button) in self.inner.buttons.borrow().iter() {
            let inner = Rc::clone(&self.inner);
            let tab_id = tab_id.clone();
            self.listeners.push(dom.listen(
                ListenTarget::Element(button),
                "click",
                Box::new(move |_: &mut dyn DomEvent| inner.show_tab(&tab_id)),
            ));
        }

        if let Some(initial) = initial_active_id(&self.tabs) {
            self.inner.show_tab(initial);
        }
    }

    fn build(&self, container: &D::Element) -> Result<(), DomError> {
        let dom = &self.inner.dom;
        let header = dom.create_with_class("div", "tab-header")?;
        let mut buttons = Vec::with_capacity(self.tabs.len());
        for tab in &self.tabs {
            let button = dom.create_with_class("button", "tab-button")?;
            dom.set_attribute(&button, "type", "button");
            dom.set_attribute(&button, "data-tab", &tab.id);
            dom.set_text(&button, &tab.label);
            dom.append_child(&header, &button);
            buttons.push((tab.id.clone(), button));
        }

        let mut panels = Vec::with_capacity(self.tabs.len());
        for tab in &self.tabs {
            let panel = dom.create_with_class("div", "tab-content")?;
            dom.set_attribute(&panel, "id", &tab.id);
            panels.push(panel);
        }

        dom.append_child(container, &header);
        for panel in &panels {
            dom.append_child(container, panel);
        }
        *self.inner.buttons.borrow_mut() = buttons;
        *self.inner.panels.borrow_mut() = panels;
        Ok(())
    }

    pub fn dispose(&mut self) {
        self.listeners.clear();
    }

    /// Activate the button/panel pair of `id`. Unknown ids leave every panel hidden.
    pub fn show_tab(&self, id: &str) {
        self.inner.show_tab(id);
    }

    pub fn active_tab_id(&self) -> Option<String> {
        self.inner.active_tab_id.borrow().clone()
    }
}
