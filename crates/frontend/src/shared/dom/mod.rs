//! Host document abstraction.
//!
//! Controllers never touch `web_sys::window()` directly: they receive a
//! [`Dom`] at construction. [`web::WebDom`] drives the real page and
//! `MemoryDom` (test builds only) is an in-memory document.

#[cfg(test)]
pub mod memory;
pub mod web;

use crate::shared::error::DomError;

#[cfg(test)]
pub use memory::{MemoryDom, NodeId};
pub use web::WebDom;

/// Event passed to a listener.
pub trait DomEvent {
    /// Suppress the browser's default action (link follow, form post).
    fn prevent_default(&mut self);
}

/// Event callback. Runs to completion before the next event is dispatched.
pub type Handler = Box<dyn FnMut(&mut dyn DomEvent)>;

/// Where a listener is attached.
pub enum ListenTarget<'a, E> {
    Window,
    Element(&'a E),
}

/// Minimal document surface used by the site controllers.
///
/// Mutators are infallible: a detached or foreign element is simply left
/// untouched, matching how the page scripts ignore DOM exceptions.
pub trait Dom: Clone + 'static {
    /// Element handle. Cheap to clone.
    type Element: Clone + 'static;

    /// Registration guard; dropping it removes the listener.
    type Listener: 'static;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All matching elements in document order.
    fn query_all(&self, selector: &str) -> Vec<Self::Element>;

    fn create_element(&self, tag: &str) -> Result<Self::Element, DomError>;

    fn append_child(&self, parent: &Self::Element, child: &Self::Element);

    /// Drop every child of `parent`, then append `children` in order.
    fn replace_children(&self, parent: &Self::Element, children: &[Self::Element]);

    fn set_text(&self, element: &Self::Element, text: &str);

    fn attribute(&self, element: &Self::Element, name: &str) -> Option<String>;

    fn set_attribute(&self, element: &Self::Element, name: &str, value: &str);

    fn add_class(&self, element: &Self::Element, class: &str);

    fn remove_class(&self, element: &Self::Element, class: &str);

    fn has_class(&self, element: &Self::Element, class: &str) -> bool;

    /// Current value of an input, select or textarea; empty otherwise.
    fn value(&self, element: &Self::Element) -> String;

    fn set_value(&self, element: &Self::Element, value: &str);

    fn offset_top(&self, element: &Self::Element) -> f64;

    fn offset_height(&self, element: &Self::Element) -> f64;

    fn listen(
        &self,
        target: ListenTarget<'_, Self::Element>,
        event: &str,
        handler: Handler,
    ) -> Self::Listener;

    /// Vertical scroll offset of the window.
    fn scroll_y(&self) -> f64;

    /// Path component of the current location, e.g. `/models/xpander.html`.
    fn location_path(&self) -> String;

    fn scroll_to_smooth(&self, top: f64);

    fn alert(&self, message: &str);

    /// Convenience: `set_attribute(element, "class", ...)`.
    fn set_class_name(&self, element: &Self::Element, class_name: &str) {
        self.set_attribute(element, "class", class_name);
    }

    /// Create `<tag class="...">`.
    fn create_with_class(&self, tag: &str, class_name: &str) -> Result<Self::Element, DomError> {
        let element = self.create_element(tag)?;
        self.set_class_name(&element, class_name);
        Ok(element)
    }

    /// Add or remove `class` so that its presence equals `on`.
    fn toggle_class(&self, element: &Self::Element, class: &str, on: bool) {
        if on {
            self.add_class(element, class);
        } else {
            self.remove_class(element, class);
        }
    }
}
