//! [`Dom`] over the browser document via `web-sys`.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, Event, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollToOptions, Window,
};

use super::{Dom, DomEvent, Handler, ListenTarget};
use crate::shared::error::DomError;

#[derive(Clone)]
pub struct WebDom {
    window: Window,
    document: Document,
}

impl WebDom {
    /// `None` outside a browsing context (workers, tests).
    pub fn from_window() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?;
        Some(Self { window, document })
    }
}

struct WebEvent(Event);

impl DomEvent for WebEvent {
    fn prevent_default(&mut self) {
        self.0.prevent_default();
    }
}

/// Keeps the JS closure alive; removes the listener when dropped.
pub struct WebListener {
    target: EventTarget,
    event: String,
    closure: Closure<dyn FnMut(Event)>,
}

impl Drop for WebListener {
    fn drop(&mut self) {
        let _ = self.target.remove_event_listener_with_callback(
            &self.event,
            self.closure.as_ref().unchecked_ref(),
        );
    }
}

impl Dom for WebDom {
    type Element = Element;
    type Listener = WebListener;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_all(&self, selector: &str) -> Vec<Element> {
        let Ok(nodes) = self.document.query_selector_all(selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn create_element(&self, tag: &str) -> Result<Element, DomError> {
        self.document
            .create_element(tag)
            .map_err(|_| DomError::CreateElement(tag.to_string()))
    }

    fn append_child(&self, parent: &Element, child: &Element) {
        let _ = parent.append_child(child);
    }

    fn replace_children(&self, parent: &Element, children: &[Element]) {
        parent.set_inner_html("");
        for child in children {
            let _ = parent.append_child(child);
        }
    }

    fn set_text(&self, element: &Element, text: &str) {
        element.set_text_content(Some(text));
    }

    fn attribute(&self, element: &Element, name: &str) -> Option<String> {
        element.get_attribute(name)
    }

    fn set_attribute(&self, element: &Element, name: &str, value: &str) {
        let _ = element.set_attribute(name, value);
    }

    fn add_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().add_1(class);
    }

    fn remove_class(&self, element: &Element, class: &str) {
        let _ = element.class_list().remove_1(class);
    }

    fn has_class(&self, element: &Element, class: &str) -> bool {
        element.class_list().contains(class)
    }

    fn value(&self, element: &Element) -> String {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else {
            String::new()
        }
    }

    fn set_value(&self, element: &Element, value: &str) {
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value(value);
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.set_value(value);
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value(value);
        }
    }

    fn offset_top(&self, element: &Element) -> f64 {
        element
            .dyn_ref::<HtmlElement>()
            .map(|e| f64::from(e.offset_top()))
            .unwrap_or_default()
    }

    fn offset_height(&self, element: &Element) -> f64 {
        element
            .dyn_ref::<HtmlElement>()
            .map(|e| f64::from(e.offset_height()))
            .unwrap_or_default()
    }

    fn listen(
        &self,
        target: ListenTarget<'_, Element>,
        event: &str,
        mut handler: Handler,
    ) -> WebListener {
        let target: EventTarget = match target {
            ListenTarget::Window => self.window.clone().into(),
            ListenTarget::Element(element) => element.clone().into(),
        };
        let closure = Closure::<dyn FnMut(Event)>::new(move |raw: Event| {
            let mut event = WebEvent(raw);
            handler(&mut event as &mut dyn DomEvent);
        });
        let _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
        WebListener {
            target,
            event: event.to_string(),
            closure,
        }
    }

    fn scroll_y(&self) -> f64 {
        self.window.scroll_y().unwrap_or_default()
    }

    fn location_path(&self) -> String {
        self.window.location().pathname().unwrap_or_default()
    }

    fn scroll_to_smooth(&self, top: f64) {
        let options = ScrollToOptions::new();
        options.set_top(top);
        options.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&options);
    }

    fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}
