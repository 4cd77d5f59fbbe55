//! Smooth scrolling for same-page anchor links (`href="#section"`).

use crate::shared::dom::{Dom, DomEvent, ListenTarget};

/// Space kept between the navbar's bottom edge and the target section.
const SCROLL_GAP: f64 = 20.0;

pub struct AnchorScroller<D: Dom> {
    dom: D,
    navbar_id: String,
    listeners: Vec<D::Listener>,
}

impl<D: Dom> AnchorScroller<D> {
    pub fn new(dom: D, navbar_id: impl Into<String>) -> Self {
        Self {
            dom,
            navbar_id: navbar_id.into(),
            listeners: Vec::new(),
        }
    }

    pub fn initialize(&mut self) {
        self.dispose();
        for link in self.dom.query_all("a[href^=\"#\"]") {
            let Some(href) = self.dom.attribute(&link, "href") else {
                continue;
            };
            // bare "#" keeps the browser default
            let Some(target_id) = href.strip_prefix('#').filter(|id| !id.is_empty()) else {
                continue;
            };
            let target_id = target_id.to_string();
            let dom = self.dom.clone();
            let navbar_id = self.navbar_id.clone();
            self.listeners.push(self.dom.listen(
                ListenTarget::Element(&link),
                "click",
                Box::new(move |event: &mut dyn DomEvent| {
                    event.prevent_default();
                    scroll_to_section(&dom, &navbar_id, &target_id);
                }),
            ));
        }
    }

    pub fn dispose(&mut self) {
        self.listeners.clear();
    }
}

fn scroll_to_section<D: Dom>(dom: &D, navbar_id: &str, target_id: &str) {
    let Some(target) = dom.element_by_id(target_id) else {
        return;
    };
    let navbar_height = dom
        .element_by_id(navbar_id)
        .map(|navbar| dom.offset_height(&navbar))
        .unwrap_or_default();
    dom.scroll_to_smooth(dom.offset_top(&target) - navbar_height - SCROLL_GAP);
}
