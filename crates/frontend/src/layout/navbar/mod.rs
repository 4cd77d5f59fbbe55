//! Site navbar: sticky-on-scroll, mobile menu and active-link highlight.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::shared::navigation::NavigationState;

use crate::shared::config::NavigationConfig;
use crate::shared::dom::{Dom, DomEvent, ListenTarget};

const STICKY_CLASS: &str = "sticky";
const ACTIVE_CLASS: &str = "active";

struct NavbarInner<D: Dom> {
    dom: D,
    config: NavigationConfig,
    state: RefCell<NavigationState>,
}

impl<D: Dom> NavbarInner<D> {
    fn on_scroll(&self) {
        let Some(navbar) = self.dom.element_by_id(&self.config.navbar_id) else {
            return;
        };
        let past_threshold = self.dom.scroll_y() > self.config.sticky_threshold;

        let mut state = self.state.borrow_mut();
        if past_threshold && !state.is_sticky {
            self.dom.add_class(&navbar, STICKY_CLASS);
            state.is_sticky = true;
        } else if !past_threshold && state.is_sticky {
            self.dom.remove_class(&navbar, STICKY_CLASS);
            state.is_sticky = false;
        }
    }

    fn toggle_mobile_menu(&self) {
        let Some(menu) = self.dom.element_by_id(&self.config.mobile_menu_id) else {
            return;
        };
        let mut state = self.state.borrow_mut();
        state.is_mobile_menu_open = !state.is_mobile_menu_open;
        self.dom.toggle_class(&menu, ACTIVE_CLASS, state.is_mobile_menu_open);
    }

    fn close_mobile_menu(&self) {
        let Some(menu) = self.dom.element_by_id(&self.config.mobile_menu_id) else {
            return;
        };
        self.dom.remove_class(&menu, ACTIVE_CLASS);
        self.state.borrow_mut().is_mobile_menu_open = false;
    }

    fn update_active_link(&self) {
        let index_page = self.config.index_page.as_str();
        let current = page_identifier(&self.dom.location_path(), index_page);

        let links = self
            .dom
            .query_all(&self.config.desktop_link_selector)
            .into_iter()
            .chain(self.dom.query_all(&self.config.mobile_link_selector));
        for link in links {
            let is_current = self
                .dom
                .attribute(&link, "href")
                .map(|href| page_identifier(&href, index_page) == current)
                .unwrap_or(false);
            self.dom.toggle_class(&link, ACTIVE_CLASS, is_current);
        }
    }
}

/// Page identifier of a location path or link target: its last path
/// segment, percent-decoded. An empty segment is the index page.
pub fn page_identifier(path: &str, index_page: &str) -> String {
    let segment = path.rsplit('/').next().unwrap_or_default();
    let segment = urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string());
    if segment.is_empty() {
        index_page.to_string()
    } else {
        segment
    }
}

/// Owns the navbar flags and the listeners that drive them.
pub struct NavigationController<D: Dom> {
    inner: Rc<NavbarInner<D>>,
    listeners: Vec<D::Listener>,
}

impl<D: Dom> NavigationController<D> {
    pub fn new(dom: D, config: NavigationConfig) -> Self {
        Self {
            inner: Rc::new(NavbarInner {
                dom,
                config,
                state: RefCell::new(NavigationState::default()),
            }),
            listeners: Vec::new(),
        }
    }

    /// Attach scroll/click listeners, then highlight the current page link.
    /// Calling it again replaces the previous bindings.
    pub fn initialize(&mut self) {
        self.dispose();
        let dom = &self.inner.dom;
        let config = &self.inner.config;

        let toggle = dom.element_by_id(&config.toggle_id);
        let menu = dom.element_by_id(&config.mobile_menu_id);
        if let (Some(toggle), Some(_)) = (toggle, menu) {
            let inner = Rc::clone(&self.inner);
            self.listeners.push(dom.listen(
                ListenTarget::Element(&toggle),
                "click",
                Box::new(move |_: &mut dyn DomEvent| inner.toggle_mobile_menu()),
            ));
        }

        let inner = Rc::clone(&self.inner);
        self.listeners.push(dom.listen(
            ListenTarget::Window,
            "scroll",
            Box::new(move |_: &mut dyn DomEvent| inner.on_scroll()),
        ));

        for link in dom.query_all(&config.mobile_link_selector) {
            let inner = Rc::clone(&self.inner);
            self.listeners.push(dom.listen(
                ListenTarget::Element(&link),
                "click",
                Box::new(move |_: &mut dyn DomEvent| inner.close_mobile_menu()),
            ));
        }

        log::debug!("Navbar initialized with {} listener(s)", self.listeners.len());
        self.inner.update_active_link();
    }

    /// Release every listener attached by [`initialize`](Self::initialize).
    pub fn dispose(&mut self) {
        self.listeners.clear();
    }

    pub fn on_scroll(&self) {
        self.inner.on_scroll();
    }

    pub fn toggle_mobile_menu(&self) {
        self.inner.toggle_mobile_menu();
    }

    pub fn close_mobile_menu(&self) {
        self.inner.close_mobile_menu();
    }

    pub fn update_active_link(&self) {
        self.inner.update_active_link();
    }

    pub fn state(&self) -> NavigationState {
        *self.inner.state.borrow()
    }
}
