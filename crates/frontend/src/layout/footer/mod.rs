//! Footer copyright year.

use crate::shared::date_utils::current_year;
use crate::shared::dom::Dom;

pub struct PageYearStamper<D: Dom> {
    dom: D,
    element_id: String,
}

impl<D: Dom> PageYearStamper<D> {
    pub fn new(dom: D, element_id: impl Into<String>) -> Self {
        Self {
            dom,
            element_id: element_id.into(),
        }
    }

    /// Write the current calendar year.
    pub fn initialize(&self) {
        self.stamp(current_year());
    }

    pub fn stamp(&self, year: i32) {
        if let Some(element) = self.dom.element_by_id(&self.element_id) {
            self.dom.set_text(&element, &year.to_string());
        }
    }
}
