//! Quote / test-drive request form.
//!
//! Submissions are stored locally as [`LeadRecord`]s; nothing is sent over
//! the network.

use std::cell::RefCell;
use std::rc::Rc;

use contracts::domain::a002_lead::LeadRecord;
use contracts::shared::form_settings::LeadFormSettings;

use crate::domain::a002_lead::repository::LeadRepository;
use crate::shared::config::LeadFormConfig;
use crate::shared::date_utils::now_utc;
use crate::shared::dom::{Dom, DomEvent, ListenTarget};
use crate::shared::error::DomError;
use crate::shared::storage::KeyValueStore;

pub const FORM_ID: &str = "lead-form";

struct FormFields<E> {
    form: E,
    name: E,
    phone: E,
    email: E,
    product_interest: E,
    message: E,
}

impl<E> FormFields<E> {
    fn inputs(&self) -> [&E; 5] {
        [
            &self.name,
            &self.phone,
            &self.email,
            &self.product_interest,
            &self.message,
        ]
    }
}

struct LeadFormInner<D: Dom, S: KeyValueStore> {
    dom: D,
    repository: LeadRepository<S>,
    confirmation_message: String,
    fields: RefCell<Option<FormFields<D::Element>>>,
}

impl<D: Dom, S: KeyValueStore> LeadFormInner<D, S> {
    fn handle_submit(&self, event: &mut dyn DomEvent) {
        event.prevent_default();
        let fields = self.fields.borrow();
        let Some(fields) = fields.as_ref() else {
            return;
        };
        let dom = &self.dom;

        let lead = LeadRecord::new(
            dom.value(&fields.name),
            dom.value(&fields.phone),
            dom.value(&fields.email),
            dom.value(&fields.product_interest),
            dom.value(&fields.message),
            now_utc(),
        );
        match self.repository.append(lead) {
            Ok(total) => log::info!("Lead saved ({} stored)", total),
            Err(e) => log::error!("Failed to save lead: {}", e),
        }

        dom.alert(&self.confirmation_message);
        for input in fields.inputs() {
            dom.set_value(input, "");
        }
    }
}

pub struct LeadCaptureForm<D: Dom, S: KeyValueStore> {
    container_id: String,
    inner: Rc<LeadFormInner<D, S>>,
    listener: Option<D::Listener>,
}

impl<D: Dom, S: KeyValueStore> LeadCaptureForm<D, S> {
    pub fn new(dom: D, storage: S, config: &LeadFormConfig) -> Self {
        Self {
            container_id: config.container_id.clone(),
            inner: Rc::new(LeadFormInner {
                dom,
                repository: LeadRepository::new(storage, config.storage_key.clone()),
                confirmation_message: config.confirmation_message.clone(),
                fields: RefCell::new(None),
            }),
            listener: None,
        }
    }

    /// Render the form into the container (replacing its content) and wire
    /// submission. No-op when the container is missing.
    pub fn initialize(&mut self, settings: &LeadFormSettings) {
        self.dispose();
        let dom = &self.inner.dom;
        let Some(container) = dom.element_by_id(&self.container_id) else {
            log::debug!("Lead form container #{} not found", self.container_id);
            return;
        };

        let fields = match build_form(dom, &container, settings) {
            Ok(fields) => fields,
            Err(e) => {
                log::warn!("Failed to build lead form: {}", e);
                return;
            }
        };

        let inner = Rc::clone(&self.inner);
        self.listener = Some(dom.listen(
            ListenTarget::Element(&fields.form),
            "submit",
            Box::new(move |event: &mut dyn DomEvent| inner.handle_submit(event)),
        ));
        *self.inner.fields.borrow_mut() = Some(fields);
    }

    pub fn dispose(&mut self) {
        self.listener = None;
    }

    pub fn handle_submit(&self, event: &mut dyn DomEvent) {
        self.inner.handle_submit(event);
    }

    /// Persisted leads, oldest first.
    pub fn leads(&self) -> Vec<LeadRecord> {
        self.inner.repository.load()
    }
}

fn build_form<D: Dom>(
    dom: &D,
    container: &D::Element,
    settings: &LeadFormSettings,
) -> Result<FormFields<D::Element>, DomError> {
    let wrapper = dom.create_with_class("div", "lead-form-container")?;

    let heading = dom.create_with_class("div", "lead-form-title")?;
    let title = dom.create_element("h2")?;
    dom.set_text(&title, &settings.title);
    let subtitle = dom.create_element("p")?;
    dom.set_text(&subtitle, &settings.subtitle);
    dom.append_child(&heading, &title);
    dom.append_child(&heading, &subtitle);

    let form = dom.create_with_class("form", "lead-form")?;
    dom.set_attribute(&form, "id", FORM_ID);

    let name = input(dom, "text", "name", "Full Name *", true)?;
    let phone = input(dom, "tel", "phone", "Phone / WhatsApp Number *", true)?;
    let email = input(dom, "email", "email", "Email *", true)?;
    let product_interest = product_select(dom, settings)?;
    let message = dom.create_with_class("textarea", "form-control form-textarea")?;
    dom.set_attribute(&message, "id", "message");
    dom.set_attribute(&message, "placeholder", "Additional message (optional)");

    dom.append_child(&form, &row(dom, &[&name, &phone])?);
    dom.append_child(&form, &row(dom, &[&email, &product_interest])?);
    dom.append_child(&form, &group(dom, &message)?);

    let submit = dom.create_with_class("button", "btn-primary form-submit")?;
    dom.set_attribute(&submit, "type", "submit");
    dom.set_text(&submit, &settings.submit_text);
    dom.append_child(&form, &submit);

    let note = dom.create_with_class("p", "form-note")?;
    dom.set_text(&note, "By submitting this form you agree to our privacy policy.");
    dom.append_child(&form, &note);

    dom.append_child(&wrapper, &heading);
    dom.append_child(&wrapper, &form);
    dom.replace_children(container, &[wrapper]);

    Ok(FormFields {
        form,
        name,
        phone,
        email,
        product_interest,
        message,
    })
}

fn input<D: Dom>(
    dom: &D,
    kind: &str,
    id: &str,
    placeholder: &str,
    required: bool,
) -> Result<D::Element, DomError> {
    let input = dom.create_with_class("input", "form-control")?;
    dom.set_attribute(&input, "type", kind);
    dom.set_attribute(&input, "id", id);
    dom.set_attribute(&input, "placeholder", placeholder);
    if required {
        dom.set_attribute(&input, "required", "");
    }
    Ok(input)
}

fn product_select<D: Dom>(dom: &D, settings: &LeadFormSettings) -> Result<D::Element, DomError> {
    let select = dom.create_with_class("select", "form-control")?;
    dom.set_attribute(&select, "id", "product-interest");
    dom.set_attribute(&select, "required", "");

    let placeholder = dom.create_element("option")?;
    dom.set_attribute(&placeholder, "value", "");
    dom.set_attribute(&placeholder, "disabled", "");
    dom.set_attribute(&placeholder, "selected", "");
    dom.set_text(&placeholder, "Product of interest *");
    dom.append_child(&select, &placeholder);

    for product in &settings.product_options {
        let option = dom.create_element("option")?;
        dom.set_attribute(&option, "value", &product.value);
        dom.set_text(&option, &product.label);
        dom.append_child(&select, &option);
    }
    Ok(select)
}

fn group<D: Dom>(dom: &D, field: &D::Element) -> Result<D::Element, DomError> {
    let group = dom.create_with_class("div", "form-group")?;
    dom.append_child(&group, field);
    Ok(group)
}

fn row<D: Dom>(dom: &D, fields: &[&D::Element]) -> Result<D::Element, DomError> {
    let row = dom.create_with_class("div", "form-row")?;
    for field in fields {
        dom.append_child(&row, &group(dom, field)?);
    }
    Ok(row)
}
