pub mod app;
pub mod domain;
pub mod layout;
pub mod shared;

use std::cell::RefCell;

use contracts::domain::a001_product::ProductRecord;
use contracts::shared::tabs::TabDescriptor;
use wasm_bindgen::prelude::*;

use app::App;
use shared::config::load_config;
use shared::dom::WebDom;
use shared::storage::LocalStorage;

thread_local! {
    /// Mounted behaviors; keeps every listener alive for the page lifetime.
    static APP: RefCell<Option<App<WebDom, LocalStorage>>> = const { RefCell::new(None) };
}

pub fn mount() {
    let Some(dom) = WebDom::from_window() else {
        log::warn!("No browser document, site behaviors not mounted");
        return;
    };
    let app = App::mount(dom, LocalStorage::from_window(), &load_config());
    APP.with(|slot| {
        if let Some(mut previous) = slot.borrow_mut().replace(app) {
            previous.dispose();
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    mount();
}

/// Render `products` (an array of product objects) into `#container_id`.
#[wasm_bindgen]
pub fn render_products(container_id: &str, products: JsValue) -> Result<(), JsValue> {
    let products: Vec<ProductRecord> = serde_wasm_bindgen::from_value(products)?;
    APP.with(|slot| match slot.borrow().as_ref() {
        Some(app) => app.render_products(container_id, &products),
        None => log::warn!("render_products called before the site was mounted"),
    });
    Ok(())
}

/// Mount a tab group described by `tabs` (an array of `{id, label, active}`).
#[wasm_bindgen]
pub fn mount_tabs(container_id: &str, tabs: JsValue) -> Result<(), JsValue> {
    let tabs: Vec<TabDescriptor> = serde_wasm_bindgen::from_value(tabs)?;
    APP.with(|slot| match slot.borrow_mut().as_mut() {
        Some(app) => app.add_tabs(container_id, tabs),
        None => log::warn!("mount_tabs called before the site was mounted"),
    });
    Ok(())
}
