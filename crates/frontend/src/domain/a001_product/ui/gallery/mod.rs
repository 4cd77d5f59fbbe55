use contracts::domain::a001_product::ProductRecord;

use crate::shared::dom::Dom;
use crate::shared::error::DomError;

/// Shown instead of the grid when there is nothing to list.
pub const EMPTY_MESSAGE: &str = "No products to display.";

/// Renders product cards into a container, replacing whatever it held.
pub struct ProductGalleryRenderer<D: Dom> {
    dom: D,
    container_id: String,
}

impl<D: Dom> ProductGalleryRenderer<D> {
    pub fn new(dom: D, container_id: impl Into<String>) -> Self {
        Self {
            dom,
            container_id: container_id.into(),
        }
    }

    pub fn render(&self, products: &[ProductRecord]) {
        let Some(container) = self.dom.element_by_id(&self.container_id) else {
            log::debug!("Product container #{} not found", self.container_id);
            return;
        };

        let content = if products.is_empty() {
            self.empty_message()
        } else {
            self.grid(products)
        };
        match content {
            Ok(content) => self.dom.replace_children(&container, &[content]),
            Err(e) => log::warn!("Failed to render products into #{}: {}", self.container_id, e),
        }
    }

    fn empty_message(&self) -> Result<D::Element, DomError> {
        let message = self.dom.create_with_class("p", "text-center")?;
        self.dom.set_text(&message, EMPTY_MESSAGE);
        Ok(message)
    }

    fn grid(&self, products: &[ProductRecord]) -> Result<D::Element, DomError> {
        let grid = self.dom.create_with_class("div", "product-grid")?;
        for product in products {
            let card = self.card(product)?;
            self.dom.append_child(&grid, &card);
        }
        Ok(grid)
    }

    fn card(&self, product: &ProductRecord) -> Result<D::Element, DomError> {
        let dom = &self.dom;
        let card = dom.create_with_class("div", "product-card")?;

        let image_box = dom.create_with_class("div", "product-image")?;
        let image = dom.create_element("img")?;
        dom.set_attribute(&image, "src", &product.image);
        dom.set_attribute(&image, "alt", &product.name);
        dom.append_child(&image_box, &image);

        let info = dom.create_with_class("div", "product-info")?;
        let title = dom.create_with_class("h3", "product-title")?;
        dom.set_text(&title, &product.name);
        let description = dom.create_with_class("p", "product-description")?;
        dom.set_text(&description, &product.description);

        let footer = dom.create_with_class("div", "product-footer")?;
        let price = dom.create_with_class("span", "product-price")?;
        dom.set_text(&price, &product.price);
        let link = dom.create_with_class("a", "btn-primary")?;
        dom.set_attribute(&link, "href", product.detail_href());
        dom.set_text(&link, "Detail");
        dom.append_child(&footer, &price);
        dom.append_child(&footer, &link);

        dom.append_child(&info, &title);
        dom.append_child(&info, &description);
        dom.append_child(&info, &footer);
        dom.append_child(&card, &image_box);
        dom.append_child(&card, &info);
        Ok(card)
    }
}
