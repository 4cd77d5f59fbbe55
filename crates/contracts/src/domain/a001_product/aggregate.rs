use serde::{Deserialize, Serialize};

/// Link target used when a product has no detail page.
pub const DETAIL_URL_PLACEHOLDER: &str = "#";

// ============================================================================
// Product card
// ============================================================================

/// Vehicle shown as a card in a product gallery.
///
/// Prices are display text ("Rp 265.000.000"), never parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub name: String,
    pub description: String,
    pub price: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_url: Option<String>,
}

impl ProductRecord {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price: price.into(),
            image: image.into(),
            detail_url: None,
        }
    }

    pub fn with_detail_url(mut self, url: impl Into<String>) -> Self {
        self.detail_url = Some(url.into());
        self
    }

    /// Detail link target, falling back to the placeholder.
    pub fn detail_href(&self) -> &str {
        match self.detail_url.as_deref() {
            Some(url) if !url.is_empty() => url,
            _ => DETAIL_URL_PLACEHOLDER,
        }
    }
}

// ============================================================================
// Select option
// ============================================================================

/// Entry of the "product of interest" select in the lead form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOption {
    pub value: String,
    pub label: String,
}

impl ProductOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}
