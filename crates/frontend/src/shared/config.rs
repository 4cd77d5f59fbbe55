//! Site configuration: element ids, tab groups, product catalog and lead
//! form texts.
//!
//! The configuration is embedded in the wasm binary as TOML. Every section
//! and field has a default, so a partial document is valid.

use contracts::domain::a001_product::ProductRecord;
use contracts::shared::form_settings::LeadFormSettings;
use contracts::shared::tabs::{default_tabs, TabDescriptor};
use serde::Deserialize;

use crate::shared::error::ConfigError;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct SiteConfig {
    pub navigation: NavigationConfig,
    pub footer: FooterConfig,
    pub tabs: Vec<TabGroupConfig>,
    pub galleries: Vec<GalleryConfig>,
    pub lead_form: LeadFormConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct NavigationConfig {
    pub navbar_id: String,
    pub toggle_id: String,
    pub mobile_menu_id: String,
    pub desktop_link_selector: String,
    pub mobile_link_selector: String,
    /// Scroll offset (px) past which the navbar turns sticky.
    pub sticky_threshold: f64,
    /// Page an empty path resolves to.
    pub index_page: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            navbar_id: "main-navbar".to_string(),
            toggle_id: "navbar-toggle".to_string(),
            mobile_menu_id: "navbar-mobile-menu".to_string(),
            desktop_link_selector: ".nav-link".to_string(),
            mobile_link_selector: ".navbar-mobile-link".to_string(),
            sticky_threshold: 100.0,
            index_page: "index.html".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct FooterConfig {
    pub year_element_id: String,
}

impl Default for FooterConfig {
    fn default() -> Self {
        Self {
            year_element_id: "currentYear".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TabGroupConfig {
    pub container_id: String,
    pub items: Vec<TabDescriptor>,
}

impl Default for TabGroupConfig {
    fn default() -> Self {
        Self {
            container_id: "product-tabs".to_string(),
            items: default_tabs(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct GalleryConfig {
    pub container_id: String,
    pub products: Vec<ProductRecord>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct LeadFormConfig {
    pub container_id: String,
    /// Storage key of the persisted lead array.
    pub storage_key: String,
    pub confirmation_message: String,
    #[serde(flatten)]
    pub settings: LeadFormSettings,
}

impl Default for LeadFormConfig {
    fn default() -> Self {
        Self {
            container_id: "lead-form-container".to_string(),
            storage_key: "mitsubishi_leads".to_string(),
            confirmation_message:
                "Thank you! Your request has been sent. Our team will contact you within 24 hours."
                    .to_string(),
            settings: LeadFormSettings::default(),
        }
    }
}

/// Configuration shipped with the site.
const DEFAULT_CONFIG: &str = r#"
[navigation]
sticky_threshold = 100.0
index_page = "index.html"

[footer]
year_element_id = "currentYear"

[[tabs]]
container_id = "product-tabs"
items = [
    { id = "passenger", label = "Passenger", active = true },
    { id = "canter", label = "Canter" },
    { id = "fuso", label = "Fuso" },
]

[[galleries]]
container_id = "passenger"

[[galleries.products]]
name = "Mitsubishi Xpander"
description = "Seven-seat MPV with a roomy cabin for the whole family."
price = "From Rp 265.000.000"
image = "assets/images/xpander.jpg"
detailUrl = "xpander.html"

[[galleries.products]]
name = "Mitsubishi Pajero Sport"
description = "Rugged SUV with Super Select 4WD-II."
price = "From Rp 565.000.000"
image = "assets/images/pajero-sport.jpg"
detailUrl = "pajero-sport.html"

[[galleries.products]]
name = "Mitsubishi Eclipse Cross"
description = "Compact crossover with a coupe silhouette."
price = "From Rp 445.000.000"
image = "assets/images/eclipse-cross.jpg"

[[galleries]]
container_id = "canter"

[[galleries.products]]
name = "Mitsubishi Canter FE 71"
description = "Light-duty truck for city logistics."
price = "From Rp 370.000.000"
image = "assets/images/canter-fe71.jpg"

[[galleries.products]]
name = "Mitsubishi Canter FE 84"
description = "Medium-duty truck with a longer wheelbase."
price = "From Rp 450.000.000"
image = "assets/images/canter-fe84.jpg"

[[galleries]]
container_id = "fuso"

[[galleries.products]]
name = "Mitsubishi Fuso FN 527"
description = "Heavy-duty 6x2 truck for long-haul cargo."
price = "From Rp 980.000.000"
image = "assets/images/fuso-fn527.jpg"

[[galleries.products]]
name = "Mitsubishi Fuso FM 517"
description = "Heavy-duty 4x2 truck for construction and distribution."
price = "From Rp 870.000.000"
image = "assets/images/fuso-fm517.jpg"

[lead_form]
container_id = "lead-form-container"
storage_key = "mitsubishi_leads"
"#;

impl SiteConfig {
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(contents)?)
    }
}

/// Load the embedded configuration, falling back to built-in defaults.
pub fn load_config() -> SiteConfig {
    match SiteConfig::from_toml(DEFAULT_CONFIG) {
        Ok(config) => {
            log::debug!(
                "Loaded site config: {} tab group(s), {} gallery(ies)",
                config.tabs.len(),
                config.galleries.len()
            );
            config
        }
        Err(e) => {
            log::error!("Embedded site config is invalid, using defaults: {}", e);
            SiteConfig::default()
        }
    }
}
