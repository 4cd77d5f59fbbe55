use serde::{Deserialize, Serialize};

use crate::domain::a001_product::ProductOption;

/// Texts and select options of the lead-capture form.
///
/// Every field has a default so a partial override keeps the rest.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct LeadFormSettings {
    pub title: String,
    pub subtitle: String,
    pub submit_text: String,
    pub product_options: Vec<ProductOption>,
}

impl Default for LeadFormSettings {
    fn default() -> Self {
        Self {
            title: "Request a Quote & Test Drive".to_string(),
            subtitle: "Fill in the form below to get our best price offer or to book a test drive \
                       of the Mitsubishi vehicle of your choice."
                .to_string(),
            submit_text: "Send Request".to_string(),
            product_options: default_product_options(),
        }
    }
}

pub fn default_product_options() -> Vec<ProductOption> {
    [
        ("xpander", "Mitsubishi Xpander"),
        ("pajero-sport", "Mitsubishi Pajero Sport"),
        ("eclipse-cross", "Mitsubishi Eclipse Cross"),
        ("canter-fe71", "Mitsubishi Canter FE 71"),
        ("canter-fe84", "Mitsubishi Canter FE 84"),
        ("fuso-fn527", "Mitsubishi Fuso FN 527"),
        ("fuso-fm517", "Mitsubishi Fuso FM 517"),
    ]
    .into_iter()
    .map(|(value, label)| ProductOption::new(value, label))
    .collect()
}
