use serde::{Deserialize, Serialize};

/// One selector button + content panel pair of a tab group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabDescriptor {
    /// Unique within the group; doubles as the panel element id.
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub active: bool,
}

impl TabDescriptor {
    pub fn new(id: impl Into<String>, label: impl Into<String>, active: bool) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            active,
        }
    }
}

/// Id of the tab shown first: the one flagged active, else the first one.
pub fn initial_active_id(tabs: &[TabDescriptor]) -> Option<&str> {
    tabs.iter()
        .find(|tab| tab.active)
        .or_else(|| tabs.first())
        .map(|tab| tab.id.as_str())
}

/// Vehicle categories of the dealership's product page.
pub fn default_tabs() -> Vec<TabDescriptor> {
    vec![
        TabDescriptor::new("passenger", "Passenger", true),
        TabDescriptor::new("canter", "Canter", false),
        TabDescriptor::new("fuso", "Fuso", false),
    ]
}
