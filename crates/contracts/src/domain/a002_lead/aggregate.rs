use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Contact/interest submission captured by the lead form.
///
/// Stored as one element of a JSON array in browser storage. Records are
/// only ever appended, never edited or removed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeadRecord {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub product_interest: String,

    /// Free text, empty when the visitor left it blank.
    #[serde(default)]
    pub message: String,

    pub submitted_at: DateTime<Utc>,
}

impl LeadRecord {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        product_interest: impl Into<String>,
        message: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            product_interest: product_interest.into(),
            message: message.into(),
            submitted_at,
        }
    }
}
