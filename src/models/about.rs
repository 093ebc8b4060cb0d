//! About document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Optional gallery information shown next to the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AboutInfo {
    /// Vision statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vision: Option<String>,
    /// Mission statement.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mission: Option<String>,
    /// Link to the publisher's page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lenid_url: Option<String>,
}

impl AboutInfo {
    /// Reads the known fields from any JSON value.
    ///
    /// Fields that are missing, empty or not strings are left unset; a
    /// non-object value yields an empty `AboutInfo`.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            vision: field("vision"),
            mission: field("mission"),
            lenid_url: field("lenid_url"),
        }
    }

    /// Returns true if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.vision.is_none() && self.mission.is_none() && self.lenid_url.is_none()
    }
}
