//! Notification payloads exchanged with the host application.

use serde::{Deserialize, Serialize};

/// Detail of the outbound "filter changed" notification.
///
/// Serializes to `{ "filter": <id or null>, "selected": <bool> }`, the shape
/// the host's filtering logic reads from the event detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterChange {
    /// Filter identifier from the button's filter attribute.
    pub filter: Option<String>,
    /// Selected state after the click.
    pub selected: bool,
}

impl FilterChange {
    /// JSON form of the event detail.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "filter": self.filter,
            "selected": self.selected,
        })
    }
}
