#[cfg(test)]
#[path = "notification_test.rs"]
mod tests;

use serde::Deserialize;
use serde::Serialize;

/// The unread sentinel is `unread`. Older notification services emitted
/// `pending` for the same state, so it is accepted as an alias on the way in
/// and written back as `unread`.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationStatus {
    #[default]
    #[serde(alias = "pending")]
    Unread,
    Read,
}

impl NotificationStatus {
    pub fn is_unread(&self) -> bool {
        return *self == NotificationStatus::Unread;
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(rename = "type", default)]
    pub notification_type: String,
    #[serde(default)]
    pub customer_id: String,
    pub content: String,
    #[serde(default)]
    pub status: NotificationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub booking_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Notification {
    pub fn new(id: &str, content: &str, status: NotificationStatus) -> Notification {
        return Notification {
            id: id.to_string(),
            content: content.to_string(),
            status,
            ..Notification::default()
        };
    }
}
