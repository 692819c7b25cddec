use chrono::Local;
use chrono::SecondsFormat;
use serde::Deserialize;
use serde::Serialize;

/// The signed-in customer. Presence of a stored session implies
/// authenticated; there is no token or expiry beyond this identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub customer_id: String,
    pub saved_at: String,
}

impl Session {
    pub fn new(customer_id: &str) -> Session {
        return Session {
            customer_id: customer_id.to_string(),
            saved_at: Local::now().to_rfc3339_opts(SecondsFormat::Secs, false),
        };
    }

    /// The logical room the backend routes this customer's events to.
    pub fn room(&self) -> String {
        return format!("customer_{}", self.customer_id);
    }
}
