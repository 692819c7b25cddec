use serde::Deserialize;
use serde::Serialize;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Completed,
    Failed,
    Refunded,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    pub booking_id: String,
    pub amount: f64,
    pub payment_method: String,
    pub status: PaymentStatus,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    #[serde(alias = "_id")]
    pub id: String,
    pub booking_id: String,
    pub amount: f64,
    pub payment_method: String,
    #[serde(default)]
    pub status: PaymentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
