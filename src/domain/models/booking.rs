use serde::Deserialize;
use serde::Serialize;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Paid,
    Cancelled,
}

/// Payload for creating a booking. Seats are seat numbers, matching what the
/// gateway's availability check expects.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    pub customer_id: String,
    pub movie_id: String,
    pub showtime_id: String,
    pub seats: Vec<String>,
    pub total_amount: f64,
    pub status: BookingStatus,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    #[serde(alias = "_id")]
    pub id: String,
    pub customer_id: String,
    pub movie_id: String,
    pub showtime_id: String,
    #[serde(default)]
    pub seats: Vec<String>,
    #[serde(default)]
    pub total_amount: f64,
    #[serde(default)]
    pub status: BookingStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
