use serde::Deserialize;
use serde::Serialize;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    #[default]
    Available,
    /// Reserved by someone mid-checkout.
    Pending,
    Booked,
    Paid,
}

impl SeatStatus {
    pub fn is_selectable(&self) -> bool {
        return *self == SeatStatus::Available;
    }
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seat {
    #[serde(alias = "_id")]
    pub id: String,
    pub showtime_id: String,
    pub seat_number: String,
    #[serde(default)]
    pub status: SeatStatus,
    /// Absent when the backend row carries no price; a priced-at-zero seat
    /// is distinct from an unpriced one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub movie_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}
