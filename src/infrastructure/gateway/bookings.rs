#[cfg(test)]
#[path = "bookings_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;

use super::GatewayClient;
use crate::domain::models::Booking;
use crate::domain::models::BookingRequest;
use crate::domain::models::BookingStatus;

impl GatewayClient {
    pub async fn create_booking(&self, booking: &BookingRequest) -> Result<Booking> {
        let res = reqwest::Client::new()
            .post(format!("{url}/bookings", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .json(booking)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                showtime_id = booking.showtime_id,
                "Failed to create booking"
            );
            bail!("Failed to create booking");
        }

        return Ok(res.json::<Booking>().await?);
    }

    pub async fn get_booking(&self, booking_id: &str) -> Result<Booking> {
        let res = reqwest::Client::new()
            .get(format!("{url}/bookings/{booking_id}", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                booking_id = booking_id,
                "Failed to get booking"
            );
            bail!("Failed to get booking {booking_id}");
        }

        return Ok(res.json::<Booking>().await?);
    }

    pub async fn bookings_for_customer(&self, customer_id: &str) -> Result<Vec<Booking>> {
        let res = reqwest::Client::new()
            .get(format!("{url}/bookings/customer/{customer_id}", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                customer_id = customer_id,
                "Failed to list customer bookings"
            );
            bail!("Failed to list bookings for customer {customer_id}");
        }

        return Ok(res.json::<Vec<Booking>>().await?);
    }

    pub async fn update_booking_status(
        &self,
        booking_id: &str,
        status: BookingStatus,
    ) -> Result<()> {
        let status_value = serde_json::to_value(status)?;
        let res = reqwest::Client::new()
            .put(format!("{url}/bookings/{booking_id}/status", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .query(&[("status", status_value.as_str().unwrap_or_default())])
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                booking_id = booking_id,
                "Failed to update booking status"
            );
            bail!("Failed to update status for booking {booking_id}");
        }

        return Ok(());
    }
}
