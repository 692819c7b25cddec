#[cfg(test)]
#[path = "seats_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use serde::Deserialize;
use serde::Serialize;

use super::GatewayClient;
use crate::domain::models::Seat;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CheckSeatsRequest {
    showtime_id: String,
    seats: Vec<String>,
}

impl GatewayClient {
    pub async fn seats_for_showtime(&self, showtime_id: &str) -> Result<Vec<Seat>> {
        let res = reqwest::Client::new()
            .get(format!("{url}/seats/showtime/{showtime_id}", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                showtime_id = showtime_id,
                "Failed to list seats"
            );
            bail!("Failed to list seats for showtime {showtime_id}");
        }

        return Ok(res.json::<Vec<Seat>>().await?);
    }

    /// Asks the gateway whether the named seats are still free. A conflict
    /// comes back as a client error status, not as a response body.
    pub async fn check_seats(&self, showtime_id: &str, seats: &[String]) -> Result<()> {
        let req = CheckSeatsRequest {
            showtime_id: showtime_id.to_string(),
            seats: seats.to_vec(),
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/seats/check", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .json(&req)
            .send()
            .await?;

        let status = res.status().as_u16();
        if status == 400 {
            bail!("Some of the selected seats are no longer available");
        }
        if !res.status().is_success() {
            tracing::error!(
                status = status,
                showtime_id = showtime_id,
                "Seat availability check failed"
            );
            bail!("Seat availability check failed");
        }

        return Ok(());
    }
}
