#[cfg(test)]
#[path = "payments_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;

use super::GatewayClient;
use crate::domain::models::Payment;
use crate::domain::models::PaymentRequest;

impl GatewayClient {
    pub async fn create_payment(&self, payment: &PaymentRequest) -> Result<Payment> {
        let res = reqwest::Client::new()
            .post(format!("{url}/payments", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .json(payment)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                booking_id = payment.booking_id,
                "Failed to create payment"
            );
            bail!("Failed to create payment");
        }

        return Ok(res.json::<Payment>().await?);
    }

    pub async fn payments_for_booking(&self, booking_id: &str) -> Result<Vec<Payment>> {
        let res = reqwest::Client::new()
            .get(format!("{url}/payments/booking/{booking_id}", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                booking_id = booking_id,
                "Failed to list booking payments"
            );
            bail!("Failed to list payments for booking {booking_id}");
        }

        return Ok(res.json::<Vec<Payment>>().await?);
    }
}
