#[cfg(test)]
#[path = "notifications_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;

use super::GatewayClient;
use crate::domain::models::Notification;

impl GatewayClient {
    pub async fn notifications_for_customer(
        &self,
        customer_id: &str,
    ) -> Result<Vec<Notification>> {
        let res = reqwest::Client::new()
            .get(format!(
                "{url}/notifications/customer/{customer_id}",
                url = self.url
            ))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                customer_id = customer_id,
                "Failed to list notifications"
            );
            bail!("Failed to list notifications for customer {customer_id}");
        }

        return Ok(res.json::<Vec<Notification>>().await?);
    }

    pub async fn mark_notification_read(&self, notification_id: &str) -> Result<()> {
        let res = reqwest::Client::new()
            .put(format!(
                "{url}/notifications/{notification_id}/status",
                url = self.url
            ))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .query(&[("status", "read")])
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                notification_id = notification_id,
                "Failed to mark notification as read"
            );
            bail!("Failed to mark notification {notification_id} as read");
        }

        return Ok(());
    }
}
