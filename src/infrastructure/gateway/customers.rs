#[cfg(test)]
#[path = "customers_test.rs"]
mod tests;

use std::time::Duration;

use anyhow::bail;
use anyhow::Result;

use super::GatewayClient;
use crate::domain::models::Customer;
use crate::domain::models::CustomerProfile;
use crate::domain::models::LoginRequest;
use crate::domain::models::LoginResponse;
use crate::domain::models::RegisterRequest;

impl GatewayClient {
    pub async fn register(&self, request: &RegisterRequest) -> Result<Customer> {
        let res = reqwest::Client::new()
            .post(format!("{url}/customers/register", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .json(request)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(status = res.status().as_u16(), "Registration failed");
            bail!("Registration failed");
        }

        return Ok(res.json::<Customer>().await?);
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        let res = reqwest::Client::new()
            .post(format!("{url}/customers/login", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .json(request)
            .send()
            .await?;

        let status = res.status().as_u16();
        if status == 401 {
            bail!("Incorrect email or password");
        }
        if !res.status().is_success() {
            tracing::error!(status = status, "Login failed");
            bail!("Login failed");
        }

        return Ok(res.json::<LoginResponse>().await?);
    }

    pub async fn get_customer(&self, customer_id: &str) -> Result<Customer> {
        let res = reqwest::Client::new()
            .get(format!("{url}/customers/{customer_id}", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                customer_id = customer_id,
                "Failed to get customer"
            );
            bail!("Failed to get customer {customer_id}");
        }

        return Ok(res.json::<Customer>().await?);
    }

    pub async fn update_customer(
        &self,
        customer_id: &str,
        profile: &CustomerProfile,
    ) -> Result<Customer> {
        let res = reqwest::Client::new()
            .put(format!("{url}/customers/{customer_id}", url = self.url))
            .timeout(Duration::from_millis(self.timeout.parse::<u64>()?))
            .json(profile)
            .send()
            .await?;

        if !res.status().is_success() {
            tracing::error!(
                status = res.status().as_u16(),
                customer_id = customer_id,
                "Failed to update customer"
            );
            bail!("Failed to update customer {customer_id}");
        }

        return Ok(res.json::<Customer>().await?);
    }
}
