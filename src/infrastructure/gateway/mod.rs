mod bookings;
mod customers;
mod movies;
mod notifications;
mod payments;
mod seats;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

/// Thin client over the backend gateway. Endpoint wrappers are split per
/// backend service in the sibling modules.
pub struct GatewayClient {
    pub url: String,
    pub timeout: String,
}

impl Default for GatewayClient {
    fn default() -> GatewayClient {
        return GatewayClient {
            url: Config::get(ConfigKey::GatewayURL),
            timeout: Config::get(ConfigKey::RequestTimeout),
        };
    }
}

impl GatewayClient {
    pub fn with_url(url: String) -> GatewayClient {
        return GatewayClient {
            url,
            timeout: "200".to_string(),
        };
    }
}
