#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    GatewayURL,
    ReconnectAttempts,
    ReconnectDelay,
    ReconnectDelayMax,
    RequestTimeout,
    SelectedMovieID,
    SelectedShowtimeID,
    SessionFile,
    SocketURL,
    TicketPrice,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return Config::default(key);
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn unset(key: ConfigKey) {
        CONFIG.remove(&key.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let session_file = dirs::cache_dir()
            .unwrap()
            .join("matinee/session.yaml")
            .to_string_lossy()
            .to_string();

        let res = match key {
            ConfigKey::GatewayURL => "http://localhost:8000",
            ConfigKey::ReconnectAttempts => "5",
            ConfigKey::ReconnectDelay => "1000",
            ConfigKey::ReconnectDelayMax => "5000",
            ConfigKey::RequestTimeout => "10000",
            ConfigKey::SelectedMovieID => "",
            ConfigKey::SelectedShowtimeID => "",
            ConfigKey::SessionFile => &session_file,
            ConfigKey::SocketURL => "ws://localhost:8000",
            ConfigKey::TicketPrice => "100000",
        };

        return res.to_string();
    }
}
