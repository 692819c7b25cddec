use strum::IntoEnumIterator;

use super::Config;
use super::ConfigKey;

#[test]
fn it_returns_defaults_for_unset_keys() {
    assert_eq!(Config::get(ConfigKey::GatewayURL), "http://localhost:8000");
    assert_eq!(Config::get(ConfigKey::ReconnectAttempts), "5");
    assert_eq!(Config::get(ConfigKey::SelectedMovieID), "");
}

#[test]
fn it_sets_and_unsets_values() {
    Config::set(ConfigKey::SelectedShowtimeID, "st-42");
    assert_eq!(Config::get(ConfigKey::SelectedShowtimeID), "st-42");

    Config::unset(ConfigKey::SelectedShowtimeID);
    assert_eq!(Config::get(ConfigKey::SelectedShowtimeID), "");
}

#[test]
fn it_uses_kebab_case_key_names() {
    for key in ConfigKey::iter() {
        let name = key.to_string();
        assert!(!name.is_empty());
        assert_eq!(name, name.to_lowercase());
        assert!(!name.contains('_'));
    }
}

#[test]
fn it_parses_numeric_defaults() {
    assert!(Config::default(ConfigKey::ReconnectDelay).parse::<u64>().is_ok());
    assert!(Config::default(ConfigKey::ReconnectDelayMax).parse::<u64>().is_ok());
    assert!(Config::default(ConfigKey::RequestTimeout).parse::<u64>().is_ok());
    assert!(Config::default(ConfigKey::TicketPrice).parse::<f64>().is_ok());
}
