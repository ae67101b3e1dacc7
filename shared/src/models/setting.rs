//! Settings Model (`GET/PATCH /setting`)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

fn default_currency() -> String {
    "EUR".to_string()
}

fn default_max_tickets() -> u32 {
    10
}

/// Cinema-wide settings
///
/// Keys this client does not know about are kept in `extra` so a PATCH
/// never drops them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(with = "rust_decimal::serde::float")]
    pub ticket_price: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_max_tickets")]
    pub max_tickets_per_booking: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Partial settings update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ticket_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tickets_per_booking: Option<u32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_defaults_and_extra_keys() {
        let json = r#"{"ticketPrice":9,"openingHour":"10:00"}"#;
        let settings: Settings = serde_json::from_str(json).unwrap();
        assert_eq!(settings.ticket_price, Decimal::from(9));
        assert_eq!(settings.currency, "EUR");
        assert_eq!(settings.max_tickets_per_booking, 10);
        assert_eq!(settings.extra.get("openingHour").unwrap(), "10:00");

        let back = serde_json::to_value(&settings).unwrap();
        assert_eq!(back["openingHour"], "10:00");
    }
}
