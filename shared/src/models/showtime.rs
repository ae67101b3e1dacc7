//! Showtime Model

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Movie, Seat};

/// Scheduled screening of a movie
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Showtime {
    #[serde(alias = "_id")]
    pub id: String,
    pub movie_id: String,
    /// Embedded movie when the backend populates it
    #[serde(default)]
    pub movie: Option<Movie>,
    #[serde(alias = "time", alias = "startTime")]
    pub starts_at: DateTime<Utc>,
    #[serde(default)]
    pub hall: Option<String>,
    /// Overrides the global ticket price when set
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub ticket_price: Option<Decimal>,
    #[serde(default)]
    pub seats: Vec<Seat>,
}

impl Showtime {
    pub fn movie_title(&self) -> Option<&str> {
        self.movie.as_ref().map(|m| m.title.as_str())
    }
}

/// Create showtime payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShowtimeCreate {
    #[validate(length(min = 1))]
    pub movie_id: String,
    pub starts_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hall: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ticket_price: Option<Decimal>,
}

/// Update showtime payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ShowtimeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1))]
    pub movie_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starts_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hall: Option<String>,
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub ticket_price: Option<Decimal>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showtime_with_embedded_movie() {
        let json = r#"{
            "_id": "s1",
            "movieId": "m1",
            "movie": {"_id": "m1", "title": "Alien", "status": "Now Playing"},
            "startsAt": "2026-10-16T20:30:00Z",
            "ticketPrice": 8.5,
            "seats": [{"row": "A", "column": 1, "status": "reserved"}]
        }"#;
        let showtime: Showtime = serde_json::from_str(json).unwrap();
        assert_eq!(showtime.movie_title(), Some("Alien"));
        assert_eq!(showtime.ticket_price, Some(Decimal::new(85, 1)));
        assert_eq!(showtime.seats.len(), 1);
    }

    #[test]
    fn test_showtime_time_alias() {
        let json = r#"{"id":"s2","movieId":"m2","time":"2026-10-17T18:00:00Z"}"#;
        let showtime: Showtime = serde_json::from_str(json).unwrap();
        assert!(showtime.ticket_price.is_none());
        assert!(showtime.movie.is_none());
    }
}
