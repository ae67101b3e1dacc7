//! Movie Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;
use std::fmt;

/// Catalog status of a movie
///
/// The backend has used several spellings over time ("now_playing",
/// "NOW_PLAYING", "Now Playing"); all are accepted, anything else maps to
/// [`MovieStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum MovieStatus {
    NowPlaying,
    ComingSoon,
    Stopped,
    #[default]
    Unknown,
}

impl MovieStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MovieStatus::NowPlaying => "now_playing",
            MovieStatus::ComingSoon => "coming_soon",
            MovieStatus::Stopped => "stopped",
            MovieStatus::Unknown => "unknown",
        }
    }

    /// Human label for list badges
    pub const fn label(&self) -> &'static str {
        match self {
            MovieStatus::NowPlaying => "Now Playing",
            MovieStatus::ComingSoon => "Coming Soon",
            MovieStatus::Stopped => "Stopped",
            MovieStatus::Unknown => "Unknown",
        }
    }
}

impl From<&str> for MovieStatus {
    fn from(value: &str) -> Self {
        let normalized: String = value
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "nowplaying" | "showing" => MovieStatus::NowPlaying,
            "comingsoon" | "upcoming" => MovieStatus::ComingSoon,
            "stopped" | "ended" => MovieStatus::Stopped,
            _ => MovieStatus::Unknown,
        }
    }
}

impl From<String> for MovieStatus {
    fn from(value: String) -> Self {
        MovieStatus::from(value.as_str())
    }
}

impl From<MovieStatus> for String {
    fn from(status: MovieStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Movie catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub poster: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: MovieStatus,
    /// Duration in minutes
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Create movie payload
#[derive(Debug, Clone, Serialize, Deserialize, validator::Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieCreate {
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    pub status: MovieStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Update movie payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MovieUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MovieStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_spellings() {
        assert_eq!(MovieStatus::from("now_playing"), MovieStatus::NowPlaying);
        assert_eq!(MovieStatus::from("NOW_PLAYING"), MovieStatus::NowPlaying);
        assert_eq!(MovieStatus::from("Now Playing"), MovieStatus::NowPlaying);
        assert_eq!(MovieStatus::from("coming-soon"), MovieStatus::ComingSoon);
        assert_eq!(MovieStatus::from("Stopped"), MovieStatus::Stopped);
        assert_eq!(MovieStatus::from("archived"), MovieStatus::Unknown);
    }

    #[test]
    fn test_movie_deserialize_defaults() {
        let json = r#"{"_id":"m1","title":"Dune"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.status, MovieStatus::Unknown);
        assert!(movie.release_date.is_none());
    }

    #[test]
    fn test_movie_status_serializes_snake_case() {
        let json = serde_json::to_string(&MovieStatus::ComingSoon).unwrap();
        assert_eq!(json, "\"coming_soon\"");
    }
}
