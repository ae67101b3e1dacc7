//! Review Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Highest rating a review may carry
pub const MAX_RATING: u8 = 5;

/// Review entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    #[serde(alias = "_id")]
    pub id: String,
    /// 0..=5
    pub rating: u8,
    #[serde(default)]
    pub comment: String,
    pub user_id: String,
    #[serde(default)]
    pub user_name: Option<String>,
    pub movie_id: String,
    #[serde(default)]
    pub movie_title: Option<String>,
    #[serde(default)]
    pub showtime_id: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Create review payload
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewCreate {
    #[validate(range(max = 5))]
    pub rating: u8,
    #[validate(length(min = 1, max = 2000))]
    pub comment: String,
    #[validate(length(min = 1))]
    pub user_id: String,
    #[validate(length(min = 1))]
    pub movie_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showtime_id: Option<String>,
}

/// Update review payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReviewUpdate {
    #[validate(range(max = 5))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<u8>,
    #[validate(length(min = 1, max = 2000))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(rating: u8, comment: &str) -> ReviewCreate {
        ReviewCreate {
            rating,
            comment: comment.into(),
            user_id: "u1".into(),
            movie_id: "m1".into(),
            showtime_id: None,
        }
    }

    #[test]
    fn test_rating_bounds() {
        assert!(create(0, "meh").validate().is_ok());
        assert!(create(MAX_RATING, "great").validate().is_ok());
        assert!(create(6, "too much").validate().is_err());
    }

    #[test]
    fn test_empty_comment_rejected() {
        let errors = create(4, "").validate().unwrap_err();
        assert!(errors.field_errors().contains_key("comment"));
    }

    #[test]
    fn test_update_validates_only_present_fields() {
        assert!(ReviewUpdate::default().validate().is_ok());
        let bad = ReviewUpdate {
            rating: Some(9),
            comment: None,
        };
        assert!(bad.validate().is_err());
    }
}
