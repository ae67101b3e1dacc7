//! API response types
//!
//! The REST backend is an external collaborator and answers with plain JSON
//! documents. Only two shapes are modeled here: the error body it returns on
//! failure, and the pagination metadata computed client-side.

use serde::{Deserialize, Serialize};

/// Error body returned by the backend on non-2xx responses
///
/// ```json
/// { "statusCode": 400, "message": ["rating must not be greater than 5"], "error": "Bad Request" }
/// ```
///
/// `message` is either a single string or a list of strings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status_code: Option<u16>,
    #[serde(default)]
    pub message: ErrorMessage,
    #[serde(default)]
    pub error: Option<String>,
}

/// Single or multiple error messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
    One(String),
    Many(Vec<String>),
}

impl Default for ErrorMessage {
    fn default() -> Self {
        Self::One(String::new())
    }
}

impl ApiErrorBody {
    /// Flattened human-readable message
    ///
    /// Falls back to the `error` field when `message` is empty.
    pub fn text(&self) -> String {
        let joined = match &self.message {
            ErrorMessage::One(s) => s.clone(),
            ErrorMessage::Many(list) => list.join("; "),
        };
        if joined.is_empty() {
            self.error.clone().unwrap_or_default()
        } else {
            joined
        }
    }
}

/// Pagination metadata
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Current page number (1-based)
    pub page: u32,
    /// Items per page
    pub per_page: u32,
    /// Total number of items
    pub total: u64,
    /// Total number of pages
    pub total_pages: u32,
}

impl Pagination {
    /// Create a new pagination
    ///
    /// `total_pages` is `ceil(total / per_page)`, and 0 when `per_page` is 0.
    pub fn new(page: u32, per_page: u32, total: u64) -> Self {
        let total_pages = if per_page == 0 {
            0
        } else {
            u32::try_from(total.div_ceil(per_page as u64)).unwrap_or(u32::MAX)
        };
        Self {
            page,
            per_page,
            total,
            total_pages,
        }
    }

    /// Index range of the current page inside the full collection
    ///
    /// Pages past the end yield an empty range.
    pub fn bounds(&self) -> std::ops::Range<usize> {
        let total = self.total as usize;
        let start = (self.page.saturating_sub(1) as usize)
            .saturating_mul(self.per_page as usize)
            .min(total);
        let end = start.saturating_add(self.per_page as usize).min(total);
        start..end
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn has_prev(&self) -> bool {
        self.page > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_total_pages() {
        assert_eq!(Pagination::new(1, 10, 0).total_pages, 0);
        assert_eq!(Pagination::new(1, 10, 1).total_pages, 1);
        assert_eq!(Pagination::new(1, 10, 10).total_pages, 1);
        assert_eq!(Pagination::new(1, 10, 23).total_pages, 3);
        assert_eq!(Pagination::new(1, 0, 23).total_pages, 0);
    }

    #[test]
    fn test_pagination_bounds() {
        assert_eq!(Pagination::new(1, 10, 23).bounds(), 0..10);
        assert_eq!(Pagination::new(3, 10, 23).bounds(), 20..23);
        assert_eq!(Pagination::new(4, 10, 23).bounds(), 23..23);
        assert_eq!(Pagination::new(0, 10, 23).bounds(), 0..10);
    }

    #[test]
    fn test_pagination_navigation() {
        let p = Pagination::new(2, 10, 23);
        assert!(p.has_next());
        assert!(p.has_prev());
        let last = Pagination::new(3, 10, 23);
        assert!(!last.has_next());
    }

    #[test]
    fn test_error_body_single_message() {
        let json = r#"{"statusCode":404,"message":"Movie not found","error":"Not Found"}"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.status_code, Some(404));
        assert_eq!(body.text(), "Movie not found");
    }

    #[test]
    fn test_error_body_message_list() {
        let json = r#"{"statusCode":400,"message":["email must be an email","password too short"]}"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.text(), "email must be an email; password too short");
    }

    #[test]
    fn test_error_body_falls_back_to_error_field() {
        let json = r#"{"error":"Unauthorized"}"#;
        let body: ApiErrorBody = serde_json::from_str(json).unwrap();
        assert_eq!(body.text(), "Unauthorized");
    }
}
