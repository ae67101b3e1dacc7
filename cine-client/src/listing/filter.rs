//! Search and secondary filters

use chrono::NaiveDate;
use shared::models::{Employee, Movie, MovieStatus, Product, Review, Showtime, User};

/// Record that can be searched from a list screen
pub trait Searchable {
    /// Fields matched by the free-text search
    fn search_fields(&self) -> Vec<&str>;

    /// Value compared by [`ListFilter::Date`]
    fn filter_date(&self) -> Option<NaiveDate> {
        None
    }

    /// Value compared by [`ListFilter::Category`]
    fn filter_category(&self) -> Option<String> {
        None
    }

    /// Whether `wanted` names this record's category, ignoring ASCII case
    fn matches_category(&self, wanted: &str) -> bool {
        self.filter_category()
            .is_some_and(|value| value.eq_ignore_ascii_case(wanted))
    }

    /// Case-insensitive substring match on any search field
    ///
    /// `needle` must already be lowercased.
    fn matches_search(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(needle))
    }
}

/// Secondary filter ANDed with the search term
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFilter {
    Date(NaiveDate),
    /// Compared ignoring ASCII case
    Category(String),
}

impl ListFilter {
    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        match self {
            ListFilter::Date(date) => record.filter_date() == Some(*date),
            ListFilter::Category(category) => record.matches_category(category),
        }
    }
}

/// Normalize a raw search box value; whitespace-only becomes empty
pub fn normalize_search(search: &str) -> String {
    search.trim().to_lowercase()
}

/// Records matching the search term and the optional filter, in input order
pub fn filter_records<'a, T: Searchable>(
    records: &'a [T],
    search: &str,
    filter: Option<&ListFilter>,
) -> Vec<&'a T> {
    let needle = normalize_search(search);
    records
        .iter()
        .filter(|r| r.matches_search(&needle))
        .filter(|r| filter.is_none_or(|f| f.matches(*r)))
        .collect()
}

// ============================================================================
// Searchable models
// ============================================================================

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        fields.extend(self.phone.as_deref());
        fields
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    fn filter_category(&self) -> Option<String> {
        Some(self.role.as_str().to_string())
    }
}

impl Searchable for Employee {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.email.as_str()];
        fields.extend(self.cinema.as_deref());
        fields.extend(self.position.as_deref());
        fields
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        self.date_of_birth
    }

    fn filter_category(&self) -> Option<String> {
        self.shift.clone()
    }
}

impl Searchable for Movie {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.status.label()]
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        self.release_date
    }

    fn filter_category(&self) -> Option<String> {
        Some(self.status.as_str().to_string())
    }

    /// Any status spelling the backend uses is accepted ("Now Playing", "NOW_PLAYING")
    fn matches_category(&self, wanted: &str) -> bool {
        let wanted = MovieStatus::from(wanted);
        wanted != MovieStatus::Unknown && wanted == self.status
    }
}

impl Searchable for Review {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.comment.as_str()];
        fields.extend(self.user_name.as_deref());
        fields.extend(self.movie_title.as_deref());
        fields
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        self.created_at.map(|at| at.date_naive())
    }

    /// Reviews are filtered by star rating
    fn filter_category(&self) -> Option<String> {
        Some(self.rating.to_string())
    }
}

impl Searchable for Product {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str()]
    }
}

impl Searchable for Showtime {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = Vec::with_capacity(2);
        fields.extend(self.movie_title());
        fields.extend(self.hall.as_deref());
        fields
    }

    fn filter_date(&self) -> Option<NaiveDate> {
        Some(self.starts_at.date_naive())
    }

    fn filter_category(&self) -> Option<String> {
        Some(self.movie_id.clone())
    }
}
