//! REST resource descriptors
//!
//! A [`Resource`] tells a [`crate::ResourceStore`] where its entity lives on
//! the server, which payload types go over the wire, and which calls carry
//! the bearer token.

use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::models::{
    Employee, EmployeeCreate, EmployeeUpdate, Movie, MovieCreate, MovieUpdate, Product,
    ProductCreate, ProductUpdate, Review, ReviewCreate, ReviewUpdate, Role, Showtime,
    ShowtimeCreate, ShowtimeUpdate, User, UserCreate, UserUpdate,
};
use urlencoding::encode;
use validator::Validate;

use crate::client::AuthPolicy;

/// Descriptor of one server collection
pub trait Resource: Send + Sync {
    type Record: DeserializeOwned + Clone + Send + Sync;
    type Create: Serialize + Validate + Send + Sync;
    type Update: Serialize + Validate + Send + Sync;

    /// Singular name used in log fields and messages
    const NAME: &'static str;

    /// Base path for create, update and delete (`POST path`, `PATCH path/{id}`)
    fn collection_path(&self) -> String;

    /// Path the full list is read from
    fn list_path(&self) -> String {
        self.collection_path()
    }

    /// Auth for reading the list
    fn list_auth(&self) -> AuthPolicy {
        AuthPolicy::Bearer
    }

    /// Auth for mutations
    fn write_auth(&self) -> AuthPolicy {
        AuthPolicy::Bearer
    }

    fn record_id(record: &Self::Record) -> &str;

    /// Single-record path; the id is percent-encoded as one path segment
    fn item_path(&self, id: &str) -> String {
        format!("{}/{}", self.collection_path(), encode(id))
    }
}

// ============================================================================
// Users
// ============================================================================

/// Users of one role (`GET /user/role/{role}`)
#[derive(Debug, Clone, Copy)]
pub struct Users {
    pub role: Role,
}

impl Users {
    pub fn new(role: Role) -> Self {
        Self { role }
    }
}

impl Resource for Users {
    type Record = User;
    type Create = UserCreate;
    type Update = UserUpdate;

    const NAME: &'static str = "user";

    fn collection_path(&self) -> String {
        "/user".into()
    }

    fn list_path(&self) -> String {
        format!("/user/role/{}", self.role.as_str())
    }

    fn record_id(record: &User) -> &str {
        &record.id
    }
}

// ============================================================================
// Employees
// ============================================================================

/// Staff directory (`/employees`)
///
/// Listing is authenticated unless built with [`Employees::public_listing`],
/// for deployments that expose the directory anonymously.
#[derive(Debug, Clone, Copy)]
pub struct Employees {
    list_auth: AuthPolicy,
}

impl Employees {
    pub fn new() -> Self {
        Self {
            list_auth: AuthPolicy::Bearer,
        }
    }

    pub fn public_listing() -> Self {
        Self {
            list_auth: AuthPolicy::None,
        }
    }
}

impl Default for Employees {
    fn default() -> Self {
        Self::new()
    }
}

impl Resource for Employees {
    type Record = Employee;
    type Create = EmployeeCreate;
    type Update = EmployeeUpdate;

    const NAME: &'static str = "employee";

    fn collection_path(&self) -> String {
        "/employees".into()
    }

    fn list_auth(&self) -> AuthPolicy {
        self.list_auth
    }

    fn record_id(record: &Employee) -> &str {
        &record.id
    }
}

// ============================================================================
// Catalog and reviews
// ============================================================================

#[derive(Debug, Clone, Copy, Default)]
pub struct Reviews;

impl Resource for Reviews {
    type Record = Review;
    type Create = ReviewCreate;
    type Update = ReviewUpdate;

    const NAME: &'static str = "review";

    fn collection_path(&self) -> String {
        "/review".into()
    }

    fn record_id(record: &Review) -> &str {
        &record.id
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Movies;

impl Resource for Movies {
    type Record = Movie;
    type Create = MovieCreate;
    type Update = MovieUpdate;

    const NAME: &'static str = "movie";

    fn collection_path(&self) -> String {
        "/movies".into()
    }

    fn list_auth(&self) -> AuthPolicy {
        AuthPolicy::None
    }

    fn record_id(record: &Movie) -> &str {
        &record.id
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Products;

impl Resource for Products {
    type Record = Product;
    type Create = ProductCreate;
    type Update = ProductUpdate;

    const NAME: &'static str = "product";

    fn collection_path(&self) -> String {
        "/products".into()
    }

    fn list_auth(&self) -> AuthPolicy {
        AuthPolicy::None
    }

    // id-less concessions are addressed by name
    fn record_id(record: &Product) -> &str {
        record.key()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Showtimes;

impl Resource for Showtimes {
    type Record = Showtime;
    type Create = ShowtimeCreate;
    type Update = ShowtimeUpdate;

    const NAME: &'static str = "showtime";

    fn collection_path(&self) -> String {
        "/showtimes".into()
    }

    fn list_auth(&self) -> AuthPolicy {
        AuthPolicy::None
    }

    fn record_id(record: &Showtime) -> &str {
        &record.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_paths() {
        let users = Users::new(Role::Employee);
        assert_eq!(users.list_path(), "/user/role/employee");
        assert_eq!(users.collection_path(), "/user");
        assert_eq!(users.item_path("u9"), "/user/u9");
        assert_eq!(users.list_auth(), AuthPolicy::Bearer);
    }

    #[test]
    fn test_employee_listing_policy() {
        assert_eq!(Employees::new().list_auth(), AuthPolicy::Bearer);
        assert_eq!(Employees::public_listing().list_auth(), AuthPolicy::None);
        assert_eq!(Employees::public_listing().write_auth(), AuthPolicy::Bearer);
    }

    #[test]
    fn test_catalog_is_public_to_read() {
        assert_eq!(Movies.list_auth(), AuthPolicy::None);
        assert_eq!(Movies.write_auth(), AuthPolicy::Bearer);
        assert_eq!(Reviews.list_path(), "/review");
        assert_eq!(Showtimes.item_path("s1"), "/showtimes/s1");
    }

    #[test]
    fn test_item_path_encodes_id() {
        assert_eq!(Products.item_path("Nachos #2"), "/products/Nachos%20%232");
        assert_eq!(Products.item_path("a/b?c"), "/products/a%2Fb%3Fc");
    }
}
