//! Data models
//!
//! Views of server-owned entities. Nothing here is persisted locally; every
//! list is fetched fresh and the server wins on conflicting writes.
//! IDs are opaque strings (`_id` is accepted as an alias).

pub mod chatbot;
pub mod employee;
pub mod movie;
pub mod product;
pub mod review;
pub mod role;
pub mod seat;
pub mod setting;
pub mod showtime;
pub mod user;

// Re-exports
pub use chatbot::*;
pub use employee::*;
pub use movie::*;
pub use product::*;
pub use review::*;
pub use role::*;
pub use seat::*;
pub use setting::*;
pub use showtime::*;
pub use user::*;
