//! Shared types for the Cine client
//!
//! Wire models, auth DTOs, error codes and pagination metadata used by
//! `cine-client` and the shells built on top of it.

pub mod client;
pub mod error;
pub mod models;
pub mod response;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorCategory, ErrorCode};
pub use response::{ApiErrorBody, Pagination};
