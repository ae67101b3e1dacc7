//! Cine Client - state and data layer for the cinema booking front-end
//!
//! Provides the typestate REST client, the shared session context, a
//! generic cached resource store, client-side list filtering and pagination,
//! and the ticket purchase wizard.

pub mod booking;
pub mod client;
pub mod config;
pub mod credential;
pub mod error;
pub mod listing;
pub mod resource;
pub mod session;
pub mod store;
pub mod types;

pub use booking::{BookingError, BookingSession, BookingStep, BookingSummary};
pub use client::{AuthPolicy, CineClient, CineClientBuilder, HttpClient, NetworkHttpClient};
pub use config::ClientConfig;
pub use credential::{StoredToken, TokenStore};
pub use error::{ClientError, ClientResult};
pub use listing::{ListFilter, ListView, PageToken, PageView, Searchable};
pub use resource::{Employees, Movies, Products, Resource, Reviews, Showtimes, Users};
pub use session::SessionContext;
pub use store::{ResourceStore, StoreStatus};
pub use types::{Authenticated, ClientStatus, Guest, SessionPhase};

// Re-export shared types for convenience
pub use shared::client::{LoginResponse, RegisterRequest, UserInfo};
