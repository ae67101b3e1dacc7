//! Client module - typestate `CineClient` over the HTTP transport.

mod authenticated;
mod builder;
mod common;
mod guest;
pub mod http;

pub use builder::CineClientBuilder;
pub use common::CineClient;
pub use http::{AuthPolicy, HttpClient, NetworkHttpClient};
