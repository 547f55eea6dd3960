//! crime-proxy - A thin HTTP proxy in front of the Brottsplatskartan events API
//!
//! Four read-only routes forward to the provider and relay its events:
//! - `/crime` and `/crimes/locations` for a fixed city
//! - `/crimes/search` and `/crimes/latest` for a `city` query parameter
//!
//! Nothing is cached or persisted; each request makes at most one upstream call.

pub mod api;
pub mod config;
pub mod error;
pub mod types;
pub mod upstream;

pub use error::{Error, Result};
