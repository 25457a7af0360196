//! Async client for the NHTSA vPIC vehicle manufacturer API.
//!
//! This crate owns the HTTP surface of the workspace: the [`VpicClient`],
//! the serde wire types for the vPIC response envelope, and the transport
//! configuration shared by every consumer. Domain modeling lives one layer
//! up in `mfrcat-core` — this crate returns raw [`wire`] records.
//!
//! Endpoints covered:
//! - `vehicles/getallmanufacturers` — the full manufacturer summary list
//! - `vehicles/getmanufacturerdetails/{id}` — one manufacturer's detail record

pub mod client;
pub mod error;
pub mod transport;
pub mod wire;

pub use client::VpicClient;
pub use error::Error;
pub use transport::TransportConfig;

/// Default production base URL for the vPIC API.
///
/// Only a default — the effective base URL is always injected through
/// configuration or flags.
pub const DEFAULT_BASE_URL: &str = "https://vpic.nhtsa.dot.gov/api/";
