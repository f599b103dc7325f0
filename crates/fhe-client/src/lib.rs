//! fhe-client: JSON-over-HTTP client for the FHE ledger server
//!
//! Builds request bodies from `fhe-core` payloads, POSTs them, and maps the
//! HTTP status to a result. All encryption happens server-side.

pub mod client;
pub mod error;
pub mod metrics;

pub use client::FheClient;
pub use error::ClientError;
