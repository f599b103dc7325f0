//! fhe-bridge: client side of the FHE ledger
//!
//! Re-exports the payload types from `fhe-core` and the HTTP client from
//! `fhe-client`.

pub use fhe_client::{self, ClientError, FheClient};
pub use fhe_core::{self, routes, Ciphertext, CiphertextKey, ClientConfig, ZERO_KEY};
