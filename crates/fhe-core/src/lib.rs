//! fhe-core: Request types and configuration for the FHE ledger server
//!
//! The FHE server owns every ciphertext and performs all homomorphic
//! arithmetic. This crate only describes what gets sent to it:
//! - Payloads: JSON bodies for each server route
//! - Ciphertexts: opaque JSON values, passed through untouched
//! - Config: where the server lives
//!
//! ## Routes
//!
//! | Route | Payload | Response |
//! |-------|---------|----------|
//! | `/post` | [`ZeroInsertRequest`] or [`EncryptRequest`] | status only |
//! | `/transfer` | [`TransferRequest`] | status only |
//! | `/fhe8add` | [`Fhe8AddRequest`] | status only |
//! | `/decrypt` | [`DecryptRequest`] | [`ViewResponse`] |
//! | `/withdraw` | [`WithdrawRequest`] | [`ViewResponse`] |

mod ciphertext;
mod config;
mod error;
mod payload;

pub use ciphertext::{Ciphertext, CiphertextKey, ZERO_KEY};
pub use config::{ClientConfig, DEFAULT_BASE_URL, SERVER_URL_ENV};
pub use error::Error;
pub use payload::{
    narrow_value, DecryptRequest, EncryptRequest, Fhe8AddRequest, TransferRequest, ViewResponse,
    WithdrawRequest, ZeroInsertRequest,
};

pub type Result<T> = std::result::Result<T, Error>;

/// Server route paths
pub mod routes {
    /// Store an encrypted value under a key
    pub const POST: &str = "/post";

    /// Move an encrypted amount between two balances
    pub const TRANSFER: &str = "/transfer";

    /// Add two 8-bit ciphertexts into a result key
    pub const FHE8_ADD: &str = "/fhe8add";

    /// Decrypt the value stored under a key
    pub const DECRYPT: &str = "/decrypt";

    /// Subtract an encrypted amount from a balance and return the new balance
    pub const WITHDRAW: &str = "/withdraw";
}
