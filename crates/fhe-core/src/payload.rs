//! JSON request/response bodies for each server route

use serde::{Deserialize, Serialize};

use crate::ciphertext::{Ciphertext, CiphertextKey, ZERO_KEY};
use crate::{Error, Result};

/// Narrow a wide integer to the u64 the server decodes `value` as.
///
/// Values that do not fit are rejected rather than truncated.
pub fn narrow_value(value: u128) -> Result<u64> {
    u64::try_from(value).map_err(|_| Error::ValueOutOfRange(value))
}

/// Seeds the encrypted zero under [`ZERO_KEY`] (`/post`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZeroInsertRequest {
    pub key: CiphertextKey,
    pub value: u64,
}

impl Default for ZeroInsertRequest {
    fn default() -> Self {
        Self {
            key: ZERO_KEY,
            value: 0,
        }
    }
}

/// Encrypt a plaintext and store it under `key` (`/post`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncryptRequest {
    pub key: Ciphertext,
    pub value: u64,
}

impl EncryptRequest {
    pub fn new(key: Ciphertext, value: u128) -> Result<Self> {
        Ok(Self {
            key,
            value: narrow_value(value)?,
        })
    }
}

/// Conditional transfer between two encrypted balances (`/transfer`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    pub sender_key: Ciphertext,
    pub recipient_key: Ciphertext,
    pub transfer_value: Ciphertext,
}

/// 8-bit homomorphic addition (`/fhe8add`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fhe8AddRequest {
    pub lhs_key: Ciphertext,
    pub rhs_key: Ciphertext,
    pub result_key: Ciphertext,
}

/// Decrypt the ciphertext stored under `key` (`/decrypt`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecryptRequest {
    pub key: Ciphertext,
}

/// Withdraw the amount stored under `value` from the balance under `key` (`/withdraw`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WithdrawRequest {
    pub key: Ciphertext,
    pub value: Ciphertext,
}

/// Plaintext returned by `/decrypt` and `/withdraw`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewResponse {
    pub result: u64,
}
