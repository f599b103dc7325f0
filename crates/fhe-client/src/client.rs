//! HTTP client for the FHE ledger server

use std::time::Instant;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;

use fhe_core::{
    routes, Ciphertext, ClientConfig, DecryptRequest, EncryptRequest, Fhe8AddRequest,
    TransferRequest, ViewResponse, WithdrawRequest, ZeroInsertRequest,
};

use crate::error::{ClientError, Result};
use crate::metrics::{record_request, Outcome};

/// Client for the FHE server's JSON routes.
///
/// Every call is a single POST with no retry and no timeout. `insert_zero`
/// and `encrypt` log failures and return normally; every other operation
/// logs and returns the error. Use [`FheClient::try_insert_zero`] and
/// [`FheClient::try_encrypt`] when the caller needs to see the failure.
#[derive(Clone)]
pub struct FheClient {
    http: Client,
    config: ClientConfig,
}

impl FheClient {
    /// Create a new client for the given server config
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Server config this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Seed the server's encrypted zero. Failures are logged, not returned.
    pub async fn insert_zero(&self) {
        match self.try_insert_zero().await {
            Ok(()) => tracing::info!(route = routes::POST, "Successfully posted value"),
            Err(e) => tracing::error!(route = routes::POST, error = %e, "Error posting value"),
        }
    }

    /// Seed the server's encrypted zero, returning any failure
    pub async fn try_insert_zero(&self) -> Result<()> {
        self.post(routes::POST, &ZeroInsertRequest::default())
            .await
            .map(drop)
    }

    /// Encrypt `value` server-side and store it under `ciphertext`.
    /// Failures, including an out-of-range value, are logged, not returned.
    ///
    /// The server decodes `value` as a u64. Anything above `u64::MAX` is
    /// rejected before sending rather than truncated, and negative values
    /// are not representable here (the server would refuse them anyway).
    pub async fn encrypt(&self, value: u128, ciphertext: Ciphertext) {
        match self.try_encrypt(value, ciphertext).await {
            Ok(()) => tracing::info!(route = routes::POST, "Successfully posted value"),
            Err(e) => tracing::error!(route = routes::POST, error = %e, "Error posting value"),
        }
    }

    /// Like [`Self::encrypt`], but returns the failure, including
    /// [`fhe_core::Error::ValueOutOfRange`] for values above `u64::MAX`
    pub async fn try_encrypt(&self, value: u128, ciphertext: Ciphertext) -> Result<()> {
        let request = EncryptRequest::new(ciphertext, value)?;
        self.post(routes::POST, &request).await.map(drop)
    }

    /// Move `transfer_value` from the sender's balance to the recipient's
    pub async fn transfer(
        &self,
        sender_key: Ciphertext,
        recipient_key: Ciphertext,
        transfer_value: Ciphertext,
    ) -> Result<()> {
        let request = TransferRequest {
            sender_key,
            recipient_key,
            transfer_value,
        };

        let result = self.post_logged(routes::TRANSFER, &request).await;
        match &result {
            Ok(_) => tracing::info!("Successfully processed transfer"),
            Err(e) => tracing::error!(error = %e, "Transfer request failed"),
        }
        result.map(drop)
    }

    /// Homomorphic 8-bit add of `lhs_key` and `rhs_key` into `result_key`
    pub async fn fhe8add(
        &self,
        lhs_key: Ciphertext,
        rhs_key: Ciphertext,
        result_key: Ciphertext,
    ) -> Result<()> {
        let request = Fhe8AddRequest {
            lhs_key,
            rhs_key,
            result_key,
        };

        let result = self.post_logged(routes::FHE8_ADD, &request).await;
        match &result {
            Ok(_) => tracing::info!("Successfully processed fhe8 add"),
            Err(e) => tracing::error!(error = %e, "Fhe8 add request failed"),
        }
        result.map(drop)
    }

    /// Decrypt the value stored under `key`
    pub async fn decrypt(&self, key: Ciphertext) -> Result<u64> {
        let result: Result<ViewResponse> = self
            .post_json(routes::DECRYPT, &DecryptRequest { key })
            .await;
        match &result {
            Ok(view) => tracing::debug!(result = view.result, "Decrypted value"),
            Err(e) => tracing::error!(error = %e, "Decrypt request failed"),
        }
        result.map(|view| view.result)
    }

    /// Withdraw the amount stored under `amount` from `key`, returning the
    /// new plaintext balance. The server withdraws nothing if the balance is short.
    pub async fn withdraw(&self, key: Ciphertext, amount: Ciphertext) -> Result<u64> {
        let request = WithdrawRequest { key, value: amount };
        let result: Result<ViewResponse> = self.post_json(routes::WITHDRAW, &request).await;
        match &result {
            Ok(view) => tracing::info!(balance = view.result, "Successfully processed withdraw"),
            Err(e) => tracing::error!(error = %e, "Withdraw request failed"),
        }
        result.map(|view| view.result)
    }

    /// Like [`Self::post`], dumping the request body at debug level first
    async fn post_logged<T: Serialize>(
        &self,
        route: &'static str,
        body: &T,
    ) -> Result<reqwest::Response> {
        if tracing::enabled!(tracing::Level::DEBUG) {
            let pretty = serde_json::to_string_pretty(body)?;
            tracing::debug!(route, request = %pretty, "Sending request");
        }
        self.post(route, body).await
    }

    /// POST a JSON body and decode a JSON response
    async fn post_json<T: Serialize, R: DeserializeOwned>(
        &self,
        route: &'static str,
        body: &T,
    ) -> Result<R> {
        let resp = self.post_logged(route, body).await?;
        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes)
            .map_err(|e| ClientError::InvalidResponse(format!("{}: {}", route, e)))
    }

    /// POST a JSON body; any non-2xx status becomes [`ClientError::Server`]
    async fn post<T: Serialize>(&self, route: &'static str, body: &T) -> Result<reqwest::Response> {
        let url = self.config.url(route);
        let start = Instant::now();

        let resp = match self.http.post(&url).json(body).send().await {
            Ok(resp) => resp,
            Err(e) => {
                record_request(route, Outcome::NetworkError, start.elapsed());
                return Err(e.into());
            }
        };

        if !resp.status().is_success() {
            record_request(route, Outcome::ServerError, start.elapsed());
            return Err(ClientError::Server {
                status: resp.status().as_u16(),
                message: resp.text().await.unwrap_or_default(),
            });
        }

        record_request(route, Outcome::Success, start.elapsed());
        tracing::debug!(route, status = resp.status().as_u16(), "Request succeeded");
        Ok(resp)
    }
}

impl Default for FheClient {
    fn default() -> Self {
        Self::new(ClientConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fhe_core::ZERO_KEY;

    #[test]
    fn test_default_client_targets_localhost() {
        let client = FheClient::default();
        assert_eq!(client.config().url(routes::FHE8_ADD), "http://localhost:3000/fhe8add");
    }

    #[test]
    fn test_custom_base_url() {
        let client = FheClient::new(ClientConfig::new("http://127.0.0.1:9999/"));
        assert_eq!(client.config().url(routes::DECRYPT), "http://127.0.0.1:9999/decrypt");
    }

    #[tokio::test]
    async fn test_oversized_value_rejected_before_sending() {
        // Nothing listens here; a network attempt would yield Http, not Core
        let client = FheClient::new(ClientConfig::new("http://127.0.0.1:1"));
        let err = client
            .try_encrypt(u128::from(u64::MAX) + 1, Ciphertext::from_key(ZERO_KEY))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            ClientError::Core(fhe_core::Error::ValueOutOfRange(_))
        ));
    }

    #[tokio::test]
    async fn test_oversized_value_swallowed_by_encrypt() {
        let client = FheClient::new(ClientConfig::new("http://127.0.0.1:1"));
        client
            .encrypt(u128::MAX, Ciphertext::from_key(ZERO_KEY))
            .await;
    }
}
