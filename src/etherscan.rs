// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Etherscan-compatible REST client for both scan collaborators.
//!
//! Implements [`TransferLogSource`] over `module=account&action=tokennfttx`
//! (the full ERC-721 transfer log of an address, sorted ascending) and
//! [`TransactionValueSource`] over
//! `module=proxy&action=eth_getTransactionByHash` (the native-currency
//! value of one transaction). The wire shapes owned here are the
//! Etherscan `{status, message, result}` envelope and its record formats;
//! everything leaves this module as strongly-typed domain values.
//!
//! # Examples
//!
//! ```rust,ignore
//! use holdscan::{EtherscanClient, EtherscanConfig, WalletScanner};
//!
//! let config = EtherscanConfig::new(std::env::var("ETHERSCAN_API_KEY")?);
//! let client = EtherscanClient::new(config)?;
//! let scanner = WalletScanner::new(client.clone(), client);
//! let report = scanner.scan_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045").await?;
//! ```

use std::str::FromStr;
use std::time::Duration;

use alloy_primitives::{Address, TxHash, U256};
use async_trait::async_trait;
use chrono::DateTime;
use serde::Deserialize;
use tracing::{debug, info};
use url::Url;

use crate::{
    EventProcessingError, ProviderError, TransactionValueSource, TransferEvent, TransferLogSource,
    WeiAmount,
};

/// Etherscan mainnet API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.etherscan.io/api";

/// In-band status code Etherscan uses for a successful account query.
const STATUS_OK: &str = "1";

/// Configuration for an [`EtherscanClient`].
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use holdscan::EtherscanConfig;
///
/// let config = EtherscanConfig::new("MY_API_KEY").with_timeout(Duration::from_secs(30));
/// ```
#[derive(Debug, Clone)]
pub struct EtherscanConfig {
    api_url: Url,
    api_key: String,
    timeout: Option<Duration>,
}

impl EtherscanConfig {
    /// Configuration against the mainnet endpoint ([`DEFAULT_API_URL`]).
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            api_key: api_key.into(),
            timeout: None,
        }
    }

    /// Point the client at a different Etherscan-compatible endpoint.
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }

    /// Apply a whole-request timeout to every HTTP call.
    ///
    /// Off by default: a slow value lookup only delays its own entry, it
    /// never fails the scan.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// The configured endpoint.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}

/// Client for an Etherscan-compatible indexer API.
///
/// Cheap to clone (the underlying `reqwest::Client` is an `Arc`), so one
/// client can serve as both sources of a
/// [`WalletScanner`](crate::WalletScanner).
#[derive(Debug, Clone)]
pub struct EtherscanClient {
    http: reqwest::Client,
    config: EtherscanConfig,
}

impl EtherscanClient {
    /// Build a client from `config`.
    pub fn new(config: EtherscanConfig) -> Result<Self, ProviderError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| ProviderError::request_failed("HTTP client construction", e))?;

        Ok(Self { http, config })
    }
}

/// The `{status, message, result}` envelope of Etherscan account queries.
///
/// `result` is left raw here: on an error status it carries a string, not
/// a record list.
#[derive(Debug, Deserialize)]
struct ApiEnvelope {
    status: String,
    message: String,
    result: serde_json::Value,
}

/// One `tokennfttx` record as Etherscan serializes it (all strings).
#[derive(Debug, Deserialize)]
struct RawNftTransfer {
    #[serde(rename = "contractAddress")]
    contract_address: String,
    #[serde(rename = "tokenID")]
    token_id: String,
    from: String,
    to: String,
    hash: String,
    #[serde(rename = "timeStamp")]
    timestamp: String,
    #[serde(rename = "tokenName")]
    token_name: String,
    #[serde(rename = "tokenSymbol")]
    token_symbol: String,
}

/// Envelope of `module=proxy` queries; `result` is the transaction object
/// or null when the hash is unknown.
#[derive(Debug, Deserialize)]
struct ProxyEnvelope {
    #[serde(default)]
    result: Option<ProxyTransaction>,
}

#[derive(Debug, Deserialize)]
struct ProxyTransaction {
    value: String,
}

impl TryFrom<RawNftTransfer> for TransferEvent {
    type Error = EventProcessingError;

    fn try_from(raw: RawNftTransfer) -> Result<Self, Self::Error> {
        let contract_address = parse_address_field(&raw.contract_address, "contractAddress")?;
        let token_id = U256::from_str(&raw.token_id)
            .map_err(|e| EventProcessingError::malformed_event("tokenID", e.to_string()))?;
        let from = parse_address_field(&raw.from, "from")?;
        let to = parse_address_field(&raw.to, "to")?;
        let tx_hash = raw
            .hash
            .parse::<TxHash>()
            .map_err(|e| EventProcessingError::malformed_event("hash", e.to_string()))?;
        let seconds = raw
            .timestamp
            .parse::<i64>()
            .map_err(|e| EventProcessingError::malformed_event("timeStamp", e.to_string()))?;
        let timestamp = DateTime::from_timestamp(seconds, 0).ok_or_else(|| {
            EventProcessingError::malformed_event("timeStamp", format!("{seconds} is out of range"))
        })?;

        Ok(TransferEvent {
            contract_address,
            token_id,
            from,
            to,
            tx_hash,
            timestamp,
            token_name: raw.token_name,
            token_symbol: raw.token_symbol,
        })
    }
}

fn parse_address_field(value: &str, field: &str) -> Result<Address, EventProcessingError> {
    value
        .parse::<Address>()
        .map_err(|e| EventProcessingError::malformed_event(field, e.to_string()))
}

/// Decode the `result` payload of a successful `tokennfttx` query.
///
/// Fails on the first record that is missing a field or carries one that
/// does not parse; a partial log is never returned.
fn parse_transfer_records(
    result: serde_json::Value,
) -> Result<Vec<TransferEvent>, EventProcessingError> {
    let records: Vec<serde_json::Value> = serde_json::from_value(result)
        .map_err(|e| ProviderError::malformed_response(format!("tokennfttx result: {e}")))?;

    let mut events = Vec::with_capacity(records.len());
    for record in records {
        let raw: RawNftTransfer = serde_json::from_value(record)
            .map_err(|e| EventProcessingError::malformed_event("record", e.to_string()))?;
        events.push(TransferEvent::try_from(raw)?);
    }
    Ok(events)
}

/// Decode the hex `value` field of a proxy transaction object.
fn parse_wei_value(value: &str) -> Result<WeiAmount, ProviderError> {
    let wei = U256::from_str(value).map_err(|e| {
        ProviderError::malformed_response(format!("transaction value {value:?}: {e}"))
    })?;
    Ok(WeiAmount::new(wei))
}

#[async_trait]
impl TransferLogSource for EtherscanClient {
    async fn fetch_transfer_log(
        &self,
        holder: Address,
    ) -> Result<Vec<TransferEvent>, EventProcessingError> {
        let address_param = format!("{holder:#x}");

        debug!(holder = %holder, url = %self.config.api_url, "Requesting ERC-721 transfer log");

        let response = self
            .http
            .get(self.config.api_url.clone())
            .query(&[
                ("module", "account"),
                ("action", "tokennfttx"),
                ("address", address_param.as_str()),
                ("startblock", "0"),
                ("endblock", "99999999"),
                ("sort", "asc"),
                ("apikey", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::request_failed("tokennfttx", e))?
            .error_for_status()
            .map_err(|e| ProviderError::request_failed("tokennfttx", e))?;

        let envelope: ApiEnvelope = response
            .json()
            .await
            .map_err(|e| ProviderError::malformed_response(format!("tokennfttx envelope: {e}")))?;

        if envelope.status != STATUS_OK {
            return Err(ProviderError::error_status(envelope.status, envelope.message).into());
        }

        let events = parse_transfer_records(envelope.result)?;

        info!(holder = %holder, event_count = events.len(), "Fetched transfer log");

        Ok(events)
    }
}

#[async_trait]
impl TransactionValueSource for EtherscanClient {
    async fn fetch_transaction_value(&self, tx_hash: TxHash) -> Result<WeiAmount, ProviderError> {
        let tx_param = format!("{tx_hash:#x}");

        let response = self
            .http
            .get(self.config.api_url.clone())
            .query(&[
                ("module", "proxy"),
                ("action", "eth_getTransactionByHash"),
                ("txhash", tx_param.as_str()),
                ("apikey", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::request_failed("eth_getTransactionByHash", e))?
            .error_for_status()
            .map_err(|e| ProviderError::request_failed("eth_getTransactionByHash", e))?;

        let envelope: ProxyEnvelope = response.json().await.map_err(|e| {
            ProviderError::malformed_response(format!("eth_getTransactionByHash envelope: {e}"))
        })?;

        match envelope.result {
            Some(tx) => parse_wei_value(&tx.value),
            None => Err(ProviderError::transaction_not_found(tx_param)),
        }
    }
}
