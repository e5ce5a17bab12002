// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! JSON-RPC transaction value source.
//!
//! The indexer's proxy action is a pass-through to
//! `eth_getTransactionByHash`, so the same contract can be satisfied
//! directly against any Ethereum node. This source reads the `value`
//! field of the returned transaction; it needs no API key, only an RPC
//! endpoint.

use alloy_primitives::TxHash;
use alloy_provider::{Provider, RootProvider};
use alloy_rpc_types::TransactionTrait;
use async_trait::async_trait;
use tracing::debug;
use url::Url;

use crate::{ProviderError, TransactionValueSource, WeiAmount};

/// [`TransactionValueSource`] backed by an Ethereum JSON-RPC endpoint.
///
/// # Examples
///
/// ```rust,ignore
/// use holdscan::RpcValueSource;
///
/// let source = RpcValueSource::new_http("https://eth.llamarpc.com".parse()?);
/// let value = source.fetch_transaction_value(tx_hash).await?;
/// ```
#[derive(Debug, Clone)]
pub struct RpcValueSource {
    provider: RootProvider,
}

impl RpcValueSource {
    /// Wrap an existing provider.
    pub fn new(provider: RootProvider) -> Self {
        Self { provider }
    }

    /// Connect over HTTP to `url`.
    pub fn new_http(url: Url) -> Self {
        Self {
            provider: RootProvider::new_http(url),
        }
    }
}

#[async_trait]
impl TransactionValueSource for RpcValueSource {
    async fn fetch_transaction_value(&self, tx_hash: TxHash) -> Result<WeiAmount, ProviderError> {
        let tx = self
            .provider
            .get_transaction_by_hash(tx_hash)
            .await
            .map_err(|e| ProviderError::request_failed("eth_getTransactionByHash", e))?
            .ok_or_else(|| ProviderError::transaction_not_found(format!("{tx_hash:#x}")))?;

        let value = WeiAmount::new(tx.value());

        debug!(tx_hash = %tx_hash, value_wei = %value.as_u256(), "Fetched transaction value");

        Ok(value)
    }
}
