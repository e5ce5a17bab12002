// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Collaborator traits for the two external data sources a scan consumes.
//!
//! This module provides a trait-based architecture for the scan pipeline's
//! inputs. Users can implement [`TransferLogSource`] and
//! [`TransactionValueSource`] to back a scan with any indexer or node.
//!
//! # Architecture
//!
//! The scan workflow:
//!
//! 1. **WalletScanner** validates the wallet address at the boundary
//! 2. Fetches the full chronological transfer log via
//!    [`TransferLogSource::fetch_transfer_log`]
//! 3. Replays the log to resolve current holdings (pure, no I/O)
//! 4. Resolves per-transaction values via
//!    [`TransactionValueSource::fetch_transaction_value`], one concurrent
//!    request per surviving event
//!
//! Both traits are object-safe, allowing runtime pluggability via
//! `Box<dyn TransferLogSource>` / `Box<dyn TransactionValueSource>`.
//! [`EtherscanClient`](crate::EtherscanClient) implements both against an
//! Etherscan-compatible REST API;
//! [`RpcValueSource`](crate::RpcValueSource) implements the value side
//! directly over JSON-RPC.
//!
//! # Failure semantics
//!
//! A [`TransferLogSource`] failure is total: without a complete log there
//! is nothing to replay, so the scan aborts. A [`TransactionValueSource`]
//! failure is local to one lookup; the enricher substitutes a default and
//! carries on. Neither trait retries.

use alloy_primitives::{Address, TxHash};
use async_trait::async_trait;

use crate::{EventProcessingError, ProviderError, TransferEvent, WeiAmount};

/// Source of the raw chronological transfer log for a wallet.
#[async_trait]
pub trait TransferLogSource: Send + Sync {
    /// Fetch every ERC-721 transfer that involved `holder`, sorted
    /// ascending by timestamp (ties broken by log order).
    ///
    /// # Errors
    ///
    /// Fails with [`EventProcessingError::Provider`] if the upstream source
    /// reports an error status or is unreachable, and with
    /// [`EventProcessingError::MalformedEvent`] if any record is missing a
    /// required field: a partial log would silently corrupt the ownership
    /// replay, so no partial result is ever returned.
    async fn fetch_transfer_log(
        &self,
        holder: Address,
    ) -> Result<Vec<TransferEvent>, EventProcessingError>;
}

/// Source of the native-currency value carried by a transaction.
#[async_trait]
pub trait TransactionValueSource: Send + Sync {
    /// Fetch the native-currency value of the transaction `tx_hash`, in
    /// wei (the smallest currency unit).
    ///
    /// # Errors
    ///
    /// Fails with [`ProviderError`] if the transaction cannot be found or
    /// the upstream source is unreachable.
    async fn fetch_transaction_value(&self, tx_hash: TxHash) -> Result<WeiAmount, ProviderError>;
}
