// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for holdscan integration tests
//!
//! Provides mock implementations of the collaborator traits to enable
//! testing without a real indexer or node.

// Not every test binary uses every helper
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use alloy_primitives::{address, Address, TxHash, U256};
use async_trait::async_trait;
use chrono::DateTime;
use holdscan::{
    EventProcessingError, ProviderError, TransactionValueSource, TransferEvent, TransferLogSource,
    WeiAmount,
};

/// Wallet the scenarios scan for.
pub const HOLDER: Address = address!("aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa");
/// Counterparty wallet.
pub const OTHER: Address = address!("bbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbbb");
/// NFT collection the scenarios trade in.
pub const CONTRACT: Address = address!("1111111111111111111111111111111111111111");

/// Initialize test tracing once; respects `RUST_LOG`.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

/// Deterministic transaction hash from a single byte.
pub fn hash(byte: u8) -> TxHash {
    TxHash::repeat_byte(byte)
}

/// Build a transfer event; `seq` orders timestamps and names the tx hash.
pub fn transfer(token_id: u64, from: Address, to: Address, seq: u8) -> TransferEvent {
    TransferEvent {
        contract_address: CONTRACT,
        token_id: U256::from(token_id),
        from,
        to,
        tx_hash: hash(seq),
        timestamp: DateTime::from_timestamp(1_700_000_000 + i64::from(seq), 0).unwrap(),
        token_name: "Test Collection".to_string(),
        token_symbol: "TEST".to_string(),
    }
}

/// Mock TransferLogSource returning a canned log or a total failure.
///
/// Counts calls so tests can assert the boundary rejected bad input
/// before any fetch happened.
pub struct MockTransferLog {
    events: Vec<TransferEvent>,
    fail: bool,
    calls: AtomicUsize,
}

impl MockTransferLog {
    /// A source returning an empty log.
    pub fn new() -> Self {
        Self {
            events: Vec::new(),
            fail: false,
            calls: AtomicUsize::new(0),
        }
    }

    /// Set the log returned by every fetch.
    pub fn with_events(mut self, events: Vec<TransferEvent>) -> Self {
        self.events = events;
        self
    }

    /// A source whose every fetch fails with an upstream error status.
    pub fn failing() -> Self {
        Self {
            events: Vec::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of fetches issued against this source.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TransferLogSource for MockTransferLog {
    async fn fetch_transfer_log(
        &self,
        _holder: Address,
    ) -> Result<Vec<TransferEvent>, EventProcessingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(ProviderError::error_status("0", "NOTOK").into());
        }
        Ok(self.events.clone())
    }
}

/// Mock TransactionValueSource with per-hash values and optional per-hash
/// completion delays.
///
/// Delays let a test force lookups to complete in an order different from
/// the order they were issued in. A hash with no configured value fails
/// its lookup with `TransactionNotFound`.
pub struct MockValueSource {
    values: HashMap<TxHash, WeiAmount>,
    delays: HashMap<TxHash, Duration>,
}

impl MockValueSource {
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
            delays: HashMap::new(),
        }
    }

    /// Configure the wei value returned for `tx_hash`.
    pub fn with_value(mut self, tx_hash: TxHash, wei: u128) -> Self {
        self.values.insert(tx_hash, WeiAmount::new(U256::from(wei)));
        self
    }

    /// Delay the lookup of `tx_hash` by `delay` before answering.
    pub fn with_delay(mut self, tx_hash: TxHash, delay: Duration) -> Self {
        self.delays.insert(tx_hash, delay);
        self
    }
}

#[async_trait]
impl TransactionValueSource for MockValueSource {
    async fn fetch_transaction_value(&self, tx_hash: TxHash) -> Result<WeiAmount, ProviderError> {
        if let Some(delay) = self.delays.get(&tx_hash) {
            tokio::time::sleep(*delay).await;
        }
        self.values
            .get(&tx_hash)
            .copied()
            .ok_or_else(|| ProviderError::transaction_not_found(format!("{tx_hash:#x}")))
    }
}
