// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! High-level wallet scan: validate, fetch, resolve, enrich.
//!
//! [`WalletScanner`] wires the two collaborator sources to the ownership
//! replay and the enrichment fan-out. One scan is one user-initiated
//! request; scanners hold no per-scan state, so concurrent scans for
//! different addresses are fully independent.

use std::collections::BTreeSet;

use alloy_primitives::Address;
use serde::Serialize;
use tracing::{info, Instrument};

use crate::{
    enrich_transfers, resolve_held_transfers, spans, AddressError, EnrichedTransfer,
    HoldscanError, TokenKey, TransactionValueSource, TransferLogSource,
};

/// Validate a raw wallet address string at the boundary.
///
/// Runs before any provider call or resolution work, so a rejected input
/// produces no partial state. Parsing to [`Address`] is also the canonical
/// case normalization: any mix of upper and lower hex compares equal from
/// here on.
pub fn parse_wallet_address(input: &str) -> Result<Address, AddressError> {
    let trimmed = input.trim();
    trimmed
        .parse::<Address>()
        .map_err(|e| AddressError::invalid_format(trimmed, e.to_string()))
}

/// Result of a wallet scan.
#[derive(Debug, Clone, Serialize)]
pub struct WalletReport {
    /// The scanned wallet, normalized.
    pub holder: Address,
    /// Every token the wallet holds as of the last event in the log.
    pub held_tokens: BTreeSet<TokenKey>,
    /// Classified, value-enriched transfers of currently-held tokens, in
    /// original log order.
    pub transfers: Vec<EnrichedTransfer>,
}

/// Scanner combining a transfer log source and a transaction value source.
pub struct WalletScanner<L, V> {
    log_source: L,
    value_source: V,
}

impl<L, V> WalletScanner<L, V>
where
    L: TransferLogSource,
    V: TransactionValueSource,
{
    /// Creates a new `WalletScanner` over the given sources.
    pub fn new(log_source: L, value_source: V) -> Self {
        Self {
            log_source,
            value_source,
        }
    }

    /// Validate `input` and scan the wallet it names.
    ///
    /// # Errors
    ///
    /// [`HoldscanError::Address`] if the input is not a syntactically valid
    /// address; otherwise as [`scan`](Self::scan).
    pub async fn scan_address(&self, input: &str) -> Result<WalletReport, HoldscanError> {
        let holder = parse_wallet_address(input)?;
        self.scan(holder).await
    }

    /// Scan `holder`: fetch its transfer log, resolve current holdings,
    /// and enrich the surviving transfers with transaction values.
    ///
    /// # Errors
    ///
    /// A transfer log failure (provider error or malformed record) aborts
    /// the scan with no partial result. Per-transfer value lookup failures
    /// do not fail the scan; the affected entries carry a zero value.
    pub async fn scan(&self, holder: Address) -> Result<WalletReport, HoldscanError> {
        let span = spans::scan_wallet(holder);

        async move {
            info!(holder = %holder, "Starting wallet scan");

            let events = self.log_source.fetch_transfer_log(holder).await?;
            let held = resolve_held_transfers(&events, holder);
            let transfers = enrich_transfers(held.transfers, holder, &self.value_source).await;
            let held_tokens: BTreeSet<TokenKey> = held.ownership.into_keys().collect();

            info!(
                holder = %holder,
                held_tokens = held_tokens.len(),
                transfer_count = transfers.len(),
                "Finished wallet scan"
            );

            Ok(WalletReport {
                holder,
                held_tokens,
                transfers,
            })
        }
        .instrument(span)
        .await
    }
}
