// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Concurrent value enrichment of a resolved transfer subset.
//!
//! For each surviving transfer, the native-currency value of its
//! originating transaction is resolved independently through a
//! [`TransactionValueSource`]. All lookups are issued concurrently via
//! `futures::join_all` and recombined preserving the original subset
//! order; each future writes only its own output slot, so completion
//! order never matters.
//!
//! Enrichment is best-effort per item, never all-or-nothing: a failed
//! lookup is logged and its entry's value degrades to zero; the remaining
//! entries are unaffected.

use alloy_primitives::Address;
use bigdecimal::BigDecimal;
use futures::future::join_all;
use serde::Serialize;
use tracing::{info, warn, Instrument};

use crate::{spans, TransactionValueSource, TransferEvent, TransferKind};

/// A transfer event augmented with its direction and the native-currency
/// value exchanged in the owning transaction.
#[derive(Debug, Clone, Serialize)]
pub struct EnrichedTransfer {
    /// Direction of the transfer relative to the scanned wallet.
    pub kind: TransferKind,
    /// The underlying transfer event.
    pub event: TransferEvent,
    /// Native-currency value of the owning transaction, in the base
    /// display unit (exact 18-decimal conversion). Zero when the lookup
    /// failed.
    pub value_native: BigDecimal,
}

/// Resolve the transaction value of every transfer in `transfers` and
/// classify each relative to `holder`.
///
/// One independent request per transfer, all issued concurrently; the
/// output vector is in the same order as the input. Per-item failures are
/// recovered locally with a zero value, so this function itself never
/// fails.
pub async fn enrich_transfers<V>(
    transfers: Vec<TransferEvent>,
    holder: Address,
    value_source: &V,
) -> Vec<EnrichedTransfer>
where
    V: TransactionValueSource + ?Sized,
{
    let span = spans::enrich_transfers(holder, transfers.len());

    async move {
        if transfers.is_empty() {
            return vec![];
        }

        info!(count = transfers.len(), "Resolving transaction values");

        let value_futures: Vec<_> = transfers
            .iter()
            .map(|event| {
                let tx_hash = event.tx_hash;
                async move {
                    match value_source.fetch_transaction_value(tx_hash).await {
                        Ok(amount) => amount.to_ether(),
                        Err(e) => {
                            warn!(
                                tx_hash = %tx_hash,
                                error = %e,
                                "Failed to resolve transaction value, defaulting to zero"
                            );
                            BigDecimal::from(0)
                        }
                    }
                }
                .instrument(spans::fetch_transaction_value(tx_hash))
            })
            .collect();

        // join_all keeps result slots in issue order regardless of when
        // each lookup completes
        let values = join_all(value_futures).await;

        transfers
            .into_iter()
            .zip(values)
            .map(|(event, value_native)| EnrichedTransfer {
                kind: TransferKind::classify(&event, holder),
                event,
                value_native,
            })
            .collect()
    }
    .instrument(span)
    .await
}
