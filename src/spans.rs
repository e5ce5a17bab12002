// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for holdscan operations.
//!
//! This module provides span creation functions following an orthogonal
//! design pattern where telemetry concerns are separated from business
//! logic. Instead of using `#[instrument]` attributes directly on
//! functions, each instrumented operation has a corresponding span helper
//! function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use alloy_primitives::{Address, TxHash};
use tracing::Span;

/// Create span for a full wallet scan.
///
/// This is the main public API entry point.
///
/// Parent: None (root span for this operation)
/// Children: resolve_held_transfers, enrich_transfers spans
#[inline]
pub(crate) fn scan_wallet(holder: Address) -> Span {
    tracing::info_span!("holdscan.scan_wallet", holder = %holder)
}

/// Create span for the ownership replay over a fetched transfer log.
///
/// Parent: scan_wallet span
/// Children: None (pure in-memory pass)
#[inline]
pub(crate) fn resolve_held_transfers(holder: Address, event_count: usize) -> Span {
    tracing::debug_span!(
        "holdscan.resolve_held_transfers",
        holder = %holder,
        event_count = event_count,
    )
}

/// Create span for the concurrent value enrichment of a transfer subset.
///
/// Parent: scan_wallet span
/// Children: fetch_transaction_value spans (one per transfer)
#[inline]
pub(crate) fn enrich_transfers(holder: Address, transfer_count: usize) -> Span {
    tracing::debug_span!(
        "holdscan.enrich_transfers",
        holder = %holder,
        transfer_count = transfer_count,
    )
}

/// Create span for a single transaction value lookup.
///
/// Parent: enrich_transfers span
/// Children: provider request
#[inline]
pub(crate) fn fetch_transaction_value(tx_hash: TxHash) -> Span {
    tracing::trace_span!("holdscan.fetch_transaction_value", tx_hash = %tx_hash)
}
