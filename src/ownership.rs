// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Ownership replay over a chronological transfer log.
//!
//! This is the stateful core of the crate: given the full transfer log for
//! a wallet, replay it in order to derive which tokens the wallet holds
//! right now, then filter the log down to the transfers that touched those
//! tokens. The replay is pure and synchronous: the map lives on the stack
//! of one call and is returned to the caller, never shared or persisted.

use std::collections::HashMap;

use alloy_primitives::Address;
use tracing::{debug, trace};

use crate::{spans, TokenKey, TransferEvent};

/// Current holder per token key, as of the last replayed event.
///
/// Invariant: at most one owner per [`TokenKey`] at any point in the
/// replay. Entries only ever attribute a key to the holder the replay ran
/// for; tokens held by anyone else are simply absent.
pub type OwnershipMap = HashMap<TokenKey, Address>;

/// Result of an ownership resolution run.
#[derive(Debug, Clone, Default)]
pub struct HeldTransfers {
    /// The subset of the input log whose tokens the holder currently owns,
    /// in original log order. Includes the mint/buy events that established
    /// current holdings and, for a re-acquired token, its interim sells.
    pub transfers: Vec<TransferEvent>,
    /// Final ownership state after the full replay.
    pub ownership: OwnershipMap,
}

/// Replay `events` in order and resolve the transfers relating to tokens
/// presently held by `holder`.
///
/// Single pass, O(n) in event count. `events` must be sorted ascending by
/// timestamp (ties broken by log order), which is the order indexers
/// return and [`TransferLogSource`](crate::TransferLogSource) guarantees.
///
/// Replay rules, per event:
/// - `to == holder` installs or reaffirms ownership of the event's token
///   key. Idempotent, and applies on mints too.
/// - `from == holder` removes the entry iff the key is currently
///   attributed to `holder`. A valid transfer never has `from == to`, so
///   the order of the two rules within one event is immaterial.
///
/// After the replay the *original* sequence is filtered, retaining events
/// whose key remained owned. A token bought and later sold disappears
/// entirely, buy and sell both; a token never owned contributes
/// nothing regardless of other wallets' activity on it.
pub fn resolve_held_transfers(events: &[TransferEvent], holder: Address) -> HeldTransfers {
    let span = spans::resolve_held_transfers(holder, events.len());
    let _guard = span.enter();

    let mut ownership = OwnershipMap::new();

    for event in events {
        let key = event.token_key();
        if event.to == holder {
            trace!(token = %key, "Ownership installed");
            ownership.insert(key, holder);
        }
        if event.from == holder && ownership.get(&key) == Some(&holder) {
            trace!(token = %key, "Ownership relinquished");
            ownership.remove(&key);
        }
    }

    let transfers: Vec<TransferEvent> = events
        .iter()
        .filter(|event| ownership.get(&event.token_key()) == Some(&holder))
        .cloned()
        .collect();

    debug!(
        holder = %holder,
        event_count = events.len(),
        held_tokens = ownership.len(),
        surviving_transfers = transfers.len(),
        "Resolved current holdings"
    );

    HeldTransfers {
        transfers,
        ownership,
    }
}
