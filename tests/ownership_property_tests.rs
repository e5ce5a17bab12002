// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for the ownership replay
//!
//! These tests use proptest to validate invariants of holdings resolution
//! across arbitrary interleavings of transfer activity.

mod helpers;

use alloy_primitives::Address;
use helpers::{transfer, HOLDER, OTHER};
use holdscan::{resolve_held_transfers, TransferEvent};
use proptest::prelude::*;

const THIRD: Address = Address::new([0xcc; 20]);

// Helper to generate one participant of a transfer
fn arb_party() -> impl Strategy<Value = Address> {
    prop_oneof![
        Just(Address::ZERO),
        Just(HOLDER),
        Just(OTHER),
        Just(THIRD),
    ]
}

// Helper to generate an arbitrary chronological log over a small pool of
// tokens and parties. A valid transfer never has from == to.
fn arb_log() -> impl Strategy<Value = Vec<TransferEvent>> {
    prop::collection::vec(
        (0u64..5, arb_party(), arb_party()).prop_filter("self-transfer", |(_, from, to)| from != to),
        0..24,
    )
    .prop_map(|moves| {
        moves
            .into_iter()
            .enumerate()
            .map(|(seq, (token_id, from, to))| transfer(token_id, from, to, seq as u8))
            .collect()
    })
}

proptest! {
    /// Property: every surviving transfer touches a token the holder
    /// currently owns, and every held token has its full history in the
    /// subset.
    #[test]
    fn prop_subset_is_exactly_the_history_of_held_tokens(events in arb_log()) {
        let held = resolve_held_transfers(&events, HOLDER);

        for event in &held.transfers {
            prop_assert_eq!(
                held.ownership.get(&event.token_key()),
                Some(&HOLDER),
                "surviving transfer on a token not currently held"
            );
        }

        for key in held.ownership.keys() {
            let raw_count = events.iter().filter(|e| e.token_key() == *key).count();
            let subset_count = held.transfers.iter().filter(|e| e.token_key() == *key).count();
            prop_assert_eq!(raw_count, subset_count, "partial history for a held token");
        }
    }

    /// Property: reaffirming ownership of an already-held token changes
    /// nothing about the final ownership state.
    #[test]
    fn prop_reaffirmation_is_idempotent(events in arb_log()) {
        let held = resolve_held_transfers(&events, HOLDER);

        for key in held.ownership.keys() {
            let mut extended = events.clone();
            let mut reaffirm = transfer(0, OTHER, HOLDER, extended.len() as u8);
            reaffirm.contract_address = key.contract;
            reaffirm.token_id = key.token_id;
            extended.push(reaffirm);

            let held_again = resolve_held_transfers(&extended, HOLDER);
            prop_assert_eq!(&held_again.ownership, &held.ownership);
        }
    }

    /// Property: selling a held token removes it, and its whole history,
    /// from the result.
    #[test]
    fn prop_final_sell_removes_token(events in arb_log()) {
        let held = resolve_held_transfers(&events, HOLDER);

        for key in held.ownership.keys() {
            let mut extended = events.clone();
            let mut sell = transfer(0, HOLDER, OTHER, extended.len() as u8);
            sell.contract_address = key.contract;
            sell.token_id = key.token_id;
            extended.push(sell);

            let held_after = resolve_held_transfers(&extended, HOLDER);
            prop_assert!(!held_after.ownership.contains_key(key));
            prop_assert!(held_after.transfers.iter().all(|e| e.token_key() != *key));
        }
    }

    /// Property: a log in which the holder never receives anything
    /// resolves to an empty subset, whatever the other parties did.
    #[test]
    fn prop_never_owned_is_excluded(
        moves in prop::collection::vec(
            (0u64..5, prop_oneof![Just(Address::ZERO), Just(OTHER), Just(THIRD)], prop_oneof![Just(OTHER), Just(THIRD)])
                .prop_filter("self-transfer", |(_, from, to)| from != to),
            0..24,
        )
    ) {
        let events: Vec<TransferEvent> = moves
            .into_iter()
            .enumerate()
            .map(|(seq, (token_id, from, to))| transfer(token_id, from, to, seq as u8))
            .collect();

        let held = resolve_held_transfers(&events, HOLDER);
        prop_assert!(held.transfers.is_empty());
        prop_assert!(held.ownership.is_empty());
    }

    /// Property: resolution is a pure function of its inputs: replaying
    /// the same log twice gives identical results.
    #[test]
    fn prop_resolution_is_deterministic(events in arb_log()) {
        let first = resolve_held_transfers(&events, HOLDER);
        let second = resolve_held_transfers(&events, HOLDER);

        prop_assert_eq!(first.transfers, second.transfers);
        prop_assert_eq!(first.ownership, second.ownership);
    }
}
