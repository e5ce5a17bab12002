// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Canonical ERC-721 transfer event and token identity types.
//!
//! A [`TransferEvent`] is one row of the chronological transfer log an
//! indexer returns for a wallet. Addresses and token ids are carried as
//! [`alloy_primitives`] types, so the case normalization the raw log
//! requires happens once, at the wire boundary: two addresses compare
//! equal iff their bytes do, regardless of how the source cased them.

use alloy_primitives::{Address, TxHash, U256};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One ERC-721 transfer from the chronological log of a wallet.
///
/// Events arrive sorted ascending by timestamp, ties broken by log order.
/// The same `tx_hash` can appear on several events (one transaction can
/// move several tokens).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    /// NFT collection contract.
    pub contract_address: Address,
    /// Raw token id within the contract, preserved verbatim.
    pub token_id: U256,
    /// Sender; [`Address::ZERO`] signifies a mint.
    pub from: Address,
    /// Recipient.
    pub to: Address,
    /// Hash of the transaction that carried this transfer.
    pub tx_hash: TxHash,
    /// Block timestamp of the transfer.
    pub timestamp: DateTime<Utc>,
    /// Collection display name, passed through unchanged.
    pub token_name: String,
    /// Collection display symbol, passed through unchanged.
    pub token_symbol: String,
}

impl TransferEvent {
    /// Identity of the token instance this event moved.
    pub fn token_key(&self) -> TokenKey {
        TokenKey {
            contract: self.contract_address,
            token_id: self.token_id,
        }
    }

    /// Whether this transfer originated at the zero address.
    pub fn is_mint(&self) -> bool {
        self.from == Address::ZERO
    }
}

/// Unique identity of one NFT instance: (contract address, token id).
///
/// `Ord` lets keys sit in a `BTreeSet` so held-token listings come out in a
/// stable order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TokenKey {
    /// NFT collection contract.
    pub contract: Address,
    /// Token id within the contract.
    pub token_id: U256,
}

impl std::fmt::Display for TokenKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:#x}:{}", self.contract, self.token_id)
    }
}

/// Direction of a transfer relative to the wallet being scanned.
///
/// A pure per-event decision: no state beyond the event and the holder
/// address is needed, and exactly one variant applies to every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransferKind {
    /// Transfer whose origin is the zero address; token creation.
    Mint,
    /// Transfer out of the scanned wallet.
    Sell,
    /// Transfer into the scanned wallet from another address.
    Buy,
}

impl TransferKind {
    /// Classify `event` relative to `holder`.
    ///
    /// Zero `from` wins over everything else, so a mint is `Mint` even
    /// though its `to` is the holder.
    pub fn classify(event: &TransferEvent, holder: Address) -> Self {
        if event.is_mint() {
            TransferKind::Mint
        } else if event.from == holder {
            TransferKind::Sell
        } else {
            TransferKind::Buy
        }
    }

    /// Upper-case label, as rendered by explorers.
    pub fn name(&self) -> &'static str {
        match self {
            TransferKind::Mint => "MINT",
            TransferKind::Sell => "SELL",
            TransferKind::Buy => "BUY",
        }
    }
}

impl std::fmt::Display for TransferKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
