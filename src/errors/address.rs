// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for wallet address validation.
//!
//! Validation runs at the boundary, before any provider call or resolution
//! work starts, so a rejected address produces no partial state.

/// Errors that can occur validating a wallet address.
#[derive(Debug, thiserror::Error)]
pub enum AddressError {
    /// The input does not parse as a 20-byte hex address.
    #[error("Invalid wallet address {address:?}: {details}")]
    InvalidFormat {
        /// The rejected input, verbatim
        address: String,
        /// Details about why it was rejected
        details: String,
    },
}

impl AddressError {
    /// Create an `InvalidFormat` error for a rejected input.
    pub fn invalid_format(address: impl Into<String>, details: impl Into<String>) -> Self {
        AddressError::InvalidFormat {
            address: address.into(),
            details: details.into(),
        }
    }
}
