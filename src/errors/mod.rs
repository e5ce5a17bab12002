// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the holdscan library.
//!
//! This module provides strongly-typed errors for all public APIs in
//! holdscan. It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling
//!   ([`AddressError`], [`EventProcessingError`], [`ProviderError`])
//! - **Unified error type** ([`HoldscanError`]) for convenience when you
//!   don't need to distinguish between error sources
//!
//! # Propagation policy
//!
//! Total failures abort a scan and produce nothing: an invalid wallet
//! address, a failed transfer log fetch, or a malformed transfer record.
//! Per-event value lookup failures are not represented here at all; they
//! are recovered locally during enrichment (the entry's value degrades to
//! zero and the failure is logged).
//!
//! # Examples
//!
//! ```rust,ignore
//! use holdscan::{HoldscanError, WalletScanner};
//!
//! async fn example(scanner: &WalletScanner<impl TransferLogSource, impl TransactionValueSource>) {
//!     match scanner.scan_address("0xd8dA6BF26964aF9D7eEd9e03E53415D37aA96045").await {
//!         Ok(report) => println!("{} tokens held", report.held_tokens.len()),
//!         Err(HoldscanError::Address(e)) => eprintln!("Bad input: {}", e),
//!         Err(e) => eprintln!("Scan failed: {}", e),
//!     }
//! }
//! ```

mod address;
mod events;
mod provider;

pub use address::AddressError;
pub use events::EventProcessingError;
pub use provider::ProviderError;

/// Unified error type for all holdscan operations.
///
/// This enum wraps all module-specific error types, providing a convenient
/// way to handle errors when you don't need to distinguish between
/// different error sources. All module-specific error types automatically
/// convert to `HoldscanError` via `From` implementations, so you can use
/// `?` to propagate errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum HoldscanError {
    /// Error validating the input wallet address.
    #[error("Address error: {0}")]
    Address(#[from] AddressError),

    /// Error fetching or decoding the transfer log.
    #[error("Event processing error: {0}")]
    Events(#[from] EventProcessingError),

    /// Error from an external provider.
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}
