// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for transfer log processing.
//!
//! This module provides error types for fetching and decoding the raw
//! transfer log. A malformed record fails the whole fetch rather than
//! being skipped: a silently dropped event would corrupt the ownership
//! replay that runs downstream.

use super::ProviderError;

/// Errors that can occur while fetching or decoding a transfer log.
///
/// # Examples
///
/// ```rust,ignore
/// use holdscan::{EventProcessingError, TransferLogSource};
///
/// match log_source.fetch_transfer_log(holder).await {
///     Ok(events) => println!("Fetched {} events", events.len()),
///     Err(EventProcessingError::MalformedEvent { field, .. }) => {
///         eprintln!("Bad record field: {}", field);
///     }
///     Err(e) => eprintln!("Other error: {}", e),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum EventProcessingError {
    /// A transfer record is missing a required field or carries one that
    /// does not parse.
    ///
    /// The whole log fetch fails on the first such record.
    #[error("Malformed transfer event ({field}): {details}")]
    MalformedEvent {
        /// Name of the offending wire field
        field: String,
        /// Details about why it could not be interpreted
        details: String,
    },

    /// Provider error while fetching the transfer log.
    ///
    /// This wraps [`ProviderError`] for upstream failures (transport,
    /// error status, undecodable response envelope).
    #[error("Provider error: {0}")]
    Provider(#[from] ProviderError),
}

impl EventProcessingError {
    /// Create a `MalformedEvent` error for a specific wire field.
    pub fn malformed_event(field: impl Into<String>, details: impl Into<String>) -> Self {
        EventProcessingError::MalformedEvent {
            field: field.into(),
            details: details.into(),
        }
    }
}
