// SPDX-FileCopyrightText: 2026 Holdscan Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for collaborator providers.
//!
//! This module provides error types for the two external collaborators the
//! scan consumes: the transfer log provider and the transaction value
//! provider. A provider failure is a total failure of the call it occurred
//! in; how it propagates from there is the caller's policy (a failed log
//! fetch aborts the scan, a failed value lookup degrades to a default).

/// Errors that can occur when calling an external provider.
///
/// This error type captures transport failures, upstream error statuses,
/// and responses that could not be interpreted. It includes context about
/// what operation was being performed to aid in debugging.
///
/// # Examples
///
/// ```rust
/// use holdscan::ProviderError;
///
/// let error = ProviderError::TransactionNotFound {
///     tx_hash: "0x123...".to_string(),
/// };
/// println!("Error: {}", error);
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The request itself failed.
    ///
    /// This is a catch-all for transport failures that prevent a response
    /// from being obtained at all: network errors, timeouts, DNS failures,
    /// or a non-success HTTP status.
    #[error("Provider request failed during {operation}")]
    RequestFailed {
        /// Description of the operation that failed (e.g., "tokennfttx")
        operation: String,
        /// The underlying transport error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The upstream source reported an error status.
    ///
    /// Indexer APIs answer with an in-band status code; anything other than
    /// success means the result payload is not a transfer log and the whole
    /// fetch has failed.
    #[error("Provider returned error status {status}: {message}")]
    ErrorStatus {
        /// The in-band status code reported by the source
        status: String,
        /// The human-readable message accompanying the status
        message: String,
    },

    /// The response arrived but could not be interpreted.
    ///
    /// This occurs when the payload does not deserialize into the expected
    /// wire shape, or a field does not parse into its domain type.
    #[error("Malformed provider response: {details}")]
    MalformedResponse {
        /// Details about what could not be interpreted
        details: String,
    },

    /// Transaction was not found by the value provider.
    ///
    /// This typically means the transaction hash is unknown to the source,
    /// or the source has not indexed it yet.
    #[error("Transaction not found: {tx_hash}")]
    TransactionNotFound {
        /// The transaction hash that wasn't found
        tx_hash: String,
    },
}

impl ProviderError {
    /// Helper to create a `RequestFailed` error from any error type.
    pub fn request_failed(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        ProviderError::RequestFailed {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// Helper to create an `ErrorStatus` error.
    pub fn error_status(status: impl Into<String>, message: impl Into<String>) -> Self {
        ProviderError::ErrorStatus {
            status: status.into(),
            message: message.into(),
        }
    }

    /// Helper to create a `MalformedResponse` error with details.
    pub fn malformed_response(details: impl Into<String>) -> Self {
        ProviderError::MalformedResponse {
            details: details.into(),
        }
    }

    /// Helper to create a `TransactionNotFound` error for a hash.
    pub fn transaction_not_found(tx_hash: impl std::fmt::Display) -> Self {
        ProviderError::TransactionNotFound {
            tx_hash: tx_hash.to_string(),
        }
    }
}
