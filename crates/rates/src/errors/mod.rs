//! Error types for the rates crate.
//!
//! Every failure mode of a rate lookup is a [`RateError`] variant. Callers
//! decide the fallback policy; nothing in this crate panics or retries.

use thiserror::Error;

/// Errors that can occur while fetching an exchange rate.
///
/// All variants are recoverable from the caller's point of view: a failed
/// lookup means "no rate available right now", and the next call may succeed
/// once connectivity is restored. Failed lookups are never cached.
#[derive(Error, Debug)]
pub enum RateError {
    /// The request to the rate source timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The rate source answered with an error status or an unusable body.
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The rate source reported a structured error of its own
    /// (unknown currency code, invalid key, exhausted quota...).
    #[error("Rate API error: {error_type}")]
    ApiError {
        /// The `error-type` string reported by the API
        error_type: String,
    },

    /// The response parsed but carried a missing or non-positive rate.
    #[error("Invalid rate: {message}")]
    InvalidRate {
        /// Description of what was wrong with the rate value
        message: String,
    },

    /// A network error occurred while communicating with the rate source.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = RateError::Timeout {
            provider: "EXCHANGE_RATE_API".to_string(),
        };
        assert_eq!(format!("{}", error), "Timeout: EXCHANGE_RATE_API");

        let error = RateError::ProviderError {
            provider: "EXCHANGE_RATE_API".to_string(),
            message: "HTTP 500 Internal Server Error".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: EXCHANGE_RATE_API - HTTP 500 Internal Server Error"
        );

        let error = RateError::ApiError {
            error_type: "unsupported-code".to_string(),
        };
        assert_eq!(format!("{}", error), "Rate API error: unsupported-code");

        let error = RateError::InvalidRate {
            message: "conversion_rate is missing".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Invalid rate: conversion_rate is missing"
        );
    }
}
