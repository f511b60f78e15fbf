//! # Carrier Errors
//!
//! Error types for carrier service operations.
//!
//! A [`CarrierError`] covers everything that can go wrong talking to a
//! carrier web service: transport failures, authentication, malformed
//! requests, and vendor-reported faults. Vendor faults keep both the
//! vendor's error messages and the raw response body, since carrier fault
//! documents are often the only usable diagnostic.
//!
//! # Examples
//!
//! ```
//! use multiship::infrastructure::carriers::error::CarrierError;
//!
//! let error = CarrierError::timeout("request timed out after 5000ms");
//! assert!(error.is_retryable());
//!
//! let error = CarrierError::authentication("invalid site id");
//! assert!(!error.is_retryable());
//! ```

use crate::domain::value_objects::Vendor;
use thiserror::Error;

/// Error type for carrier service operations.
#[derive(Debug, Clone, Error)]
pub enum CarrierError {
    /// Request timed out.
    #[error("carrier timeout: {message}")]
    Timeout {
        /// Error message.
        message: String,
        /// Timeout duration in milliseconds.
        timeout_ms: Option<u64>,
    },

    /// Network or connection error.
    #[error("carrier connection error: {message}")]
    Connection {
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure.
    #[error("carrier authentication error: {message}")]
    Authentication {
        /// Error message.
        message: String,
    },

    /// Invalid request parameters.
    #[error("carrier invalid request: {message}")]
    InvalidRequest {
        /// Error message.
        message: String,
    },

    /// The carrier returned a fault document.
    #[error("carrier vendor error: {}", messages.join("; "))]
    Vendor {
        /// Vendor-returned error messages.
        messages: Vec<String>,
        /// Raw response body the messages were extracted from.
        raw_body: String,
    },

    /// The response could not be parsed.
    #[error("carrier protocol error: {message}")]
    Protocol {
        /// Error message.
        message: String,
        /// Raw response body, when available.
        raw_body: Option<String>,
    },

    /// The carrier does not support the requested operation.
    #[error("{vendor} does not support {operation}")]
    NotSupported {
        /// The carrier.
        vendor: Vendor,
        /// The unsupported operation.
        operation: String,
    },

    /// Internal adapter error.
    #[error("carrier internal error: {message}")]
    Internal {
        /// Error message.
        message: String,
    },
}

impl CarrierError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(message: impl Into<String>) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: None,
        }
    }

    /// Creates a timeout error with the configured duration.
    #[must_use]
    pub fn timeout_with_duration(message: impl Into<String>, timeout_ms: u64) -> Self {
        Self::Timeout {
            message: message.into(),
            timeout_ms: Some(timeout_ms),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(message: impl Into<String>) -> Self {
        Self::Authentication {
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }

    /// Creates a vendor fault from extracted messages and the raw body.
    #[must_use]
    pub fn vendor(messages: Vec<String>, raw_body: impl Into<String>) -> Self {
        Self::Vendor {
            messages,
            raw_body: raw_body.into(),
        }
    }

    /// Creates a protocol error without a captured body.
    #[must_use]
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
            raw_body: None,
        }
    }

    /// Creates a protocol error with the captured body.
    #[must_use]
    pub fn protocol_with_body(message: impl Into<String>, raw_body: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
            raw_body: Some(raw_body.into()),
        }
    }

    /// Creates a not-supported error.
    #[must_use]
    pub fn not_supported(vendor: Vendor, operation: impl Into<String>) -> Self {
        Self::NotSupported {
            vendor,
            operation: operation.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Returns true if this error is transient and may succeed on retry.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::Connection { .. })
    }

    /// Returns true if this error is caused by the request itself.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidRequest { .. } | Self::Authentication { .. } | Self::NotSupported { .. }
        )
    }

    /// Returns the raw response body, when this error captured one.
    #[must_use]
    pub fn raw_body(&self) -> Option<&str> {
        match self {
            Self::Vendor { raw_body, .. } => Some(raw_body),
            Self::Protocol { raw_body, .. } => raw_body.as_deref(),
            _ => None,
        }
    }

    /// Returns the vendor-reported messages, when present.
    #[must_use]
    pub fn vendor_messages(&self) -> &[String] {
        match self {
            Self::Vendor { messages, .. } => messages,
            _ => &[],
        }
    }
}

/// Result type for carrier operations.
pub type CarrierResult<T> = Result<T, CarrierError>;
