// Slowly API Client
// Copyright (C) 2025 tiagovla
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error types for the Slowly client

use reqwest::StatusCode;
use thiserror::Error;

/// Result type for Slowly operations
pub type Result<T> = std::result::Result<T, SlowlyError>;

/// Slowly client error type
#[derive(Error, Debug)]
pub enum SlowlyError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("not logged in, call login() with a valid token first")]
    NotAuthenticated,

    #[error("forbidden (status {status}): {message}")]
    Forbidden { status: u16, message: String },

    #[error("not found (status {status}): {message}")]
    NotFound { status: u16, message: String },

    #[error("rate limit exceeded")]
    RateLimit,

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl SlowlyError {
    /// Map a non-success HTTP status and its error body to an error kind.
    pub(crate) fn from_status(status: StatusCode, message: String) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Authentication(message),
            StatusCode::FORBIDDEN => Self::Forbidden {
                status: status.as_u16(),
                message,
            },
            StatusCode::NOT_FOUND => Self::NotFound {
                status: status.as_u16(),
                message,
            },
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimit,
            _ => Self::Api {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// Check if error is recoverable (should retry)
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Network(_) | Self::RateLimit => true,
            Self::Api { status, .. } => matches!(*status, 500 | 502),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let err = SlowlyError::from_status(StatusCode::UNAUTHORIZED, "bad token".into());
        assert!(matches!(err, SlowlyError::Authentication(_)));

        let err = SlowlyError::from_status(StatusCode::FORBIDDEN, "nope".into());
        assert!(matches!(err, SlowlyError::Forbidden { status: 403, .. }));

        let err = SlowlyError::from_status(StatusCode::NOT_FOUND, "gone".into());
        assert!(matches!(err, SlowlyError::NotFound { status: 404, .. }));

        let err = SlowlyError::from_status(StatusCode::TOO_MANY_REQUESTS, "slow down".into());
        assert!(matches!(err, SlowlyError::RateLimit));

        let err = SlowlyError::from_status(StatusCode::BAD_GATEWAY, "upstream".into());
        assert!(matches!(err, SlowlyError::Api { status: 502, .. }));
    }

    #[test]
    fn test_auth_failure_distinct_from_network() {
        // A rejected login must never look like a transport failure.
        let auth = SlowlyError::from_status(StatusCode::UNAUTHORIZED, "expired".into());
        assert!(!matches!(auth, SlowlyError::Network(_)));
        assert!(!auth.is_recoverable());
    }

    #[test]
    fn test_recoverable() {
        assert!(SlowlyError::RateLimit.is_recoverable());
        assert!(
            SlowlyError::Api {
                status: 502,
                message: String::new()
            }
            .is_recoverable()
        );
        assert!(
            !SlowlyError::Api {
                status: 400,
                message: String::new()
            }
            .is_recoverable()
        );
        assert!(!SlowlyError::NotAuthenticated.is_recoverable());
    }
}
