// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Alexander Minges

//! Typed errors surfaced by the pure helpers.
//!
//! File-system work (asset sync, hashing, manifest loading) reports through
//! `anyhow` instead, so callers get context chains for I/O failures.

use thiserror::Error;

/// Errors returned by the library helpers.
#[derive(Debug, Error)]
pub enum Error {
    /// A helper received an argument outside its documented domain.
    #[error("invalid argument to {function}: {reason}")]
    InvalidArgument {
        function: &'static str,
        reason: String,
    },
    /// A symbolic asset name that is not part of the catalog.
    #[error("unknown asset name: {0:?}")]
    UnknownAsset(String),
    /// A value expected to serialize as a JSON object did not.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
    /// Text that could not be parsed as a calendar date.
    #[error("invalid date {input:?}: {reason}")]
    InvalidDate { input: String, reason: String },
    /// Unsupported ISO currency code.
    #[error("unsupported currency code: {0:?}")]
    UnknownCurrency(String),
    /// Serialization round trip failure.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn invalid_argument(function: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            function,
            reason: reason.into(),
        }
    }
}

/// Result alias for the library helpers.
pub type Result<T> = std::result::Result<T, Error>;
