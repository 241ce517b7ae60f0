// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when reading from an entropy source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EntropyError {
    /// Entropy source is unavailable or failed to generate random data.
    #[error("EntropyNotAvailable")]
    EntropyNotAvailable,
}

/// A backend could not produce a value for the requested limit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BackendFailure {
    /// The entropy source feeding the backend failed.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] EntropyError),

    /// The backend returned a value outside `[0, limit)`.
    #[error("backend returned a value outside [0, limit)")]
    OutOfRange,

    /// Backend-specific failure (I/O error, device gone, timeout, ...).
    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

/// Errors surfaced by [`RandomSource::generate`](crate::RandomSource::generate).
///
/// Both variants are fatal for the cryptographic operation that asked for
/// randomness: the operation must be abandoned without returning partial
/// output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// The requested limit was not a positive integer.
    #[error("DomainError: limit must be a positive integer")]
    DomainError,

    /// The active backend failed.
    #[error("BackendFailure: {0}")]
    BackendFailure(#[from] BackendFailure),
}
