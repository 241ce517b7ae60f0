// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use num_bigint::BigUint;

use crate::error::{BackendFailure, EntropyError};

/// Trait for sources of cryptographically secure random bytes.
///
/// Implementations must be safe to share between threads: a single source
/// may serve every caller of a [`RandomSource`](crate::RandomSource).
pub trait EntropySource: Send + Sync {
    /// Fills the destination buffer with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source is
    /// unavailable or fails to generate random data.
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError>;
}

/// A strategy for producing uniform integers in `[0, limit)`.
///
/// Closures of shape `Fn(&BigUint) -> Result<BigUint, BackendFailure>`
/// implement this trait directly, so a capture can carry whatever auxiliary
/// data the backend needs.
pub trait RandomBackend: Send + Sync {
    /// Returns a value `v` with `0 <= v < limit`.
    ///
    /// `limit` is always positive: [`RandomSource`](crate::RandomSource)
    /// rejects non-positive limits before calling the backend.
    ///
    /// # Errors
    ///
    /// Returns a [`BackendFailure`] if no value can be produced.
    fn generate(&self, limit: &BigUint) -> Result<BigUint, BackendFailure>;

    /// Short human-readable name, used in log records.
    fn name(&self) -> &'static str {
        "custom"
    }
}

impl<F> RandomBackend for F
where
    F: Fn(&BigUint) -> Result<BigUint, BackendFailure> + Send + Sync,
{
    fn generate(&self, limit: &BigUint) -> Result<BigUint, BackendFailure> {
        self(limit)
    }

    fn name(&self) -> &'static str {
        "closure"
    }
}
