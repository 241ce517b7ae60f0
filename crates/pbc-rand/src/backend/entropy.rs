// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use num_bigint::BigUint;

use crate::error::BackendFailure;
use crate::traits::{EntropySource, RandomBackend};
use crate::uniform::sample_below;

/// Backend drawing uniform integers from an [`EntropySource`].
///
/// `EntropyBackend<SystemEntropySource>` is the default backend of every
/// [`RandomSource`](crate::RandomSource).
///
/// # Example
///
/// ```rust
/// use num_bigint::BigUint;
/// use pbc_rand::{EntropyBackend, RandomBackend, SystemEntropySource};
///
/// let backend = EntropyBackend::new(SystemEntropySource {});
/// let limit = BigUint::from(97u32);
/// let value = backend.generate(&limit).expect("Failed to generate");
///
/// assert!(value < limit);
/// ```
#[derive(Debug, Default)]
pub struct EntropyBackend<E: EntropySource> {
    entropy: E,
}

impl<E: EntropySource> EntropyBackend<E> {
    /// Creates a backend reading from `entropy`.
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// Returns the underlying entropy source.
    pub fn entropy(&self) -> &E {
        &self.entropy
    }
}

impl<E: EntropySource> RandomBackend for EntropyBackend<E> {
    fn generate(&self, limit: &BigUint) -> Result<BigUint, BackendFailure> {
        Ok(sample_below(limit, |buf| self.entropy.fill_bytes(buf))?)
    }

    fn name(&self) -> &'static str {
        "entropy"
    }
}
