// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Backends driven by a `rand_core` generator.
//!
//! [`SeededBackend`] is the reproducible one: ChaCha20 has a fixed,
//! documented output stream, so the same seed yields the same sequence of
//! values on every platform and across crate releases. This is what
//! golden-output tests of pairing operations install.
//!
//! Never install a seeded backend in production: anyone who knows the seed
//! can recompute every key and nonce derived from it.

use std::sync::{Mutex, PoisonError};

use num_bigint::BigUint;
use rand_chacha::ChaCha20Rng;
use rand_core::{RngCore, SeedableRng};

use crate::error::BackendFailure;
use crate::traits::RandomBackend;
use crate::uniform::sample_below;

/// Backend drawing uniform integers from any [`RngCore`] generator.
///
/// The generator is kept behind a mutex so concurrent callers each consume a
/// distinct part of its stream.
#[derive(Debug)]
pub struct RngBackend<R: RngCore + Send> {
    rng: Mutex<R>,
}

/// Deterministic ChaCha20 backend for reproducible tests.
pub type SeededBackend = RngBackend<ChaCha20Rng>;

impl<R: RngCore + Send> RngBackend<R> {
    /// Wraps `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Consumes the backend, returning the generator in its current state.
    pub fn into_inner(self) -> R {
        self.rng.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl SeededBackend {
    /// Creates a backend from a 32-byte ChaCha20 seed.
    ///
    /// # Example
    ///
    /// ```rust
    /// use num_bigint::BigUint;
    /// use pbc_rand::{RandomBackend, SeededBackend};
    ///
    /// let a = SeededBackend::from_seed([7u8; 32]);
    /// let b = SeededBackend::from_seed([7u8; 32]);
    /// let limit = BigUint::from(1u64 << 40);
    ///
    /// assert_eq!(a.generate(&limit).unwrap(), b.generate(&limit).unwrap());
    /// ```
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self::new(ChaCha20Rng::from_seed(seed))
    }

    /// Creates a backend from a `u64` seed, expanded as `rand_core` does.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self::new(ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: RngCore + Send> RandomBackend for RngBackend<R> {
    fn generate(&self, limit: &BigUint) -> Result<BigUint, BackendFailure> {
        // A panic while holding the lock leaves the generator in a valid
        // (merely advanced) state.
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);

        Ok(sample_below(limit, |buf| {
            rng.fill_bytes(buf);
            Ok(())
        })?)
    }

    fn name(&self) -> &'static str {
        "rng"
    }
}
