// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Bounded retry for entropy sources with transient failures.
//!
//! Hardware generators can fail for a moment (e.g. a drained entropy pool)
//! and succeed on the next read. Retrying is the entropy source's business:
//! [`RandomSource`](crate::RandomSource) itself never retries, so any source
//! that needs it is wrapped here before being handed to a backend.

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Default number of attempts made by [`RetryingEntropySource::with_default_attempts`].
pub const DEFAULT_ATTEMPTS: usize = 10;

/// Wraps an [`EntropySource`] and retries failed reads.
///
/// A read is attempted at most `attempts` times. If every attempt fails,
/// [`EntropyError::EntropyNotAvailable`] is returned; no weaker source is
/// consulted.
#[derive(Debug)]
pub struct RetryingEntropySource<E: EntropySource> {
    inner: E,
    attempts: usize,
}

impl<E: EntropySource> RetryingEntropySource<E> {
    /// Creates a retrying wrapper.
    ///
    /// # Panics
    ///
    /// Panics if `attempts` is 0.
    pub fn new(inner: E, attempts: usize) -> Self {
        assert!(attempts > 0, "attempts must be at least 1");
        Self { inner, attempts }
    }

    /// Creates a retrying wrapper making [`DEFAULT_ATTEMPTS`] attempts.
    pub fn with_default_attempts(inner: E) -> Self {
        Self::new(inner, DEFAULT_ATTEMPTS)
    }

    /// Returns the wrapped source.
    pub fn inner(&self) -> &E {
        &self.inner
    }

    /// Returns the maximum number of attempts per read.
    pub fn attempts(&self) -> usize {
        self.attempts
    }
}

impl<E: EntropySource> EntropySource for RetryingEntropySource<E> {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        for attempt in 1..=self.attempts {
            match self.inner.fill_bytes(dest) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    log::trace!(
                        target: "pbc_rand::retry",
                        "entropy read failed (attempt {attempt}/{}): {err}",
                        self.attempts
                    );
                }
            }
        }

        log::warn!(
            target: "pbc_rand::retry",
            "entropy source failed after {} attempts",
            self.attempts
        );

        Err(EntropyError::EntropyNotAvailable)
    }
}
