// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use num_bigint::BigUint;

use crate::error::BackendFailure;
use crate::traits::RandomBackend;

/// A backend function bundled with the typed context it reads.
///
/// Function and context are installed and replaced together, so a caller of
/// [`RandomSource::generate`](crate::RandomSource::generate) never sees one
/// without the other.
///
/// # Example
///
/// ```rust
/// use std::sync::atomic::{AtomicU64, Ordering};
///
/// use num_bigint::BigUint;
/// use pbc_rand::{ContextBackend, RandomBackend};
///
/// let counter = ContextBackend::new(AtomicU64::new(0), |calls: &AtomicU64, limit: &BigUint| {
///     let n = calls.fetch_add(1, Ordering::Relaxed);
///     Ok(BigUint::from(n) % limit)
/// });
///
/// let limit = BigUint::from(10u32);
/// assert_eq!(counter.generate(&limit).unwrap(), BigUint::from(0u32));
/// assert_eq!(counter.generate(&limit).unwrap(), BigUint::from(1u32));
/// assert_eq!(counter.context().load(Ordering::Relaxed), 2);
/// ```
pub struct ContextBackend<C, F> {
    context: C,
    backend: F,
}

impl<C, F> ContextBackend<C, F>
where
    C: Send + Sync,
    F: Fn(&C, &BigUint) -> Result<BigUint, BackendFailure> + Send + Sync,
{
    /// Pairs `backend` with `context`.
    pub fn new(context: C, backend: F) -> Self {
        Self { context, backend }
    }

    /// Returns the context.
    pub fn context(&self) -> &C {
        &self.context
    }
}

impl<C, F> RandomBackend for ContextBackend<C, F>
where
    C: Send + Sync,
    F: Fn(&C, &BigUint) -> Result<BigUint, BackendFailure> + Send + Sync,
{
    fn generate(&self, limit: &BigUint) -> Result<BigUint, BackendFailure> {
        (self.backend)(&self.context, limit)
    }

    fn name(&self) -> &'static str {
        "context"
    }
}

impl<C, F> fmt::Debug for ContextBackend<C, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContextBackend([REDACTED])")
    }
}
