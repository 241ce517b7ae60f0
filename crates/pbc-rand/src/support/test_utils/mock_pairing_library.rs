// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use std::sync::Arc;

use num_bigint::BigInt;
use num_traits::Zero;

use crate::backend::EntropyBackend;
use crate::error::RandomError;
use crate::hook::{HookContext, PairingRandomHook, RandomHookFn};
use crate::system::SystemEntropySource;
use crate::traits::RandomBackend;

/// Stand-in for an external pairing library's randomness plumbing.
///
/// Behaves like a C library would: while a hook is registered every draw
/// goes through it, the library itself cannot see failures, and the binding
/// checks [`HookContext::take_failure`] once the whole operation is done.
/// Without a hook it uses its own built-in generator.
pub struct MockPairingLibrary {
    order: BigInt,
    hook: Option<(RandomHookFn, Arc<HookContext>)>,
    internal: EntropyBackend<SystemEntropySource>,
}

impl MockPairingLibrary {
    /// Creates a library whose scalar field has the given group `order`.
    pub fn new(order: BigInt) -> Self {
        Self {
            order,
            hook: None,
            internal: EntropyBackend::new(SystemEntropySource {}),
        }
    }

    /// Returns whether a random hook is registered.
    pub fn has_hook(&self) -> bool {
        self.hook.is_some()
    }

    /// Draws one value in `[0, limit)` the way the library's internals do.
    pub fn draw(&self, limit: &BigInt) -> Result<BigInt, RandomError> {
        let mut out = BigInt::zero();
        self.raw_draw(&mut out, limit)?;
        self.finish()?;

        Ok(out)
    }

    /// Draws a random scalar in `[0, order)`.
    pub fn random_scalar(&self) -> Result<BigInt, RandomError> {
        self.draw(&self.order)
    }

    /// Multi-draw operation (e.g. key generation with blinding factors).
    ///
    /// All `count` draws happen before failures are checked, as they would
    /// inside a foreign library. Any failure discards the whole result.
    pub fn random_scalars(&self, count: usize) -> Result<Vec<BigInt>, RandomError> {
        let mut scalars = Vec::with_capacity(count);
        let mut internal_failure = None;

        for _ in 0..count {
            let mut out = BigInt::zero();
            if let Err(err) = self.raw_draw(&mut out, &self.order) {
                internal_failure.get_or_insert(err);
            }
            scalars.push(out);
        }

        self.finish()?;
        if let Some(err) = internal_failure {
            return Err(err);
        }

        Ok(scalars)
    }

    fn raw_draw(&self, out: &mut BigInt, limit: &BigInt) -> Result<(), RandomError> {
        match &self.hook {
            Some((hook, context)) => {
                hook(out, limit, context);
                Ok(())
            }
            None => {
                let limit = limit.to_biguint().ok_or(RandomError::DomainError)?;
                if limit.is_zero() {
                    return Err(RandomError::DomainError);
                }
                *out = BigInt::from(self.internal.generate(&limit)?);
                Ok(())
            }
        }
    }

    fn finish(&self) -> Result<(), RandomError> {
        match &self.hook {
            Some((_, context)) => context.take_failure(),
            None => Ok(()),
        }
    }
}

impl PairingRandomHook for MockPairingLibrary {
    fn set_random_function(&mut self, hook: RandomHookFn, context: Arc<HookContext>) {
        self.hook = Some((hook, context));
    }

    fn init_random(&mut self) {
        self.hook = None;
    }
}

impl fmt::Debug for MockPairingLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MockPairingLibrary")
            .field("order", &self.order)
            .field("has_hook", &self.has_hook())
            .finish()
    }
}
