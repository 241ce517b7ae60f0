// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Adapter for a pairing library's random-number hook.
//!
//! Pairing libraries expose a registration call accepting a callback of shape
//! `(output, limit, context) -> void`: the callback writes a random value
//! into `output` in place and has no way to report failure. This module is
//! the single point where that shape is translated to
//! [`RandomSource::generate`].
//!
//! Because the callback cannot return an error, a failed draw is recorded in
//! the [`HookContext`] for the calling thread and `output` is left untouched.
//! The binding must call [`HookContext::take_failure`] after every library
//! operation that may have drawn randomness, and discard the operation's
//! result if it returns `Err`.
//!
//! Recorded failures live in thread-local storage: an unclaimed failure is
//! released when its thread exits or when the context is dropped on that
//! thread.

use std::cell::RefCell;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use num_bigint::{BigInt, BigUint};

use crate::error::RandomError;
use crate::source::RandomSource;

static NEXT_CONTEXT_ID: AtomicU64 = AtomicU64::new(0);

thread_local! {
    // Failures recorded on this thread, keyed by context id.
    static FAILURES: RefCell<HashMap<u64, RandomError>> = RefCell::new(HashMap::new());
}

/// The foreign callback shape: write a value in `[0, limit)` into `out`.
pub type RandomHookFn = fn(out: &mut BigInt, limit: &BigInt, context: &HookContext);

/// Registration surface of a pairing library's random-number hook.
///
/// Implemented by the binding to the external library.
pub trait PairingRandomHook {
    /// Makes the library call `hook` with `context` whenever it needs a
    /// random integer.
    fn set_random_function(&mut self, hook: RandomHookFn, context: Arc<HookContext>);

    /// Resets the library to its own built-in generator.
    fn init_random(&mut self);
}

/// Context handed to the library alongside [`random_hook`].
///
/// Holds the [`RandomSource`] to draw from. Each context has its own
/// per-thread failure latch.
#[derive(Debug)]
pub struct HookContext {
    source: Arc<RandomSource>,
    id: u64,
}

impl HookContext {
    /// Creates a context routing hook calls to `source`.
    pub fn new(source: Arc<RandomSource>) -> Self {
        Self {
            source,
            id: NEXT_CONTEXT_ID.fetch_add(1, Ordering::Relaxed),
        }
    }

    /// Returns the provider behind this context.
    pub fn source(&self) -> &RandomSource {
        &self.source
    }

    /// Returns and clears the failure recorded for the current thread.
    ///
    /// # Errors
    ///
    /// Returns the first [`RandomError`] a hook call on this thread hit since
    /// the last call to `take_failure`. The library operation in flight must
    /// then be abandoned: any output it produced was computed without valid
    /// randomness.
    ///
    /// A failure that is never taken is released when the thread exits.
    pub fn take_failure(&self) -> Result<(), RandomError> {
        match FAILURES.with_borrow_mut(|failures| failures.remove(&self.id)) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    /// Returns whether the current thread has an unclaimed failure.
    pub fn has_failure(&self) -> bool {
        FAILURES.with_borrow(|failures| failures.contains_key(&self.id))
    }

    fn record(&self, err: RandomError) {
        log::debug!(target: "pbc_rand::hook", "recording hook failure: {err}");

        // Keep the first failure: later ones are usually consequences of it.
        FAILURES.with_borrow_mut(|failures| {
            failures.entry(self.id).or_insert(err);
        });
    }
}

impl Drop for HookContext {
    fn drop(&mut self) {
        // Storage is already gone when dropped during thread teardown.
        let _ = FAILURES.try_with(|failures| failures.borrow_mut().remove(&self.id));
    }
}

#[cfg(test)]
pub(crate) fn latched_failures_on_current_thread() -> usize {
    FAILURES.with_borrow(|failures| failures.len())
}

/// The callback registered with the pairing library.
///
/// A non-positive `limit` is a [`RandomError::DomainError`]. On any failure
/// `out` is not written and the error is latched in `context`.
pub fn random_hook(out: &mut BigInt, limit: &BigInt, context: &HookContext) {
    match generate_signed(&context.source, limit) {
        Ok(value) => *out = BigInt::from(value),
        Err(err) => context.record(err),
    }
}

/// Registers [`random_hook`] with `library`.
pub fn install_hook<L: PairingRandomHook + ?Sized>(library: &mut L, context: Arc<HookContext>) {
    log::debug!(
        target: "pbc_rand::hook",
        "installing random hook (backend `{}`)",
        context.source().backend_name()
    );

    library.set_random_function(random_hook, context);
}

/// Resets `library` to its own generator.
///
/// Safe to call when no hook was ever installed.
pub fn uninstall_hook<L: PairingRandomHook + ?Sized>(library: &mut L) {
    log::debug!(target: "pbc_rand::hook", "uninstalling random hook");

    library.init_random();
}

fn generate_signed(source: &RandomSource, limit: &BigInt) -> Result<BigUint, RandomError> {
    let limit = limit.to_biguint().ok_or(RandomError::DomainError)?;

    source.generate(&limit)
}
