// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! The swappable randomness provider.
//!
//! A [`RandomSource`] holds exactly one active backend at all times. It
//! starts on its default backend (the OS CSPRNG unless constructed with
//! [`RandomSource::with_default`]), switches to a custom backend on
//! [`install`](RandomSource::install) and returns to the default on
//! [`uninstall`](RandomSource::uninstall).
//!
//! | from              | operation   | to                |
//! |-------------------|-------------|-------------------|
//! | `Default`         | `install`   | `CustomInstalled` |
//! | `CustomInstalled` | `install`   | `CustomInstalled` |
//! | `CustomInstalled` | `uninstall` | `Default`         |
//! | `Default`         | `uninstall` | `Default` (no-op) |

use core::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use num_bigint::BigUint;
use num_traits::Zero;

use crate::backend::{ContextBackend, EntropyBackend};
use crate::error::{BackendFailure, RandomError};
use crate::scope::ScopedBackend;
use crate::system::SystemEntropySource;
use crate::traits::RandomBackend;

/// Which kind of backend a [`RandomSource`] is routing to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendState {
    /// The built-in default backend is active.
    Default,
    /// A backend registered through `install` is active.
    CustomInstalled,
}

/// Backend and state, always replaced together.
#[derive(Clone)]
pub(crate) struct Active {
    pub(crate) backend: Arc<dyn RandomBackend>,
    pub(crate) state: BackendState,
}

/// Thread-safe provider of uniform integers in `[0, limit)`.
///
/// `generate` only holds the internal read lock while cloning the active
/// backend handle, so a slow backend never blocks `install`/`uninstall`,
/// and a backend replaced mid-call finishes serving the calls that already
/// picked it up.
///
/// # Example
///
/// ```rust
/// use num_bigint::BigUint;
/// use pbc_rand::{BackendState, RandomSource, SeededBackend};
///
/// let source = RandomSource::new();
/// let limit = BigUint::from(1_000u32);
///
/// // OS CSPRNG by default
/// assert!(source.generate(&limit).expect("Failed to generate") < limit);
///
/// source.install(SeededBackend::seed_from_u64(42));
/// assert_eq!(source.state(), BackendState::CustomInstalled);
///
/// source.uninstall();
/// assert_eq!(source.state(), BackendState::Default);
/// ```
pub struct RandomSource {
    default: Arc<dyn RandomBackend>,
    active: RwLock<Active>,
}

impl RandomSource {
    /// Creates a provider whose default backend is the OS CSPRNG.
    pub fn new() -> Self {
        Self::with_default(EntropyBackend::new(SystemEntropySource {}))
    }

    /// Creates a provider with a caller-chosen default backend.
    ///
    /// The default is what the provider routes to at construction and after
    /// every `uninstall`. It must be cryptographically strong: omitting
    /// `install` must never silently yield weak randomness.
    pub fn with_default<B: RandomBackend + 'static>(default: B) -> Self {
        let default: Arc<dyn RandomBackend> = Arc::new(default);

        Self {
            active: RwLock::new(Active {
                backend: Arc::clone(&default),
                state: BackendState::Default,
            }),
            default,
        }
    }

    /// Returns a handle to the process-wide provider, creating it on first
    /// use.
    ///
    /// Prefer passing an explicit `RandomSource` around; the shared instance
    /// exists for integrations (such as a foreign library hook) that need one
    /// provider for the whole process. Every call returns the same instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::sync::Arc;
    ///
    /// use pbc_rand::{HookContext, RandomSource};
    ///
    /// let context = HookContext::new(RandomSource::global());
    /// assert!(Arc::ptr_eq(&RandomSource::global(), &RandomSource::global()));
    /// assert!(context.take_failure().is_ok());
    /// ```
    pub fn global() -> Arc<RandomSource> {
        static GLOBAL: OnceLock<Arc<RandomSource>> = OnceLock::new();
        Arc::clone(GLOBAL.get_or_init(|| Arc::new(RandomSource::new())))
    }

    /// Routes all subsequent `generate` calls to `backend`.
    ///
    /// Replaces any previously installed backend.
    pub fn install<B: RandomBackend + 'static>(&self, backend: B) {
        self.install_arc(Arc::new(backend));
    }

    /// Routes all subsequent `generate` calls to `backend`, which receives
    /// `context` on every call.
    ///
    /// # Example
    ///
    /// ```rust
    /// use num_bigint::BigUint;
    /// use pbc_rand::RandomSource;
    ///
    /// let source = RandomSource::new();
    /// source.install_with_context(
    ///     |offset: &u32, limit: &BigUint| Ok((limit - 1u32) - BigUint::from(*offset)),
    ///     3u32,
    /// );
    ///
    /// let limit = BigUint::from(100u32);
    /// assert_eq!(source.generate(&limit).unwrap(), BigUint::from(96u32));
    /// ```
    pub fn install_with_context<C, F>(&self, backend: F, context: C)
    where
        C: Send + Sync + 'static,
        F: Fn(&C, &BigUint) -> Result<BigUint, BackendFailure> + Send + Sync + 'static,
    {
        self.install(ContextBackend::new(context, backend));
    }

    /// Restores the default backend.
    ///
    /// Calling it with no custom backend installed is a no-op.
    pub fn uninstall(&self) {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);

        if active.state == BackendState::Default {
            return;
        }

        log::debug!(
            target: "pbc_rand::source",
            "uninstalling `{}` backend, restoring `{}`",
            active.backend.name(),
            self.default.name()
        );

        *active = Active {
            backend: Arc::clone(&self.default),
            state: BackendState::Default,
        };
    }

    /// Installs `backend` until the returned guard is dropped, then restores
    /// whatever was active before.
    ///
    /// The guard restores on every exit path, including a panic unwinding
    /// through a test, so one test's backend cannot leak into the next.
    ///
    /// # Example
    ///
    /// ```rust
    /// use num_bigint::BigUint;
    /// use pbc_rand::{BackendState, RandomSource, SeededBackend};
    ///
    /// let source = RandomSource::new();
    /// {
    ///     let _guard = source.scoped(SeededBackend::seed_from_u64(7));
    ///     assert_eq!(source.state(), BackendState::CustomInstalled);
    /// }
    /// assert_eq!(source.state(), BackendState::Default);
    /// ```
    #[must_use = "the previous backend is restored as soon as the guard is dropped"]
    pub fn scoped<B: RandomBackend + 'static>(&self, backend: B) -> ScopedBackend<'_> {
        let backend: Arc<dyn RandomBackend> = Arc::new(backend);

        log::debug!(
            target: "pbc_rand::source",
            "installing scoped `{}` backend",
            backend.name()
        );

        let previous = self.replace(Active {
            backend,
            state: BackendState::CustomInstalled,
        });

        ScopedBackend::new(self, previous)
    }

    /// Returns a value `v` with `0 <= v < limit` from the active backend.
    ///
    /// The provider adds no bias of its own: the distribution is whatever the
    /// active backend produces.
    ///
    /// # Errors
    ///
    /// - [`RandomError::DomainError`] if `limit` is zero.
    /// - [`RandomError::BackendFailure`] if the backend fails, or returns a
    ///   value outside `[0, limit)` ([`BackendFailure::OutOfRange`]).
    ///
    /// No fallback value is ever substituted and nothing is retried.
    pub fn generate(&self, limit: &BigUint) -> Result<BigUint, RandomError> {
        if limit.is_zero() {
            return Err(RandomError::DomainError);
        }

        let backend = self.snapshot().backend;

        let value = backend.generate(limit).map_err(|err| {
            log::error!(
                target: "pbc_rand::source",
                "`{}` backend failed: {err}",
                backend.name()
            );
            err
        })?;

        if &value >= limit {
            log::error!(
                target: "pbc_rand::source",
                "`{}` backend returned a value outside [0, limit)",
                backend.name()
            );
            return Err(BackendFailure::OutOfRange.into());
        }

        Ok(value)
    }

    /// Returns whether the default or a custom backend is active.
    pub fn state(&self) -> BackendState {
        self.read().state
    }

    /// Returns a handle to the active backend.
    ///
    /// The handle stays valid after a later `install`/`uninstall`, but it
    /// then no longer reflects what `generate` routes to.
    pub fn backend(&self) -> Arc<dyn RandomBackend> {
        Arc::clone(&self.read().backend)
    }

    /// Returns the name of the active backend.
    pub fn backend_name(&self) -> &'static str {
        self.read().backend.name()
    }

    fn install_arc(&self, backend: Arc<dyn RandomBackend>) {
        log::debug!(
            target: "pbc_rand::source",
            "installing `{}` backend",
            backend.name()
        );

        self.replace(Active {
            backend,
            state: BackendState::CustomInstalled,
        });
    }

    fn snapshot(&self) -> Active {
        self.read().clone()
    }

    /// Swaps the active slot, returning what was there.
    pub(crate) fn replace(&self, next: Active) -> Active {
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        core::mem::replace(&mut *active, next)
    }

    // The slot is only ever written as a whole, so a poisoned lock still
    // holds a consistent backend/state pair.
    fn read(&self) -> std::sync::RwLockReadGuard<'_, Active> {
        self.active.read().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let active = self.read();

        f.debug_struct("RandomSource")
            .field("backend", &active.backend.name())
            .field("state", &active.state)
            .finish()
    }
}
