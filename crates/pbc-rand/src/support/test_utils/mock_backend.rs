// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use num_bigint::BigUint;

use crate::backend::EntropyBackend;
use crate::error::{BackendFailure, EntropyError};
use crate::system::SystemEntropySource;
use crate::traits::RandomBackend;

/// Configurable behavior for [`MockBackend`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBackendBehaviour {
    /// Normal operation (delegates to the OS-backed entropy backend).
    None,
    /// Always return `limit - 1`.
    MaxValue,
    /// Always fail with [`EntropyError::EntropyNotAvailable`].
    FailAlways,
    /// Fail the Nth call (1-indexed: 1 = first call fails).
    FailAtNthGenerate(usize),
    /// Return `limit` itself, violating the `[0, limit)` contract.
    OutOfRange,
}

/// Mock backend for testing.
///
/// Wraps an [`EntropyBackend`] over the OS CSPRNG but allows simulating
/// failures via [`MockBackendBehaviour`]. Clones share the call counter, so a
/// clone can be installed while the original is kept for assertions.
#[derive(Debug, Clone)]
pub struct MockBackend {
    inner: Arc<EntropyBackend<SystemEntropySource>>,
    behaviour: MockBackendBehaviour,
    generate_count: Arc<AtomicUsize>,
}

impl MockBackend {
    /// Creates a new mock backend with the specified behavior.
    pub fn new(behaviour: MockBackendBehaviour) -> Self {
        Self {
            inner: Arc::new(EntropyBackend::new(SystemEntropySource {})),
            behaviour,
            generate_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockBackendBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns the number of `generate` calls seen by this mock and its clones.
    pub fn call_count(&self) -> usize {
        self.generate_count.load(Ordering::SeqCst)
    }
}

impl RandomBackend for MockBackend {
    fn generate(&self, limit: &BigUint) -> Result<BigUint, BackendFailure> {
        let call = self.generate_count.fetch_add(1, Ordering::SeqCst) + 1;

        match self.behaviour {
            MockBackendBehaviour::None => self.inner.generate(limit),
            MockBackendBehaviour::MaxValue => Ok(limit - 1u32),
            MockBackendBehaviour::FailAlways => Err(EntropyError::EntropyNotAvailable.into()),
            MockBackendBehaviour::FailAtNthGenerate(n) if call == n => {
                Err(EntropyError::EntropyNotAvailable.into())
            }
            MockBackendBehaviour::FailAtNthGenerate(_) => self.inner.generate(limit),
            MockBackendBehaviour::OutOfRange => Ok(limit.clone()),
        }
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}
