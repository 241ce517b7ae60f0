// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::sync::atomic::{AtomicUsize, Ordering};

use num_bigint::BigUint;

use crate::backend::ContextBackend;
use crate::error::{BackendFailure, EntropyError};
use crate::traits::RandomBackend;

#[test]
fn test_context_backend_passes_context() {
    let backend = ContextBackend::new(5u32, |offset: &u32, limit: &BigUint| {
        Ok(limit - 1u32 - BigUint::from(*offset))
    });

    let value = backend
        .generate(&BigUint::from(10u32))
        .expect("Failed to generate(..)");

    assert_eq!(value, BigUint::from(4u32));
    assert_eq!(*backend.context(), 5);
}

#[test]
fn test_context_backend_context_state_is_shared_across_calls() {
    let backend = ContextBackend::new(AtomicUsize::new(0), |calls: &AtomicUsize, _: &BigUint| {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(BigUint::from(0u32))
    });

    for _ in 0..3 {
        backend
            .generate(&BigUint::from(10u32))
            .expect("Failed to generate(..)");
    }

    assert_eq!(backend.context().load(Ordering::SeqCst), 3);
}

#[test]
fn test_context_backend_propagates_failure() {
    let backend = ContextBackend::new((), |_: &(), _: &BigUint| {
        Err(BackendFailure::Entropy(EntropyError::EntropyNotAvailable))
    });

    let result = backend.generate(&BigUint::from(10u32));

    assert!(matches!(result, Err(BackendFailure::Entropy(_))));
}

#[test]
fn test_context_backend_debug_is_redacted() {
    let backend = ContextBackend::new([0x42u8; 32], |_: &[u8; 32], _: &BigUint| {
        Ok(BigUint::from(0u32))
    });

    assert_eq!(format!("{:?}", backend), "ContextBackend([REDACTED])");
}
