// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use num_bigint::BigUint;

use crate::backend::EntropyBackend;
use crate::error::{BackendFailure, EntropyError};
use crate::support::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
use crate::system::SystemEntropySource;
use crate::traits::RandomBackend;

#[test]
fn test_entropy_backend_system_source_in_range() {
    let backend = EntropyBackend::new(SystemEntropySource {});
    let limit = BigUint::parse_bytes(b"730750818665451621361119245571504901405976559617", 10)
        .expect("Failed to parse limit");

    for _ in 0..100 {
        let value = backend.generate(&limit).expect("Failed to generate(..)");
        assert!(value < limit);
    }
}

#[test]
fn test_entropy_backend_constant_source() {
    // 0x00.. bytes are always accepted and always yield zero
    let backend = EntropyBackend::new(MockEntropySource::new(
        MockEntropySourceBehaviour::Constant(0x00),
    ));

    let value = backend
        .generate(&BigUint::from(1_000_000u32))
        .expect("Failed to generate(..)");

    assert_eq!(value, BigUint::from(0u32));
}

#[test]
fn test_entropy_backend_propagates_entropy_error() {
    let backend = EntropyBackend::new(MockEntropySource::new(
        MockEntropySourceBehaviour::FailAlways,
    ));

    let result = backend.generate(&BigUint::from(1_000u32));

    assert!(matches!(
        result,
        Err(BackendFailure::Entropy(EntropyError::EntropyNotAvailable))
    ));
}

#[test]
fn test_entropy_backend_reads_from_its_source() {
    let backend = EntropyBackend::new(MockEntropySource::new(MockEntropySourceBehaviour::None));

    backend
        .generate(&BigUint::from(2u32).pow(255))
        .expect("Failed to generate(..)");

    assert!(backend.entropy().call_count() >= 1);
    assert_eq!(backend.name(), "entropy");
}
