// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use num_bigint::BigUint;

use crate::error::{BackendFailure, EntropyError};
use crate::support::test_utils::{MockBackend, MockBackendBehaviour};
use crate::traits::RandomBackend;

#[test]
fn test_mock_backend_behaviour_none() {
    let mock = MockBackend::new(MockBackendBehaviour::None);
    let limit = BigUint::from(100u32);

    let value = mock.generate(&limit).expect("Failed to generate(..)");

    assert!(value < limit);
}

#[test]
fn test_mock_backend_behaviour_max_value() {
    let mock = MockBackend::new(MockBackendBehaviour::MaxValue);

    for limit in [1u32, 2, 100, u32::MAX] {
        let limit = BigUint::from(limit);
        let value = mock.generate(&limit).expect("Failed to generate(..)");
        assert_eq!(value, &limit - 1u32);
    }
}

#[test]
fn test_mock_backend_behaviour_fail_always() {
    let mock = MockBackend::new(MockBackendBehaviour::FailAlways);

    let result = mock.generate(&BigUint::from(100u32));

    assert!(matches!(
        result,
        Err(BackendFailure::Entropy(EntropyError::EntropyNotAvailable))
    ));
}

#[test]
fn test_mock_backend_behaviour_fail_at_nth() {
    let mock = MockBackend::new(MockBackendBehaviour::FailAtNthGenerate(2));
    let limit = BigUint::from(100u32);

    assert!(mock.generate(&limit).is_ok());
    assert!(mock.generate(&limit).is_err());
    assert!(mock.generate(&limit).is_ok());
}

#[test]
fn test_mock_backend_behaviour_out_of_range() {
    let mock = MockBackend::new(MockBackendBehaviour::OutOfRange);
    let limit = BigUint::from(100u32);

    assert_eq!(mock.generate(&limit).expect("Failed to generate(..)"), limit);
}

#[test]
fn test_mock_backend_clones_share_call_count() {
    let mock = MockBackend::new(MockBackendBehaviour::MaxValue);
    let clone = mock.clone();
    let limit = BigUint::from(100u32);

    clone.generate(&limit).expect("Failed to generate(..)");
    clone.generate(&limit).expect("Failed to generate(..)");

    assert_eq!(mock.call_count(), 2);
}

#[test]
fn test_mock_backend_change_behaviour() {
    let mut mock = MockBackend::new(MockBackendBehaviour::FailAlways);
    let limit = BigUint::from(100u32);

    assert!(mock.generate(&limit).is_err());

    mock.change_behaviour(MockBackendBehaviour::MaxValue);

    assert_eq!(
        mock.generate(&limit).expect("Failed to generate(..)"),
        BigUint::from(99u32)
    );
}
