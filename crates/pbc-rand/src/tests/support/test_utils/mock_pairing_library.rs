// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use num_bigint::BigInt;

use crate::support::test_utils::MockPairingLibrary;

#[test]
fn test_mock_pairing_library_internal_generator() {
    let order = BigInt::from(1_000_003);
    let library = MockPairingLibrary::new(order.clone());

    assert!(!library.has_hook());

    let scalars = library.random_scalars(16).expect("Failed to random_scalars(..)");

    assert_eq!(scalars.len(), 16);
    for scalar in scalars {
        assert!(scalar >= BigInt::from(0));
        assert!(scalar < order);
    }
}

#[test]
fn test_mock_pairing_library_zero_draws() {
    let library = MockPairingLibrary::new(BigInt::from(7));

    let scalars = library.random_scalars(0).expect("Failed to random_scalars(..)");

    assert!(scalars.is_empty());
}
