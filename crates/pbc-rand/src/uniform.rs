// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Uniform sampling of big integers from a byte stream.
//!
//! # Algorithm
//!
//! 1. Let `max = limit - 1` and `k = bits(max)`
//! 2. Draw `ceil(k / 8)` bytes and read them as a big-endian integer
//! 3. Clear the bits of the leading byte above bit `k`
//! 4. Accept the candidate if it is below `limit`, otherwise redraw
//!
//! Masking keeps every candidate below `2^k <= 2 * limit`, so each draw is
//! accepted with probability above 1/2. Rejection (rather than reducing
//! modulo `limit`) keeps the result exactly uniform.

use num_bigint::BigUint;
use num_traits::{One, Zero};
use zeroize::Zeroizing;

use crate::error::EntropyError;

/// Returns a uniformly distributed integer in `[0, limit)`.
///
/// `fill` is called once per draw with a buffer to fill with random bytes.
/// A `limit` of 1 returns 0 without consuming any bytes.
///
/// # Panics
///
/// Panics if `limit` is zero.
///
/// # Hangs
///
/// Never returns if `fill` keeps producing bytes whose masked value is at
/// least `limit` (e.g. a source stuck at `0xFF` with a limit of 5). A
/// working CSPRNG is accepted with probability above 1/2 per draw.
///
/// # Errors
///
/// Propagates the first error returned by `fill`.
///
/// # Example
///
/// ```rust
/// use num_bigint::BigUint;
/// use pbc_rand::{EntropySource, SystemEntropySource, sample_below};
///
/// let source = SystemEntropySource {};
/// let limit = BigUint::from(1_000_000u32);
/// let value = sample_below(&limit, |buf| source.fill_bytes(buf)).expect("Failed to sample");
///
/// assert!(value < limit);
/// ```
pub fn sample_below<F>(limit: &BigUint, mut fill: F) -> Result<BigUint, EntropyError>
where
    F: FnMut(&mut [u8]) -> Result<(), EntropyError>,
{
    assert!(!limit.is_zero(), "limit must be positive");

    if limit.is_one() {
        return Ok(BigUint::zero());
    }

    let max = limit - 1u32;
    let bits = max.bits();
    let len = bits.div_ceil(8) as usize;
    let mask = match bits % 8 {
        0 => 0xFF,
        excess => (1u8 << excess) - 1,
    };

    let mut buf = Zeroizing::new(vec![0u8; len]);

    loop {
        fill(buf.as_mut_slice())?;
        buf[0] &= mask;

        let candidate = BigUint::from_bytes_be(buf.as_slice());
        if &candidate < limit {
            return Ok(candidate);
        }
    }
}
