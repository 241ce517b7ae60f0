// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # pbc_rand
//!
//! Pluggable, uniformly distributed big-integer randomness for pairing-based
//! cryptography.
//!
//! A pairing library needs a random integer in `[0, limit)` for every key,
//! nonce, challenge and blinding factor it produces. `pbc_rand` supplies those
//! integers through a single swappable backend, so tests can make pairing
//! operations reproducible and production code can choose its entropy source
//! without touching the library's call sites.
//!
//! ## Core Types
//!
//! - [`RandomSource`]: thread-safe provider with one active backend
//! - [`ScopedBackend`]: guard restoring the previous backend on drop
//! - [`EntropyBackend`]: uniform integers from an [`EntropySource`] (default: OS CSPRNG)
//! - [`SeededBackend`]: reproducible ChaCha20 backend for golden tests
//! - [`ContextBackend`]: backend function bundled with typed context data
//!
//! ## Traits
//!
//! - [`RandomBackend`]: interface for backends (also implemented by closures)
//! - [`EntropySource`]: interface for byte-level CSPRNGs
//! - [`PairingRandomHook`]: registration surface of the external pairing library
//!
//! ## Example
//!
//! ```rust
//! use num_bigint::BigUint;
//! use pbc_rand::{RandomSource, SeededBackend};
//!
//! let source = RandomSource::new();
//! let order = BigUint::parse_bytes(b"730750818665451621361119245571504901405976559617", 10)
//!     .expect("Failed to parse order");
//!
//! // OS CSPRNG by default
//! let scalar = source.generate(&order).expect("Failed to generate scalar");
//! assert!(scalar < order);
//!
//! // Reproducible within the scope
//! let first = {
//!     let _guard = source.scoped(SeededBackend::seed_from_u64(42));
//!     source.generate(&order).expect("Failed to generate scalar")
//! };
//! let second = {
//!     let _guard = source.scoped(SeededBackend::seed_from_u64(42));
//!     source.generate(&order).expect("Failed to generate scalar")
//! };
//! assert_eq!(first, second);
//! ```
//!
//! ## Logging
//!
//! Records are emitted through the `log` facade (targets `pbc_rand::*`).
//! Generated values and seeds are never logged.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

#[cfg(test)]
mod tests;

mod backend;
mod error;
mod retry;
mod scope;
mod source;
mod support;
mod system;
mod traits;
mod uniform;

pub mod hook;

pub use backend::{ContextBackend, EntropyBackend, RngBackend, SeededBackend};
pub use error::{BackendFailure, EntropyError, RandomError};
pub use hook::{HookContext, PairingRandomHook, RandomHookFn};
pub use retry::{DEFAULT_ATTEMPTS, RetryingEntropySource};
pub use scope::ScopedBackend;
pub use source::{BackendState, RandomSource};
pub use system::SystemEntropySource;
pub use traits::{EntropySource, RandomBackend};
pub use uniform::sample_below;

#[cfg(any(test, feature = "test_utils"))]
pub use support::test_utils;
