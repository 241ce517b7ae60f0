// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Shipped [`RandomBackend`](crate::RandomBackend) implementations.

mod context;
mod entropy;
mod rng;

pub use context::ContextBackend;
pub use entropy::EntropyBackend;
pub use rng::{RngBackend, SeededBackend};
