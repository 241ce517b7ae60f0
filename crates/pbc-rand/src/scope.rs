// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;

use crate::source::{Active, RandomSource};

/// Guard returned by [`RandomSource::scoped`].
///
/// Dropping it puts back the backend (and state) that was active when the
/// guard was created. Nested guards must be dropped in reverse order of
/// creation, which is what lexical scoping gives you.
pub struct ScopedBackend<'a> {
    source: &'a RandomSource,
    previous: Option<Active>,
}

impl<'a> ScopedBackend<'a> {
    pub(crate) fn new(source: &'a RandomSource, previous: Active) -> Self {
        Self {
            source,
            previous: Some(previous),
        }
    }
}

impl Drop for ScopedBackend<'_> {
    fn drop(&mut self) {
        if let Some(previous) = self.previous.take() {
            log::debug!(
                target: "pbc_rand::source",
                "scope ended, restoring `{}` backend",
                previous.backend.name()
            );
            self.source.replace(previous);
        }
    }
}

impl fmt::Debug for ScopedBackend<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScopedBackend")
            .field("source", self.source)
            .finish_non_exhaustive()
    }
}
