//
// Copyright (c) 2023 ZettaScale Technology
//
// This program and the accompanying materials are made available under the
// terms of the Eclipse Public License 2.0 which is available at
// http://www.eclipse.org/legal/epl-2.0, or the Apache License, Version 2.0
// which is available at https://www.apache.org/licenses/LICENSE-2.0.
//
// SPDX-License-Identifier: EPL-2.0 OR Apache-2.0
//
// Contributors:
//   Pierre Avital, <pierre.avital@me.com>
//

//! A marker for error values.

/// Wraps an error so that it can be turned into a [`Result`](crate::Result) without being
/// mistaken for a success value, even when both sides share a type.
///
/// ```
/// # use tagsum_core::{Failure, Result};
/// let r: Result<u32, u32> = Failure::new(3).into();
/// assert!(r.is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Failure<E>(E);

impl<E> Failure<E> {
    /// Wraps `error`.
    pub const fn new(error: E) -> Self {
        Self(error)
    }
    /// Returns a reference to the wrapped error.
    pub const fn value(&self) -> &E {
        &self.0
    }
    /// Unwraps the error.
    pub fn into_value(self) -> E {
        self.0
    }
}

impl<E: core::fmt::Display> core::fmt::Display for Failure<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(feature = "std")]
impl<E: std::error::Error> std::error::Error for Failure<E> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}
