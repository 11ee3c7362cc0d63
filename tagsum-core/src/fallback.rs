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

//! What an `or_else` callback may return.
//!
//! A recovery callback either produces a replacement container, or returns nothing at all
//! after doing some side work (logging the error, bumping a counter...). These traits fold
//! both shapes into the container `or_else` hands back.

use crate::{Optional, Result};

/// The return type of the callback given to [`Result::or_else`].
pub trait ResultFallback<T> {
    /// The error type of the resulting [`Result`].
    type Error;
    /// Turns the callback's output into the result of `or_else`.
    fn into_result(self) -> Result<T, Self::Error>;
}

/// A callback that returns nothing yields `Err(())`.
impl<T> ResultFallback<T> for () {
    type Error = ();
    fn into_result(self) -> Result<T, ()> {
        Result::Err(())
    }
}

impl<T, E> ResultFallback<T> for Result<T, E> {
    type Error = E;
    fn into_result(self) -> Result<T, E> {
        self
    }
}

impl<T, E> ResultFallback<T> for core::result::Result<T, E> {
    type Error = E;
    fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

/// The return type of the callback given to [`Optional::or_else`].
pub trait OptionalFallback<T> {
    /// Turns the callback's output into the result of `or_else`.
    fn into_optional(self) -> Optional<T>;
}

/// A callback that returns nothing leaves the optional empty.
impl<T> OptionalFallback<T> for () {
    fn into_optional(self) -> Optional<T> {
        Optional::None()
    }
}

impl<T> OptionalFallback<T> for Optional<T> {
    fn into_optional(self) -> Optional<T> {
        self
    }
}

impl<T> OptionalFallback<T> for core::option::Option<T> {
    fn into_optional(self) -> Optional<T> {
        self.into()
    }
}
