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
//   ZettaScale Zenoh Team, <zenoh@zettascale.tech>
//

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
//! The core of `tagsum`: a result container and an optional container that both hold
//! exactly one of two alternatives, along with the combinators that let call chains
//! propagate success/failure or presence/absence without branching at every step.

/// Reports a broken precondition, such as reading the value of an `Err`.
///
/// These are programming errors rather than recoverable failures, so they always panic.
#[doc(hidden)]
#[macro_export]
macro_rules! contract_violation {
    ($container: literal, $accessor: literal, $variant: literal) => {
        panic!(concat!(
            $container,
            "::",
            $accessor,
            " called on ",
            $variant,
            " variant"
        ))
    };
}

/// Panics in debug builds. In release builds, tells the optimizer that this point is never reached.
///
/// # Safety
/// Reaching this in a release build is undefined behaviour.
#[doc(hidden)]
#[macro_export]
macro_rules! unreachable_unchecked {
    () => {
        if cfg!(debug_assertions) {
            unreachable!()
        } else {
            core::hint::unreachable_unchecked()
        }
    };
}

pub(crate) mod storage;

pub mod failure;
pub use failure::Failure;
pub mod fallback;
pub use fallback::{OptionalFallback, ResultFallback};
pub mod optional;
pub use optional::{Nothing, Optional};
pub mod result;
pub use result::Result;
