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

//! Results that carry their error as plain data.

use crate::storage::Tagged;
use crate::{Failure, Optional, ResultFallback};

/// Either a success value of type `T` or an error of type `E`, never both and never neither.
///
/// A success that carries no payload is spelled `Result<(), E>`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Result<T, E> {
    storage: Tagged<T, E>,
}

impl<T, E> core::fmt::Debug for Result<T, E>
where
    T: core::fmt::Debug,
    E: core::fmt::Debug,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.match_ref_ctx(
            f,
            |f, ok| f.debug_tuple("Ok").field(ok).finish(),
            |f, err| f.debug_tuple("Err").field(err).finish(),
        )
    }
}
impl<T, E: PartialEq> PartialEq<Failure<E>> for Result<T, E> {
    fn eq(&self, other: &Failure<E>) -> bool {
        self.contains_err(other.value())
    }
}
impl<T, E: PartialEq> PartialEq<Result<T, E>> for Failure<E> {
    fn eq(&self, other: &Result<T, E>) -> bool {
        other.contains_err(self.value())
    }
}
impl<T, E> From<Failure<E>> for Result<T, E> {
    fn from(value: Failure<E>) -> Self {
        Self::Err(value.into_value())
    }
}
impl<T, E> From<core::result::Result<T, E>> for Result<T, E> {
    fn from(value: core::result::Result<T, E>) -> Self {
        match value {
            Ok(value) => Self::Ok(value),
            Err(value) => Self::Err(value),
        }
    }
}
impl<T, E> From<Result<T, E>> for core::result::Result<T, E> {
    fn from(value: Result<T, E>) -> Self {
        value.into_std()
    }
}

impl<T, E> Result<T, E> {
    /// Construct the `Ok` variant.
    #[allow(non_snake_case)]
    pub const fn Ok(value: T) -> Self {
        Self {
            storage: Tagged::Primary(value),
        }
    }
    /// Construct the `Err` variant.
    #[allow(non_snake_case)]
    pub const fn Err(error: E) -> Self {
        Self {
            storage: Tagged::Secondary(error),
        }
    }
    /// Builds a result of other types from this one, converting whichever payload is live.
    pub fn convert<U, G>(self) -> Result<U, G>
    where
        T: Into<U>,
        E: Into<G>,
    {
        self.match_owned(|ok| Result::Ok(ok.into()), |err| Result::Err(err.into()))
    }
    /// Converts into the standard library's [`Result`](core::result::Result).
    #[allow(clippy::missing_errors_doc)]
    pub fn into_std(self) -> core::result::Result<T, E> {
        self.match_owned(Ok, Err)
    }

    /// Returns `true` if in the `Ok` variant.
    pub const fn has_value(&self) -> bool {
        self.storage.is_primary()
    }
    /// Returns `true` if in the `Ok` variant.
    pub const fn is_ok(&self) -> bool {
        self.has_value()
    }
    /// Returns `true` if in the `Err` variant.
    pub const fn is_err(&self) -> bool {
        !self.has_value()
    }

    /// Returns the `Ok` variant.
    ///
    /// # Panics
    /// If `self.is_err()`
    pub const fn value(&self) -> &T {
        match &self.storage {
            Tagged::Primary(ok) => ok,
            Tagged::Secondary(_) => contract_violation!("Result", "value", "Err"),
        }
    }
    /// Returns the `Ok` variant by mutable reference.
    ///
    /// # Panics
    /// If `self.is_err()`
    #[rustversion::attr(since(1.83), const)]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.storage {
            Tagged::Primary(ok) => ok,
            Tagged::Secondary(_) => contract_violation!("Result", "value_mut", "Err"),
        }
    }
    /// Unwraps the `Ok` variant.
    ///
    /// # Panics
    /// If `self.is_err()`
    pub fn into_value(self) -> T {
        self.match_owned(
            |ok| ok,
            |_| contract_violation!("Result", "into_value", "Err"),
        )
    }
    /// # Safety
    /// Called on an `Err`, this triggers Undefined Behaviour.
    pub unsafe fn value_unchecked(&self) -> &T {
        match &self.storage {
            Tagged::Primary(ok) => ok,
            Tagged::Secondary(_) => unsafe { crate::unreachable_unchecked!() },
        }
    }
    /// Returns the `Err` variant.
    ///
    /// # Panics
    /// If `self.is_ok()`
    pub const fn error(&self) -> &E {
        match &self.storage {
            Tagged::Secondary(err) => err,
            Tagged::Primary(_) => contract_violation!("Result", "error", "Ok"),
        }
    }
    /// Returns the `Err` variant by mutable reference.
    ///
    /// # Panics
    /// If `self.is_ok()`
    #[rustversion::attr(since(1.83), const)]
    pub fn error_mut(&mut self) -> &mut E {
        match &mut self.storage {
            Tagged::Secondary(err) => err,
            Tagged::Primary(_) => contract_violation!("Result", "error_mut", "Ok"),
        }
    }
    /// Unwraps the `Err` variant.
    ///
    /// # Panics
    /// If `self.is_ok()`
    pub fn into_error(self) -> E {
        self.match_owned(
            |_| contract_violation!("Result", "into_error", "Ok"),
            |err| err,
        )
    }
    /// # Safety
    /// Called on an `Ok`, this triggers Undefined Behaviour.
    pub unsafe fn error_unchecked(&self) -> &E {
        match &self.storage {
            Tagged::Secondary(err) => err,
            Tagged::Primary(_) => unsafe { crate::unreachable_unchecked!() },
        }
    }

    /// Converts to a result of immutable references to the variants.
    pub const fn as_ref(&self) -> Result<&T, &E> {
        Result {
            storage: self.storage.as_ref(),
        }
    }
    /// Converts to a result of mutable references to the variants.
    #[rustversion::attr(since(1.83), const)]
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        Result {
            storage: self.storage.as_mut(),
        }
    }
    /// Returns the `Ok` variant if it exists, an empty [`Optional`] otherwise.
    pub fn ok(self) -> Optional<T> {
        self.match_owned(Optional::Some, |_| Optional::None())
    }
    /// Returns the `Err` variant if it exists, an empty [`Optional`] otherwise.
    pub fn err(self) -> Optional<E> {
        self.match_owned(|_| Optional::None(), Optional::Some)
    }
    /// Returns `true` if `self` is `Ok` and its value equals `value`.
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.match_ref(|ok| ok == value, |_| false)
    }
    /// Returns `true` if `self` is `Err` and its error equals `error`.
    pub fn contains_err<G>(&self, error: &G) -> bool
    where
        E: PartialEq<G>,
    {
        self.match_ref(|_| false, |err| err == error)
    }

    /// Equivalent to `match &self`. If you need multiple branches to obtain mutable access or ownership
    /// of a local, use [`Self::match_ref_ctx`] instead.
    pub fn match_ref<'a, U, FnOk: FnOnce(&'a T) -> U, FnErr: FnOnce(&'a E) -> U>(
        &'a self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        self.storage.match_ref(ok, err)
    }
    /// Equivalent to `match &self`.
    pub fn match_ref_ctx<'a, I, U, FnOk: FnOnce(I, &'a T) -> U, FnErr: FnOnce(I, &'a E) -> U>(
        &'a self,
        ctx: I,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        self.storage.match_ref_ctx(ctx, ok, err)
    }
    /// Equivalent to `match &mut self`. If you need multiple branches to obtain mutable access or ownership
    /// of a local, use [`Self::match_mut_ctx`] instead.
    pub fn match_mut<'a, U, FnOk: FnOnce(&'a mut T) -> U, FnErr: FnOnce(&'a mut E) -> U>(
        &'a mut self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        self.storage.match_mut(ok, err)
    }
    /// Equivalent to `match &mut self`.
    pub fn match_mut_ctx<
        'a,
        I,
        U,
        FnOk: FnOnce(I, &'a mut T) -> U,
        FnErr: FnOnce(I, &'a mut E) -> U,
    >(
        &'a mut self,
        ctx: I,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        self.storage.match_mut_ctx(ctx, ok, err)
    }
    /// Equivalent to `match self`. If you need multiple branches to obtain mutable access or ownership
    /// of a local, use [`Self::match_owned_ctx`] instead.
    pub fn match_owned<U, FnOk: FnOnce(T) -> U, FnErr: FnOnce(E) -> U>(
        self,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        self.storage.match_owned(ok, err)
    }
    /// Equivalent to `match self`.
    pub fn match_owned_ctx<I, U, FnOk: FnOnce(I, T) -> U, FnErr: FnOnce(I, E) -> U>(
        self,
        ctx: I,
        ok: FnOk,
        err: FnErr,
    ) -> U {
        self.storage.match_owned_ctx(ctx, ok, err)
    }

    /// Returns the `Ok` variant, or `default` converted into `T`.
    pub fn value_or<U: Into<T>>(self, default: U) -> T {
        self.match_owned(|ok| ok, |_| default.into())
    }
    /// Returns the `Ok` variant if applicable, calling `f` on the `Err` otherwise.
    pub fn value_or_else<F: FnOnce(E) -> T>(self, f: F) -> T {
        self.match_owned(|ok| ok, f)
    }
    /// Applies a computation to the `Ok` variant.
    ///
    /// A closure that returns nothing yields a `Result<(), E>`.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Result<U, E> {
        self.match_owned(move |ok| Result::Ok(f(ok)), Result::Err)
    }
    /// Applies a fallible computation to the `Ok` variant.
    pub fn and_then<U, F: FnOnce(T) -> Result<U, E>>(self, f: F) -> Result<U, E> {
        self.match_owned(f, Result::Err)
    }
    /// Applies a computation to the `Err` variant.
    ///
    /// A closure that returns nothing yields a `Result<T, ()>`.
    pub fn map_error<G, F: FnOnce(E) -> G>(self, f: F) -> Result<T, G> {
        self.match_owned(Result::Ok, move |err| Result::Err(f(err)))
    }
    /// Attempts to recover from the `Err` variant.
    ///
    /// `f` may return a new [`Result`] (or a [`core::result::Result`]), which replaces
    /// `self`, or nothing, in which case the error is swallowed into `Err(())`.
    /// An `Ok` is passed through untouched.
    ///
    /// ```
    /// # use tagsum_core::Result;
    /// let recovered = Result::<u8, &str>::Err("nope").or_else(|_| Result::<u8, ()>::Ok(0));
    /// assert_eq!(recovered, Result::Ok(0));
    /// let mut seen = None;
    /// let swallowed = Result::<u8, &str>::Err("nope").or_else(|e| seen = Some(e));
    /// assert_eq!(swallowed, Result::Err(()));
    /// assert_eq!(seen, Some("nope"));
    /// ```
    pub fn or_else<R: ResultFallback<T>, F: FnOnce(E) -> R>(self, f: F) -> Result<T, R::Error> {
        self.match_owned(Result::Ok, move |err| f(err).into_result())
    }

    /// Stores `value` as the `Ok` variant, dropping whatever was there before.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.storage.set_primary(value)
    }
    /// Stores `error` as the `Err` variant, dropping whatever was there before.
    pub fn set_error(&mut self, error: E) -> &mut E {
        self.storage.set_secondary(error)
    }
    /// Exchanges the contents of `self` and `other`, whichever variants they are in.
    pub fn swap(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage)
    }
}

impl<T: Clone, E: Clone> Result<&T, &E> {
    /// Clones whichever payload is referenced.
    pub fn cloned(self) -> Result<T, E> {
        self.match_owned(|ok| Result::Ok(ok.clone()), |err| Result::Err(err.clone()))
    }
}
impl<T: Copy, E: Copy> Result<&T, &E> {
    /// Copies whichever payload is referenced.
    pub fn copied(self) -> Result<T, E> {
        self.match_owned(|ok| Result::Ok(*ok), |err| Result::Err(*err))
    }
}

/// Exchanges the contents of `a` and `b`.
pub fn swap<T, E>(a: &mut Result<T, E>, b: &mut Result<T, E>) {
    a.swap(b)
}
