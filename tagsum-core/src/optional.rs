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

//! An optional value that shares its storage discipline with [`Result`].

use core::cmp::Ordering;

use crate::storage::Tagged;
use crate::{OptionalFallback, Result};

/// The absence of a value.
///
/// An empty [`Optional`] compares equal to `Nothing`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nothing;

/// Either a value of type `T`, or [`Nothing`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Optional<T> {
    storage: Tagged<T, Nothing>,
}

impl<T: core::fmt::Debug> core::fmt::Debug for Optional<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        self.match_ref_ctx(
            f,
            |f, value| f.debug_tuple("Some").field(value).finish(),
            |f| f.write_str("None"),
        )
    }
}
impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::None()
    }
}
impl<T> From<T> for Optional<T> {
    fn from(value: T) -> Self {
        Self::Some(value)
    }
}
impl<T> From<core::option::Option<T>> for Optional<T> {
    fn from(value: core::option::Option<T>) -> Self {
        match value {
            Some(value) => Self::Some(value),
            None => Self::None(),
        }
    }
}
impl<T> From<Optional<T>> for core::option::Option<T> {
    fn from(value: Optional<T>) -> Self {
        value.into_std()
    }
}
impl<T> PartialEq<Nothing> for Optional<T> {
    fn eq(&self, _: &Nothing) -> bool {
        self.is_none()
    }
}
impl<T> PartialEq<Optional<T>> for Nothing {
    fn eq(&self, other: &Optional<T>) -> bool {
        other.is_none()
    }
}
/// Empty optionals are ordered below all others.
impl<T: PartialOrd> PartialOrd for Optional<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (&self.storage, &other.storage) {
            (Tagged::Primary(a), Tagged::Primary(b)) => a.partial_cmp(b),
            (Tagged::Primary(_), Tagged::Secondary(_)) => Some(Ordering::Greater),
            (Tagged::Secondary(_), Tagged::Primary(_)) => Some(Ordering::Less),
            (Tagged::Secondary(_), Tagged::Secondary(_)) => Some(Ordering::Equal),
        }
    }
}
impl<T: Ord> Ord for Optional<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (&self.storage, &other.storage) {
            (Tagged::Primary(a), Tagged::Primary(b)) => a.cmp(b),
            (Tagged::Primary(_), Tagged::Secondary(_)) => Ordering::Greater,
            (Tagged::Secondary(_), Tagged::Primary(_)) => Ordering::Less,
            (Tagged::Secondary(_), Tagged::Secondary(_)) => Ordering::Equal,
        }
    }
}
impl<T> PartialOrd<Nothing> for Optional<T> {
    fn partial_cmp(&self, _: &Nothing) -> Option<Ordering> {
        Some(if self.is_some() {
            Ordering::Greater
        } else {
            Ordering::Equal
        })
    }
}
impl<T> PartialOrd<Optional<T>> for Nothing {
    fn partial_cmp(&self, other: &Optional<T>) -> Option<Ordering> {
        Some(if other.is_some() {
            Ordering::Less
        } else {
            Ordering::Equal
        })
    }
}

impl<T> Optional<T> {
    /// Construct the `Some` variant.
    #[allow(non_snake_case)]
    pub const fn Some(value: T) -> Self {
        Self {
            storage: Tagged::Primary(value),
        }
    }
    /// Construct the `None` variant.
    #[allow(non_snake_case)]
    pub const fn None() -> Self {
        Self {
            storage: Tagged::Secondary(Nothing),
        }
    }
    /// Converts into the standard library's [`Option`](core::option::Option).
    pub fn into_std(self) -> core::option::Option<T> {
        self.match_owned(Some, || None)
    }

    /// Returns `true` if `self` contains a value.
    pub const fn has_value(&self) -> bool {
        self.storage.is_primary()
    }
    /// Returns `true` if `self` contains a value.
    pub const fn is_some(&self) -> bool {
        self.has_value()
    }
    /// Returns `true` if `self` doesn't contain a value.
    pub const fn is_none(&self) -> bool {
        !self.has_value()
    }

    /// Returns the contained value.
    ///
    /// # Panics
    /// If `self.is_none()`
    pub const fn value(&self) -> &T {
        match &self.storage {
            Tagged::Primary(value) => value,
            Tagged::Secondary(_) => contract_violation!("Optional", "value", "None"),
        }
    }
    /// Returns the contained value by mutable reference.
    ///
    /// # Panics
    /// If `self.is_none()`
    #[rustversion::attr(since(1.83), const)]
    pub fn value_mut(&mut self) -> &mut T {
        match &mut self.storage {
            Tagged::Primary(value) => value,
            Tagged::Secondary(_) => contract_violation!("Optional", "value_mut", "None"),
        }
    }
    /// Unwraps the contained value.
    ///
    /// # Panics
    /// If `self.is_none()`
    pub fn into_value(self) -> T {
        self.match_owned(
            |value| value,
            || contract_violation!("Optional", "into_value", "None"),
        )
    }
    /// # Safety
    /// Calling this on `Self::None()` is UB.
    pub unsafe fn value_unchecked(&self) -> &T {
        match &self.storage {
            Tagged::Primary(value) => value,
            Tagged::Secondary(_) => unsafe { crate::unreachable_unchecked!() },
        }
    }
    /// Returns a reference to the option's contents if they exist.
    pub const fn as_ref(&self) -> Optional<&T> {
        match &self.storage {
            Tagged::Primary(value) => Optional::Some(value),
            Tagged::Secondary(_) => Optional::None(),
        }
    }
    /// Returns a mutable reference to the option's contents if they exist.
    #[rustversion::attr(since(1.83), const)]
    pub fn as_mut(&mut self) -> Optional<&mut T> {
        match &mut self.storage {
            Tagged::Primary(value) => Optional::Some(value),
            Tagged::Secondary(_) => Optional::None(),
        }
    }
    /// Returns `true` if `self` holds a value equal to `value`.
    pub fn contains<U>(&self, value: &U) -> bool
    where
        T: PartialEq<U>,
    {
        self.match_ref(|inner| inner == value, || false)
    }
    /// Compares `self` against a bare value, an empty optional being less than any value.
    pub fn partial_cmp_value<U>(&self, value: &U) -> Option<Ordering>
    where
        T: PartialOrd<U>,
    {
        self.match_ref(|inner| inner.partial_cmp(value), || Some(Ordering::Less))
    }

    /// Equivalent to `match &self`. If you need multiple branches to obtain mutable access or ownership
    /// of a local, use [`Self::match_ref_ctx`] instead.
    pub fn match_ref<'a, U, FnSome: FnOnce(&'a T) -> U, FnNone: FnOnce() -> U>(
        &'a self,
        some: FnSome,
        none: FnNone,
    ) -> U {
        self.storage.match_ref(some, |_| none())
    }
    /// Equivalent to `match &self`.
    pub fn match_ref_ctx<'a, I, U, FnSome: FnOnce(I, &'a T) -> U, FnNone: FnOnce(I) -> U>(
        &'a self,
        ctx: I,
        some: FnSome,
        none: FnNone,
    ) -> U {
        self.storage
            .match_ref_ctx(ctx, some, move |ctx, _| none(ctx))
    }
    /// Equivalent to `match &mut self`. If you need multiple branches to obtain mutable access or ownership
    /// of a local, use [`Self::match_mut_ctx`] instead.
    pub fn match_mut<'a, U, FnSome: FnOnce(&'a mut T) -> U, FnNone: FnOnce() -> U>(
        &'a mut self,
        some: FnSome,
        none: FnNone,
    ) -> U {
        self.storage.match_mut(some, |_| none())
    }
    /// Equivalent to `match &mut self`.
    pub fn match_mut_ctx<
        'a,
        I,
        U,
        FnSome: FnOnce(I, &'a mut T) -> U,
        FnNone: FnOnce(I) -> U,
    >(
        &'a mut self,
        ctx: I,
        some: FnSome,
        none: FnNone,
    ) -> U {
        self.storage
            .match_mut_ctx(ctx, some, move |ctx, _| none(ctx))
    }
    /// Equivalent to `match self`. If you need multiple branches to obtain mutable access or ownership
    /// of a local, use [`Self::match_owned_ctx`] instead.
    pub fn match_owned<U, FnSome: FnOnce(T) -> U, FnNone: FnOnce() -> U>(
        self,
        some: FnSome,
        none: FnNone,
    ) -> U {
        self.storage.match_owned(some, |_| none())
    }
    /// Equivalent to `match self`.
    pub fn match_owned_ctx<I, U, FnSome: FnOnce(I, T) -> U, FnNone: FnOnce(I) -> U>(
        self,
        ctx: I,
        some: FnSome,
        none: FnNone,
    ) -> U {
        self.storage
            .match_owned_ctx(ctx, some, move |ctx, _| none(ctx))
    }

    /// Unwraps the option, or converts `default` into a `T` if no value was in it.
    pub fn value_or<U: Into<T>>(self, default: U) -> T {
        self.match_owned(|value| value, || default.into())
    }
    /// Unwraps the option, or runs `f` if no value was in it.
    pub fn value_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        self.match_owned(|value| value, f)
    }
    /// Turns `Some(v)` into `Ok(v)` and `None` into `Err(error)`.
    pub fn ok_or<E>(self, error: E) -> Result<T, E> {
        self.match_owned(Result::Ok, || Result::Err(error))
    }
    /// Turns `Some(v)` into `Ok(v)` and `None` into `Err(f())`.
    pub fn ok_or_else<E, F: FnOnce() -> E>(self, f: F) -> Result<T, E> {
        self.match_owned(Result::Ok, move || Result::Err(f()))
    }

    /// Applies a computation to the contained value.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Optional<U> {
        self.match_owned(move |value| Optional::Some(f(value)), Optional::None)
    }
    /// Applies a computation that may produce nothing to the contained value.
    pub fn and_then<U, F: FnOnce(T) -> Optional<U>>(self, f: F) -> Optional<U> {
        self.match_owned(f, Optional::None)
    }
    /// Calls `f` if `self` is empty.
    ///
    /// `f` may return a replacement optional (or a [`core::option::Option`]), or nothing,
    /// in which case the result stays empty. A present value is passed through untouched.
    pub fn or_else<R: OptionalFallback<T>, F: FnOnce() -> R>(self, f: F) -> Optional<T> {
        self.match_owned(Optional::Some, move || f().into_optional())
    }
    /// Applies `f` to the contained value, or returns `default`.
    pub fn map_or<U, F: FnOnce(T) -> U>(self, f: F, default: U) -> U {
        self.match_owned(f, move || default)
    }
    /// Applies `f` to the contained value, or returns `default()`.
    pub fn map_or_else<U, F: FnOnce(T) -> U, D: FnOnce() -> U>(self, f: F, default: D) -> U {
        self.match_owned(f, default)
    }
    /// Returns `other` if `self` holds a value, discarding that value. Returns an empty
    /// optional otherwise.
    pub fn conjunction<U>(&self, other: Optional<U>) -> Optional<U> {
        if self.has_value() {
            other
        } else {
            Optional::None()
        }
    }
    /// Returns `self` if it holds a value, `other` otherwise.
    pub fn disjunction(self, other: Self) -> Self {
        if self.has_value() {
            self
        } else {
            other
        }
    }

    /// Moves the value out, leaving `self` empty.
    pub fn take(&mut self) -> Self {
        self.replace_with(Self::None())
    }
    /// Stores `value`, returning what was held before.
    pub fn replace(&mut self, value: T) -> Self {
        self.replace_with(Self::Some(value))
    }
    fn replace_with(&mut self, replacement: Self) -> Self {
        Self {
            storage: self.storage.replace(replacement.storage),
        }
    }
    /// Drops the contained value, if any.
    pub fn reset(&mut self) {
        if self.has_value() {
            self.storage.set_secondary(Nothing);
        }
    }
    /// Stores `value`, dropping whatever was there before.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.storage.set_primary(value)
    }
    /// Exchanges the contents of `self` and `other`.
    pub fn swap(&mut self, other: &mut Self) {
        self.storage.swap(&mut other.storage)
    }
}

impl<T: Clone> Optional<&T> {
    /// Maps an `Optional<&T>` to an `Optional<T>` by cloning the contents.
    pub fn cloned(self) -> Optional<T> {
        self.map(T::clone)
    }
}
impl<T: Copy> Optional<&T> {
    /// Maps an `Optional<&T>` to an `Optional<T>` by copying the contents.
    pub fn copied(self) -> Optional<T> {
        self.map(|value| *value)
    }
}

/// Exchanges the contents of `a` and `b`.
pub fn swap<T>(a: &mut Optional<T>, b: &mut Optional<T>) {
    a.swap(b)
}
