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

//! The dual storage shared by [`Result`](crate::Result) and [`Optional`](crate::Optional).

/// Exactly one of `A` or `B`.
///
/// The variant is the discriminant: only one payload can exist at a time, and replacing
/// the live side always goes through a whole-value assignment, which builds the new payload
/// before dropping the old one exactly once.
#[derive(Clone, Copy)]
pub(crate) enum Tagged<A, B> {
    Primary(A),
    Secondary(B),
}

impl<A, B> Tagged<A, B> {
    pub(crate) const fn is_primary(&self) -> bool {
        matches!(self, Self::Primary(_))
    }
    /// Equivalent to `match &self`. If you need multiple branches to obtain mutable access or ownership
    /// of a local, use [`Self::match_ref_ctx`] instead.
    pub(crate) fn match_ref<'a, U, FnA: FnOnce(&'a A) -> U, FnB: FnOnce(&'a B) -> U>(
        &'a self,
        primary: FnA,
        secondary: FnB,
    ) -> U {
        match self {
            Self::Primary(a) => primary(a),
            Self::Secondary(b) => secondary(b),
        }
    }
    /// Equivalent to `match &self`.
    pub(crate) fn match_ref_ctx<
        'a,
        T,
        U,
        FnA: FnOnce(T, &'a A) -> U,
        FnB: FnOnce(T, &'a B) -> U,
    >(
        &'a self,
        ctx: T,
        primary: FnA,
        secondary: FnB,
    ) -> U {
        match self {
            Self::Primary(a) => primary(ctx, a),
            Self::Secondary(b) => secondary(ctx, b),
        }
    }
    /// Equivalent to `match &mut self`.
    pub(crate) fn match_mut<'a, U, FnA: FnOnce(&'a mut A) -> U, FnB: FnOnce(&'a mut B) -> U>(
        &'a mut self,
        primary: FnA,
        secondary: FnB,
    ) -> U {
        match self {
            Self::Primary(a) => primary(a),
            Self::Secondary(b) => secondary(b),
        }
    }
    /// Equivalent to `match &mut self`.
    pub(crate) fn match_mut_ctx<
        'a,
        T,
        U,
        FnA: FnOnce(T, &'a mut A) -> U,
        FnB: FnOnce(T, &'a mut B) -> U,
    >(
        &'a mut self,
        ctx: T,
        primary: FnA,
        secondary: FnB,
    ) -> U {
        match self {
            Self::Primary(a) => primary(ctx, a),
            Self::Secondary(b) => secondary(ctx, b),
        }
    }
    /// Equivalent to `match self`.
    pub(crate) fn match_owned<U, FnA: FnOnce(A) -> U, FnB: FnOnce(B) -> U>(
        self,
        primary: FnA,
        secondary: FnB,
    ) -> U {
        match self {
            Self::Primary(a) => primary(a),
            Self::Secondary(b) => secondary(b),
        }
    }
    /// Equivalent to `match self`.
    pub(crate) fn match_owned_ctx<U, T, FnA: FnOnce(T, A) -> U, FnB: FnOnce(T, B) -> U>(
        self,
        ctx: T,
        primary: FnA,
        secondary: FnB,
    ) -> U {
        match self {
            Self::Primary(a) => primary(ctx, a),
            Self::Secondary(b) => secondary(ctx, b),
        }
    }
    /// Stores `value` as the primary payload, dropping whatever was live, and returns a
    /// reference to it.
    ///
    /// If the primary side is already live, `value` is assigned over it in place.
    pub(crate) fn set_primary(&mut self, value: A) -> &mut A {
        match self {
            Self::Primary(a) => *a = value,
            Self::Secondary(_) => *self = Self::Primary(value),
        }
        match self {
            Self::Primary(a) => a,
            Self::Secondary(_) => unsafe { crate::unreachable_unchecked!() },
        }
    }
    /// Mirror of [`Self::set_primary`].
    pub(crate) fn set_secondary(&mut self, value: B) -> &mut B {
        match self {
            Self::Secondary(b) => *b = value,
            Self::Primary(_) => *self = Self::Secondary(value),
        }
        match self {
            Self::Secondary(b) => b,
            Self::Primary(_) => unsafe { crate::unreachable_unchecked!() },
        }
    }
    /// Moves the payload out, leaving `replacement` in its place.
    pub(crate) fn replace(&mut self, replacement: Self) -> Self {
        core::mem::replace(self, replacement)
    }
    pub(crate) fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other)
    }
    pub(crate) const fn as_ref(&self) -> Tagged<&A, &B> {
        match self {
            Self::Primary(a) => Tagged::Primary(a),
            Self::Secondary(b) => Tagged::Secondary(b),
        }
    }
    #[rustversion::attr(since(1.83), const)]
    pub(crate) fn as_mut(&mut self) -> Tagged<&mut A, &mut B> {
        match self {
            Self::Primary(a) => Tagged::Primary(a),
            Self::Secondary(b) => Tagged::Secondary(b),
        }
    }
}

impl<A: core::hash::Hash, B: core::hash::Hash> core::hash::Hash for Tagged<A, B> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        match self {
            Self::Primary(a) => {
                true.hash(state);
                a.hash(state)
            }
            Self::Secondary(b) => {
                false.hash(state);
                b.hash(state)
            }
        }
    }
}

impl<A: PartialEq, B: PartialEq> PartialEq for Tagged<A, B> {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Primary(a), Self::Primary(b)) => a.eq(b),
            (Self::Secondary(a), Self::Secondary(b)) => a.eq(b),
            _ => false,
        }
    }
}
impl<A: Eq, B: Eq> Eq for Tagged<A, B> {}

#[cfg(test)]
mod tests {
    use super::Tagged;
    use core::cell::Cell;

    struct Counted<'a>(&'a Cell<usize>);
    impl Drop for Counted<'_> {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1)
        }
    }

    #[test]
    fn switching_sides_drops_once() {
        let primaries = Cell::new(0);
        let secondaries = Cell::new(0);
        let mut tagged = Tagged::Primary(Counted(&primaries));
        tagged.set_secondary(Counted(&secondaries));
        assert_eq!(primaries.get(), 1);
        assert_eq!(secondaries.get(), 0);
        tagged.set_secondary(Counted(&secondaries));
        assert_eq!(secondaries.get(), 1);
        tagged.set_primary(Counted(&primaries));
        assert_eq!(primaries.get(), 1);
        assert_eq!(secondaries.get(), 2);
        drop(tagged);
        assert_eq!(primaries.get(), 2);
        assert_eq!(secondaries.get(), 2);
    }

    #[test]
    fn same_side_assigns_in_place() {
        let mut tagged: Tagged<u32, &str> = Tagged::Primary(1);
        *tagged.set_primary(2) += 1;
        assert!(tagged == Tagged::Primary(3));
        assert_eq!(*tagged.set_secondary("gone"), "gone");
        assert!(!tagged.is_primary());
    }

    #[test]
    fn random_lifecycle_drops_every_payload_once() {
        use rand::{Rng, SeedableRng};
        let mut rng = rand::rngs::StdRng::seed_from_u64(0);
        let drops = Cell::new(0);
        let mut created = 1;
        let mut tagged = Tagged::Primary(Counted(&drops));
        for _ in 0..1000 {
            match rng.gen_range(0..4) {
                0 => {
                    tagged.set_primary(Counted(&drops));
                }
                1 => {
                    tagged.set_secondary(Counted(&drops));
                }
                2 => {
                    let mut other = Tagged::Secondary(Counted(&drops));
                    tagged.swap(&mut other);
                }
                _ => {
                    tagged.replace(Tagged::Primary(Counted(&drops)));
                }
            }
            created += 1;
            assert_eq!(drops.get(), created - 1);
        }
        drop(tagged);
        assert_eq!(drops.get(), created);
    }

    #[test]
    fn dispatch() {
        let mut tagged: Tagged<u8, u16> = Tagged::Secondary(7);
        let mut seen = 0u32;
        tagged.match_ref_ctx(&mut seen, |s, a| *s += *a as u32, |s, b| *s += *b as u32 * 2);
        assert_eq!(seen, 14);
        tagged.match_mut(|a| *a = 0, |b| *b += 1);
        assert_eq!(tagged.match_owned(u16::from, |b| b), 8);
    }
}
