//! Transformation and inspection combinators for [`Maybe`].
//!
//! Transformations take `self` by value and return a new `Maybe`; the
//! inspections borrow. Callbacks run synchronously, at most once, and any
//! panic they raise propagates to the caller.

use alloc::vec::Vec;

use crate::maybe::Maybe;

impl<A> Maybe<A> {
    /// Applies `folder` to the contained value, or returns `fallback` if empty.
    ///
    /// ```
    /// use maybe::Maybe;
    ///
    /// assert_eq!(Maybe::Some(2).fold(0, |n| n * 10), 20);
    /// assert_eq!(Maybe::None.fold(0, |n: i32| n * 10), 0);
    /// ```
    pub fn fold<B, F>(self, fallback: B, folder: F) -> B
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Maybe::Some(value) => folder(value),
            Maybe::None => fallback,
        }
    }

    /// Maps `Maybe<A>` to `Maybe<B>` by applying `f` to the contained value.
    pub fn map<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> B,
    {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Like [`map`](Self::map), but `f` decides presence of the result itself.
    pub fn flat_map<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Maybe<B>,
    {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Applies a partial function to the contained value.
    ///
    /// `f` signals "no result" by returning `Option::None`. Any `Option::Some`
    /// is kept, even when the payload is itself an empty-looking value.
    ///
    /// ```
    /// use maybe::Maybe;
    ///
    /// let halved = Maybe::Some(10).collect(|n| (n % 2 == 0).then(|| n / 2));
    /// assert_eq!(halved, Maybe::Some(5));
    ///
    /// let odd = Maybe::Some(7).collect(|n| (n % 2 == 0).then(|| n / 2));
    /// assert!(odd.is_empty());
    ///
    /// let unit = Maybe::Some(1).collect(|_| Some(()));
    /// assert!(unit.is_defined());
    /// ```
    pub fn collect<B, F>(self, f: F) -> Maybe<B>
    where
        F: FnOnce(A) -> Option<B>,
    {
        match self {
            Maybe::Some(value) => f(value).into(),
            Maybe::None => Maybe::None,
        }
    }

    /// Keeps the value only if `predicate` holds for it.
    pub fn filter<P>(self, predicate: P) -> Maybe<A>
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Maybe::Some(value) => {
                if predicate(&value) {
                    Maybe::Some(value)
                } else {
                    Maybe::None
                }
            }
            Maybe::None => Maybe::None,
        }
    }

    /// Keeps the value only if `predicate` does not hold for it.
    pub fn filter_not<P>(self, predicate: P) -> Maybe<A>
    where
        P: FnOnce(&A) -> bool,
    {
        self.filter(|value| !predicate(value))
    }

    /// Pairs two present values; empty if either side is empty.
    pub fn zip<B>(self, that: Maybe<B>) -> Maybe<(A, B)> {
        match (self, that) {
            (Maybe::Some(a), Maybe::Some(b)) => Maybe::Some((a, b)),
            _ => Maybe::None,
        }
    }

    /// Calls `consumer` with the contained value, if any.
    pub fn for_each<F>(&self, consumer: F)
    where
        F: FnOnce(&A),
    {
        if let Maybe::Some(value) = self {
            consumer(value);
        }
    }

    /// Returns `predicate(value)`, or `false` if empty.
    pub fn exists<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Maybe::Some(value) => predicate(value),
            Maybe::None => false,
        }
    }

    /// Returns `predicate(value)`, or `true` if empty.
    pub fn for_all<P>(&self, predicate: P) -> bool
    where
        P: FnOnce(&A) -> bool,
    {
        match self {
            Maybe::Some(value) => predicate(value),
            Maybe::None => true,
        }
    }

    /// Returns true if the contained value equals `element`.
    pub fn contains<U>(&self, element: &U) -> bool
    where
        A: PartialEq<U>,
    {
        match self {
            Maybe::Some(value) => value == element,
            Maybe::None => false,
        }
    }

    /// Returns a one-element list holding a clone of the value, or an empty list.
    pub fn to_list(&self) -> Vec<A>
    where
        A: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Consumes `self` into a list of zero or one element.
    pub fn into_list(self) -> Vec<A> {
        self.into_iter().collect()
    }
}

impl<X, Y> Maybe<(X, Y)> {
    /// Splits a present pair into two present values; empty gives two empties.
    pub fn unzip(self) -> (Maybe<X>, Maybe<Y>) {
        match self {
            Maybe::Some((x, y)) => (Maybe::Some(x), Maybe::Some(y)),
            Maybe::None => (Maybe::None, Maybe::None),
        }
    }
}

impl<X, Y, Z> Maybe<(X, Y, Z)> {
    /// Splits a present triple into three present values; empty gives three empties.
    pub fn unzip3(self) -> (Maybe<X>, Maybe<Y>, Maybe<Z>) {
        match self {
            Maybe::Some((x, y, z)) => (Maybe::Some(x), Maybe::Some(y), Maybe::Some(z)),
            Maybe::None => (Maybe::None, Maybe::None, Maybe::None),
        }
    }
}
