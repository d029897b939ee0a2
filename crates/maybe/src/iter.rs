//! # Iteration
//!
//! A [`Maybe`] is a sequence of at most one element. The iterators here are
//! built fresh on every request, so iterating the same value twice yields the
//! same element twice; the `Maybe` itself keeps no cursor.
//!
//! All three iterators report an exact `size_hint` and implement
//! `DoubleEndedIterator`, `ExactSizeIterator`, and `FusedIterator`.
//!
//! ```
//! use maybe::Maybe;
//!
//! let five = Maybe::Some(5);
//! assert_eq!(five.iter().copied().collect::<Vec<_>>(), vec![5]);
//! assert_eq!(five.iter().copied().collect::<Vec<_>>(), vec![5]);
//!
//! let mut total = 0;
//! for n in &five {
//!     total += n;
//! }
//! assert_eq!(total, 5);
//! ```

use core::iter::FusedIterator;

use crate::maybe::Maybe;

/// Borrowing iterator over a [`Maybe`], created by [`Maybe::iter`].
#[derive(Debug, Clone)]
pub struct Iter<'a, A> {
    inner: Option<&'a A>,
}

/// Mutably borrowing iterator over a [`Maybe`], created by [`Maybe::iter_mut`].
#[derive(Debug)]
pub struct IterMut<'a, A> {
    inner: Option<&'a mut A>,
}

/// Owning iterator over a [`Maybe`].
#[derive(Debug, Clone)]
pub struct IntoIter<A> {
    inner: Option<A>,
}

impl<A> Maybe<A> {
    /// Returns a fresh iterator over the contained value.
    pub fn iter(&self) -> Iter<'_, A> {
        Iter {
            inner: self.as_ref().into(),
        }
    }

    /// Returns a fresh iterator over a mutable reference to the contained value.
    pub fn iter_mut(&mut self) -> IterMut<'_, A> {
        IterMut {
            inner: self.as_mut().into(),
        }
    }
}

macro_rules! single_item_iterator {
    ($name:ident < $($gen:tt),+ >, $item:ty) => {
        impl<$($gen),+> Iterator for $name<$($gen),+> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.take()
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                let n = usize::from(self.inner.is_some());
                (n, Some(n))
            }
        }

        impl<$($gen),+> DoubleEndedIterator for $name<$($gen),+> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.take()
            }
        }

        impl<$($gen),+> ExactSizeIterator for $name<$($gen),+> {}

        impl<$($gen),+> FusedIterator for $name<$($gen),+> {}
    };
}

single_item_iterator!(Iter<'a, A>, &'a A);
single_item_iterator!(IterMut<'a, A>, &'a mut A);
single_item_iterator!(IntoIter<A>, A);

impl<A> IntoIterator for Maybe<A> {
    type Item = A;
    type IntoIter = IntoIter<A>;

    fn into_iter(self) -> IntoIter<A> {
        IntoIter { inner: self.into() }
    }
}

impl<'a, A> IntoIterator for &'a Maybe<A> {
    type Item = &'a A;
    type IntoIter = Iter<'a, A>;

    fn into_iter(self) -> Iter<'a, A> {
        self.iter()
    }
}

impl<'a, A> IntoIterator for &'a mut Maybe<A> {
    type Item = &'a mut A;
    type IntoIter = IterMut<'a, A>;

    fn into_iter(self) -> IterMut<'a, A> {
        self.iter_mut()
    }
}

/// Takes the first element of the sequence; an empty sequence gives `None`.
impl<A> FromIterator<A> for Maybe<A> {
    fn from_iter<I: IntoIterator<Item = A>>(iter: I) -> Self {
        iter.into_iter().next().into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;

    #[test]
    fn test_iter_is_restartable() {
        let five = Maybe::Some(5);
        assert_eq!(five.iter().collect::<Vec<_>>(), vec![&5]);
        assert_eq!(five.iter().collect::<Vec<_>>(), vec![&5]);
    }

    #[test]
    fn test_size_hint_tracks_consumption() {
        let five = Maybe::Some(5);
        let mut iter = five.iter();
        assert_eq!(iter.size_hint(), (1, Some(1)));
        assert_eq!(iter.next(), Some(&5));
        assert_eq!(iter.size_hint(), (0, Some(0)));
        assert_eq!(iter.len(), 0);

        let empty: Maybe<i32> = Maybe::None;
        assert_eq!(empty.iter().size_hint(), (0, Some(0)));
    }

    #[test]
    fn test_fused_iterator() {
        let mut iter = Maybe::Some('x').into_iter();
        assert_eq!(iter.next(), Some('x'));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);

        fn assert_fused<I: FusedIterator>(_: I) {}
        assert_fused(iter);
    }

    #[test]
    fn test_next_back() {
        let mut iter = Maybe::Some(1).into_iter();
        assert_eq!(iter.next_back(), Some(1));
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_iter_mut_updates_in_place() {
        let mut value = Maybe::Some(1);
        for n in &mut value {
            *n += 1;
        }
        assert_eq!(value, Maybe::Some(2));
    }

    #[test]
    fn test_from_iterator_keeps_first() {
        let first: Maybe<i32> = vec![3, 4, 5].into_iter().collect();
        assert_eq!(first, Maybe::Some(3));

        let empty: Maybe<i32> = Vec::new().into_iter().collect();
        assert_eq!(empty, Maybe::None);
    }
}
