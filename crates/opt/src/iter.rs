//! Iteration over the zero or one values of an option.

use std::iter::FusedIterator;

use crate::opt::Opt;

/// Borrowing iterator returned by [`Opt::iter`].
#[derive(Clone, Debug)]
pub struct Iter<'a, T> {
    inner: std::option::IntoIter<&'a T>,
}

/// Owning iterator returned by `Opt::into_iter`.
#[derive(Clone, Debug)]
pub struct IntoIter<T> {
    inner: std::option::IntoIter<T>,
}

impl<T> Opt<T> {
    /// Yields a reference to the value, if any. Each call starts a fresh
    /// sequence; lazy options are forced once.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { inner: self.as_ref().into_option().into_iter() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> { self.inner.next() }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> { self.inner.next_back() }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> { self.inner.next() }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) { self.inner.size_hint() }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> { self.inner.next_back() }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> IntoIterator for Opt<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self.into_option().into_iter() }
    }
}

impl<'a, T> IntoIterator for &'a Opt<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Iter<'a, T> { self.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn some_yields_once() {
        let some = Opt::Some(5);
        assert_eq!(some.iter().collect::<Vec<_>>(), vec![&5]);
        // Restartable.
        assert_eq!(some.iter().len(), 1);
        assert_eq!(some.into_iter().collect::<Vec<_>>(), vec![5]);
    }

    #[test]
    fn none_yields_nothing() {
        let none = Opt::<u8>::None;
        assert_eq!(none.iter().next(), None);
        let mut count = 0;
        for _ in &none {
            count += 1;
        }
        assert_eq!(count, 0);
    }
}
