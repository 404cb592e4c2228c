use std::collections::{BTreeSet, VecDeque};

/// A collection that can be enumerated by reference, any number of times.
///
/// Each call to [`elements`](Sequence::elements) produces a fresh, lazy iterator which is only
/// traversed once by its consumer. Sequences may contain duplicates; set operations treat repeated
/// elements as one.
pub trait Sequence<T> {
    /// Returns an iterator over every element in the sequence.
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a;
}

impl<T> Sequence<T> for [T] {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T, const N: usize> Sequence<T> for [T; N] {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> Sequence<T> for Vec<T> {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> Sequence<T> for VecDeque<T> {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}

impl<T> Sequence<T> for BTreeSet<T> {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}
