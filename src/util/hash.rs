#![cfg(test)]

use crate::collections::hash::Equivalence;

/// A value paired with the hash it should report, for forcing collisions in tests.
#[derive(Debug, Clone, Copy)]
pub struct ManualHash<T: Eq> {
    hash: u64,
    value: T,
}

impl<T: Eq> ManualHash<T> {
    pub const fn new(hash: u64, value: T) -> ManualHash<T> {
        ManualHash { hash, value }
    }

    pub fn value(self) -> T {
        self.value
    }
}

/// Compares [`ManualHash`]es by value only and hashes them to their stated hash.
#[derive(Debug, Default, Clone, Copy)]
pub struct ManualEquivalence;

impl<T: Eq> Equivalence<ManualHash<T>> for ManualEquivalence {
    fn equals(&self, a: &ManualHash<T>, b: &ManualHash<T>) -> bool {
        a.value == b.value
    }

    fn hash(&self, item: &ManualHash<T>) -> u64 {
        item.hash
    }
}

/// Sends every element to the same slot.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConstantEquivalence;

impl<T: Eq> Equivalence<T> for ConstantEquivalence {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash(&self, _item: &T) -> u64 {
        0
    }
}
