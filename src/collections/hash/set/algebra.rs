//! The algebra of sets, built on the primitive insert / remove / contains operations of
//! [`HashSet`] and enumeration of the other operand.
//!
//! The other operand is any [`Sequence`], which may repeat elements. Where an operation needs to
//! know the distinct elements or their count, the sequence is first materialized into a temporary
//! set of references that shares the receiver's equivalence.
//!
//! Mutating operations take `&mut self`, so their other operand can never be the set itself. The
//! predicates take `&self`, and check for that case by address and size before doing any work.

use std::mem;
use std::ops::{BitAndAssign, BitOrAssign, BitXorAssign, SubAssign};
use std::ptr;

use super::HashSet;
use super::table::Table;
use crate::collections::hash::capacity;
use crate::collections::hash::{Borrowed, Equivalence};
use crate::collections::traits::Sequence;

impl<T, E: Equivalence<T>> HashSet<T, E> {
    /// Adds every element of `other` to `self`. (`self ∪ other`)
    pub fn union_with<S>(&mut self, other: &S)
    where
        T: Clone,
        S: Sequence<T> + ?Sized,
    {
        for item in other.elements() {
            if !self.contains(item) {
                self.insert(item.clone());
            }
        }
    }

    /// Removes every element of `other` from `self`, skipping those that aren't present.
    /// (`self \ other`)
    pub fn except_with<S>(&mut self, other: &S)
    where
        S: Sequence<T> + ?Sized,
    {
        for item in other.elements() {
            if self.is_empty() {
                return;
            }
            self.remove(item);
        }
    }

    /// Retains only the elements of `self` that are also in `other`. (`self ∩ other`)
    pub fn intersect_with<S>(&mut self, other: &S)
    where
        S: Sequence<T> + ?Sized,
    {
        if self.is_empty() {
            return;
        }

        // Move the current contents aside, then bring back each one that other also holds. Taking
        // from the snapshot means repeats in other are only brought back once.
        let cap = self.cap();
        let mut snapshot = mem::replace(&mut self.table, Table::with_cap(cap));
        self.table.version = snapshot.version.wrapping_add(1);

        for item in other.elements() {
            if snapshot.len() == 0 {
                break;
            }
            if let Some(found) = snapshot.take(&self.equivalence, item) {
                self.table.insert(&self.equivalence, found);
            }
        }
    }

    /// Leaves `self` holding the elements that are in exactly one of `self` and `other`.
    /// (`self △ other`)
    pub fn symmetric_except_with<S>(&mut self, other: &S)
    where
        T: Clone,
        S: Sequence<T> + ?Sized,
    {
        if self.is_empty() {
            self.union_with(other);
            return;
        }

        // Each distinct element toggles membership once, however often other repeats it.
        let distinct = materialize(&self.equivalence, other);
        for item in distinct.iter() {
            if self.table.take(&self.equivalence, *item).is_none() {
                self.table.insert(&self.equivalence, (*item).clone());
            }
        }
    }

    /// Returns true if every element of `self` is in `other`. (`self ⊆ other`)
    pub fn is_subset_of<S>(&self, other: &S) -> bool
    where
        S: Sequence<T> + ?Sized,
    {
        if self.is_same(other) || self.is_empty() {
            return true;
        }

        let copy = materialize(&self.equivalence, other);
        if self.len() > copy.len() {
            return false;
        }
        self.iter().all(|item| copy.contains(&item))
    }

    /// Returns true if every element of `other` is in `self`. (`self ⊇ other`)
    pub fn is_superset_of<S>(&self, other: &S) -> bool
    where
        S: Sequence<T> + ?Sized,
    {
        if self.is_same(other) {
            return true;
        }

        let copy = materialize(&self.equivalence, other);
        copy.len() <= self.len() && copy.iter().all(|item| self.contains(*item))
    }

    /// Returns true if every element of `self` is in `other`, and `other` has elements that `self`
    /// doesn't. (`self ⊂ other`)
    pub fn is_proper_subset_of<S>(&self, other: &S) -> bool
    where
        S: Sequence<T> + ?Sized,
    {
        if self.is_same(other) {
            return false;
        }

        let copy = materialize(&self.equivalence, other);
        if self.len() >= copy.len() {
            return false;
        }
        self.iter().all(|item| copy.contains(&item))
    }

    /// Returns true if every element of `other` is in `self`, and `self` has elements that `other`
    /// doesn't. (`self ⊃ other`)
    pub fn is_proper_superset_of<S>(&self, other: &S) -> bool
    where
        S: Sequence<T> + ?Sized,
    {
        if self.is_same(other) {
            return false;
        }

        let copy = materialize(&self.equivalence, other);
        copy.len() < self.len() && copy.iter().all(|item| self.contains(*item))
    }

    /// Returns true if `self` and `other` share at least one element. (`self ∩ other ≠ ∅`)
    pub fn overlaps<S>(&self, other: &S) -> bool
    where
        S: Sequence<T> + ?Sized,
    {
        if self.is_empty() {
            return false;
        }
        other.elements().any(|item| self.contains(item))
    }

    /// Returns true if `self` and `other` contain exactly the same elements, ignoring order and
    /// repeats in `other`. (`self = other`)
    pub fn set_equals<S>(&self, other: &S) -> bool
    where
        S: Sequence<T> + ?Sized,
    {
        if self.is_same(other) {
            return true;
        }

        let copy = materialize(&self.equivalence, other);
        copy.len() == self.len() && copy.iter().all(|item| self.contains(*item))
    }

    /// Adds every element of `b` to `a`, returning `a`.
    pub fn union<S>(mut a: HashSet<T, E>, b: &S) -> HashSet<T, E>
    where
        T: Clone,
        S: Sequence<T> + ?Sized,
    {
        a.union_with(b);
        a
    }

    /// Checks if `other` is this very set, rather than an equal one. A zero-sized sequence can
    /// share the set's address, so the sizes have to match as well.
    fn is_same<S: ?Sized>(&self, other: &S) -> bool {
        ptr::addr_eq(self, other) && mem::size_of_val(self) == mem::size_of_val(other)
    }
}

/// Collects the distinct elements of `other`, by reference, into a set using `equivalence`.
fn materialize<'a, T, E, S>(equivalence: &'a E, other: &'a S) -> HashSet<&'a T, Borrowed<'a, E>>
where
    E: Equivalence<T>,
    S: Sequence<T> + ?Sized,
{
    let elements = other.elements();
    let mut copy = HashSet::with_slots(
        capacity::cap_for_count(elements.size_hint().0),
        Borrowed(equivalence),
    );
    copy.extend(elements);
    copy
}

impl<T, E: Equivalence<T>> PartialEq for HashSet<T, E> {
    fn eq(&self, other: &Self) -> bool {
        self.set_equals(other)
    }
}

impl<T, E: Equivalence<T>> Eq for HashSet<T, E> {}

impl<T, E, S> BitOrAssign<&S> for HashSet<T, E>
where
    T: Clone,
    E: Equivalence<T>,
    S: Sequence<T> + ?Sized,
{
    fn bitor_assign(&mut self, rhs: &S) {
        self.union_with(rhs);
    }
}

impl<T, E, S> BitAndAssign<&S> for HashSet<T, E>
where
    E: Equivalence<T>,
    S: Sequence<T> + ?Sized,
{
    fn bitand_assign(&mut self, rhs: &S) {
        self.intersect_with(rhs);
    }
}

impl<T, E, S> BitXorAssign<&S> for HashSet<T, E>
where
    T: Clone,
    E: Equivalence<T>,
    S: Sequence<T> + ?Sized,
{
    fn bitxor_assign(&mut self, rhs: &S) {
        self.symmetric_except_with(rhs);
    }
}

impl<T, E, S> SubAssign<&S> for HashSet<T, E>
where
    E: Equivalence<T>,
    S: Sequence<T> + ?Sized,
{
    fn sub_assign(&mut self, rhs: &S) {
        self.except_with(rhs);
    }
}

impl<T, E> Sequence<T> for HashSet<T, E> {
    fn elements<'a>(&'a self) -> impl Iterator<Item = &'a T>
    where
        T: 'a,
    {
        self.iter()
    }
}
