use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use super::table::Table;
use super::{Iter, Walker};
use crate::collections::hash::capacity::{self, DEFAULT_CAP};
use crate::collections::hash::{
    AbsentArgument, Equivalence, Hashed, IndexOutOfBounds, InsufficientSpace, InvalidCapacity,
    SetError,
};
use crate::util::result::ResultExtension;

/// A set of unique elements, stored in an array of slots with separately-chained collisions.
///
/// Equality and hashing come from the set's [`Equivalence`], which defaults to [`Hashed`]: the
/// element's own [`Hash`] and [`Eq`] implementations with a randomly seeded hasher.
///
/// The table grows when its length reaches its capacity (a load factor of 1), and never shrinks.
/// Iteration order is unspecified and may change whenever the set grows.
///
/// It is a logic error for an element to be modified in a way that changes its hash or equality
/// while it is in the set. Because of this, HashSet's API never hands out mutable access to its
/// elements.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of elements in the HashSet.
/// - `m`: The number of elements in the other operand of a set operation.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)`** |
/// | `contains` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `clear` | `O(cap)` |
/// | `union_with` / `except_with` / `intersect_with` / `symmetric_except_with` | `O(m)`* |
/// | `is_subset_of` and other predicates | `O(n + m)`* |
///
/// \* Assuming the equivalence distributes elements well. In the worst case (every element in one
/// chain) these become linear in the length of that chain.
///
/// \** When an insertion fills the table, every element is re-inserted into a larger one.
pub struct HashSet<T, E = Hashed> {
    pub(crate) table: Table<T>,
    pub(crate) equivalence: E,
}

impl<T> HashSet<T> {
    /// Creates a new, empty HashSet with [`DEFAULT_CAP`] slots and the default [`Hashed`]
    /// equivalence.
    pub fn new() -> HashSet<T> {
        HashSet::with_equivalence(Hashed::default())
    }

    /// Creates a new, empty HashSet with `cap` slots and the default [`Hashed`] equivalence.
    ///
    /// # Panics
    /// Panics if `cap` is 0. See [`HashSet::try_with_cap`] for a non-panicking version.
    pub fn with_cap(cap: usize) -> HashSet<T> {
        HashSet::try_with_cap(cap).throw()
    }

    /// Creates a new, empty HashSet with `cap` slots, or an [`InvalidCapacity`] error if `cap` is 0.
    pub fn try_with_cap(cap: usize) -> Result<HashSet<T>, SetError> {
        HashSet::try_with_cap_and_equivalence(cap, Hashed::default())
    }

    /// Creates a HashSet holding every element of `source`, sized for the number of elements it
    /// reports. Fails with [`AbsentArgument`] if no source is provided.
    pub fn try_from_source<I>(source: Option<I>) -> Result<HashSet<T>, SetError>
    where
        T: Hash + Eq,
        I: IntoIterator<Item = T>,
    {
        HashSet::try_from_source_with_equivalence(source, Hashed::default())
    }
}

impl<T, E> HashSet<T, E> {
    /// Creates a new, empty HashSet with [`DEFAULT_CAP`] slots and the provided `equivalence`.
    pub fn with_equivalence(equivalence: E) -> HashSet<T, E> {
        HashSet::with_slots(DEFAULT_CAP, equivalence)
    }

    /// Creates a new, empty HashSet with `cap` slots and the provided `equivalence`.
    ///
    /// # Panics
    /// Panics if `cap` is 0. See [`HashSet::try_with_cap_and_equivalence`] for a non-panicking
    /// version.
    pub fn with_cap_and_equivalence(cap: usize, equivalence: E) -> HashSet<T, E> {
        HashSet::try_with_cap_and_equivalence(cap, equivalence).throw()
    }

    /// Creates a new, empty HashSet with `cap` slots and the provided `equivalence`, or an
    /// [`InvalidCapacity`] error if `cap` is 0.
    pub fn try_with_cap_and_equivalence(cap: usize, equivalence: E) -> Result<HashSet<T, E>, SetError> {
        if cap == 0 {
            return Err(InvalidCapacity { cap }.into());
        }
        Ok(HashSet::with_slots(cap, equivalence))
    }

    pub(crate) fn with_slots(cap: usize, equivalence: E) -> HashSet<T, E> {
        HashSet {
            table: Table::with_cap(cap),
            equivalence,
        }
    }

    /// Returns the number of elements in the HashSet.
    pub const fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the HashSet contains no elements.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of slots in the HashSet.
    pub fn cap(&self) -> usize {
        self.table.cap()
    }

    /// Returns the equivalence used to compare and hash elements.
    pub const fn equivalence(&self) -> &E {
        &self.equivalence
    }

    /// Removes every element from the HashSet, keeping its capacity.
    pub fn clear(&mut self) {
        if self.is_empty() {
            return;
        }

        log::trace!("clearing {} elements from {} slots", self.len(), self.cap());
        self.table.clear();
    }

    /// Returns an iterator over every element in the HashSet, as references. Elements are produced
    /// slot by slot, then in chain order.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Returns a [`Walker`] positioned before the first element of the HashSet.
    pub fn walker(&self) -> Walker {
        Walker::new(self.table.id(), self.table.version)
    }

    /// Clones every element into `destination`, starting at index `start` and in iteration order.
    ///
    /// Fails without writing anything if `start` isn't an index of `destination`
    /// ([`IndexOutOfBounds`]) or if there isn't room for every element after it
    /// ([`InsufficientSpace`]).
    pub fn copy_to(&self, destination: &mut [T], start: usize) -> Result<(), SetError>
    where
        T: Clone,
    {
        if start >= destination.len() {
            return Err(IndexOutOfBounds {
                index: start,
                len: destination.len(),
            }
            .into());
        }

        let available = destination.len() - start;
        if available < self.len() {
            return Err(InsufficientSpace {
                required: self.len(),
                available,
            }
            .into());
        }

        for (target, item) in destination[start..].iter_mut().zip(self.iter()) {
            target.clone_from(item);
        }
        Ok(())
    }
}

impl<T, E: Equivalence<T>> HashSet<T, E> {
    /// Creates a HashSet holding every element of `source` and using the provided `equivalence`.
    /// Fails with [`AbsentArgument`] if no source is provided.
    pub fn try_from_source_with_equivalence<I>(
        source: Option<I>,
        equivalence: E,
    ) -> Result<HashSet<T, E>, SetError>
    where
        I: IntoIterator<Item = T>,
    {
        let source = source.ok_or(AbsentArgument { name: "source" })?;
        Ok(HashSet::from_iter_with(source, equivalence))
    }

    pub(crate) fn from_iter_with<I: IntoIterator<Item = T>>(source: I, equivalence: E) -> HashSet<T, E> {
        let iter = source.into_iter();
        let mut set = HashSet::with_slots(capacity::cap_for_count(iter.size_hint().0), equivalence);
        set.extend(iter);
        set
    }

    /// Inserts `item` if the HashSet doesn't already contain an equal element, growing if required.
    /// Returns true if the item was newly inserted.
    ///
    /// As with the standard library, an element that is already present isn't replaced.
    pub fn insert(&mut self, item: T) -> bool {
        self.table.insert(&self.equivalence, item)
    }

    /// Inserts a possibly absent `item`, failing with [`AbsentArgument`] if it is [`None`].
    /// Otherwise returns `Ok(true)` once the element is present, whether it was newly inserted or
    /// already there.
    pub fn add(&mut self, item: Option<T>) -> Result<bool, SetError> {
        let item = item.ok_or(AbsentArgument { name: "item" })?;
        self.insert(item);
        Ok(true)
    }

    /// Returns true if the HashSet contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        // Q is a borrowed form of T, which the equivalence must treat the same way.
        T: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        self.table.find(&self.equivalence, item).is_some()
    }

    /// Returns true if `item` is present and the HashSet contains an element equal to it. An absent
    /// item is never contained.
    pub fn contains_opt<Q>(&self, item: Option<&Q>) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        item.is_some_and(|item| self.contains(item))
    }

    /// Returns a reference to the stored element equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        self.table.find(&self.equivalence, item)
    }

    /// Removes and returns the stored element equal to `item`, if there is one.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        self.table.take(&self.equivalence, item)
    }

    /// Removes the element equal to `item`, returning true if there was one.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        self.take(item).is_some()
    }

    /// Removes a possibly absent `item`, failing with [`AbsentArgument`] if it is [`None`].
    pub fn try_remove<Q>(&mut self, item: Option<&Q>) -> Result<bool, SetError>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q>,
    {
        let item = item.ok_or(AbsentArgument { name: "item" })?;
        Ok(self.remove(item))
    }
}

impl<T> Default for HashSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, E: Clone> Clone for HashSet<T, E> {
    fn clone(&self) -> Self {
        HashSet {
            table: self.table.clone(),
            equivalence: self.equivalence.clone(),
        }
    }
}

impl<T, E: Equivalence<T> + Default> FromIterator<T> for HashSet<T, E> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        HashSet::from_iter_with(value, E::default())
    }
}

impl<T, E: Equivalence<T>> Extend<T> for HashSet<T, E> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert(item);
        }
    }
}

impl<T: Debug, E: Debug> Debug for HashSet<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugContents(self))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("equivalence", &self.equivalence)
            .finish()
    }
}

struct DebugContents<'a, T, E>(&'a HashSet<T, E>);

impl<T: Debug, E> Debug for DebugContents<'_, T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.0.iter()).finish()
    }
}

impl<T: Display, E> Display for HashSet<T, E> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#{{")?;
        for (index, item) in self.iter().enumerate() {
            if index != 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}
