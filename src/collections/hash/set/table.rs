use std::borrow::Borrow;
use std::iter;
use std::mem;

use crate::collections::hash::Equivalence;
use crate::collections::hash::capacity;

/// The bucket array behind a [`HashSet`](super::HashSet): a boxed slice of slots, each the root of a
/// singly-linked chain of entries.
///
/// A Table knows nothing about equality or hashing, every lookup is handed the
/// [`Equivalence`] to use. This keeps the table and the equivalence as separate fields of the set,
/// so that the set can borrow one while mutating the other.
///
/// Invariants:
/// - `slots` is never empty while the Table is reachable from a set.
/// - An entry holding `v` is only reachable from slot `hash(v) % cap`.
/// - `len` is the number of reachable entries, and is always less than `cap` between operations.
pub(crate) struct Table<T> {
    pub(crate) slots: Box<[Slot<T>]>,
    pub(crate) len: usize,
    pub(crate) version: u64,
}

pub(crate) type Slot<T> = Option<Box<Entry<T>>>;

pub(crate) struct Entry<T> {
    pub(crate) item: T,
    pub(crate) next: Slot<T>,
}

impl<T> Entry<T> {
    pub(crate) const fn new(item: T, next: Slot<T>) -> Entry<T> {
        Entry { item, next }
    }
}

impl<T> Table<T> {
    /// Allocates a Table with `cap` empty slots. Callers are responsible for `cap` being non-zero.
    pub(crate) fn with_cap(cap: usize) -> Table<T> {
        Table {
            slots: empty_slots(cap),
            len: 0,
            version: 0,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn cap(&self) -> usize {
        self.slots.len()
    }

    /// Identifies the slot array, which keeps its address until the Table is resized or dropped.
    pub(crate) fn id(&self) -> usize {
        self.slots.as_ptr().addr()
    }

    /// Calculates the slot an item with this hash belongs in.
    pub(crate) fn index_of<Q, E>(&self, equivalence: &E, item: &Q) -> usize
    where
        Q: ?Sized,
        E: Equivalence<Q> + ?Sized,
    {
        // UNCHECKED: The slot count is never 0.
        (equivalence.hash(item) % self.slots.len() as u64) as usize
    }

    /// Walks the chain that `item` hashes to, returning the stored element equal to it.
    pub(crate) fn find<Q, E>(&self, equivalence: &E, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q> + ?Sized,
    {
        let index = self.index_of(equivalence, item);
        chain(&self.slots[index])
            .find(|existing| equivalence.equals(Borrow::<Q>::borrow(*existing), item))
    }

    /// Inserts `item` unless an equal element is already stored, growing the Table if it becomes
    /// full. Returns true if the item was newly inserted.
    pub(crate) fn insert<E>(&mut self, equivalence: &E, item: T) -> bool
    where
        E: Equivalence<T> + ?Sized,
    {
        if self.find(equivalence, &item).is_some() {
            return false;
        }

        let index = self.index_of(equivalence, &item);

        match &mut self.slots[index] {
            Some(head) => {
                // Splice in directly after the head, so that the rest of the chain is kept intact.
                let next = head.next.take();
                head.next = Some(Box::new(Entry::new(item, next)));
            },
            None => self.slots[index] = Some(Box::new(Entry::new(item, None))),
        }

        self.len += 1;
        self.touch();

        if self.len == self.cap() {
            self.resize(equivalence);
        }

        true
    }

    /// Unlinks and returns the stored element equal to `item`, wherever it sits in its chain.
    pub(crate) fn take<Q, E>(&mut self, equivalence: &E, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: ?Sized,
        E: Equivalence<Q> + ?Sized,
    {
        let index = self.index_of(equivalence, item);

        // A cursor over the link that owns the current entry, starting with the slot itself.
        let mut link = &mut self.slots[index];
        while link
            .as_ref()
            .is_some_and(|entry| !equivalence.equals(Borrow::<Q>::borrow(&entry.item), item))
        {
            link = &mut link.as_mut()?.next;
        }

        // Either the chain ran out, or link owns the match: point it past the removed entry.
        let removed = link.take()?;
        let Entry { item, next } = *removed;
        *link = next;

        self.len -= 1;
        self.touch();
        Some(item)
    }

    /// Drops every entry, keeping the current capacity.
    pub(crate) fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            drop_chain(slot.take());
        }
        self.len = 0;
        self.touch();
    }

    /// Replaces the slots with a larger array and re-inserts every element into it.
    fn resize<E>(&mut self, equivalence: &E)
    where
        E: Equivalence<T> + ?Sized,
    {
        let old_cap = self.cap();
        let new_cap = capacity::grown_cap(old_cap);
        log::debug!("growing hash set from {old_cap} to {new_cap} slots with {} elements", self.len);

        let old_slots = mem::replace(&mut self.slots, empty_slots(new_cap));
        self.len = 0;

        for mut link in old_slots {
            while let Some(entry) = link {
                let Entry { item, next } = *entry;
                link = next;
                // The new capacity exceeds the old length, so this can't trigger another resize.
                self.insert(equivalence, item);
            }
        }
    }

    /// Records a structural change.
    const fn touch(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}

impl<T: Clone> Clone for Table<T> {
    fn clone(&self) -> Self {
        let mut slots = empty_slots(self.cap());

        // Copy each chain in order, so that the clone has an identical layout.
        for (target, source) in slots.iter_mut().zip(self.slots.iter()) {
            let mut tail = target;
            for item in chain(source) {
                let entry = tail.insert(Box::new(Entry::new(item.clone(), None)));
                tail = &mut entry.next;
            }
        }

        Table {
            slots,
            len: self.len,
            version: 0,
        }
    }
}

impl<T> Drop for Table<T> {
    fn drop(&mut self) {
        for slot in self.slots.iter_mut() {
            drop_chain(slot.take());
        }
    }
}

fn empty_slots<T>(cap: usize) -> Box<[Slot<T>]> {
    iter::repeat_with(|| None).take(cap).collect()
}

/// Returns an iterator over the elements of the chain rooted at `slot`.
pub(crate) fn chain<T>(slot: &Slot<T>) -> impl Iterator<Item = &T> {
    iter::successors(slot.as_deref(), |entry| entry.next.as_deref()).map(|entry| &entry.item)
}

/// Drops a chain one entry at a time. Letting a long chain drop itself would recurse once per
/// entry.
pub(crate) fn drop_chain<T>(mut link: Slot<T>) {
    while let Some(mut entry) = link {
        link = entry.next.take();
    }
}
