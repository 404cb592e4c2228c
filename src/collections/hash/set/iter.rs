use std::iter::FusedIterator;
use std::{mem, slice, vec};

use super::HashSet;
use super::table::{drop_chain, Entry, Slot};

impl<T, E> IntoIterator for HashSet<T, E> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> Self::IntoIter {
        // The table still drops normally, with no slots left to free.
        IntoIter {
            remaining: self.table.len,
            slots: mem::take(&mut self.table.slots).into_vec().into_iter(),
            chain: None,
        }
    }
}

/// A type for owned iteration over a [`HashSet`]. Produces values of type `T`.
///
/// See [`HashSet::into_iter`].
pub struct IntoIter<T> {
    pub(crate) slots: vec::IntoIter<Slot<T>>,
    pub(crate) chain: Slot<T>,
    pub(crate) remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.take() {
                let Entry { item, next } = *entry;
                self.chain = next;
                self.remaining -= 1;
                return Some(item);
            }

            self.chain = self.slots.next()?;
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        drop_chain(self.chain.take());
        for slot in self.slots.by_ref() {
            drop_chain(slot);
        }
    }
}

impl<'a, T, E> IntoIterator for &'a HashSet<T, E> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter {
            slots: self.table.slots.iter(),
            chain: None,
            remaining: self.len(),
        }
    }
}

/// A type for borrowed iteration over a [`HashSet`]. Produces values of type `&T`.
///
/// The borrow of the set lasts as long as the iterator, so the set can't be modified mid-walk. See
/// [`Walker`](super::Walker) for enumeration that doesn't hold a borrow.
///
/// See [`HashSet::iter`].
pub struct Iter<'a, T> {
    pub(crate) slots: slice::Iter<'a, Slot<T>>,
    pub(crate) chain: Option<&'a Entry<T>>,
    pub(crate) remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain {
                self.chain = entry.next.as_deref();
                self.remaining -= 1;
                return Some(&entry.item);
            }

            self.chain = self.slots.next()?.as_deref();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            slots: self.slots.clone(),
            chain: self.chain,
            remaining: self.remaining,
        }
    }
}
