use super::HashSet;
use super::table::chain;
use crate::collections::hash::{ConcurrentModification, SetError};

/// A detached position within a [`HashSet`], for enumeration that doesn't hold a borrow of the
/// set between steps.
///
/// A Walker remembers the version of the set it was created from. If the set is structurally
/// modified (an insertion, removal, clear or resize) before the walk is over,
/// [`next`](Walker::next) fails with [`ConcurrentModification`] rather than skipping or repeating
/// elements.
///
/// A Walker also remembers which slot array it was created from, so handing it a different set
/// (a clone, or one built by the same insertions) fails in the same way instead of walking the
/// wrong elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walker {
    table: usize,
    slot: usize,
    depth: usize,
    version: u64,
}

impl Walker {
    pub(crate) const fn new(table: usize, version: u64) -> Walker {
        Walker {
            table,
            slot: 0,
            depth: 0,
            version,
        }
    }

    /// Produces the next element of `set`, or [`None`] once every element has been produced.
    ///
    /// `set` must be the HashSet this Walker was created from.
    pub fn next<'a, T, E>(&mut self, set: &'a HashSet<T, E>) -> Result<Option<&'a T>, SetError> {
        if set.table.id() != self.table || set.table.version != self.version {
            return Err(ConcurrentModification.into());
        }

        while let Some(slot) = set.table.slots.get(self.slot) {
            if let Some(item) = chain(slot).nth(self.depth) {
                self.depth += 1;
                return Ok(Some(item));
            }

            self.slot += 1;
            self.depth = 0;
        }

        Ok(None)
    }
}
