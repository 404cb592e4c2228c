//! A module containing [`HashSet`] and associated types.
//!
//! Besides the set itself, these types provide owned and borrowed iteration over a set's elements
//! and a detached [`Walker`] for enumeration that can detect concurrent modification.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod algebra;
mod hash_set;
mod iter;
mod table;
mod walker;

pub use hash_set::*;
pub use iter::*;
pub use walker::*;
