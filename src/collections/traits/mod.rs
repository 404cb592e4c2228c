//! Traits shared between collections.
//!
//! Currently this is only [`Sequence`], the enumeration interface accepted as the other operand of
//! every set operation on [`HashSet`](super::hash::HashSet).

mod sequence;

pub use sequence::*;
