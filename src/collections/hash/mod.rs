//! A module containing [`HashSet`] and the collaborators it is built from.
//!
//! - [`Equivalence`] supplies equality and hashing for elements. [`Hashed`] is the default.
//! - [`capacity`] decides how many slots to allocate for a number of elements and how far to grow.
//! - [`SetError`] and its parts describe every way a fallible operation can fail.
//!
//! [`HashSet`] is also re-exported under this module.

pub mod capacity;
mod equivalence;
mod error;
pub mod set;

pub use equivalence::*;
pub use error::*;
#[doc(inline)]
pub use set::HashSet;
