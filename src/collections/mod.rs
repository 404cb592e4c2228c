//! Collection types and the traits they are built around.
//!
//! # Purpose
//! [`hash`] contains the chained [`HashSet`](hash::HashSet) along with its equality abstraction,
//! capacity policy and errors. [`traits`] contains [`Sequence`](traits::Sequence), the enumeration
//! interface that lets arbitrary collections take part in set operations.

#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "traits")]
pub mod traits;
