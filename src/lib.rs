//! This crate is a from-scratch hash set, written without leaning on the standard library's own
//! hash-based collections.
//!
//! # Purpose
//! [`HashSet`](collections::hash::HashSet) stores unique elements in an array of slots, each the
//! root of a singly-linked chain of entries. On top of the insertion, removal and membership
//! primitives sits the usual algebra of sets: union, intersection, difference, symmetric
//! difference, and the subset / superset / equality / overlap predicates.
//!
//! # Method
//! The table never hashes anything itself. Equality and hashing are supplied by an
//! [`Equivalence`](collections::hash::Equivalence), which defaults to the element's own [`Hash`] and
//! [`Eq`] implementations run through a [`BuildHasher`](std::hash::BuildHasher). Any collection that
//! implements [`Sequence`](collections::traits::Sequence) can be used as the other operand of a
//! set operation.
//!
//! # Error Handling
//! Like the rest of the crate's collections, the common path panics rather than forcing every
//! caller to handle an error: [`HashSet::with_cap`](collections::hash::HashSet::with_cap) panics for
//! a capacity of 0. Fallible counterparts (`try_*`, `add`, `copy_to`) return a strongly typed
//! [`SetError`](collections::hash::SetError) instead, built from small structs that implement
//! [`Error`](std::error::Error).
//!
//! # Dependencies
//! This crate depends on `derive_more` for its error types and on the `log` facade for reporting
//! table growth. No logger is installed by the library itself.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;
