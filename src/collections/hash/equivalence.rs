use std::hash::{BuildHasher, Hash, RandomState};

/// The equality and hashing abstraction consumed by [`HashSet`](super::HashSet).
///
/// Implementations must be consistent: if `equals(a, b)` then `hash(a) == hash(b)`. It is a logic
/// error for an element's hash or equality to change while it is in a set.
pub trait Equivalence<T: ?Sized> {
    /// Returns true if `a` and `b` should be considered the same element.
    fn equals(&self, a: &T, b: &T) -> bool;

    /// Produces the hash used to pick a slot for `item`.
    fn hash(&self, item: &T) -> u64;
}

/// The canonical [`Equivalence`], using an element's [`Eq`] and [`Hash`] implementations with
/// hashers built by `B`.
#[derive(Debug, Default, Clone)]
pub struct Hashed<B: BuildHasher = RandomState> {
    pub(crate) builder: B,
}

impl<B: BuildHasher> Hashed<B> {
    pub const fn new(builder: B) -> Hashed<B> {
        Hashed { builder }
    }

    pub const fn builder(&self) -> &B {
        &self.builder
    }
}

impl<T: Hash + Eq + ?Sized, B: BuildHasher> Equivalence<T> for Hashed<B> {
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }

    fn hash(&self, item: &T) -> u64 {
        self.builder.hash_one(item)
    }
}

/// Lifts an [`Equivalence`] over `T` to one over `&T`, so that a set of borrowed elements agrees
/// with the set they were borrowed from.
pub(crate) struct Borrowed<'e, E>(pub(crate) &'e E);

impl<'e, 't, T: ?Sized, E: Equivalence<T>> Equivalence<&'t T> for Borrowed<'e, E> {
    fn equals(&self, a: &&'t T, b: &&'t T) -> bool {
        self.0.equals(a, b)
    }

    fn hash(&self, item: &&'t T) -> u64 {
        self.0.hash(item)
    }
}
