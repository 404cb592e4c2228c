use derive_more::{Display, Error, From, IsVariant, TryInto};

#[doc(inline)]
pub use crate::util::error::IndexOutOfBounds;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("required argument `{name}` is absent")]
pub struct AbsentArgument {
    pub name: &'static str,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("capacity {cap} is invalid for a hash-based collection, at least 1 slot is required")]
pub struct InvalidCapacity {
    pub cap: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("destination has room for {available} elements but {required} are required")]
pub struct InsufficientSpace {
    pub required: usize,
    pub available: usize,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("collection was modified during enumeration")]
pub struct ConcurrentModification;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, TryInto, IsVariant, Error)]
pub enum InvalidArgument {
    Absent(AbsentArgument),
    Capacity(InvalidCapacity),
    Space(InsufficientSpace),
}

/// Every failure reported by a fallible [`HashSet`](super::HashSet) operation.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, From, TryInto, IsVariant, Error)]
pub enum SetError {
    InvalidArgument(InvalidArgument),
    OutOfRange(IndexOutOfBounds),
    ConcurrentModification(ConcurrentModification),
}

impl From<AbsentArgument> for SetError {
    fn from(value: AbsentArgument) -> Self {
        InvalidArgument::from(value).into()
    }
}

impl From<InvalidCapacity> for SetError {
    fn from(value: InvalidCapacity) -> Self {
        InvalidArgument::from(value).into()
    }
}

impl From<InsufficientSpace> for SetError {
    fn from(value: InsufficientSpace) -> Self {
        InvalidArgument::from(value).into()
    }
}
