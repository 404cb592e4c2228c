pub mod error;
pub mod hash;
pub mod panic;
pub mod result;
