//! Dynamic value model for the guard engine.
//!
//! Untyped values crossing into the checks are represented as a closed
//! tagged union ([`Value`]) with one variant per [`TypeTag`], plus the
//! [`Truthy`] trait carrying host truthiness rules for plain assertions.

mod dynamic;
mod tag;
mod truthy;

pub use dynamic::{NativeFn, Value};
pub use tag::TypeTag;
pub use truthy::Truthy;
