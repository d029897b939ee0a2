#![no_std]

extern crate alloc;

pub mod error;
pub use error::NoValueError;

// Maybe module
pub mod maybe;
pub use maybe::Maybe;

pub mod combinators;

pub mod iter;
pub use iter::{IntoIter, Iter, IterMut};

/// Constructs a `Maybe::Some(value)`.
pub fn some<A>(value: A) -> Maybe<A> {
    Maybe::Some(value)
}

/// Constructs a `Maybe::None`.
pub fn none<A>() -> Maybe<A> {
    Maybe::None
}
