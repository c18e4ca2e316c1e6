#![doc = include_str!("../README.md")]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod sink;
mod value;

pub mod contract;
pub mod names;
pub mod write;

// -----------------------------------------------------------------------------
// Top-level exports

pub use error::WriteError;
pub use sink::{MarkupSink, NullSink};
pub use value::{GraphObject, Locator, ObjectIdentity, Primitive, QualifiedName, TypeToken};
