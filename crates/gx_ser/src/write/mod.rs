//! The write-side serialization context.
//!
//! One [`WriteContext`] is the bookkeeping of one serialization call. For
//! every value encountered while walking the object graph it decides, in
//! order:
//!
//! 1. **substitution** — whether a configured [`SurrogateProvider`] replaces
//!    the object and/or its declared type before anything else happens;
//! 2. **reference tracking** — whether the (possibly substituted) object has
//!    already been written and must be emitted as a backreference through the
//!    [`ReferenceTable`];
//! 3. **polymorphic dispatch** — whether the actual runtime type still equals
//!    the declared type, choosing the contract model's annotated or
//!    unannotated write path.
//!
//! Structural writing then belongs to the contract model, which recurses into
//! nested values back through the context, keeping the whole graph inside one
//! identity-tracking session.

mod context;
mod leaf;
mod ref_table;
mod surrogate;

#[cfg(test)]
pub(crate) mod test_util;

// -----------------------------------------------------------------------------
// Exports

pub use context::{SessionOptions, WriteContext};
pub use ref_table::ReferenceTable;
pub use surrogate::SurrogateProvider;
