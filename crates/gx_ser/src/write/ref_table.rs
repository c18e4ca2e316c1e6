use gx_utils::hash::HashMap;
use gx_utils::hash::hashbrown::hash_map::Entry;

use crate::value::ObjectIdentity;

// -----------------------------------------------------------------------------
// ReferenceTable

/// The per-session map from object identity to a monotonically assigned id.
///
/// One table is exclusively owned by one in-flight serialization call: it is
/// created at the start of the call, consulted for every identity-tracked
/// value, and discarded at the end. Ids start at 1 and strictly increase; an
/// identity maps to at most one id and an id to at most one live identity.
///
/// [`reassign`](Self::reassign) temporarily re-keys an id around a surrogate
/// substitution window, so an object that is transiently swapped for a
/// substitute keeps its stable id for later re-encounters.
#[derive(Debug)]
pub struct ReferenceTable {
    ids: HashMap<ObjectIdentity, u32>,
    next_id: u32,
}

impl ReferenceTable {
    /// Creates an empty table. The first assigned id is 1.
    #[inline]
    pub const fn new() -> Self {
        Self {
            ids: HashMap::with_hasher(gx_utils::hash::FixedHashState),
            next_id: 1,
        }
    }

    /// Looks up `identity`, assigning the next id if it is unseen.
    ///
    /// Returns the id together with `is_new`: `true` when the id was assigned
    /// by this call, `false` when the identity had already been seen.
    /// Amortized constant time.
    pub fn get_or_assign(&mut self, identity: ObjectIdentity) -> (u32, bool) {
        match self.ids.entry(identity) {
            Entry::Occupied(entry) => (*entry.get(), false),
            Entry::Vacant(entry) => {
                let id = self.next_id;
                self.next_id += 1;
                entry.insert(id);
                (id, true)
            }
        }
    }

    /// Moves the mapping of `old` onto `new`, returning the id installed.
    ///
    /// Used symmetrically around a surrogate substitution: once to swap the
    /// substitute in before writing (`restore_id = None`), once to swap the
    /// original back in afterwards (`restore_id` = the id the forward call
    /// returned).
    ///
    /// - If `old` holds an id, the mapping is removed and `new` is installed
    ///   with `restore_id` if given, otherwise with the id just removed.
    /// - If `old` was never seen and `restore_id` is `None`, the call is a
    ///   transparent no-op (the forward swap of an object that has not been
    ///   written yet).
    ///
    /// Installing `new` replaces any id `new` already holds. A substitute
    /// that was previously written as a value of its own therefore loses its
    /// independent id for the rest of the session and is re-registered under
    /// a fresh one on its next encounter.
    ///
    /// # Panics
    ///
    /// Panics if `restore_id` is given but `old` holds no mapping: a restore
    /// against an identity that was never registered is an internal invariant
    /// violation, not a recoverable condition.
    pub fn reassign(
        &mut self,
        restore_id: Option<u32>,
        old: ObjectIdentity,
        new: ObjectIdentity,
    ) -> Option<u32> {
        match self.ids.remove(&old) {
            Some(current) => {
                let id = restore_id.unwrap_or(current);
                self.ids.insert(new, id);
                Some(id)
            }
            None => {
                if let Some(id) = restore_id {
                    panic!(
                        "ReferenceTable::reassign restoring id {id} onto an identity that was never registered"
                    );
                }
                None
            }
        }
    }

    /// The number of tracked identities.
    #[inline]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the table has tracked no identities.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Default for ReferenceTable {
    /// See [`ReferenceTable::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// Tests
