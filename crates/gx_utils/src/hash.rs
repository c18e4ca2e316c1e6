//! Provide hash containers, re-exports *hashbrown* and *foldhash*.
//!
//! `FixedHashState` is based on the `foldhash` crate and produces hash
//! results that depend only on the input, through a fixed hash seed.
//!
//! `PassThroughHasher` uses the written `u64` (or raw bit data) directly as
//! the hash value, for keys that are already well distributed.

use core::hash::{BuildHasher, Hasher};

use foldhash::fast::{FixedState, FoldHasher};

// -----------------------------------------------------------------------------
// FixedHasher

/// A fixed hash seed.
const FIXED_SEED: u64 = 0xC1F6_5A0E_7B93_D248;

/// A hasher whose results depend only on the input.
///
/// A type alias for [`foldhash::fast::FoldHasher`],
/// created through [`FixedHashState::build_hasher`].
pub type FixedHasher = FoldHasher<'static>;

/// Hash state based upon a random but fixed seed.
///
/// # Examples
///
/// ```
/// use core::hash::{Hash, Hasher, BuildHasher};
/// use gx_utils::hash::FixedHashState;
///
/// let mut hasher = FixedHashState.build_hasher();
/// 3.hash(&mut hasher);
/// let result = hasher.finish();
///
/// println!("Hash Result {result}"); // Fixed Result
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct FixedHashState;

impl BuildHasher for FixedHashState {
    type Hasher = FixedHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        FixedState::with_seed(FIXED_SEED).build_hasher()
    }
}

// -----------------------------------------------------------------------------
// PassThroughHasher

/// A hasher that passes the written value through as the hash.
///
/// Created through [`PassThroughHashState::build_hasher`].
#[derive(Copy, Clone, Default, Debug)]
pub struct PassThroughHasher {
    hash: u64,
}

impl Hasher for PassThroughHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.hash
    }

    fn write(&mut self, bytes: &[u8]) {
        // Usually `write_u64` is used directly; this path folds raw bytes in
        // reverse so that a single `write_u32(n)` equals `write_u64(n)`.
        for byte in bytes.iter().rev() {
            self.hash = self.hash.rotate_left(8).wrapping_add(*byte as u64);
        }
    }

    #[inline]
    fn write_u64(&mut self, i: u64) {
        self.hash = i;
    }

    #[inline]
    fn write_u128(&mut self, i: u128) {
        self.hash = i as u64 ^ (i >> 64) as u64;
    }
}

/// A hash state without any mixing.
///
/// Stores one `u64` and assigns values directly on `write_u64`. Intended for
/// keys that already carry high-entropy bits, such as `core::any::TypeId`.
///
/// # Examples
///
/// ```
/// use core::hash::{Hash, Hasher, BuildHasher};
/// use gx_utils::hash::PassThroughHashState;
///
/// let mut hasher = PassThroughHashState.build_hasher();
/// 3_u64.hash(&mut hasher);
///
/// assert_eq!(hasher.finish(), 3_u64);
/// ```
#[derive(Copy, Clone, Default, Debug)]
pub struct PassThroughHashState;

impl BuildHasher for PassThroughHashState {
    type Hasher = PassThroughHasher;

    #[inline(always)]
    fn build_hasher(&self) -> Self::Hasher {
        PassThroughHasher { hash: 0 }
    }
}

// -----------------------------------------------------------------------------
// Container aliases

/// A [`hashbrown::HashMap`] using [`FixedHashState`] by default.
pub type HashMap<K, V, S = FixedHashState> = hashbrown::HashMap<K, V, S>;

/// A [`hashbrown::HashSet`] using [`FixedHashState`] by default.
pub type HashSet<T, S = FixedHashState> = hashbrown::HashSet<T, S>;

// -----------------------------------------------------------------------------
// Re-export crates

pub use foldhash;
pub use hashbrown;
