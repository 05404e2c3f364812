//! Compact growable sequences
//!
//! A single sequence engine, [`Vec`], runs over two interchangeable storage
//! layouts: a cached handle keeping the pointer, length, and capacity
//! together ([`CachedVec`]), and a pointer-sized handle to a block whose
//! header stores the length and capacity ([`ThinVec`]). [`ThinBytes`] builds
//! a non-terminated byte sequence on the latter.
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(test)]
#[macro_use]
extern crate std;

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod bytes;

pub(crate) mod error;

pub mod index;

pub mod storage;

pub mod traits;

pub mod vec;

pub use {
    self::bytes::ThinBytes,
    self::error::StorageError,
    self::index::Index,
    self::storage::Global,
    self::vec::{Cached, CachedVec, CompactVec, Thin, ThinVec, Vec},
};

#[cfg(feature = "zeroize")]
pub use self::{storage::ZeroizingAlloc, vec::ZeroizingVec};
