//! Types used to define the positions, lengths, and capacities of sequences.

use core::fmt::{Debug, Display};
use core::hash::Hash;

use crate::error::StorageError;

/// The capacity reserved by the first insertion into an unallocated sequence.
pub const INITIAL_CAPACITY: usize = 2;

/// Integer types which may be used to index and define the length and capacity
/// of sequences.
///
/// The width of the index type determines the maximum capacity of a sequence
/// and, for header-prefixed storage, the size of the header.
pub trait Index:
    Copy
    + Clone
    + Debug
    + Display
    + Default
    + Hash
    + PartialEq
    + Eq
    + PartialOrd
    + Ord
    + Send
    + Sync
    + Sized
    + 'static
{
    /// The zero value.
    const ZERO: Self;
    /// The maximum representable value of this type as a `usize`.
    const MAX_USIZE: usize;

    /// Create an instance of this type from a `usize`, truncating any
    /// excess bits.
    fn from_usize(val: usize) -> Self;

    /// Try to create an instance of this type from a `usize`.
    fn try_from_usize(val: usize) -> Option<Self>;

    /// Convert this instance into a `usize`.
    fn to_usize(self) -> usize;
}

macro_rules! impl_index {
    ($($ty:ty),+) => {
        $(
            impl Index for $ty {
                const ZERO: Self = 0;
                const MAX_USIZE: usize = if (<$ty>::MAX as u128) < (usize::MAX as u128) {
                    <$ty>::MAX as usize
                } else {
                    usize::MAX
                };

                #[inline]
                fn from_usize(val: usize) -> Self {
                    val as Self
                }

                #[inline]
                fn try_from_usize(val: usize) -> Option<Self> {
                    if val <= Self::MAX_USIZE {
                        Some(val as Self)
                    } else {
                        None
                    }
                }

                #[inline]
                fn to_usize(self) -> usize {
                    self as usize
                }
            }
        )+
    };
}

impl_index!(u8, u16, u32, usize);

/// Convert a `usize` capacity into the index type, failing when it is not
/// representable.
#[inline]
pub(crate) fn checked_index<I: Index>(val: usize) -> Result<I, StorageError> {
    I::try_from_usize(val).ok_or(StorageError::CapacityLimit)
}

/// Calculate the capacity to request when a sequence runs out of room.
///
/// The capacity grows by the larger of the current capacity and the requested
/// minimum increment, so repeated appends cost amortized O(1).
#[inline]
pub const fn grown_capacity(capacity: usize, minimum: usize) -> usize {
    let incr = if capacity > minimum {
        capacity
    } else {
        minimum
    };
    capacity.saturating_add(incr)
}
