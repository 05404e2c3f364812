//! Backing storage layouts for sequences.
//!
//! A storage handle only acquires and releases raw memory and records the
//! length and capacity of a sequence. Constructing and destroying elements is
//! left entirely to the sequence engine in [`crate::vec`].

use core::mem;
use core::ptr::{self, NonNull};
use core::slice;

use const_default::ConstDefault;

use crate::error::StorageError;
use crate::index::Index;

pub(crate) mod alloc;
mod cached;
mod colocated;
pub(crate) mod utils;
#[cfg(feature = "zeroize")]
mod zero;

pub use self::{
    alloc::{handle_alloc_error, Global, RawAlloc},
    cached::FatBuffer,
    colocated::{Header, ThinBuffer},
    utils::{data_offset, header_align, CACHE_LINE_SIZE},
};

#[cfg(feature = "zeroize")]
pub use self::zero::{ZeroizeOnRelease, ZeroizingAlloc};

/// The capabilities shared by every sequence storage layout.
///
/// Accessors come in two tiers: the checked methods return null pointers and
/// zero lengths for an unallocated handle, while the `*_unchecked` methods
/// assume an allocation exists.
///
/// # Safety
/// Implementations must report `is_allocated() == false` exactly when the
/// capacity is zero, must return the pointer and values last stored through
/// the setters, and `allocate` must return memory valid for `capacity` values
/// of `T` which `deallocate` accepts back.
pub unsafe trait RawStorage<T>: ConstDefault + Sized {
    /// The type used for lengths and capacities.
    type Index: Index;
    /// The raw allocator backing this storage.
    type Alloc: RawAlloc;

    /// Access the allocator instance.
    fn allocator(&self) -> &Self::Alloc;

    /// Determine whether the handle currently owns an allocation.
    fn is_allocated(&self) -> bool;

    /// Access the element pointer, or null when unallocated.
    #[inline]
    fn data(&self) -> *const T {
        if self.is_allocated() {
            unsafe { self.data_unchecked() }.as_ptr()
        } else {
            ptr::null()
        }
    }

    /// Access the element pointer mutably, or null when unallocated.
    #[inline]
    fn data_mut(&mut self) -> *mut T {
        if self.is_allocated() {
            unsafe { self.data_unchecked() }.as_ptr()
        } else {
            ptr::null_mut()
        }
    }

    /// Access the element pointer.
    ///
    /// # Safety
    /// The handle must own an allocation.
    unsafe fn data_unchecked(&self) -> NonNull<T>;

    /// Get the number of initialized elements.
    #[inline]
    fn len(&self) -> Self::Index {
        if self.is_allocated() {
            unsafe { self.len_unchecked() }
        } else {
            Self::Index::ZERO
        }
    }

    /// Get the number of elements the current allocation can hold.
    #[inline]
    fn capacity(&self) -> Self::Index {
        if self.is_allocated() {
            unsafe { self.capacity_unchecked() }
        } else {
            Self::Index::ZERO
        }
    }

    /// Get the number of initialized elements.
    ///
    /// # Safety
    /// The handle must own an allocation.
    unsafe fn len_unchecked(&self) -> Self::Index;

    /// Get the capacity of the allocation.
    ///
    /// # Safety
    /// The handle must own an allocation.
    unsafe fn capacity_unchecked(&self) -> Self::Index;

    /// Determine whether there are no initialized elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == Self::Index::ZERO
    }

    /// Access the initialized elements.
    #[inline]
    fn as_slice(&self) -> &[T] {
        if self.is_allocated() {
            unsafe {
                slice::from_raw_parts(
                    self.data_unchecked().as_ptr(),
                    self.len_unchecked().to_usize(),
                )
            }
        } else {
            &[]
        }
    }

    /// Access the initialized elements mutably.
    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        if self.is_allocated() {
            unsafe {
                slice::from_raw_parts_mut(
                    self.data_unchecked().as_ptr(),
                    self.len_unchecked().to_usize(),
                )
            }
        } else {
            &mut []
        }
    }

    /// Exchange two handles without touching their elements.
    #[inline]
    fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other)
    }

    /// Replace the element pointer with an allocation produced by `allocate`.
    ///
    /// # Safety
    /// The previous allocation, if any, must already be released or owned
    /// elsewhere. The capacity must be updated to match before the handle is
    /// read through the checked accessors.
    unsafe fn set_data(&mut self, data: NonNull<T>);

    /// Update the number of initialized elements.
    ///
    /// # Safety
    /// The handle must own an allocation, `len` must not exceed the capacity,
    /// and the first `len` elements must be initialized.
    unsafe fn set_len(&mut self, len: Self::Index);

    /// Update the recorded capacity.
    ///
    /// # Safety
    /// The handle must own an allocation of exactly `capacity` elements.
    unsafe fn set_capacity(&mut self, capacity: Self::Index);

    /// Return the handle to the unallocated state without releasing memory.
    ///
    /// # Safety
    /// The current allocation must already be released or owned elsewhere.
    unsafe fn reset(&mut self);

    /// Try to acquire uninitialized memory for `capacity` elements.
    fn try_allocate(&self, capacity: Self::Index) -> Result<NonNull<T>, StorageError>;

    /// Acquire uninitialized memory for `capacity` elements. Allocation
    /// failure is fatal.
    #[inline]
    fn allocate(&self, capacity: Self::Index) -> NonNull<T> {
        match self.try_allocate(capacity) {
            Ok(data) => data,
            Err(err) => err.panic(),
        }
    }

    /// Release memory produced by `allocate`. No elements are dropped.
    ///
    /// # Safety
    /// `data` must come from `allocate` on this handle's allocator with the
    /// same `capacity`, and must not be used afterwards.
    unsafe fn deallocate(&self, data: NonNull<T>, capacity: Self::Index);
}
