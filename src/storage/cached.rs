use core::fmt;
use core::ptr::NonNull;

use const_default::ConstDefault;

use crate::error::StorageError;
use crate::index::Index;

use super::alloc::{Global, RawAlloc};
use super::utils::array_layout;
use super::RawStorage;

/// A storage handle which keeps the length and capacity beside the data
/// pointer.
///
/// Reading the length never touches the heap, at the cost of a handle three
/// words wide (two for a 32-bit index on 64-bit targets).
pub struct FatBuffer<T, I: Index = usize, A: RawAlloc = Global> {
    data: NonNull<T>,
    len: I,
    capacity: I,
    alloc: A,
}

impl<T, I: Index, A: RawAlloc> FatBuffer<T, I, A> {
    /// Create an unallocated handle using the given allocator.
    #[inline]
    pub const fn dangling(alloc: A) -> Self {
        Self {
            data: NonNull::dangling(),
            len: I::ZERO,
            capacity: I::ZERO,
            alloc,
        }
    }
}

impl<T, I: Index, A: RawAlloc + ConstDefault> ConstDefault for FatBuffer<T, I, A> {
    const DEFAULT: Self = Self::dangling(A::DEFAULT);
}

unsafe impl<T, I: Index, A: RawAlloc + ConstDefault> RawStorage<T> for FatBuffer<T, I, A> {
    type Index = I;
    type Alloc = A;

    #[inline]
    fn allocator(&self) -> &A {
        &self.alloc
    }

    #[inline]
    fn is_allocated(&self) -> bool {
        self.capacity != I::ZERO
    }

    #[inline]
    unsafe fn data_unchecked(&self) -> NonNull<T> {
        self.data
    }

    #[inline]
    unsafe fn len_unchecked(&self) -> I {
        self.len
    }

    #[inline]
    unsafe fn capacity_unchecked(&self) -> I {
        self.capacity
    }

    #[inline]
    unsafe fn set_data(&mut self, data: NonNull<T>) {
        self.data = data;
    }

    #[inline]
    unsafe fn set_len(&mut self, len: I) {
        self.len = len;
    }

    #[inline]
    unsafe fn set_capacity(&mut self, capacity: I) {
        self.capacity = capacity;
    }

    #[inline]
    unsafe fn reset(&mut self) {
        self.data = NonNull::dangling();
        self.len = I::ZERO;
        self.capacity = I::ZERO;
    }

    #[inline]
    fn try_allocate(&self, capacity: I) -> Result<NonNull<T>, StorageError> {
        let layout = array_layout::<T>(capacity.to_usize())?;
        let ptr = self.alloc.try_alloc(layout)?;
        Ok(ptr.cast())
    }

    #[inline]
    unsafe fn deallocate(&self, data: NonNull<T>, capacity: I) {
        match array_layout::<T>(capacity.to_usize()) {
            Ok(layout) => self.alloc.release(data.cast(), layout),
            Err(err) => err.panic(),
        }
    }
}

impl<T, I: Index, A: RawAlloc> fmt::Debug for FatBuffer<T, I, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FatBuffer")
            .field("data", &self.data)
            .field("len", &self.len)
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
