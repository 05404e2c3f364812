use core::alloc::Layout;
use core::fmt;
use core::ptr::NonNull;

#[cfg(feature = "alloc")]
use alloc::alloc::{alloc as raw_alloc, dealloc as raw_dealloc};
#[cfg(feature = "alloc")]
use core::ptr;

use const_default::ConstDefault;

use crate::error::StorageError;

#[cfg(all(not(test), feature = "alloc"))]
pub use alloc::alloc::handle_alloc_error;

#[cfg(any(test, not(feature = "alloc")))]
/// Custom allocation error handler.
pub fn handle_alloc_error(layout: Layout) -> ! {
    panic!("memory allocation of {} bytes failed", layout.size());
}

/// Raw memory acquisition and release.
///
/// Implementations only hand out and take back blocks of bytes; they never
/// construct or destroy values.
pub trait RawAlloc: fmt::Debug {
    /// Try to allocate a block of memory fitting `layout`.
    fn try_alloc(&self, layout: Layout) -> Result<NonNull<[u8]>, StorageError>;

    /// Release a block of memory previously produced by `try_alloc`.
    ///
    /// # Safety
    /// The value `ptr` must represent an allocation produced by this allocator, and
    /// `layout` must be the layout it was allocated with.
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout);
}

impl<A: RawAlloc> RawAlloc for &A {
    #[inline]
    fn try_alloc(&self, layout: Layout) -> Result<NonNull<[u8]>, StorageError> {
        (**self).try_alloc(layout)
    }

    #[inline]
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        (**self).release(ptr, layout)
    }
}

/// The global memory allocator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Global;

impl ConstDefault for Global {
    const DEFAULT: Self = Global;
}

#[cfg(feature = "alloc")]
impl RawAlloc for Global {
    #[inline]
    fn try_alloc(&self, layout: Layout) -> Result<NonNull<[u8]>, StorageError> {
        let ptr = if layout.size() == 0 {
            // SAFETY: layout alignments are guaranteed to be non-zero.
            unsafe { NonNull::new_unchecked(ptr::null_mut::<u8>().wrapping_add(layout.align())) }
        } else {
            let Some(ptr) = NonNull::new(unsafe { raw_alloc(layout) }) else {
                return Err(StorageError::AllocError(layout));
            };
            ptr
        };
        Ok(NonNull::slice_from_raw_parts(ptr, layout.size()))
    }

    #[inline]
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() > 0 {
            raw_dealloc(ptr.as_ptr(), layout);
        }
    }
}

#[cfg(not(feature = "alloc"))]
// Stub implementation to allow Global as the default allocator type.
// Allocation always fails, so sequences may be declared but never grow.
impl RawAlloc for Global {
    fn try_alloc(&self, layout: Layout) -> Result<NonNull<[u8]>, StorageError> {
        Err(StorageError::AllocError(layout))
    }

    unsafe fn release(&self, _ptr: NonNull<u8>, _layout: Layout) {}
}
