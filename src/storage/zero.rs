use core::alloc::Layout;
use core::ptr::NonNull;
use core::slice;

use const_default::ConstDefault;
use zeroize::Zeroize;

use crate::error::StorageError;

use super::alloc::RawAlloc;

/// An allocator adapter which wipes every block before releasing it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ZeroizingAlloc<A>(pub A);

impl<A: RawAlloc> RawAlloc for ZeroizingAlloc<A> {
    #[inline]
    fn try_alloc(&self, layout: Layout) -> Result<NonNull<[u8]>, StorageError> {
        self.0.try_alloc(layout)
    }

    #[inline]
    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        if layout.size() > 0 {
            let mem = slice::from_raw_parts_mut(ptr.as_ptr(), layout.size());
            mem.zeroize();
        }
        self.0.release(ptr, layout)
    }
}

/// A marker for allocators which wipe memory as it is released.
pub trait ZeroizeOnRelease: RawAlloc {}

impl<A: RawAlloc> ZeroizeOnRelease for ZeroizingAlloc<A> {}

impl<A: ConstDefault> ConstDefault for ZeroizingAlloc<A> {
    const DEFAULT: Self = ZeroizingAlloc(A::DEFAULT);
}
