use core::fmt;
use core::marker::PhantomData;
use core::ptr::NonNull;

use const_default::ConstDefault;

use crate::error::StorageError;
use crate::index::Index;

use super::alloc::{Global, RawAlloc};
use super::utils::{block_layout, data_offset};
use super::RawStorage;

/// The length and capacity record stored directly before the elements of a
/// header-prefixed block.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct Header<I: Index = usize> {
    /// The number of initialized elements.
    pub len: I,
    /// The number of elements the block can hold.
    pub capacity: I,
}

/// A pointer-sized storage handle which keeps the length and capacity in a
/// header allocated immediately before the elements.
///
/// The header alignment follows [`header_align`](super::header_align), so the
/// element array begins [`data_offset`](super::data_offset) bytes into the
/// block.
pub struct ThinBuffer<T, I: Index = usize, A: RawAlloc = Global> {
    data: Option<NonNull<T>>,
    alloc: A,
    _pd: PhantomData<I>,
}

impl<T, I: Index, A: RawAlloc> ThinBuffer<T, I, A> {
    const DATA_OFFSET: usize = data_offset::<T, I>();

    /// Create an unallocated handle using the given allocator.
    #[inline]
    pub const fn dangling(alloc: A) -> Self {
        Self {
            data: None,
            alloc,
            _pd: PhantomData,
        }
    }

    #[inline]
    fn header_ptr(data: NonNull<T>) -> *mut Header<I> {
        unsafe { data.as_ptr().cast::<u8>().sub(Self::DATA_OFFSET) }.cast()
    }

    /// Read the header of the current allocation, if any.
    #[inline]
    pub fn header(&self) -> Option<Header<I>> {
        self.data
            .map(|data| unsafe { Self::header_ptr(data).read() })
    }

    #[inline]
    unsafe fn header_mut(&mut self) -> &mut Header<I> {
        match self.data {
            Some(data) => &mut *Self::header_ptr(data),
            None => core::hint::unreachable_unchecked(),
        }
    }
}

impl<T, I: Index, A: RawAlloc + ConstDefault> ConstDefault for ThinBuffer<T, I, A> {
    const DEFAULT: Self = Self::dangling(A::DEFAULT);
}

unsafe impl<T, I: Index, A: RawAlloc + ConstDefault> RawStorage<T> for ThinBuffer<T, I, A> {
    type Index = I;
    type Alloc = A;

    #[inline]
    fn allocator(&self) -> &A {
        &self.alloc
    }

    #[inline]
    fn is_allocated(&self) -> bool {
        self.data.is_some()
    }

    #[inline]
    unsafe fn data_unchecked(&self) -> NonNull<T> {
        match self.data {
            Some(data) => data,
            None => core::hint::unreachable_unchecked(),
        }
    }

    #[inline]
    unsafe fn len_unchecked(&self) -> I {
        (*Self::header_ptr(self.data_unchecked())).len
    }

    #[inline]
    unsafe fn capacity_unchecked(&self) -> I {
        (*Self::header_ptr(self.data_unchecked())).capacity
    }

    #[inline]
    unsafe fn set_data(&mut self, data: NonNull<T>) {
        self.data = Some(data);
    }

    #[inline]
    unsafe fn set_len(&mut self, len: I) {
        self.header_mut().len = len;
    }

    #[inline]
    unsafe fn set_capacity(&mut self, capacity: I) {
        self.header_mut().capacity = capacity;
    }

    #[inline]
    unsafe fn reset(&mut self) {
        self.data = None;
    }

    fn try_allocate(&self, capacity: I) -> Result<NonNull<T>, StorageError> {
        let layout = block_layout::<T, I>(capacity.to_usize())?;
        let block = self.alloc.try_alloc(layout)?;
        let data = unsafe {
            NonNull::new_unchecked(block.as_ptr().cast::<u8>().add(Self::DATA_OFFSET).cast::<T>())
        };
        unsafe {
            Self::header_ptr(data).write(Header {
                len: I::ZERO,
                capacity,
            })
        };
        Ok(data)
    }

    unsafe fn deallocate(&self, data: NonNull<T>, capacity: I) {
        let block = NonNull::new_unchecked(Self::header_ptr(data)).cast::<u8>();
        match block_layout::<T, I>(capacity.to_usize()) {
            Ok(layout) => self.alloc.release(block, layout),
            Err(err) => err.panic(),
        }
    }
}

impl<T, I: Index, A: RawAlloc> fmt::Debug for ThinBuffer<T, I, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThinBuffer")
            .field("data", &self.data)
            .field("header", &self.header())
            .finish_non_exhaustive()
    }
}

#[cfg(all(test, feature = "alloc"))]
mod tests {
    use core::mem::size_of;

    use super::*;
    use crate::storage::FatBuffer;

    static_assertions::assert_eq_size!(ThinBuffer<u64>, usize);
    static_assertions::assert_eq_size!(ThinBuffer<[u8; 256], u32>, usize);
    static_assertions::assert_eq_size!(FatBuffer<u64>, [usize; 3]);

    #[test]
    fn handle_sizes() {
        assert_eq!(size_of::<ThinBuffer<u8, u32>>(), size_of::<usize>());
        assert_eq!(size_of::<Header<u32>>(), 8);
        assert_eq!(size_of::<Header<usize>>(), 2 * size_of::<usize>());
        #[cfg(target_pointer_width = "64")]
        assert_eq!(size_of::<FatBuffer<u64, u32>>(), 16);
    }

    #[test]
    fn header_precedes_elements() {
        let mut buf = ThinBuffer::<u32, u32>::DEFAULT;
        assert!(!buf.is_allocated());
        assert!(buf.data().is_null());
        assert_eq!(buf.capacity(), 0);
        let data = buf.allocate(6);
        assert_eq!(data.as_ptr() as usize % 4, 0);
        unsafe { buf.set_data(data) };
        assert_eq!(buf.header(), Some(Header { len: 0, capacity: 6 }));
        let block = unsafe { data.as_ptr().cast::<u8>().sub(data_offset::<u32, u32>()) };
        assert_eq!(block as usize % 8, 0);
        unsafe {
            buf.set_len(3);
            assert_eq!(buf.len_unchecked(), 3);
            buf.set_capacity(6);
            assert_eq!(buf.header(), Some(Header { len: 3, capacity: 6 }));
            buf.deallocate(data, 6);
            buf.reset();
        }
        assert_eq!(buf.len(), 0);
    }

    #[test]
    fn large_elements_start_on_cache_line() {
        let mut buf = ThinBuffer::<[u8; 100]>::DEFAULT;
        let data = buf.allocate(2);
        assert_eq!(data.as_ptr() as usize % crate::storage::CACHE_LINE_SIZE, 0);
        unsafe {
            buf.set_data(data);
            assert_eq!(buf.capacity_unchecked(), 2);
            buf.deallocate(data, 2);
            buf.reset();
        }
    }
}
