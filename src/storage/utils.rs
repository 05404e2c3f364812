use core::alloc::Layout;
use core::mem::{align_of, size_of};

use crate::error::StorageError;

/// The assumed size of a CPU cache line.
pub const CACHE_LINE_SIZE: usize = 64;

#[inline]
pub(crate) fn array_layout<T>(count: usize) -> Result<Layout, StorageError> {
    Layout::array::<T>(count).map_err(StorageError::LayoutError)
}

/// Calculate the alignment of the header placed before the elements of a
/// header-prefixed block.
///
/// Elements no larger than two index values share a header aligned to the
/// size of the header itself, keeping padding minimal. Larger elements start
/// on a cache line boundary.
pub const fn header_align<T, I>() -> usize {
    let header = 2 * size_of::<I>();
    let align = if size_of::<T>() <= header {
        header
    } else {
        CACHE_LINE_SIZE
    };
    if align < align_of::<T>() {
        align_of::<T>()
    } else {
        align
    }
}

/// Calculate the byte offset of the first element from the start of a
/// header-prefixed block.
pub const fn data_offset<T, I>() -> usize {
    let align = header_align::<T, I>();
    let header = 2 * size_of::<I>();
    // round the header up to its own alignment, which is never below that of T
    (header + align - 1) & !(align - 1)
}

/// Calculate the layout of a header-prefixed block holding `capacity` elements.
#[inline]
pub(crate) fn block_layout<T, I>(capacity: usize) -> Result<Layout, StorageError> {
    let data = array_layout::<T>(capacity)?;
    let Some(size) = data.size().checked_add(data_offset::<T, I>()) else {
        return Err(StorageError::CapacityLimit);
    };
    Layout::from_size_align(size, header_align::<T, I>()).map_err(StorageError::LayoutError)
}
