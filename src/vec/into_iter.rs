use core::fmt;
use core::iter::FusedIterator;
use core::ops::Range;
use core::ptr;
use core::slice;

use crate::index::Index;
use crate::storage::RawStorage;
use crate::traits::ElementSource;

use super::config::VecConfig;
use super::Vec;

/// An iterator which moves the elements out of a [`Vec`].
///
/// The storage is released once the iterator is dropped.
pub struct IntoIter<T, C: VecConfig> {
    remain: Range<usize>,
    vec: Vec<T, C>,
}

impl<T, C: VecConfig> IntoIter<T, C> {
    pub(super) fn new(mut vec: Vec<T, C>) -> Self {
        let end = vec.buffer.len().to_usize();
        if end > 0 {
            // SAFETY: the buffer is allocated when the length is non-zero
            unsafe { vec.buffer.set_len(C::Index::ZERO) };
        }
        Self {
            remain: Range { start: 0, end },
            vec,
        }
    }

    /// Access the remaining elements.
    pub fn as_slice(&self) -> &[T] {
        if self.remain.is_empty() {
            return &[];
        }
        unsafe {
            slice::from_raw_parts(
                self.vec.buffer.data_unchecked().as_ptr().add(self.remain.start),
                self.remain.len(),
            )
        }
    }

    /// Access the remaining elements mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        if self.remain.is_empty() {
            return &mut [];
        }
        unsafe {
            slice::from_raw_parts_mut(
                self.vec.buffer.data_unchecked().as_ptr().add(self.remain.start),
                self.remain.len(),
            )
        }
    }

    fn clear(&mut self) {
        if !self.remain.is_empty() {
            let to_drop: *mut [T] = self.as_mut_slice();
            self.remain.start = self.remain.end;
            unsafe { ptr::drop_in_place(to_drop) };
        }
    }
}

impl<T, C: VecConfig> AsRef<[T]> for IntoIter<T, C> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, C: VecConfig> AsMut<[T]> for IntoIter<T, C> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: fmt::Debug, C: VecConfig> fmt::Debug for IntoIter<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T, C: VecConfig> Iterator for IntoIter<T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.remain.start;
        if index != self.remain.end {
            self.remain.start = index + 1;
            unsafe {
                let read = self.vec.buffer.data_unchecked().as_ptr().add(index);
                Some(ptr::read(read))
            }
        } else {
            None
        }
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.len()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.remain.len();
        (len, Some(len))
    }
}

impl<T, C: VecConfig> DoubleEndedIterator for IntoIter<T, C> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        let mut index = self.remain.end;
        if index != self.remain.start {
            index -= 1;
            self.remain.end = index;
            unsafe {
                let read = self.vec.buffer.data_unchecked().as_ptr().add(index);
                Some(ptr::read(read))
            }
        } else {
            None
        }
    }
}

impl<T, C: VecConfig> ExactSizeIterator for IntoIter<T, C> {}

impl<T, C: VecConfig> FusedIterator for IntoIter<T, C> {}

impl<T, C: VecConfig> ElementSource for IntoIter<T, C> {
    const RELOCATING: bool = true;
    const NOPANIC_ITEM: bool = true;
}

impl<T, C: VecConfig> Drop for IntoIter<T, C> {
    fn drop(&mut self) {
        self.clear();
    }
}
