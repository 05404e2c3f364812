use core::marker::PhantomData;
use core::mem;
use core::ptr;

use crate::index::Index;
use crate::storage::RawStorage;

/// Fills a gap of uninitialized slots inside an allocated buffer.
///
/// The buffer length must equal `start`, the slots `start..limit` must be
/// uninitialized, and `tail` initialized elements must follow at `limit`.
/// If the writer is dropped before completion, the new elements are dropped
/// and the tail is moved back to `start`, leaving the buffer consistent.
pub(super) struct Inserter<'a, T, B: RawStorage<T>> {
    buffer: &'a mut B,
    data: *mut T,
    start: usize,
    end: usize,
    limit: usize,
    tail: usize,
    _pd: PhantomData<T>,
}

impl<'a, T, B: RawStorage<T>> Inserter<'a, T, B> {
    /// # Safety
    /// The buffer must be allocated and laid out as described above, with
    /// `start + count + tail` not exceeding its capacity.
    #[inline]
    pub unsafe fn new(buffer: &'a mut B, start: usize, count: usize, tail: usize) -> Self {
        debug_assert!(start + count + tail <= buffer.capacity().to_usize());
        let data = buffer.data_unchecked().as_ptr();
        Self {
            buffer,
            data,
            start,
            end: start,
            limit: start + count,
            tail,
            _pd: PhantomData,
        }
    }

    #[inline]
    pub const fn is_full(&self) -> bool {
        self.end == self.limit
    }

    #[inline]
    pub fn push(&mut self, value: T) {
        assert!(!self.is_full());
        unsafe { self.data.add(self.end).write(value) };
        self.end += 1;
    }

    /// Write items until the gap is full or the source is exhausted.
    #[inline]
    pub fn fill(&mut self, mut source: impl Iterator<Item = T>) {
        while !self.is_full() {
            let Some(item) = source.next() else { break };
            self.push(item);
        }
    }

    /// Close any unfilled part of the gap and commit the new length,
    /// returning the number of elements written.
    pub fn complete(self) -> usize {
        let mut me = mem::ManuallyDrop::new(self);
        let added = me.end - me.start;
        unsafe {
            if me.end != me.limit && me.tail > 0 {
                ptr::copy(me.data.add(me.limit), me.data.add(me.end), me.tail);
            }
            let len = B::Index::from_usize(me.end + me.tail);
            me.buffer.set_len(len);
        }
        added
    }
}

impl<T, B: RawStorage<T>> Drop for Inserter<'_, T, B> {
    fn drop(&mut self) {
        unsafe {
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(
                self.data.add(self.start),
                self.end - self.start,
            ));
            if self.tail > 0 {
                ptr::copy(self.data.add(self.limit), self.data.add(self.start), self.tail);
            }
            self.buffer
                .set_len(B::Index::from_usize(self.start + self.tail));
        }
    }
}
