#![cfg(all(feature = "alloc", feature = "zeroize"))]

use core::alloc::Layout;
use core::cell::RefCell;
use core::ptr::NonNull;
use core::slice;

use const_default::ConstDefault;
use zeroize::Zeroize;

use flex_seq::{
    storage::{data_offset, Global, RawAlloc, ZeroizingAlloc},
    vec::{Cached, Thin, Vec as FlexVec, ZeroizingVec},
    StorageError,
};

thread_local! {
    static RELEASED: RefCell<Vec<Vec<u8>>> = RefCell::new(Vec::new());
}

fn released() -> Vec<Vec<u8>> {
    RELEASED.with(|log| log.borrow().clone())
}

/// Records a copy of every block as it is released.
#[derive(Debug, Default, Clone, Copy)]
struct LogAlloc;

impl ConstDefault for LogAlloc {
    const DEFAULT: Self = LogAlloc;
}

impl RawAlloc for LogAlloc {
    fn try_alloc(&self, layout: Layout) -> Result<NonNull<[u8]>, StorageError> {
        Global.try_alloc(layout)
    }

    unsafe fn release(&self, ptr: NonNull<u8>, layout: Layout) {
        let copy = Vec::from(unsafe { slice::from_raw_parts(ptr.as_ptr(), layout.size()) });
        RELEASED.with(|log| log.borrow_mut().push(copy));
        Global.release(ptr, layout)
    }
}

type LogVec<T> = FlexVec<T, Cached<usize, LogAlloc>>;
type ZeroLogVec<T> = FlexVec<T, Cached<usize, ZeroizingAlloc<LogAlloc>>>;
type ZeroLogThinVec<T> = FlexVec<T, Thin<usize, ZeroizingAlloc<LogAlloc>>>;

#[test]
fn alloc_log() {
    let mut v = LogVec::<u32>::with_capacity(1);
    v.push(99);
    drop(v);
    assert_eq!(released(), [99u32.to_ne_bytes()]);
}

#[test]
fn vec_zeroize_on_release() {
    let mut v = ZeroLogVec::<u32>::with_capacity(1);
    v.push(99);
    drop(v);
    assert_eq!(released(), [[0u8; 4]]);
}

#[test]
fn vec_zeroize_on_grow() {
    let mut v = ZeroLogVec::<u32>::new();
    v.extend_from_slice(&[1, 2]);
    v.push(3);
    assert_eq!(v, [1, 2, 3]);
    assert_eq!(released(), [[0u8; 8]]);
}

#[test]
fn thin_vec_zeroize_header() {
    let mut v = ZeroLogThinVec::<u32>::with_capacity(1);
    v.push(99);
    drop(v);
    let size = data_offset::<u32, usize>() + 4;
    assert_eq!(released(), [vec![0u8; size]]);
}

#[test]
fn vec_zeroize_trait() {
    let mut v = ZeroLogVec::<u8>::from_slice(b"secret");
    v.zeroize();
    assert!(!v.is_allocated());
    assert_eq!(released(), [[0u8; 6]]);
}

#[test]
fn vec_type_alias() {
    let mut v = ZeroizingVec::new();
    v.extend([1, 2, 3]);
    assert_eq!(v, [1, 2, 3]);
    v.release();
    assert!(!v.is_allocated());
}
