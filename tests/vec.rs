#![cfg(feature = "alloc")]

use core::cell::Cell;
use core::iter::repeat;
use core::marker::PhantomData as Cfg;
use core::mem::size_of;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::panic::{catch_unwind, AssertUnwindSafe};

use rand::{rngs::StdRng, Rng, SeedableRng};
use rstest::rstest;

use flex_seq::{
    seq,
    vec::{Cached, CachedVec, CompactVec, Thin, ThinVec, Vec as FlexVec, VecConfig},
};

const SLICE: &[usize] = &[1, 2, 3, 4, 5];

#[derive(Debug, Default)]
struct Counter {
    live: Cell<isize>,
    clones_left: Cell<Option<usize>>,
}

impl Counter {
    fn arm(&self, clones: usize) {
        self.clones_left.set(Some(clones));
    }
}

#[derive(Debug)]
struct Tracked<'c> {
    value: usize,
    counter: &'c Counter,
}

impl<'c> Tracked<'c> {
    fn new(value: usize, counter: &'c Counter) -> Self {
        counter.live.set(counter.live.get() + 1);
        Self { value, counter }
    }
}

impl Clone for Tracked<'_> {
    fn clone(&self) -> Self {
        if let Some(left) = self.counter.clones_left.get() {
            if left == 0 {
                panic!("clone failed");
            }
            self.counter.clones_left.set(Some(left - 1));
        }
        Tracked::new(self.value, self.counter)
    }
}

impl Drop for Tracked<'_> {
    fn drop(&mut self) {
        self.counter.live.set(self.counter.live.get() - 1);
    }
}

fn values<C: VecConfig>(v: &FlexVec<Tracked<'_>, C>) -> Vec<usize> {
    v.iter().map(|t| t.value).collect()
}

#[derive(Debug, PartialEq)]
struct Fragile(usize);

impl Drop for Fragile {
    fn drop(&mut self) {
        if self.0 == 2 && !std::thread::panicking() {
            panic!("drop failed");
        }
    }
}

/// An iterator which claims more items than it produces.
struct ShortSource {
    next: usize,
    end: usize,
    claimed: usize,
}

impl Iterator for ShortSource {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.next < self.end {
            self.next += 1;
            Some(self.next - 1)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.claimed, Some(self.claimed))
    }
}

impl ExactSizeIterator for ShortSource {}

fn hash_of<H: Hash + ?Sized>(value: &H) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

#[test]
fn handle_sizes() {
    assert_eq!(size_of::<ThinVec<u64>>(), size_of::<usize>());
    assert_eq!(size_of::<ThinVec<[u8; 200], u32>>(), size_of::<usize>());
    assert_eq!(size_of::<CachedVec<u64>>(), 3 * size_of::<usize>());
    #[cfg(target_pointer_width = "64")]
    assert_eq!(size_of::<CompactVec<u64>>(), 2 * size_of::<usize>());
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_new_is_unallocated<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let v = FlexVec::<usize, C>::new();
    assert!(!v.is_allocated());
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 0);
    assert!(v.as_ptr().is_null());
    assert_eq!(v.as_slice(), &[] as &[usize]);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_check_capacity_growth<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut res = [0usize; 10];
    let mut vec = FlexVec::<usize, C>::new();
    for (idx, cap) in res.iter_mut().enumerate() {
        assert_eq!(*vec.push(idx), idx);
        *cap = vec.capacity();
    }
    assert_eq!(res, [2, 2, 4, 4, 8, 8, 8, 8, 16, 16]);
    assert_eq!(vec.len(), 10);
    assert!(vec.iter().copied().eq(0..10));
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_push_pop<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut v = FlexVec::<String, C>::new();
    assert_eq!(v.pop(), None);
    v.push("a".to_string());
    v.push("b".to_string()).push('!');
    assert_eq!(v, ["a", "b!"]);
    assert_eq!(v.pop().as_deref(), Some("b!"));
    assert_eq!(v.pop().as_deref(), Some("a"));
    assert_eq!(v.pop(), None);
    assert!(v.is_allocated());
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_grow<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut v = FlexVec::<usize, C>::new();
    v.grow(0);
    assert_eq!(v.capacity(), 2);
    v.extend_from_slice(&[1, 2]);
    v.grow(0);
    assert_eq!(v.capacity(), 4);
    v.grow(10);
    assert_eq!(v.capacity(), 14);
    assert_eq!(v, [1, 2]);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_reserve<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut v = FlexVec::<usize, C>::new();
    assert!(!v.reserve(0));
    assert!(!v.is_allocated());
    assert!(v.reserve(10));
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), 10);
    assert!(!v.reserve(5));
    assert_eq!(v.capacity(), 10);
    v.extend_from_slice(SLICE);
    let ptr = v.as_ptr();
    assert!(!v.reserve(10));
    assert_eq!(v.as_ptr(), ptr);
    assert!(v.reserve(11));
    assert_eq!(v.capacity(), 11);
    assert_eq!(v, SLICE);
    assert_eq!(v.try_reserve(12), Ok(true));
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_resize_fill<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut v = FlexVec::<String, C>::new();
    v.resize(4, "x".to_string());
    assert_eq!(v.len(), 4);
    assert_eq!(v.capacity(), 4);
    assert!(v.iter().all(|s| s == "x"));
    let ptr = v.as_ptr();
    v.resize(4, "y".to_string());
    assert_eq!(v.as_ptr(), ptr);
    assert_eq!(v, ["y", "y", "y", "y"]);
    v.resize(2, "z".to_string());
    assert_eq!(v.as_ptr(), ptr);
    assert_eq!(v.capacity(), 4);
    assert_eq!(v, ["z", "z"]);
    v.resize(6, "w".to_string());
    assert_eq!(v.capacity(), 6);
    assert_eq!(v.len(), 6);
    v.resize(0, "v".to_string());
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 6);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_resize_default_and_with<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut v = FlexVec::<usize, C>::with_len(3);
    assert_eq!(v, [0, 0, 0]);
    let mut next = 10;
    v.resize_with(5, || {
        next += 1;
        next
    });
    assert_eq!(v, [11, 12, 13, 14, 15]);
    v.resize_default(1);
    assert_eq!(v, [0]);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_resize_from_moved_source<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut v = FlexVec::<String, C>::from_slice(&["a".to_string()]);
    let mut source: Vec<String> = (0..5).map(|i| i.to_string()).collect();
    v.resize_from(source.drain(..));
    assert!(source.is_empty());
    assert_eq!(v.len(), 5);
    assert_eq!(v.capacity(), 5);
    assert_eq!(v, ["0", "1", "2", "3", "4"]);
}

fn check_insert_fill<C: VecConfig<Index = usize>>(n: usize, k: usize, spare: bool) {
    let mut v = FlexVec::<String, C>::new();
    v.resize(n, "a".to_string());
    if spare {
        v.reserve(n + k);
    }
    let cap = v.capacity();
    let index = 1.min(n);
    assert_eq!(v.insert_fill(index, k, "b".to_string()).len(), k);
    assert_eq!(v.len(), n + k);
    for (idx, item) in v.iter().enumerate() {
        let inside = idx >= index && idx < index + k;
        assert_eq!(item, if inside { "b" } else { "a" }, "at {idx}");
    }
    if spare {
        assert_eq!(v.capacity(), cap);
    } else {
        assert_eq!(v.capacity(), cap + cap.max(k));
    }
}

#[rstest]
#[case::realloc(4, 2, false)]
#[case::realloc_large(4, 9, false)]
#[case::trailing(6, 2, true)]
#[case::trailing_equal(4, 3, true)]
#[case::split(3, 4, true)]
#[case::split_at_end(1, 5, true)]
fn vec_insert_fill_branches(#[case] n: usize, #[case] k: usize, #[case] spare: bool) {
    check_insert_fill::<Cached>(n, k, spare);
    check_insert_fill::<Thin>(n, k, spare);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_insert_preserves_order<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    for spare in [0, 16] {
        for count in 0..8 {
            for index in 0..=5 {
                let mut v = FlexVec::<usize, C>::from_slice(&[0, 1, 2, 3, 4]);
                v.reserve(5 + spare);
                let mut expect: Vec<usize> = (0..5).collect();
                let ins: Vec<usize> = (100..100 + count).collect();
                let added = v.insert_from(index, ins.iter().copied());
                assert_eq!(added, &ins[..]);
                expect.splice(index..index, ins.iter().copied());
                assert_eq!(v, expect);
            }
        }
    }
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_insert_single<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut v = FlexVec::<usize, C>::new();
    *v.insert(0, 5) += 1;
    assert_eq!(v.capacity(), 1);
    v.insert(0, 1);
    v.insert(2, 9);
    v.insert(1, 3);
    assert_eq!(v, [1, 3, 6, 9]);
}

#[test]
#[should_panic(expected = "Invalid element index")]
fn vec_insert_past_end() {
    let mut v = CachedVec::<usize>::from_slice(SLICE);
    v.insert(6, 0);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_insert_short_source<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    for spare in [0, 16] {
        let mut v = FlexVec::<usize, C>::from_slice(&[0, 1, 2, 3]);
        v.reserve(4 + spare);
        let added = v.insert_from(
            1,
            ShortSource {
                next: 10,
                end: 12,
                claimed: 5,
            },
        );
        assert_eq!(added, [10, 11]);
        assert_eq!(v, [0, 10, 11, 1, 2, 3]);
    }
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_erase<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut v = FlexVec::<String, C>::from_slice(&["0", "1", "2", "3", "4", "5"].map(String::from));
    v.erase(2..2);
    assert_eq!(v.len(), 6);
    v.erase(1..3);
    assert_eq!(v, ["0", "3", "4", "5"]);
    v.erase(2..);
    assert_eq!(v, ["0", "3"]);
    v.erase_at(0);
    assert_eq!(v, ["3"]);
    v.erase_at(0);
    assert!(v.is_empty());
    assert!(v.is_allocated());

    let mut v = FlexVec::<usize, C>::from_slice(&[0, 1, 2, 3, 4, 5, 6]);
    v.erase_count(1, 3);
    assert_eq!(v, [0, 4, 5, 6]);
    v.erase(..=1);
    assert_eq!(v, [5, 6]);
    v.erase(..);
    assert!(v.is_empty());
}

#[test]
#[should_panic(expected = "Invalid element index")]
fn vec_erase_out_of_range() {
    let mut v = ThinVec::<usize>::from_slice(SLICE);
    v.erase(3..7);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_clear_and_release<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let counter = Counter::default();
    let mut v = FlexVec::<Tracked<'_>, C>::new();
    for i in 0..5 {
        v.push(Tracked::new(i, &counter));
    }
    assert_eq!(counter.live.get(), 5);
    v.clear();
    assert_eq!(counter.live.get(), 0);
    assert_eq!(v.capacity(), 8);
    v.push(Tracked::new(1, &counter));
    v.release();
    assert_eq!(counter.live.get(), 0);
    assert!(!v.is_allocated());
    assert_eq!(v.capacity(), 0);
    v.push(Tracked::new(2, &counter));
    drop(v);
    assert_eq!(counter.live.get(), 0);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_clone_and_take<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut v = FlexVec::<String, C>::from_slice(&["a".to_string(), "b".to_string()]);
    let mut copy = v.clone();
    assert_eq!(copy, v);
    assert_ne!(copy.as_ptr(), v.as_ptr());
    copy[0].push('!');
    copy.push("c".to_string());
    assert_eq!(v, ["a", "b"]);
    assert_eq!(copy, ["a!", "b", "c"]);

    copy.clone_from(&v);
    assert_eq!(copy, v);

    let moved = v.take();
    assert!(!v.is_allocated());
    assert_eq!(v.capacity(), 0);
    assert_eq!(moved, ["a", "b"]);

    let mut other = FlexVec::<String, C>::new();
    let mut moved = moved;
    other.swap_with(&mut moved);
    assert!(!moved.is_allocated());
    assert_eq!(other, ["a", "b"]);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_drop_accounting<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let counter = Counter::default();
    {
        let mut v = FlexVec::<Tracked<'_>, C>::new();
        v.resize(3, Tracked::new(0, &counter));
        v.insert_fill(1, 4, Tracked::new(1, &counter));
        v.erase(0..2);
        v.insert(2, Tracked::new(2, &counter));
        v.resize_from(vec![Tracked::new(3, &counter), Tracked::new(4, &counter)]);
        assert_eq!(values(&v), [3, 4]);
        assert_eq!(counter.live.get(), 2);
        let mut iter = v.into_iter();
        assert_eq!(iter.next().map(|t| t.value), Some(3));
        assert_eq!(counter.live.get(), 1);
    }
    assert_eq!(counter.live.get(), 0);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_insert_panic_in_place<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let counter = Counter::default();
    let mut v = FlexVec::<Tracked<'_>, C>::new();
    for i in 0..6 {
        v.push(Tracked::new(i, &counter));
    }
    assert_eq!(v.capacity(), 8);
    counter.arm(1);
    let res = catch_unwind(AssertUnwindSafe(|| {
        v.insert_fill(2, 2, Tracked::new(99, &counter));
    }));
    assert!(res.is_err());
    counter.clones_left.set(None);
    assert_eq!(values(&v), [0, 1, 2, 3, 4, 5]);
    assert_eq!(counter.live.get(), 6);
    drop(v);
    assert_eq!(counter.live.get(), 0);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_insert_panic_realloc<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let counter = Counter::default();
    let mut v = FlexVec::<Tracked<'_>, C>::new();
    v.resize_from((0..4).map(|i| Tracked::new(i, &counter)).collect::<Vec<_>>());
    assert_eq!(v.capacity(), 4);
    counter.arm(1);
    let res = catch_unwind(AssertUnwindSafe(|| {
        v.insert_fill(1, 3, Tracked::new(99, &counter));
    }));
    assert!(res.is_err());
    assert_eq!(values(&v), [0, 1, 2, 3]);
    assert_eq!(v.capacity(), 8);
    assert_eq!(counter.live.get(), 4);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_resize_panic<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let counter = Counter::default();
    let mut v = FlexVec::<Tracked<'_>, C>::new();
    v.resize(3, Tracked::new(0, &counter));
    counter.arm(2);
    let res = catch_unwind(AssertUnwindSafe(|| {
        v.resize(5, Tracked::new(1, &counter));
    }));
    assert!(res.is_err());
    assert!(v.is_empty());
    assert_eq!(v.capacity(), 5);
    assert_eq!(counter.live.get(), 0);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_erase_panic<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut v = FlexVec::<Fragile, C>::new();
    v.extend((0..6).map(Fragile));
    let res = catch_unwind(AssertUnwindSafe(|| {
        v.erase(1..4);
    }));
    assert!(res.is_err());
    assert_eq!(v, [Fragile(0), Fragile(4), Fragile(5)]);
}

#[test]
fn vec_nopanic_guarantees() {
    assert!(CachedVec::<u32>::NOPANIC_PUSH);
    assert!(CachedVec::<u32>::NOPANIC_ERASE);
    assert!(ThinVec::<u32>::NOPANIC_RELEASE);
    assert!(ThinVec::<String>::NOPANIC_RESERVE);
    assert!(ThinVec::<String>::NOPANIC_GROW);
    assert!(ThinVec::<String>::NOPANIC_POP);
    assert!(!CachedVec::<String>::NOPANIC_CLEAR);
    assert!(!CachedVec::<Fragile>::NOPANIC_ERASE);
    assert!(CachedVec::<u32>::nopanic_fill());
    assert!(CachedVec::<u32>::nopanic_resize_from::<core::array::IntoIter<u32, 3>>());
    assert!(CachedVec::<u32>::nopanic_resize_from::<core::iter::Copied<core::slice::Iter<'_, u32>>>());
    assert!(!CachedVec::<String>::nopanic_resize_from::<std::vec::IntoIter<String>>());
    assert!(
        !CachedVec::<u32>::nopanic_resize_from::<core::iter::Cloned<core::slice::Iter<'_, u32>>>()
    );
}

#[rstest]
#[case::cached(Cfg::<Cached<u8>>)]
#[case::thin(Cfg::<Thin<u8>>)]
fn vec_narrow_index<C: VecConfig<Index = u8>>(#[case] _config: Cfg<C>) {
    let mut v = FlexVec::<u8, C>::new();
    for i in 0..=254u8 {
        v.push(i);
    }
    assert_eq!(v.len(), 255);
    assert_eq!(v.capacity(), 255);
    let res = catch_unwind(AssertUnwindSafe(|| {
        v.push(255);
    }));
    assert!(res.is_err());
    assert_eq!(v.len(), 255);
    assert!(v.iter().copied().eq(0..=254));
    assert_eq!(v.try_reserve(255), Ok(false));
}

#[test]
fn vec_thin_large_element_alignment() {
    let mut v = ThinVec::<[u8; 100]>::new();
    v.push([1; 100]);
    assert_eq!(v.as_ptr() as usize % flex_seq::storage::CACHE_LINE_SIZE, 0);
    let mut v = ThinVec::<u16, u32>::new();
    v.push(1);
    assert_eq!(v.as_ptr() as usize % 8, 0);
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_zero_sized<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut v = FlexVec::<(), C>::new();
    for _ in 0..10 {
        v.push(());
    }
    assert_eq!(v.len(), 10);
    v.insert_fill(3, 5, ());
    v.erase(0..2);
    assert_eq!(v.len(), 13);
    assert_eq!(v.pop(), Some(()));
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_extend_and_collect<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut v = FlexVec::<usize, C>::new();
    v.extend(SLICE.iter().cloned());
    assert!(v.capacity() >= SLICE.len());
    assert_eq!(v, SLICE);
    v.extend(SLICE);
    assert_eq!(v.len(), 10);
    v.extend((0..100).filter(|i| i % 2 == 0));
    assert_eq!(v.len(), 60);

    let c: FlexVec<usize, C> = (0..100).collect();
    assert!(c.iter().copied().eq(0..100));
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_into_iter<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let v = FlexVec::<String, C>::from(["a", "b", "c", "d"].map(String::from));
    let mut iter = v.into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next().as_deref(), Some("a"));
    assert_eq!(iter.next_back().as_deref(), Some("d"));
    assert_eq!(iter.as_slice(), ["b", "c"]);
    let rest: Vec<String> = iter.collect();
    assert_eq!(rest, ["b", "c"]);

    let empty = FlexVec::<String, C>::new();
    assert_eq!(empty.into_iter().count(), 0);
}

#[test]
fn vec_conversions_and_comparisons() {
    let v = CachedVec::<u32>::from(vec![3, 1, 2]);
    let t = ThinVec::<u32>::from(&[3, 1, 2]);
    assert_eq!(v, t);
    assert_eq!(v, [3, 1, 2]);
    assert_eq!(v, &[3, 1, 2][..]);
    assert_eq!(vec![3, 1, 2], v);
    assert!([3, 1, 2] == t);
    assert!(v < CachedVec::<u32>::from([3, 2]));
    assert_eq!(hash_of(&v), hash_of(&[3u32, 1, 2][..]));
    let back: Vec<u32> = t.into();
    assert_eq!(back, [3, 1, 2]);
    let bytes = CachedVec::<u8>::from("hi");
    assert_eq!(bytes, b"hi");
    assert_eq!(format!("{:?}", v), "[3, 1, 2]");
}

#[test]
fn seq_macro() {
    let v = seq![1, 2, 3];
    assert_eq!(v, [1, 2, 3]);
    let z = seq!["z"; 3];
    assert_eq!(z, ["z", "z", "z"]);
    assert_eq!(z.capacity(), 3);
    let e: CachedVec<u8> = seq![];
    assert!(!e.is_allocated());
}

#[rstest]
#[case::cached(Cfg::<Cached>)]
#[case::thin(Cfg::<Thin>)]
fn vec_compare_std_random<C: VecConfig<Index = usize>>(#[case] _config: Cfg<C>) {
    let mut rng = StdRng::seed_from_u64(0x5eed_f1a7);
    let mut flex = FlexVec::<usize, C>::new();
    let mut model = Vec::<usize>::new();
    for step in 0..4000 {
        match rng.gen_range(0..9) {
            0 | 1 => {
                let value = rng.gen();
                flex.push(value);
                model.push(value);
            }
            2 => assert_eq!(flex.pop(), model.pop()),
            3 => {
                let index = rng.gen_range(0..=model.len());
                let count = rng.gen_range(0..6);
                flex.insert_fill(index, count, step);
                model.splice(index..index, repeat(step).take(count));
            }
            4 => {
                let index = rng.gen_range(0..=model.len());
                let source: Vec<usize> = (0..rng.gen_range(0..12)).map(|_| rng.gen()).collect();
                flex.insert_from(index, source.iter().copied());
                model.splice(index..index, source);
            }
            5 if !model.is_empty() => {
                let start = rng.gen_range(0..model.len());
                let end = rng.gen_range(start..=model.len());
                flex.erase(start..end);
                model.drain(start..end);
            }
            6 => {
                let count = rng.gen_range(0..24);
                flex.resize(count, step);
                model.clear();
                model.resize(count, step);
            }
            7 => {
                let capacity = rng.gen_range(0..64);
                let before = flex.capacity();
                assert_eq!(flex.reserve(capacity), capacity > before);
                assert_eq!(flex.capacity(), capacity.max(before));
            }
            _ => {
                if rng.gen_bool(0.1) {
                    flex.clear();
                    model.clear();
                }
            }
        }
        assert_eq!(flex, model, "step {step}");
        assert!(flex.len() <= flex.capacity());
        assert_eq!(flex.is_allocated(), flex.capacity() > 0);
    }
}
