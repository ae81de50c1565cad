//! Growable, contiguous storage of encoding units with a trailing sentinel.
//!
//! Layout of a buffer holding `"hi"` in UTF-8:
//!
//! ```text
//! units:  [ 'h' 'i' 0 ]  spare capacity ...
//!          ^content^ ^sentinel
//! ```
//!
//! The buffer is never empty. The last unit is always a zero sentinel that is
//! not part of any code point, and every insertion or erasure happens strictly
//! before it. Only the units between the edit point and the sentinel move, so
//! offsets before an edit stay valid across it.

use alloc::alloc::{Layout, handle_alloc_error};
use core::{fmt, hash::Hash, ops::Range, ptr, ptr::NonNull, slice};

use crate::alloc_handle::{Allocator, DefaultAllocator};

const MIN_CAPACITY: usize = 8;

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// The fixed-width physical unit of an encoding (`u8` or `u16`).
pub trait StorageUnit:
    Copy + Default + Eq + Ord + Hash + fmt::Debug + Send + Sync + 'static + sealed::Sealed
{
    /// The sentinel value.
    const ZERO: Self;
}

impl StorageUnit for u8 {
    const ZERO: Self = 0;
}

impl StorageUnit for u16 {
    const ZERO: Self = 0;
}

/// Raw unit storage backing an [`EncodedString`](crate::EncodedString).
///
/// This type knows nothing about code points; it only guarantees the sentinel
/// invariant. Encoding policies receive it in
/// [`Encoding::insert`](crate::Encoding::insert).
pub struct StorageBuffer<U: StorageUnit, A: Allocator = DefaultAllocator> {
    ptr: NonNull<U>,
    cap: usize,
    /// Number of initialised units, sentinel included. Always `>= 1`.
    len: usize,
    alloc: A,
}

// SAFETY: the buffer exclusively owns its allocation and `U` is plain data.
unsafe impl<U: StorageUnit, A: Allocator + Send> Send for StorageBuffer<U, A> {}
// SAFETY: shared access only reads the units.
unsafe impl<U: StorageUnit, A: Allocator + Sync> Sync for StorageBuffer<U, A> {}

#[cold]
fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<U: StorageUnit, A: Allocator> StorageBuffer<U, A> {
    /// A sentinel-only buffer in `alloc`.
    pub fn new_in(alloc: A) -> Self {
        Self::with_capacity_in(0, alloc)
    }

    /// A sentinel-only buffer with room for `units` content units.
    pub fn with_capacity_in(units: usize, alloc: A) -> Self {
        let mut buf = Self {
            ptr: NonNull::dangling(),
            cap: 0,
            len: 0,
            alloc,
        };
        let Some(cap) = units.checked_add(1) else {
            capacity_overflow()
        };
        buf.grow_to(cap);
        // SAFETY: `grow_to` left room for at least one unit.
        unsafe { buf.ptr.as_ptr().write(U::ZERO) };
        buf.len = 1;
        buf
    }

    /// The allocator handle this buffer draws from.
    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Total units, sentinel included.
    #[inline]
    pub fn size_units(&self) -> usize {
        self.len
    }

    /// Units before the sentinel.
    #[inline]
    pub fn content_len(&self) -> usize {
        self.len - 1
    }

    /// Units that fit without reallocating, sentinel included.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.cap
    }

    /// Every unit, sentinel included.
    #[inline]
    pub fn as_units_with_sentinel(&self) -> &[U] {
        // SAFETY: `ptr` is valid for `len` initialised units.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.len) }
    }

    /// The units before the sentinel.
    #[inline]
    pub fn content(&self) -> &[U] {
        &self.as_units_with_sentinel()[..self.len - 1]
    }

    /// Pointer to the first unit; the run is sentinel-terminated.
    #[inline]
    pub fn as_ptr(&self) -> *const U {
        self.ptr.as_ptr()
    }

    /// Drop all content, keeping the allocation.
    pub fn reset_to_sentinel(&mut self) {
        // SAFETY: the buffer always has room for one unit.
        unsafe { self.ptr.as_ptr().write(U::ZERO) };
        self.len = 1;
    }

    /// Make room for `additional` more content units.
    pub fn reserve(&mut self, additional: usize) {
        let Some(required) = self.len.checked_add(additional) else {
            capacity_overflow()
        };
        if required > self.cap {
            let doubled = self.cap.saturating_mul(2);
            self.grow_to(required.max(doubled).max(MIN_CAPACITY));
        }
    }

    /// Release spare capacity.
    pub fn shrink_to_fit(&mut self) {
        if self.cap > self.len {
            self.resize_allocation(self.len);
        }
    }

    /// Insert `src` before offset `pos` and return the offset just past it.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past the sentinel.
    pub fn insert_units(&mut self, pos: usize, src: &[U]) -> usize {
        self.insert_repeated(pos, src, 1)
    }

    /// Insert `count` copies of `pattern` before offset `pos` and return the
    /// offset just past the last copy.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is past the sentinel.
    pub fn insert_repeated(&mut self, pos: usize, pattern: &[U], count: usize) -> usize {
        assert!(
            pos < self.len,
            "insert offset {pos} past sentinel at {}",
            self.len - 1
        );
        let Some(total) = pattern.len().checked_mul(count) else {
            capacity_overflow()
        };
        if total == 0 {
            return pos;
        }

        self.reserve(total);
        let base = self.ptr.as_ptr();
        // SAFETY: `reserve` guarantees room for `len + total` units; the tail
        // `[pos, len)` moves to `[pos + total, len + total)` and `pattern`
        // cannot alias the buffer because `self` is borrowed mutably.
        unsafe {
            ptr::copy(base.add(pos), base.add(pos + total), self.len - pos);
            let mut dst = base.add(pos);
            for _ in 0..count {
                ptr::copy_nonoverlapping(pattern.as_ptr(), dst, pattern.len());
                dst = dst.add(pattern.len());
            }
        }
        self.len += total;
        pos + total
    }

    /// Remove the units in `range` and return `range.start`.
    ///
    /// # Panics
    ///
    /// Panics if the range is inverted or reaches the sentinel.
    pub fn erase_units(&mut self, range: Range<usize>) -> usize {
        let Range { start, end } = range;
        assert!(
            start <= end && end < self.len,
            "erase range {start}..{end} invalid for content length {}",
            self.len - 1
        );
        if start == end {
            return start;
        }

        let base = self.ptr.as_ptr();
        // SAFETY: both ranges lie inside the initialised prefix; the sentinel
        // travels with the tail.
        unsafe { ptr::copy(base.add(end), base.add(start), self.len - end) };
        self.len -= end - start;
        start
    }

    /// Copy the content into a fresh buffer drawn from `alloc`.
    pub fn clone_in<B: Allocator>(&self, alloc: B) -> StorageBuffer<U, B> {
        let mut out = StorageBuffer::with_capacity_in(self.content_len(), alloc);
        out.insert_units(0, self.content());
        out
    }

    fn layout_for(cap: usize) -> Layout {
        Layout::array::<U>(cap).unwrap_or_else(|_| capacity_overflow())
    }

    fn grow_to(&mut self, new_cap: usize) {
        if new_cap > self.cap {
            self.resize_allocation(new_cap);
            tracing::trace!(capacity = new_cap, "storage buffer grew");
        }
    }

    fn resize_allocation(&mut self, new_cap: usize) {
        debug_assert!(new_cap >= self.len && new_cap > 0);
        let new_layout = Self::layout_for(new_cap);
        let raw = if self.cap == 0 {
            // SAFETY: `new_layout` has a non-zero size.
            unsafe { self.alloc.alloc(new_layout) }
        } else {
            // SAFETY: the block came from `self.alloc` with this layout.
            unsafe {
                self.alloc.realloc(
                    self.ptr.as_ptr().cast(),
                    Self::layout_for(self.cap),
                    new_layout.size(),
                )
            }
        };
        let Some(ptr) = NonNull::new(raw.cast::<U>()) else {
            handle_alloc_error(new_layout)
        };
        self.ptr = ptr;
        self.cap = new_cap;
    }
}

impl<U: StorageUnit, A: Allocator> Drop for StorageBuffer<U, A> {
    fn drop(&mut self) {
        if self.cap > 0 {
            // SAFETY: the block came from `self.alloc` with this layout.
            unsafe {
                self.alloc
                    .dealloc(self.ptr.as_ptr().cast(), Self::layout_for(self.cap));
            }
        }
    }
}

impl<U: StorageUnit, A: Allocator + Clone> Clone for StorageBuffer<U, A> {
    fn clone(&self) -> Self {
        self.clone_in(self.alloc.clone())
    }
}

impl<U: StorageUnit, A: Allocator> fmt::Debug for StorageBuffer<U, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageBuffer")
            .field("units", &self.content())
            .field("capacity", &self.cap)
            .finish_non_exhaustive()
    }
}
