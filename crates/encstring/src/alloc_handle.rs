//! Injectable allocation for storage buffers.
//!
//! Every [`EncodedString`](crate::EncodedString) carries an allocator handle
//! next to its buffer. The handle is a plain value: a copy of a string may be
//! placed in a different allocator than its source with
//! [`clone_in`](crate::EncodedString::clone_in).

use alloc::alloc::{GlobalAlloc, Layout};

/// Memory source for a storage buffer.
///
/// The contract mirrors [`GlobalAlloc`]: implementations hand out raw blocks
/// for a [`Layout`] and take them back with the same layout.
///
/// # Safety
///
/// Implementors must behave like a [`GlobalAlloc`]: returned blocks are valid
/// for the requested layout until deallocated, and `realloc` preserves the
/// contents up to the smaller of the two sizes.
pub unsafe trait Allocator {
    /// Allocate a block for `layout`, or return null on failure.
    ///
    /// # Safety
    ///
    /// See [`GlobalAlloc::alloc`].
    unsafe fn alloc(&self, layout: Layout) -> *mut u8;

    /// Release a block previously returned by this allocator.
    ///
    /// # Safety
    ///
    /// See [`GlobalAlloc::dealloc`].
    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout);

    /// Grow or shrink a block previously returned by this allocator.
    ///
    /// # Safety
    ///
    /// See [`GlobalAlloc::realloc`].
    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8;
}

/// The process-wide global allocator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultAllocator;

unsafe impl Allocator for DefaultAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded contract.
        unsafe { alloc::alloc::alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: forwarded contract.
        unsafe { alloc::alloc::dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: forwarded contract.
        unsafe { alloc::alloc::realloc(ptr, layout, new_size) }
    }
}

/// Adapts any [`GlobalAlloc`] (an arena, a counting allocator, ...) into an
/// [`Allocator`] handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlobalAllocWrapper<T: GlobalAlloc>(pub T);

unsafe impl<T: GlobalAlloc> Allocator for GlobalAllocWrapper<T> {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded contract.
        unsafe { self.0.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: forwarded contract.
        unsafe { self.0.dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: forwarded contract.
        unsafe { self.0.realloc(ptr, layout, new_size) }
    }
}

unsafe impl<A: Allocator + ?Sized> Allocator for &A {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded contract.
        unsafe { (**self).alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: forwarded contract.
        unsafe { (**self).dealloc(ptr, layout) }
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: forwarded contract.
        unsafe { (**self).realloc(ptr, layout, new_size) }
    }
}
