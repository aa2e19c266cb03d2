//! Raw, uninitialised element storage.
//!
//! [`RawBuf`] owns a heap block sized for `capacity` values of `T` and
//! nothing else: it never knows which slots hold live values, so it never
//! drops elements. Its own `Drop` only releases the block. The owner
//! (`GrowableArray` or `IntoIter`) tracks the live range and is responsible
//! for dropping it first.
//!
//! Zero-sized element types and zero capacity never touch the allocator;
//! the pointer is then a dangling, well-aligned sentinel.

#![allow(unsafe_code)]

use std::alloc::{self, Layout};
use std::marker::PhantomData;
use std::mem;
use std::ptr::{self, NonNull};
use std::slice;

use crate::error::ArrayError;

/// An owned block of `capacity` uninitialised slots of `T`.
pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    /// Tells drop check that values of `T` are (logically) owned here.
    _marker: PhantomData<T>,
}

// SAFETY: RawBuf uniquely owns its block, exactly like Box<[T]>.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access only hands out shared references to T.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

impl<T> RawBuf<T> {
    /// A storage-less buffer. Never allocates.
    pub(crate) const fn new() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocate room for exactly `cap` values.
    pub(crate) fn try_allocate(cap: usize) -> Result<Self, ArrayError> {
        let layout = Self::layout(cap)?;
        if layout.size() == 0 {
            return Ok(Self {
                ptr: NonNull::dangling(),
                cap,
                _marker: PhantomData,
            });
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc::alloc(layout) };
        let ptr = NonNull::new(raw.cast::<T>()).ok_or(ArrayError::AllocFailed {
            size: layout.size(),
            align: layout.align(),
        })?;
        Ok(Self {
            ptr,
            cap,
            _marker: PhantomData,
        })
    }

    fn layout(cap: usize) -> Result<Layout, ArrayError> {
        Layout::array::<T>(cap).map_err(|_| ArrayError::CapacityOverflow { requested: cap })
    }

    pub(crate) fn capacity(&self) -> usize {
        self.cap
    }

    pub(crate) fn as_ptr(&self) -> *const T {
        self.ptr.as_ptr()
    }

    pub(crate) fn as_mut_ptr(&mut self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Construct `value` in place at `slot` and return a reference to it.
    ///
    /// # Safety
    ///
    /// `slot < capacity`, and the slot must not hold a live value (it would
    /// be overwritten without being dropped).
    pub(crate) unsafe fn write(&mut self, slot: usize, value: T) -> &mut T {
        debug_assert!(slot < self.cap);
        // SAFETY: the caller guarantees `slot` is in bounds and vacant.
        unsafe {
            let dst = self.ptr.as_ptr().add(slot);
            dst.write(value);
            &mut *dst
        }
    }

    /// Move the value out of `slot`, leaving the slot logically vacant.
    ///
    /// # Safety
    ///
    /// `slot` must hold a live value, and the caller must stop treating it
    /// as live afterwards.
    pub(crate) unsafe fn read(&self, slot: usize) -> T {
        debug_assert!(slot < self.cap);
        // SAFETY: the caller guarantees `slot` is initialised.
        unsafe { self.ptr.as_ptr().add(slot).read() }
    }

    /// # Safety
    ///
    /// Every slot in `start..end` must hold a live value.
    pub(crate) unsafe fn slice(&self, start: usize, end: usize) -> &[T] {
        debug_assert!(start <= end && end <= self.cap);
        // SAFETY: the range is initialised, and the pointer is non-null and
        // aligned even when the range is empty.
        unsafe { slice::from_raw_parts(self.ptr.as_ptr().add(start), end - start) }
    }

    /// # Safety
    ///
    /// Every slot in `start..end` must hold a live value.
    pub(crate) unsafe fn slice_mut(&mut self, start: usize, end: usize) -> &mut [T] {
        debug_assert!(start <= end && end <= self.cap);
        // SAFETY: as for `slice`, plus `&mut self` gives exclusive access.
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr().add(start), end - start) }
    }

    /// Drop the values in `start..end` in place.
    ///
    /// # Safety
    ///
    /// Every slot in the range must hold a live value, and none of them may
    /// be used again afterwards.
    pub(crate) unsafe fn drop_range(&mut self, start: usize, end: usize) {
        debug_assert!(start <= end && end <= self.cap);
        // SAFETY: the caller guarantees the range is live and abandoned.
        unsafe {
            let first = self.ptr.as_ptr().add(start);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(first, end - start));
        }
    }

    /// Move the first `len` values into a fresh block of `new_cap` slots and
    /// release the old block.
    ///
    /// The new block is acquired before anything is touched, so on error the
    /// buffer is left exactly as it was. Moves are bitwise copies and cannot
    /// fail, so once allocation succeeds the relocation always completes.
    ///
    /// # Safety
    ///
    /// `len <= new_cap`, and slots `0..len` must hold live values.
    pub(crate) unsafe fn try_relocate(&mut self, len: usize, new_cap: usize) -> Result<(), ArrayError> {
        debug_assert!(len <= new_cap && len <= self.cap);
        let mut fresh = Self::try_allocate(new_cap)?;
        // SAFETY: the source holds `len` live values, the destination has
        // room for at least `len`, and they are distinct allocations.
        unsafe {
            ptr::copy_nonoverlapping(self.ptr.as_ptr(), fresh.ptr.as_ptr(), len);
        }
        mem::swap(self, &mut fresh);
        // `fresh` now owns the old block, whose values were moved out; its
        // drop only returns the memory.
        Ok(())
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        let size = mem::size_of::<T>() * self.cap;
        if size == 0 {
            return;
        }
        // SAFETY: the block was allocated by `try_allocate` with exactly this
        // size and alignment, which `Layout::array` validated at the time.
        unsafe {
            let layout = Layout::from_size_align_unchecked(size, mem::align_of::<T>());
            alloc::dealloc(self.ptr.as_ptr().cast::<u8>(), layout);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_buffer_has_no_storage() {
        let buf = RawBuf::<u64>::new();
        assert_eq!(buf.capacity(), 0);
        assert!(!buf.as_ptr().is_null());
    }

    #[test]
    fn allocate_exact_capacity() {
        let buf = RawBuf::<u32>::try_allocate(10).unwrap();
        assert_eq!(buf.capacity(), 10);
        assert_eq!(buf.as_ptr() as usize % mem::align_of::<u32>(), 0);
    }

    #[test]
    fn oversized_request_is_capacity_overflow() {
        let result = RawBuf::<u64>::try_allocate(usize::MAX);
        assert!(matches!(
            result,
            Err(ArrayError::CapacityOverflow { requested: usize::MAX })
        ));
    }

    #[test]
    fn zero_sized_types_never_allocate() {
        let buf = RawBuf::<()>::try_allocate(usize::MAX).unwrap();
        assert_eq!(buf.capacity(), usize::MAX);
    }

    #[test]
    fn write_then_read_back() {
        let mut buf = RawBuf::<String>::try_allocate(2).unwrap();
        unsafe {
            buf.write(0, "a".to_string());
            buf.write(1, "b".to_string());
            assert_eq!(buf.slice(0, 2), ["a", "b"]);
            let a = buf.read(0);
            assert_eq!(a, "a");
            buf.drop_range(1, 2);
        }
    }

    #[test]
    fn relocate_preserves_order_and_capacity() {
        let mut buf = RawBuf::<i32>::try_allocate(3).unwrap();
        unsafe {
            for (slot, v) in [7, 8, 9].into_iter().enumerate() {
                buf.write(slot, v);
            }
            buf.try_relocate(3, 8).unwrap();
            assert_eq!(buf.capacity(), 8);
            assert_eq!(buf.slice(0, 3), [7, 8, 9]);
        }
    }

    #[test]
    fn failed_relocate_leaves_buffer_untouched() {
        let mut buf = RawBuf::<u64>::try_allocate(2).unwrap();
        unsafe {
            buf.write(0, 1);
            buf.write(1, 2);
            let before = buf.as_ptr();
            assert!(buf.try_relocate(2, usize::MAX).is_err());
            assert_eq!(buf.as_ptr(), before);
            assert_eq!(buf.capacity(), 2);
            assert_eq!(buf.slice(0, 2), [1, 2]);
        }
    }
}
