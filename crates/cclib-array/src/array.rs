//! The growable array.
//!
//! [`GrowableArray`] is an owning, contiguous, order-preserving sequence
//! built directly on a [`RawBuf`]: slots `0..len` hold live values, slots
//! `len..capacity` are raw memory. Every mutating operation keeps that split
//! exact, which is the only invariant the `unsafe` blocks below rely on.

#![allow(unsafe_code)]

use std::borrow::{Borrow, BorrowMut};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::{Deref, DerefMut, Index, IndexMut};
use std::slice::{self, SliceIndex};

use crate::error::{infallible, ArrayError};
use crate::growth::grown_capacity;
use crate::iter::IntoIter;
use crate::raw::RawBuf;

/// An owned, contiguous, growable sequence of `T`.
///
/// # Capacity
///
/// - [`new`](Self::new) and [`Default`] do not allocate.
/// - [`with_capacity`](Self::with_capacity) allocates exactly the requested
///   number of slots; list constructors allocate exactly the list length.
/// - A push into a full array grows the capacity to `2 * capacity + 1`
///   (see [`growth`](crate::growth)).
/// - [`reserve`](Self::reserve) and [`shrink_to_fit`](Self::shrink_to_fit)
///   reallocate to an exact size.
/// - [`Clone`] preserves the source capacity, not just its length.
///
/// Any reallocation invalidates previously obtained element pointers.
///
/// # Failure
///
/// Every allocating operation has a `try_` form returning
/// [`ArrayError`]. The plain forms panic on capacity overflow and call
/// [`std::alloc::handle_alloc_error`] when the allocator fails. Operations
/// that relocate in one step ([`reserve`](Self::reserve),
/// [`shrink_to_fit`](Self::shrink_to_fit), `push_back`, `emplace_back`,
/// `clone_from`) leave the array exactly as it was before the call. The
/// `resize` family grows one element at a time: on failure it restores the
/// original length and contents but may keep capacity already grown.
pub struct GrowableArray<T> {
    buf: RawBuf<T>,
    len: usize,
}

impl<T> GrowableArray<T> {
    /// Create an empty array without allocating.
    pub const fn new() -> Self {
        Self {
            buf: RawBuf::new(),
            len: 0,
        }
    }

    /// Create an empty array with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        infallible(Self::try_with_capacity(capacity))
    }

    /// Fallible form of [`with_capacity`](Self::with_capacity).
    pub fn try_with_capacity(capacity: usize) -> Result<Self, ArrayError> {
        Ok(Self {
            buf: RawBuf::try_allocate(capacity)?,
            len: 0,
        })
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of slots currently allocated.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// `true` if there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Pointer to the first slot.
    ///
    /// Never null: an array without storage returns a dangling, aligned
    /// pointer that must not be dereferenced.
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Mutable pointer to the first slot. See [`as_ptr`](Self::as_ptr).
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// The live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `0..len` are live.
        unsafe { self.buf.slice(0, self.len) }
    }

    /// The live elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots `0..len` are live.
        unsafe { self.buf.slice_mut(0, self.len) }
    }

    /// Iterate over the live elements in order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Iterate mutably over the live elements in order.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Checked access to the element at `index`.
    pub fn at(&self, index: usize) -> Result<&T, ArrayError> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, len })
    }

    /// Checked mutable access to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, ArrayError> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ArrayError::IndexOutOfBounds { index, len })
    }

    /// Access the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    pub unsafe fn index_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees the slot is live.
        unsafe { &*self.buf.as_ptr().add(index) }
    }

    /// Mutable access to the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < self.len()`.
    pub unsafe fn index_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: the caller guarantees the slot is live.
        unsafe { &mut *self.buf.as_mut_ptr().add(index) }
    }

    /// First element, or `None` if empty.
    pub fn front(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Last element, or `None` if empty.
    pub fn back(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Mutable first element, or `None` if empty.
    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Mutable last element, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Append `value`, growing first if the array is full.
    ///
    /// Returns a reference to the new element. Amortised O(1).
    pub fn push_back(&mut self, value: T) -> &mut T {
        infallible(self.try_push_back(value))
    }

    /// Fallible form of [`push_back`](Self::push_back).
    ///
    /// On error `value` is dropped and the array is unchanged.
    pub fn try_push_back(&mut self, value: T) -> Result<&mut T, ArrayError> {
        self.try_emplace_back(|| value)
    }

    /// Append the value produced by `construct`, growing first if needed.
    ///
    /// Growth happens before `construct` runs, so the value is built only
    /// once room for it is guaranteed and is written straight into its slot.
    pub fn emplace_back<F>(&mut self, construct: F) -> &mut T
    where
        F: FnOnce() -> T,
    {
        infallible(self.try_emplace_back(construct))
    }

    /// Fallible form of [`emplace_back`](Self::emplace_back).
    pub fn try_emplace_back<F>(&mut self, construct: F) -> Result<&mut T, ArrayError>
    where
        F: FnOnce() -> T,
    {
        if self.len == self.buf.capacity() {
            self.grow()?;
        }
        let slot = self.len;
        let value = construct();
        // SAFETY: `slot == len < capacity` after growth, so it is in bounds
        // and vacant.
        let elem = unsafe { self.buf.write(slot, value) };
        self.len += 1;
        Ok(elem)
    }

    /// Remove and return the last element, or `None` if empty.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: the slot was live and is now past `len`, so it will not be
        // read or dropped again.
        Some(unsafe { self.buf.read(self.len) })
    }

    /// Drop trailing elements until at most `len` remain.
    ///
    /// Capacity is unchanged. No-op if `len >= self.len()`.
    pub fn truncate(&mut self, len: usize) {
        if len >= self.len {
            return;
        }
        let old_len = self.len;
        // Shorten first: a panicking destructor then leaks the tail instead
        // of dropping it twice.
        self.len = len;
        // SAFETY: `len..old_len` were live and are now outside the live range.
        unsafe { self.buf.drop_range(len, old_len) };
    }

    /// Drop every element. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Resize to `count` elements, filling new slots from `fill`.
    ///
    /// Growing appends one element at a time through the same path as
    /// [`emplace_back`](Self::emplace_back). If `fill` panics or an
    /// allocation fails, the appended elements are dropped again and the
    /// array is back at its original length. Capacity grown along the way is
    /// kept.
    pub fn resize_with<F>(&mut self, count: usize, fill: F)
    where
        F: FnMut() -> T,
    {
        infallible(self.try_resize_with(count, fill))
    }

    /// Fallible form of [`resize_with`](Self::resize_with).
    pub fn try_resize_with<F>(&mut self, count: usize, mut fill: F) -> Result<(), ArrayError>
    where
        F: FnMut() -> T,
    {
        if count <= self.len {
            self.truncate(count);
            return Ok(());
        }

        let mut rollback = Rollback::new(self);
        while rollback.array.len < count {
            rollback.array.try_emplace_back(&mut fill)?;
        }
        rollback.commit();
        Ok(())
    }

    /// Reallocate to exactly `new_capacity` slots if that is larger than the
    /// current capacity. Never shrinks.
    ///
    /// Unlike `Vec::reserve`, the argument is the total capacity, not an
    /// increment over the length.
    pub fn reserve(&mut self, new_capacity: usize) {
        infallible(self.try_reserve(new_capacity))
    }

    /// Fallible form of [`reserve`](Self::reserve).
    pub fn try_reserve(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity > self.buf.capacity() {
            self.relocate(new_capacity)?;
        }
        Ok(())
    }

    /// Reallocate to exactly `len` slots. An empty array releases its
    /// storage entirely.
    pub fn shrink_to_fit(&mut self) {
        infallible(self.try_shrink_to_fit())
    }

    /// Fallible form of [`shrink_to_fit`](Self::shrink_to_fit).
    pub fn try_shrink_to_fit(&mut self) -> Result<(), ArrayError> {
        if self.len < self.buf.capacity() {
            self.relocate(self.len)?;
        }
        Ok(())
    }

    /// Exchange contents with `other` in O(1).
    ///
    /// No element is moved, cloned or dropped, and nothing is allocated.
    pub fn swap_with(&mut self, other: &mut Self) {
        mem::swap(&mut self.buf, &mut other.buf);
        mem::swap(&mut self.len, &mut other.len);
    }

    /// Move the contents out, leaving `self` empty and without storage.
    pub fn take(&mut self) -> Self {
        mem::take(self)
    }

    fn grow(&mut self) -> Result<(), ArrayError> {
        let new_cap = grown_capacity(self.buf.capacity())?;
        self.relocate(new_cap)
    }

    fn relocate(&mut self, new_cap: usize) -> Result<(), ArrayError> {
        debug_assert!(new_cap >= self.len);
        // SAFETY: slots `0..len` are live and `len <= new_cap`.
        unsafe { self.buf.try_relocate(self.len, new_cap) }
    }
}

impl<T: Clone> GrowableArray<T> {
    /// Create an array holding `count` clones of `value`, with capacity
    /// exactly `count`.
    pub fn from_elem(value: T, count: usize) -> Self {
        infallible(Self::try_from_elem(value, count))
    }

    /// Fallible form of [`from_elem`](Self::from_elem).
    pub fn try_from_elem(value: T, count: usize) -> Result<Self, ArrayError> {
        let mut array = Self::try_with_capacity(count)?;
        for _ in 0..count {
            array.try_push_back(value.clone())?;
        }
        Ok(array)
    }

    /// Create an array holding clones of `items` in order, with capacity
    /// exactly `items.len()`.
    pub fn from_slice(items: &[T]) -> Self {
        infallible(Self::try_from_slice(items))
    }

    /// Fallible form of [`from_slice`](Self::from_slice).
    pub fn try_from_slice(items: &[T]) -> Result<Self, ArrayError> {
        let mut array = Self::try_with_capacity(items.len())?;
        for item in items {
            array.try_push_back(item.clone())?;
        }
        Ok(array)
    }

    /// Deep copy preserving capacity; [`Clone::clone`] that reports errors.
    ///
    /// If an element's `clone` panics, the partial copy is dropped and its
    /// storage released before the panic continues.
    pub fn try_clone(&self) -> Result<Self, ArrayError> {
        let mut copy = Self::try_with_capacity(self.capacity())?;
        for item in self.iter() {
            copy.try_push_back(item.clone())?;
        }
        Ok(copy)
    }

    /// Resize to `count` elements, cloning `fill` into each new slot.
    ///
    /// See [`resize_with`](Self::resize_with) for the growth and rollback
    /// behaviour.
    pub fn resize(&mut self, count: usize, fill: T) {
        infallible(self.try_resize(count, fill))
    }

    /// Fallible form of [`resize`](Self::resize).
    pub fn try_resize(&mut self, count: usize, fill: T) -> Result<(), ArrayError> {
        self.try_resize_with(count, || fill.clone())
    }

    /// Append clones of every element of `items`.
    pub fn extend_from_slice(&mut self, items: &[T]) {
        for item in items {
            self.push_back(item.clone());
        }
    }
}

impl<T: Default> GrowableArray<T> {
    /// Resize to `count` elements, filling new slots with `T::default()`.
    pub fn resize_default(&mut self, count: usize) {
        self.resize_with(count, T::default);
    }
}

/// Truncates the array back to its starting length unless committed.
struct Rollback<'a, T> {
    array: &'a mut GrowableArray<T>,
    len: usize,
}

impl<'a, T> Rollback<'a, T> {
    fn new(array: &'a mut GrowableArray<T>) -> Self {
        let len = array.len;
        Self { array, len }
    }

    fn commit(self) {
        mem::forget(self);
    }
}

impl<T> Drop for Rollback<'_, T> {
    fn drop(&mut self) {
        self.array.truncate(self.len);
    }
}

impl<T> Drop for GrowableArray<T> {
    fn drop(&mut self) {
        // SAFETY: slots `0..len` are live and the array is going away.
        // The buffer releases its memory when it drops right after.
        unsafe { self.buf.drop_range(0, self.len) };
    }
}

impl<T> Default for GrowableArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for GrowableArray<T> {
    fn clone(&self) -> Self {
        infallible(self.try_clone())
    }

    /// Copy-then-swap: the copy is complete before the old contents are
    /// dropped, so a failing clone leaves `self` untouched.
    fn clone_from(&mut self, source: &Self) {
        let mut fresh = source.clone();
        self.swap_with(&mut fresh);
    }
}

impl<T: fmt::Debug> fmt::Debug for GrowableArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Deref for GrowableArray<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> DerefMut for GrowableArray<T> {
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T, I: SliceIndex<[T]>> Index<I> for GrowableArray<T> {
    type Output = I::Output;

    fn index(&self, index: I) -> &Self::Output {
        Index::index(self.as_slice(), index)
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for GrowableArray<T> {
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        IndexMut::index_mut(self.as_mut_slice(), index)
    }
}

impl<T> AsRef<[T]> for GrowableArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for GrowableArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> Borrow<[T]> for GrowableArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> BorrowMut<[T]> for GrowableArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T: PartialEq> PartialEq for GrowableArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for GrowableArray<T> {}

impl<T: PartialEq> PartialEq<[T]> for GrowableArray<T> {
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for GrowableArray<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for GrowableArray<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for GrowableArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T, const N: usize> From<[T; N]> for GrowableArray<T> {
    fn from(items: [T; N]) -> Self {
        let mut array = Self::with_capacity(N);
        for item in items {
            array.push_back(item);
        }
        array
    }
}

impl<T: Clone> From<&[T]> for GrowableArray<T> {
    fn from(items: &[T]) -> Self {
        Self::from_slice(items)
    }
}

impl<T> From<GrowableArray<T>> for Vec<T> {
    fn from(array: GrowableArray<T>) -> Self {
        array.into_iter().collect()
    }
}

impl<T> FromIterator<T> for GrowableArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut array = Self::with_capacity(iter.size_hint().0);
        array.extend(iter);
        array
    }
}

impl<T> Extend<T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for GrowableArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        for item in iter {
            self.push_back(*item);
        }
    }
}

impl<T> IntoIterator for GrowableArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        // Leave `self` empty so its own drop has nothing to release.
        let len = mem::replace(&mut self.len, 0);
        let buf = mem::replace(&mut self.buf, RawBuf::new());
        IntoIter::new(buf, len)
    }
}

impl<'a, T> IntoIterator for &'a GrowableArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut GrowableArray<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
