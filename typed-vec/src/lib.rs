#![no_std]
#![forbid(
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    unsafe_op_in_unsafe_fn,
    missing_docs,
    clippy::std_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::alloc_instead_of_core
)]

//! # typed-vec
//!
//! [`TypedVec`] is a growable array whose elements are copied in and torn down
//! through their [`ElementOps`], rather than through `Clone` and `Drop`
//! directly.
//!
//! ```
//! use typed_vec::TypedVec;
//!
//! let mut arr = TypedVec::<u64>::new();
//! for x in [5, 3, 1, 4, 2] {
//!     arr.push(&x);
//! }
//!
//! let sorted = arr.sorted();
//! assert_eq!(sorted.to_string(), "[1, 2, 3, 4, 5]");
//! assert_eq!(arr.to_string(), "[5, 3, 1, 4, 2]");
//!
//! assert_eq!(arr.try_remove(2), Some(1));
//! assert_eq!(arr.get(4), None);
//! ```
//!
//! Nested arrays are elements too, but they can't be compared, so sorting an
//! array of arrays is rejected at compile time
//!
//! ```compile_fail
//! use typed_vec::TypedVec;
//!
//! let mut nested = TypedVec::<TypedVec<u64>>::new();
//! nested.sort();
//! ```

extern crate alloc;

use core::{fmt, iter::FusedIterator, ops, slice};

use alloc::vec::Vec;

use typed_ops::{ElementKind, ElementOps, OrderedOps};

/// The capacity of a freshly created [`TypedVec`]
pub const INITIAL_CAPACITY: usize = 10;

/// A growable array of elements of a single kind
///
/// The array keeps at least twice as much room as it has elements: it doubles
/// its capacity whenever an append would take the length past half of the
/// capacity.
pub struct TypedVec<T: ElementOps> {
    data: Vec<T>,
    capacity: usize,
}

impl<T: ElementOps> TypedVec<T> {
    /// Create an empty [`TypedVec`] with [`INITIAL_CAPACITY`]
    pub fn new() -> Self {
        Self {
            data: Vec::with_capacity(INITIAL_CAPACITY),
            capacity: INITIAL_CAPACITY,
        }
    }

    /// The element kind stored in this array
    pub const fn kind(&self) -> ElementKind {
        T::KIND
    }

    /// The number of live elements
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if there are no live elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The number of elements this array has room for before it must grow
    ///
    /// This follows the growth policy, it starts at [`INITIAL_CAPACITY`] and
    /// only ever doubles
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Get the live elements as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get an iterator over the live elements
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.data.iter(),
        }
    }

    #[cold]
    #[inline(never)]
    fn grow(&mut self) {
        let capacity = self.capacity * 2;
        self.data.reserve_exact(capacity - self.data.len());
        self.capacity = capacity;
    }

    /// Append a duplicate of `value`, the caller keeps the original
    pub fn push(&mut self, value: &T) {
        self.push_owned(value.duplicate())
    }

    /// Append `value`, moving it into the array without duplicating it
    pub fn push_owned(&mut self, value: T) {
        if self.data.len() + 1 > self.capacity / 2 {
            self.grow();
        }

        self.data.push(value);
    }

    /// Get a reference to the element at `index`
    ///
    /// Returns None if `index` is not less than the length
    pub fn get(&self, index: usize) -> Option<&T> {
        self.data.get(index)
    }

    /// Get a mutable reference to the element at `index`
    ///
    /// Returns None if `index` is not less than the length
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.data.get_mut(index)
    }

    /// Remove the element at `index`, shifting every later element down by one
    ///
    /// Returns None, and leaves the array untouched, if `index` is out of bounds.
    /// The removed element is handed back to the caller.
    pub fn try_remove(&mut self, index: usize) -> Option<T> {
        if index < self.data.len() {
            Some(self.data.remove(index))
        } else {
            None
        }
    }

    /// Remove the element at `index`, shifting every later element down by one
    ///
    /// # Panics
    ///
    /// if `index` is out of bounds
    pub fn remove(&mut self, index: usize) -> T {
        let len = self.data.len();
        match self.try_remove(index) {
            Some(value) => value,
            None => IndexError::NotInBounds { index, len }.handle(),
        }
    }

    /// Sort the live elements in place with the kind's comparator
    ///
    /// The sort is not stable.
    pub fn sort(&mut self)
    where
        T: OrderedOps,
    {
        self.data.sort_unstable_by(T::compare);
    }

    /// Get a sorted duplicate of this array, leaving this array untouched
    pub fn sorted(&self) -> Self
    where
        T: OrderedOps,
    {
        let mut sorted = self.duplicate();
        sorted.sort();
        sorted
    }

    /// Create a new array with the same capacity and a duplicate of every
    /// live element
    pub fn duplicate(&self) -> Self {
        let mut data = Vec::with_capacity(self.capacity);
        data.extend(self.data.iter().map(T::duplicate));
        Self {
            data,
            capacity: self.capacity,
        }
    }

    /// Release every live element and the backing storage
    ///
    /// This is the same as dropping the array.
    pub fn destroy(self) {}
}

impl<T: ElementOps> Drop for TypedVec<T> {
    fn drop(&mut self) {
        self.data.drain(..).for_each(T::release);
    }
}

impl<T: ElementOps> Default for TypedVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ElementOps> Clone for TypedVec<T> {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl<T: ElementOps> ElementOps for TypedVec<T> {
    const KIND: ElementKind = ElementKind::Array;

    fn duplicate(&self) -> Self {
        TypedVec::duplicate(self)
    }

    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<T: ElementOps> fmt::Display for TypedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.data.iter().enumerate() {
            if i != 0 {
                f.write_str(", ")?;
            }
            value.fmt_element(f)?;
        }
        f.write_str("]")
    }
}

impl<T: ElementOps> fmt::Debug for TypedVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.data.iter().map(typed_ops::Formatted))
            .finish()
    }
}

impl<T: ElementOps + PartialEq> PartialEq for TypedVec<T> {
    fn eq(&self, other: &Self) -> bool {
        self.data == other.data
    }
}

impl<T: ElementOps + Eq> Eq for TypedVec<T> {}

impl<T: ElementOps> ops::Deref for TypedVec<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl<T: ElementOps> ops::Index<usize> for TypedVec<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        let len = self.data.len();
        match self.data.get(index) {
            Some(value) => value,
            None => IndexError::NotInBounds { index, len }.handle(),
        }
    }
}

impl<T: ElementOps> ops::IndexMut<usize> for TypedVec<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        let len = self.data.len();
        match self.data.get_mut(index) {
            Some(value) => value,
            None => IndexError::NotInBounds { index, len }.handle(),
        }
    }
}

impl<T: ElementOps> Extend<T> for TypedVec<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push_owned(value))
    }
}

impl<'a, T: ElementOps + 'a> Extend<&'a T> for TypedVec<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|value| self.push(value))
    }
}

impl<T: ElementOps> FromIterator<T> for TypedVec<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut arr = Self::new();
        arr.extend(iter);
        arr
    }
}

impl<'a, T: ElementOps> IntoIterator for &'a TypedVec<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// An iterator over the live elements of a [`TypedVec`], created by [`TypedVec::iter`]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// The ways an index into a [`TypedVec`] can be invalid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexError {
    /// If the index is not in bounds of the [`TypedVec`]
    NotInBounds {
        /// The index that was accessed
        index: usize,
        /// The length of the [`TypedVec`]
        len: usize,
    },
}

impl IndexError {
    #[cold]
    #[inline(never)]
    fn handle(self) -> ! {
        match self {
            IndexError::NotInBounds { index, len } => {
                panic!("Index out of bounds (index >= length), index: {index}, length: {len}")
            }
        }
    }
}
