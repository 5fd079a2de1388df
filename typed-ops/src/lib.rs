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
#![deny(clippy::missing_const_for_fn)]

//! # typed-ops
//!
//! The capability set shared by the typed containers. Every element kind that
//! can live inside a container supplies the same handful of operations:
//!
//! * [`ElementOps`]: duplicate, release, and format. Every storable kind has these.
//! * [`OrderedOps`]: compare, needed to sort.
//! * [`HashOps`]: a 64-bit digest and key equality, needed to be a map key.
//!
//! Kinds which don't support an operation simply don't implement the trait, so
//! asking a container to hash or sort a composite kind is rejected at compile
//! time instead of at runtime.
//!
//! ```
//! use typed_ops::{ElementKind, ElementOps, HashOps, OrderedOps};
//!
//! assert_eq!(u64::KIND, ElementKind::U64);
//! assert_eq!(21u64.digest() % 16, 5u64.digest() % 16);
//! assert!(3u64.compare(&4).is_lt());
//! assert_eq!(7u64.duplicate(), 7);
//! ```

#[doc(hidden)]
#[cfg(feature = "alloc")]
pub extern crate alloc;

use core::{cmp::Ordering, fmt};

#[macro_use]
mod macros;

pub mod kind;
mod scalar;
#[cfg(feature = "alloc")]
mod text;

pub use kind::ElementKind;

/// The operations every element stored in a typed container supports
///
/// Containers never copy elements behind the caller's back with `Clone`, they
/// always go through [`ElementOps::duplicate`], and they hand every element
/// they own to [`ElementOps::release`] when it leaves the container for good.
pub trait ElementOps: Sized {
    /// The kind tag for this element type
    const KIND: ElementKind;

    /// Create an owned copy of `self`
    ///
    /// The copy must not share ownership of anything with `self`, releasing
    /// either one must leave the other intact.
    fn duplicate(&self) -> Self;

    /// Tear down this element
    ///
    /// Value kinds have nothing to do here, composite kinds release each
    /// element they contain.
    #[inline]
    fn release(self) {
        drop(self)
    }

    /// Write the display form of this element
    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// Element kinds which have a total order
pub trait OrderedOps: ElementOps {
    /// Compare two elements of this kind
    fn compare(&self, other: &Self) -> Ordering;
}

/// Element kinds which may be used as map keys
pub trait HashOps: ElementOps {
    /// The 64-bit digest of this key
    ///
    /// Integer kinds use their own value, so keys which are equal modulo the
    /// table capacity land on the same ideal slot.
    fn digest(&self) -> u64;

    /// Raw equality of two keys
    ///
    /// This is identity of the stored bits, not a deep comparison.
    fn same_key(&self, other: &Self) -> bool;
}

/// Adapts any [`ElementOps`] into a [`Display`](fmt::Display) value
///
/// ```
/// use typed_ops::Formatted;
///
/// assert_eq!(format!("{}", Formatted(&12u64)), "12");
/// assert_eq!(format!("{}", Formatted(&'x')), "'x'");
/// ```
pub struct Formatted<'a, T>(pub &'a T);

impl<T: ElementOps> fmt::Display for Formatted<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_element(f)
    }
}

impl<T: ElementOps> fmt::Debug for Formatted<'_, T> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt_element(f)
    }
}
