/// Implement the full capability set for a `Copy` value kind
///
/// `$digest` widens the value to the 64-bit digest, `$fmt` is the format
/// string used to display it.
macro_rules! value_ops {
    ($ty:ty => $kind:ident, digest = |$v:ident| $digest:expr, fmt = $fmt:literal) => {
        impl $crate::ElementOps for $ty {
            const KIND: $crate::ElementKind = $crate::ElementKind::$kind;

            #[inline]
            fn duplicate(&self) -> Self {
                *self
            }

            #[inline]
            fn fmt_element(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, $fmt, self)
            }
        }

        impl $crate::OrderedOps for $ty {
            #[inline]
            fn compare(&self, other: &Self) -> core::cmp::Ordering {
                Ord::cmp(self, other)
            }
        }

        impl $crate::HashOps for $ty {
            #[inline]
            fn digest(&self) -> u64 {
                let $v = *self;
                $digest
            }

            #[inline]
            fn same_key(&self, other: &Self) -> bool {
                *self == *other
            }
        }
    };
}
