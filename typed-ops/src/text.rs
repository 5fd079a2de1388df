use core::{cmp::Ordering, fmt, hash::Hasher};

use alloc::string::String;
use rustc_hash::FxHasher;

use crate::{ElementKind, ElementOps, HashOps, OrderedOps};

impl ElementOps for String {
    const KIND: ElementKind = ElementKind::Text;

    fn duplicate(&self) -> Self {
        self.as_str().into()
    }

    fn fmt_element(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.as_str())
    }
}

impl OrderedOps for String {
    fn compare(&self, other: &Self) -> Ordering {
        self.as_bytes().cmp(other.as_bytes())
    }
}

impl HashOps for String {
    fn digest(&self) -> u64 {
        let mut hasher = FxHasher::default();
        hasher.write(self.as_bytes());
        hasher.finish()
    }

    fn same_key(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{format, string::String};

    use crate::{ElementOps, Formatted, HashOps, OrderedOps};

    #[test]
    fn test_duplicate_is_independent() {
        let a = String::from("north");
        let mut b = a.duplicate();
        b.push_str("west");
        assert_eq!(a, "north");
        assert_eq!(b, "northwest");
        assert_ne!(a.as_ptr(), b.as_ptr());
    }

    #[test]
    fn test_digest_is_stable() {
        let a = String::from("key");
        let b = a.duplicate();
        assert_eq!(a.digest(), b.digest());
        assert!(a.same_key(&b));
        assert!(!a.same_key(&String::from("kez")));
    }

    #[test]
    fn test_order_and_format() {
        assert!(String::from("abc").compare(&String::from("abd")).is_lt());
        assert_eq!(format!("{}", Formatted(&String::from("hi"))), "\"hi\"");
    }
}
