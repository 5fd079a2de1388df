//! see [`ElementKind`]

use core::fmt;

/// A closed tag for everything that can be stored in a typed container
///
/// A container instance is homogeneous, all of its elements share the kind
/// of its element type for its entire lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ElementKind {
    /// [`u8`]
    U8,
    /// [`u16`]
    U16,
    /// [`u32`]
    U32,
    /// [`u64`]
    U64,
    /// [`usize`]
    Usize,
    /// [`i32`]
    I32,
    /// [`i64`]
    I64,
    /// [`char`]
    Char,
    /// [`bool`]
    Bool,
    /// an owned string
    Text,
    /// a nested typed array
    Array,
}

impl ElementKind {
    /// The lowercase name of this kind
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::Usize => "usize",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Char => "char",
            Self::Bool => "bool",
            Self::Text => "text",
            Self::Array => "array",
        }
    }

    /// Returns true if elements of this kind own other elements
    pub const fn is_composite(self) -> bool {
        matches!(self, Self::Array)
    }

    /// The byte width of a value kind
    ///
    /// Returns None for kinds which own heap storage, since their width
    /// depends on their contents.
    pub const fn scalar_width(self) -> Option<usize> {
        use core::mem::size_of;

        Some(match self {
            Self::U8 => size_of::<u8>(),
            Self::U16 => size_of::<u16>(),
            Self::U32 => size_of::<u32>(),
            Self::U64 => size_of::<u64>(),
            Self::Usize => size_of::<usize>(),
            Self::I32 => size_of::<i32>(),
            Self::I64 => size_of::<i64>(),
            Self::Char => size_of::<char>(),
            Self::Bool => size_of::<bool>(),
            Self::Text | Self::Array => return None,
        })
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
