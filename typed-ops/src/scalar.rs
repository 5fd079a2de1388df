// integer kinds are their own digest, so they stay well spread for sequential keys
// and colliding keys are easy to construct in tests

value_ops!(u8 => U8, digest = |v| u64::from(v), fmt = "{}");
value_ops!(u16 => U16, digest = |v| u64::from(v), fmt = "{}");
value_ops!(u32 => U32, digest = |v| u64::from(v), fmt = "{}");
value_ops!(u64 => U64, digest = |v| v, fmt = "{}");
value_ops!(usize => Usize, digest = |v| v as u64, fmt = "{}");
value_ops!(i32 => I32, digest = |v| i64::from(v) as u64, fmt = "{}");
value_ops!(i64 => I64, digest = |v| v as u64, fmt = "{}");
value_ops!(char => Char, digest = |v| u64::from(u32::from(v)), fmt = "{:?}");
value_ops!(bool => Bool, digest = |v| u64::from(v), fmt = "{}");
