//! Seeds and the rolling string hash.
//!
//! Every generator reduces its identifier to a 32-bit signed hash first.
//! The hash is the only thing downstream code ever sees of a seed, so two
//! seeds with equal hashes are indistinguishable.

use std::fmt;

use crate::rng::Mulberry32;

/// An identifier from which generated visuals are derived.
///
/// Text seeds are hashed with [`string_hash`]; integer seeds are truncated to
/// their low 32 bits and used directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Seed {
    /// A textual identifier (agent name, tool name, message id, ...).
    Text(String),
    /// A numeric identifier.
    Int(i64),
}

impl Seed {
    /// Coerce any displayable value to a text seed.
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        Seed::Text(value.to_string())
    }

    /// The 32-bit hash of this seed.
    pub fn hash(&self) -> i32 {
        match self {
            Seed::Text(text) => string_hash(text),
            // Truncation to the low 32 bits is the contract for integer seeds.
            Seed::Int(value) => *value as i32,
        }
    }

    /// A fresh RNG positioned at the start of this seed's stream.
    pub fn rng(&self) -> Mulberry32 {
        Mulberry32::new(rng_state(self.hash()))
    }

    /// Hash-driven index into a table of `len` entries.
    ///
    /// Does not touch any RNG state. Returns 0 for an empty table.
    pub fn index_for(&self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        self.hash().unsigned_abs() as usize % len
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Seed::Text(text) => f.write_str(text),
            Seed::Int(value) => write!(f, "{}", value),
        }
    }
}

impl From<&str> for Seed {
    fn from(value: &str) -> Self {
        Seed::Text(value.to_string())
    }
}

impl From<String> for Seed {
    fn from(value: String) -> Self {
        Seed::Text(value)
    }
}

impl From<&String> for Seed {
    fn from(value: &String) -> Self {
        Seed::Text(value.clone())
    }
}

impl From<&Seed> for Seed {
    fn from(value: &Seed) -> Self {
        value.clone()
    }
}

macro_rules! impl_int_seed {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Seed {
                fn from(value: $ty) -> Self {
                    Seed::Int(value as i64)
                }
            }
        )*
    };
}

impl_int_seed!(i8, i16, i32, i64, u8, u16, u32, u64, usize, isize);

/// Rolling `h = h * 31 + unit` hash over the UTF-16 code units of `text`.
///
/// Arithmetic wraps at 32 bits on every step, so the result is identical on
/// every platform.
pub fn string_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// RNG state for a hash: its magnitude, or 1 when that is zero.
///
/// Mulberry32 seeded with 0 is still usable, but the zero hash is shared by
/// the empty string and every seed that wraps to 0, so it gets a fixed
/// nonzero stand-in instead.
pub fn rng_state(hash: i32) -> u32 {
    match hash.unsigned_abs() {
        0 => 1,
        magnitude => magnitude,
    }
}
