// src/utils/bits.rs

//! # Bit-Flag Packing
//!
//! Conversion between ordered boolean lists and the 16-bit flag words the
//! map formats store. The `flag_set!` macro builds a whole flag struct
//! from a single ordered field list, so a format's bit assignments live in
//! exactly one table and the pack and unpack directions cannot drift apart.

/// Packs an ordered slice of booleans into a flag word.
///
/// Bit `i` of the result is set if and only if `bits[i]` is true. Slices
/// shorter than 16 entries leave the remaining high bits zero.
///
/// # Examples
///
/// ```
/// use wadbin::utils::bits::pack_bools;
///
/// assert_eq!(pack_bools(&[true, false, true]), 0b101);
/// assert_eq!(pack_bools(&[]), 0);
/// ```
pub fn pack_bools(bits: &[bool]) -> u16 {
    debug_assert!(bits.len() <= 16);
    let mut word = 0u16;
    for (i, &bit) in bits.iter().enumerate() {
        if bit {
            word |= 1 << i;
        }
    }
    word
}

/// True if bit `bit` (0 = least significant) of `word` is set.
pub fn bit_is_set(word: u16, bit: u32) -> bool {
    word & (1u16 << bit) != 0
}

/// Declares a flag struct from one ordered field list.
///
/// The first field is bit 0, the second bit 1, and so on. The generated
/// struct carries one `pub bool` per field plus `pack` and `unpack`
/// methods derived from the same list. Bits beyond the declared fields
/// are ignored by `unpack` and written as zero by `pack`.
macro_rules! flag_set {
    (
        $(#[$outer:meta])*
        pub struct $name:ident {
            $( $(#[$fmeta:meta])* $field:ident ),+ $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $( $(#[$fmeta])* pub $field: bool, )+
        }

        impl $name {
            /// Packs the flags into a flag word, first field at bit 0.
            pub fn pack(&self) -> u16 {
                $crate::utils::bits::pack_bools(&[ $( self.$field ),+ ])
            }

            /// Unpacks a flag word; bits beyond the declared fields are
            /// ignored.
            pub fn unpack(word: u16) -> Self {
                let mut bit = 0u32;
                $(
                    let $field = $crate::utils::bits::bit_is_set(word, bit);
                    bit += 1;
                )+
                let _ = bit;
                Self { $( $field ),+ }
            }
        }
    };
}
pub(crate) use flag_set;
