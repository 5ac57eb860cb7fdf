// src/lib.rs

//! Byte-exact codecs for the binary structures of classic Doom-engine
//! WADs: the five per-map entity lumps, the BSP lumps, and the two
//! paletted graphic formats.
//!
//! The archive itself (directory walking, lump slicing) is left to the
//! caller; this crate turns lump bytes into typed records and back.
//! Every record implements [`BinaryRecord`]: fixed length, little-endian,
//! range-checked on encode. Values that fit a record's in-memory fields
//! but not its wire format are rejected with a [`WadError`] instead of
//! being clamped, so whatever is written always decodes back to what
//! was stored.
//!
//! ```
//! use wadbin::{BinaryRecord, map::Thing};
//!
//! let bytes = [100, 0, 206, 255, 90, 0, 1, 0, 3, 0];
//! let thing = Thing::from_bytes(&bytes)?;
//! assert_eq!((thing.common.x, thing.common.y), (100, -50));
//! assert!(thing.flags.easy && thing.flags.medium);
//! assert_eq!(thing.to_bytes()?, bytes);
//! # Ok::<(), wadbin::WadError>(())
//! ```

pub mod bsp;
pub mod errors;
pub mod gfx;
pub mod map;
pub mod record;
pub mod utils;

pub use errors::WadError;
pub use record::BinaryRecord;
