// src/map/mod.rs

//! Codecs for the five per-map entity lumps, plus the read-only map
//! view assembled from them. All records here are fixed-length,
//! little-endian, and round-trip byte-exactly through
//! [`BinaryRecord`](crate::record::BinaryRecord).

pub mod linedef;
pub mod sector;
pub mod sidedef;
pub mod thing;
pub mod vertex;
pub mod view;

pub use linedef::{BoomLineDef, BoomLineFlags, CommonLineDef, LineDef, LineFlags};
pub use linedef::{MAX_SIDEDEF, NO_SIDEDEF};
pub use sector::Sector;
pub use sidedef::SideDef;
pub use thing::{CommonThing, Thing, ThingFlags};
pub use vertex::Vertex;
pub use view::{BoomMap, DoomMap, MapData, MapView};
