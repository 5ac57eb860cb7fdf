// src/map/view.rs

//! # Map Views
//!
//! A decoded map is five parallel tables: vertices, linedefs, sidedefs,
//! sectors and things. [`MapView`] is the read-only indexed window over
//! those tables that downstream passes (validators, renderers, stats
//! tools) consume without caring which format variant produced them.
//! [`MapData`] is the owned implementation, generic over the per-variant
//! entity types, with [`DoomMap`] and [`BoomMap`] as the two shipped
//! configurations.
//!
//! Cross-references between tables (a linedef's vertex indices, a
//! sidedef's sector index) are plain integers and are not validated
//! here; dangling references are a map-validity question, not a codec
//! one.

use log::debug;

use crate::errors::WadError;
use crate::map::linedef::{BoomLineDef, LineDef};
use crate::map::sector::Sector;
use crate::map::sidedef::SideDef;
use crate::map::thing::Thing;
use crate::map::vertex::Vertex;
use crate::record::BinaryRecord;

/// Read-only indexed access to the five entity tables of one map.
///
/// Every accessor returns `None` for an index at or past the table's
/// count; `index < count` implies `Some`. Implementations never expose
/// mutation through this trait.
pub trait MapView {
    type Vertex;
    type LineDef;
    type SideDef;
    type Sector;
    type Thing;

    /// Returns the vertex at `index`, or `None` if out of range.
    fn vertex(&self, index: usize) -> Option<&Self::Vertex>;

    /// Number of vertices in the map.
    fn vertex_count(&self) -> usize;

    /// Returns the linedef at `index`, or `None` if out of range.
    fn linedef(&self, index: usize) -> Option<&Self::LineDef>;

    /// Number of linedefs in the map.
    fn linedef_count(&self) -> usize;

    /// Returns the sidedef at `index`, or `None` if out of range.
    fn sidedef(&self, index: usize) -> Option<&Self::SideDef>;

    /// Number of sidedefs in the map.
    fn sidedef_count(&self) -> usize;

    /// Returns the sector at `index`, or `None` if out of range.
    fn sector(&self, index: usize) -> Option<&Self::Sector>;

    /// Number of sectors in the map.
    fn sector_count(&self) -> usize;

    /// Returns the thing at `index`, or `None` if out of range.
    fn thing(&self, index: usize) -> Option<&Self::Thing>;

    /// Number of things in the map.
    fn thing_count(&self) -> usize;
}

/// Owned entity tables for one decoded map.
///
/// The defaults give the baseline format; [`BoomMap`] swaps in the
/// extended linedef. Tables are public for bulk access and iteration,
/// with [`MapView`] as the bounds-checked read path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapData<V = Vertex, L = LineDef, S = SideDef, E = Sector, T = Thing> {
    pub vertices: Vec<V>,
    pub linedefs: Vec<L>,
    pub sidedefs: Vec<S>,
    pub sectors: Vec<E>,
    pub things: Vec<T>,
}

/// A map in the baseline format.
pub type DoomMap = MapData;

/// A map in the extended (Boom) format.
pub type BoomMap = MapData<Vertex, BoomLineDef>;

impl<V, L, S, E, T> Default for MapData<V, L, S, E, T> {
    fn default() -> Self {
        MapData {
            vertices: Vec::new(),
            linedefs: Vec::new(),
            sidedefs: Vec::new(),
            sectors: Vec::new(),
            things: Vec::new(),
        }
    }
}

impl<V, L, S, E, T> MapData<V, L, S, E, T> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V, L, S, E, T> MapData<V, L, S, E, T>
where
    V: BinaryRecord,
    L: BinaryRecord,
    S: BinaryRecord,
    E: BinaryRecord,
    T: BinaryRecord,
{
    /// Decodes the five raw map lumps into one map.
    ///
    /// The caller slices the lump bytes out of the archive; parameters
    /// follow the order the lumps appear in a WAD after the map marker:
    /// THINGS, LINEDEFS, SIDEDEFS, VERTEXES, SECTORS. Each lump's
    /// record count comes from its length. The first bad lump aborts
    /// the whole decode.
    pub fn from_lumps(
        things: &[u8],
        linedefs: &[u8],
        sidedefs: &[u8],
        vertexes: &[u8],
        sectors: &[u8],
    ) -> Result<Self, WadError> {
        let map = MapData {
            things: T::slice_from_bytes(things)?,
            linedefs: L::slice_from_bytes(linedefs)?,
            sidedefs: S::slice_from_bytes(sidedefs)?,
            vertices: V::slice_from_bytes(vertexes)?,
            sectors: E::slice_from_bytes(sectors)?,
        };
        debug!(
            "decoded map: {} things, {} linedefs, {} sidedefs, {} vertices, {} sectors",
            map.things.len(),
            map.linedefs.len(),
            map.sidedefs.len(),
            map.vertices.len(),
            map.sectors.len()
        );
        Ok(map)
    }
}

impl<V, L, S, E, T> MapView for MapData<V, L, S, E, T> {
    type Vertex = V;
    type LineDef = L;
    type SideDef = S;
    type Sector = E;
    type Thing = T;

    fn vertex(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn linedef(&self, index: usize) -> Option<&L> {
        self.linedefs.get(index)
    }

    fn linedef_count(&self) -> usize {
        self.linedefs.len()
    }

    fn sidedef(&self, index: usize) -> Option<&S> {
        self.sidedefs.get(index)
    }

    fn sidedef_count(&self) -> usize {
        self.sidedefs.len()
    }

    fn sector(&self, index: usize) -> Option<&E> {
        self.sectors.get(index)
    }

    fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    fn thing(&self, index: usize) -> Option<&T> {
        self.things.get(index)
    }

    fn thing_count(&self) -> usize {
        self.things.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::linedef::NO_SIDEDEF;

    fn lump_of<R: BinaryRecord>(records: &[R]) -> Vec<u8> {
        let mut out = Vec::new();
        R::write_many(&mut out, records).unwrap();
        out
    }

    /// One square sector: 4 vertices, 4 one-sided lines, a player start.
    fn square_map() -> DoomMap {
        let vertices = vec![
            Vertex::new(0, 0),
            Vertex::new(256, 0),
            Vertex::new(256, 256),
            Vertex::new(0, 256),
        ];
        let mut linedefs = Vec::new();
        for i in 0..4 {
            let mut line = LineDef::new(i, (i + 1) % 4);
            line.common.front_sidedef = i;
            linedefs.push(line);
        }
        let sidedefs = (0..4)
            .map(|_| SideDef::new(0, 0, "-", "-", "STARTAN3", 0))
            .collect();
        let sectors = vec![Sector::new(0, 128, "FLOOR4_8", "CEIL3_5", 160)];
        let mut start = Thing::new(128, 128, 90, 1);
        start.flags.easy = true;
        start.flags.medium = true;
        start.flags.hard = true;

        MapData {
            vertices,
            linedefs,
            sidedefs,
            sectors,
            things: vec![start],
        }
    }

    #[test]
    fn test_view_in_range_and_out_of_range() {
        let map = square_map();

        assert_eq!(map.vertex_count(), 4);
        assert_eq!(map.linedef_count(), 4);
        assert_eq!(map.sidedef_count(), 4);
        assert_eq!(map.sector_count(), 1);
        assert_eq!(map.thing_count(), 1);

        // First element of every non-empty table is reachable.
        assert_eq!(map.vertex(0), Some(&Vertex::new(0, 0)));
        assert!(map.linedef(0).is_some());
        assert!(map.sidedef(0).is_some());
        assert!(map.sector(0).is_some());
        assert!(map.thing(0).is_some());

        // Index == count falls off the end of every table.
        assert!(map.vertex(map.vertex_count()).is_none());
        assert!(map.linedef(map.linedef_count()).is_none());
        assert!(map.sidedef(map.sidedef_count()).is_none());
        assert!(map.sector(map.sector_count()).is_none());
        assert!(map.thing(map.thing_count()).is_none());
    }

    #[test]
    fn test_empty_map_has_no_entities() {
        let map = DoomMap::new();
        assert_eq!(map.vertex_count(), 0);
        assert!(map.vertex(0).is_none());
        assert!(map.thing(0).is_none());
    }

    #[test]
    fn test_from_lumps_roundtrip() {
        let _ = env_logger::builder().is_test(true).try_init();

        let map = square_map();
        let things = lump_of(&map.things);
        let linedefs = lump_of(&map.linedefs);
        let sidedefs = lump_of(&map.sidedefs);
        let vertexes = lump_of(&map.vertices);
        let sectors = lump_of(&map.sectors);

        let back = DoomMap::from_lumps(&things, &linedefs, &sidedefs, &vertexes, &sectors).unwrap();
        assert_eq!(back, map);
        assert_eq!(back.linedef(2).unwrap().common.back_sidedef, NO_SIDEDEF);
    }

    #[test]
    fn test_from_lumps_rejects_misaligned_lump() {
        let map = square_map();
        let things = lump_of(&map.things);
        let linedefs = lump_of(&map.linedefs);
        let sidedefs = lump_of(&map.sidedefs);
        let mut vertexes = lump_of(&map.vertices);
        let sectors = lump_of(&map.sectors);

        vertexes.pop();
        let err =
            DoomMap::from_lumps(&things, &linedefs, &sidedefs, &vertexes, &sectors).unwrap_err();
        assert!(matches!(err, WadError::BadLumpLength { record_len: 4, .. }));
    }

    #[test]
    fn test_boom_map_same_bytes_extended_flags() {
        let map = square_map();
        let mut linedefs = lump_of(&map.linedefs);
        // Set flag bit 9 on the first linedef.
        linedefs[5] |= 0x02;

        let things = lump_of(&map.things);
        let sidedefs = lump_of(&map.sidedefs);
        let vertexes = lump_of(&map.vertices);
        let sectors = lump_of(&map.sectors);

        let boom =
            BoomMap::from_lumps(&things, &linedefs, &sidedefs, &vertexes, &sectors).unwrap();
        assert!(boom.linedef(0).unwrap().flags.pass_thru);
        assert!(!boom.linedef(1).unwrap().flags.pass_thru);
        assert_eq!(boom.vertex_count(), map.vertex_count());
    }

    #[test]
    fn test_view_as_trait_object_bound() {
        // Downstream code can stay generic over the view.
        fn bounds<M: MapView>(view: &M) -> (usize, usize) {
            (view.vertex_count(), view.thing_count())
        }
        let map = square_map();
        assert_eq!(bounds(&map), (4, 1));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_map_serde_roundtrip() {
        let map = square_map();
        let json = serde_json::to_string(&map).unwrap();
        let back: DoomMap = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
