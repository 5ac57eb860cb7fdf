// src/map/linedef.rs

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};

use crate::errors::WadError;
use crate::record::BinaryRecord;
use crate::utils::bits::flag_set;
use crate::utils::range::{check_range, check_short_unsigned};

/// Sidedef reference meaning "no sidedef on this side".
///
/// Stored on disk as `0xFFFF`; in memory the field is `-1` so the
/// sentinel and real indices share one signed domain.
pub const NO_SIDEDEF: i32 = -1;

/// Largest sidedef index a linedef can reference (the on-disk field is
/// 16 bits with `0xFFFF` reserved for [NO_SIDEDEF]).
pub const MAX_SIDEDEF: i32 = 32767;

/// Fields shared by both linedef format variants. Only the
/// interpretation of the 16-bit flag word differs between them, so the
/// flag struct lives on the concrete record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommonLineDef {
    /// Index of the starting vertex (unsigned 16-bit in a WAD).
    pub start_vertex: i32,

    /// Index of the ending vertex (unsigned 16-bit in a WAD).
    pub end_vertex: i32,

    /// Action special triggered by this line (unsigned 16-bit).
    pub special: i32,

    /// Tag naming the sectors the action applies to (unsigned 16-bit).
    pub tag: i32,

    /// Front (right) sidedef index, or [NO_SIDEDEF].
    pub front_sidedef: i32,

    /// Back (left) sidedef index, or [NO_SIDEDEF].
    pub back_sidedef: i32,
}

impl Default for CommonLineDef {
    fn default() -> Self {
        CommonLineDef {
            start_vertex: 0,
            end_vertex: 0,
            special: 0,
            tag: 0,
            front_sidedef: NO_SIDEDEF,
            back_sidedef: NO_SIDEDEF,
        }
    }
}

impl CommonLineDef {
    /// Sets the starting vertex index (unsigned 16-bit range).
    pub fn set_start_vertex(&mut self, index: i32) -> Result<(), WadError> {
        check_short_unsigned("Linedef Start Vertex", index)?;
        self.start_vertex = index;
        Ok(())
    }

    /// Sets the ending vertex index (unsigned 16-bit range).
    pub fn set_end_vertex(&mut self, index: i32) -> Result<(), WadError> {
        check_short_unsigned("Linedef End Vertex", index)?;
        self.end_vertex = index;
        Ok(())
    }

    /// Sets the action special (unsigned 16-bit range).
    pub fn set_special(&mut self, special: i32) -> Result<(), WadError> {
        check_short_unsigned("Linedef Special", special)?;
        self.special = special;
        Ok(())
    }

    /// Sets the action tag (unsigned 16-bit range).
    pub fn set_tag(&mut self, tag: i32) -> Result<(), WadError> {
        check_short_unsigned("Linedef Tag", tag)?;
        self.tag = tag;
        Ok(())
    }

    /// Sets the front sidedef reference: a table index or [NO_SIDEDEF].
    pub fn set_front_sidedef(&mut self, index: i32) -> Result<(), WadError> {
        check_range("Linedef Front Sidedef", NO_SIDEDEF, MAX_SIDEDEF, index)?;
        self.front_sidedef = index;
        Ok(())
    }

    /// Sets the back sidedef reference: a table index or [NO_SIDEDEF].
    pub fn set_back_sidedef(&mut self, index: i32) -> Result<(), WadError> {
        check_range("Linedef Back Sidedef", NO_SIDEDEF, MAX_SIDEDEF, index)?;
        self.back_sidedef = index;
        Ok(())
    }

    fn check(&self) -> Result<(), WadError> {
        check_short_unsigned("Linedef Start Vertex", self.start_vertex)?;
        check_short_unsigned("Linedef End Vertex", self.end_vertex)?;
        check_short_unsigned("Linedef Special", self.special)?;
        check_short_unsigned("Linedef Tag", self.tag)?;
        check_range("Linedef Front Sidedef", NO_SIDEDEF, MAX_SIDEDEF, self.front_sidedef)?;
        check_range("Linedef Back Sidedef", NO_SIDEDEF, MAX_SIDEDEF, self.back_sidedef)?;
        Ok(())
    }
}

flag_set! {
    /// Flag layout of the baseline linedef record, in bit order.
    ///
    /// Bit 9 is undefined in this variant: it is ignored on decode and
    /// written as zero.
    pub struct LineFlags {
        /// Blocks players and monsters.
        impassable,
        /// Blocks monsters only.
        monster_blocking,
        /// Has sectors on both sides.
        two_sided,
        /// Upper texture drawn from the top down.
        upper_unpegged,
        /// Lower texture drawn from the bottom up.
        lower_unpegged,
        /// Shown as one-sided on the automap.
        secret,
        /// Stops sound propagation.
        sound_blocking,
        /// Never drawn on the automap.
        not_drawn,
        /// Pre-drawn on the automap.
        mapped,
    }
}

flag_set! {
    /// Flag layout of the extended (Boom) linedef record, in bit order.
    ///
    /// Bits 0-8 match [LineFlags]; bit 9 is the pass-through flag.
    pub struct BoomLineFlags {
        /// Blocks players and monsters.
        impassable,
        /// Blocks monsters only.
        monster_blocking,
        /// Has sectors on both sides.
        two_sided,
        /// Upper texture drawn from the top down.
        upper_unpegged,
        /// Lower texture drawn from the bottom up.
        lower_unpegged,
        /// Shown as one-sided on the automap.
        secret,
        /// Stops sound propagation.
        sound_blocking,
        /// Never drawn on the automap.
        not_drawn,
        /// Pre-drawn on the automap.
        mapped,
        /// A use action keeps looking for further lines behind this one.
        pass_thru,
    }
}

/// A linedef in the baseline 14-byte format.
///
/// Layout (all little-endian):
///
/// ```text
/// offset  field          type
/// ------  -------------  ----
///  0-1    start_vertex   u16
///  2-3    end_vertex     u16
///  4-5    flags          u16  (bits 0-8, see [LineFlags])
///  6-7    special        u16
///  8-9    tag            u16
/// 10-11   front_sidedef  i16  (0xFFFF = none)
/// 12-13   back_sidedef   i16  (0xFFFF = none)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LineDef {
    /// Vertex, special, tag and sidedef references.
    pub common: CommonLineDef,

    /// Baseline flag set (9 defined bits).
    pub flags: LineFlags,
}

impl LineDef {
    /// Creates a one-sided impassable line between two vertices, with
    /// no sidedefs attached yet.
    pub fn new(start_vertex: i32, end_vertex: i32) -> Self {
        LineDef {
            common: CommonLineDef {
                start_vertex,
                end_vertex,
                ..CommonLineDef::default()
            },
            flags: LineFlags {
                impassable: true,
                ..LineFlags::default()
            },
        }
    }
}

impl BinaryRecord for LineDef {
    const BYTE_LEN: usize = 14;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self, WadError> {
        let start_vertex = reader.read_u16::<LE>()? as i32;
        let end_vertex = reader.read_u16::<LE>()? as i32;
        let flags = LineFlags::unpack(reader.read_u16::<LE>()?);
        let special = reader.read_u16::<LE>()? as i32;
        let tag = reader.read_u16::<LE>()? as i32;
        let front_sidedef = reader.read_i16::<LE>()? as i32;
        let back_sidedef = reader.read_i16::<LE>()? as i32;

        Ok(LineDef {
            common: CommonLineDef {
                start_vertex,
                end_vertex,
                special,
                tag,
                front_sidedef,
                back_sidedef,
            },
            flags,
        })
    }

    fn to_wad<W: Write>(&self, writer: &mut W) -> Result<(), WadError> {
        self.common.check()?;

        writer.write_u16::<LE>(self.common.start_vertex as u16)?;
        writer.write_u16::<LE>(self.common.end_vertex as u16)?;
        writer.write_u16::<LE>(self.flags.pack())?;
        writer.write_u16::<LE>(self.common.special as u16)?;
        writer.write_u16::<LE>(self.common.tag as u16)?;
        writer.write_i16::<LE>(self.common.front_sidedef as i16)?;
        writer.write_i16::<LE>(self.common.back_sidedef as i16)?;
        Ok(())
    }
}

/// A linedef in the extended (Boom) 14-byte format.
///
/// Byte layout is identical to [LineDef]; the only difference is that
/// flag bit 9 is defined as pass-through instead of ignored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoomLineDef {
    /// Vertex, special, tag and sidedef references.
    pub common: CommonLineDef,

    /// Extended flag set (10 defined bits).
    pub flags: BoomLineFlags,
}

impl BoomLineDef {
    /// Creates a one-sided impassable line between two vertices.
    pub fn new(start_vertex: i32, end_vertex: i32) -> Self {
        BoomLineDef {
            common: CommonLineDef {
                start_vertex,
                end_vertex,
                ..CommonLineDef::default()
            },
            flags: BoomLineFlags {
                impassable: true,
                ..BoomLineFlags::default()
            },
        }
    }
}

impl BinaryRecord for BoomLineDef {
    const BYTE_LEN: usize = 14;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self, WadError> {
        let start_vertex = reader.read_u16::<LE>()? as i32;
        let end_vertex = reader.read_u16::<LE>()? as i32;
        let flags = BoomLineFlags::unpack(reader.read_u16::<LE>()?);
        let special = reader.read_u16::<LE>()? as i32;
        let tag = reader.read_u16::<LE>()? as i32;
        let front_sidedef = reader.read_i16::<LE>()? as i32;
        let back_sidedef = reader.read_i16::<LE>()? as i32;

        Ok(BoomLineDef {
            common: CommonLineDef {
                start_vertex,
                end_vertex,
                special,
                tag,
                front_sidedef,
                back_sidedef,
            },
            flags,
        })
    }

    fn to_wad<W: Write>(&self, writer: &mut W) -> Result<(), WadError> {
        self.common.check()?;

        writer.write_u16::<LE>(self.common.start_vertex as u16)?;
        writer.write_u16::<LE>(self.common.end_vertex as u16)?;
        writer.write_u16::<LE>(self.flags.pack())?;
        writer.write_u16::<LE>(self.common.special as u16)?;
        writer.write_u16::<LE>(self.common.tag as u16)?;
        writer.write_i16::<LE>(self.common.front_sidedef as i16)?;
        writer.write_i16::<LE>(self.common.back_sidedef as i16)?;
        Ok(())
    }
}

impl From<LineDef> for BoomLineDef {
    /// Widens a baseline linedef; pass-through starts cleared.
    fn from(line: LineDef) -> Self {
        let word = line.flags.pack();
        BoomLineDef {
            common: line.common,
            flags: BoomLineFlags::unpack(word),
        }
    }
}
