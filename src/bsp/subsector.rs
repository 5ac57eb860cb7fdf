// src/bsp/subsector.rs

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};

use crate::errors::WadError;
use crate::record::BinaryRecord;
use crate::utils::range::check_short_unsigned;

/// A BSP subsector (SSECTORS lump) in the classic 4-byte format: a
/// convex run of consecutive segments, referenced by the leaf child
/// words of [`BspNode`](crate::bsp::BspNode).
///
/// Layout (all little-endian):
///
/// ```text
/// offset  field      type
/// ------  ---------  ----
///  0-1    seg_count  u16
///  2-3    first_seg  u16  (index into the SEGS table)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BspSubsector {
    /// Number of segments in this subsector (unsigned 16-bit).
    pub seg_count: i32,

    /// Index of the first segment; the rest follow consecutively
    /// (unsigned 16-bit).
    pub first_seg: i32,
}

impl BspSubsector {
    /// Creates a subsector spanning `seg_count` segments starting at
    /// `first_seg`.
    pub fn new(seg_count: i32, first_seg: i32) -> Self {
        BspSubsector { seg_count, first_seg }
    }

    /// Sets the segment count (unsigned 16-bit range).
    pub fn set_seg_count(&mut self, count: i32) -> Result<(), WadError> {
        check_short_unsigned("Subsector Segment Count", count)?;
        self.seg_count = count;
        Ok(())
    }

    /// Sets the first segment index (unsigned 16-bit range).
    pub fn set_first_seg(&mut self, index: i32) -> Result<(), WadError> {
        check_short_unsigned("Subsector First Segment", index)?;
        self.first_seg = index;
        Ok(())
    }
}

impl BinaryRecord for BspSubsector {
    const BYTE_LEN: usize = 4;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self, WadError> {
        Ok(BspSubsector {
            seg_count: reader.read_u16::<LE>()? as i32,
            first_seg: reader.read_u16::<LE>()? as i32,
        })
    }

    fn to_wad<W: Write>(&self, writer: &mut W) -> Result<(), WadError> {
        check_short_unsigned("Subsector Segment Count", self.seg_count)?;
        check_short_unsigned("Subsector First Segment", self.first_seg)?;

        writer.write_u16::<LE>(self.seg_count as u16)?;
        writer.write_u16::<LE>(self.first_seg as u16)?;
        Ok(())
    }
}
