// src/bsp/segment.rs

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};

use crate::errors::WadError;
use crate::record::BinaryRecord;
use crate::utils::range::{check_short, check_short_unsigned};

/// A BSP segment (SEGS lump) in the classic 12-byte format: one piece
/// of a linedef as split up by the node builder.
///
/// Layout (all little-endian):
///
/// ```text
/// offset  field         type
/// ------  ------------  ----
///  0-1    start_vertex  u16
///  2-3    end_vertex    u16
///  4-5    angle         i16  (binary angle, 0x4000 = 90 degrees)
///  6-7    linedef       u16  (index of the linedef this came from)
///  8-9    direction     i16  (0 = same direction as the linedef, 1 = opposite)
/// 10-11   offset        i16  (distance along the linedef to the start)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BspSegment {
    /// Index of the starting vertex (unsigned 16-bit in a WAD).
    pub start_vertex: i32,

    /// Index of the ending vertex (unsigned 16-bit in a WAD).
    pub end_vertex: i32,

    /// Binary angle measurement of the segment direction.
    pub angle: i32,

    /// Linedef this segment was split from (unsigned 16-bit index).
    pub linedef: i32,

    /// 0 when the segment runs with its linedef, 1 when against it.
    pub direction: i32,

    /// Distance along the linedef to the segment start.
    pub offset: i32,
}

impl BspSegment {
    /// Creates a segment between two vertices of the given linedef.
    pub fn new(start_vertex: i32, end_vertex: i32, linedef: i32) -> Self {
        BspSegment {
            start_vertex,
            end_vertex,
            linedef,
            ..BspSegment::default()
        }
    }

    /// Sets the starting vertex index (unsigned 16-bit range).
    pub fn set_start_vertex(&mut self, index: i32) -> Result<(), WadError> {
        check_short_unsigned("Segment Start Vertex", index)?;
        self.start_vertex = index;
        Ok(())
    }

    /// Sets the ending vertex index (unsigned 16-bit range).
    pub fn set_end_vertex(&mut self, index: i32) -> Result<(), WadError> {
        check_short_unsigned("Segment End Vertex", index)?;
        self.end_vertex = index;
        Ok(())
    }

    /// Sets the binary angle (signed 16-bit range).
    pub fn set_angle(&mut self, angle: i32) -> Result<(), WadError> {
        check_short("Segment Angle", angle)?;
        self.angle = angle;
        Ok(())
    }

    /// Sets the source linedef index (unsigned 16-bit range).
    pub fn set_linedef(&mut self, index: i32) -> Result<(), WadError> {
        check_short_unsigned("Segment Linedef", index)?;
        self.linedef = index;
        Ok(())
    }

    /// Sets the direction word (signed 16-bit range).
    pub fn set_direction(&mut self, direction: i32) -> Result<(), WadError> {
        check_short("Segment Direction", direction)?;
        self.direction = direction;
        Ok(())
    }

    /// Sets the offset along the linedef (signed 16-bit range).
    pub fn set_offset(&mut self, offset: i32) -> Result<(), WadError> {
        check_short("Segment Offset", offset)?;
        self.offset = offset;
        Ok(())
    }
}

impl BinaryRecord for BspSegment {
    const BYTE_LEN: usize = 12;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self, WadError> {
        Ok(BspSegment {
            start_vertex: reader.read_u16::<LE>()? as i32,
            end_vertex: reader.read_u16::<LE>()? as i32,
            angle: reader.read_i16::<LE>()? as i32,
            linedef: reader.read_u16::<LE>()? as i32,
            direction: reader.read_i16::<LE>()? as i32,
            offset: reader.read_i16::<LE>()? as i32,
        })
    }

    fn to_wad<W: Write>(&self, writer: &mut W) -> Result<(), WadError> {
        check_short_unsigned("Segment Start Vertex", self.start_vertex)?;
        check_short_unsigned("Segment End Vertex", self.end_vertex)?;
        check_short("Segment Angle", self.angle)?;
        check_short_unsigned("Segment Linedef", self.linedef)?;
        check_short("Segment Direction", self.direction)?;
        check_short("Segment Offset", self.offset)?;

        writer.write_u16::<LE>(self.start_vertex as u16)?;
        writer.write_u16::<LE>(self.end_vertex as u16)?;
        writer.write_i16::<LE>(self.angle as i16)?;
        writer.write_u16::<LE>(self.linedef as u16)?;
        writer.write_i16::<LE>(self.direction as i16)?;
        writer.write_i16::<LE>(self.offset as i16)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_roundtrip() {
        let mut seg = BspSegment::new(10, 11, 4);
        seg.angle = 0x4000; // facing north
        seg.direction = 1;
        seg.offset = 32;

        let bytes = seg.to_bytes().unwrap();
        assert_eq!(bytes.len(), BspSegment::BYTE_LEN);
        assert_eq!(BspSegment::from_bytes(&bytes).unwrap(), seg);
    }

    #[test]
    fn test_segment_negative_angle_survives() {
        let mut seg = BspSegment::new(0, 1, 0);
        seg.angle = -0x4000; // facing south, as node builders write it
        let back = BspSegment::from_bytes(&seg.to_bytes().unwrap()).unwrap();
        assert_eq!(back.angle, -0x4000);
    }

    #[test]
    fn test_segment_vertex_indices_unsigned() {
        let mut seg = BspSegment::default();
        assert!(seg.set_start_vertex(65535).is_ok());
        assert!(seg.set_start_vertex(-1).is_err());

        seg.end_vertex = -5;
        assert!(matches!(
            seg.to_bytes().unwrap_err(),
            WadError::OutOfRange { field: "Segment End Vertex", .. }
        ));
    }

    #[test]
    fn test_segment_lump_decode() {
        let mut bytes = Vec::new();
        for i in 0..3u16 {
            bytes.extend_from_slice(&i.to_le_bytes()); // start
            bytes.extend_from_slice(&(i + 1).to_le_bytes()); // end
            bytes.extend_from_slice(&0u16.to_le_bytes()); // angle
            bytes.extend_from_slice(&i.to_le_bytes()); // linedef
            bytes.extend_from_slice(&0u16.to_le_bytes()); // direction
            bytes.extend_from_slice(&0u16.to_le_bytes()); // offset
        }
        let segs = BspSegment::slice_from_bytes(&bytes).unwrap();
        assert_eq!(segs.len(), 3);
        assert_eq!(segs[2].start_vertex, 2);
        assert_eq!(segs[2].end_vertex, 3);
    }
}
