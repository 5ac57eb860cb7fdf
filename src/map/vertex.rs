// src/map/vertex.rs

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};

use crate::errors::WadError;
use crate::record::BinaryRecord;
use crate::utils::range::check_short;

/// A map vertex in the classic 4-byte format.
///
/// Layout (all little-endian):
///
/// ```text
/// offset  field  type
/// ------  -----  ----
///  0-1    x      i16
///  2-3    y      i16
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    /// X coordinate (signed 16-bit in a WAD).
    pub x: i32,

    /// Y coordinate (signed 16-bit in a WAD).
    pub y: i32,
}

impl Vertex {
    /// Creates a vertex at the given coordinates.
    ///
    /// Values are not checked here; out-of-range coordinates are caught
    /// by the checked setters or at encode time.
    pub fn new(x: i32, y: i32) -> Self {
        Vertex { x, y }
    }

    /// Sets the X coordinate, rejecting values outside the signed
    /// 16-bit range.
    pub fn set_x(&mut self, x: i32) -> Result<(), WadError> {
        check_short("Vertex X", x)?;
        self.x = x;
        Ok(())
    }

    /// Sets the Y coordinate, rejecting values outside the signed
    /// 16-bit range.
    pub fn set_y(&mut self, y: i32) -> Result<(), WadError> {
        check_short("Vertex Y", y)?;
        self.y = y;
        Ok(())
    }
}

impl BinaryRecord for Vertex {
    const BYTE_LEN: usize = 4;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self, WadError> {
        Ok(Vertex {
            x: reader.read_i16::<LE>()? as i32,
            y: reader.read_i16::<LE>()? as i32,
        })
    }

    fn to_wad<W: Write>(&self, writer: &mut W) -> Result<(), WadError> {
        check_short("Vertex X", self.x)?;
        check_short("Vertex Y", self.y)?;
        writer.write_i16::<LE>(self.x as i16)?;
        writer.write_i16::<LE>(self.y as i16)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_vertex_decode() {
        // x = 0x0040 = 64, y = 0xFF38 = -200
        let bytes = [0x40, 0x00, 0x38, 0xFF];
        let v = Vertex::from_bytes(&bytes).unwrap();
        assert_eq!(v, Vertex::new(64, -200));
    }

    #[test]
    fn test_vertex_roundtrip() {
        let v = Vertex::new(-32768, 32767);
        let bytes = v.to_bytes().unwrap();
        assert_eq!(bytes.len(), Vertex::BYTE_LEN);
        assert_eq!(Vertex::from_bytes(&bytes).unwrap(), v);
    }

    #[test]
    fn test_vertex_encode_rejects_wide_values() {
        // Fields are wider in memory than on disk; encoding checks them.
        let v = Vertex::new(40000, 0);
        assert!(matches!(
            v.to_bytes().unwrap_err(),
            WadError::OutOfRange { field: "Vertex X", .. }
        ));
    }

    #[test]
    fn test_vertex_setters_validate_new_value() {
        let mut v = Vertex::default();
        assert!(v.set_x(-32769).is_err());
        assert_eq!(v.x, 0);
        assert!(v.set_x(-32768).is_ok());
        assert_eq!(v.x, -32768);
        assert!(v.set_y(32768).is_err());
        assert_eq!(v.y, 0);
    }

    #[test]
    fn test_vertex_from_bytes_short_buffer() {
        let err = Vertex::from_bytes(&[0x01, 0x02, 0x03]).unwrap_err();
        assert!(matches!(err, WadError::ShortBuffer { need: 4, have: 3 }));
    }

    #[test]
    fn test_vertex_from_wad_eof_is_io_error() {
        let mut cur = Cursor::new(vec![0x01, 0x02]);
        let err = Vertex::from_wad(&mut cur).unwrap_err();
        assert!(matches!(err, WadError::Io(_)));
    }

    #[test]
    fn test_vertex_batch_reads_in_file_order() {
        let mut bytes = Vec::new();
        for i in 0..4i16 {
            bytes.extend_from_slice(&i.to_le_bytes());
            bytes.extend_from_slice(&(-i).to_le_bytes());
        }
        let verts = Vertex::slice_from_bytes(&bytes).unwrap();
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[0], Vertex::new(0, 0));
        assert_eq!(verts[3], Vertex::new(3, -3));
    }

    #[test]
    fn test_vertex_slice_rejects_partial_record() {
        // 4 records plus two stray bytes: not a whole number of records.
        let bytes = vec![0u8; 18];
        let err = Vertex::slice_from_bytes(&bytes).unwrap_err();
        assert!(matches!(
            err,
            WadError::BadLumpLength { len: 18, record_len: 4 }
        ));
    }

    #[test]
    fn test_vertex_read_many_aborts_on_truncation() {
        // Two full records then a truncated third.
        let bytes = vec![0u8; 10];
        let mut cur = Cursor::new(bytes);
        let err = Vertex::read_many(&mut cur, 3).unwrap_err();
        assert!(matches!(err, WadError::Io(_)));
    }

    #[test]
    fn test_vertex_write_many_concatenates() {
        let verts = [Vertex::new(1, 2), Vertex::new(3, 4)];
        let mut out = Vec::new();
        Vertex::write_many(&mut out, &verts).unwrap();
        assert_eq!(out, [1, 0, 2, 0, 3, 0, 4, 0]);
    }
}
