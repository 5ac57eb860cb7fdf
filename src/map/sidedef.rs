// src/map/sidedef.rs

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};

use crate::errors::WadError;
use crate::record::BinaryRecord;
use crate::utils::name::{check_name8, read_name8, write_name8};
use crate::utils::range::{check_short, check_short_unsigned};

/// A sidedef in the classic 30-byte format.
///
/// Layout (all little-endian):
///
/// ```text
/// offset  field       type / size
/// ------  ----------  ------------
///  0-1    x_offset    i16
///  2-3    y_offset    i16
///  4-11   upper_tex   [u8; 8]  NUL-padded name
/// 12-19   lower_tex   [u8; 8]  NUL-padded name
/// 20-27   mid_tex     [u8; 8]  NUL-padded name
/// 28-29   sector      u16  (index into the sector table)
/// ```
///
/// Texture names are decoded up to the first NUL and written back
/// NUL-padded. Names that cannot be stored verbatim (longer than eight
/// bytes, non-ASCII, interior NUL) are rejected at encode time rather
/// than truncated, so written bytes always decode to the stored names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideDef {
    /// Horizontal texture offset (signed 16-bit in a WAD).
    pub x_offset: i32,

    /// Vertical texture offset (signed 16-bit in a WAD).
    pub y_offset: i32,

    /// Upper texture name, up to 8 chars. `"-"` is the conventional
    /// "no texture" placeholder.
    pub upper_tex: String,

    /// Lower texture name, up to 8 chars.
    pub lower_tex: String,

    /// Middle (a.k.a. "mid" or "normal") texture name, up to 8 chars.
    pub mid_tex: String,

    /// Sector this sidedef's surfaces belong to (unsigned 16-bit index).
    pub sector: i32,
}

impl SideDef {
    /// Creates a new sidedef with the given field values.
    ///
    /// # Example
    /// ```
    /// use wadbin::map::SideDef;
    ///
    /// let sd = SideDef::new(0, 0, "-", "-", "STARTAN3", 0);
    /// assert_eq!(sd.mid_tex, "STARTAN3");
    /// ```
    pub fn new(
        x_offset: i32,
        y_offset: i32,
        upper_tex: &str,
        lower_tex: &str,
        mid_tex: &str,
        sector: i32,
    ) -> Self {
        SideDef {
            x_offset,
            y_offset,
            upper_tex: upper_tex.to_owned(),
            lower_tex: lower_tex.to_owned(),
            mid_tex: mid_tex.to_owned(),
            sector,
        }
    }

    /// Sets the horizontal texture offset (signed 16-bit range).
    pub fn set_x_offset(&mut self, x_offset: i32) -> Result<(), WadError> {
        check_short("Sidedef X Offset", x_offset)?;
        self.x_offset = x_offset;
        Ok(())
    }

    /// Sets the vertical texture offset (signed 16-bit range).
    pub fn set_y_offset(&mut self, y_offset: i32) -> Result<(), WadError> {
        check_short("Sidedef Y Offset", y_offset)?;
        self.y_offset = y_offset;
        Ok(())
    }

    /// Sets the upper texture name, rejecting names an 8-byte field
    /// cannot hold.
    pub fn set_upper_tex(&mut self, tex: &str) -> Result<(), WadError> {
        check_name8("Sidedef Upper Texture", tex)?;
        self.upper_tex = tex.to_owned();
        Ok(())
    }

    /// Sets the lower texture name.
    pub fn set_lower_tex(&mut self, tex: &str) -> Result<(), WadError> {
        check_name8("Sidedef Lower Texture", tex)?;
        self.lower_tex = tex.to_owned();
        Ok(())
    }

    /// Sets the middle texture name.
    pub fn set_mid_tex(&mut self, tex: &str) -> Result<(), WadError> {
        check_name8("Sidedef Middle Texture", tex)?;
        self.mid_tex = tex.to_owned();
        Ok(())
    }

    /// Sets the sector index (unsigned 16-bit range).
    pub fn set_sector(&mut self, sector: i32) -> Result<(), WadError> {
        check_short_unsigned("Sidedef Sector", sector)?;
        self.sector = sector;
        Ok(())
    }
}

impl BinaryRecord for SideDef {
    const BYTE_LEN: usize = 30;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self, WadError> {
        let x_offset = reader.read_i16::<LE>()? as i32;
        let y_offset = reader.read_i16::<LE>()? as i32;

        let upper_tex = read_name8(reader)?;
        let lower_tex = read_name8(reader)?;
        let mid_tex = read_name8(reader)?;

        let sector = reader.read_u16::<LE>()? as i32;

        Ok(SideDef {
            x_offset,
            y_offset,
            upper_tex,
            lower_tex,
            mid_tex,
            sector,
        })
    }

    fn to_wad<W: Write>(&self, writer: &mut W) -> Result<(), WadError> {
        check_short("Sidedef X Offset", self.x_offset)?;
        check_short("Sidedef Y Offset", self.y_offset)?;
        check_short_unsigned("Sidedef Sector", self.sector)?;

        writer.write_i16::<LE>(self.x_offset as i16)?;
        writer.write_i16::<LE>(self.y_offset as i16)?;

        write_name8(writer, "Sidedef Upper Texture", &self.upper_tex)?;
        write_name8(writer, "Sidedef Lower Texture", &self.lower_tex)?;
        write_name8(writer, "Sidedef Middle Texture", &self.mid_tex)?;

        writer.write_u16::<LE>(self.sector as u16)?;
        Ok(())
    }
}
