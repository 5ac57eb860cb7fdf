// src/map/sector.rs

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};

use crate::errors::WadError;
use crate::record::BinaryRecord;
use crate::utils::name::{check_name8, read_name8, write_name8};
use crate::utils::range::{check_short, check_short_unsigned};

/// A sector in the classic 26-byte format.
///
/// Layout (all little-endian):
///
/// ```text
/// offset  field           type / size
/// ------  --------------  ------------
///  0-1    floor_height    i16
///  2-3    ceiling_height  i16
///  4-11   floor_tex       [u8; 8]  NUL-padded flat name
/// 12-19   ceiling_tex     [u8; 8]  NUL-padded flat name
/// 20-21   light           i16
/// 22-23   special         u16
/// 24-25   tag             u16
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sector {
    /// Floor height (signed 16-bit in a WAD).
    pub floor_height: i32,

    /// Ceiling height (signed 16-bit in a WAD).
    pub ceiling_height: i32,

    /// Floor flat name, up to 8 chars.
    pub floor_tex: String,

    /// Ceiling flat name, up to 8 chars. `F_SKY1` marks an open sky.
    pub ceiling_tex: String,

    /// Light level. The engine clamps at display time; the record
    /// stores the full signed 16-bit range as written by editors.
    pub light: i32,

    /// Special behavior code (unsigned 16-bit).
    pub special: i32,

    /// Tag linking this sector to linedef actions (unsigned 16-bit).
    pub tag: i32,
}

impl Sector {
    /// Creates a new sector with the given field values.
    pub fn new(
        floor_height: i32,
        ceiling_height: i32,
        floor_tex: &str,
        ceiling_tex: &str,
        light: i32,
    ) -> Self {
        Sector {
            floor_height,
            ceiling_height,
            floor_tex: floor_tex.to_owned(),
            ceiling_tex: ceiling_tex.to_owned(),
            light,
            special: 0,
            tag: 0,
        }
    }

    /// Sets the floor height (signed 16-bit range).
    pub fn set_floor_height(&mut self, height: i32) -> Result<(), WadError> {
        check_short("Sector Floor Height", height)?;
        self.floor_height = height;
        Ok(())
    }

    /// Sets the ceiling height (signed 16-bit range).
    pub fn set_ceiling_height(&mut self, height: i32) -> Result<(), WadError> {
        check_short("Sector Ceiling Height", height)?;
        self.ceiling_height = height;
        Ok(())
    }

    /// Sets the floor flat name.
    pub fn set_floor_tex(&mut self, tex: &str) -> Result<(), WadError> {
        check_name8("Sector Floor Texture", tex)?;
        self.floor_tex = tex.to_owned();
        Ok(())
    }

    /// Sets the ceiling flat name.
    pub fn set_ceiling_tex(&mut self, tex: &str) -> Result<(), WadError> {
        check_name8("Sector Ceiling Texture", tex)?;
        self.ceiling_tex = tex.to_owned();
        Ok(())
    }

    /// Sets the light level (signed 16-bit range).
    pub fn set_light(&mut self, light: i32) -> Result<(), WadError> {
        check_short("Sector Light", light)?;
        self.light = light;
        Ok(())
    }

    /// Sets the special behavior code (unsigned 16-bit range).
    pub fn set_special(&mut self, special: i32) -> Result<(), WadError> {
        check_short_unsigned("Sector Special", special)?;
        self.special = special;
        Ok(())
    }

    /// Sets the action tag (unsigned 16-bit range).
    pub fn set_tag(&mut self, tag: i32) -> Result<(), WadError> {
        check_short_unsigned("Sector Tag", tag)?;
        self.tag = tag;
        Ok(())
    }
}

impl BinaryRecord for Sector {
    const BYTE_LEN: usize = 26;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self, WadError> {
        let floor_height = reader.read_i16::<LE>()? as i32;
        let ceiling_height = reader.read_i16::<LE>()? as i32;

        let floor_tex = read_name8(reader)?;
        let ceiling_tex = read_name8(reader)?;

        let light = reader.read_i16::<LE>()? as i32;
        let special = reader.read_u16::<LE>()? as i32;
        let tag = reader.read_u16::<LE>()? as i32;

        Ok(Sector {
            floor_height,
            ceiling_height,
            floor_tex,
            ceiling_tex,
            light,
            special,
            tag,
        })
    }

    fn to_wad<W: Write>(&self, writer: &mut W) -> Result<(), WadError> {
        check_short("Sector Floor Height", self.floor_height)?;
        check_short("Sector Ceiling Height", self.ceiling_height)?;
        check_short("Sector Light", self.light)?;
        check_short_unsigned("Sector Special", self.special)?;
        check_short_unsigned("Sector Tag", self.tag)?;

        writer.write_i16::<LE>(self.floor_height as i16)?;
        writer.write_i16::<LE>(self.ceiling_height as i16)?;

        write_name8(writer, "Sector Floor Texture", &self.floor_tex)?;
        write_name8(writer, "Sector Ceiling Texture", &self.ceiling_tex)?;

        writer.write_i16::<LE>(self.light as i16)?;
        writer.write_u16::<LE>(self.special as u16)?;
        writer.write_u16::<LE>(self.tag as u16)?;
        Ok(())
    }
}
