// src/map/thing.rs

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};

use crate::errors::WadError;
use crate::record::BinaryRecord;
use crate::utils::bits::flag_set;
use crate::utils::range::{check_short, check_short_unsigned};

/// Fields shared by every thing format variant: position, facing angle
/// and the editor type code. The spawn-flag layout is what varies
/// between formats, so flags live on the concrete record instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommonThing {
    /// X position (signed 16-bit in a WAD).
    pub x: i32,

    /// Y position (signed 16-bit in a WAD).
    pub y: i32,

    /// Facing angle in degrees, counter-clockwise from east
    /// (unsigned 16-bit in a WAD).
    pub angle: i32,

    /// Editor type code: which monster, item or special spot spawns
    /// here (unsigned 16-bit in a WAD).
    pub kind: i32,
}

impl CommonThing {
    /// Sets the X position (signed 16-bit range).
    pub fn set_x(&mut self, x: i32) -> Result<(), WadError> {
        check_short("Thing X", x)?;
        self.x = x;
        Ok(())
    }

    /// Sets the Y position (signed 16-bit range).
    pub fn set_y(&mut self, y: i32) -> Result<(), WadError> {
        check_short("Thing Y", y)?;
        self.y = y;
        Ok(())
    }

    /// Sets the facing angle (unsigned 16-bit range).
    pub fn set_angle(&mut self, angle: i32) -> Result<(), WadError> {
        check_short_unsigned("Thing Angle", angle)?;
        self.angle = angle;
        Ok(())
    }

    /// Sets the editor type code (unsigned 16-bit range).
    pub fn set_kind(&mut self, kind: i32) -> Result<(), WadError> {
        check_short_unsigned("Thing Type", kind)?;
        self.kind = kind;
        Ok(())
    }

    fn check(&self) -> Result<(), WadError> {
        check_short("Thing X", self.x)?;
        check_short("Thing Y", self.y)?;
        check_short_unsigned("Thing Angle", self.angle)?;
        check_short_unsigned("Thing Type", self.kind)?;
        Ok(())
    }
}

flag_set! {
    /// Spawn flags of the baseline thing record, in bit order.
    pub struct ThingFlags {
        /// Present on skills 1 and 2.
        easy,
        /// Present on skill 3.
        medium,
        /// Present on skills 4 and 5.
        hard,
        /// Waits in ambush: reacts to sight but not to sound.
        ambush,
        /// Left out of single-player games.
        not_single_player,
        /// Left out of deathmatch games.
        not_deathmatch,
        /// Left out of cooperative games.
        not_cooperative,
        /// Fights on the player's side.
        friendly,
    }
}

/// A thing (monster, item, player start, ...) in the classic 10-byte
/// format, shared by the baseline and extended map variants.
///
/// Layout (all little-endian):
///
/// ```text
/// offset  field  type
/// ------  -----  ----
///  0-1    x      i16
///  2-3    y      i16
///  4-5    angle  u16
///  6-7    kind   u16
///  8-9    flags  u16  (bits 0-7, see [ThingFlags]; rest ignored)
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thing {
    /// Position, angle and type code.
    pub common: CommonThing,

    /// Spawn flags.
    pub flags: ThingFlags,
}

impl Thing {
    /// Creates a thing with no spawn flags set.
    ///
    /// # Example
    /// ```
    /// use wadbin::map::Thing;
    ///
    /// let mut player_start = Thing::new(100, -50, 90, 1);
    /// player_start.flags.easy = true;
    /// player_start.flags.medium = true;
    /// ```
    pub fn new(x: i32, y: i32, angle: i32, kind: i32) -> Self {
        Thing {
            common: CommonThing { x, y, angle, kind },
            flags: ThingFlags::default(),
        }
    }
}

impl BinaryRecord for Thing {
    const BYTE_LEN: usize = 10;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self, WadError> {
        let common = CommonThing {
            x: reader.read_i16::<LE>()? as i32,
            y: reader.read_i16::<LE>()? as i32,
            angle: reader.read_u16::<LE>()? as i32,
            kind: reader.read_u16::<LE>()? as i32,
        };
        let flags = ThingFlags::unpack(reader.read_u16::<LE>()?);
        Ok(Thing { common, flags })
    }

    fn to_wad<W: Write>(&self, writer: &mut W) -> Result<(), WadError> {
        self.common.check()?;

        writer.write_i16::<LE>(self.common.x as i16)?;
        writer.write_i16::<LE>(self.common.y as i16)?;
        writer.write_u16::<LE>(self.common.angle as u16)?;
        writer.write_u16::<LE>(self.common.kind as u16)?;
        writer.write_u16::<LE>(self.flags.pack())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thing_encode_decode_player_start() {
        // A thing at (100, -50) facing 90 degrees, type 1, present on
        // the easy and medium skills.
        let mut thing = Thing::new(100, -50, 90, 1);
        thing.flags.easy = true;
        thing.flags.medium = true;

        let bytes = thing.to_bytes().unwrap();
        assert_eq!(bytes.len(), Thing::BYTE_LEN);
        assert_eq!(&bytes[0..2], &[100, 0]);
        assert_eq!(&bytes[2..4], &[0xCE, 0xFF]); // -50
        assert_eq!(&bytes[4..6], &[90, 0]);
        assert_eq!(&bytes[6..8], &[1, 0]);
        assert_eq!(&bytes[8..10], &[0b11, 0]); // easy | medium

        let back = Thing::from_bytes(&bytes).unwrap();
        assert_eq!(back, thing);
        assert!(back.flags.easy && back.flags.medium);
        assert!(!back.flags.hard && !back.flags.ambush);
    }

    #[test]
    fn test_thing_each_flag_maps_to_its_own_bit() {
        let bit_of = |f: &dyn Fn(&mut ThingFlags)| {
            let mut flags = ThingFlags::default();
            f(&mut flags);
            flags.pack()
        };
        assert_eq!(bit_of(&|f| f.easy = true), 1 << 0);
        assert_eq!(bit_of(&|f| f.medium = true), 1 << 1);
        assert_eq!(bit_of(&|f| f.hard = true), 1 << 2);
        assert_eq!(bit_of(&|f| f.ambush = true), 1 << 3);
        assert_eq!(bit_of(&|f| f.not_single_player = true), 1 << 4);
        assert_eq!(bit_of(&|f| f.not_deathmatch = true), 1 << 5);
        assert_eq!(bit_of(&|f| f.not_cooperative = true), 1 << 6);
        assert_eq!(bit_of(&|f| f.friendly = true), 1 << 7);
    }

    #[test]
    fn test_thing_flag_toggle_leaves_others_alone() {
        let mut flags = ThingFlags::unpack(0b1010_0101);
        let before = flags;
        flags.ambush = !flags.ambush;
        flags.ambush = !flags.ambush;
        assert_eq!(flags, before);

        flags.friendly = true;
        assert_eq!(flags.pack(), 0b1010_0101);
        assert!(flags.easy == before.easy && flags.hard == before.hard);
    }

    #[test]
    fn test_thing_decode_ignores_high_flag_bits() {
        let bytes = [0, 0, 0, 0, 0, 0, 1, 0, 0xFF, 0xFF];
        let thing = Thing::from_bytes(&bytes).unwrap();
        assert!(thing.flags.friendly);
        // Re-encoding writes only the defined bits.
        let out = thing.to_bytes().unwrap();
        assert_eq!(&out[8..10], &[0xFF, 0x00]);
    }

    #[test]
    fn test_thing_angle_and_type_are_unsigned() {
        let mut thing = Thing::new(0, 0, 0, 0);
        assert!(thing.common.set_angle(65535).is_ok());
        assert!(thing.common.set_angle(-1).is_err());
        assert!(thing.common.set_kind(65536).is_err());

        thing.common.angle = -90;
        assert!(matches!(
            thing.to_bytes().unwrap_err(),
            WadError::OutOfRange { field: "Thing Angle", .. }
        ));
    }

    #[test]
    fn test_thing_setter_rejects_new_value_not_old() {
        // The value under test is the incoming one: a thing whose
        // current X is valid must still refuse an invalid new X.
        let mut thing = Thing::new(0, 0, 0, 1);
        let err = thing.common.set_x(40000).unwrap_err();
        assert!(matches!(
            err,
            WadError::OutOfRange { field: "Thing X", value: 40000, .. }
        ));
        assert_eq!(thing.common.x, 0);

        // And conversely: a stale invalid value does not block storing
        // a valid one.
        thing.common.x = 99999;
        assert!(thing.common.set_x(128).is_ok());
        assert_eq!(thing.common.x, 128);
    }
}
