// src/bsp/node.rs

use std::io::{Read, Write};

use byteorder::{ReadBytesExt, WriteBytesExt, LE};

use crate::errors::WadError;
use crate::record::BinaryRecord;
use crate::utils::range::{check_range, check_short};

/// Bit 15 of a child word marks the reference as a subsector leaf.
const SUBSECTOR_MASK: u16 = 0x8000;

/// Largest index the low 15 bits of a child word can hold, for both
/// node and subsector references.
pub const MAX_CHILD_INDEX: i32 = 0x7FFF;

/// One child reference of a BSP node.
///
/// On disk this is a single 16-bit word: bit 15 clear means the low
/// bits index another node, bit 15 set means they index a subsector
/// (a leaf of the tree). Modeling the two cases as variants keeps
/// "is this a leaf" a structural question instead of a magic-value
/// comparison, and makes a leaf reference impossible to confuse with
/// a very large node index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BspChild {
    /// Descend into another node, by index into the node table.
    Node(u16),
    /// Stop at a leaf, by index into the subsector table.
    Subsector(u16),
}

impl Default for BspChild {
    fn default() -> Self {
        BspChild::Node(0)
    }
}

impl BspChild {
    /// Decodes a child word.
    pub fn from_word(word: u16) -> Self {
        if word & SUBSECTOR_MASK != 0 {
            BspChild::Subsector(word & !SUBSECTOR_MASK)
        } else {
            BspChild::Node(word)
        }
    }

    /// Encodes this reference as a child word.
    ///
    /// Either variant's index must fit the low 15 bits; `field` names
    /// the record field for error attribution.
    pub fn to_word(self, field: &'static str) -> Result<u16, WadError> {
        self.check(field)?;
        Ok(match self {
            BspChild::Node(index) => index,
            BspChild::Subsector(index) => index | SUBSECTOR_MASK,
        })
    }

    /// Checks that the index fits the 15-bit child index domain.
    pub fn check(self, field: &'static str) -> Result<(), WadError> {
        let index = match self {
            BspChild::Node(index) | BspChild::Subsector(index) => index,
        };
        check_range(field, 0, MAX_CHILD_INDEX, index as i32)
    }

    /// True if this reference is a subsector leaf.
    pub fn is_leaf(self) -> bool {
        matches!(self, BspChild::Subsector(_))
    }
}

/// An axis-aligned bounding box as stored inside a node record: four
/// signed 16-bit coordinates in the order top, bottom, left, right.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoundingBox {
    pub top: i32,
    pub bottom: i32,
    pub left: i32,
    pub right: i32,
}

impl BoundingBox {
    pub fn new(top: i32, bottom: i32, left: i32, right: i32) -> Self {
        BoundingBox { top, bottom, left, right }
    }

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self, WadError> {
        Ok(BoundingBox {
            top: reader.read_i16::<LE>()? as i32,
            bottom: reader.read_i16::<LE>()? as i32,
            left: reader.read_i16::<LE>()? as i32,
            right: reader.read_i16::<LE>()? as i32,
        })
    }

    fn to_wad<W: Write>(&self, writer: &mut W) -> Result<(), WadError> {
        writer.write_i16::<LE>(self.top as i16)?;
        writer.write_i16::<LE>(self.bottom as i16)?;
        writer.write_i16::<LE>(self.left as i16)?;
        writer.write_i16::<LE>(self.right as i16)?;
        Ok(())
    }
}

/// A BSP tree node in the classic 28-byte format.
///
/// Layout (all little-endian):
///
/// ```text
/// offset  field        type
/// ------  -----------  ----
///  0-1    x            i16   partition line origin
///  2-3    y            i16
///  4-5    dx           i16   partition line delta to its end
///  6-7    dy           i16
///  8-15   right_box    4 x i16  (top, bottom, left, right)
/// 16-23   left_box     4 x i16  (top, bottom, left, right)
/// 24-25   right_child  u16   bit 15 set = subsector leaf
/// 26-27   left_child   u16   bit 15 set = subsector leaf
/// ```
///
/// The node table is stored children-first: the root is the *last*
/// record in the NODES lump (see [`root`](crate::bsp::root)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BspNode {
    /// Partition line origin X (signed 16-bit in a WAD).
    pub x: i32,

    /// Partition line origin Y (signed 16-bit in a WAD).
    pub y: i32,

    /// Partition line X delta (signed 16-bit in a WAD).
    pub dx: i32,

    /// Partition line Y delta (signed 16-bit in a WAD).
    pub dy: i32,

    /// Bounding box of the right (front) child's region.
    pub right_box: BoundingBox,

    /// Bounding box of the left (back) child's region.
    pub left_box: BoundingBox,

    /// Right (front) child reference.
    pub right_child: BspChild,

    /// Left (back) child reference.
    pub left_child: BspChild,
}

impl BspNode {
    /// Creates a node with the given partition line, empty boxes and
    /// both children pointing at node 0.
    pub fn new(x: i32, y: i32, dx: i32, dy: i32) -> Self {
        BspNode {
            x,
            y,
            dx,
            dy,
            ..BspNode::default()
        }
    }

    /// Sets the partition line origin X (signed 16-bit range).
    pub fn set_x(&mut self, x: i32) -> Result<(), WadError> {
        check_short("Partition Line X", x)?;
        self.x = x;
        Ok(())
    }

    /// Sets the partition line origin Y (signed 16-bit range).
    pub fn set_y(&mut self, y: i32) -> Result<(), WadError> {
        check_short("Partition Line Y", y)?;
        self.y = y;
        Ok(())
    }

    /// Sets the partition line X delta (signed 16-bit range).
    pub fn set_dx(&mut self, dx: i32) -> Result<(), WadError> {
        check_short("Partition Delta X", dx)?;
        self.dx = dx;
        Ok(())
    }

    /// Sets the partition line Y delta (signed 16-bit range).
    pub fn set_dy(&mut self, dy: i32) -> Result<(), WadError> {
        check_short("Partition Delta Y", dy)?;
        self.dy = dy;
        Ok(())
    }

    /// Sets the right child's bounding box, checking every coordinate.
    pub fn set_right_box(&mut self, bbox: BoundingBox) -> Result<(), WadError> {
        check_short("Right Box Top", bbox.top)?;
        check_short("Right Box Bottom", bbox.bottom)?;
        check_short("Right Box Left", bbox.left)?;
        check_short("Right Box Right", bbox.right)?;
        self.right_box = bbox;
        Ok(())
    }

    /// Sets the left child's bounding box, checking every coordinate.
    pub fn set_left_box(&mut self, bbox: BoundingBox) -> Result<(), WadError> {
        check_short("Left Box Top", bbox.top)?;
        check_short("Left Box Bottom", bbox.bottom)?;
        check_short("Left Box Left", bbox.left)?;
        check_short("Left Box Right", bbox.right)?;
        self.left_box = bbox;
        Ok(())
    }

    /// Sets the right child reference; the index must fit 15 bits.
    pub fn set_right_child(&mut self, child: BspChild) -> Result<(), WadError> {
        child.check("Right Child")?;
        self.right_child = child;
        Ok(())
    }

    /// Sets the left child reference; the index must fit 15 bits.
    pub fn set_left_child(&mut self, child: BspChild) -> Result<(), WadError> {
        child.check("Left Child")?;
        self.left_child = child;
        Ok(())
    }
}

impl BinaryRecord for BspNode {
    const BYTE_LEN: usize = 28;

    fn from_wad<R: Read>(reader: &mut R) -> Result<Self, WadError> {
        let x = reader.read_i16::<LE>()? as i32;
        let y = reader.read_i16::<LE>()? as i32;
        let dx = reader.read_i16::<LE>()? as i32;
        let dy = reader.read_i16::<LE>()? as i32;
        let right_box = BoundingBox::from_wad(reader)?;
        let left_box = BoundingBox::from_wad(reader)?;
        let right_child = BspChild::from_word(reader.read_u16::<LE>()?);
        let left_child = BspChild::from_word(reader.read_u16::<LE>()?);

        Ok(BspNode {
            x,
            y,
            dx,
            dy,
            right_box,
            left_box,
            right_child,
            left_child,
        })
    }

    fn to_wad<W: Write>(&self, writer: &mut W) -> Result<(), WadError> {
        check_short("Partition Line X", self.x)?;
        check_short("Partition Line Y", self.y)?;
        check_short("Partition Delta X", self.dx)?;
        check_short("Partition Delta Y", self.dy)?;
        check_short("Right Box Top", self.right_box.top)?;
        check_short("Right Box Bottom", self.right_box.bottom)?;
        check_short("Right Box Left", self.right_box.left)?;
        check_short("Right Box Right", self.right_box.right)?;
        check_short("Left Box Top", self.left_box.top)?;
        check_short("Left Box Bottom", self.left_box.bottom)?;
        check_short("Left Box Left", self.left_box.left)?;
        check_short("Left Box Right", self.left_box.right)?;
        let right_word = self.right_child.to_word("Right Child")?;
        let left_word = self.left_child.to_word("Left Child")?;

        writer.write_i16::<LE>(self.x as i16)?;
        writer.write_i16::<LE>(self.y as i16)?;
        writer.write_i16::<LE>(self.dx as i16)?;
        writer.write_i16::<LE>(self.dy as i16)?;
        self.right_box.to_wad(writer)?;
        self.left_box.to_wad(writer)?;
        writer.write_u16::<LE>(right_word)?;
        writer.write_u16::<LE>(left_word)?;
        Ok(())
    }
}
