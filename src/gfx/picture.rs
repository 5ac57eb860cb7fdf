// src/gfx/picture.rs

use std::io::Cursor;

use byteorder::{ReadBytesExt, WriteBytesExt, LE};

use crate::errors::WadError;
use crate::utils::range::{check_range, check_short, check_short_unsigned};

/// One vertical run of opaque pixels inside a picture column.
///
/// `top_delta` is the row the run starts at, counted from the top of
/// the column. Rows not covered by any post are transparent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Post {
    /// Starting row of this run (0-254; 255 is the column terminator
    /// and cannot start a post).
    pub top_delta: u8,

    /// Palette indices, one per row, at most 255 of them.
    pub pixels: Vec<u8>,
}

/// A picture ("patch") in the classic column-post format: the header
/// gives the dimensions and drawing offsets, then one offset per
/// column points at that column's posts.
///
/// Layout (all little-endian):
///
/// ```text
/// offset    field        type
/// --------  -----------  ----
///  0-1      width        u16
///  2-3      height       u16
///  4-5      left_offset  i16
///  6-7      top_offset   i16
///  8-...    column_ofs   width x u32  (from the start of the lump)
/// ```
///
/// Each column is a run of posts terminated by a 0xFF byte. A post is
/// `top_delta`, a length byte, one pad byte, the pixels, and a second
/// pad byte. The pads are unused by every known engine; this codec
/// writes the adjacent pixel into them the way the original tools did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Picture {
    /// Height in pixels (unsigned 16-bit in a WAD). Posts are not
    /// forced to fit it; engines trust the builder here.
    pub height: i32,

    /// Horizontal drawing offset (signed 16-bit in a WAD).
    pub left_offset: i32,

    /// Vertical drawing offset (signed 16-bit in a WAD).
    pub top_offset: i32,

    /// One post list per column; the width is the number of columns.
    pub columns: Vec<Vec<Post>>,
}

impl Picture {
    /// Creates a fully transparent picture: `width` empty columns.
    pub fn new(width: usize, height: i32) -> Self {
        Picture {
            height,
            left_offset: 0,
            top_offset: 0,
            columns: vec![Vec::new(); width],
        }
    }

    /// Width in pixels: one column per pixel of width.
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Decodes a picture lump.
    ///
    /// Column offsets address into `bytes` from its start, so the
    /// whole lump must be passed in one piece.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WadError> {
        let mut header = Cursor::new(bytes);
        let width = header.read_u16::<LE>()? as usize;
        let height = header.read_u16::<LE>()? as i32;
        let left_offset = header.read_i16::<LE>()? as i32;
        let top_offset = header.read_i16::<LE>()? as i32;

        let mut columns = Vec::with_capacity(width);
        for _ in 0..width {
            let start = header.read_u32::<LE>()? as usize;
            columns.push(read_column(bytes, start)?);
        }

        Ok(Picture {
            height,
            left_offset,
            top_offset,
            columns,
        })
    }

    /// Encodes the picture as one lump.
    ///
    /// Fails with a domain error if the dimensions or offsets exceed
    /// their header fields, or if any post is too long or starts at
    /// the terminator row.
    pub fn to_bytes(&self) -> Result<Vec<u8>, WadError> {
        let width = self.columns.len();
        if width > u16::MAX as usize {
            return Err(WadError::OutOfRange {
                field: "Picture Width",
                value: width as i64,
                min: 0,
                max: u16::MAX as i64,
            });
        }
        check_short_unsigned("Picture Height", self.height)?;
        check_short("Picture Left Offset", self.left_offset)?;
        check_short("Picture Top Offset", self.top_offset)?;

        let mut out = Vec::new();
        out.write_u16::<LE>(width as u16)?;
        out.write_u16::<LE>(self.height as u16)?;
        out.write_i16::<LE>(self.left_offset as i16)?;
        out.write_i16::<LE>(self.top_offset as i16)?;

        // Column offset table, filled in as each column is written.
        let table_at = out.len();
        out.resize(table_at + 4 * width, 0);

        for (i, column) in self.columns.iter().enumerate() {
            let offset = out.len() as u32;
            out[table_at + 4 * i..table_at + 4 * (i + 1)]
                .copy_from_slice(&offset.to_le_bytes());

            for post in column {
                check_range("Picture Post Top", 0, 254, post.top_delta as i32)?;
                if post.pixels.len() > 255 {
                    return Err(WadError::OutOfRange {
                        field: "Picture Post Length",
                        value: post.pixels.len() as i64,
                        min: 0,
                        max: 255,
                    });
                }
                out.push(post.top_delta);
                out.push(post.pixels.len() as u8);
                out.push(post.pixels.first().copied().unwrap_or(0));
                out.extend_from_slice(&post.pixels);
                out.push(post.pixels.last().copied().unwrap_or(0));
            }
            out.push(0xFF);
        }

        Ok(out)
    }

    /// Returns the palette index at (`x`, `y`), or `None` if the spot
    /// is transparent or outside the picture.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        let column = self.columns.get(x)?;
        for post in column {
            let top = post.top_delta as usize;
            if y >= top && y < top + post.pixels.len() {
                return Some(post.pixels[y - top]);
            }
        }
        None
    }
}

/// Parses one column's posts starting at `at`.
fn read_column(bytes: &[u8], mut at: usize) -> Result<Vec<Post>, WadError> {
    let mut posts = Vec::new();
    loop {
        require(bytes, at + 1)?;
        let top_delta = bytes[at];
        if top_delta == 0xFF {
            break;
        }
        require(bytes, at + 2)?;
        let length = bytes[at + 1] as usize;
        // Post body: pad byte, pixels, pad byte.
        let pixels_at = at + 3;
        require(bytes, pixels_at + length + 1)?;
        posts.push(Post {
            top_delta,
            pixels: bytes[pixels_at..pixels_at + length].to_vec(),
        });
        at = pixels_at + length + 1;
    }
    Ok(posts)
}

fn require(bytes: &[u8], need: usize) -> Result<(), WadError> {
    if bytes.len() < need {
        return Err(WadError::ShortBuffer {
            need,
            have: bytes.len(),
        });
    }
    Ok(())
}
