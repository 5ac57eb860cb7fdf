// src/record.rs

//! # The Binary Record Contract
//!
//! Every fixed-length map structure implements [`BinaryRecord`]: a known
//! byte length plus symmetric decode and encode over streams and buffers.
//! Single-record and batch forms are provided; batches are laid out
//! back-to-back with no separators, exactly as WAD lumps store them.

use std::io::{Cursor, Read, Write};

use crate::errors::WadError;

/// Uniform read/write contract for fixed-length WAD records.
///
/// Implementations guarantee that for any in-range record `x`,
/// `from_bytes(&to_bytes(&x)?)` reconstructs `x` exactly, and that
/// encoding writes exactly [`BYTE_LEN`](Self::BYTE_LEN) bytes. Values a
/// record can hold in memory but not on disk (an `i32` field wider than
/// its 16-bit wire format) are rejected at encode time with a domain
/// error rather than wrapped or clamped.
pub trait BinaryRecord: Sized {
    /// Encoded length of one record, in bytes.
    const BYTE_LEN: usize;

    /// Reads one record, consuming exactly [`BYTE_LEN`](Self::BYTE_LEN)
    /// bytes from `reader`. The reader is left positioned at the next
    /// record and is never closed.
    fn from_wad<R: Read>(reader: &mut R) -> Result<Self, WadError>;

    /// Writes this record as exactly [`BYTE_LEN`](Self::BYTE_LEN) bytes.
    ///
    /// Every field is range-checked against its wire width before any
    /// byte of it is written.
    fn to_wad<W: Write>(&self, writer: &mut W) -> Result<(), WadError>;

    /// Decodes one record from the front of `bytes`.
    ///
    /// Extra trailing bytes are permitted and ignored; a buffer shorter
    /// than one record fails with [`WadError::ShortBuffer`].
    fn from_bytes(bytes: &[u8]) -> Result<Self, WadError> {
        if bytes.len() < Self::BYTE_LEN {
            return Err(WadError::ShortBuffer {
                need: Self::BYTE_LEN,
                have: bytes.len(),
            });
        }
        Self::from_wad(&mut Cursor::new(&bytes[..Self::BYTE_LEN]))
    }

    /// Encodes this record into a fresh buffer of exactly
    /// [`BYTE_LEN`](Self::BYTE_LEN) bytes.
    fn to_bytes(&self) -> Result<Vec<u8>, WadError> {
        let mut out = Vec::with_capacity(Self::BYTE_LEN);
        self.to_wad(&mut out)?;
        Ok(out)
    }

    /// Reads `count` consecutive records in file order.
    ///
    /// The first failure aborts the batch: the error is returned, the
    /// records decoded so far are dropped, and the reader is left
    /// wherever the failure occurred.
    fn read_many<R: Read>(reader: &mut R, count: usize) -> Result<Vec<Self>, WadError> {
        let mut out = Vec::with_capacity(count);
        for _ in 0..count {
            out.push(Self::from_wad(reader)?);
        }
        Ok(out)
    }

    /// Writes records back-to-back in iteration order.
    ///
    /// The first failure aborts the batch; records already written stay
    /// written (there is no rollback on a raw byte sink).
    fn write_many<'a, W, I>(writer: &mut W, items: I) -> Result<(), WadError>
    where
        W: Write,
        I: IntoIterator<Item = &'a Self>,
        Self: 'a,
    {
        for item in items {
            item.to_wad(writer)?;
        }
        Ok(())
    }

    /// Decodes an entire lump buffer into records.
    ///
    /// The record count is derived from the buffer length, which must be
    /// an exact multiple of [`BYTE_LEN`](Self::BYTE_LEN); anything else
    /// fails with [`WadError::BadLumpLength`] before any record is read.
    fn slice_from_bytes(bytes: &[u8]) -> Result<Vec<Self>, WadError> {
        if bytes.len() % Self::BYTE_LEN != 0 {
            return Err(WadError::BadLumpLength {
                len: bytes.len(),
                record_len: Self::BYTE_LEN,
            });
        }
        Self::read_many(&mut Cursor::new(bytes), bytes.len() / Self::BYTE_LEN)
    }
}
