// src/utils/name.rs

//! # 8-Byte Name Fields
//!
//! Texture and flat names are stored on disk as exactly eight bytes,
//! NUL-padded on the right. Decoding stops at the first NUL; encoding is
//! strict and refuses names it cannot store verbatim, because truncating
//! or case-folding here would make a decode of the written bytes disagree
//! with what the caller set.

use std::io::{Read, Write};

use crate::errors::WadError;

/// Reads an 8-byte NUL-padded name field.
///
/// Bytes after the first NUL are ignored; some tools leave garbage there.
pub fn read_name8<R: Read>(reader: &mut R) -> Result<String, WadError> {
    let mut buf = [0u8; 8];
    reader.read_exact(&mut buf)?;
    let end = buf.iter().position(|&b| b == 0).unwrap_or(8);
    Ok(buf[..end].iter().map(|&b| b as char).collect())
}

/// Writes a name as an 8-byte NUL-padded field.
///
/// Fails with [`WadError::InvalidName`] if the name does not satisfy
/// [`check_name8`].
pub fn write_name8<W: Write>(writer: &mut W, field: &'static str, name: &str) -> Result<(), WadError> {
    check_name8(field, name)?;
    let mut buf = [0u8; 8];
    buf[..name.len()].copy_from_slice(name.as_bytes());
    writer.write_all(&buf)?;
    Ok(())
}

/// Checks that a name can live in an 8-byte name field: at most eight
/// bytes, ASCII only, and free of interior NULs.
pub fn check_name8(field: &'static str, name: &str) -> Result<(), WadError> {
    if name.len() > 8 || !name.is_ascii() || name.contains('\0') {
        return Err(WadError::InvalidName {
            field,
            name: name.to_owned(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    #[test]
    fn test_read_name8_trims_nul_padding() {
        let mut cur = Cursor::new(*b"STARTAN3AFTER...");
        assert_eq!(read_name8(&mut cur).unwrap(), "STARTAN3");
        let mut cur = Cursor::new(*b"DOOR\0\0\0\0");
        assert_eq!(read_name8(&mut cur).unwrap(), "DOOR");
    }

    #[test]
    fn test_read_name8_stops_at_first_nul() {
        let mut cur = Cursor::new(*b"AB\0CDEFG");
        assert_eq!(read_name8(&mut cur).unwrap(), "AB");
    }

    #[test]
    fn test_write_name8_pads_to_eight_bytes() {
        let mut out = Vec::new();
        write_name8(&mut out, "Texture", "DOOR").unwrap();
        assert_eq!(out, b"DOOR\0\0\0\0");
    }

    #[test]
    fn test_write_name8_eight_chars_exact() {
        let mut out = Vec::new();
        write_name8(&mut out, "Texture", "STARTAN3").unwrap();
        assert_eq!(out, b"STARTAN3");
    }

    #[test]
    fn test_write_name8_rejects_long_names() {
        let mut out = Vec::new();
        let err = write_name8(&mut out, "Texture", "TOOLONGNAME").unwrap_err();
        assert!(matches!(err, WadError::InvalidName { field: "Texture", .. }));
        // Nothing was written for the rejected name.
        assert!(out.is_empty());
    }

    #[test]
    fn test_write_name8_rejects_non_ascii_and_nul() {
        assert!(check_name8("T", "DÖRR").is_err());
        assert!(check_name8("T", "AB\0C").is_err());
        assert!(check_name8("T", "").is_ok());
    }

    #[test]
    fn test_name_roundtrip() {
        for name in ["", "A", "FLOOR4_8", "F_SKY1"] {
            let mut out = Vec::new();
            write_name8(&mut out, "T", name).unwrap();
            assert_eq!(out.len(), 8);
            assert_eq!(read_name8(&mut Cursor::new(out)).unwrap(), name);
        }
    }
}
