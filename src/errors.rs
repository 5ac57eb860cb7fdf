// src/errors.rs

use std::io;

use thiserror::Error;

/// Errors produced while decoding or encoding WAD map records.
///
/// Two families exist and callers may want to treat them differently:
/// [`WadError::Io`] means the byte source or sink itself failed (including
/// a stream that ends mid-record), while the remaining variants are domain
/// errors: the bytes were readable but the values cannot legally cross the
/// field boundary in the direction requested.
#[derive(Debug, Error)]
pub enum WadError {
    /// The underlying reader or writer failed, or the stream ended
    /// before a full record was consumed.
    #[error("i/o failure: {0}")]
    Io(#[from] io::Error),

    /// A field value does not fit the inclusive range its on-disk
    /// width (or sentinel-extended domain) allows.
    #[error("{field} out of range: {value} is not in [{min}, {max}]")]
    OutOfRange {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A byte buffer is too short to hold what was asked of it.
    #[error("buffer too short: need {need} bytes, have {have}")]
    ShortBuffer { need: usize, have: usize },

    /// A lump buffer's length is not a whole multiple of the record
    /// length, so it cannot be an array of that record type.
    #[error("lump of {len} bytes is not a multiple of the {record_len}-byte record size")]
    BadLumpLength { len: usize, record_len: usize },

    /// A texture or flat name cannot be stored in an 8-byte name field
    /// (too long, non-ASCII, or containing a NUL).
    #[error("{field} cannot hold {name:?}: 8-byte names must be ASCII without NULs")]
    InvalidName { field: &'static str, name: String },
}

impl WadError {
    /// True for the domain-error variants (anything except [`WadError::Io`]).
    ///
    /// Domain errors mean the caller handed over a value that cannot be
    /// represented on disk; retrying without changing the data is useless.
    pub fn is_domain(&self) -> bool {
        !matches!(self, WadError::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_the_field() {
        let err = WadError::OutOfRange {
            field: "Vertex X",
            value: 40000,
            min: -32768,
            max: 32767,
        };
        let msg = err.to_string();
        assert!(msg.contains("Vertex X"));
        assert!(msg.contains("40000"));
        assert!(err.is_domain());
    }

    #[test]
    fn io_errors_convert_and_classify() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "eof");
        let err = WadError::from(io);
        assert!(!err.is_domain());
        assert!(matches!(err, WadError::Io(_)));
    }
}
