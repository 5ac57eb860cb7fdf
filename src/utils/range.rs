// src/utils/range.rs

//! # Range Validation
//!
//! Field-width range checks shared by every record codec. A check either
//! passes or fails with [`WadError::OutOfRange`]; nothing is ever clamped
//! or coerced, because a silently adjusted value would still round-trip
//! through the 16-bit wire format as something other than what the caller
//! stored.

use crate::errors::WadError;

/// Checks that a value fits a signed 16-bit field.
///
/// # Arguments
///
/// * `field` - Name used to attribute the error to a specific field.
/// * `value` - The candidate value.
///
/// # Examples
///
/// ```
/// use wadbin::utils::range::check_short;
///
/// assert!(check_short("Vertex X", 32767).is_ok());
/// assert!(check_short("Vertex X", -32768).is_ok());
/// assert!(check_short("Vertex X", 32768).is_err());
/// ```
pub fn check_short(field: &'static str, value: i32) -> Result<(), WadError> {
    check_range(field, i16::MIN as i32, i16::MAX as i32, value)
}

/// Checks that a value fits an unsigned 16-bit field.
///
/// # Examples
///
/// ```
/// use wadbin::utils::range::check_short_unsigned;
///
/// assert!(check_short_unsigned("Thing Angle", 65535).is_ok());
/// assert!(check_short_unsigned("Thing Angle", -1).is_err());
/// ```
pub fn check_short_unsigned(field: &'static str, value: i32) -> Result<(), WadError> {
    check_range(field, 0, u16::MAX as i32, value)
}

/// Checks that a value lies in the inclusive range `[min, max]`.
///
/// Used directly for sentinel-extended domains, such as sidedef
/// references where `-1` means "no sidedef" but the rest of the range
/// is an ordinary table index.
pub fn check_range(field: &'static str, min: i32, max: i32, value: i32) -> Result<(), WadError> {
    if value < min || value > max {
        return Err(WadError::OutOfRange {
            field,
            value: value as i64,
            min: min as i64,
            max: max as i64,
        });
    }
    Ok(())
}
