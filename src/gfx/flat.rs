// src/gfx/flat.rs

use crate::errors::WadError;

/// A raw paletted flat: width x height palette indices, row-major, no
/// header. The lump stores nothing but the pixels, so the dimensions
/// come from the caller; the engine assumes 64 x 64 for floor and
/// ceiling flats.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flat {
    width: usize,
    height: usize,
    pixels: Vec<u8>,
}

impl Flat {
    /// Creates a flat of the given dimensions filled with palette
    /// index 0.
    pub fn new(width: usize, height: usize) -> Self {
        Flat {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Decodes a flat of the given dimensions from the front of
    /// `bytes`.
    ///
    /// Exactly `width * height` bytes are consumed; extra trailing
    /// bytes are ignored, a shorter buffer fails with
    /// [`WadError::ShortBuffer`].
    pub fn from_bytes(width: usize, height: usize, bytes: &[u8]) -> Result<Self, WadError> {
        let need = width * height;
        if bytes.len() < need {
            return Err(WadError::ShortBuffer {
                need,
                have: bytes.len(),
            });
        }
        Ok(Flat {
            width,
            height,
            pixels: bytes[..need].to_vec(),
        })
    }

    /// Encodes the flat; the output is exactly `width * height` bytes.
    ///
    /// Pixels are single palette indices, so unlike the map records
    /// there is nothing that can be out of range here.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.pixels.clone()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// All pixels, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Returns the palette index at (`x`, `y`), or `None` outside the
    /// flat.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }

    /// Mutable access to the palette index at (`x`, `y`).
    pub fn pixel_mut(&mut self, x: usize, y: usize) -> Option<&mut u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(&mut self.pixels[y * self.width + x])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flat_new_is_zero_filled() {
        let flat = Flat::new(64, 64);
        assert_eq!(flat.width(), 64);
        assert_eq!(flat.height(), 64);
        assert_eq!(flat.pixels().len(), 4096);
        assert_eq!(flat.pixel(63, 63), Some(0));
        assert_eq!(flat.pixel(64, 0), None);
    }

    #[test]
    fn test_flat_roundtrip() {
        let bytes: Vec<u8> = (0..=255).cycle().take(4096).collect();
        let flat = Flat::from_bytes(64, 64, &bytes).unwrap();
        assert_eq!(flat.to_bytes(), bytes);
        // Row-major: second row starts at index 64.
        assert_eq!(flat.pixel(0, 1), Some(64));
    }

    #[test]
    fn test_flat_short_buffer() {
        let err = Flat::from_bytes(64, 64, &[0u8; 4095]).unwrap_err();
        assert!(matches!(
            err,
            WadError::ShortBuffer { need: 4096, have: 4095 }
        ));
    }

    #[test]
    fn test_flat_ignores_trailing_bytes() {
        let mut bytes = vec![7u8; 16];
        bytes.extend_from_slice(&[1, 2, 3]);
        let flat = Flat::from_bytes(4, 4, &bytes).unwrap();
        assert_eq!(flat.to_bytes(), vec![7u8; 16]);
    }

    #[test]
    fn test_flat_pixel_mut() {
        let mut flat = Flat::new(4, 4);
        if let Some(p) = flat.pixel_mut(2, 3) {
            *p = 200;
        }
        assert_eq!(flat.pixel(2, 3), Some(200));
        assert!(flat.pixel_mut(4, 0).is_none());
    }
}
