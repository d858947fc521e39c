use thiserror::Error;

use crate::constants::{BYTES_PER_PIXEL, NIBBLE_PALETTE_LIMIT};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PixelDecodeError {
    #[error("Invalid palette index: {index} at pixel #{position} exceeds palette size of {palette_size}")]
    InvalidPaletteIndex {
        index: usize,
        position: usize,
        palette_size: usize,
    },
}

/// How many palette indices one byte of pixel data carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelDepth {
    /// Two 4-bit indices per byte, low nibble first.
    Nibble,
    /// One 8-bit index per byte.
    Byte,
}

impl PixelDepth {
    /// Palettes of 16 colors or fewer are packed two pixels to a byte.
    pub fn for_palette(palette_size: usize) -> Self {
        if palette_size <= NIBBLE_PALETTE_LIMIT {
            PixelDepth::Nibble
        } else {
            PixelDepth::Byte
        }
    }

    pub fn pixels_per_byte(self) -> usize {
        match self {
            PixelDepth::Nibble => 2,
            PixelDepth::Byte => 1,
        }
    }

    /// Bytes needed to hold `pixel_count` indices at this depth.
    pub fn bytes_for(self, pixel_count: usize) -> usize {
        pixel_count.div_ceil(self.pixels_per_byte())
    }
}

/// Expands packed palette indices into RGBA pixel data.
///
/// # Parameters
/// - `palette`: the decoded palette table.
/// - `data`: the pixel index bytes.
/// - `depth`: how the indices are packed.
///
/// # Returns
/// Four bytes per decoded index, in stream order. Every byte of `data` is
/// expanded, so a nibble-packed stream yields `data.len() * 2` pixels.
///
/// # Errors
/// - Returns `PixelDecodeError::InvalidPaletteIndex` on the first index that is
///   not smaller than the palette size. Nothing is returned for the other pixels.
pub fn decode_pixels(
    palette: &[[u8; 4]],
    data: &[u8],
    depth: PixelDepth,
) -> Result<Vec<u8>, PixelDecodeError> {
    let mut decoded_pixels =
        Vec::with_capacity(data.len() * depth.pixels_per_byte() * BYTES_PER_PIXEL);

    let mut push = |index: u8, position: usize| -> Result<(), PixelDecodeError> {
        let color = palette
            .get(index as usize)
            .ok_or(PixelDecodeError::InvalidPaletteIndex {
                index: index as usize,
                position,
                palette_size: palette.len(),
            })?;
        decoded_pixels.extend_from_slice(color);
        Ok(())
    };

    match depth {
        PixelDepth::Nibble => {
            for (i, &byte) in data.iter().enumerate() {
                push(byte & 0x0F, i * 2)?;
                push(byte >> 4, i * 2 + 1)?;
            }
        }
        PixelDepth::Byte => {
            for (i, &byte) in data.iter().enumerate() {
                push(byte, i)?;
            }
        }
    }

    Ok(decoded_pixels)
}
