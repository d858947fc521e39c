use crate::codec::pixels::PixelDepth;
use crate::constants::{
    BYTES_PER_PIXEL, HEADER_SIZE, MAX_DIMENSION, MIN_RECORD_SIZE, PALETTE_ENTRY_SIZE, SIGNATURE,
};

/// The fixed six byte prefix of a sprite record.
///
/// ```text
/// offset  size  field
/// 0x00    1     width            (1..=128)
/// 0x01    1     height           (1..=128)
/// 0x02    1     palette entries  (> 0)
/// 0x03    3     signature        00 01 FF
/// ```
///
/// The palette (`palette_size * 2` bytes) and the pixel indices follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpriteHeader {
    pub width: u8,
    pub height: u8,
    pub palette_size: u8,
}

/// Why a byte offset does not start a sprite header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeMiss {
    /// Fewer than the minimum record size remain in the buffer.
    TooShort,
    /// Width or height is zero or larger than the maximum.
    Dimensions,
    /// The header declares no palette entries.
    EmptyPalette,
    /// The three marker bytes do not match.
    Signature,
}

/// Outcome of testing a byte offset for a sprite header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderProbe {
    Match(SpriteHeader),
    Miss(ProbeMiss),
}

impl SpriteHeader {
    /// Tests whether a sprite header starts at `offset` in `buf`.
    pub fn probe(buf: &[u8], offset: usize) -> HeaderProbe {
        if buf.len().saturating_sub(offset) < MIN_RECORD_SIZE {
            return HeaderProbe::Miss(ProbeMiss::TooShort);
        }

        let header = &buf[offset..offset + HEADER_SIZE];
        let (width, height, palette_size) = (header[0], header[1], header[2]);

        if !(1..=MAX_DIMENSION).contains(&width) || !(1..=MAX_DIMENSION).contains(&height) {
            return HeaderProbe::Miss(ProbeMiss::Dimensions);
        }
        if palette_size == 0 {
            return HeaderProbe::Miss(ProbeMiss::EmptyPalette);
        }
        if header[3..HEADER_SIZE] != SIGNATURE {
            return HeaderProbe::Miss(ProbeMiss::Signature);
        }

        HeaderProbe::Match(SpriteHeader {
            width,
            height,
            palette_size,
        })
    }

    pub fn depth(&self) -> PixelDepth {
        PixelDepth::for_palette(self.palette_size as usize)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Size of the palette table in bytes.
    pub fn palette_len(&self) -> usize {
        self.palette_size as usize * PALETTE_ENTRY_SIZE
    }

    /// Size of the header plus palette table.
    pub fn header_len(&self) -> usize {
        HEADER_SIZE + self.palette_len()
    }

    pub fn pixel_data_len(&self) -> usize {
        self.depth().bytes_for(self.pixel_count())
    }

    /// Total number of bytes the record claims, header included.
    pub fn record_len(&self) -> usize {
        self.header_len() + self.pixel_data_len()
    }
}

/// A fully decoded sprite. `rgba_data` holds exactly `width * height` pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedSprite {
    pub width: u8,
    pub height: u8,
    pub palette: Vec<[u8; 4]>,
    pub rgba_data: Vec<u8>,
}

impl DecodedSprite {
    pub fn new(width: u8, height: u8, palette: Vec<[u8; 4]>, mut rgba_data: Vec<u8>) -> Self {
        // A nibble-packed odd pixel count leaves one padding pixel at the end.
        rgba_data.truncate(width as usize * height as usize * BYTES_PER_PIXEL);
        Self {
            width,
            height,
            palette,
            rgba_data,
        }
    }
}

#[cfg(test)]
impl DecodedSprite {
    pub(crate) fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width as u32 || y >= self.height as u32 {
            return None;
        }
        let start = (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL;
        let pixel = self.rgba_data.get(start..start + BYTES_PER_PIXEL)?;
        Some([pixel[0], pixel[1], pixel[2], pixel[3]])
    }
}
