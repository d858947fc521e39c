pub mod palette;
pub mod pixels;

use log::debug;
use pixels::{PixelDecodeError, PixelDepth};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CodecError {
    #[error("Pixel decoding failed")]
    PixelDecodeFailed(#[from] PixelDecodeError),
}

/// The palette table and the expanded pixels of one record.
pub struct CodecResult {
    pub palette: Vec<[u8; 4]>,
    pub rgba_data: Vec<u8>,
}

/// Runs both decoding stages over the palette and pixel sections of a record.
pub fn decode(
    palette_data: &[u8],
    pixel_data: &[u8],
    depth: PixelDepth,
) -> Result<CodecResult, CodecError> {
    // Step 1: Palette expansion
    let palette = palette::decode_palette(palette_data);
    debug!("Palette decoded: {} colors", palette.len());

    // Step 2: Index expansion to RGBA
    let rgba_data = pixels::decode_pixels(&palette, pixel_data, depth)?;
    debug!(
        "Pixels decoded: {} bytes of indices into {} bytes of RGBA",
        pixel_data.len(),
        rgba_data.len()
    );

    Ok(CodecResult { palette, rgba_data })
}
