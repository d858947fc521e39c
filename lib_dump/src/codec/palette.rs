use crate::constants::PALETTE_ENTRY_SIZE;

const FIVE_BIT_MAX: u32 = 0x1F;
const SIX_BIT_MAX: u32 = 0x3F;

/// Scales a channel of `max` levels to the 0..=255 range, rounding to nearest.
///
/// Both maxima used by the format are odd, so the exact quotient never lands
/// on a half step and the result agrees with any round-to-nearest rule.
pub fn scale_channel(value: u32, max: u32) -> u8 {
    ((value * 255 + max / 2) / max) as u8
}

/// Expands one packed 16-bit color word into RGBA.
///
/// Bit layout, most significant first: 5 bits blue, 6 bits green, 5 bits red.
/// Alpha is always opaque.
pub fn decode_color(word: u16) -> [u8; 4] {
    let word = word as u32;

    let blue = scale_channel((word >> 11) & FIVE_BIT_MAX, FIVE_BIT_MAX);
    let green = scale_channel((word >> 5) & SIX_BIT_MAX, SIX_BIT_MAX);
    let red = scale_channel(word & FIVE_BIT_MAX, FIVE_BIT_MAX);

    [red, green, blue, 255]
}

/// Decodes a palette table from its raw bytes.
///
/// # Parameters
/// - `bytes`: `count * 2` bytes, one big-endian word per entry.
///
/// # Returns
/// One RGBA color per word, in the order the words appear. A trailing odd
/// byte is ignored; the record decoder never hands one over.
pub fn decode_palette(bytes: &[u8]) -> Vec<[u8; 4]> {
    bytes
        .chunks_exact(PALETTE_ENTRY_SIZE)
        .map(|word| decode_color(u16::from_be_bytes([word[0], word[1]])))
        .collect()
}
