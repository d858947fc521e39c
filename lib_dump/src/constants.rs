pub const FORMAT_NAME: &str = "Packed palette sprite";
pub const FILE_EXT: &str = "png";

/// Width, height, palette entry count and the three marker bytes.
pub const HEADER_SIZE: usize = 6;

/// The marker bytes found at offsets 3..6 of every sprite header.
pub const SIGNATURE: [u8; 3] = [0x00, 0x01, 0xFF];

/// Largest width or height a sprite header may declare.
pub const MAX_DIMENSION: u8 = 128;

/// Bytes that must remain from a candidate offset before the header is probed:
/// the header plus room for one palette entry and some pixel data.
pub const MIN_RECORD_SIZE: usize = 10;

/// Each palette entry is a big-endian 16-bit word.
pub const PALETTE_ENTRY_SIZE: usize = 2;

/// Palettes of this many colors or fewer pack two pixels per byte.
pub const NIBBLE_PALETTE_LIMIT: usize = 16;

pub const BYTES_PER_PIXEL: usize = 4;

/// The color key: pure green at full opacity, blue is ignored.
pub const COLOR_KEY_RED: u8 = 0;
pub const COLOR_KEY_GREEN: u8 = 255;
