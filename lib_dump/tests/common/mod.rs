#![allow(dead_code)]

/// Assembles sprite records byte by byte.
pub struct SpriteBuilder {
    width: u8,
    height: u8,
    palette: Vec<u16>,
    pixels: Vec<u8>,
}

impl SpriteBuilder {
    pub fn new(width: u8, height: u8) -> Self {
        Self {
            width,
            height,
            palette: Vec::new(),
            pixels: Vec::new(),
        }
    }

    pub fn palette(mut self, words: &[u16]) -> Self {
        self.palette = words.to_vec();
        self
    }

    /// Raw pixel index bytes, already packed.
    pub fn pixels(mut self, bytes: &[u8]) -> Self {
        self.pixels = bytes.to_vec();
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut bytes = vec![
            self.width,
            self.height,
            self.palette.len() as u8,
            0x00,
            0x01,
            0xFF,
        ];
        for word in &self.palette {
            bytes.extend_from_slice(&word.to_be_bytes());
        }
        bytes.extend_from_slice(&self.pixels);
        bytes
    }
}

pub const BLUE_565: u16 = 0xF800;
pub const GREEN_565: u16 = 0x07E0;
pub const RED_565: u16 = 0x001F;
pub const WHITE_565: u16 = 0xFFFF;

/// Bytes that never contain the header signature.
pub fn noise(len: usize) -> Vec<u8> {
    (0..len).map(|i| 0x80 | (i as u8 & 0x7F)).collect()
}
