use super::format::DecodedSprite;
use crate::codec::{self, CodecError};
use crate::constants::HEADER_SIZE;
use crate::scanner::RawRecord;
use log::debug;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Record at {offset:#x} is truncated: expected {expected} bytes, {available} available")]
    TruncatedRecord {
        offset: usize,
        expected: usize,
        available: usize,
    },

    #[error("Decoding failed")]
    DecodingFailed(#[from] CodecError),
}

/// Decodes a scanned record into a sprite.
///
/// The record is rejected as a whole if it was cut short by the end of the
/// dump or if any pixel refers past the end of its palette.
pub fn decode(record: &RawRecord) -> Result<DecodedSprite, DecodeError> {
    let header = &record.header;

    if record.is_truncated() {
        return Err(DecodeError::TruncatedRecord {
            offset: record.offset,
            expected: record.length,
            available: record.bytes.len(),
        });
    }

    let palette_data = &record.bytes[HEADER_SIZE..header.header_len()];
    let pixel_data = &record.bytes[header.header_len()..record.length];
    debug!(
        "Decoding record at {:#x}: palette {} bytes, pixels {} bytes",
        record.offset,
        palette_data.len(),
        pixel_data.len()
    );

    let decoded = codec::decode(palette_data, pixel_data, header.depth())?;

    Ok(DecodedSprite::new(
        header.width,
        header.height,
        decoded.palette,
        decoded.rgba_data,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::pixels::PixelDecodeError;
    use crate::scanner::scan;

    #[test]
    fn test_decode_small_record() {
        // 4x2, two colors: blue then red
        let buf = [
            4, 2, 2, 0x00, 0x01, 0xFF, 0xF8, 0x00, 0x00, 0x1F, 0x10, 0x01, 0x00, 0x11,
        ];
        let record = scan(&buf).next().unwrap();
        let sprite = decode(&record).unwrap();

        assert_eq!(sprite.width, 4);
        assert_eq!(sprite.height, 2);
        assert_eq!(sprite.palette, vec![[0, 0, 255, 255], [255, 0, 0, 255]]);
        assert_eq!(sprite.rgba_data.len(), 4 * 2 * 4);
        assert_eq!(sprite.pixel(0, 0), Some([0, 0, 255, 255]));
        assert_eq!(sprite.pixel(1, 0), Some([255, 0, 0, 255]));
        assert_eq!(sprite.pixel(2, 0), Some([255, 0, 0, 255]));
        assert_eq!(sprite.pixel(3, 0), Some([0, 0, 255, 255]));
        assert_eq!(sprite.pixel(0, 1), Some([0, 0, 255, 255]));
        assert_eq!(sprite.pixel(3, 1), Some([255, 0, 0, 255]));
    }

    #[test]
    fn test_decode_rejects_bad_index() {
        let mut buf = vec![2, 2, 20, 0x00, 0x01, 0xFF];
        buf.extend(vec![0x00; 40]);
        buf.extend([0, 1, 2, 20]);

        let record = scan(&buf).next().unwrap();
        let result = decode(&record);
        assert_eq!(
            result,
            Err(DecodeError::DecodingFailed(CodecError::PixelDecodeFailed(
                PixelDecodeError::InvalidPaletteIndex {
                    index: 20,
                    position: 3,
                    palette_size: 20
                }
            )))
        );
    }

    #[test]
    fn test_decode_rejects_truncated() {
        let buf = [8, 8, 2, 0x00, 0x01, 0xFF, 0, 0, 0, 0, 0, 0];
        let record = scan(&buf).next().unwrap();

        assert!(matches!(
            decode(&record),
            Err(DecodeError::TruncatedRecord {
                offset: 0,
                expected: 42,
                available: 12
            })
        ));
    }
}
