use image::RgbaImage;
use log::{debug, info};

use crate::image::format::DecodedSprite;
use crate::image::{compose, decode, CompositeOptions};
use crate::scanner::{RawRecord, SpriteScanner};

/// Settings for a whole extraction run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Render the green color key as stored instead of transparent.
    pub preserve_color_key_alpha: bool,
}

impl ExtractOptions {
    pub fn with_preserve_color_key_alpha(mut self, preserve: bool) -> Self {
        self.preserve_color_key_alpha = preserve;
        self
    }

    fn composite(&self) -> CompositeOptions {
        CompositeOptions {
            preserve_color_key_alpha: self.preserve_color_key_alpha,
        }
    }
}

/// A sprite that decoded cleanly, ready to be written out.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedSprite {
    /// Byte offset of the record in the dump.
    pub offset: usize,
    /// Bytes the record occupies in the dump.
    pub length: usize,
    pub raster: RgbaImage,
}

impl ExtractedSprite {
    pub fn width(&self) -> u32 {
        self.raster.width()
    }

    pub fn height(&self) -> u32 {
        self.raster.height()
    }

    /// Offset of the last byte of the record.
    pub fn last_byte(&self) -> usize {
        self.offset + self.length - 1
    }
}

/// Running totals of an extraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExtractStats {
    pub candidates: usize,
    pub rejected: usize,
}

impl ExtractStats {
    pub fn decoded(&self) -> usize {
        self.candidates - self.rejected
    }
}

/// Scans a dump and yields every candidate that decodes, in dump order.
///
/// Candidates that fail to decode are dropped; scanning carries on past their
/// full claimed length.
pub struct SpriteExtractor<'a> {
    scanner: SpriteScanner<'a>,
    options: ExtractOptions,
    stats: ExtractStats,
}

impl<'a> SpriteExtractor<'a> {
    pub fn new(buf: &'a [u8], options: ExtractOptions) -> Self {
        Self {
            scanner: SpriteScanner::new(buf),
            options,
            stats: ExtractStats::default(),
        }
    }

    pub fn stats(&self) -> ExtractStats {
        self.stats
    }
}

impl Iterator for SpriteExtractor<'_> {
    type Item = ExtractedSprite;

    fn next(&mut self) -> Option<Self::Item> {
        for record in self.scanner.by_ref() {
            self.stats.candidates += 1;

            match render(&record, self.options) {
                Some(sprite) => return Some(sprite),
                None => self.stats.rejected += 1,
            }
        }

        None
    }
}

fn render(record: &RawRecord, options: ExtractOptions) -> Option<ExtractedSprite> {
    let sprite: DecodedSprite = match decode(record) {
        Ok(sprite) => sprite,
        Err(err) => {
            debug!("Dropping record at {:#x}: {}", record.offset, err);
            return None;
        }
    };

    Some(ExtractedSprite {
        offset: record.offset,
        length: record.length,
        raster: compose(&sprite, options.composite()),
    })
}

/// Extracts every decodable sprite from a dump, in dump order.
pub fn extract_sprites(buf: &[u8], options: &ExtractOptions) -> Vec<ExtractedSprite> {
    let mut extractor = SpriteExtractor::new(buf, *options);
    let sprites: Vec<_> = extractor.by_ref().collect();

    let stats = extractor.stats();
    info!(
        "Scanned {} bytes: {} candidates, {} decoded, {} rejected",
        buf.len(),
        stats.candidates,
        stats.decoded(),
        stats.rejected
    );

    sprites
}

/// Same output as [`extract_sprites`], with decoding spread over the rayon pool.
///
/// Scanning stays sequential since each match decides where the next probe
/// starts. The indexed parallel collect keeps the results in dump order.
#[cfg(feature = "parallel")]
pub fn extract_sprites_par(buf: &[u8], options: &ExtractOptions) -> Vec<ExtractedSprite> {
    use rayon::prelude::*;

    let records: Vec<RawRecord> = SpriteScanner::new(buf).collect();
    let candidates = records.len();

    let sprites: Vec<ExtractedSprite> = records
        .par_iter()
        .map(|record| render(record, *options))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect();

    info!(
        "Scanned {} bytes: {} candidates, {} decoded, {} rejected",
        buf.len(),
        candidates,
        sprites.len(),
        candidates - sprites.len()
    );

    sprites
}
