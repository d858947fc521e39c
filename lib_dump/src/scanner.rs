use std::iter::FusedIterator;

use log::{debug, trace};

use crate::image::format::{HeaderProbe, SpriteHeader};

/// A candidate sprite record found in a dump.
///
/// `bytes` borrows the record out of the source buffer. When the record runs
/// past the end of the buffer it is cut short, so `bytes.len()` may be smaller
/// than `length`; decoding such a record fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawRecord<'a> {
    pub offset: usize,
    pub length: usize,
    pub header: SpriteHeader,
    pub bytes: &'a [u8],
}

impl RawRecord<'_> {
    pub fn is_truncated(&self) -> bool {
        self.bytes.len() < self.length
    }

    /// First byte offset after the record.
    pub fn end(&self) -> usize {
        self.offset + self.length
    }
}

/// Walks a dump byte by byte looking for sprite headers.
///
/// Offsets are visited in increasing order. A miss advances the cursor by one
/// byte; a match advances it past the whole claimed record, so records never
/// overlap and the interior of a match is never probed again.
pub struct SpriteScanner<'a> {
    buf: &'a [u8],
    cursor: usize,
}

impl<'a> SpriteScanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, cursor: 0 }
    }

    /// The next offset that will be probed.
    pub fn position(&self) -> usize {
        self.cursor
    }
}

impl<'a> Iterator for SpriteScanner<'a> {
    type Item = RawRecord<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.buf.len() {
            let offset = self.cursor;

            let header = match SpriteHeader::probe(self.buf, offset) {
                HeaderProbe::Match(header) => header,
                HeaderProbe::Miss(reason) => {
                    trace!("No header at {:#x}: {:?}", offset, reason);
                    self.cursor += 1;
                    continue;
                }
            };

            let length = header.record_len();
            let available = self.buf.len().min(offset + length);
            let record = RawRecord {
                offset,
                length,
                header,
                bytes: &self.buf[offset..available],
            };
            self.cursor = record.end();

            debug!(
                "Header at {:#x}: {}x{}, {} colors, {} bytes",
                offset, header.width, header.height, header.palette_size, length
            );

            return Some(record);
        }

        None
    }
}

impl FusedIterator for SpriteScanner<'_> {}

/// Shorthand for [`SpriteScanner::new`].
pub fn scan(buf: &[u8]) -> SpriteScanner<'_> {
    SpriteScanner::new(buf)
}
