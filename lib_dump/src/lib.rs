pub mod codec;
pub mod constants;
pub mod extract;
pub mod image;
pub mod scanner;

use log::*;
use std::io::Write;

pub use crate::extract::{extract_sprites, ExtractOptions, ExtractedSprite, SpriteExtractor};
#[cfg(feature = "parallel")]
pub use crate::extract::extract_sprites_par;
pub use crate::image::format::{DecodedSprite, HeaderProbe, SpriteHeader};
pub use crate::image::{compose, decode};
pub use crate::scanner::{scan, RawRecord, SpriteScanner};

/// Sends log output to stderr. `RUST_LOG` overrides `level`.
pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(Some("lib_dump"), level)
        .filter(Some("dump_extract"), level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
