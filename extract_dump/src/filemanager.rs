use image::ImageError;
use lib_dump::constants::FILE_EXT;
use lib_dump::ExtractedSprite;
use log::info;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("IO error on {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("{} is empty", .0.display())]
    EmptyInput(PathBuf),

    #[error("Image encoding error: {0}")]
    Image(#[from] ImageError),
}

pub fn read_dump(path: &Path) -> Result<Vec<u8>, ExtractError> {
    let bytes = fs::read(path).map_err(|source| ExtractError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    if bytes.is_empty() {
        return Err(ExtractError::EmptyInput(path.to_path_buf()));
    }

    Ok(bytes)
}

/// Checks that `path` names an existing directory. An empty path means the
/// current directory.
pub fn output_dir(path: &Path) -> Result<PathBuf, ExtractError> {
    let dir = if path.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        path.to_path_buf()
    };

    let meta = fs::metadata(&dir).map_err(|source| ExtractError::Io {
        path: dir.clone(),
        source,
    })?;

    if !meta.is_dir() {
        return Err(ExtractError::NotADirectory(dir));
    }

    Ok(dir)
}

/// Name of the `index`th of `total` output files.
///
/// The index is zero padded to as many digits as `total` has. With
/// `with_address` the inclusive byte range of the record is appended in hex.
pub fn file_name(
    index: usize,
    total: usize,
    sprite: &ExtractedSprite,
    with_address: bool,
) -> String {
    let width = total.to_string().len();
    let mut name = format!("{:0width$}", index, width = width);

    if with_address {
        name.push_str(&format!("_{:#x}-{:#x}", sprite.offset, sprite.last_byte()));
    }

    format!("{}.{}", name, FILE_EXT)
}

/// Writes every sprite as a PNG into `dir`, returning the written paths.
pub fn save_sprites(
    dir: &Path,
    sprites: &[ExtractedSprite],
    with_address: bool,
) -> Result<Vec<PathBuf>, ExtractError> {
    let mut written = Vec::with_capacity(sprites.len());

    for (index, sprite) in sprites.iter().enumerate() {
        let path = dir.join(file_name(index, sprites.len(), sprite, with_address));
        info!("{}", path.display());

        sprite.raster.save(&path)?;
        written.push(path);
    }

    Ok(written)
}
