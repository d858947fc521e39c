use image::{Rgba, RgbaImage};

use super::format::DecodedSprite;
use crate::constants::{BYTES_PER_PIXEL, COLOR_KEY_GREEN, COLOR_KEY_RED};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompositeOptions {
    /// Keep the green color key opaque instead of turning it transparent.
    pub preserve_color_key_alpha: bool,
}

/// Opaque pure green, whatever the blue channel holds.
pub fn is_color_key(pixel: [u8; 4]) -> bool {
    let [r, g, _, a] = pixel;
    r == COLOR_KEY_RED && g == COLOR_KEY_GREEN && a == 255
}

/// Lays a sprite out on a raster of its own size.
pub fn compose(sprite: &DecodedSprite, options: CompositeOptions) -> RgbaImage {
    compose_pixels(
        sprite.width as u32,
        sprite.height as u32,
        &sprite.rgba_data,
        options,
    )
}

/// Lays flat RGBA data out row by row on a `width` x `height` raster.
///
/// Pixels past the end of `rgba_data` come out as transparent black. Unless
/// `options.preserve_color_key_alpha` is set, color key pixels get alpha 0.
pub fn compose_pixels(
    width: u32,
    height: u32,
    rgba_data: &[u8],
    options: CompositeOptions,
) -> RgbaImage {
    let mut image = RgbaImage::new(width, height);

    for (x, y, pixel) in image.enumerate_pixels_mut() {
        let start = (y as usize * width as usize + x as usize) * BYTES_PER_PIXEL;
        let Some(source) = rgba_data.get(start..start + BYTES_PER_PIXEL) else {
            // RgbaImage::new already zeroed it
            continue;
        };

        let mut color = [source[0], source[1], source[2], source[3]];
        if !options.preserve_color_key_alpha && is_color_key(color) {
            color[3] = 0;
        }
        *pixel = Rgba(color);
    }

    image
}
