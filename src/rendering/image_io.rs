//! Bridge between image files and the Oklab working buffer.

use std::path::Path;

use image::{imageops, imageops::FilterType, ImageFormat, Rgb, RgbImage};
use mosaic_quant::{LabImage, Oklab};

use crate::error::AppError;

/// Decode any format the `image` crate understands into 8-bit RGB.
pub fn load_image(path: &Path) -> Result<RgbImage, AppError> {
    let img = image::open(path)?.to_rgb8();
    tracing::debug!(
        path = %path.display(),
        width = img.width(),
        height = img.height(),
        "Loaded image"
    );
    Ok(img)
}

/// Target size whose long side is the largest multiple of `tiles` that
/// fits, with the short side scaled to match.
///
/// Images whose long side is shorter than `tiles` are returned unchanged;
/// the template rejects them later.
pub fn tile_aligned_size(width: u32, height: u32, tiles: u32) -> (u32, u32) {
    let long = width.max(height);
    if tiles == 0 || long < tiles {
        return (width, height);
    }
    let aligned = long - long % tiles;
    let scale = |side: u32| ((side as u64 * aligned as u64 / long as u64) as u32).max(1);
    if width >= height {
        (aligned, scale(height))
    } else {
        (scale(width), aligned)
    }
}

/// Resize so the long side divides evenly into `tiles`
pub fn resize_to_tiles(img: &RgbImage, tiles: u32) -> RgbImage {
    let (width, height) = tile_aligned_size(img.width(), img.height(), tiles);
    if (width, height) == img.dimensions() {
        return img.clone();
    }
    tracing::debug!(
        from_width = img.width(),
        from_height = img.height(),
        width,
        height,
        "Resizing to tile-aligned size"
    );
    imageops::resize(img, width, height, FilterType::Triangle)
}

pub fn to_lab_image(img: &RgbImage) -> LabImage {
    let mut lab = LabImage::filled(img.width(), img.height(), Oklab::ZERO);
    for (x, y, pixel) in img.enumerate_pixels() {
        lab.set(x, y, Oklab::from_srgb_bytes(pixel.0));
    }
    lab
}

pub fn from_lab_image(lab: &LabImage) -> RgbImage {
    RgbImage::from_fn(lab.width(), lab.height(), |x, y| {
        Rgb(lab.get(x, y).to_srgb_bytes())
    })
}

/// Extension to export with when none is asked for: the input's own, if
/// it names a format we can encode, else `jpg`.
pub fn default_image_ext(input: &Path) -> String {
    input
        .extension()
        .and_then(|e| e.to_str())
        .filter(|ext| {
            ImageFormat::from_extension(ext).is_some_and(|format| format.writing_enabled())
        })
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_else(|| "jpg".to_string())
}

/// Encode `img` in the format named by `path`'s extension
pub fn save_image(img: &RgbImage, path: &Path) -> Result<(), AppError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();
    let format = ImageFormat::from_extension(ext)
        .ok_or_else(|| AppError::UnsupportedFormat(ext.to_string()))?;
    img.save_with_format(path, format)?;
    tracing::debug!(path = %path.display(), ?format, "Wrote image");
    Ok(())
}
