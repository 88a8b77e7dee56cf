//! Image file handling around the quantizer: decode, tile-aligned resize,
//! sharpening, conversion to and from Oklab, encode.

pub mod image_io;
pub mod sharpen;

pub use image_io::{
    default_image_ext, from_lab_image, load_image, resize_to_tiles, save_image, tile_aligned_size, to_lab_image,
};
pub use sharpen::UnsharpMask;
