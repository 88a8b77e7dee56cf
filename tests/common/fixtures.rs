//! Test fixtures: catalog files and source images.

use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

pub const HEADER: &str = "id,name,rgb,hex,plate1x1,tile1x1,round1x1,round2x2\n";

/// A small catalog where every color comes in every shape
pub fn basic_catalog_csv() -> String {
    format!(
        "{HEADER}\
         1,White,\"242,243,242 #F2F3F2\",F2F3F2,+,+,+,+\n\
         26,Black,\"5,19,29 #05131D\",05131D,+,+,+,+\n\
         21,Bright Red,\"201,26,9 #C91A09\",C91A09,+,+,+,+\n\
         23,Bright Blue,\"0,85,191 #0055BF\",0055BF,+,+,+,+\n\
         24,Bright Yellow,\"242,205,55 #F2CD37\",F2CD37,+,+,+,+\n"
    )
}

/// Four colors, each available in exactly one shape
pub fn one_per_shape_csv() -> String {
    format!(
        "{HEADER}\
         1,White,\"242,243,242\",F2F3F2,+,-,-,-\n\
         26,Black,\"5,19,29\",05131D,-,+,-,-\n\
         21,Bright Red,\"201,26,9\",C91A09,-,-,+,-\n\
         23,Bright Blue,\"0,85,191\",0055BF,-,-,-,+\n"
    )
}

/// A catalog with no round colors at all
pub fn tiles_only_csv() -> String {
    format!(
        "{HEADER}\
         1,White,\"242,243,242\",F2F3F2,+,+,-,-\n\
         26,Black,\"5,19,29\",05131D,+,+,-,-\n"
    )
}

pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, content).unwrap();
    path
}

pub fn write_png(dir: &Path, name: &str, img: &RgbImage) -> PathBuf {
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Diagonal color ramp
pub fn gradient(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([
            (x * 255 / (width - 1).max(1)) as u8,
            (y * 255 / (height - 1).max(1)) as u8,
            128,
        ])
    })
}
