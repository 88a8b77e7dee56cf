//! Row-major Oklab pixel buffer.

use crate::color::Oklab;

/// An image held in Oklab, one pixel per entry, row-major.
///
/// This is the working buffer of a pass: the aggregator reads from it and
/// the quantizer overwrites every covered pixel with its chosen swatch.
#[derive(Debug, Clone, PartialEq)]
pub struct LabImage {
    width: u32,
    height: u32,
    pixels: Vec<Oklab>,
}

impl LabImage {
    /// Wrap an existing pixel vector.
    ///
    /// Returns `None` unless `pixels.len() == width * height`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Oklab>) -> Option<Self> {
        if pixels.len() != width as usize * height as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// An image of one flat color.
    pub fn filled(width: u32, height: u32, color: Oklab) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; width as usize * height as usize],
        }
    }

    /// Convert packed 8-bit RGB (`[r, g, b, r, g, b, ...]`).
    ///
    /// Returns `None` unless `bytes.len() == width * height * 3`.
    ///
    /// ```
    /// use mosaic_quant::LabImage;
    ///
    /// let img = LabImage::from_srgb_bytes(2, 1, &[255, 0, 0, 0, 0, 255]).unwrap();
    /// assert_eq!(img.width(), 2);
    /// assert!(img.get(0, 0).a > 0.0);
    /// assert!(LabImage::from_srgb_bytes(2, 2, &[0; 6]).is_none());
    /// ```
    pub fn from_srgb_bytes(width: u32, height: u32, bytes: &[u8]) -> Option<Self> {
        if bytes.len() != width as usize * height as usize * 3 {
            return None;
        }
        let pixels = bytes
            .chunks_exact(3)
            .map(|p| Oklab::from_srgb_bytes([p[0], p[1], p[2]]))
            .collect();
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Pack back into 8-bit RGB, clamping out-of-gamut pixels.
    pub fn to_srgb_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 3);
        for p in &self.pixels {
            out.extend_from_slice(&p.to_srgb_bytes());
        }
        out
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn long_side(&self) -> u32 {
        self.width.max(self.height)
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Oklab {
        self.pixels[self.offset(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, color: Oklab) {
        let i = self.offset(x, y);
        self.pixels[i] = color;
    }

    pub fn pixels(&self) -> &[Oklab] {
        &self.pixels
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }
}
