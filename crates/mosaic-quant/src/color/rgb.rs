//! Gamma-encoded and linear RGB.

use super::gamma;

/// Gamma-encoded sRGB, channels in 0.0..=1.0.
///
/// This is the source encoding of catalog swatches and of image files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Srgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Srgb {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    /// Build from 8-bit channels `[R, G, B]`.
    #[inline]
    pub fn from_bytes(bytes: [u8; 3]) -> Self {
        Self {
            r: bytes[0] as f32 / 255.0,
            g: bytes[1] as f32 / 255.0,
            b: bytes[2] as f32 / 255.0,
        }
    }

    /// Round and clamp to 8-bit channels `[R, G, B]`.
    #[inline]
    pub fn to_bytes(self) -> [u8; 3] {
        let q = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        [q(self.r), q(self.g), q(self.b)]
    }
}

impl From<LinearRgb> for Srgb {
    /// Gamma-encode. Out-of-gamut channels are clamped to 0..=1 first.
    fn from(c: LinearRgb) -> Self {
        Self {
            r: gamma::encode(c.r),
            g: gamma::encode(c.g),
            b: gamma::encode(c.b),
        }
    }
}

/// Linear-light RGB. May leave 0..=1 when produced from an out-of-gamut
/// perceptual color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearRgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl LinearRgb {
    #[inline]
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl From<Srgb> for LinearRgb {
    fn from(c: Srgb) -> Self {
        Self {
            r: gamma::decode(c.r),
            g: gamma::decode(c.g),
            b: gamma::decode(c.b),
        }
    }
}
