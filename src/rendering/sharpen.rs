use image::{imageops, DynamicImage, RgbImage};

/// Unsharp mask with a low-contrast threshold.
///
/// Works on the float sRGB image. Pixels that differ from their blurred
/// value by less than `threshold` are left alone, so flat areas do not
/// pick up noise; everything else is pushed away from the blur by
/// `amount`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnsharpMask {
    /// Gaussian sigma in pixels
    pub sigma: f32,
    /// Minimum |pixel - blurred| (0..1 scale) that gets sharpened
    pub threshold: f32,
    /// Sharpening strength; 1.0 doubles the local contrast
    pub amount: f32,
}

impl UnsharpMask {
    pub fn apply(&self, img: &RgbImage) -> RgbImage {
        let source = DynamicImage::ImageRgb8(img.clone()).into_rgb32f();
        let blurred = imageops::blur(&source, self.sigma);

        let mut out = RgbImage::new(img.width(), img.height());
        for ((src, blur), dst) in source.pixels().zip(blurred.pixels()).zip(out.pixels_mut()) {
            for c in 0..3 {
                let v = src[c];
                let b = blur[c];
                let sharpened = if (v - b).abs() < self.threshold {
                    v
                } else {
                    v * (1.0 + self.amount) - b * self.amount
                };
                dst[c] = (sharpened.clamp(0.0, 1.0) * 255.0).round() as u8;
            }
        }
        out
    }
}
