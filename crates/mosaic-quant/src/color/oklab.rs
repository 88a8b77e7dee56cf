//! Oklab, the perceptual space every match and every error vector lives in.
//!
//! Björn Ottosson, "A perceptual color space for image processing",
//! <https://bottosson.github.io/posts/oklab/>.

use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

use super::rgb::{LinearRgb, Srgb};

/// A color (or a color difference) in Oklab.
///
/// `l` is lightness, `a` the green-red axis and `b` the blue-yellow axis.
/// Values are never clamped: targets carrying accumulated diffusion error
/// routinely leave the gamut, and the residual arithmetic depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Oklab {
    pub l: f32,
    pub a: f32,
    pub b: f32,
}

impl Oklab {
    /// Black, and the additive identity for error vectors.
    pub const ZERO: Oklab = Oklab {
        l: 0.0,
        a: 0.0,
        b: 0.0,
    };

    #[inline]
    pub fn new(l: f32, a: f32, b: f32) -> Self {
        Self { l, a, b }
    }

    /// Squared distance with the lightness term scaled by `luminance_weight`.
    ///
    /// `w * dL² + da² + db²`. A weight of 1.0 is plain squared Euclidean
    /// distance.
    ///
    /// ```
    /// use mosaic_quant::Oklab;
    ///
    /// let grey = Oklab::new(0.5, 0.0, 0.0);
    /// let white = Oklab::new(1.0, 0.0, 0.0);
    /// assert!((grey.weighted_distance(white, 1.0) - 0.25).abs() < 1e-6);
    /// assert!((grey.weighted_distance(white, 2.0) - 0.5).abs() < 1e-6);
    /// ```
    #[inline]
    pub fn weighted_distance(self, other: Oklab, luminance_weight: f32) -> f32 {
        let dl = self.l - other.l;
        let da = self.a - other.a;
        let db = self.b - other.b;
        luminance_weight * dl * dl + da * da + db * db
    }

    /// Sum of the absolute channel values. Used to compare error vectors.
    #[inline]
    pub fn magnitude(self) -> f32 {
        self.l.abs() + self.a.abs() + self.b.abs()
    }

    /// Convert 8-bit sRGB straight to Oklab.
    #[inline]
    pub fn from_srgb_bytes(bytes: [u8; 3]) -> Self {
        Oklab::from(LinearRgb::from(Srgb::from_bytes(bytes)))
    }

    /// Convert back to 8-bit sRGB, clamping anything out of gamut.
    #[inline]
    pub fn to_srgb_bytes(self) -> [u8; 3] {
        Srgb::from(LinearRgb::from(self)).to_bytes()
    }
}

impl Add for Oklab {
    type Output = Oklab;

    #[inline]
    fn add(self, o: Oklab) -> Oklab {
        Oklab::new(self.l + o.l, self.a + o.a, self.b + o.b)
    }
}

impl AddAssign for Oklab {
    #[inline]
    fn add_assign(&mut self, o: Oklab) {
        self.l += o.l;
        self.a += o.a;
        self.b += o.b;
    }
}

impl Sub for Oklab {
    type Output = Oklab;

    #[inline]
    fn sub(self, o: Oklab) -> Oklab {
        Oklab::new(self.l - o.l, self.a - o.a, self.b - o.b)
    }
}

impl Mul<f32> for Oklab {
    type Output = Oklab;

    #[inline]
    fn mul(self, k: f32) -> Oklab {
        Oklab::new(self.l * k, self.a * k, self.b * k)
    }
}

impl Sum for Oklab {
    fn sum<I: Iterator<Item = Oklab>>(iter: I) -> Oklab {
        iter.fold(Oklab::ZERO, |acc, c| acc + c)
    }
}

impl From<LinearRgb> for Oklab {
    /// Linear sRGB -> LMS -> cube root -> Lab (2021-01-25 matrices).
    fn from(c: LinearRgb) -> Self {
        let l = 0.4122214708 * c.r + 0.5363325363 * c.g + 0.0514459929 * c.b;
        let m = 0.2119034982 * c.r + 0.6806995451 * c.g + 0.1073969566 * c.b;
        let s = 0.0883024619 * c.r + 0.2817188376 * c.g + 0.6299787005 * c.b;

        let (l, m, s) = (l.cbrt(), m.cbrt(), s.cbrt());

        Oklab {
            l: 0.2104542553 * l + 0.7936177850 * m - 0.0040720468 * s,
            a: 1.9779984951 * l - 2.4285922050 * m + 0.4505937099 * s,
            b: 0.0259040371 * l + 0.7827717662 * m - 0.8086757660 * s,
        }
    }
}

impl From<Oklab> for LinearRgb {
    /// Inverse of `From<LinearRgb> for Oklab`. Not clamped.
    fn from(c: Oklab) -> Self {
        let l = c.l + 0.3963377774 * c.a + 0.2158037573 * c.b;
        let m = c.l - 0.1055613458 * c.a - 0.0638541728 * c.b;
        let s = c.l - 0.0894841775 * c.a - 1.2914855480 * c.b;

        let (l, m, s) = (l * l * l, m * m * m, s * s * s);

        LinearRgb {
            r: 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s,
            g: -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s,
            b: -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s,
        }
    }
}
