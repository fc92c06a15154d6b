//! Hue/chroma/tone points and tonal ramps.
//!
//! Thin value types over [`material_color_utilities::hct::Hct`], which owns the
//! color appearance model and gamut mapping.

use material_color_utilities::hct::Hct;

use crate::Rgba;

/// Highest tone a ramp can be evaluated at (white).
pub const MAX_TONE: u8 = 100;

/// A color expressed as hue (degrees), chroma and tone (0 black, 100 white).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HctColor {
    /// Hue angle in degrees, normalized to `[0, 360)`.
    pub hue: f64,
    /// Colorfulness. Unbounded; out-of-gamut values are reduced on conversion.
    pub chroma: f64,
    /// Perceptual lightness in `[0, 100]`.
    pub tone: f64,
}

impl HctColor {
    /// Creates a point, normalizing `hue` into `[0, 360)`.
    pub fn new(hue: f64, chroma: f64, tone: f64) -> Self {
        Self {
            hue: sanitize_degrees(hue),
            chroma,
            tone,
        }
    }

    /// Converts an sRGB color. Alpha is discarded.
    pub fn from_rgba(color: Rgba) -> Self {
        let hct = Hct::from_int(color.to_argb());
        Self::new(hct.hue(), hct.chroma(), hct.tone())
    }

    /// Returns the point with `hue` replaced (and normalized).
    pub fn with_hue(self, hue: f64) -> Self {
        Self::new(hue, self.chroma, self.tone)
    }

    /// Returns the point with `chroma` replaced.
    pub fn with_chroma(self, chroma: f64) -> Self {
        Self { chroma, ..self }
    }

    /// Returns the point with `tone` replaced.
    pub fn with_tone(self, tone: f64) -> Self {
        Self { tone, ..self }
    }

    /// Projects the point back to an opaque sRGB color.
    ///
    /// Hue and tone are preserved; chroma is reduced as far as needed to land
    /// inside the sRGB gamut.
    pub fn to_rgba(self) -> Rgba {
        Rgba::from_argb(Hct::from(self.hue, self.chroma, self.tone).to_int())
    }
}

impl From<Rgba> for HctColor {
    fn from(color: Rgba) -> Self {
        Self::from_rgba(color)
    }
}

/// All colors of one hue and chroma, addressed by tone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TonalRamp {
    hue: f64,
    chroma: f64,
}

impl TonalRamp {
    /// Anchors a ramp at `hue` (degrees, normalized) and `chroma`.
    pub fn new(hue: f64, chroma: f64) -> Self {
        Self {
            hue: sanitize_degrees(hue),
            chroma,
        }
    }

    /// Anchors a ramp at the hue and chroma of `key`; its tone is ignored.
    pub fn from_key(key: Rgba) -> Self {
        let hct = HctColor::from_rgba(key);
        Self::new(hct.hue, hct.chroma)
    }

    /// Hue of every color on the ramp.
    pub fn hue(&self) -> f64 {
        self.hue
    }

    /// Requested chroma; dark and light tones may render with less.
    pub fn chroma(&self) -> f64 {
        self.chroma
    }

    /// Returns the ramp color at `tone`. Tones above [`MAX_TONE`] are clamped.
    pub fn tone(&self, tone: u8) -> Rgba {
        debug_assert!(tone <= MAX_TONE, "tone {tone} is outside 0..=100");
        HctColor::new(self.hue, self.chroma, f64::from(tone.min(MAX_TONE))).to_rgba()
    }
}

fn sanitize_degrees(degrees: f64) -> f64 {
    let degrees = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if degrees >= 360.0 { 0.0 } else { degrees }
}

/// Smallest signed difference `to - from` in degrees, in `(-180, 180]`.
#[cfg(test)]
pub(crate) fn hue_difference(from: f64, to: f64) -> f64 {
    let diff = (to - from).rem_euclid(360.0);
    if diff > 180.0 { diff - 360.0 } else { diff }
}
