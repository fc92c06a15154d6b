//! Key colors: one anchor color per scheme axis.

use rustc_hash::FxHashMap;

use crate::{HctColor, Rgba};

/// Tone every derived key color is pinned to.
pub const KEY_TONE: f64 = 40.0;
/// Lowest chroma requested for the primary key; out-of-gamut requests are
/// reduced to the sRGB boundary.
pub const MIN_PRIMARY_CHROMA: f64 = 48.0;
/// Chroma of the secondary key.
pub const SECONDARY_CHROMA: f64 = 16.0;
/// Hue offset of the tertiary key relative to the primary hue, in degrees.
///
/// Negative on purpose: a blue seed yields a green-cyan tertiary instead of a
/// pink one.
pub const TERTIARY_HUE_SHIFT: f64 = -60.0;
/// Chroma of the tertiary key.
pub const TERTIARY_CHROMA: f64 = 24.0;
/// Chroma of the neutral key.
pub const NEUTRAL_CHROMA: f64 = 4.0;
/// Chroma of the neutral variant key.
pub const NEUTRAL_VARIANT_CHROMA: f64 = 8.0;
/// The error key shared by every derived key (#B3261E).
pub const ERROR_KEY: Rgba = Rgba::from_rgb(0xB3, 0x26, 0x1E);

/// The set of key colors a [`Palette`](crate::Palette) is generated from.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Key {
    /// The primary accent key color.
    pub primary: Rgba,
    /// The secondary accent key color.
    pub secondary: Rgba,
    /// The tertiary accent key color.
    pub tertiary: Rgba,
    /// The error accent key color.
    pub error: Rgba,
    /// The neutral key color used for surfaces and surface containers.
    pub neutral: Rgba,
    /// The neutral variant key color used for surface variants and outlines.
    pub neutral_variant: Rgba,
    /// Custom accent key colors by name. Carried into the palette only.
    #[cfg_attr(feature = "serde", serde(default))]
    pub custom: FxHashMap<String, Rgba>,
}

impl Key {
    /// Creates a key from six independently chosen colors.
    pub fn new(
        primary: Rgba,
        secondary: Rgba,
        tertiary: Rgba,
        error: Rgba,
        neutral: Rgba,
        neutral_variant: Rgba,
    ) -> Self {
        Self {
            primary,
            secondary,
            tertiary,
            error,
            neutral,
            neutral_variant,
            custom: FxHashMap::default(),
        }
    }

    /// Derives all six key colors from a single seed color.
    #[tracing::instrument(level = "trace")]
    pub fn from_primary(seed: Rgba) -> Self {
        Self::from_hct(HctColor::from_rgba(seed))
    }

    /// Derives all six key colors from a seed already in hue/chroma/tone form.
    ///
    /// Only the hue and chroma of `seed` matter.
    pub fn from_hct(seed: HctColor) -> Self {
        let anchor = seed.with_tone(KEY_TONE);
        let hue = anchor.hue;
        Self::new(
            anchor.with_chroma(primary_chroma(anchor.chroma)).to_rgba(),
            anchor.with_chroma(SECONDARY_CHROMA).to_rgba(),
            HctColor::new(tertiary_hue(hue), TERTIARY_CHROMA, KEY_TONE).to_rgba(),
            ERROR_KEY,
            anchor.with_chroma(NEUTRAL_CHROMA).to_rgba(),
            anchor.with_chroma(NEUTRAL_VARIANT_CHROMA).to_rgba(),
        )
    }

    /// Returns a copy of this key with a custom accent added or replaced.
    pub fn with_custom(mut self, name: impl Into<String>, color: Rgba) -> Self {
        self.custom.insert(name.into(), color);
        self
    }
}

/// Chroma requested for the primary key given the seed's chroma.
pub fn primary_chroma(seed_chroma: f64) -> f64 {
    seed_chroma.max(MIN_PRIMARY_CHROMA)
}

/// Hue of the tertiary key given the primary hue, in `[0, 360)`.
pub fn tertiary_hue(primary_hue: f64) -> f64 {
    HctColor::new(primary_hue + TERTIARY_HUE_SHIFT, 0.0, 0.0).hue
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hct::hue_difference;

    const SEEDS: [Rgba; 6] = [
        Rgba::from_rgb(0, 0, 255),
        Rgba::from_rgb(0x67, 0x50, 0xA4),
        Rgba::from_rgb(255, 0, 0),
        Rgba::from_rgb(0x80, 0x80, 0x80),
        Rgba::from_rgb(0x20, 0xC0, 0x40),
        Rgba::new(250, 220, 10, 40),
    ];

    #[test]
    fn test_derivation_is_deterministic() {
        for seed in SEEDS {
            assert_eq!(Key::from_primary(seed), Key::from_primary(seed));
        }
    }

    #[test]
    fn test_error_key_ignores_seed() {
        for seed in SEEDS {
            assert_eq!(Key::from_primary(seed).error, ERROR_KEY);
        }
    }

    #[test]
    fn test_primary_chroma_has_a_floor() {
        assert_eq!(primary_chroma(10.0), 48.0);
        assert_eq!(primary_chroma(0.0), 48.0);
        assert_eq!(primary_chroma(48.0), 48.0);
        assert_eq!(primary_chroma(80.0), 80.0);
    }

    #[test]
    fn test_primary_floor_is_capped_by_gamut() {
        // hue ~198 cannot reach chroma 48 at tone 40 inside sRGB
        let seed = Rgba::from_rgb(51, 68, 68);
        assert_eq!(
            primary_chroma(HctColor::from_rgba(seed).chroma),
            MIN_PRIMARY_CHROMA
        );
        let stored = HctColor::from_rgba(Key::from_primary(seed).primary);
        assert!(stored.chroma < MIN_PRIMARY_CHROMA, "{stored:?}");
        assert!((stored.tone - KEY_TONE).abs() < 1.0, "{stored:?}");
    }

    #[test]
    fn test_tertiary_hue_shifts_down_by_sixty() {
        assert_eq!(tertiary_hue(282.0), 222.0);
        assert_eq!(tertiary_hue(60.0), 0.0);
        assert_eq!(tertiary_hue(30.0), 330.0);
        assert_eq!(tertiary_hue(0.0), 300.0);
    }

    #[test]
    fn test_keys_share_seed_hue() {
        let seed = HctColor::from_rgba(Rgba::from_rgb(0, 0, 255));
        let key = Key::from_primary(Rgba::from_rgb(0, 0, 255));
        for color in [key.primary, key.secondary] {
            let hue = HctColor::from_rgba(color).hue;
            assert!(hue_difference(seed.hue, hue).abs() < 5.0, "hue {hue}");
        }
        let tertiary = HctColor::from_rgba(key.tertiary).hue;
        assert!(
            (hue_difference(seed.hue, tertiary) - TERTIARY_HUE_SHIFT).abs() < 5.0,
            "tertiary hue {tertiary}"
        );
    }

    #[test]
    fn test_keys_sit_at_key_tone() {
        let key = Key::from_primary(Rgba::from_rgb(0x67, 0x50, 0xA4));
        for color in [
            key.primary,
            key.secondary,
            key.tertiary,
            key.neutral,
            key.neutral_variant,
        ] {
            let tone = HctColor::from_rgba(color).tone;
            assert!((tone - KEY_TONE).abs() < 1.0, "tone {tone}");
            assert_eq!(color.a, 255);
        }
    }

    #[test]
    fn test_seed_tone_is_discarded() {
        let light = HctColor::new(282.0, 30.0, 90.0);
        let dark = light.with_tone(15.0);
        assert_eq!(Key::from_hct(light), Key::from_hct(dark));
    }

    #[test]
    fn test_custom_entries() {
        let accent = Rgba::from_rgb(0xFF, 0x98, 0x00);
        let key = Key::from_primary(SEEDS[0])
            .with_custom("warning", Rgba::BLACK)
            .with_custom("warning", accent);
        assert_eq!(key.custom.len(), 1);
        assert_eq!(key.custom.get("warning"), Some(&accent));
        assert!(Key::from_primary(SEEDS[0]).custom.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_key_deserializes_without_custom() {
        let json = r##"{
            "primary": "#0000FF",
            "secondary": "#445566",
            "tertiary": "#336655",
            "error": "#B3261E",
            "neutral": "#5E5E62",
            "neutral_variant": "#5B5D6A"
        }"##;
        let key: Key = serde_json::from_str(json).unwrap();
        assert_eq!(key.primary, Rgba::from_rgb(0, 0, 255));
        assert_eq!(key.error, ERROR_KEY);
        assert!(key.custom.is_empty());
    }
}
