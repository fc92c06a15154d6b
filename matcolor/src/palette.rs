use rustc_hash::FxHashMap;

use crate::{Key, Rgba, TonalRamp};

/// One tonal ramp per key color.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Ramp of the primary key.
    pub primary: TonalRamp,
    /// Ramp of the secondary key.
    pub secondary: TonalRamp,
    /// Ramp of the tertiary key.
    pub tertiary: TonalRamp,
    /// Ramp of the error key.
    pub error: TonalRamp,
    /// Ramp for surfaces, backgrounds, shadow and scrim.
    pub neutral: TonalRamp,
    /// Ramp for surface variants, outlines and content on surfaces.
    pub neutral_variant: TonalRamp,
    /// Ramps for the key's custom accents, by the same names.
    pub custom: FxHashMap<String, TonalRamp>,
}

impl Palette {
    /// Anchors a ramp at the hue and chroma of every color in `key`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn new(key: &Key) -> Self {
        Self {
            primary: TonalRamp::from_key(key.primary),
            secondary: TonalRamp::from_key(key.secondary),
            tertiary: TonalRamp::from_key(key.tertiary),
            error: TonalRamp::from_key(key.error),
            neutral: TonalRamp::from_key(key.neutral),
            neutral_variant: TonalRamp::from_key(key.neutral_variant),
            custom: key
                .custom
                .iter()
                .map(|(name, color)| (name.clone(), TonalRamp::from_key(*color)))
                .collect(),
        }
    }

    /// Builds the palette for the key derived from `seed`.
    pub fn from_seed(seed: Rgba) -> Self {
        Self::new(&Key::from_primary(seed))
    }
}

impl From<&Key> for Palette {
    fn from(key: &Key) -> Self {
        Self::new(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HctColor, key::ERROR_KEY};

    #[test]
    fn test_ramps_follow_key_hue_and_chroma() {
        let key = Key::from_primary(Rgba::from_rgb(0x67, 0x50, 0xA4));
        let palette = Palette::new(&key);
        let pairs = [
            (palette.primary, key.primary),
            (palette.secondary, key.secondary),
            (palette.tertiary, key.tertiary),
            (palette.error, key.error),
            (palette.neutral, key.neutral),
            (palette.neutral_variant, key.neutral_variant),
        ];
        for (ramp, color) in pairs {
            let hct = HctColor::from_rgba(color);
            assert_eq!(ramp.hue(), hct.hue);
            assert_eq!(ramp.chroma(), hct.chroma);
        }
    }

    #[test]
    fn test_error_ramp_is_shared() {
        let blue = Palette::from_seed(Rgba::from_rgb(0, 0, 255));
        let green = Palette::from_seed(Rgba::from_rgb(0, 200, 0));
        assert_eq!(blue.error, green.error);
        assert_eq!(blue.error, TonalRamp::from_key(ERROR_KEY));
        assert_ne!(blue.primary, green.primary);
    }

    #[test]
    fn test_custom_ramps_are_passed_through() {
        let accent = Rgba::from_rgb(0xFF, 0x98, 0x00);
        let key = Key::from_primary(Rgba::from_rgb(0, 0, 255)).with_custom("warning", accent);
        let palette = Palette::from(&key);
        assert_eq!(palette.custom.len(), 1);
        assert_eq!(palette.custom["warning"], TonalRamp::from_key(accent));
        assert!(Palette::from_seed(Rgba::BLACK).custom.is_empty());
    }
}
