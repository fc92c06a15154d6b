use crate::{AccentTones, Rgba, TonalRamp};

/// The four roles derived from one accent ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accent {
    /// The base color applied to emphasized elements.
    pub base: Rgba,
    /// Content drawn on top of `base`.
    pub on: Rgba,
    /// A lower-emphasis fill for elements in this accent.
    pub container: Rgba,
    /// Content drawn on top of `container`.
    pub on_container: Rgba,
}

impl Accent {
    /// Reads the four roles off `ramp` at `tones`.
    pub fn from_ramp(ramp: &TonalRamp, tones: &AccentTones) -> Self {
        Self {
            base: ramp.tone(tones.base),
            on: ramp.tone(tones.on),
            container: ramp.tone(tones.container),
            on_container: ramp.tone(tones.on_container),
        }
    }

    /// Returns the content color for `background` if it is this accent's
    /// base or container.
    pub fn content_color_for(&self, background: Rgba) -> Option<Rgba> {
        if background == self.base {
            Some(self.on)
        } else if background == self.container {
            Some(self.on_container)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_accent_tones() {
        let ramp = TonalRamp::new(282.0, 60.0);
        let accent = Accent::from_ramp(&ramp, &AccentTones::LIGHT);
        assert_eq!(accent.base, ramp.tone(40));
        assert_eq!(accent.on, ramp.tone(100));
        assert_eq!(accent.on, Rgba::WHITE);
        assert_eq!(accent.container, ramp.tone(90));
        assert_eq!(accent.on_container, ramp.tone(10));
    }

    #[test]
    fn test_dark_accent_tones() {
        let ramp = TonalRamp::new(25.0, 84.0);
        let accent = Accent::from_ramp(&ramp, &AccentTones::DARK);
        assert_eq!(accent.base, ramp.tone(80));
        assert_eq!(accent.on, ramp.tone(20));
        assert_eq!(accent.container, ramp.tone(30));
        assert_eq!(accent.on_container, ramp.tone(90));
    }

    #[test]
    fn test_content_color_for() {
        let accent = Accent::from_ramp(&TonalRamp::new(140.0, 36.0), &AccentTones::LIGHT);
        assert_eq!(accent.content_color_for(accent.base), Some(accent.on));
        assert_eq!(
            accent.content_color_for(accent.container),
            Some(accent.on_container)
        );
        assert_eq!(accent.content_color_for(Rgba::TRANSPARENT), None);
    }
}
