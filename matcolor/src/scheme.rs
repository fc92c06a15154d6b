//! Light and dark color schemes.
//!
//! ## Usage
//!
//! Derive both variants once per seed and hand the one matching the active
//! theme to the renderer.
//!
//! ```
//! use matcolor::{Rgba, Schemes};
//!
//! let schemes = Schemes::from_seed(Rgba::from_rgb(0x67, 0x50, 0xA4));
//! let scheme = schemes.get(false);
//! assert_eq!(scheme.content_color_for(scheme.primary.base), Some(scheme.primary.on));
//! ```

use crate::{Accent, Palette, Rgba, SchemeTones};

/// The colors of one color scheme (light or dark).
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scheme {
    /// Indicates if the scheme is dark mode (`true`) or light mode (`false`).
    pub is_dark: bool,
    /// Important elements.
    pub primary: Accent,
    /// Less important elements.
    pub secondary: Accent,
    /// Accents that contrast with primary and secondary.
    pub tertiary: Accent,
    /// Elements that indicate an error or danger.
    pub error: Accent,
    /// The dimmest surface color, regardless of variant.
    pub surface_dim: Rgba,
    /// Contained areas, like the background of an app.
    pub surface: Rgba,
    /// The brightest surface color, regardless of variant.
    pub surface_bright: Rgba,
    /// A lowest container color for surfaces.
    pub surface_container_lowest: Rgba,
    /// A low container color for surfaces.
    pub surface_container_low: Rgba,
    /// A container color for surfaces.
    pub surface_container: Rgba,
    /// A high container color for surfaces.
    pub surface_container_high: Rgba,
    /// A highest container color for surfaces.
    pub surface_container_highest: Rgba,
    /// Contained areas that contrast with `surface`.
    pub surface_variant: Rgba,
    /// Content on top of surfaces.
    pub on_surface: Rgba,
    /// Content on top of `surface_variant`.
    pub on_surface_variant: Rgba,
    /// Elements drawn in the reverse of the surrounding surface.
    pub inverse_surface: Rgba,
    /// Content on top of `inverse_surface`.
    pub inverse_on_surface: Rgba,
    /// Interactive elements on top of `inverse_surface`.
    pub inverse_primary: Rgba,
    /// The app background and other low-emphasis areas.
    pub background: Rgba,
    /// Content on top of `background`.
    pub on_background: Rgba,
    /// Emphasized boundaries.
    pub outline: Rgba,
    /// Decorative boundaries.
    pub outline_variant: Rgba,
    /// Shadows.
    pub shadow: Rgba,
    /// Tint used by tonal elevation overlays on surfaces.
    pub surface_tint: Rgba,
    /// Semi-transparent overlays.
    pub scrim: Rgba,
}

impl Scheme {
    /// Returns the light scheme for `palette`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn light(palette: &Palette) -> Self {
        Self::from_tones(palette, &SchemeTones::LIGHT, false)
    }

    /// Returns the dark scheme for `palette`.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn dark(palette: &Palette) -> Self {
        Self::from_tones(palette, &SchemeTones::DARK, true)
    }

    /// Returns the dark scheme when `is_dark` is set, the light one otherwise.
    pub fn new(palette: &Palette, is_dark: bool) -> Self {
        Self::from_tones(palette, SchemeTones::for_variant(is_dark), is_dark)
    }

    /// Generates a light color scheme derived from the provided seed color.
    pub fn light_from_seed(seed: Rgba) -> Self {
        Self::light(&Palette::from_seed(seed))
    }

    /// Generates a dark color scheme derived from the provided seed color.
    pub fn dark_from_seed(seed: Rgba) -> Self {
        Self::dark(&Palette::from_seed(seed))
    }

    fn from_tones(p: &Palette, tones: &SchemeTones, is_dark: bool) -> Self {
        let n = &tones.neutral;
        let v = &tones.neutral_variant;
        Self {
            is_dark,
            primary: Accent::from_ramp(&p.primary, &tones.accent),
            secondary: Accent::from_ramp(&p.secondary, &tones.accent),
            tertiary: Accent::from_ramp(&p.tertiary, &tones.accent),
            error: Accent::from_ramp(&p.error, &tones.accent),

            surface_dim: p.neutral.tone(n.surface_dim),
            surface: p.neutral.tone(n.surface),
            surface_bright: p.neutral.tone(n.surface_bright),

            surface_container_lowest: p.neutral.tone(n.surface_container_lowest),
            surface_container_low: p.neutral.tone(n.surface_container_low),
            surface_container: p.neutral.tone(n.surface_container),
            surface_container_high: p.neutral.tone(n.surface_container_high),
            surface_container_highest: p.neutral.tone(n.surface_container_highest),

            surface_variant: p.neutral_variant.tone(v.surface_variant),
            on_surface: p.neutral_variant.tone(v.on_surface),
            on_surface_variant: p.neutral_variant.tone(v.on_surface_variant),

            inverse_surface: p.neutral.tone(n.inverse_surface),
            inverse_on_surface: p.neutral.tone(n.inverse_on_surface),
            inverse_primary: p.primary.tone(tones.inverse_primary),

            background: p.neutral.tone(n.background),
            on_background: p.neutral.tone(n.on_background),

            outline: p.neutral_variant.tone(v.outline),
            outline_variant: p.neutral_variant.tone(v.outline_variant),

            shadow: p.neutral.tone(n.shadow),
            surface_tint: p.primary.tone(tones.surface_tint),
            scrim: p.neutral.tone(n.scrim),
        }
    }

    /// Returns the matching content color for a background color in this
    /// scheme.
    ///
    /// When the background color does not match a known scheme color, this
    /// returns `None`.
    pub fn content_color_for(&self, background: Rgba) -> Option<Rgba> {
        let accent = [self.primary, self.secondary, self.tertiary, self.error]
            .iter()
            .find_map(|accent| accent.content_color_for(background));
        if accent.is_some() {
            accent
        } else if background == self.background {
            Some(self.on_background)
        } else if background == self.inverse_surface {
            Some(self.inverse_on_surface)
        } else if background == self.surface_variant {
            Some(self.on_surface_variant)
        } else if background == self.surface
            || background == self.surface_dim
            || background == self.surface_bright
            || background == self.surface_container_lowest
            || background == self.surface_container_low
            || background == self.surface_container
            || background == self.surface_container_high
            || background == self.surface_container_highest
        {
            Some(self.on_surface)
        } else {
            None
        }
    }
}

/// The light and dark schemes of one palette.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Schemes {
    /// The light variant.
    pub light: Scheme,
    /// The dark variant.
    pub dark: Scheme,
}

impl Schemes {
    /// Derives both variants from `palette`.
    pub fn new(palette: &Palette) -> Self {
        Self {
            light: Scheme::light(palette),
            dark: Scheme::dark(palette),
        }
    }

    /// Derives both variants from the palette of `seed`.
    pub fn from_seed(seed: Rgba) -> Self {
        Self::new(&Palette::from_seed(seed))
    }

    /// Returns the dark scheme when `is_dark` is set, the light one otherwise.
    pub fn get(&self, is_dark: bool) -> &Scheme {
        if is_dark { &self.dark } else { &self.light }
    }
}
