//! Tone assignment tables for the light and dark schemes.
//!
//! Every role color is a fixed tone on one ramp. Contrast between a role and
//! its "on" role comes from the distance between these tones, so the values
//! are policy and must not be tuned per seed.

/// Tones used for the four roles of an [`Accent`](crate::Accent).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccentTones {
    /// Tone of [`Accent::base`](crate::Accent::base).
    pub base: u8,
    /// Tone of [`Accent::on`](crate::Accent::on).
    pub on: u8,
    /// Tone of [`Accent::container`](crate::Accent::container).
    pub container: u8,
    /// Tone of [`Accent::on_container`](crate::Accent::on_container).
    pub on_container: u8,
}

impl AccentTones {
    /// Accent tones of the light scheme.
    pub const LIGHT: AccentTones = AccentTones {
        base: 40,
        on: 100,
        container: 90,
        on_container: 10,
    };

    /// Accent tones of the dark scheme.
    pub const DARK: AccentTones = AccentTones {
        base: 80,
        on: 20,
        container: 30,
        on_container: 90,
    };
}

/// Roles taken from the neutral ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeutralTones {
    /// Tone of `Scheme::surface_dim`.
    pub surface_dim: u8,
    /// Tone of `Scheme::surface`.
    pub surface: u8,
    /// Tone of `Scheme::surface_bright`.
    pub surface_bright: u8,
    /// Tone of `Scheme::surface_container_lowest`.
    pub surface_container_lowest: u8,
    /// Tone of `Scheme::surface_container_low`.
    pub surface_container_low: u8,
    /// Tone of `Scheme::surface_container`.
    pub surface_container: u8,
    /// Tone of `Scheme::surface_container_high`.
    pub surface_container_high: u8,
    /// Tone of `Scheme::surface_container_highest`.
    pub surface_container_highest: u8,
    /// Tone of `Scheme::inverse_surface`.
    pub inverse_surface: u8,
    /// Tone of `Scheme::inverse_on_surface`.
    pub inverse_on_surface: u8,
    /// Tone of `Scheme::background`.
    pub background: u8,
    /// Tone of `Scheme::on_background`.
    pub on_background: u8,
    /// Tone of `Scheme::shadow`.
    pub shadow: u8,
    /// Tone of `Scheme::scrim`.
    pub scrim: u8,
}

/// Roles taken from the neutral variant ramp.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NeutralVariantTones {
    /// Tone of `Scheme::surface_variant`.
    pub surface_variant: u8,
    /// Tone of `Scheme::on_surface`.
    pub on_surface: u8,
    /// Tone of `Scheme::on_surface_variant`.
    pub on_surface_variant: u8,
    /// Tone of `Scheme::outline`.
    pub outline: u8,
    /// Tone of `Scheme::outline_variant`.
    pub outline_variant: u8,
}

/// The complete tone table of one scheme variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SchemeTones {
    /// Applied to the primary, secondary, tertiary and error ramps alike.
    pub accent: AccentTones,
    /// Primary ramp. The base tone of the opposite variant.
    pub inverse_primary: u8,
    /// Primary ramp.
    pub surface_tint: u8,
    /// Neutral ramp roles.
    pub neutral: NeutralTones,
    /// Neutral variant ramp roles.
    pub neutral_variant: NeutralVariantTones,
}

impl SchemeTones {
    /// Tone table of [`Scheme::light`](crate::Scheme::light).
    pub const LIGHT: SchemeTones = SchemeTones {
        accent: AccentTones::LIGHT,
        inverse_primary: AccentTones::DARK.base,
        surface_tint: AccentTones::LIGHT.base,
        neutral: NeutralTones {
            surface_dim: 87,
            surface: 98,
            surface_bright: 98,
            surface_container_lowest: 100,
            surface_container_low: 96,
            surface_container: 94,
            surface_container_high: 92,
            surface_container_highest: 90,
            inverse_surface: 20,
            inverse_on_surface: 95,
            background: 98,
            on_background: 10,
            shadow: 0,
            scrim: 0,
        },
        neutral_variant: NeutralVariantTones {
            surface_variant: 90,
            on_surface: 10,
            on_surface_variant: 30,
            outline: 50,
            outline_variant: 80,
        },
    };

    /// Tone table of [`Scheme::dark`](crate::Scheme::dark).
    pub const DARK: SchemeTones = SchemeTones {
        accent: AccentTones::DARK,
        inverse_primary: AccentTones::LIGHT.base,
        surface_tint: AccentTones::DARK.base,
        neutral: NeutralTones {
            surface_dim: 6,
            surface: 6,
            surface_bright: 24,
            surface_container_lowest: 4,
            surface_container_low: 10,
            surface_container: 12,
            surface_container_high: 17,
            surface_container_highest: 22,
            inverse_surface: 90,
            inverse_on_surface: 20,
            background: 6,
            on_background: 90,
            shadow: 0,
            scrim: 0,
        },
        neutral_variant: NeutralVariantTones {
            surface_variant: 30,
            on_surface: 90,
            on_surface_variant: 80,
            outline: 60,
            outline_variant: 30,
        },
    };

    /// Returns the table for the requested variant.
    pub const fn for_variant(is_dark: bool) -> &'static SchemeTones {
        if is_dark { &Self::DARK } else { &Self::LIGHT }
    }
}
