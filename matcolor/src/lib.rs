//! Material-style color schemes derived from a seed color.
//!
//! # Pipeline
//!
//! A scheme is built in three pure steps:
//!
//! 1. [`Key::from_primary`] expands one seed color into six key colors
//!    (primary, secondary, tertiary, error, neutral, neutral variant).
//! 2. [`Palette::new`] anchors a [`TonalRamp`] at the hue and chroma of each
//!    key color.
//! 3. [`Scheme::light`] and [`Scheme::dark`] read every role color off those
//!    ramps at the fixed tones in [`SchemeTones`].
//!
//! # Example
//!
//! ```
//! use matcolor::{Key, Palette, Rgba, Scheme};
//!
//! let seed: Rgba = "#6750A4".parse().unwrap();
//! let palette = Palette::new(&Key::from_primary(seed));
//!
//! let light = Scheme::light(&palette);
//! let dark = Scheme::dark(&palette);
//!
//! assert_eq!(light.primary.on, Rgba::WHITE);
//! assert_eq!(light.inverse_primary, dark.primary.base);
//! ```
//!
//! # Current Scheme
//!
//! Applications that keep one active scheme can use [`current_scheme`] and
//! [`set_current_scheme`]; everything else in this crate is free of shared
//! state.
#![deny(missing_docs, clippy::unwrap_used)]

mod accent;
mod color;
mod global;
mod palette;

pub mod hct;
pub mod key;
pub mod scheme;
pub mod tones;

pub use accent::Accent;
pub use color::{ParseColorError, Rgba};
pub use global::{DEFAULT_SEED, current_scheme, set_current_scheme, set_current_scheme_from_seed};
pub use hct::{HctColor, TonalRamp};
pub use key::Key;
pub use palette::Palette;
pub use scheme::{Scheme, Schemes};
pub use tones::{AccentTones, NeutralTones, NeutralVariantTones, SchemeTones};
