//! The process-wide active scheme.
//!
//! Writers swap in a whole new [`Scheme`]; readers get an [`Arc`] to the value
//! that was current when they asked and never see a partial update.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::debug;

use crate::{Rgba, Scheme};

/// Seed used when no scheme has been set (#6750A4).
pub const DEFAULT_SEED: Rgba = Rgba::from_rgb(0x67, 0x50, 0xA4);

static CURRENT_SCHEME: OnceLock<RwLock<Arc<Scheme>>> = OnceLock::new();

fn slot() -> &'static RwLock<Arc<Scheme>> {
    CURRENT_SCHEME.get_or_init(|| RwLock::new(Arc::new(Scheme::light_from_seed(DEFAULT_SEED))))
}

/// Returns the active scheme.
///
/// If no scheme has been set, it initializes a default light scheme
/// with a seed color of #6750A4.
pub fn current_scheme() -> Arc<Scheme> {
    slot().read().clone()
}

/// Replaces the active scheme and returns the previous one.
pub fn set_current_scheme(scheme: Scheme) -> Arc<Scheme> {
    debug!(is_dark = scheme.is_dark, "Replacing current color scheme");
    std::mem::replace(&mut *slot().write(), Arc::new(scheme))
}

/// Derives a scheme from `seed` and makes it the active one.
pub fn set_current_scheme_from_seed(seed: Rgba, is_dark: bool) -> Arc<Scheme> {
    let scheme = if is_dark {
        Scheme::dark_from_seed(seed)
    } else {
        Scheme::light_from_seed(seed)
    };
    set_current_scheme(scheme)
}
