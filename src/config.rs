use log::Level;

use crate::tracking::section::SectionId;
use crate::tracking::visibility::{RevealPolicy, VisibilityConfig};

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose tracker logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Fraction of a section that must be inside the viewport before it counts as visible.
pub const VISIBILITY_THRESHOLD: f64 = 0.1;

pub const REVEAL_POLICY: RevealPolicy = RevealPolicy::Toggle;

/// Sections that carry entrance animations. The hero animates on load instead.
pub const ANIMATED_SECTIONS: [SectionId; 3] =
    [SectionId::About, SectionId::Portfolio, SectionId::Contact];

pub const HERO_BACK_PARALLAX: f64 = 0.3;
pub const HERO_FRONT_PARALLAX: f64 = 0.5;

/// Offset past which the nav bar switches to its solid style.
pub const NAV_SCROLLED_AFTER: u32 = 80;

pub const PROJECT_STAGGER_SECS: f64 = 0.15;
pub const CONTACT_STAGGER_SECS: f64 = 0.2;

pub fn visibility_config() -> VisibilityConfig {
    VisibilityConfig {
        threshold: VISIBILITY_THRESHOLD,
        policy: REVEAL_POLICY,
    }
}
