//! Room Modes - example of a host-side selector built on SoniVerb.
//!
//! This crate shows how to:
//! 1. Use `EnumParam` for a host-facing choice list
//! 2. Map each choice onto a `ReverbConfig`
//! 3. Drive a `SoniVerb` through the prelude only

use soniverb::prelude::*;

// =============================================================================
// Enum Types for Parameter Choices
// =============================================================================

/// Listening space offered to the user.
#[derive(Debug, Copy, Clone, PartialEq, EnumParam)]
pub enum Space {
    /// Close, mostly dry
    #[name = "Vocal Booth"]
    Booth,
    /// Balanced room sound
    #[default]
    #[name = "Studio"]
    Studio,
    /// Long wet tail
    #[name = "Cathedral"]
    Cathedral,
}

impl Space {
    /// Initial reverb settings for this space.
    pub const fn config(self) -> ReverbConfig {
        match self {
            Space::Booth => ReverbConfig::new()
                .with_preset(Preset::Room)
                .with_dry(32767.0)
                .with_wet(8192.0),
            Space::Studio => ReverbConfig::new()
                .with_preset(Preset::Chamber)
                .with_dry(24576.0)
                .with_wet(16384.0),
            Space::Cathedral => ReverbConfig::new()
                .with_preset(Preset::LargeHall)
                .with_dry(8192.0)
                .with_wet(32767.0),
        }
    }
}

/// Create a reverb over `E` set up for `space`.
pub fn reverb_for<E: ReverbEngine>(space: Space) -> ReverbResult<SoniVerb<E>> {
    SoniVerb::with_config(&space.config())
}
