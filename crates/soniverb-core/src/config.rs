//! Initial parameter configuration.
//!
//! Every parameter's declared default is written into the engine at
//! construction. A [`ReverbConfig`] adds overrides that are applied right
//! after the defaults, so an embedding can start in a specific state without
//! racing the first block.
//!
//! # Example
//!
//! ```ignore
//! use soniverb_core::{Preset, ReverbConfig};
//!
//! pub static CONFIG: ReverbConfig = ReverbConfig::new()
//!     .with_preset(Preset::Chamber)
//!     .with_dry(16384.0);
//! ```

use crate::enum_param::EnumParamValue;
use crate::params::{Param, Preset};
use crate::types::ParamValue;

/// Parameter overrides applied after the defaults at construction.
///
/// `ReverbConfig::new()` overrides nothing.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ReverbConfig {
    /// Start bypassed (or explicitly not bypassed).
    pub bypass: Option<bool>,
    /// Initial room preset.
    pub preset: Option<Preset>,
    /// Initial wet level.
    pub wet: Option<ParamValue>,
    /// Initial dry level.
    pub dry: Option<ParamValue>,
}

impl ReverbConfig {
    /// Create a configuration without overrides.
    pub const fn new() -> Self {
        Self {
            bypass: None,
            preset: None,
            wet: None,
            dry: None,
        }
    }

    /// Set the initial bypass state.
    pub const fn with_bypass(mut self, bypass: bool) -> Self {
        self.bypass = Some(bypass);
        self
    }

    /// Set the initial preset.
    pub const fn with_preset(mut self, preset: Preset) -> Self {
        self.preset = Some(preset);
        self
    }

    /// Set the initial wet level.
    pub const fn with_wet(mut self, wet: ParamValue) -> Self {
        self.wet = Some(wet);
        self
    }

    /// Set the initial dry level.
    pub const fn with_dry(mut self, dry: ParamValue) -> Self {
        self.dry = Some(dry);
        self
    }

    /// Overrides as plain parameter writes, in index order.
    pub fn overrides(&self) -> impl Iterator<Item = (Param, ParamValue)> {
        let bypass = self
            .bypass
            .map(|on| (Param::Bypass, if on { 1.0 } else { 0.0 }));
        let preset = self
            .preset
            .map(|preset| (Param::Preset, preset.code() as ParamValue));
        let wet = self.wet.map(|wet| (Param::Wet, wet));
        let dry = self.dry.map(|dry| (Param::Dry, dry));

        [bypass, preset, wet, dry].into_iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_overrides() {
        assert_eq!(ReverbConfig::new(), ReverbConfig::default());
        assert_eq!(ReverbConfig::new().overrides().count(), 0);
    }

    #[test]
    fn test_const_builder() {
        const CONFIG: ReverbConfig = ReverbConfig::new()
            .with_preset(Preset::Room)
            .with_bypass(true)
            .with_dry(1000.0);

        let overrides: Vec<_> = CONFIG.overrides().collect();
        assert_eq!(
            overrides,
            vec![
                (Param::Bypass, 1.0),
                (Param::Preset, 3.0),
                (Param::Dry, 1000.0),
            ]
        );
    }
}
