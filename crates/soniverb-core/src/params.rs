//! Parameter model for the reverb.
//!
//! The host sees four plain-valued parameters (not normalized). Their indices
//! match the engine's parameter enumeration one to one, so host index `i`
//! is forwarded as engine index `i`.
//!
//! Values live in the engine, not here: [`ParameterBank::get`] reads back
//! through the engine and [`ParameterBank::set`] writes through to it. The
//! bank only owns the static metadata and the index validation.
//!
//! # Range checking
//!
//! `set` validates the index but never clamps the value. Out-of-range values
//! reach the engine as-is (truncated toward zero to an integer); the engine
//! is responsible for clamping. Callers that want stricter behavior can
//! check [`ParamRange::contains`] first.

use std::borrow::Cow;

use crate::engine::{
    ReverbEngine, REVERB_DEFAULT_DRY, REVERB_DEFAULT_WET, REVERB_DRY_MAX, REVERB_DRY_MIN,
    REVERB_WET_MAX, REVERB_WET_MIN,
};
use crate::enum_param::EnumParamValue;
use crate::error::{ReverbError, ReverbResult};
use crate::types::{ParamIndex, ParamValue, PARAM_COUNT};

// =============================================================================
// Parameter identity
// =============================================================================

/// The host-visible parameters, in index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Param {
    /// Engine bypass switch (0 or 1).
    Bypass = 0,
    /// Room preset, one of the [`Preset`] codes.
    Preset = 1,
    /// Wet (reverberated) level.
    Wet = 2,
    /// Dry (direct) level.
    Dry = 3,
}

impl Param {
    /// All parameters in index order.
    pub const ALL: [Param; PARAM_COUNT] = [Param::Bypass, Param::Preset, Param::Wet, Param::Dry];

    /// Resolve a host index.
    pub fn from_index(index: ParamIndex) -> ReverbResult<Self> {
        match Self::ALL.get(index as usize) {
            Some(param) => Ok(*param),
            None => {
                log::warn!("rejected parameter index {}", index);
                Err(ReverbError::OutOfRange { index })
            }
        }
    }

    /// Host index of this parameter.
    pub const fn index(self) -> ParamIndex {
        self as ParamIndex
    }

    /// Engine parameter index this parameter is forwarded to.
    pub const fn engine_index(self) -> i32 {
        self as i32
    }

    /// Static metadata for this parameter.
    pub fn info(self) -> &'static ParamInfo {
        &PARAMS[self as usize]
    }
}

/// Reverb room presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    LargeHall,
    Hall,
    Chamber,
    Room,
}

impl Preset {
    /// All presets in code order.
    pub const ALL: [Preset; 4] = [Preset::LargeHall, Preset::Hall, Preset::Chamber, Preset::Room];
}

impl EnumParamValue for Preset {
    const COUNT: usize = Self::ALL.len();
    const DEFAULT_INDEX: usize = 0;
    const NAMES: &'static [&'static str] = &["Large Hall", "Hall", "Chamber", "Room"];

    fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    fn to_index(self) -> usize {
        self as usize
    }

    fn default_value() -> Self {
        Preset::LargeHall
    }
}

// =============================================================================
// Metadata
// =============================================================================

/// Flags controlling parameter behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamFlags {
    /// Parameter can be automated by the host.
    pub can_automate: bool,
    /// Parameter is an on/off switch.
    pub is_boolean: bool,
    /// Parameter is the bypass switch.
    pub is_bypass: bool,
}

impl Default for ParamFlags {
    fn default() -> Self {
        Self::AUTOMATABLE
    }
}

impl ParamFlags {
    /// Plain automatable parameter.
    pub const AUTOMATABLE: Self = Self {
        can_automate: true,
        is_boolean: false,
        is_bypass: false,
    };
}

/// Declared numeric range of a parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    /// Lowest declared value.
    pub min: ParamValue,
    /// Highest declared value.
    pub max: ParamValue,
    /// Value written at construction.
    pub default: ParamValue,
}

impl ParamRange {
    /// Create a new range.
    pub const fn new(min: ParamValue, max: ParamValue, default: ParamValue) -> Self {
        Self { min, max, default }
    }

    /// True if `value` lies within `[min, max]`.
    pub fn contains(&self, value: ParamValue) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One entry of a restricted enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumValue {
    /// Display label (e.g., "Chamber").
    pub label: &'static str,
    /// Value exchanged with the host and the engine.
    pub code: i32,
}

/// Metadata describing a single parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamInfo {
    /// Which parameter this describes.
    pub param: Param,
    /// Display name.
    pub name: &'static str,
    /// Numeric range and default.
    pub range: ParamRange,
    /// Behavioral flags.
    pub flags: ParamFlags,
    /// Labels of the restricted enumeration, empty if not enumerated.
    /// Codes are the label positions.
    pub enum_labels: &'static [&'static str],
}

impl ParamInfo {
    /// Create a new automatable parameter with a `[0, 1]` range.
    pub const fn new(param: Param, name: &'static str) -> Self {
        Self {
            param,
            name,
            range: ParamRange::new(0.0, 1.0, 0.0),
            flags: ParamFlags::AUTOMATABLE,
            enum_labels: &[],
        }
    }

    /// Create a bypass toggle parameter with standard configuration.
    ///
    /// - Boolean, range `[0, 1]`
    /// - Automatable
    /// - Marked with `is_bypass = true`
    /// - Default value = 0.0 (not bypassed)
    pub const fn bypass(param: Param) -> Self {
        Self {
            param,
            name: "Bypass",
            range: ParamRange::new(0.0, 1.0, 0.0),
            flags: ParamFlags {
                can_automate: true,
                is_boolean: true,
                is_bypass: true,
            },
            enum_labels: &[],
        }
    }

    /// Set the range from integer engine bounds.
    pub const fn with_engine_range(mut self, min: i32, max: i32, default: i32) -> Self {
        self.range = ParamRange::new(min as ParamValue, max as ParamValue, default as ParamValue);
        self
    }

    /// Restrict the parameter to the variants of `E`.
    ///
    /// The range becomes `[0, COUNT - 1]` with the enum's default variant.
    pub const fn with_enum<E: EnumParamValue>(mut self) -> Self {
        self.enum_labels = E::NAMES;
        self.range = ParamRange::new(
            0.0,
            (E::COUNT - 1) as ParamValue,
            E::DEFAULT_INDEX as ParamValue,
        );
        self
    }

    /// Symbol for hosts that need identifier-safe names.
    ///
    /// The name with `-` replaced by `_`.
    pub fn symbol(&self) -> Cow<'static, str> {
        if self.name.contains('-') {
            Cow::Owned(self.name.replace('-', "_"))
        } else {
            Cow::Borrowed(self.name)
        }
    }

    /// Declared default value.
    pub fn default_value(&self) -> ParamValue {
        self.range.default
    }

    /// True if the parameter is a restricted enumeration.
    pub fn is_enumerated(&self) -> bool {
        !self.enum_labels.is_empty()
    }

    /// Restricted enumeration entries in code order.
    pub fn enum_values(&self) -> impl Iterator<Item = EnumValue> + '_ {
        self.enum_labels
            .iter()
            .enumerate()
            .map(|(code, label)| EnumValue {
                label: *label,
                code: code as i32,
            })
    }
}

static PARAMS: [ParamInfo; PARAM_COUNT] = [
    ParamInfo::bypass(Param::Bypass),
    ParamInfo::new(Param::Preset, "Preset").with_enum::<Preset>(),
    ParamInfo::new(Param::Wet, "Wet").with_engine_range(
        REVERB_WET_MIN,
        REVERB_WET_MAX,
        REVERB_DEFAULT_WET,
    ),
    ParamInfo::new(Param::Dry, "Dry").with_engine_range(
        REVERB_DRY_MIN,
        REVERB_DRY_MAX,
        REVERB_DEFAULT_DRY,
    ),
];

// =============================================================================
// ParameterBank
// =============================================================================

/// The reverb's parameter set.
///
/// Stateless: metadata is static and current values are held by the engine
/// passed to [`get`](Self::get) and [`set`](Self::set).
#[derive(Debug, Clone, Copy, Default)]
pub struct ParameterBank;

impl ParameterBank {
    /// Number of parameters.
    pub const fn count(&self) -> usize {
        PARAM_COUNT
    }

    /// Metadata for the parameter at `index`.
    pub fn describe(&self, index: ParamIndex) -> ReverbResult<&'static ParamInfo> {
        Param::from_index(index).map(Param::info)
    }

    /// All parameter metadata in index order.
    pub fn iter(&self) -> impl Iterator<Item = &'static ParamInfo> {
        PARAMS.iter()
    }

    /// Find a parameter by its symbol.
    pub fn find_by_symbol(&self, symbol: &str) -> Option<Param> {
        self.iter()
            .find(|info| info.symbol() == symbol)
            .map(|info| info.param)
    }

    /// Current value of the parameter at `index`, read from the engine.
    pub fn get<E: ReverbEngine>(&self, engine: &E, index: ParamIndex) -> ReverbResult<ParamValue> {
        let param = Param::from_index(index)?;
        Ok(engine.get_param(param.engine_index()) as ParamValue)
    }

    /// Write `value` for the parameter at `index` through to the engine.
    ///
    /// The value is truncated toward zero; it is not clamped to the declared
    /// range.
    pub fn set<E: ReverbEngine>(
        &self,
        engine: &mut E,
        index: ParamIndex,
        value: ParamValue,
    ) -> ReverbResult<()> {
        let param = Param::from_index(index)?;
        write_param(engine, param, value);
        Ok(())
    }

    /// Write every declared default into the engine, in index order.
    pub fn apply_defaults<E: ReverbEngine>(&self, engine: &mut E) {
        for info in self.iter() {
            write_param(engine, info.param, info.default_value());
        }
        log::debug!("applied {} parameter defaults", PARAM_COUNT);
    }
}

/// Forward a host value to the engine. Allocation and lock free.
#[inline]
pub(crate) fn write_param<E: ReverbEngine>(engine: &mut E, param: Param, value: ParamValue) {
    engine.set_param(param.engine_index(), value as i32);
}
