//! Restricted-enumeration parameter values.

/// Trait for enums that can be used as restricted-enumeration parameters.
///
/// Implemented by `#[derive(EnumParam)]`. The integer code a host and the
/// engine see for a variant is its position in the enum.
///
/// # Example
///
/// ```ignore
/// use soniverb::prelude::*;
///
/// #[derive(Copy, Clone, PartialEq, EnumParam)]
/// pub enum Mode {
///     #[name = "Low Pass"]
///     LowPass,
///     #[default]
///     #[name = "High Pass"]
///     HighPass,
/// }
/// ```
pub trait EnumParamValue: Copy + PartialEq + Send + Sync + 'static {
    /// Number of variants in the enum.
    const COUNT: usize;

    /// Index of the default variant (from `#[default]` or first variant).
    const DEFAULT_INDEX: usize;

    /// Display labels in variant order.
    const NAMES: &'static [&'static str];

    /// Convert variant index (0-based) to enum value.
    fn from_index(index: usize) -> Option<Self>;

    /// Convert enum value to variant index.
    fn to_index(self) -> usize;

    /// The default variant.
    fn default_value() -> Self;

    /// Display label of this variant.
    fn name(self) -> &'static str {
        Self::NAMES[self.to_index()]
    }

    /// Integer code as exchanged with the engine.
    fn code(self) -> i32 {
        self.to_index() as i32
    }

    /// Variant for an integer code, `None` if no variant has that code.
    fn from_code(code: i32) -> Option<Self> {
        usize::try_from(code).ok().and_then(Self::from_index)
    }
}
