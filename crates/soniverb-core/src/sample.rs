//! Sample type abstraction for f32/f64 hosts.
//!
//! The engine only understands 16-bit PCM, so the float precision a host
//! processes at is irrelevant to the reverb itself. This trait lets the same
//! pipeline serve both without duplicating the conversion loops.

/// Trait for host sample types (f32, f64).
///
/// Conversion to and from PCM is always performed in `f32` so both
/// precisions produce identical PCM.
pub trait Sample: Copy + Default + Send + Sync + 'static {
    /// Convert from f32.
    fn from_f32(value: f32) -> Self;

    /// Convert to f32.
    fn to_f32(self) -> f32;
}

impl Sample for f32 {
    #[inline(always)]
    fn from_f32(value: f32) -> Self {
        value
    }

    #[inline(always)]
    fn to_f32(self) -> f32 {
        self
    }
}

impl Sample for f64 {
    #[inline(always)]
    fn from_f32(value: f32) -> Self {
        value as f64
    }

    #[inline(always)]
    fn to_f32(self) -> f32 {
        self as f32
    }
}
