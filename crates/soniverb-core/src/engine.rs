//! The reverb engine boundary.
//!
//! The reverb algorithm itself is external. The pipeline only relies on the
//! capability set expressed by [`ReverbEngine`]: construct (init), process
//! interleaved PCM, and read or write integer parameters. Release happens in
//! `Drop`, so an engine can never be used after it has been released.
//!
//! Implementations:
//! - [`ReferenceEngine`](crate::testing::ReferenceEngine): deterministic
//!   stand-in used by tests and hosts without the native engine
//! - `EasReverb` (feature `sonivox`): the Sonivox EAS reverb over FFI

use crate::error::ReverbResult;
use crate::types::Pcm;

// =============================================================================
// Engine parameter ranges
// =============================================================================

/// Minimum wet level.
pub const REVERB_WET_MIN: i32 = 0;
/// Maximum wet level (unity gain in Q15).
pub const REVERB_WET_MAX: i32 = 32767;
/// Wet level applied at construction.
pub const REVERB_DEFAULT_WET: i32 = 32767;

/// Minimum dry level.
pub const REVERB_DRY_MIN: i32 = 0;
/// Maximum dry level (unity gain in Q15).
pub const REVERB_DRY_MAX: i32 = 32767;
/// Dry level applied at construction.
pub const REVERB_DEFAULT_DRY: i32 = 0;

/// An opaque reverb engine instance.
///
/// All audio is interleaved stereo 16-bit PCM (even slots left, odd slots
/// right) at a sample rate the engine defines.
///
/// Engines validate their own parameter indices and values; the pipeline
/// forwards host writes without clamping.
pub trait ReverbEngine: Send + Sized + 'static {
    /// Allocate and initialize a new engine instance.
    fn init() -> ReverbResult<Self>;

    /// Process `frames` interleaved stereo frames from `src` into `dst`.
    ///
    /// `src` and `dst` hold at least `2 * frames` samples. The caller
    /// zero-fills `dst` first: engines may accumulate into it.
    fn process(&mut self, src: &[Pcm], dst: &mut [Pcm], frames: usize);

    /// Read an engine parameter.
    fn get_param(&self, index: i32) -> i32;

    /// Write an engine parameter.
    fn set_param(&mut self, index: i32, value: i32);
}
