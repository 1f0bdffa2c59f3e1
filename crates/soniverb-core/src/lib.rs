//! # soniverb-core
//!
//! Real-time core of the SoniVerb stereo reverb.
//!
//! This crate adapts an external fixed-point reverb engine to a plugin host:
//! it exposes four indexed parameters and converts the host's
//! non-interleaved float audio to the interleaved 16-bit PCM the engine
//! processes, and back. It is format-agnostic and does not talk to any
//! plugin ABI itself.
//!
//! ## Main Types
//!
//! - [`SoniVerb`] - Processing pipeline owning one engine
//! - [`ReverbEngine`] - Engine capability set (init, process, get, set)
//! - [`ParameterBank`] - Parameter metadata and engine pass-through
//! - [`AudioBlock`] - Stereo block view for one processing call
//! - [`RemoteParams`] - Lock-free parameter writes from other threads
//! - [`ReverbConfig`] - Initial parameter overrides
//! - [`ReverbError`] - Error types
//!
//! ## Engines
//!
//! - [`ReferenceEngine`] - Deterministic stand-in, always available
//! - `EasReverb` - Sonivox EAS reverb, behind the `sonivox` feature

pub mod buffer;
pub mod config;
pub mod convert;
#[cfg(feature = "sonivox")]
pub mod eas;
pub mod engine;
pub mod enum_param;
pub mod error;
pub mod params;
pub mod processor;
pub mod remote;
pub mod sample;
pub mod testing;
pub mod types;

// Re-exports for convenience
pub use buffer::{AudioBlock, LEFT, RIGHT};
pub use config::ReverbConfig;
pub use convert::{
    deinterleave, fixed_to_float, float_to_fixed, from_fixed, interleave, to_fixed, PCM_CLIP,
    PCM_SCALE,
};
#[cfg(feature = "sonivox")]
pub use eas::EasReverb;
pub use engine::{
    ReverbEngine, REVERB_DEFAULT_DRY, REVERB_DEFAULT_WET, REVERB_DRY_MAX, REVERB_DRY_MIN,
    REVERB_WET_MAX, REVERB_WET_MIN,
};
pub use enum_param::EnumParamValue;
pub use error::{ReverbError, ReverbResult};
pub use params::{EnumValue, Param, ParamFlags, ParamInfo, ParamRange, ParameterBank, Preset};
pub use processor::SoniVerb;
pub use remote::RemoteParams;
pub use sample::Sample;
pub use testing::ReferenceEngine;
pub use types::{ParamIndex, ParamValue, Pcm, MAX_CHUNK_FRAMES, NUM_CHANNELS, PARAM_COUNT};
