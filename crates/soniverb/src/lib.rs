//! # SoniVerb
//!
//! Stereo reverb effect core for Rust.
//!
//! SoniVerb wraps a fixed-point reverb engine (the Sonivox EAS reverb in
//! production) behind a small host-facing API: four indexed parameters and a
//! per-block stereo `process` call on float audio.
//!
//! ## Architecture
//!
//! ```text
//! Host (plugin wrapper)
//!        ↓  describe / get / set / process
//! SoniVerb<E> (parameter bank + sample pipeline)
//!        ↓  interleaved i16 PCM
//! E: ReverbEngine (EasReverb or ReferenceEngine)
//! ```
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use soniverb::prelude::*;
//!
//! static CONFIG: ReverbConfig = ReverbConfig::new().with_preset(Preset::Chamber);
//!
//! let mut reverb = SoniVerb::<EasReverb>::with_config(&CONFIG)?;
//! reverb.set(Param::Dry.index(), 16384.0)?;
//!
//! // In the host's audio callback:
//! reverb.process_stereo([in_l, in_r], [out_l, out_r]);
//! ```

// Re-export sub-crates
pub use soniverb_core as core;

// Re-export derive macros when feature is enabled
#[cfg(feature = "derive")]
pub use soniverb_macros::EnumParam;

/// Prelude module for convenient imports.
///
/// ```rust,ignore
/// use soniverb::prelude::*;
/// ```
pub mod prelude {
    pub use soniverb_core::{
        // Pipeline and engines
        ReferenceEngine, ReverbEngine, SoniVerb,
        // Audio
        AudioBlock, Sample, LEFT, RIGHT,
        // Parameters
        EnumParamValue, Param, ParamFlags, ParamInfo, ParamRange, ParameterBank, Preset,
        RemoteParams,
        // Configuration
        ReverbConfig,
        // Errors
        ReverbError, ReverbResult,
        // Types
        ParamIndex, ParamValue, MAX_CHUNK_FRAMES,
    };

    #[cfg(feature = "sonivox")]
    pub use soniverb_core::EasReverb;

    #[cfg(feature = "derive")]
    pub use soniverb_macros::EnumParam;
}
