//! Common types used throughout the SoniVerb core.

// =============================================================================
// Block Limits
// =============================================================================
//
// The pipeline never allocates while processing. Interleaved scratch storage
// lives on the stack with a fixed frame capacity; longer host blocks are
// handed to the engine as consecutive chunks of at most this many frames.
// Two i16 buffers of 2 * 512 samples cost 4 KiB of stack.
// =============================================================================

/// Maximum frames handed to the engine in a single call.
pub const MAX_CHUNK_FRAMES: usize = 512;

/// Number of audio channels on the input and output bus.
pub const NUM_CHANNELS: usize = 2;

/// Number of host parameters.
pub const PARAM_COUNT: usize = 4;

/// Host parameter index (0 to `PARAM_COUNT - 1`).
pub type ParamIndex = u32;

/// Host parameter value (plain, not normalized).
pub type ParamValue = f32;

/// Fixed-point PCM sample as consumed and produced by the engine.
pub type Pcm = i16;
