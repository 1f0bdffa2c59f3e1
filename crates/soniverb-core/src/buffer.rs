//! Audio block view for one processing call.
//!
//! The host hands over non-interleaved stereo: one input and one output
//! slice per channel. [`AudioBlock`] bundles them for the duration of a
//! single `process()` call and never outlives it.
//!
//! # Real-Time Safety
//!
//! Construction only stores slice references in fixed-size arrays. No heap
//! allocation occurs.
//!
//! # Example
//!
//! ```ignore
//! let mut block = AudioBlock::new([&in_l, &in_r], [&mut out_l, &mut out_r], frames);
//! reverb.process(&mut block);
//! ```

use crate::sample::Sample;
use crate::types::NUM_CHANNELS;

/// Left channel index.
pub const LEFT: usize = 0;
/// Right channel index.
pub const RIGHT: usize = 1;

/// Stereo input/output view for one processing call.
///
/// `S` is the host sample type, defaulting to `f32`.
pub struct AudioBlock<'a, S: Sample = f32> {
    inputs: [&'a [S]; NUM_CHANNELS],
    outputs: [&'a mut [S]; NUM_CHANNELS],
    num_frames: usize,
}

impl<'a, S: Sample> AudioBlock<'a, S> {
    /// Create a block from channel slices.
    ///
    /// `num_frames` is clamped to the shortest slice so that a mis-sized
    /// host buffer can never cause an out-of-bounds access on the audio
    /// thread.
    #[inline]
    pub fn new(
        inputs: [&'a [S]; NUM_CHANNELS],
        outputs: [&'a mut [S]; NUM_CHANNELS],
        num_frames: usize,
    ) -> Self {
        let shortest = inputs
            .iter()
            .map(|ch| ch.len())
            .chain(outputs.iter().map(|ch| ch.len()))
            .min()
            .unwrap_or(0);

        Self {
            inputs,
            outputs,
            num_frames: num_frames.min(shortest),
        }
    }

    /// Number of frames in this block.
    #[inline]
    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    /// True if the block holds no frames.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_frames == 0
    }

    /// Input channel (`LEFT` or `RIGHT`).
    ///
    /// # Panics
    ///
    /// Panics if the channel index is out of bounds.
    #[inline]
    pub fn input(&self, channel: usize) -> &[S] {
        &self.inputs[channel][..self.num_frames]
    }

    /// Mutable output channel (`LEFT` or `RIGHT`).
    ///
    /// # Panics
    ///
    /// Panics if the channel index is out of bounds.
    #[inline]
    pub fn output(&mut self, channel: usize) -> &mut [S] {
        let n = self.num_frames;
        &mut self.outputs[channel][..n]
    }

    /// Borrow both inputs and both outputs at once.
    ///
    /// Returns `(inputs, outputs)`, each trimmed to `num_frames`.
    #[inline]
    pub fn split(&mut self) -> ([&[S]; NUM_CHANNELS], [&mut [S]; NUM_CHANNELS]) {
        let n = self.num_frames;
        let [in_l, in_r] = self.inputs;
        let [out_l, out_r] = &mut self.outputs;
        ([&in_l[..n], &in_r[..n]], [&mut out_l[..n], &mut out_r[..n]])
    }
}
