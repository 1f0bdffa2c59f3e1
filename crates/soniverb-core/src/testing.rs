//! Deterministic stand-in engine.
//!
//! [`ReferenceEngine`] honors the same contract as the native reverb with a
//! trivially predictable algorithm, so pipeline behavior can be verified
//! sample for sample:
//!
//! - bypassed: input copied to output unchanged
//! - otherwise per channel, in Q15:
//!   `out = dry * in + wet * tail`, then
//!   `tail = decay[preset] * tail + in / 2`
//!
//! Output saturates at ±32767. Parameter writes are clamped to the engine
//! ranges, out-of-range indices are ignored.

use crate::engine::{ReverbEngine, REVERB_DRY_MAX, REVERB_DRY_MIN, REVERB_WET_MAX, REVERB_WET_MIN};
use crate::enum_param::EnumParamValue;
use crate::error::ReverbResult;
use crate::params::{Param, Preset};
use crate::types::{Pcm, PARAM_COUNT};

/// Tail feedback per preset (Q15): Large Hall, Hall, Chamber, Room.
const PRESET_DECAY: [i64; 4] = [29491, 26214, 22938, 16384];

const OUTPUT_CLIP: i64 = 32767;

/// Deterministic engine for tests and hosts without the native reverb.
#[derive(Debug, Clone)]
pub struct ReferenceEngine {
    params: [i32; PARAM_COUNT],
    tail: [i64; 2],
    process_calls: usize,
    frames_processed: usize,
}

impl Default for ReferenceEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ReferenceEngine {
    /// Create an engine with all parameters at zero and a silent tail.
    pub fn new() -> Self {
        Self {
            params: [0; PARAM_COUNT],
            tail: [0; 2],
            process_calls: 0,
            frames_processed: 0,
        }
    }

    /// Number of `process` calls so far.
    pub fn process_calls(&self) -> usize {
        self.process_calls
    }

    /// Total frames handed to `process` so far.
    pub fn frames_processed(&self) -> usize {
        self.frames_processed
    }

    fn level(&self, param: Param) -> i64 {
        self.params[param as usize] as i64
    }
}

impl ReverbEngine for ReferenceEngine {
    fn init() -> ReverbResult<Self> {
        Ok(Self::new())
    }

    fn process(&mut self, src: &[Pcm], dst: &mut [Pcm], frames: usize) {
        self.process_calls += 1;
        self.frames_processed += frames;

        let len = (2 * frames).min(src.len()).min(dst.len());
        if self.params[Param::Bypass as usize] != 0 {
            dst[..len].copy_from_slice(&src[..len]);
            return;
        }

        let dry = self.level(Param::Dry);
        let wet = self.level(Param::Wet);
        let decay = PRESET_DECAY[self.params[Param::Preset as usize] as usize];

        for (input, output) in src[..len].chunks_exact(2).zip(dst.chunks_exact_mut(2)) {
            for ch in 0..2 {
                let x = input[ch] as i64;
                let y = output[ch] as i64 + ((dry * x) >> 15) + ((wet * self.tail[ch]) >> 15);
                self.tail[ch] = ((decay * self.tail[ch]) >> 15) + (x >> 1);
                output[ch] = y.clamp(-OUTPUT_CLIP, OUTPUT_CLIP) as Pcm;
            }
        }
    }

    fn get_param(&self, index: i32) -> i32 {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.params.get(i))
            .copied()
            .unwrap_or(0)
    }

    fn set_param(&mut self, index: i32, value: i32) {
        let Some(param) = usize::try_from(index)
            .ok()
            .and_then(|i| Param::ALL.get(i))
            .copied()
        else {
            return;
        };

        let max_preset = Preset::COUNT as i32 - 1;
        self.params[param as usize] = match param {
            Param::Bypass => (value != 0) as i32,
            Param::Preset => value.clamp(0, max_preset),
            Param::Wet => value.clamp(REVERB_WET_MIN, REVERB_WET_MAX),
            Param::Dry => value.clamp(REVERB_DRY_MIN, REVERB_DRY_MAX),
        };
    }
}
