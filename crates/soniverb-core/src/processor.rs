//! The real-time processing pipeline.
//!
//! [`SoniVerb`] owns one reverb engine and adapts it to the host: it exposes
//! the parameter bank and turns non-interleaved float blocks into the
//! interleaved 16-bit PCM the engine consumes.
//!
//! # Lifecycle
//!
//! Construction allocates the engine, writes every parameter default and then
//! any [`ReverbConfig`] overrides. A value of `SoniVerb` is therefore always
//! ready to process. Dropping it releases the engine.
//!
//! # Real-Time Safety
//!
//! [`process`](SoniVerb::process) uses fixed-size stack scratch buffers and
//! never allocates, locks or logs. Blocks longer than [`MAX_CHUNK_FRAMES`]
//! are processed in consecutive chunks, in order, so the engine's tail state
//! sees one continuous stream.

use crate::buffer::AudioBlock;
use crate::config::ReverbConfig;
use crate::convert::{deinterleave, interleave};
use crate::engine::ReverbEngine;
use crate::enum_param::EnumParamValue;
use crate::error::ReverbResult;
use crate::params::{write_param, Param, ParamInfo, ParameterBank, Preset};
use crate::remote::RemoteParams;
use crate::sample::Sample;
use crate::types::{ParamIndex, ParamValue, Pcm, MAX_CHUNK_FRAMES, NUM_CHANNELS};

/// Stereo reverb processor over an engine `E`.
///
/// Parameter access through [`set`](Self::set) takes `&mut self`, so it has
/// to be serialized with [`process`](Self::process) by the host. Writes from
/// another thread go through [`remote`](Self::remote) instead.
pub struct SoniVerb<E: ReverbEngine> {
    engine: E,
    bank: ParameterBank,
    remote: RemoteParams,
}

impl<E: ReverbEngine> SoniVerb<E> {
    /// Create a processor with every parameter at its default.
    pub fn new() -> ReverbResult<Self> {
        Self::with_config(&ReverbConfig::new())
    }

    /// Create a processor, applying `config` after the defaults.
    pub fn with_config(config: &ReverbConfig) -> ReverbResult<Self> {
        let engine = E::init().map_err(|err| {
            log::error!("reverb engine initialization failed: {}", err);
            err
        })?;
        Ok(Self::from_engine(engine, config))
    }

    /// Wrap an already initialized engine.
    ///
    /// Defaults and `config` overrides are written into `engine` before this
    /// returns.
    pub fn from_engine(mut engine: E, config: &ReverbConfig) -> Self {
        let bank = ParameterBank;
        bank.apply_defaults(&mut engine);

        let mut overrides = 0;
        for (param, value) in config.overrides() {
            write_param(&mut engine, param, value);
            overrides += 1;
        }
        log::debug!("reverb ready ({} config overrides)", overrides);

        Self {
            engine,
            bank,
            remote: RemoteParams::new(),
        }
    }

    /// Parameter metadata for `index`.
    pub fn describe(&self, index: ParamIndex) -> ReverbResult<&'static ParamInfo> {
        self.bank.describe(index)
    }

    /// Current engine value of the parameter at `index`.
    pub fn get(&self, index: ParamIndex) -> ReverbResult<ParamValue> {
        self.bank.get(&self.engine, index)
    }

    /// Write the parameter at `index` through to the engine.
    ///
    /// Takes effect on the next `process` call. The value is truncated, not
    /// clamped.
    pub fn set(&mut self, index: ParamIndex, value: ParamValue) -> ReverbResult<()> {
        self.bank.set(&mut self.engine, index, value)
    }

    /// The active preset, if the engine reports a known one.
    pub fn preset(&self) -> Option<Preset> {
        Preset::from_code(self.engine.get_param(Param::Preset.engine_index()))
    }

    /// True if the engine is bypassed.
    pub fn is_bypassed(&self) -> bool {
        self.engine.get_param(Param::Bypass.engine_index()) != 0
    }

    /// Handle for queuing parameter writes from other threads.
    pub fn remote(&self) -> RemoteParams {
        self.remote.clone()
    }

    /// The parameter bank.
    pub fn params(&self) -> &ParameterBank {
        &self.bank
    }

    /// The wrapped engine.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Process one stereo block.
    ///
    /// Pending remote writes are applied first. Each chunk is converted to
    /// PCM, interleaved, run through the engine (with a zeroed destination)
    /// and converted back into the block's outputs.
    pub fn process<S: Sample>(&mut self, block: &mut AudioBlock<'_, S>) {
        let engine = &mut self.engine;
        self.remote
            .drain(|param, value| write_param(engine, param, value));

        if block.is_empty() {
            return;
        }

        let mut src_buf = [0 as Pcm; NUM_CHANNELS * MAX_CHUNK_FRAMES];
        let mut dst_buf = [0 as Pcm; NUM_CHANNELS * MAX_CHUNK_FRAMES];

        let ([in_l, in_r], [out_l, out_r]) = block.split();
        let chunks = in_l
            .chunks(MAX_CHUNK_FRAMES)
            .zip(in_r.chunks(MAX_CHUNK_FRAMES))
            .zip(out_l.chunks_mut(MAX_CHUNK_FRAMES))
            .zip(out_r.chunks_mut(MAX_CHUNK_FRAMES));

        for (((in_l, in_r), out_l), out_r) in chunks {
            let frames = in_l.len();
            let src = &mut src_buf[..NUM_CHANNELS * frames];
            let dst = &mut dst_buf[..NUM_CHANNELS * frames];

            dst.fill(0);
            interleave(in_l, in_r, src);
            self.engine.process(src, dst, frames);
            deinterleave(dst, out_l, out_r);
        }
    }

    /// Process raw channel slices.
    ///
    /// The frame count is the shortest of the four slices.
    pub fn process_stereo<S: Sample>(
        &mut self,
        inputs: [&[S]; NUM_CHANNELS],
        outputs: [&mut [S]; NUM_CHANNELS],
    ) {
        let mut block = AudioBlock::new(inputs, outputs, usize::MAX);
        self.process(&mut block);
    }
}

impl<E: ReverbEngine> std::fmt::Debug for SoniVerb<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SoniVerb")
            .field("preset", &self.preset())
            .field("bypassed", &self.is_bypassed())
            .finish_non_exhaustive()
    }
}
