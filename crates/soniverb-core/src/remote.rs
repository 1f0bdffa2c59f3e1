//! Lock-free parameter writes from a control thread.
//!
//! The engine is owned by the pipeline and is not thread-safe, so a control
//! thread cannot call into it while the audio thread is processing. Instead
//! it writes into a [`RemoteParams`] handle: one atomic slot per parameter
//! plus a pending flag. The pipeline drains pending slots into the engine at
//! the start of every block.
//!
//! Consistency is relaxed: each slot is an independent scalar and the last
//! value written before a block starts is the one the engine sees. There is
//! no ordering between different parameters.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use crate::error::ReverbResult;
use crate::params::Param;
use crate::types::{ParamIndex, ParamValue, PARAM_COUNT};

#[derive(Debug, Default)]
struct ParamSlots {
    /// Values stored as `f32` bits.
    values: [AtomicU32; PARAM_COUNT],
    pending: [AtomicBool; PARAM_COUNT],
}

/// Cloneable, `Send + Sync` handle for writing parameters from any thread.
///
/// Obtained from [`SoniVerb::remote`](crate::SoniVerb::remote).
///
/// # Example
///
/// ```ignore
/// let remote = reverb.remote();
/// std::thread::spawn(move || {
///     remote.set(Param::Wet.index(), 16384.0).unwrap();
/// });
/// ```
#[derive(Debug, Clone, Default)]
pub struct RemoteParams {
    slots: Arc<ParamSlots>,
}

impl RemoteParams {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue a value for the parameter at `index`.
    ///
    /// Fails with `OutOfRange` for an invalid index. The value is not
    /// clamped, matching the direct `set` path.
    pub fn set(&self, index: ParamIndex, value: ParamValue) -> ReverbResult<()> {
        let param = Param::from_index(index)?;
        self.set_param(param, value);
        Ok(())
    }

    /// Queue a value for `param`.
    pub fn set_param(&self, param: Param, value: ParamValue) {
        let slot = param as usize;
        self.slots.values[slot].store(value.to_bits(), Ordering::Relaxed);
        self.slots.pending[slot].store(true, Ordering::Release);
    }

    /// True if any write has not yet been applied.
    pub fn has_pending(&self) -> bool {
        self.slots
            .pending
            .iter()
            .any(|flag| flag.load(Ordering::Acquire))
    }

    /// Hand every pending write to `apply` and clear it.
    ///
    /// Lock and allocation free; safe on the audio thread.
    #[inline]
    pub(crate) fn drain(&self, mut apply: impl FnMut(Param, ParamValue)) {
        for param in Param::ALL {
            let slot = param as usize;
            if self.slots.pending[slot].swap(false, Ordering::Acquire) {
                let bits = self.slots.values[slot].load(Ordering::Relaxed);
                apply(param, ParamValue::from_bits(bits));
            }
        }
    }
}
