//! Sonivox EAS reverb over FFI.
//!
//! Links against `libsonivox`. The library allocates the reverb object with
//! `malloc` inside `ReverbInit` and exposes no shutdown entry point, so the
//! object is released with `free` when [`EasReverb`] is dropped.

use std::ptr::NonNull;

use crate::engine::ReverbEngine;
use crate::error::{ReverbError, ReverbResult};
use crate::types::Pcm;

/// `EAS_I32`.
type EasI32 = i32;
/// `EAS_RESULT`, zero on success.
type EasResult = EasI32;

const EAS_SUCCESS: EasResult = 0;

/// Opaque `S_REVERB_OBJECT`.
#[repr(C)]
struct ReverbObject {
    _private: [u8; 0],
}

#[link(name = "sonivox")]
extern "C" {
    fn ReverbInit() -> *mut ReverbObject;
    fn ReverbProcess(
        reverb: *mut ReverbObject,
        src: *mut Pcm,
        dst: *mut Pcm,
        num_samples: EasI32,
    );
    fn ReverbGetParam(reverb: *mut ReverbObject, param: EasI32, value: *mut EasI32) -> EasResult;
    fn ReverbSetParam(reverb: *mut ReverbObject, param: EasI32, value: EasI32) -> EasResult;
}

/// One Sonivox EAS reverb instance.
#[derive(Debug)]
pub struct EasReverb {
    raw: NonNull<ReverbObject>,
}

// SAFETY: The reverb object holds no thread-affine state. Every access goes
// through `&self`/`&mut self`, so moving the owner between threads is sound.
unsafe impl Send for EasReverb {}

impl ReverbEngine for EasReverb {
    fn init() -> ReverbResult<Self> {
        // SAFETY: `ReverbInit` takes no arguments and returns either null or
        // a freshly allocated, initialized object.
        let raw = unsafe { ReverbInit() };
        let raw = NonNull::new(raw)
            .ok_or_else(|| ReverbError::init_failure("ReverbInit returned null"))?;

        log::debug!("EAS reverb object at {:p}", raw.as_ptr());
        Ok(Self { raw })
    }

    fn process(&mut self, src: &[Pcm], dst: &mut [Pcm], frames: usize) {
        let frames = frames.min(src.len() / 2).min(dst.len() / 2);
        let Ok(num_samples) = EasI32::try_from(frames) else {
            return;
        };

        // SAFETY: `raw` is live for the lifetime of `self`. `src` and `dst`
        // hold at least `2 * frames` samples. The engine reads `src` only,
        // the mutable cast satisfies the C prototype.
        unsafe {
            ReverbProcess(
                self.raw.as_ptr(),
                src.as_ptr().cast_mut(),
                dst.as_mut_ptr(),
                num_samples,
            );
        }
    }

    fn get_param(&self, index: i32) -> i32 {
        let mut value: EasI32 = 0;
        // SAFETY: `raw` is live and `value` is a valid out pointer.
        let result = unsafe { ReverbGetParam(self.raw.as_ptr(), index, &mut value) };
        if result != EAS_SUCCESS {
            log::warn!("ReverbGetParam({}) failed with result {}", index, result);
        }
        value
    }

    fn set_param(&mut self, index: i32, value: i32) {
        // SAFETY: `raw` is live. The engine validates `index` and `value`.
        // The result is ignored: this runs on the audio thread when remote
        // writes are drained.
        unsafe {
            ReverbSetParam(self.raw.as_ptr(), index, value);
        }
    }
}

impl Drop for EasReverb {
    fn drop(&mut self) {
        // SAFETY: `raw` came from `ReverbInit`, which allocates with `malloc`,
        // and is freed exactly once here.
        unsafe { libc::free(self.raw.as_ptr().cast()) };
    }
}
