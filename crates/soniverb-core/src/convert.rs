//! Conversion between host float samples and engine PCM.
//!
//! The scale is 32767 in both directions and clipping is symmetric at
//! ±32767: the most negative PCM value (-32768) is never produced from a
//! float. The engine's input gain staging expects exactly this scale.
//!
//! Interleaved buffers follow the engine's layout: even slots hold the left
//! channel, odd slots the right channel.

use crate::sample::Sample;
use crate::types::Pcm;

/// PCM magnitude corresponding to a float sample of 1.0.
pub const PCM_SCALE: f32 = 32767.0;

/// Largest PCM magnitude produced by [`float_to_fixed`].
pub const PCM_CLIP: Pcm = 32767;

/// Convert a float sample to PCM, saturating outside [-1.0, 1.0].
///
/// In-range values are scaled by 32767 and truncated toward zero. NaN maps
/// to 0.
#[inline]
pub fn float_to_fixed(x: f32) -> Pcm {
    if x > 1.0 {
        PCM_CLIP
    } else if x < -1.0 {
        -PCM_CLIP
    } else {
        (x * PCM_SCALE) as Pcm
    }
}

/// Convert a PCM sample to float.
#[inline]
pub fn fixed_to_float(s: Pcm) -> f32 {
    s as f32 / PCM_SCALE
}

/// [`float_to_fixed`] for any host sample type.
#[inline(always)]
pub fn to_fixed<S: Sample>(x: S) -> Pcm {
    float_to_fixed(x.to_f32())
}

/// [`fixed_to_float`] for any host sample type.
#[inline(always)]
pub fn from_fixed<S: Sample>(s: Pcm) -> S {
    S::from_f32(fixed_to_float(s))
}

/// Convert and interleave a stereo pair into `dst`.
///
/// Writes `min(left.len(), right.len(), dst.len() / 2)` frames and returns
/// that count.
#[inline]
pub fn interleave<S: Sample>(left: &[S], right: &[S], dst: &mut [Pcm]) -> usize {
    let mut frames = 0;
    for (slot, (l, r)) in dst.chunks_exact_mut(2).zip(left.iter().zip(right)) {
        slot[0] = to_fixed(*l);
        slot[1] = to_fixed(*r);
        frames += 1;
    }
    frames
}

/// De-interleave and convert `src` into a stereo pair.
///
/// Writes `min(left.len(), right.len(), src.len() / 2)` frames and returns
/// that count.
#[inline]
pub fn deinterleave<S: Sample>(src: &[Pcm], left: &mut [S], right: &mut [S]) -> usize {
    let mut frames = 0;
    for (slot, (l, r)) in src.chunks_exact(2).zip(left.iter_mut().zip(right.iter_mut())) {
        *l = from_fixed(slot[0]);
        *r = from_fixed(slot[1]);
        frames += 1;
    }
    frames
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LSB: f64 = 1.0 / 32767.0;

    #[test]
    fn test_zero() {
        assert_eq!(float_to_fixed(0.0), 0);
        assert_eq!(float_to_fixed(-0.0), 0);
        assert_eq!(fixed_to_float(0), 0.0);
    }

    #[test]
    fn test_full_scale() {
        assert_eq!(float_to_fixed(1.0), 32767);
        assert_eq!(float_to_fixed(-1.0), -32767);
        assert_eq!(fixed_to_float(32767), 1.0);
        assert_eq!(fixed_to_float(-32767), -1.0);
    }

    #[test]
    fn test_truncates_toward_zero() {
        // 0.5 * 32767 = 16383.5
        assert_eq!(float_to_fixed(0.5), 16383);
        assert_eq!(float_to_fixed(-0.5), -16383);
    }

    #[test]
    fn test_clip_is_symmetric() {
        assert_eq!(float_to_fixed(1.5), 32767);
        assert_eq!(float_to_fixed(-1.5), -32767);
        assert_eq!(float_to_fixed(f32::INFINITY), 32767);
        assert_eq!(float_to_fixed(f32::NEG_INFINITY), -32767);
    }

    #[test]
    fn test_nan_is_silent() {
        assert_eq!(float_to_fixed(f32::NAN), 0);
    }

    #[test]
    fn test_most_negative_pcm() {
        // -32768 cannot be produced by float_to_fixed but the engine may emit it
        assert!(fixed_to_float(i16::MIN) < -1.0);
    }

    #[test]
    fn test_f64_matches_f32() {
        for &x in &[0.25f32, -0.7, 0.999_9, 1.2, -3.0] {
            assert_eq!(to_fixed(x as f64), float_to_fixed(x));
        }
    }

    #[test]
    fn test_interleave_order() {
        let left = [1.0f32, 0.5];
        let right = [-1.0f32, 0.0];
        let mut dst = [0i16; 4];

        assert_eq!(interleave(&left, &right, &mut dst), 2);
        assert_eq!(dst, [32767, -32767, 16383, 0]);
    }

    #[test]
    fn test_interleave_short_destination() {
        let left = [0.5f32; 4];
        let right = [0.5f32; 4];
        let mut dst = [0i16; 5];

        assert_eq!(interleave(&left, &right, &mut dst), 2);
        assert_eq!(dst[4], 0);
    }

    #[test]
    fn test_deinterleave_order() {
        let src = [32767i16, 0, -32767, 16384];
        let mut left = [0.0f32; 2];
        let mut right = [0.0f32; 2];

        assert_eq!(deinterleave(&src, &mut left, &mut right), 2);
        assert_eq!(left, [1.0, -1.0]);
        assert_eq!(right[0], 0.0);
        assert!((right[1] - 0.5).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn quantization_error_within_one_lsb(x in -1.0f32..=1.0) {
            let back = fixed_to_float(float_to_fixed(x)) as f64;
            prop_assert!((back - x as f64).abs() <= LSB + f32::EPSILON as f64);
        }

        #[test]
        fn above_range_clips_to_max(x in 1.000_001f32..1.0e30) {
            prop_assert_eq!(float_to_fixed(x), 32767);
        }

        #[test]
        fn below_range_clips_to_negative_max(x in -1.0e30f32..-1.000_001) {
            prop_assert_eq!(float_to_fixed(x), -32767);
        }

        #[test]
        fn fixed_to_float_stays_in_unit_range(s in -32767i16..=32767) {
            let x = fixed_to_float(s);
            prop_assert!((-1.0..=1.0).contains(&x));
        }
    }
}
