//! End-to-end pipeline scenarios against the reference engine.

use proptest::prelude::*;
use soniverb_core::{
    AudioBlock, Param, Preset, ReferenceEngine, ReverbConfig, ReverbError, SoniVerb, LEFT, RIGHT,
    MAX_CHUNK_FRAMES,
};

fn reverb() -> SoniVerb<ReferenceEngine> {
    SoniVerb::new().unwrap()
}

fn signal(frames: usize) -> Vec<f32> {
    (0..frames).map(|i| (i as f32 * 0.05).sin() * 0.8).collect()
}

fn run(reverb: &mut SoniVerb<ReferenceEngine>, left: &[f32], right: &[f32]) -> (Vec<f32>, Vec<f32>) {
    let mut out_l = vec![0.0f32; left.len()];
    let mut out_r = vec![0.0f32; right.len()];
    reverb.process_stereo([left, right], [&mut out_l[..], &mut out_r[..]]);
    (out_l, out_r)
}

fn assert_bypassed_silence(frames: usize) {
    let mut reverb = reverb();
    reverb.set(Param::Bypass.index(), 1.0).unwrap();

    let zeros = vec![0.0f32; frames];
    let (out_l, out_r) = run(&mut reverb, &zeros, &zeros);
    assert_eq!(out_l.len(), frames);
    assert!(out_l.iter().chain(&out_r).all(|&s| s == 0.0));
}

#[test]
fn bypassed_silence_stays_silent_at_chunk_edges() {
    for frames in [0, 1, MAX_CHUNK_FRAMES - 1, MAX_CHUNK_FRAMES, MAX_CHUNK_FRAMES + 1] {
        assert_bypassed_silence(frames);
    }
}

proptest! {
    #[test]
    fn bypassed_silence_stays_silent(frames in 0usize..=4 * MAX_CHUNK_FRAMES) {
        assert_bypassed_silence(frames);
    }
}

#[test]
fn chamber_silence_is_bounded() {
    let mut reverb = reverb();
    reverb.set(Param::Preset.index(), 2.0).unwrap();
    assert_eq!(reverb.preset(), Some(Preset::Chamber));

    let zeros = [0.0f32; 128];
    let (out_l, out_r) = run(&mut reverb, &zeros, &zeros);
    assert_eq!(out_l.len(), 128);
    assert!(out_l
        .iter()
        .chain(&out_r)
        .all(|s| s.is_finite() && (-1.0..=1.0).contains(s)));
}

#[test]
fn dry_impulse_is_deterministic() {
    let config = ReverbConfig::new().with_dry(32767.0).with_wet(0.0);

    let mut impulse = [0.0f32; 16];
    impulse[0] = 1.0;

    let mut first = SoniVerb::<ReferenceEngine>::with_config(&config).unwrap();
    let (l1, r1) = run(&mut first, &impulse, &impulse);

    let mut second = SoniVerb::<ReferenceEngine>::with_config(&config).unwrap();
    let (l2, r2) = run(&mut second, &impulse, &impulse);

    assert_eq!(l1[0], 32766.0 / 32767.0);
    assert!(l1[1..].iter().all(|&s| s == 0.0));
    assert_eq!(l1, l2);
    assert_eq!(r1, r2);
}

#[test]
fn tail_carries_into_next_block() {
    let mut reverb = reverb();

    run(&mut reverb, &[1.0], &[1.0]);
    let zeros = [0.0f32; 8];
    let (out_l, out_r) = run(&mut reverb, &zeros, &zeros);

    assert!(out_l[0] > 0.0);
    assert!(out_r[0] > 0.0);
}

#[test]
fn long_block_matches_small_blocks() {
    let left = signal(1500);
    let right: Vec<f32> = left.iter().map(|s| -s * 0.5).collect();

    let mut whole = reverb();
    let (whole_l, whole_r) = run(&mut whole, &left, &right);

    let mut pieces = reverb();
    let mut piece_l = Vec::new();
    let mut piece_r = Vec::new();
    for (l, r) in left.chunks(100).zip(right.chunks(100)) {
        let (out_l, out_r) = run(&mut pieces, l, r);
        piece_l.extend(out_l);
        piece_r.extend(out_r);
    }

    assert_eq!(whole_l, piece_l);
    assert_eq!(whole_r, piece_r);
    assert_eq!(whole.engine().frames_processed(), 1500);
}

#[test]
fn f64_blocks_match_f32_blocks() {
    let left = signal(300);
    let right: Vec<f32> = left.iter().rev().copied().collect();

    let mut single = reverb();
    let (out32_l, out32_r) = run(&mut single, &left, &right);

    let left64: Vec<f64> = left.iter().map(|&s| s as f64).collect();
    let right64: Vec<f64> = right.iter().map(|&s| s as f64).collect();
    let mut out64_l = vec![0.0f64; left.len()];
    let mut out64_r = vec![0.0f64; right.len()];

    let mut double = reverb();
    let mut block = AudioBlock::new(
        [&left64[..], &right64[..]],
        [&mut out64_l[..], &mut out64_r[..]],
        left.len(),
    );
    double.process(&mut block);

    for (a, b) in out32_l.iter().zip(&out64_l) {
        assert_eq!(*a as f64, *b);
    }
    for (a, b) in out32_r.iter().zip(&out64_r) {
        assert_eq!(*a as f64, *b);
    }
}

#[test]
fn block_uses_shortest_channel() {
    let mut reverb = reverb();
    reverb.set(Param::Bypass.index(), 1.0).unwrap();

    let in_l = [0.5f32; 10];
    let in_r = [0.25f32; 6];
    let mut out_l = [0.0f32; 10];
    let mut out_r = [0.0f32; 10];

    {
        let mut block = AudioBlock::new([&in_l[..], &in_r[..]], [&mut out_l[..], &mut out_r[..]], 10);
        assert_eq!(block.num_frames(), 6);
        reverb.process(&mut block);
        assert_eq!(block.output(RIGHT)[0], 8191.0 / 32767.0);
        assert_eq!(block.output(LEFT).len(), 6);
    }

    assert_eq!(out_l[6..], [0.0; 4]);
    assert_eq!(reverb.engine().frames_processed(), 6);
}

#[test]
fn remote_write_reaches_engine_on_next_block() {
    let mut reverb = reverb();
    let remote = reverb.remote();

    std::thread::spawn(move || {
        remote.set(Param::Dry.index(), 32767.0).unwrap();
        remote.set(Param::Wet.index(), 0.0).unwrap();
    })
    .join()
    .unwrap();

    assert_eq!(reverb.get(Param::Dry.index()).unwrap(), 0.0);

    let (out_l, _) = run(&mut reverb, &[1.0], &[1.0]);
    assert_eq!(reverb.get(Param::Dry.index()).unwrap(), 32767.0);
    assert_eq!(out_l[0], 32766.0 / 32767.0);
}

#[test]
fn remote_rejects_bad_index() {
    let reverb = reverb();
    assert_eq!(
        reverb.remote().set(7, 1.0),
        Err(ReverbError::OutOfRange { index: 7 })
    );
}

#[test]
fn unclamped_values_reach_engine() {
    let mut reverb = reverb();
    // The reference engine clamps; the pipeline forwards as-is.
    reverb.set(Param::Wet.index(), 40000.0).unwrap();
    reverb.set(Param::Preset.index(), 9.0).unwrap();

    assert_eq!(reverb.get(Param::Wet.index()).unwrap(), 32767.0);
    assert_eq!(reverb.preset(), Some(Preset::Room));
}
