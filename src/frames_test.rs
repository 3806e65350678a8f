//! Tests for the animated-image boundary types.

use image::{Delay, DynamicImage, Frame, GrayImage, RgbImage, RgbaImage};

use crate::error::Error;
use crate::frames::{
    AnimationInfo, DEFAULT_FRAME_DURATION_MS, DecodedAnimation, FrameSource, NormalizedFrame,
};

fn rgb_frames(count: usize) -> Vec<DynamicImage> {
    (0..count)
        .map(|_| DynamicImage::ImageRgb8(RgbImage::new(4, 4)))
        .collect()
}

#[test]
fn test_new_rejects_empty_frame_list() {
    let err = DecodedAnimation::new(vec![], 100.0).unwrap_err();
    assert!(matches!(err, Error::InvalidParameter { param: "frames", .. }));
}

#[test]
fn test_non_positive_duration_falls_back_to_default() {
    let animation = DecodedAnimation::new(rgb_frames(3), 0.0).unwrap();
    assert_eq!(animation.frame_duration_ms(), DEFAULT_FRAME_DURATION_MS);

    let animation = DecodedAnimation::new(rgb_frames(3), -5.0).unwrap();
    assert_eq!(animation.frame_duration_ms(), DEFAULT_FRAME_DURATION_MS);

    let animation = DecodedAnimation::new(rgb_frames(3), f64::NAN).unwrap();
    assert_eq!(animation.frame_duration_ms(), DEFAULT_FRAME_DURATION_MS);
}

#[test]
fn test_is_animated_requires_multiple_frames() {
    let single = DecodedAnimation::new(rgb_frames(1), 100.0).unwrap();
    assert!(!single.is_animated());

    let multi = DecodedAnimation::new(rgb_frames(2), 100.0).unwrap();
    assert!(multi.is_animated());
}

#[test]
fn test_frame_at_out_of_range() {
    let mut animation = DecodedAnimation::new(rgb_frames(3), 100.0).unwrap();
    assert!(animation.frame_at(2).is_ok());

    let err = animation.frame_at(3).unwrap_err();
    assert!(matches!(
        err,
        Error::FrameOutOfRange {
            index: 3,
            frame_count: 3
        }
    ));
}

#[test]
fn test_from_animation_frames_takes_first_delay() {
    let frames = vec![
        Frame::from_parts(RgbaImage::new(4, 4), 0, 0, Delay::from_numer_denom_ms(40, 1)),
        Frame::from_parts(RgbaImage::new(4, 4), 0, 0, Delay::from_numer_denom_ms(80, 1)),
    ];
    let mut animation = DecodedAnimation::from_animation_frames(frames).unwrap();
    assert_eq!(animation.frame_duration_ms(), 40.0);
    assert_eq!(animation.frame_count(), 2);
    // Decoder frames arrive as RGBA buffers
    assert!(animation.frame_at(0).unwrap().as_rgba8().is_some());
}

#[test]
fn test_from_animation_frames_zero_delay_falls_back() {
    let frames = vec![Frame::from_parts(
        RgbaImage::new(4, 4),
        0,
        0,
        Delay::from_numer_denom_ms(0, 1),
    )];
    let animation = DecodedAnimation::from_animation_frames(frames).unwrap();
    assert_eq!(animation.frame_duration_ms(), DEFAULT_FRAME_DURATION_MS);
}

#[test]
fn test_from_animation_frames_rejects_empty() {
    assert!(DecodedAnimation::from_animation_frames(vec![]).is_err());
}

#[test]
fn test_animation_info_derives_timing() {
    let animation = DecodedAnimation::new(rgb_frames(30), 100.0).unwrap();
    let info = AnimationInfo::of(&animation);
    assert_eq!(info.total_frames, 30);
    assert_eq!(info.duration_sec(), 3.0);
    assert_eq!(info.native_fps(), 10.0);
}

#[test]
fn test_normalized_frame_accessors() {
    let frame = NormalizedFrame {
        index: 12,
        image: DynamicImage::ImageLuma8(GrayImage::new(640, 480)),
    };
    assert_eq!(frame.width(), 640);
    assert_eq!(frame.height(), 480);
    assert_eq!(frame.dimensions(), (640, 480));
}

#[test]
fn test_normalized_frame_resized_keeps_index() {
    let frame = NormalizedFrame {
        index: 7,
        image: DynamicImage::ImageRgb8(RgbImage::new(1000, 500)),
    };
    let resized = frame.resized(Some(100));
    assert_eq!(resized.index, 7);
    assert_eq!(resized.dimensions(), (100, 50));
}
