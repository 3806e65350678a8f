//! Animated-image boundary types.
//!
//! The library never decodes container formats itself. Callers decode an
//! animation with whatever decoder they use and hand the result in through
//! the [`FrameSource`] trait, either directly or via [`DecodedAnimation`],
//! the in-memory implementation.

use image::{DynamicImage, Frame, GenericImageView};

use crate::error::{Error, Result};
use crate::pixel::resize_to_fit;

/// Per-frame display duration assumed when a container reports none.
pub const DEFAULT_FRAME_DURATION_MS: f64 = 100.0;

/// A decoded animated image the sampler can read frames from.
///
/// Implementations report a single per-frame display duration for the whole
/// animation. Containers with variable per-frame delays are approximated by
/// the first frame's delay; the sampling math inherits that approximation.
/// Reported durations must be positive and finite.
pub trait FrameSource {
    /// Whether the source holds more than one frame.
    fn is_animated(&self) -> bool;

    /// Total number of frames.
    fn frame_count(&self) -> usize;

    /// Display duration of a frame in milliseconds.
    fn frame_duration_ms(&self) -> f64;

    /// Seek to `index` and return that frame's pixel buffer.
    ///
    /// This is a read-only positional operation: it must not alter which
    /// frames exist or their order.
    ///
    /// # Errors
    /// Returns [`Error::FrameOutOfRange`] if `index >= frame_count()`.
    fn frame_at(&mut self, index: usize) -> Result<DynamicImage>;
}

/// Timing metadata derived from a frame source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationInfo {
    /// Total number of frames
    pub total_frames: usize,
    /// Per-frame display duration in milliseconds
    pub frame_duration_ms: f64,
}

impl AnimationInfo {
    /// Read timing metadata from a frame source.
    pub fn of<S: FrameSource + ?Sized>(source: &S) -> Self {
        Self {
            total_frames: source.frame_count(),
            frame_duration_ms: source.frame_duration_ms(),
        }
    }

    /// Total animation duration in seconds.
    pub fn duration_sec(&self) -> f64 {
        self.frame_duration_ms * self.total_frames as f64 / 1000.0
    }

    /// Native playback rate in frames per second.
    pub fn native_fps(&self) -> f64 {
        1000.0 / self.frame_duration_ms
    }
}

/// An owned, in-memory [`FrameSource`] over already-decoded frames.
#[derive(Debug, Clone)]
pub struct DecodedAnimation {
    frames: Vec<DynamicImage>,
    frame_duration_ms: f64,
}

impl DecodedAnimation {
    /// Build a source from decoded frames and a per-frame display duration.
    ///
    /// A non-positive or non-finite duration falls back to
    /// [`DEFAULT_FRAME_DURATION_MS`], matching containers that omit timing.
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if `frames` is empty.
    pub fn new(frames: Vec<DynamicImage>, frame_duration_ms: f64) -> Result<Self> {
        if frames.is_empty() {
            return Err(Error::invalid_parameter(
                "frames",
                "must contain at least one frame",
            ));
        }
        let frame_duration_ms = if frame_duration_ms.is_finite() && frame_duration_ms > 0.0 {
            frame_duration_ms
        } else {
            DEFAULT_FRAME_DURATION_MS
        };
        Ok(Self {
            frames,
            frame_duration_ms,
        })
    }

    /// Adapt frames produced by an [`image::AnimationDecoder`].
    ///
    /// The per-frame duration is taken from the first frame's delay; a zero
    /// delay falls back to [`DEFAULT_FRAME_DURATION_MS`].
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] if `frames` is empty.
    pub fn from_animation_frames(frames: Vec<Frame>) -> Result<Self> {
        let duration_ms = frames
            .first()
            .map(|frame| {
                let (numer, denom) = frame.delay().numer_denom_ms();
                if numer > 0 && denom > 0 {
                    f64::from(numer) / f64::from(denom)
                } else {
                    DEFAULT_FRAME_DURATION_MS
                }
            })
            .unwrap_or(DEFAULT_FRAME_DURATION_MS);
        let frames = frames
            .into_iter()
            .map(|frame| DynamicImage::ImageRgba8(frame.into_buffer()))
            .collect();
        Self::new(frames, duration_ms)
    }
}

impl FrameSource for DecodedAnimation {
    fn is_animated(&self) -> bool {
        self.frames.len() > 1
    }

    fn frame_count(&self) -> usize {
        self.frames.len()
    }

    fn frame_duration_ms(&self) -> f64 {
        self.frame_duration_ms
    }

    fn frame_at(&mut self, index: usize) -> Result<DynamicImage> {
        self.frames
            .get(index)
            .cloned()
            .ok_or_else(|| Error::frame_out_of_range(index, self.frames.len()))
    }
}

/// A sampled frame in one of the canonical pixel encodings.
///
/// Carries the index the frame was sampled from, so downstream reporting can
/// refer back to positions in the source animation. Produced by
/// [`sample_frames`](crate::sampler::sample_frames); the raw frame it was
/// derived from is no longer needed once normalization completes.
#[derive(Debug, Clone)]
pub struct NormalizedFrame {
    /// Index of this frame in the source animation
    pub index: usize,
    /// Pixel data in one of the canonical encodings
    pub image: DynamicImage,
}

impl NormalizedFrame {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// Bound the longer side to `max_dimension`, preserving aspect ratio.
    ///
    /// `None` or an already-satisfied bound returns the frame unchanged.
    pub fn resized(self, max_dimension: Option<u32>) -> Self {
        Self {
            index: self.index,
            image: resize_to_fit(self.image, max_dimension),
        }
    }
}
