//! Frame sampling and token estimation for Gemini media analysis.
//!
//! This library plans animated-image analysis against the Gemini multimodal
//! API without calling it: it selects which frames of an animation to send,
//! converts them to the pixel encodings the API accepts, optionally bounds
//! their pixel dimensions, and produces deterministic offline token and cost
//! estimates.
//!
//! Decoding the animated container and everything API-facing (requests,
//! responses, file I/O) is owned by the caller. The library only reads decoded
//! frames through the [`FrameSource`] trait and returns plain values, so every
//! function is pure, synchronous, and safe to call from concurrent contexts.

pub mod audio;
pub mod error;
pub mod frames;
pub mod pixel;
pub mod pricing;
pub mod sampler;
pub mod tokens;

#[cfg(test)]
mod frames_test;
#[cfg(test)]
mod pixel_test;

pub use audio::estimate_audio_size;
pub use error::{Error, Result};
pub use frames::{AnimationInfo, DecodedAnimation, FrameSource, NormalizedFrame};
pub use pixel::{PixelEncoding, normalize_frame, resize_to_fit};
pub use pricing::{CostEstimate, ModelRate, PricingTable};
pub use sampler::{SamplingParams, SamplingSpec, sample_frames, sample_indices};
pub use tokens::{TokenEstimate, estimate_frame_tokens, estimate_tokens, image_tokens};
