//! Frame selection for animated-image analysis.
//!
//! Sending every frame of an animation to the API is rarely affordable, so
//! callers choose one of three strategies: a target extraction rate (`fps`),
//! an exact frame budget (`total`), or a fixed time gap between frames
//! (`interval`). Selection is deterministic: the same animation and spec
//! always produce the same indices.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::error::{Error, Result};
use crate::frames::{AnimationInfo, FrameSource, NormalizedFrame};
use crate::pixel::normalize_frame;

/// Loosely-typed sampling parameters, as they arrive from a tool invocation.
///
/// Exactly one of `fps`, `frame_count`, or `interval_sec` is consulted,
/// depending on `mode`. A missing parameter for the active mode is an error,
/// never a silent default. Use [`SamplingParams::resolve`] to obtain the
/// validated [`SamplingSpec`].
#[derive(Debug, Clone, Deserialize, Serialize, JsonSchema)]
pub struct SamplingParams {
    /// Extraction mode: "fps", "total", or "interval". Default: "total".
    #[serde(default = "default_mode")]
    pub mode: String,
    /// Frames per second to extract (mode "fps").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fps: Option<f64>,
    /// Exact number of frames to extract (mode "total").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_count: Option<usize>,
    /// Seconds between extracted frames (mode "interval").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval_sec: Option<f64>,
}

fn default_mode() -> String {
    "total".to_string()
}

impl SamplingParams {
    /// Validate and convert to a typed [`SamplingSpec`].
    ///
    /// # Errors
    /// - [`Error::MissingParameter`] if the active mode's parameter is absent
    /// - [`Error::UnknownMode`] for an unrecognized mode tag
    /// - [`Error::InvalidParameter`] for a non-positive value
    ///
    /// # Example
    ///
    /// ```
    /// use gemedia_frames::{SamplingParams, SamplingSpec};
    ///
    /// let params: SamplingParams =
    ///     serde_json::from_str(r#"{"mode": "fps", "fps": 2.0}"#).unwrap();
    /// assert_eq!(params.resolve().unwrap(), SamplingSpec::Fps { target_fps: 2.0 });
    ///
    /// let params: SamplingParams = serde_json::from_str(r#"{"mode": "fps"}"#).unwrap();
    /// assert!(params.resolve().is_err());
    /// ```
    pub fn resolve(&self) -> Result<SamplingSpec> {
        let spec = match self.mode.as_str() {
            "fps" => SamplingSpec::Fps {
                target_fps: self
                    .fps
                    .ok_or_else(|| Error::missing_parameter("fps", "fps"))?,
            },
            "total" => SamplingSpec::Total {
                frame_count: self
                    .frame_count
                    .ok_or_else(|| Error::missing_parameter("frame_count", "total"))?,
            },
            "interval" => SamplingSpec::Interval {
                interval_sec: self
                    .interval_sec
                    .ok_or_else(|| Error::missing_parameter("interval_sec", "interval"))?,
            },
            other => return Err(Error::unknown_mode(other)),
        };
        spec.validate()?;
        Ok(spec)
    }
}

/// A validated frame-selection strategy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SamplingSpec {
    /// Extract at a target rate; collapses to every frame at or above the
    /// native rate (frames are never invented)
    Fps {
        /// Desired extraction rate in frames per second
        target_fps: f64,
    },
    /// Extract exactly this many frames, evenly spread from the first
    Total {
        /// Number of frames to extract
        frame_count: usize,
    },
    /// Extract one frame per time interval
    Interval {
        /// Seconds between extracted frames
        interval_sec: f64,
    },
}

impl SamplingSpec {
    /// Check that the numeric parameter is positive (and finite).
    ///
    /// # Errors
    /// Returns [`Error::InvalidParameter`] otherwise.
    pub fn validate(&self) -> Result<()> {
        match *self {
            SamplingSpec::Fps { target_fps } if !(target_fps.is_finite() && target_fps > 0.0) => {
                Err(Error::invalid_parameter(
                    "fps",
                    "must be a positive, finite number",
                ))
            }
            SamplingSpec::Total { frame_count } if frame_count == 0 => {
                Err(Error::invalid_parameter("frame_count", "must be at least 1"))
            }
            SamplingSpec::Interval { interval_sec }
                if !(interval_sec.is_finite() && interval_sec > 0.0) =>
            {
                Err(Error::invalid_parameter(
                    "interval_sec",
                    "must be a positive, finite number",
                ))
            }
            _ => Ok(()),
        }
    }

    /// The mode tag this spec corresponds to.
    pub fn mode_name(&self) -> &'static str {
        match self {
            SamplingSpec::Fps { .. } => "fps",
            SamplingSpec::Total { .. } => "total",
            SamplingSpec::Interval { .. } => "interval",
        }
    }

    /// Human-readable description of the extraction method, suitable for
    /// inclusion in an analysis prompt or report.
    pub fn describe(&self) -> String {
        match *self {
            SamplingSpec::Fps { target_fps } => {
                format!("sampled at {target_fps} frames/sec")
            }
            SamplingSpec::Total { frame_count } => {
                format!("{frame_count} frames evenly distributed")
            }
            SamplingSpec::Interval { interval_sec } => {
                format!("one frame every {interval_sec}s")
            }
        }
    }
}

/// Compute the frame indices a spec selects from an animation.
///
/// The result is strictly increasing, starts at 0, and every index is below
/// `info.total_frames`. Semantics per mode:
///
/// - **Fps**: `step = max(1, floor(native_fps / target_fps))`, indices
///   `0, step, 2·step, …`. A target at or above the native rate returns
///   every index.
/// - **Total**: a request for at least `total_frames` frames returns every
///   index. Otherwise `step = total_frames / frame_count` (real-valued) and
///   the indices are `floor(i · step)` — exactly `frame_count` of them,
///   evenly spread. The last frame is not guaranteed to be included; that
///   spread is part of the reproducibility contract and must not change.
/// - **Interval**: `step = max(1, floor(interval_sec · frames_per_sec))`.
///   A non-positive total duration degrades to `[0]`.
///
/// # Errors
/// Returns [`Error::InvalidParameter`] if the spec fails validation.
///
/// # Example
///
/// ```
/// use gemedia_frames::{AnimationInfo, SamplingSpec, sample_indices};
///
/// let info = AnimationInfo { total_frames: 30, frame_duration_ms: 100.0 };
/// let indices = sample_indices(&info, &SamplingSpec::Total { frame_count: 5 })?;
/// assert_eq!(indices, vec![0, 6, 12, 18, 24]);
/// # Ok::<(), gemedia_frames::Error>(())
/// ```
pub fn sample_indices(info: &AnimationInfo, spec: &SamplingSpec) -> Result<Vec<usize>> {
    spec.validate()?;
    let indices = match *spec {
        SamplingSpec::Fps { target_fps } => {
            fps_indices(info.total_frames, info.native_fps(), target_fps)
        }
        SamplingSpec::Total { frame_count } => total_indices(info.total_frames, frame_count),
        SamplingSpec::Interval { interval_sec } => {
            interval_indices(info.total_frames, info.duration_sec(), interval_sec)
        }
    };
    Ok(indices)
}

fn fps_indices(total_frames: usize, native_fps: f64, target_fps: f64) -> Vec<usize> {
    let step = ((native_fps / target_fps).floor() as usize).max(1);
    (0..total_frames).step_by(step).collect()
}

fn total_indices(total_frames: usize, frame_count: usize) -> Vec<usize> {
    if frame_count >= total_frames {
        return (0..total_frames).collect();
    }
    let step = total_frames as f64 / frame_count as f64;
    (0..frame_count).map(|i| (i as f64 * step) as usize).collect()
}

fn interval_indices(total_frames: usize, total_duration_sec: f64, interval_sec: f64) -> Vec<usize> {
    if total_duration_sec <= 0.0 {
        return vec![0];
    }
    let frames_per_sec = total_frames as f64 / total_duration_sec;
    let step = ((interval_sec * frames_per_sec).floor() as usize).max(1);
    (0..total_frames).step_by(step).collect()
}

/// Select, seek, and normalize frames from an animation.
///
/// A non-animated source short-circuits to its single normalized frame
/// regardless of the requested mode, so a valid image never yields an empty
/// result. Otherwise the spec is validated, indices are computed with
/// [`sample_indices`], and each selected frame is normalized to a canonical
/// encoding. Output order matches index order.
///
/// # Errors
/// - [`Error::InvalidParameter`] if the spec fails validation
/// - [`Error::FrameOutOfRange`] if the source misreports its frame count
/// - [`Error::UnsupportedEncoding`] if a frame cannot be normalized
#[instrument(level = "debug", skip(source, spec), fields(mode = spec.mode_name()))]
pub fn sample_frames<S: FrameSource>(
    source: &mut S,
    spec: &SamplingSpec,
) -> Result<Vec<NormalizedFrame>> {
    if !source.is_animated() {
        debug!("source is not animated, returning single frame");
        let image = normalize_frame(source.frame_at(0)?)?;
        return Ok(vec![NormalizedFrame { index: 0, image }]);
    }

    spec.validate()?;
    let info = AnimationInfo::of(source);
    info!(
        total_frames = info.total_frames,
        duration_sec = info.duration_sec(),
        native_fps = info.native_fps(),
        "animation metadata"
    );

    let indices = sample_indices(&info, spec)?;
    info!(count = indices.len(), "extracting frames");

    let mut frames = Vec::with_capacity(indices.len());
    for index in indices {
        let image = normalize_frame(source.frame_at(index)?)?;
        frames.push(NormalizedFrame { index, image });
    }
    Ok(frames)
}
