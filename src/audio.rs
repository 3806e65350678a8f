//! Audio size planning.
//!
//! A pure unit-conversion formula for deciding extraction settings before any
//! audio is processed: given a duration and target bitrate, how large will
//! the track be, and does it fit the inline-upload ceiling.

use tracing::debug;

/// Default extraction bitrate in kbps.
pub const DEFAULT_BITRATE_KBPS: u32 = 64;

/// Bitrates the extraction pipeline supports, highest quality first.
pub const SUPPORTED_BITRATES_KBPS: &[u32] = &[64, 32, 24];

/// Largest payload accepted for inline upload, in MB.
pub const MAX_INLINE_UPLOAD_MB: f64 = 19.5;

/// Estimated audio size in MB for a duration and bitrate, to two decimals.
///
/// `size = duration_sec · bitrate_kbps · 1000 / 8` bytes, reported in decimal
/// megabytes.
///
/// # Example
///
/// ```
/// use gemedia_frames::estimate_audio_size;
///
/// // 10 minutes at 64 kbps
/// assert_eq!(estimate_audio_size(600.0, 64), 4.8);
/// // 30 minutes at 32 kbps
/// assert_eq!(estimate_audio_size(1800.0, 32), 7.2);
/// ```
pub fn estimate_audio_size(duration_sec: f64, bitrate_kbps: u32) -> f64 {
    let size_bytes = (duration_sec * f64::from(bitrate_kbps) * 1000.0) / 8.0;
    let size_mb = size_bytes / 1_000_000.0;
    let rounded = (size_mb * 100.0).round() / 100.0;
    debug!(duration_sec, bitrate_kbps, size_mb = rounded, "estimated audio size");
    rounded
}

/// Whether a payload of this size can be uploaded inline.
pub fn fits_inline_upload(size_mb: f64) -> bool {
    size_mb <= MAX_INLINE_UPLOAD_MB
}
