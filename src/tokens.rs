//! Offline token estimation for image inputs.
//!
//! Reproduces the provider's documented token-counting rule for images so
//! callers can budget a request before making it. The rule is contractual:
//! small images cost one indivisible tile, larger images are tiled at a crop
//! unit derived from the shorter side.

use serde::Serialize;
use tracing::{debug, info};

use crate::frames::NormalizedFrame;

/// Token cost of one tile.
pub const TOKENS_PER_TILE: u64 = 258;

/// Largest dimension (both sides) billed as a single tile.
pub const SMALL_IMAGE_MAX_DIM: u32 = 384;

/// Token count for a single image.
///
/// Images with both sides at most 384 px cost one tile (258 tokens). Larger
/// images are tiled: `crop_unit = floor(min(w, h) / 1.5)`, and the count is
/// `ceil(w / crop_unit) · ceil(h / crop_unit) · 258`.
///
/// # Example
///
/// ```
/// use gemedia_frames::image_tokens;
///
/// assert_eq!(image_tokens(300, 200), 258);
/// // crop_unit = 360, 3×2 tiles
/// assert_eq!(image_tokens(960, 540), 1548);
/// ```
pub fn image_tokens(width: u32, height: u32) -> u64 {
    if width <= SMALL_IMAGE_MAX_DIM && height <= SMALL_IMAGE_MAX_DIM {
        return TOKENS_PER_TILE;
    }

    // floor(min / 1.5) in integer arithmetic; slivers bottom out at one pixel
    let crop_unit = (u64::from(width.min(height)) * 2 / 3).max(1);
    let tiles_w = u64::from(width).div_ceil(crop_unit);
    let tiles_h = u64::from(height).div_ceil(crop_unit);
    let tokens = tiles_w * tiles_h * TOKENS_PER_TILE;
    debug!(width, height, crop_unit, tiles_w, tiles_h, tokens, "tiled token count");
    tokens
}

/// Token totals for a sequence of images.
///
/// Per-image counts keep the input order; `breakdown` is the human-readable
/// report, one line per image plus a total line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenEstimate {
    /// Token count per image, in input order
    pub per_image: Vec<u64>,
    /// Number of images estimated
    pub image_count: usize,
    /// Sum of all per-image counts
    pub total_tokens: u64,
    /// Per-image lines followed by a total line
    pub breakdown: String,
}

/// Estimate tokens for a sequence of image dimensions.
///
/// # Example
///
/// ```
/// use gemedia_frames::estimate_tokens;
///
/// let estimate = estimate_tokens(&[(300, 200), (960, 540)]);
/// assert_eq!(estimate.per_image, vec![258, 1548]);
/// assert_eq!(estimate.total_tokens, 1806);
/// assert!(estimate.breakdown.contains("Frame 2 (960×540): 1,548 tokens"));
/// ```
pub fn estimate_tokens(dimensions: &[(u32, u32)]) -> TokenEstimate {
    let per_image: Vec<u64> = dimensions
        .iter()
        .map(|&(width, height)| image_tokens(width, height))
        .collect();
    let total_tokens: u64 = per_image.iter().sum();

    let mut lines: Vec<String> = dimensions
        .iter()
        .zip(&per_image)
        .enumerate()
        .map(|(i, (&(width, height), &tokens))| {
            format!(
                "Frame {} ({width}×{height}): {} tokens",
                i + 1,
                group_digits(tokens)
            )
        })
        .collect();
    lines.push(format!("Total: {} tokens", group_digits(total_tokens)));

    info!(
        image_count = dimensions.len(),
        total_tokens, "estimated image tokens"
    );

    TokenEstimate {
        per_image,
        image_count: dimensions.len(),
        total_tokens,
        breakdown: lines.join("\n"),
    }
}

/// Estimate tokens for sampled frames.
pub fn estimate_frame_tokens(frames: &[NormalizedFrame]) -> TokenEstimate {
    let dimensions: Vec<(u32, u32)> = frames.iter().map(NormalizedFrame::dimensions).collect();
    estimate_tokens(&dimensions)
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
