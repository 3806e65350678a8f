//! Pixel-encoding normalization and resizing.
//!
//! The downstream API accepts three decoded encodings: 8-bit grayscale,
//! 8-bit RGB, and 8-bit RGBA. [`normalize_frame`] maps every encoding the
//! decoder produces onto that set; anything it cannot classify is a hard
//! [`Error::UnsupportedEncoding`], never a silent default. Palette-indexed
//! containers arrive already expanded by the decoder, so classification
//! covers the decoded color types only.

use image::imageops::FilterType;
use image::{ColorType, DynamicImage, GenericImageView};
use tracing::debug;

use crate::error::{Error, Result};

/// Classification of a decoded frame's pixel encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelEncoding {
    /// 8-bit single-channel grayscale; passed through unchanged
    Gray,
    /// Grayscale with alpha; converted to RGB
    GrayAlpha,
    /// 8-bit three-channel color; passed through unchanged
    Rgb,
    /// 8-bit color with alpha; passed through unchanged
    Rgba,
    /// Higher bit-depth or floating-point encodings; converted to 8-bit RGB
    Extended,
}

impl PixelEncoding {
    /// Classify a decoder-reported color type.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedEncoding`] for a color type outside the
    /// known set (the upstream enum is non-exhaustive).
    pub fn classify(color: ColorType) -> Result<Self> {
        match color {
            ColorType::L8 => Ok(PixelEncoding::Gray),
            ColorType::La8 | ColorType::La16 => Ok(PixelEncoding::GrayAlpha),
            ColorType::Rgb8 => Ok(PixelEncoding::Rgb),
            ColorType::Rgba8 => Ok(PixelEncoding::Rgba),
            ColorType::L16 | ColorType::Rgb16 | ColorType::Rgba16 => Ok(PixelEncoding::Extended),
            ColorType::Rgb32F | ColorType::Rgba32F => Ok(PixelEncoding::Extended),
            other => Err(Error::unsupported_encoding(format!("{other:?}"))),
        }
    }
}

impl std::fmt::Display for PixelEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PixelEncoding::Gray => write!(f, "gray"),
            PixelEncoding::GrayAlpha => write!(f, "gray-alpha"),
            PixelEncoding::Rgb => write!(f, "rgb"),
            PixelEncoding::Rgba => write!(f, "rgba"),
            PixelEncoding::Extended => write!(f, "extended"),
        }
    }
}

/// Convert a frame to one of the canonical encodings.
///
/// Grayscale, RGB, and RGBA 8-bit frames pass through unchanged; everything
/// else becomes 8-bit RGB. The output is always one of `Luma8`, `Rgb8`, or
/// `Rgba8`.
///
/// # Errors
/// Returns [`Error::UnsupportedEncoding`] if the frame's color type cannot
/// be classified.
pub fn normalize_frame(frame: DynamicImage) -> Result<DynamicImage> {
    let encoding = PixelEncoding::classify(frame.color())?;
    let normalized = match encoding {
        PixelEncoding::Gray | PixelEncoding::Rgb | PixelEncoding::Rgba => frame,
        PixelEncoding::GrayAlpha | PixelEncoding::Extended => {
            debug!(%encoding, "converting frame to rgb");
            DynamicImage::ImageRgb8(frame.to_rgb8())
        }
    };
    Ok(normalized)
}

/// Bound an image's longer side to `max_dimension`, preserving aspect ratio.
///
/// Returns the image unchanged when `max_dimension` is `None` or the longer
/// side already fits. Otherwise both dimensions are scaled by
/// `max_dimension / longer_side`, rounded to the nearest pixel (at least 1),
/// and resampled with Lanczos3.
pub fn resize_to_fit(image: DynamicImage, max_dimension: Option<u32>) -> DynamicImage {
    let Some(bound) = max_dimension else {
        return image;
    };
    let (width, height) = image.dimensions();
    let longer = width.max(height);
    if longer <= bound {
        return image;
    }

    let scale = f64::from(bound) / f64::from(longer);
    let new_width = ((f64::from(width) * scale).round() as u32).max(1);
    let new_height = ((f64::from(height) * scale).round() as u32).max(1);
    debug!(width, height, new_width, new_height, bound, "resizing frame");
    image.resize_exact(new_width, new_height, FilterType::Lanczos3)
}
