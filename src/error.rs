//! Error types for frame sampling and estimation.
//!
//! This module provides a unified error hierarchy using `thiserror` for
//! consistent error handling across the library.
//!
//! # Error Categories
//!
//! - `MissingParameter` / `InvalidParameter` / `UnknownMode`: caller-supplied
//!   sampling parameters that fail validation
//! - `UnsupportedEncoding`: a decoded pixel encoding outside the known set
//! - `FrameOutOfRange`: a seek past the end of a frame source
//! - `Pricing`: an injected pricing table that fails validation
//!
//! All errors here are deterministic, caller-input-dependent failures. None
//! are transient, so there is nothing to retry: callers surface them directly.

use thiserror::Error;

/// Unified error type for the library.
#[derive(Debug, Error)]
pub enum Error {
    /// A sampling mode was selected without its required numeric parameter.
    #[error("Parameter '{param}' required for mode '{mode}'")]
    MissingParameter {
        /// The parameter that was not supplied
        param: &'static str,
        /// The sampling mode that requires it
        mode: &'static str,
    },

    /// A supplied parameter value is outside its valid range.
    #[error("Invalid value for '{param}': {reason}")]
    InvalidParameter {
        /// The parameter that failed validation
        param: &'static str,
        /// Description of the validation failure
        reason: String,
    },

    /// The sampling mode tag is not one of the known modes.
    #[error("Unknown sampling mode: {0}")]
    UnknownMode(String),

    /// A frame's pixel encoding falls outside the known encoding set.
    ///
    /// Normalization is total over every encoding the decoder currently
    /// produces, so this surfaces only if a future decoder reports an
    /// encoding this library does not yet classify. It is a hard failure,
    /// never a silent default.
    #[error("Unsupported pixel encoding: {0}")]
    UnsupportedEncoding(String),

    /// A frame index beyond the end of the source was requested.
    #[error("Frame index {index} out of range for {frame_count} frames")]
    FrameOutOfRange {
        /// The requested frame index
        index: usize,
        /// Number of frames in the source
        frame_count: usize,
    },

    /// The injected pricing table is not usable.
    #[error("Invalid pricing table: {0}")]
    Pricing(String),
}

impl Error {
    /// Create a missing-parameter error for a sampling mode.
    ///
    /// # Example
    ///
    /// ```
    /// use gemedia_frames::Error;
    ///
    /// let err = Error::missing_parameter("fps", "fps");
    /// assert!(err.to_string().contains("'fps'"));
    /// ```
    pub fn missing_parameter(param: &'static str, mode: &'static str) -> Self {
        Error::MissingParameter { param, mode }
    }

    /// Create an invalid-parameter error.
    ///
    /// # Example
    ///
    /// ```
    /// use gemedia_frames::Error;
    ///
    /// let err = Error::invalid_parameter("frame_count", "must be at least 1");
    /// assert!(err.to_string().contains("frame_count"));
    /// ```
    pub fn invalid_parameter(param: &'static str, reason: impl Into<String>) -> Self {
        Error::InvalidParameter {
            param,
            reason: reason.into(),
        }
    }

    /// Create an unknown-mode error.
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        Error::UnknownMode(mode.into())
    }

    /// Create an unsupported-encoding error.
    pub fn unsupported_encoding(encoding: impl Into<String>) -> Self {
        Error::UnsupportedEncoding(encoding.into())
    }

    /// Create a frame-out-of-range error.
    pub fn frame_out_of_range(index: usize, frame_count: usize) -> Self {
        Error::FrameOutOfRange { index, frame_count }
    }

    /// Create a pricing-table error.
    pub fn pricing(message: impl Into<String>) -> Self {
        Error::Pricing(message.into())
    }
}

/// Result type alias using the unified Error type.
pub type Result<T> = std::result::Result<T, Error>;
