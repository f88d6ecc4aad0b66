//! Error types for the driver
//!
//! This module defines error types for configuration building
//! ([`BuilderError`]) and display operations ([`Error`]).
//!
//! ## Example
//!
//! ```
//! use ssd1306::{Builder, Dimensions, BuilderError};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Invalid dimensions
//! let result = Dimensions::new(80, 128); // Too many rows
//! assert!(result.is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum columns (width) supported by the SSD1306 controller
///
/// The SSD1306 drives up to 128 segment outputs.
///
/// NOTE: Many panels wire fewer segments (96x16, 72x40, 64x48); configure
/// [`crate::Dimensions`] accordingly.
pub const MAX_COLUMNS: u8 = 128;

/// Maximum rows (height) supported by the SSD1306 controller
///
/// The SSD1306 drives up to 64 common outputs.
pub const MAX_ROWS: u8 = 64;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
/// This allows error handling code to match on the underlying bus error.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Bus error
    ///
    /// Wraps the underlying transport error from the [`DisplayInterface`]
    /// implementation.
    Interface(I::Error),
    /// Buffer is too small for the display
    ///
    /// The provided buffer must be at least `dimensions.buffer_size()` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
    /// Invalid scroll page range
    ///
    /// Scroll regions are addressed in pages; the range must satisfy
    /// `start <= end < dimensions.pages()`.
    InvalidPageRange {
        /// First page of the requested range
        start: u8,
        /// Last page of the requested range
        end: u8,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(_) => write!(f, "Interface error"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
            Self::InvalidPageRange { start, end } => {
                write!(f, "Invalid scroll page range: start={start}, end={end}")
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
///
/// These errors occur during the builder pattern before the display is
/// created, and when sizing a [`Framebuffer`](crate::framebuffer::Framebuffer).
#[derive(Debug, PartialEq)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be
    /// called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for
    /// constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u8,
        /// Number of columns (width) requested
        cols: u8,
    },
    /// Backing buffer is too small for the requested dimensions
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {cols}x{rows} (max {MAX_COLUMNS}x{MAX_ROWS})"
            ),
            Self::BufferTooSmall { required, provided } => write!(
                f,
                "Buffer too small: required {required} bytes, provided {provided}"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}
