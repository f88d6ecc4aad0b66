//! In-memory pixel buffer
//!
//! This module provides the [`Framebuffer`] struct: an owned byte arena with
//! explicit dimension and rotation metadata, mirrored to the physical panel
//! by [`Display::flush`](crate::display::Display::flush).
//!
//! The layout matches the controller's RAM: column-major pages of 8
//! vertically stacked pixels per byte (see [`crate::rotation`] for the
//! addressing math). Pixel operations change only this buffer; nothing is
//! visible on the panel until the buffer is flushed.
//!
//! ## Example
//!
//! ```
//! use ssd1306::{Color, Dimensions, Framebuffer, Rotation};
//!
//! let dims = Dimensions::new(32, 128).unwrap();
//! let mut fb = Framebuffer::new([0u8; 512], dims, Rotation::Rotate0);
//!
//! fb.set_pixel(10, 20, Color::On);
//! assert_eq!(fb.pixel(10, 20), Some(true));
//!
//! fb.set_pixel(10, 20, Color::Invert);
//! assert_eq!(fb.pixel(10, 20), Some(false));
//!
//! // Out of bounds reads are None, writes are ignored
//! assert_eq!(fb.pixel(500, 0), None);
//! ```

use crate::color::Color;
use crate::config::{Dimensions, Rotation};
use crate::error::BuilderError;
use crate::rotation::apply_rotation;

/// Pixel buffer with dimension and rotation metadata
///
/// Generic over the backing storage so callers can use a stack array, a
/// static buffer, or (with the `alloc` feature) a `Vec<u8>`. The storage is
/// moved in at construction, validated against the dimensions, and owned by
/// the framebuffer until [`into_inner`](Self::into_inner).
///
/// ## Type Parameters
///
/// * `B` - Backing storage implementing `AsRef<[u8]> + AsMut<[u8]>`
pub struct Framebuffer<B> {
    /// Backing storage
    buffer: B,
    /// Physical (unrotated) dimensions
    dimensions: Dimensions,
    /// Current rotation
    rotation: Rotation,
}

impl<B> Framebuffer<B>
where
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new framebuffer
    ///
    /// # Panics
    ///
    /// Panics if the buffer is smaller than `dimensions.buffer_size()`.
    /// The required size is always calculated from physical (unrotated)
    /// dimensions regardless of rotation setting.
    pub fn new(buffer: B, dimensions: Dimensions, rotation: Rotation) -> Self {
        let required = dimensions.buffer_size();
        assert!(
            buffer.as_ref().len() >= required,
            "buffer too small: required {} bytes, got {}",
            required,
            buffer.as_ref().len()
        );
        Self {
            buffer,
            dimensions,
            rotation,
        }
    }

    /// Try to create a new framebuffer, returning an error if the buffer is
    /// too small
    ///
    /// This is the fallible version of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::BufferTooSmall` if the buffer is smaller than
    /// `dimensions.buffer_size()`.
    pub fn try_new(buffer: B, dimensions: Dimensions, rotation: Rotation) -> Result<Self, BuilderError> {
        let required = dimensions.buffer_size();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(BuilderError::BufferTooSmall { required, provided });
        }
        Ok(Self {
            buffer,
            dimensions,
            rotation,
        })
    }

    /// Width in pixels, adjusted for the current rotation
    pub fn width(&self) -> u32 {
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => self.dimensions.cols as u32,
            Rotation::Rotate90 | Rotation::Rotate270 => self.dimensions.rows as u32,
        }
    }

    /// Height in pixels, adjusted for the current rotation
    pub fn height(&self) -> u32 {
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => self.dimensions.rows as u32,
            Rotation::Rotate90 | Rotation::Rotate270 => self.dimensions.cols as u32,
        }
    }

    /// Physical (unrotated) dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Change the rotation
    ///
    /// Affects subsequent pixel operations only; existing buffer contents
    /// are not remapped.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    /// Set, clear, or invert a single pixel
    ///
    /// Coordinates are logical (rotation applied). Out-of-bounds
    /// coordinates are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let Some((index, mask)) = self.locate(x, y) else {
            return;
        };
        let buffer = self.buffer.as_mut();
        if let Some(byte) = buffer.get_mut(index) {
            *byte = color.apply(*byte, mask);
        }
    }

    /// Read a single pixel
    ///
    /// Returns `Some(true)` if the pixel is on, `Some(false)` if off, `None`
    /// if the coordinates are out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<bool> {
        let (index, mask) = self.locate(x, y)?;
        self.buffer
            .as_ref()
            .get(index)
            .map(|byte| byte & mask != 0)
    }

    /// Fill the entire buffer with a draw operation
    ///
    /// [`Color::Invert`] flips every pixel.
    pub fn fill(&mut self, color: Color) {
        let size = self.dimensions.buffer_size();
        for byte in &mut self.buffer.as_mut()[..size] {
            *byte = color.apply(*byte, 0xFF);
        }
    }

    /// Clear the buffer (all pixels off)
    pub fn clear(&mut self) {
        self.fill(Color::Off);
    }

    /// Raw buffer contents, exactly `dimensions.buffer_size()` bytes
    ///
    /// This is the slice [`Display::flush`](crate::display::Display::flush)
    /// expects.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.dimensions.buffer_size()]
    }

    /// Mutable raw buffer contents for trusted callers
    ///
    /// Bytes are column-major pages; see the module docs for the layout.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        let size = self.dimensions.buffer_size();
        &mut self.buffer.as_mut()[..size]
    }

    /// Consume the framebuffer and return the backing storage
    pub fn into_inner(self) -> B {
        self.buffer
    }

    fn locate(&self, x: u32, y: u32) -> Option<(usize, u8)> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(apply_rotation(
            x,
            y,
            self.dimensions.cols as u32,
            self.dimensions.rows as u32,
            self.rotation,
        ))
    }
}
