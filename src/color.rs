//! Color types for monochrome OLED displays
//!
//! This module defines the [`Color`] enum for the three draw operations a
//! monochrome panel supports: switching a pixel off, on, or inverting it.
//!
//! ## Pixel Representation
//!
//! The display uses a bit-packed format where each pixel is one bit in the
//! framebuffer; a set bit lights the pixel (unless the panel is in inverted
//! mode, see [`Display::set_invert`](crate::display::Display::set_invert)).
//!
//! ## Example
//!
//! ```
//! use ssd1306::Color;
//!
//! // Apply a draw operation to one bit of a buffer byte
//! assert_eq!(Color::On.apply(0b0000_0000, 0b0000_0100), 0b0000_0100);
//! assert_eq!(Color::Off.apply(0b1111_1111, 0b0000_0100), 0b1111_1011);
//! assert_eq!(Color::Invert.apply(0b0000_0100, 0b0000_0100), 0b0000_0000);
//! ```

/// Draw operations for a monochrome display
///
/// `Invert` is a read-modify-write operation rather than a color in the
/// strict sense; it is kept in the color set so higher-level drawing code can
/// use it anywhere a color is accepted.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Color {
    /// Pixel off
    Off,
    /// Pixel on
    On,
    /// Flip the pixel's current state
    Invert,
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU8;
}

#[cfg(feature = "graphics")]
impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::On,
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::Off,
        }
    }
}

impl Color {
    /// Apply this draw operation to the bits selected by `mask`
    ///
    /// Returns `byte` with the masked bits set, cleared, or toggled. Pass
    /// `0xFF` as the mask to apply the operation to a whole buffer byte.
    ///
    /// ## Example
    ///
    /// ```
    /// use ssd1306::Color;
    ///
    /// assert_eq!(Color::On.apply(0x00, 0xFF), 0xFF);
    /// assert_eq!(Color::Off.apply(0xA5, 0xFF), 0x00);
    /// assert_eq!(Color::Invert.apply(0xA5, 0xFF), 0x5A);
    /// ```
    pub fn apply(self, byte: u8, mask: u8) -> u8 {
        match self {
            Self::On => byte | mask,
            Self::Off => byte & !mask,
            Self::Invert => byte ^ mask,
        }
    }
}
