//! SSD1306 Monochrome OLED Display Driver
//!
//! A driver for the SSD1306 OLED display controller over I2C, supporting
//! panels up to 128x64 pixels.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration (with `graphics` feature)
//! - Configurable display dimensions with per-variant defaults
//!   (128x64, 128x32, 96x16)
//! - Owned framebuffer with rotation support
//! - Contrast, dimming, inverted mode, and hardware scrolling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ssd1306::{Builder, Color, Dimensions, Display, GraphicDisplay, I2cInterface, Rotation};
//!
//! # use core::convert::Infallible;
//! # struct MockI2c;
//! # impl embedded_hal::i2c::ErrorType for MockI2c { type Error = Infallible; }
//! # impl embedded_hal::i2c::I2c for MockI2c {
//! #     fn transaction(
//! #         &mut self,
//! #         _address: u8,
//! #         _operations: &mut [embedded_hal::i2c::Operation<'_>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # let i2c = MockI2c;
//! let interface = I2cInterface::with_default_address(i2c);
//! let dims = match Dimensions::new(64, 128) {
//!     Ok(dims) => dims,
//!     Err(_) => return,
//! };
//! let config = match Builder::new().dimensions(dims).rotation(Rotation::Rotate0).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let mut display = GraphicDisplay::new(Display::new(interface, config), [0u8; 1024]);
//! let _ = display.init();
//! display.set_pixel(10, 10, Color::On);
//! let _ = display.flush();
//! ```

#![no_std]

#[cfg(any(test, feature = "alloc"))]
extern crate alloc;

/// Monochrome draw operations
pub mod color;
/// SSD1306 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// In-memory pixel buffer
pub mod framebuffer;
/// Hardware interface abstraction
pub mod interface;
/// Coordinate rotation utilities
pub mod rotation;

/// Graphics support via embedded-graphics (requires `graphics` feature)
#[cfg(feature = "graphics")]
pub mod graphics;

pub use color::Color;
pub use config::{
    Builder, Config, Dimensions, MAX_COLUMNS, MAX_ROWS, PanelDefaults, Rotation, VccSource,
};
pub use display::{Display, ScrollDirection};
pub use error::{BuilderError, Error};
pub use framebuffer::Framebuffer;
pub use interface::{ALTERNATE_ADDRESS, DEFAULT_ADDRESS, DisplayInterface, I2cInterface};

#[cfg(feature = "graphics")]
pub use graphics::GraphicDisplay;
