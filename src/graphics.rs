//! Graphics support via embedded-graphics
//!
//! This module provides the [`GraphicDisplay`] struct which combines
//! [`Display`] with a [`Framebuffer`] and implements the
//! [`DrawTarget`](embedded_graphics_core::draw_target::DrawTarget) trait from
//! the embedded-graphics ecosystem.
//!
//! ## Features
//!
//! - 2D graphics primitives (lines, rectangles, circles, text, etc.)
//! - Image support via embedded-graphics image modules
//! - Rotation support
//!
//! ## Example
//!
//! ```rust,no_run
//! use embedded_graphics::{
//!     mono_font::{ascii::FONT_6X10, MonoTextStyle},
//!     prelude::*,
//!     primitives::{Circle, PrimitiveStyle},
//!     text::Text,
//! };
//! use ssd1306::{Builder, Color, Dimensions, Display, GraphicDisplay};
//! # use core::convert::Infallible;
//! # #[derive(Debug)]
//! # struct MockInterface;
//! # impl ssd1306::DisplayInterface for MockInterface {
//! #     type Error = Infallible;
//! #     fn send_commands(&mut self, _commands: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn send_data(&mut self, _data: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # let config = Builder::new()
//! #     .dimensions(Dimensions::new(64, 128).unwrap())
//! #     .build()
//! #     .unwrap();
//! # let driver = Display::new(MockInterface, config);
//! // Create graphic display with a backing buffer
//! let mut display = GraphicDisplay::new(driver, [0u8; 1024]);
//! display.init().unwrap();
//!
//! // Draw shapes
//! Circle::new(Point::new(20, 20), 24)
//!     .into_styled(PrimitiveStyle::with_stroke(Color::On, 1))
//!     .draw(&mut display)
//!     .unwrap();
//!
//! // Draw text
//! Text::new("Hello!", Point::new(60, 32), MonoTextStyle::new(&FONT_6X10, Color::On))
//!     .draw(&mut display)
//!     .unwrap();
//!
//! // Push the buffer to the panel
//! display.flush().unwrap();
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::color::Color;
use crate::config::Rotation;
use crate::display::Display;
use crate::error::Error;
use crate::framebuffer::Framebuffer;
use crate::interface::DisplayInterface;

type GraphicsResult<I> = core::result::Result<(), Error<I>>;

/// Display with an attached framebuffer
///
/// This wrapper combines a [`Display`] with a [`Framebuffer`] sized for it
/// and provides embedded-graphics support. Drawing operations change only
/// the buffer; [`flush`](Self::flush) pushes it to the panel.
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `B` - Buffer type implementing `AsRef<[u8]> + AsMut<[u8]>`
pub struct GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// The underlying display driver
    display: Display<I>,
    /// The pixel buffer mirrored to the panel on flush
    framebuffer: Framebuffer<B>,
}

impl<I, B> GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    /// Create a new GraphicDisplay
    ///
    /// The framebuffer takes its dimensions and initial rotation from the
    /// display's configuration.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is smaller than
    /// `display.dimensions().buffer_size()` bytes. The required size is
    /// always calculated from physical (unrotated) dimensions regardless of
    /// rotation setting.
    pub fn new(display: Display<I>, buffer: B) -> Self {
        let framebuffer = Framebuffer::new(
            buffer,
            display.dimensions(),
            display.config().rotation,
        );
        Self {
            display,
            framebuffer,
        }
    }

    /// Try to create a new GraphicDisplay, returning an error if the buffer
    /// is too small
    ///
    /// This is the fallible version of [`new`](Self::new).
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if the buffer is smaller than the
    /// required size based on physical (unrotated) dimensions.
    pub fn try_new(display: Display<I>, buffer: B) -> Result<Self, Error<I>> {
        let required = display.dimensions().buffer_size();
        let provided = buffer.as_ref().len();
        if provided < required {
            return Err(Error::BufferTooSmall { required, provided });
        }
        Ok(Self::new(display, buffer))
    }

    /// Initialize the controller
    ///
    /// See [`Display::init`].
    pub fn init(&mut self) -> GraphicsResult<I> {
        self.display.init()
    }

    /// Push the framebuffer to the panel
    pub fn flush(&mut self) -> GraphicsResult<I> {
        let Self {
            display,
            framebuffer,
        } = self;
        display.flush(framebuffer.as_bytes())
    }

    /// Set, clear, or invert a single pixel in the buffer
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        self.framebuffer.set_pixel(x, y, color);
    }

    /// Fill the buffer with a draw operation
    pub fn clear_buffer(&mut self, color: Color) {
        self.framebuffer.fill(color);
    }

    /// Change the drawing rotation
    ///
    /// Affects subsequent drawing operations only.
    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.framebuffer.set_rotation(rotation);
    }

    /// Access the underlying Display
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Access the underlying Display mutably
    ///
    /// This can be used for immediate-mode operations such as
    /// [`set_contrast`](Display::set_contrast) or scrolling.
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Access the framebuffer
    pub fn framebuffer(&self) -> &Framebuffer<B> {
        &self.framebuffer
    }

    /// Access the framebuffer mutably
    pub fn framebuffer_mut(&mut self) -> &mut Framebuffer<B> {
        &mut self.framebuffer
    }

    /// Consume the wrapper and return the display and backing storage
    pub fn release(self) -> (Display<I>, B) {
        (self.display, self.framebuffer.into_inner())
    }
}

impl<I, B> DrawTarget for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.framebuffer.set_pixel(x as u32, y as u32, color);
        }

        Ok(())
    }
}

impl<I, B> OriginDimensions for GraphicDisplay<I, B>
where
    I: DisplayInterface,
    B: AsRef<[u8]> + AsMut<[u8]>,
{
    fn size(&self) -> Size {
        Size::new(self.framebuffer.width(), self.framebuffer.height())
    }
}
