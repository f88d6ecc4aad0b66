//! SSD1306 command definitions
//!
//! This module defines the command bytes used to control the SSD1306
//! monochrome OLED display controller. The SSD1306 is driven over a two-wire
//! I2C bus; every transfer begins with a control byte that selects whether
//! the following bytes are interpreted as commands or as display RAM data.
//!
//! ## Transfer structure
//!
//! All transfers follow the pattern:
//! 1. Start condition, address + write bit
//! 2. Control byte ([`COMMAND_STREAM`] or [`DATA_STREAM`])
//! 3. Command or data bytes
//! 4. Stop condition
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306::{command, DisplayInterface, I2cInterface};
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
//! # let mut interface = I2cInterface::with_default_address(MockI2c);
//! # let pixel_data = [0xFFu8; 4];
//! // Turn the panel off
//! let _ = interface.send_commands(&[command::DISPLAY_OFF]);
//!
//! // Write pixel data to display RAM
//! let _ = interface.send_data(&pixel_data);
//! ```

// Control bytes

/// Control byte selecting a command stream (0x00)
///
/// Every byte that follows in the same transfer is a command byte.
pub const COMMAND_STREAM: u8 = 0x00;

/// Control byte selecting a data stream (0x40)
///
/// Every byte that follows in the same transfer is written to display RAM.
pub const DATA_STREAM: u8 = 0x40;

/// Control byte prefixing a single command byte (0x80)
///
/// Alternative framing where each command byte carries its own control byte.
/// The driver uses [`COMMAND_STREAM`] framing instead.
pub const COMMAND_SINGLE: u8 = 0x80;

// Fundamental commands

/// Set contrast command (0x81)
///
/// Requires 1 byte: contrast level, 0x00 (dimmest) to 0xFF.
pub const SET_CONTRAST: u8 = 0x81;

/// Resume display from RAM contents command (0xA4)
///
/// Normal operation; pixel output follows display RAM.
pub const DISPLAY_ALL_ON_RESUME: u8 = 0xA4;

/// Entire display on command (0xA5)
///
/// Lights every pixel regardless of RAM contents. Useful as a lamp test.
pub const DISPLAY_ALL_ON: u8 = 0xA5;

/// Normal (non-inverted) display command (0xA6)
///
/// A RAM bit of 1 lights the pixel.
pub const NORMAL_DISPLAY: u8 = 0xA6;

/// Inverted display command (0xA7)
///
/// A RAM bit of 0 lights the pixel. Takes effect immediately, RAM is
/// unchanged.
pub const INVERT_DISPLAY: u8 = 0xA7;

/// Display off (sleep) command (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on command (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

// Addressing commands

/// Set memory addressing mode command (0x20)
///
/// Requires 1 byte: 0x00 = horizontal, 0x01 = vertical, 0x02 = page.
/// The driver uses horizontal mode so a full framebuffer can be streamed in
/// one transfer with automatic column/page wrap.
pub const MEMORY_MODE: u8 = 0x20;

/// Set column address range command (0x21)
///
/// Horizontal/vertical mode only. Requires 2 bytes: start column, end column.
pub const COLUMN_ADDR: u8 = 0x21;

/// Set page address range command (0x22)
///
/// Horizontal/vertical mode only. Requires 2 bytes: start page, end page.
/// A page is a band of 8 pixel rows.
pub const PAGE_ADDR: u8 = 0x22;

/// Set lower column start address nibble command (0x00, page mode)
pub const SET_LOW_COLUMN: u8 = 0x00;

/// Set higher column start address nibble command (0x10, page mode)
pub const SET_HIGH_COLUMN: u8 = 0x10;

// Hardware configuration commands

/// Set display start line command (0x40)
///
/// OR the start line (0..=63) into the low 6 bits.
pub const SET_START_LINE: u8 = 0x40;

/// Segment remap command (0xA0)
///
/// OR 0x01 to map column address 127 to SEG0, mirroring the display
/// horizontally.
pub const SEGMENT_REMAP: u8 = 0xA0;

/// Set multiplex ratio command (0xA8)
///
/// Requires 1 byte: number of rows driven minus one.
pub const SET_MULTIPLEX: u8 = 0xA8;

/// COM scan ascending command (0xC0)
///
/// Scan from COM0 to COM[N-1].
pub const COM_SCAN_INC: u8 = 0xC0;

/// COM scan descending command (0xC8)
///
/// Scan from COM[N-1] to COM0, mirroring the display vertically.
pub const COM_SCAN_DEC: u8 = 0xC8;

/// Set display offset command (0xD3)
///
/// Requires 1 byte: vertical COM shift, 0..=63.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;

/// Set COM pins hardware configuration command (0xDA)
///
/// Requires 1 byte; the value depends on how the panel wires its COM lines
/// (0x02 sequential, 0x12 alternative). Keyed by panel variant in
/// [`crate::config`].
pub const SET_COM_PINS: u8 = 0xDA;

/// No-operation command (0xE3)
pub const NOP: u8 = 0xE3;

// Timing and driving scheme commands

/// Set display clock divide ratio / oscillator frequency command (0xD5)
///
/// Requires 1 byte: low nibble divide ratio, high nibble oscillator
/// frequency. The datasheet-suggested value is 0x80.
pub const SET_CLOCK_DIVIDE: u8 = 0xD5;

/// Set pre-charge period command (0xD9)
///
/// Requires 1 byte: phase 1 and phase 2 periods in DCLKs. Depends on the
/// panel's supply configuration, see [`crate::config::VccSource`].
pub const SET_PRECHARGE: u8 = 0xD9;

/// Set VCOMH deselect level command (0xDB)
///
/// Requires 1 byte: 0x00, 0x20, 0x30, or 0x40.
pub const SET_VCOM_DESELECT: u8 = 0xDB;

// Charge pump command

/// Charge pump setting command (0x8D)
///
/// Requires 1 byte: 0x14 enables the internal charge pump (panel powered
/// from the 3.3V rail), 0x10 disables it (external panel supply).
pub const CHARGE_PUMP: u8 = 0x8D;

// Scrolling commands

/// Continuous right horizontal scroll setup command (0x26)
///
/// Requires 6 bytes: dummy 0x00, start page, frame interval, end page,
/// dummy 0x00, dummy 0xFF. Has no effect until [`ACTIVATE_SCROLL`].
pub const SCROLL_RIGHT: u8 = 0x26;

/// Continuous left horizontal scroll setup command (0x27)
///
/// Same parameter layout as [`SCROLL_RIGHT`].
pub const SCROLL_LEFT: u8 = 0x27;

/// Continuous vertical and right horizontal scroll setup command (0x29)
///
/// Requires 5 bytes: dummy 0x00, start page, frame interval, end page,
/// vertical scroll offset in rows per frame.
pub const SCROLL_VERTICAL_RIGHT: u8 = 0x29;

/// Continuous vertical and left horizontal scroll setup command (0x2A)
///
/// Same parameter layout as [`SCROLL_VERTICAL_RIGHT`].
pub const SCROLL_VERTICAL_LEFT: u8 = 0x2A;

/// Deactivate scroll command (0x2E)
///
/// Stops any scroll in progress. RAM must be rewritten afterwards; the
/// controller does not restore pre-scroll contents.
pub const DEACTIVATE_SCROLL: u8 = 0x2E;

/// Activate scroll command (0x2F)
///
/// Starts the most recently configured scroll.
pub const ACTIVATE_SCROLL: u8 = 0x2F;

/// Set vertical scroll area command (0xA3)
///
/// Requires 2 bytes: number of fixed top rows, number of scrolling rows.
pub const SET_VERTICAL_SCROLL_AREA: u8 = 0xA3;
