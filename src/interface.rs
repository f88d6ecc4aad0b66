//! Hardware interface abstraction
//!
//! This module provides the [`DisplayInterface`] trait and the
//! [`I2cInterface`] struct for communicating with the SSD1306 controller
//! over I2C.
//!
//! ## Hardware Requirements
//!
//! The SSD1306 in I2C mode requires only the two bus lines (SCL + SDA). The
//! controller distinguishes command bytes from display RAM data by a control
//! byte at the start of each transfer: `0x00` selects the command stream,
//! `0x40` the data stream.
//!
//! ## Example
//!
//! ```rust,no_run
//! use ssd1306::{DisplayInterface, I2cInterface};
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
//! // Create interface on the default address (0x3C)
//! let mut interface = I2cInterface::with_default_address(MockI2c);
//!
//! // Send commands
//! let _ = interface.send_commands(&[0xAE]); // Display off
//!
//! // Send display RAM data
//! let _ = interface.send_data(&[0xFF, 0x00, 0xFF]);
//! ```

use core::fmt::Debug;
use embedded_hal::i2c::{I2c, Operation};

use crate::command::{COMMAND_STREAM, DATA_STREAM};

/// Trait for hardware interface to the SSD1306 controller
///
/// This trait abstracts over the transport, allowing the
/// [`Display`](crate::display::Display) to work with any implementation that
/// can deliver the two byte-stream types the controller understands.
///
/// ## Implementing
///
/// For most cases, use the provided [`I2cInterface`] struct. Implement this
/// trait on your own type for other transports (e.g. 4-wire SPI with a
/// data/command pin, or a bit-banged bus).
pub trait DisplayInterface {
    /// Error type for interface operations
    ///
    /// Must implement [`Debug`] for error reporting.
    type Error: Debug;

    /// Send a command stream to the controller
    ///
    /// The bytes must reach the controller in a single bus transaction,
    /// prefixed by whatever framing marks them as register configuration
    /// rather than display data.
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication fails.
    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error>;

    /// Send a data stream (display RAM contents) to the controller
    ///
    /// # Errors
    ///
    /// Returns an error if bus communication fails.
    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error>;
}

/// Default I2C address (0x3C, SA0 low)
///
/// Used by 128x32 modules and most bare panels.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Alternate I2C address (0x3D, SA0 high)
pub const ALTERNATE_ADDRESS: u8 = 0x3D;

/// I2C interface implementation for the SSD1306
///
/// Implements [`DisplayInterface`] for embedded-hal v1.0 I2C buses. Each
/// stream is issued as one bus transaction of two writes — the control byte
/// followed by the payload — so the payload never needs to be copied into a
/// prefixed scratch buffer, and the transaction is closed on every exit path
/// including transport errors.
///
/// ## Type Parameters
///
/// * `I2C` - Bus implementing [`I2c`]
pub struct I2cInterface<I2C> {
    /// I2C bus
    i2c: I2C,
    /// 7-bit device address
    address: u8,
}

impl<I2C> I2cInterface<I2C>
where
    I2C: I2c,
{
    /// Create a new interface on the given 7-bit address
    ///
    /// # Arguments
    ///
    /// * `i2c` - I2C bus (must implement [`I2c`])
    /// * `address` - device address, typically [`DEFAULT_ADDRESS`] or
    ///   [`ALTERNATE_ADDRESS`] depending on the SA0 strap
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Create a new interface on [`DEFAULT_ADDRESS`]
    pub fn with_default_address(i2c: I2C) -> Self {
        Self::new(i2c, DEFAULT_ADDRESS)
    }

    /// Get the configured device address
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn send_stream(&mut self, control: u8, payload: &[u8]) -> Result<(), I2C::Error> {
        // Adjacent writes coalesce into one transfer without a repeated
        // start, so the controller sees [control, payload...].
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[control]), Operation::Write(payload)],
        )
    }
}

impl<I2C> DisplayInterface for I2cInterface<I2C>
where
    I2C: I2c,
    I2C::Error: Debug,
{
    type Error = I2C::Error;

    fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
        self.send_stream(COMMAND_STREAM, commands)
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.send_stream(DATA_STREAM, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    /// Records each transaction as the flattened bytes the controller
    /// would see on the wire.
    #[derive(Debug, Default)]
    struct RecordingI2c {
        transfers: Vec<(u8, Vec<u8>)>,
    }

    impl embedded_hal::i2c::ErrorType for RecordingI2c {
        type Error = core::convert::Infallible;
    }

    impl I2c for RecordingI2c {
        fn transaction(
            &mut self,
            address: u8,
            operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            let mut bytes = Vec::new();
            for op in operations.iter() {
                if let Operation::Write(data) = op {
                    bytes.extend_from_slice(data);
                }
            }
            self.transfers.push((address, bytes));
            Ok(())
        }
    }

    #[test]
    fn test_commands_framed_with_command_control_byte() {
        let mut interface = I2cInterface::with_default_address(RecordingI2c::default());
        interface.send_commands(&[0xAE, 0xA8, 0x3F]).unwrap();

        let (address, bytes) = &interface.i2c.transfers[0];
        assert_eq!(*address, DEFAULT_ADDRESS);
        assert_eq!(bytes.as_slice(), &[0x00, 0xAE, 0xA8, 0x3F]);
    }

    #[test]
    fn test_data_framed_with_data_control_byte() {
        let mut interface = I2cInterface::with_default_address(RecordingI2c::default());
        interface.send_data(&[0x12, 0x34]).unwrap();

        let (_, bytes) = &interface.i2c.transfers[0];
        assert_eq!(bytes.as_slice(), &[0x40, 0x12, 0x34]);
    }

    #[test]
    fn test_each_stream_is_one_transaction() {
        let mut interface = I2cInterface::with_default_address(RecordingI2c::default());
        interface.send_commands(&[0xAE]).unwrap();
        interface.send_data(&[0x55; 64]).unwrap();
        assert_eq!(interface.i2c.transfers.len(), 2);
        assert_eq!(interface.i2c.transfers[1].1.len(), 65);
    }

    #[test]
    fn test_alternate_address() {
        let mut interface = I2cInterface::new(RecordingI2c::default(), ALTERNATE_ADDRESS);
        assert_eq!(interface.address(), 0x3D);
        interface.send_commands(&[0xAF]).unwrap();
        assert_eq!(interface.i2c.transfers[0].0, 0x3D);
    }
}
